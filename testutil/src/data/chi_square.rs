// Copyright lowRISC contributors.
// Licensed under the Apache License, Version 2.0, see LICENSE for details.
// SPDX-License-Identifier: Apache-2.0

//! Chi-square goodness-of-fit helpers for checking that random output is
//! uniform.
//!
//! Critical values are for a significance level of 0.001, so a correct
//! generator fails a given check about once in a thousand runs.

/// Number of `hex(2)` calls to sample.
pub const HEX_SAMPLES: usize = 10_000;

/// Number of uniform URL-safe symbols to sample: about 1000 per symbol.
pub const URL_SAFE_SAMPLES: usize = 66_000;

/// Critical value for 15 degrees of freedom (16 hex digits).
pub const CRITICAL_DF15: f64 = 37.697;

/// Critical value for 65 degrees of freedom (66 unreserved symbols).
pub const CRITICAL_DF65: f64 = 105.988;

/// Computes Pearson's chi-square statistic for `counts` against a uniform
/// expectation.
pub fn statistic(counts: &[u64]) -> f64 {
    let total: u64 = counts.iter().sum();
    let expected = total as f64 / counts.len() as f64;
    counts
        .iter()
        .map(|&c| {
            let d = c as f64 - expected;
            d * d / expected
        })
        .sum()
}
