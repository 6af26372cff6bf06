// Copyright lowRISC contributors.
// Licensed under the Apache License, Version 2.0, see LICENSE for details.
// SPDX-License-Identifier: Apache-2.0

//! Test data of all kinds, ranging from known-answer encodings to
//! statistical thresholds.

pub mod chi_square;
pub mod hex;
pub mod url_safe;
