// Copyright lowRISC contributors.
// Licensed under the Apache License, Version 2.0, see LICENSE for details.
// SPDX-License-Identifier: Apache-2.0

//! Secure random values from the operating system.
//!
//! These are the functions of [`random`], each drawing from a fresh
//! [`ring::csrng::Csrng`]. No state survives a call, so they may be used
//! from any number of threads at once.
//!
//! Requires the `ring` and `std` feature flags to be enabled.

use core::convert::TryInto;

use alloc::string::String;
use alloc::vec::Vec;

use crate::crypto::ring;
use crate::random::Alphabet;
use crate::random::Error;
use crate::Result;

#[cfg(doc)]
use crate::random;

/// See [`random::binary()`].
pub fn binary<L: TryInto<usize>>(length: L) -> Result<Vec<u8>, Error> {
    super::binary(&mut ring::csrng::Csrng::new(), length)
}

/// See [`random::fill()`].
pub fn fill(buf: &mut [u8]) -> Result<(), Error> {
    super::fill(&mut ring::csrng::Csrng::new(), buf)
}

/// See [`random::int()`].
pub fn int<Min, Max>(min: Min, max: Max) -> Result<i64, Error>
where
    Min: TryInto<i64>,
    Max: TryInto<i64>,
{
    super::int(&mut ring::csrng::Csrng::new(), min, max)
}

/// See [`random::hex()`].
pub fn hex<L: TryInto<usize>>(length: L) -> Result<String, Error> {
    super::hex(&mut ring::csrng::Csrng::new(), length)
}

/// See [`random::url_safe()`].
pub fn url_safe<L: TryInto<usize>>(length: L) -> Result<String, Error> {
    super::url_safe(&mut ring::csrng::Csrng::new(), length)
}

/// See [`random::url_safe_with()`].
pub fn url_safe_with<L: TryInto<usize>>(
    length: L,
    alphabet: &Alphabet,
) -> Result<String, Error> {
    super::url_safe_with(&mut ring::csrng::Csrng::new(), length, alphabet)
}

/// See [`random::url_safe_uniform()`].
pub fn url_safe_uniform<L: TryInto<usize>>(
    length: L,
) -> Result<String, Error> {
    super::url_safe_uniform(&mut ring::csrng::Csrng::new(), length)
}
