// Copyright lowRISC contributors.
// Licensed under the Apache License, Version 2.0, see LICENSE for details.
// SPDX-License-Identifier: Apache-2.0

//! Implementations of crypto traits, using the [`ring`] crate.
//!
//! Types in this module, much like those in [`crypto`], should not be imported
//! directly. Instead, names such as `ring::csrng::Csrng` should be used
//! instead.
//!
//! The [`ring` warranty disclaimer] applies to this module as well.
//!
//! [`ring` warranty disclaimer]: https://github.com/briansmith/ring/blob/main/README.md

#[cfg(feature = "std")]
pub mod csrng;

#[cfg(doc)]
use crate::crypto;
