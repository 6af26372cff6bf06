// Copyright lowRISC contributors.
// Licensed under the Apache License, Version 2.0, see LICENSE for details.
// SPDX-License-Identifier: Apache-2.0

//! Pluggable sources of secure randomness.
//!
//! `secrand` never generates randomness on its own. This module provides the
//! object-safe [`csrng::Csrng`] trait that abstracts over a secure random
//! byte source, which callers may implement for hardware or certification
//! needs that the operating system cannot fulfill.
//!
//! A software implementation backed by the operating system is provided
//! under the [`ring` module], based on the [`ring`] crate. Its presence is
//! controlled by the `ring` and `std` feature flags.
//!
//! [`ring` module]: ring/index.html

pub mod csrng;

#[cfg(feature = "ring")]
pub mod ring;
