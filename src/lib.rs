// Copyright lowRISC contributors.
// Licensed under the Apache License, Version 2.0, see LICENSE for details.
// SPDX-License-Identifier: Apache-2.0

//! `secrand` produces cryptographically secure random values: raw bytes,
//! lowercase hex strings, URL-safe strings and bounded integers.
//!
//! `secrand` does not generate randomness itself. Every value is drawn from
//! a [`crypto::csrng::Csrng`], a pluggable source of secure random bytes; the
//! crate only validates inputs, encodes outputs and translates source
//! failures into a single error taxonomy, [`random::Error`].
//!
//! Most users want the [`random::system`] functions, which draw from the
//! operating system's secure source:
//! ```
//! # #[cfg(all(feature = "std", feature = "ring"))]
//! # fn main() -> Result<(), secrand::Error<secrand::random::Error>> {
//! use secrand::random::system;
//!
//! let token = system::hex(32)?;
//! assert_eq!(token.len(), 32);
//!
//! let die = system::int(1, 6)?;
//! assert!((1..=6).contains(&die));
//! # Ok(())
//! # }
//! # #[cfg(not(all(feature = "std", feature = "ring")))]
//! # fn main() {}
//! ```
//!
//! Integrations that bring their own entropy (a hardware TRNG, for example)
//! implement [`crypto::csrng::Csrng`] and call the generic functions in
//! [`random`] directly.

#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![deny(missing_docs)]
#![deny(unsafe_code)]

extern crate alloc;

#[cfg(feature = "log")]
extern crate log as __raw_log;

#[macro_use]
mod debug;

pub mod crypto;
pub mod random;

pub use debug::Error;

/// A result type whose error is wrapped in a [`secrand::Error`](Error).
pub type Result<T, E> = core::result::Result<T, Error<E>>;
