// Copyright lowRISC contributors.
// Licensed under the Apache License, Version 2.0, see LICENSE for details.
// SPDX-License-Identifier: Apache-2.0

//! Cryptographic random numbers.
//!
//! In general, users of this module should be pulling in [`CsrngExt`],
//! which adds a bounded-integer primitive to [`Csrng`] but which would
//! otherwise make it object-unsafe.

use core::fmt;

use byteorder::ByteOrder as _;
use byteorder::LittleEndian;

use crate::Result;

/// An error returned by a CSRNG.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum Error {
    /// Indicates that the platform cannot produce secure randomness at all.
    ///
    /// This is not recoverable; security-sensitive work should be aborted.
    Unavailable,

    /// Indicates that the source failed for a reason that may go away if the
    /// request is repeated.
    Transient,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Unavailable => {
                f.write_str("no secure random source available")
            }
            Self::Transient => f.write_str("secure random source failed"),
        }
    }
}

/// A cryptographically-secure random number generator.
///
/// The sole purpose of this type is to fill buffers with random bytes.
///
/// `Csrng`s must already be seeded with sufficient entropy; creating new
/// random number generators is beyond the scope of this trait.
pub trait Csrng {
    /// Fills `buf` with random bytes.
    ///
    /// On failure, the contents of `buf` are unspecified and must not be
    /// used.
    fn fill(&mut self, buf: &mut [u8]) -> Result<(), Error>;
}
impl dyn Csrng {} // Ensure object-safe.

/// Helpers for drawing structured values from a [`Csrng`].
#[extend::ext(name = CsrngExt)]
pub impl<C: Csrng + ?Sized> C {
    /// Draws a uniformly distributed integer in the inclusive range
    /// `0..=span`.
    ///
    /// Draws are 64-bit little-endian words; words at or above the largest
    /// multiple of `span + 1` are rejected and redrawn, so the result is
    /// unbiased. At most half of all words are ever rejected.
    ///
    /// Implementers do not need to implement this function themselves.
    fn uniform_u64(&mut self, span: u64) -> Result<u64, Error> {
        let mut buf = [0; 8];
        if span == u64::MAX {
            self.fill(&mut buf)?;
            return Ok(LittleEndian::read_u64(&buf));
        }

        let range = span + 1;
        // 2^64 mod range; words past `u64::MAX - waste` would bias the
        // low residues.
        let waste = (u64::MAX % range + 1) % range;
        let limit = u64::MAX - waste;

        #[cfg(feature = "log")]
        let mut rejected = 0usize;
        loop {
            self.fill(&mut buf)?;
            let word = LittleEndian::read_u64(&buf);
            if word <= limit {
                trace!(
                    "drew uniform value in 0..={} after {} rejections",
                    span,
                    rejected
                );
                return Ok(word % range);
            }
            #[cfg(feature = "log")]
            {
                rejected += 1;
            }
        }
    }
}
