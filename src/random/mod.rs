// Copyright lowRISC contributors.
// Licensed under the Apache License, Version 2.0, see LICENSE for details.
// SPDX-License-Identifier: Apache-2.0

//! Secure random values.
//!
//! Every function in this module draws from a caller-supplied
//! [`Csrng`] and is otherwise stateless: there is no caching, no retrying,
//! and nothing is shared between calls. On failure, no partial output is
//! ever returned.
//!
//! Lengths may be given as any integer type; zero, negative values, and
//! values that do not fit in a `usize` are rejected with
//! [`Error::InvalidLength`].
//!
//! The [`system`] module offers the same functions bound to the operating
//! system's random source.

use core::convert::TryInto;
use core::fmt;

use alloc::vec::Vec;

use crate::crypto::csrng;
use crate::crypto::csrng::Csrng;
use crate::crypto::csrng::CsrngExt as _;
use crate::Result;

mod alphabet;
mod hex;
mod url_safe;

#[cfg(all(feature = "ring", feature = "std"))]
pub mod system;

pub use alphabet::Alphabet;
pub use self::hex::encode_hex;
pub use self::hex::hex;
pub use url_safe::url_safe;
pub use url_safe::url_safe_uniform;
pub use url_safe::url_safe_with;

/// An error returned while generating a random value.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum Error {
    /// Indicates that a length was not a positive integer.
    InvalidLength,

    /// Indicates that the lower bound of a range was not a representable
    /// integer.
    InvalidMin,

    /// Indicates that the upper bound of a range was not a representable
    /// integer, or was smaller than the lower bound.
    InvalidMax,

    /// Indicates that an alphabet does not have between 65 and 127 symbols.
    UnexpectedAlphabetSize,

    /// Indicates that an alphabet contains a non-ASCII or repeated symbol.
    InvalidAlphabet,

    /// Indicates that the random source failed in a way that may be
    /// recoverable by retrying.
    SecureSourceTransientFailure,

    /// Indicates that no secure random source is available at all.
    ///
    /// Callers should treat this as fatal to any security-sensitive
    /// operation.
    SecureSourceUnavailable,
}

impl Error {
    /// Returns whether repeating the failed call could succeed.
    pub fn is_transient(self) -> bool {
        self == Self::SecureSourceTransientFailure
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let msg = match self {
            Self::InvalidLength => "length must be a positive integer",
            Self::InvalidMin => "minimum is not a valid integer",
            Self::InvalidMax => {
                "maximum is not a valid integer at or above the minimum"
            }
            Self::UnexpectedAlphabetSize => {
                "alphabet must have 65 to 127 symbols"
            }
            Self::InvalidAlphabet => "alphabet symbols must be unique ASCII",
            Self::SecureSourceTransientFailure => "secure random source failed",
            Self::SecureSourceUnavailable => {
                "no secure random source available"
            }
        };
        f.write_str(msg)
    }
}

impl From<csrng::Error> for Error {
    fn from(e: csrng::Error) -> Self {
        match e {
            csrng::Error::Unavailable => Self::SecureSourceUnavailable,
            csrng::Error::Transient => Self::SecureSourceTransientFailure,
        }
    }
}

debug_from!(Error => csrng::Error);

/// Converts a caller-provided length into a `usize`, rejecting anything that
/// is not strictly positive.
pub(crate) fn check_length<L>(length: L) -> Result<usize, Error>
where
    L: TryInto<usize>,
{
    let len: core::result::Result<usize, _> = length.try_into();
    match len {
        Ok(len) if len > 0 => Ok(len),
        _ => Err(fail!(Error::InvalidLength)),
    }
}

/// Generates `length` secure random bytes.
///
/// A length too large to allocate is rejected with [`Error::InvalidLength`].
pub fn binary<C, L>(rng: &mut C, length: L) -> Result<Vec<u8>, Error>
where
    C: Csrng + ?Sized,
    L: TryInto<usize>,
{
    let len = check_length(length)?;
    let mut buf = Vec::new();
    buf.try_reserve_exact(len)
        .map_err(|_| fail!(Error::InvalidLength))?;
    buf.resize(len, 0);
    rng.fill(&mut buf)?;
    trace!("generated {} random bytes", len);
    Ok(buf)
}

/// Fills `buf` with secure random bytes.
///
/// This is the allocation-free counterpart of [`binary()`]. An empty `buf`
/// is rejected with [`Error::InvalidLength`].
pub fn fill<C>(rng: &mut C, buf: &mut [u8]) -> Result<(), Error>
where
    C: Csrng + ?Sized,
{
    check!(!buf.is_empty(), Error::InvalidLength);
    rng.fill(buf)?;
    trace!("filled {} random bytes", buf.len());
    Ok(())
}

/// Generates a uniformly distributed integer in the inclusive range
/// `min..=max`.
///
/// `min` is validated before `max`. A bound that does not fit in an `i64`
/// is rejected with [`Error::InvalidMin`] or [`Error::InvalidMax`], as is a
/// `max` below `min`. If `min == max`, no randomness is consumed.
pub fn int<C, Min, Max>(rng: &mut C, min: Min, max: Max) -> Result<i64, Error>
where
    C: Csrng + ?Sized,
    Min: TryInto<i64>,
    Max: TryInto<i64>,
{
    let min: i64 = min.try_into().map_err(|_| fail!(Error::InvalidMin))?;
    let max: i64 = max.try_into().map_err(|_| fail!(Error::InvalidMax))?;
    check!(min <= max, Error::InvalidMax);

    // The distance between the bounds always fits in a u64, even when it
    // does not fit in an i64.
    let span = max.wrapping_sub(min) as u64;
    if span == 0 {
        return Ok(min);
    }

    let offset = rng.uniform_u64(span)?;
    Ok(min.wrapping_add(offset as i64))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::csrng::fake;

    #[test]
    fn binary_returns_requested_bytes() {
        let mut rng = fake::Csrng::new(&[1, 2, 3, 4, 5]);
        assert_eq!(binary(&mut rng, 3).unwrap(), vec![1, 2, 3]);
        assert_eq!(binary(&mut rng, 2u8).unwrap(), vec![4, 5]);
    }

    #[test]
    fn binary_rejects_bad_lengths() {
        let mut rng = fake::Csrng::new(&[]);
        for e in [
            binary(&mut rng, 0).unwrap_err(),
            binary(&mut rng, -5).unwrap_err(),
            binary(&mut rng, i64::MIN).unwrap_err(),
            binary(&mut rng, u128::MAX).unwrap_err(),
            binary(&mut rng, usize::MAX).unwrap_err(),
        ]
        .iter()
        {
            assert_eq!(e.into_inner(), Error::InvalidLength);
        }
        assert_eq!(rng.drawn(), 0);
    }

    #[test]
    fn binary_translates_source_errors() {
        let mut rng = fake::Csrng::failing(csrng::Error::Unavailable);
        let e = binary(&mut rng, 16).unwrap_err();
        assert_eq!(e.into_inner(), Error::SecureSourceUnavailable);
        assert!(!e.into_inner().is_transient());

        let mut rng = fake::Csrng::failing(csrng::Error::Transient);
        let e = binary(&mut rng, 16).unwrap_err();
        assert_eq!(e.into_inner(), Error::SecureSourceTransientFailure);
        assert!(e.into_inner().is_transient());
    }

    #[test]
    fn binary_through_trait_object() {
        let mut rng = fake::Csrng::new(&[9, 8]);
        let rng: &mut dyn Csrng = &mut rng;
        assert_eq!(binary(rng, 2).unwrap(), vec![9, 8]);
    }

    #[test]
    fn fill_in_place() {
        let mut rng = fake::Csrng::new(&[7, 7, 7, 7]);
        let mut buf = [0; 4];
        fill(&mut rng, &mut buf).unwrap();
        assert_eq!(buf, [7; 4]);

        let e = fill(&mut rng, &mut []).unwrap_err();
        assert_eq!(e.into_inner(), Error::InvalidLength);
    }

    #[test]
    fn int_within_bounds() {
        // 7 % 6 == 1.
        let mut rng = fake::Csrng::new(&7u64.to_le_bytes());
        assert_eq!(int(&mut rng, 10, 15).unwrap(), 11);
    }

    #[test]
    fn int_negative_bounds() {
        let mut rng = fake::Csrng::new(&3u64.to_le_bytes());
        assert_eq!(int(&mut rng, -10, -1).unwrap(), -7);
    }

    #[test]
    fn int_full_range() {
        let mut script = Vec::new();
        script.extend_from_slice(&0u64.to_le_bytes());
        script.extend_from_slice(&u64::MAX.to_le_bytes());
        let mut rng = fake::Csrng::new(&script);
        assert_eq!(int(&mut rng, i64::MIN, i64::MAX).unwrap(), i64::MIN);
        assert_eq!(int(&mut rng, i64::MIN, i64::MAX).unwrap(), i64::MAX);
    }

    #[test]
    fn int_degenerate_range_draws_nothing() {
        let mut rng = fake::Csrng::new(&[]);
        assert_eq!(int(&mut rng, 42, 42).unwrap(), 42);
        assert_eq!(rng.drawn(), 0);
    }

    #[test]
    fn int_rejects_bad_bounds() {
        let mut rng = fake::Csrng::new(&[]);

        let e = int(&mut rng, u64::MAX, 5).unwrap_err();
        assert_eq!(e.into_inner(), Error::InvalidMin);

        let e = int(&mut rng, 1, u64::MAX).unwrap_err();
        assert_eq!(e.into_inner(), Error::InvalidMax);

        // Min is checked first.
        let e = int(&mut rng, u64::MAX, u64::MAX).unwrap_err();
        assert_eq!(e.into_inner(), Error::InvalidMin);

        let e = int(&mut rng, 6, 5).unwrap_err();
        assert_eq!(e.into_inner(), Error::InvalidMax);

        assert_eq!(rng.drawn(), 0);
    }

    #[test]
    fn int_translates_source_errors() {
        let mut rng = fake::Csrng::failing(csrng::Error::Transient);
        let e = int(&mut rng, 0, 100).unwrap_err();
        assert_eq!(e.into_inner(), Error::SecureSourceTransientFailure);
    }

    #[test]
    #[cfg(feature = "serde")]
    fn errors_serialize_by_name() {
        let json = serde_json::to_string(&Error::InvalidLength).unwrap();
        assert_eq!(json, r#""InvalidLength""#);
        let e: Error =
            serde_json::from_str(r#""SecureSourceUnavailable""#).unwrap();
        assert_eq!(e, Error::SecureSourceUnavailable);
    }
}
