// Copyright lowRISC contributors.
// Licensed under the Apache License, Version 2.0, see LICENSE for details.
// SPDX-License-Identifier: Apache-2.0

//! Lowercase hex strings.

use core::convert::TryInto;

use alloc::string::String;

use crate::crypto::csrng::Csrng;
use crate::random::binary;
use crate::random::check_length;
use crate::random::Error;
use crate::Result;

/// Encodes `bytes` as lowercase hex, high nibble first.
pub fn encode_hex(bytes: &[u8]) -> String {
    ::hex::encode(bytes)
}

/// Generates a random string of exactly `length` lowercase hex digits.
///
/// The result is a prefix of the hex encoding of `ceil(length / 2)` random
/// bytes; for odd lengths, the low nibble of the last byte is discarded.
/// A length too large to allocate is rejected with [`Error::InvalidLength`].
pub fn hex<C, L>(rng: &mut C, length: L) -> Result<String, Error>
where
    C: Csrng + ?Sized,
    L: TryInto<usize>,
{
    let len = check_length(length)?;
    let bytes = binary(rng, len / 2 + len % 2)?;

    let mut out = encode_hex(&bytes);
    out.truncate(len);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::csrng;
    use crate::crypto::csrng::fake;
    use pretty_assertions::assert_eq;
    use testutil::data::hex as vectors;

    #[test]
    fn encode_known_answers() {
        for (bytes, expected) in vectors::ENCODED {
            assert_eq!(encode_hex(bytes), *expected);
        }
    }

    #[test]
    fn even_length_uses_every_nibble() {
        let mut rng = fake::Csrng::new(&[0xde, 0xad, 0xbe, 0xef]);
        assert_eq!(hex(&mut rng, 8).unwrap(), "deadbeef");
        assert_eq!(rng.drawn(), 4);
    }

    #[test]
    fn odd_length_drops_last_nibble() {
        let mut rng = fake::Csrng::new(&[0xde, 0xad, 0xbe]);
        assert_eq!(hex(&mut rng, 5).unwrap(), "deadb");
        assert_eq!(rng.drawn(), 3);

        let mut rng = fake::Csrng::new(&[0x7f]);
        assert_eq!(hex(&mut rng, 1).unwrap(), "7");
    }

    #[test]
    fn rejects_bad_lengths() {
        let mut rng = fake::Csrng::new(&[]);
        let e = hex(&mut rng, 0).unwrap_err();
        assert_eq!(e.into_inner(), Error::InvalidLength);
        let e = hex(&mut rng, -5).unwrap_err();
        assert_eq!(e.into_inner(), Error::InvalidLength);
        let e = hex(&mut rng, usize::MAX).unwrap_err();
        assert_eq!(e.into_inner(), Error::InvalidLength);
        assert_eq!(rng.drawn(), 0);
    }

    #[test]
    fn passes_source_errors_through() {
        let mut rng = fake::Csrng::failing(csrng::Error::Unavailable);
        let e = hex(&mut rng, 32).unwrap_err();
        assert_eq!(e.into_inner(), Error::SecureSourceUnavailable);
    }
}
