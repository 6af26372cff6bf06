// Copyright lowRISC contributors.
// Licensed under the Apache License, Version 2.0, see LICENSE for details.
// SPDX-License-Identifier: Apache-2.0

//! Strings that can appear unescaped in a URI.

use core::convert::TryInto;

use alloc::string::String;

use crate::crypto::csrng::Csrng;
use crate::random::binary;
use crate::random::check_length;
use crate::random::Alphabet;
use crate::random::Error;
use crate::Result;

/// Generates a random string of exactly `length` unreserved URI characters.
///
/// One random byte is drawn per character and mapped with
/// [`Alphabet::fold()`]. The result is slightly biased towards some symbols;
/// see [`url_safe_uniform()`] for an unbiased alternative.
pub fn url_safe<C, L>(rng: &mut C, length: L) -> Result<String, Error>
where
    C: Csrng + ?Sized,
    L: TryInto<usize>,
{
    url_safe_with(rng, length, &Alphabet::UNRESERVED)
}

/// Like [`url_safe()`], but drawing symbols from `alphabet`.
pub fn url_safe_with<C, L>(
    rng: &mut C,
    length: L,
    alphabet: &Alphabet,
) -> Result<String, Error>
where
    C: Csrng + ?Sized,
    L: TryInto<usize>,
{
    let bytes = binary(rng, length)?;
    Ok(alphabet.encode_folded(&bytes))
}

/// Generates a random string of exactly `length` unreserved URI characters,
/// with every symbol equally likely.
///
/// Each random byte yields a 7-bit candidate offset; candidates past the end
/// of the alphabet are discarded. Since about half of all candidates are
/// discarded, the amount of randomness consumed varies from call to call.
/// A length too large to allocate is rejected with [`Error::InvalidLength`].
pub fn url_safe_uniform<C, L>(rng: &mut C, length: L) -> Result<String, Error>
where
    C: Csrng + ?Sized,
    L: TryInto<usize>,
{
    let len = check_length(length)?;
    let alphabet = Alphabet::UNRESERVED;

    let mut out = String::new();
    out.try_reserve_exact(len)
        .map_err(|_| fail!(Error::InvalidLength))?;

    #[cfg(feature = "log")]
    let mut rejected = 0usize;
    while out.len() < len {
        let batch = binary(&mut *rng, len - out.len())?;
        out.extend(
            batch
                .into_iter()
                .filter_map(|b| alphabet.get((b >> 1) as usize)),
        );
        // Every byte of the batch that did not become a symbol was rejected.
        #[cfg(feature = "log")]
        {
            rejected += len - out.len();
        }
    }
    trace!(
        "generated {} uniform symbols, rejecting {} candidates",
        len,
        rejected
    );
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::csrng;
    use crate::crypto::csrng::fake;
    use pretty_assertions::assert_eq;
    use testutil::data::url_safe as vectors;

    #[test]
    fn folds_one_byte_per_symbol() {
        for (bytes, expected) in vectors::FOLDED_VECTORS {
            let mut rng = fake::Csrng::new(bytes);
            assert_eq!(url_safe(&mut rng, bytes.len()).unwrap(), *expected);
            assert_eq!(rng.drawn(), bytes.len());
        }
    }

    #[test]
    fn custom_alphabet() {
        let alphabet = Alphabet::new(vectors::SYMBOLS_REVERSED).unwrap();
        let mut rng = fake::Csrng::new(&[0x00, 0x83, 0xff]);
        assert_eq!(url_safe_with(&mut rng, 3, &alphabet).unwrap(), "~ac");
    }

    #[test]
    fn rejects_bad_lengths() {
        let mut rng = fake::Csrng::new(&[]);
        let e = url_safe(&mut rng, 0).unwrap_err();
        assert_eq!(e.into_inner(), Error::InvalidLength);
        let e = url_safe_uniform(&mut rng, -5).unwrap_err();
        assert_eq!(e.into_inner(), Error::InvalidLength);
        let e = url_safe(&mut rng, usize::MAX).unwrap_err();
        assert_eq!(e.into_inner(), Error::InvalidLength);
        let e = url_safe_uniform(&mut rng, usize::MAX).unwrap_err();
        assert_eq!(e.into_inner(), Error::InvalidLength);
        assert_eq!(rng.drawn(), 0);
    }

    #[test]
    fn uniform_redraws_rejected_candidates() {
        // 0xff and 0x84 are past the end of the alphabet.
        let mut rng = fake::Csrng::new(&[0xff, 0x84, 0x00, 0x83]);
        assert_eq!(url_safe_uniform(&mut rng, 2).unwrap(), "a~");
        assert_eq!(rng.drawn(), 4);
    }

    #[test]
    fn uniform_only_draws_what_is_missing() {
        let mut rng = fake::Csrng::new(&[0x02, 0xfe, 0x04, 0x06]);
        assert_eq!(url_safe_uniform(&mut rng, 3).unwrap(), "bcd");
        assert_eq!(rng.drawn(), 4);
    }

    #[test]
    fn passes_source_errors_through() {
        let mut rng = fake::Csrng::failing(csrng::Error::Transient);
        let e = url_safe(&mut rng, 8).unwrap_err();
        assert_eq!(e.into_inner(), Error::SecureSourceTransientFailure);

        let mut rng = fake::Csrng::failing(csrng::Error::Unavailable);
        let e = url_safe_uniform(&mut rng, 8).unwrap_err();
        assert_eq!(e.into_inner(), Error::SecureSourceUnavailable);
    }
}
