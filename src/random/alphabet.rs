// Copyright lowRISC contributors.
// Licensed under the Apache License, Version 2.0, see LICENSE for details.
// SPDX-License-Identifier: Apache-2.0

//! Symbol alphabets for random strings.

use alloc::string::String;

use crate::random::Error;
use crate::Result;

/// The smallest alphabet that folding can address: one symbol past a full
/// 6-bit range.
const MIN_SYMBOLS: usize = 65;

/// One past the largest alphabet a 7-bit offset can address.
const MAX_SYMBOLS: usize = 128;

/// An ordered set of between 65 and 127 ASCII symbols.
///
/// Random strings are built by mapping each random byte to an index into an
/// alphabet. The size bounds are what make [`Alphabet::fold()`] total: a
/// 7-bit offset past the end of the alphabet, shifted down one more bit,
/// always lands on a valid 6-bit index.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Alphabet {
    symbols: &'static [u8],
}

impl Alphabet {
    /// The unreserved URI characters of RFC 3986, section 2.3:
    /// `a-z`, `A-Z`, `0-9`, `-`, `.`, `_` and `~`.
    pub const UNRESERVED: Self = Self {
        symbols: b"abcdefghijklmnopqrstuvwxyz\
                   ABCDEFGHIJKLMNOPQRSTUVWXYZ\
                   0123456789\
                   -._~",
    };

    /// Creates a new alphabet out of `symbols`.
    ///
    /// Returns [`Error::UnexpectedAlphabetSize`] if there are fewer than 65 or
    /// more than 127 symbols, and [`Error::InvalidAlphabet`] if any symbol is
    /// not ASCII or appears twice.
    pub fn new(symbols: &'static [u8]) -> Result<Self, Error> {
        check!(
            (MIN_SYMBOLS..MAX_SYMBOLS).contains(&symbols.len()),
            Error::UnexpectedAlphabetSize
        );

        let mut seen = 0u128;
        for &b in symbols {
            check!(b.is_ascii(), Error::InvalidAlphabet);
            let bit = 1u128 << b;
            check!(seen & bit == 0, Error::InvalidAlphabet);
            seen |= bit;
        }

        Ok(Self { symbols })
    }

    /// Returns the number of symbols in this alphabet.
    pub fn size(&self) -> usize {
        self.symbols.len()
    }

    /// Returns the symbols of this alphabet, in order.
    pub fn as_bytes(&self) -> &'static [u8] {
        self.symbols
    }

    /// Returns whether `c` is a symbol of this alphabet.
    pub fn contains(&self, c: char) -> bool {
        c.is_ascii() && self.symbols.contains(&(c as u8))
    }

    /// Maps a random byte onto a symbol by folding.
    ///
    /// The low bit of `byte` is dropped, giving a 7-bit offset. If that is
    /// past the end of the alphabet, one more bit is dropped.
    ///
    /// Folding does not produce a uniform distribution: symbols whose index
    /// can be reached both directly and by folding come up more often than
    /// the others.
    pub fn fold(&self, byte: u8) -> char {
        let max_offset = self.symbols.len() - 1;
        let mut offset = (byte >> 1) as usize;
        if offset > max_offset {
            offset >>= 1;
        }
        self.symbols[offset] as char
    }

    /// Returns the symbol at `offset`, if `offset` is within the alphabet.
    ///
    /// This is the rejection-sampling counterpart of [`Alphabet::fold()`].
    pub fn get(&self, offset: usize) -> Option<char> {
        self.symbols.get(offset).map(|&b| b as char)
    }

    /// Encodes every byte of `bytes` with [`Alphabet::fold()`].
    pub fn encode_folded(&self, bytes: &[u8]) -> String {
        bytes.iter().map(|&b| self.fold(b)).collect()
    }
}

const _: () = assert!(
    Alphabet::UNRESERVED.symbols.len() >= MIN_SYMBOLS
        && Alphabet::UNRESERVED.symbols.len() < MAX_SYMBOLS,
    "folding requires an alphabet of 65 to 127 symbols"
);
