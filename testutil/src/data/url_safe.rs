// Copyright lowRISC contributors.
// Licensed under the Apache License, Version 2.0, see LICENSE for details.
// SPDX-License-Identifier: Apache-2.0

//! Known-answer vectors and alphabets for URL-safe strings.

/// Byte strings and their folded encodings over the RFC 3986 unreserved
/// alphabet, `a-zA-Z0-9-._~`.
pub const FOLDED_VECTORS: &[(&[u8], &str)] = &[
    (&[0x00], "a"),
    (&[0x01], "a"),
    (&[0x02], "b"),
    // Last direct offsets: 62, 63, 64, 65.
    (&[0x7c, 0x7e, 0x80, 0x82], "-._~"),
    // 0x83 is the last byte that maps directly; 0x84 is the first that
    // folds, landing on offset 33.
    (&[0x83, 0x84], "~H"),
    (
        &[0x00, 0x7f, 0x80, 0xff, 0x12, 0xab, 0x83, 0x84],
        "a._.jQ~H",
    ),
];

/// How many of the 256 byte values fold onto each unreserved symbol, in
/// alphabet order.
///
/// Offsets 0 to 65 are each reached directly by two bytes. Offsets 66 to 127
/// fold onto 33 to 63, adding four more bytes to each of those.
pub const FOLDED_BYTE_COUNTS: &[usize] = &[
    2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, // 0..16
    2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, // 16..32
    2, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, // 32..48
    6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, // 48..64
    2, 2, // 64..66
];

/// The unreserved alphabet, backwards.
pub const SYMBOLS_REVERSED: &[u8] = b"~_.-9876543210\
    ZYXWVUTSRQPONMLKJIHGFEDCBA\
    zyxwvutsrqponmlkjihgfedcba";

/// Every ASCII byte, in order; too many symbols for an alphabet.
pub const SYMBOLS_128: &[u8] = &{
    let mut all = [0u8; 128];
    let mut i = 0;
    while i < 128 {
        all[i] = i as u8;
        i += 1;
    }
    all
};

/// An otherwise valid alphabet with `a` appearing twice.
pub const SYMBOLS_DUPLICATE: &[u8] = b"abcdefghijklmnopqrstuvwxyz\
    ABCDEFGHIJKLMNOPQRSTUVWXYZ\
    0123456789\
    -._a";

/// An otherwise valid alphabet ending in a non-ASCII byte.
pub const SYMBOLS_NON_ASCII: &[u8] = b"abcdefghijklmnopqrstuvwxyz\
    ABCDEFGHIJKLMNOPQRSTUVWXYZ\
    0123456789\
    -._\xff";
