// Copyright lowRISC contributors.
// Licensed under the Apache License, Version 2.0, see LICENSE for details.
// SPDX-License-Identifier: Apache-2.0

//! Known-answer vectors for lowercase hex encoding.

/// Byte strings and their full lowercase hex encodings.
pub const ENCODED: &[(&[u8], &str)] = &[
    (&[], ""),
    (&[0x00], "00"),
    (&[0x0f], "0f"),
    (&[0xf0], "f0"),
    (&[0xff], "ff"),
    (&[0xde, 0xad, 0xbe, 0xef], "deadbeef"),
    (
        &[0x00, 0x7f, 0x80, 0xff, 0x12, 0xab, 0x83, 0x84],
        "007f80ff12ab8384",
    ),
    (
        &[
            0x01, 0x23, 0x45, 0x67, 0x89, 0xab, 0xcd, 0xef, 0xfe, 0xdc, 0xba,
            0x98, 0x76, 0x54, 0x32, 0x10,
        ],
        "0123456789abcdeffedcba9876543210",
    ),
];
