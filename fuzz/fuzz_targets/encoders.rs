// Copyright lowRISC contributors.
// Licensed under the Apache License, Version 2.0, see LICENSE for details.
// SPDX-License-Identifier: Apache-2.0

#![no_main]

use libfuzzer_sys::fuzz_target;

use secrand::random;
use secrand::random::Alphabet;

fuzz_target!(|data: &[u8]| {
    let hex = random::encode_hex(data);
    assert_eq!(hex.len(), data.len() * 2);
    assert!(hex.bytes().all(|c| matches!(c, b'0'..=b'9' | b'a'..=b'f')));

    let folded = Alphabet::UNRESERVED.encode_folded(data);
    assert_eq!(folded.len(), data.len());
    assert!(folded.chars().all(|c| Alphabet::UNRESERVED.contains(c)));
});
