// Copyright lowRISC contributors.
// Licensed under the Apache License, Version 2.0, see LICENSE for details.
// SPDX-License-Identifier: Apache-2.0

#![no_main]

use libfuzzer_sys::arbitrary::{self, Arbitrary};
use libfuzzer_sys::fuzz_target;

use secrand::crypto::csrng;
use secrand::random;
use secrand::random::Alphabet;

/// A `csrng::Csrng` that hands out fuzzer-chosen bytes, failing once they
/// run out.
struct Scripted<'a> {
    script: &'a [u8],
    transient: bool,
}

impl csrng::Csrng for Scripted<'_> {
    fn fill(&mut self, buf: &mut [u8]) -> secrand::Result<(), csrng::Error> {
        if buf.len() > self.script.len() {
            let e = if self.transient {
                csrng::Error::Transient
            } else {
                csrng::Error::Unavailable
            };
            return Err(e.into());
        }
        let (head, tail) = self.script.split_at(buf.len());
        buf.copy_from_slice(head);
        self.script = tail;
        Ok(())
    }
}

#[derive(Arbitrary, Debug)]
enum Op {
    Binary(i16),
    Hex(i16),
    UrlSafe(i16),
    UrlSafeUniform(i16),
    Int(i64, i64),
}

#[derive(Arbitrary, Debug)]
struct Input {
    op: Op,
    transient: bool,
    script: Vec<u8>,
}

fn check_failure(e: random::Error, len: i16) {
    if len <= 0 {
        assert_eq!(e, random::Error::InvalidLength);
    } else {
        assert!(matches!(
            e,
            random::Error::SecureSourceTransientFailure
                | random::Error::SecureSourceUnavailable
        ));
    }
}

fuzz_target!(|input: Input| {
    let mut rng = Scripted {
        script: &input.script,
        transient: input.transient,
    };

    match input.op {
        Op::Binary(len) => match random::binary(&mut rng, len) {
            Ok(v) => assert_eq!(v.len(), len as usize),
            Err(e) => check_failure(e.into_inner(), len),
        },
        Op::Hex(len) => match random::hex(&mut rng, len) {
            Ok(s) => {
                assert_eq!(s.len(), len as usize);
                assert!(s.bytes().all(|c| c.is_ascii_hexdigit()));
            }
            Err(e) => check_failure(e.into_inner(), len),
        },
        Op::UrlSafe(len) => match random::url_safe(&mut rng, len) {
            Ok(s) => {
                assert_eq!(s.len(), len as usize);
                assert!(s.chars().all(|c| Alphabet::UNRESERVED.contains(c)));
            }
            Err(e) => check_failure(e.into_inner(), len),
        },
        Op::UrlSafeUniform(len) => {
            match random::url_safe_uniform(&mut rng, len) {
                Ok(s) => {
                    assert_eq!(s.len(), len as usize);
                    assert!(s
                        .chars()
                        .all(|c| Alphabet::UNRESERVED.contains(c)));
                }
                Err(e) => check_failure(e.into_inner(), len),
            }
        }
        Op::Int(min, max) => match random::int(&mut rng, min, max) {
            Ok(v) => assert!(min <= v && v <= max),
            Err(e) => {
                let e = e.into_inner();
                if min > max {
                    assert_eq!(e, random::Error::InvalidMax);
                } else {
                    assert!(matches!(
                        e,
                        random::Error::SecureSourceTransientFailure
                            | random::Error::SecureSourceUnavailable
                    ));
                }
            }
        },
    }
});
