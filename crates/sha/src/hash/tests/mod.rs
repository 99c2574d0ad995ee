// Copyright (C) Microsoft Corporation. All rights reserved.

#![allow(clippy::unwrap_used, clippy::expect_used)]


mod sha256_tests;
mod sha512_tests;

pub(crate) use testvectors::*;

use super::*;

/// SHA test vector: message and expected digest in hex.
pub struct ShaTestVector {
    pub msg: &'static [u8],
    pub md: &'static str,
}

/// Checks `vector` with a single `finalize` call carrying the whole message.
fn check_vector_one_shot(algo: ShaAlgo, vector: &ShaTestVector) {
    let mut ctx = DigestContext::<PlatformHashSession>::new(algo).expect("open session");
    let digest = ctx.finalize(vector.msg).expect("finalize");
    assert_eq!(digest.len(), algo.digest_len());
    assert_eq!(
        digest.to_hex(),
        vector.md,
        "{algo} one-shot mismatch for {}-byte message",
        vector.msg.len()
    );
}

/// Checks `vector` by appending one byte at a time and finalizing empty.
fn check_vector_bytewise(algo: ShaAlgo, vector: &ShaTestVector) {
    let mut ctx = DigestContext::<PlatformHashSession>::new(algo).expect("open session");
    for byte in vector.msg.chunks(1) {
        ctx.append(byte).expect("append");
    }
    let digest = ctx.finish().expect("finish");
    assert_eq!(
        digest.to_hex(),
        vector.md,
        "{algo} byte-wise mismatch for {}-byte message",
        vector.msg.len()
    );
}

/// Hashes one million `a` bytes in uneven chunks, with a non-empty trailing chunk.
fn check_million_a(algo: ShaAlgo, expected: &str) {
    let msg = vec![b'a'; 1_000_000];
    let (body, tail) = msg.split_at(msg.len() - 17);

    let mut ctx = DigestContext::<PlatformHashSession>::new(algo).expect("open session");
    let mut offset = 0;
    let mut step = 1;
    while offset < body.len() {
        let end = (offset + step).min(body.len());
        ctx.append(&body[offset..end]).expect("append");
        offset = end;
        step = step * 3 % 4099 + 1;
    }
    assert_eq!(ctx.finalize(tail).expect("finalize").to_hex(), expected);
}
