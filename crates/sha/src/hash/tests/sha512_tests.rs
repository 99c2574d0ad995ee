// Copyright (C) Microsoft Corporation. All rights reserved.

use super::*;

#[test]
fn test_sha512_vectors_one_shot() {
    test_with_tracing::init();
    for vector in SHA512_TEST_VECTORS {
        check_vector_one_shot(ShaAlgo::Sha512, vector);
    }
}

#[test]
fn test_sha512_vectors_bytewise() {
    test_with_tracing::init();
    for vector in SHA512_TEST_VECTORS {
        check_vector_bytewise(ShaAlgo::Sha512, vector);
    }
}

#[test]
fn test_sha512_million_a() {
    test_with_tracing::init();
    check_million_a(ShaAlgo::Sha512, MILLION_A_SHA512);
}

#[test]
fn test_sha512_abc_prefix() {
    test_with_tracing::init();
    let mut ctx = DigestContext::<PlatformHashSession>::new(ShaAlgo::Sha512).expect("init sha512");
    ctx.append(b"ab").expect("append");
    let digest = ctx.finalize(b"c").expect("finalize");
    assert_eq!(digest.len(), 64);
    assert!(digest.to_hex().starts_with("ddaf35a193617aba"));
}
