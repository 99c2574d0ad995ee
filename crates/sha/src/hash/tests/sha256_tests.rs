// Copyright (C) Microsoft Corporation. All rights reserved.

use super::*;

#[test]
fn test_sha256_vectors_one_shot() {
    test_with_tracing::init();
    for vector in SHA256_TEST_VECTORS {
        check_vector_one_shot(ShaAlgo::Sha256, vector);
    }
}

#[test]
fn test_sha256_vectors_bytewise() {
    test_with_tracing::init();
    for vector in SHA256_TEST_VECTORS {
        check_vector_bytewise(ShaAlgo::Sha256, vector);
    }
}

#[test]
fn test_sha256_million_a() {
    test_with_tracing::init();
    check_million_a(ShaAlgo::Sha256, MILLION_A_SHA256);
}

#[test]
fn test_sha256_empty_without_append() {
    test_with_tracing::init();
    let mut ctx = DigestContext::<PlatformHashSession>::new(ShaAlgo::Sha256).expect("init sha256");
    let digest = ctx.finish().expect("finish sha256");
    assert_eq!(
        digest.as_bytes(),
        [
            0xe3, 0xb0, 0xc4, 0x42, 0x98, 0xfc, 0x1c, 0x14, 0x9a, 0xfb, 0xf4, 0xc8, 0x99, 0x6f,
            0xb9, 0x24, 0x27, 0xae, 0x41, 0xe4, 0x64, 0x9b, 0x93, 0x4c, 0xa4, 0x95, 0x99, 0x1b,
            0x78, 0x52, 0xb8, 0x55,
        ]
    );
}

#[test]
fn test_sha256_hash_big_endian_data() {
    test_with_tracing::init();
    let mut data = [0u8; 1024];
    for i in 0..(1024 / 4) {
        data[i * 4..i * 4 + 4].copy_from_slice(&0x11223344u32.to_be_bytes());
    }

    const EXPECTED_DIGEST: [u8; 32] = [
        0x39, 0x65, 0x3b, 0xb8, 0x6f, 0xe6, 0xb8, 0x19, 0xc7, 0xef, 0x49, 0x65, 0xd0, 0x79, 0x7e,
        0x22, 0x38, 0x7c, 0x7e, 0xd5, 0x6b, 0x75, 0x74, 0x7d, 0x48, 0x67, 0x23, 0x21, 0x50, 0xbb,
        0xb1, 0x9f,
    ];

    let mut ctx = DigestContext::<PlatformHashSession>::new(ShaAlgo::Sha256).expect("init sha256");
    ctx.append(&data[..700]).expect("update sha256 part1");
    ctx.append(&data[700..]).expect("update sha256 part2");
    assert_eq!(ctx.finish().expect("final sha256").as_bytes(), EXPECTED_DIGEST);
}
