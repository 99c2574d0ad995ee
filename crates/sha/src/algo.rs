// Copyright (C) Microsoft Corporation. All rights reserved.

//! Supported hash algorithm identifiers.

use std::fmt;

/// Largest digest produced by any supported algorithm (SHA-512).
pub const MAX_DIGEST_LEN: usize = 64;

/// SHA-2 algorithm selected when a hash session is created.
///
/// The set is closed: a session can only ever be asked for one of these,
/// so backends have no "unsupported algorithm" failure path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShaAlgo {
    /// SHA-256
    Sha256,

    /// SHA-384
    Sha384,

    /// SHA-512
    Sha512,
}

impl ShaAlgo {
    /// All supported algorithms, shortest digest first.
    pub const ALL: [ShaAlgo; 3] = [ShaAlgo::Sha256, ShaAlgo::Sha384, ShaAlgo::Sha512];

    /// Returns the size of the digest in bytes.
    pub const fn digest_len(&self) -> usize {
        match self {
            ShaAlgo::Sha256 => 32,
            ShaAlgo::Sha384 => 48,
            ShaAlgo::Sha512 => 64,
        }
    }

    /// Returns the block size of the compression function in bytes.
    pub const fn block_len(&self) -> usize {
        match self {
            ShaAlgo::Sha256 => 64,
            ShaAlgo::Sha384 => 128,
            ShaAlgo::Sha512 => 128,
        }
    }

    /// Returns the conventional algorithm name, e.g. `SHA-256`.
    pub const fn name(&self) -> &'static str {
        match self {
            ShaAlgo::Sha256 => "SHA-256",
            ShaAlgo::Sha384 => "SHA-384",
            ShaAlgo::Sha512 => "SHA-512",
        }
    }
}

impl fmt::Display for ShaAlgo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
