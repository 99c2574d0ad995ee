// Copyright (C) Microsoft Corporation. All rights reserved.

//! Finalized digest values.

use std::fmt;

use super::*;

/// Output of a finalized hash session.
///
/// The byte length always equals [`ShaAlgo::digest_len`] for the algorithm
/// that produced it.
#[derive(Clone, PartialEq, Eq)]
pub struct Digest {
    algo: ShaAlgo,
    bytes: Vec<u8>,
}

impl Digest {
    /// Wraps digest bytes produced by a backend.
    ///
    /// Callers have already checked that `bytes` is exactly
    /// `algo.digest_len()` long.
    pub(crate) fn new(algo: ShaAlgo, bytes: Vec<u8>) -> Self {
        debug_assert_eq!(bytes.len(), algo.digest_len());
        Self { algo, bytes }
    }

    /// Returns the algorithm that produced this digest.
    pub fn algo(&self) -> ShaAlgo {
        self.algo
    }

    /// Returns the raw digest bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Returns the digest length in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Returns the digest as lowercase hexadecimal.
    pub fn to_hex(&self) -> String {
        hex::encode(&self.bytes)
    }

    /// Consumes the digest and returns its bytes.
    pub fn into_vec(self) -> Vec<u8> {
        self.bytes
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl From<Digest> for Vec<u8> {
    fn from(digest: Digest) -> Self {
        digest.bytes
    }
}

impl PartialEq<[u8]> for Digest {
    fn eq(&self, other: &[u8]) -> bool {
        self.bytes == other
    }
}

impl PartialEq<&[u8]> for Digest {
    fn eq(&self, other: &&[u8]) -> bool {
        self.bytes == *other
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Digest")
            .field("algo", &self.algo)
            .field("hex", &self.to_hex())
            .finish()
    }
}
