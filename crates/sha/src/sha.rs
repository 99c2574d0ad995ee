// Copyright (C) Microsoft Corporation. All rights reserved.

//! SHA-256, SHA-384 and SHA-512 entry points.
//!
//! Each façade owns one [`DigestContext`] on the backend selected for this
//! build and exposes the streaming interface: any number of `append` calls
//! followed by a single `finalize`.

use std::io;

use super::*;

macro_rules! define_sha {
    ($(#[$meta:meta])* $name:ident, $algo:expr) => {
        $(#[$meta])*
        #[derive(Debug)]
        pub struct $name {
            context: DigestContext,
        }

        impl $name {
            /// Digest length in bytes.
            pub const DIGEST_LEN: usize = $algo.digest_len();

            /// Creates a hash object on the platform backend.
            ///
            /// # Errors
            ///
            /// Returns a construction-time [`HashError`] if the backend cannot
            /// supply the algorithm or create a session.
            pub fn new() -> Result<Self, HashError> {
                Ok(Self {
                    context: DigestContext::new($algo)?,
                })
            }

            /// Hashes `data` in one call.
            pub fn digest(data: &[u8]) -> Result<Digest, HashError> {
                Self::new()?.finalize(data)
            }

            /// Returns the algorithm of this hash object.
            pub fn algo(&self) -> ShaAlgo {
                $algo
            }

            /// Feeds `data` into the running digest.
            ///
            /// # Errors
            ///
            /// Returns [`HashError::HashUpdateFailed`] after `finalize`, after a
            /// previous failure, or if the backend fails.
            pub fn append(&mut self, data: &[u8]) -> Result<(), HashError> {
                self.context.append(data)
            }

            /// Appends `data` as the last chunk and returns the digest. May be
            /// called only once.
            ///
            /// # Errors
            ///
            /// Returns [`HashError::HashFinalizeFailed`] on a second call or if
            /// the backend cannot produce the digest.
            pub fn finalize(&mut self, data: &[u8]) -> Result<Digest, HashError> {
                self.context.finalize(data)
            }

            /// Finalizes without a trailing chunk.
            pub fn finish(&mut self) -> Result<Digest, HashError> {
                self.context.finish()
            }

            /// Returns `true` once `finalize` has been called.
            pub fn is_finalized(&self) -> bool {
                self.context.is_finalized()
            }
        }

        impl io::Write for $name {
            fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
                io::Write::write(&mut self.context, buf)
            }

            fn flush(&mut self) -> io::Result<()> {
                io::Write::flush(&mut self.context)
            }
        }
    };
}

define_sha!(
    /// SHA-256 hash object (32-byte digest).
    Sha256,
    ShaAlgo::Sha256
);

define_sha!(
    /// SHA-384 hash object (48-byte digest).
    Sha384,
    ShaAlgo::Sha384
);

define_sha!(
    /// SHA-512 hash object (64-byte digest).
    Sha512,
    ShaAlgo::Sha512
);

/// Hashes `data` with `algo` in one call.
///
/// For callers that carry the algorithm as a value rather than a type.
pub fn digest(algo: ShaAlgo, data: &[u8]) -> Result<Digest, HashError> {
    DigestContext::<PlatformHashSession>::new(algo)?.finalize(data)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use std::io::Write;

    use super::*;

    #[test]
    fn test_facade_algos() {
        test_with_tracing::init();
        assert_eq!(Sha256::new().unwrap().algo(), ShaAlgo::Sha256);
        assert_eq!(Sha384::new().unwrap().algo(), ShaAlgo::Sha384);
        assert_eq!(Sha512::new().unwrap().algo(), ShaAlgo::Sha512);
        assert_eq!(Sha256::DIGEST_LEN, 32);
        assert_eq!(Sha384::DIGEST_LEN, 48);
        assert_eq!(Sha512::DIGEST_LEN, 64);
    }

    #[test]
    fn test_facade_matches_digest_fn() {
        test_with_tracing::init();
        const DATA: [u8; 1024] = [1u8; 1024];

        let mut sha = Sha384::new().unwrap();
        sha.append(&DATA[..100]).unwrap();
        let streamed = sha.finalize(&DATA[100..]).unwrap();

        assert_eq!(streamed, digest(ShaAlgo::Sha384, &DATA).unwrap());
        assert_eq!(streamed, Sha384::digest(&DATA).unwrap());
        assert!(sha.is_finalized());
    }

    #[test]
    fn test_facade_io_write() {
        test_with_tracing::init();
        let mut sha = Sha256::new().unwrap();
        let mut reader: &[u8] = b"abc";
        let copied = io::copy(&mut reader, &mut sha).expect("copy into hash");
        assert_eq!(copied, 3);
        sha.flush().unwrap();
        assert_eq!(
            sha.finish().unwrap().to_hex(),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_facade_write_after_finalize_fails() {
        test_with_tracing::init();
        let mut sha = Sha512::new().unwrap();
        sha.finish().unwrap();
        let err = sha.write(b"late").unwrap_err();
        let inner = err
            .get_ref()
            .and_then(|e| e.downcast_ref::<HashError>())
            .copied();
        assert_eq!(
            inner,
            Some(HashError::HashUpdateFailed {
                algo: ShaAlgo::Sha512,
                op: "append",
            })
        );
    }
}
