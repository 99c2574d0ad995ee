// Copyright (C) Microsoft Corporation. All rights reserved.

//! Streaming SHA-2 digests for the Key Vault client libraries.
//!
//! This crate exposes SHA-256, SHA-384 and SHA-512 through one streaming
//! interface while delegating the digest computation to the host platform:
//!
//! - **Windows**: Cryptography Next Generation (BCrypt) hash objects
//! - **Everything else**: OpenSSL `EVP_MD_CTX` digests
//!
//! Exactly one backend is compiled in; callers never branch on it and both
//! produce identical digests with identical incremental-update semantics.
//!
//! ```no_run
//! use keyvault_sha::Sha256;
//!
//! let mut sha = Sha256::new()?;
//! sha.append(b"a")?;
//! sha.append(b"bc")?;
//! let digest = sha.finish()?;
//! assert_eq!(
//!     digest.to_hex(),
//!     "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
//! );
//! # Ok::<(), keyvault_sha::HashError>(())
//! ```

mod algo;
mod digest;
mod hash;
mod sha;
mod traits;

pub use algo::*;
pub use digest::*;
pub use hash::*;
pub use sha::*;
use thiserror::Error;
pub use traits::*;

/// Errors reported by hash providers and sessions.
///
/// Every variant carries the algorithm and the name of the operation that
/// failed (a backend primitive such as `BCryptHashData`, or a façade
/// operation such as `finalize`). Construction-time kinds abort creation of
/// the hash object; operation-time kinds leave the session unusable.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashError {
    /// The platform could not supply the requested algorithm.
    #[error("{algo} provider unavailable ({op})")]
    ProviderUnavailable {
        /// Algorithm being acquired.
        algo: ShaAlgo,
        /// Operation that failed.
        op: &'static str,
    },
    /// Sizing metadata for the algorithm could not be retrieved.
    #[error("{algo} property query failed ({op})")]
    PropertyQueryFailed {
        /// Algorithm being queried.
        algo: ShaAlgo,
        /// Operation that failed.
        op: &'static str,
    },
    /// The backend refused to create a hash session.
    #[error("{algo} session creation failed ({op})")]
    SessionCreateFailed {
        /// Algorithm of the session.
        algo: ShaAlgo,
        /// Operation that failed.
        op: &'static str,
    },
    /// Feeding data into the running digest failed.
    #[error("{algo} hash update failed ({op})")]
    HashUpdateFailed {
        /// Algorithm of the session.
        algo: ShaAlgo,
        /// Operation that failed.
        op: &'static str,
    },
    /// Closing the running digest failed.
    #[error("{algo} hash finalization failed ({op})")]
    HashFinalizeFailed {
        /// Algorithm of the session.
        algo: ShaAlgo,
        /// Operation that failed.
        op: &'static str,
    },
}

impl HashError {
    /// Returns the algorithm the failing operation was running.
    pub fn algo(&self) -> ShaAlgo {
        match *self {
            HashError::ProviderUnavailable { algo, .. }
            | HashError::PropertyQueryFailed { algo, .. }
            | HashError::SessionCreateFailed { algo, .. }
            | HashError::HashUpdateFailed { algo, .. }
            | HashError::HashFinalizeFailed { algo, .. } => algo,
        }
    }

    /// Returns the name of the operation that failed.
    pub fn op(&self) -> &'static str {
        match *self {
            HashError::ProviderUnavailable { op, .. }
            | HashError::PropertyQueryFailed { op, .. }
            | HashError::SessionCreateFailed { op, .. }
            | HashError::HashUpdateFailed { op, .. }
            | HashError::HashFinalizeFailed { op, .. } => op,
        }
    }

    /// Returns `true` for errors raised while creating a hash object.
    pub fn is_construction(&self) -> bool {
        matches!(
            self,
            HashError::ProviderUnavailable { .. }
                | HashError::PropertyQueryFailed { .. }
                | HashError::SessionCreateFailed { .. }
        )
    }
}

/// Macro for defining platform-specific backend type aliases.
///
/// The first type is used on every target except Windows (OpenSSL), the
/// second on Windows (CNG).
macro_rules! define_type {
    ($vis:vis $name: ident, $ossl_type: ty, $cng_type: ty) => {
        /// Backend type for the current platform
        #[cfg(not(target_os = "windows"))]
        $vis type $name = $ossl_type;

        /// Backend type for the current platform
        #[cfg(target_os = "windows")]
        $vis type $name = $cng_type;
    };
}

pub(crate) use define_type;
