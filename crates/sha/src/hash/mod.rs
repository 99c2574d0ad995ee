// Copyright (C) Microsoft Corporation. All rights reserved.

//! Platform hash sessions and the streaming context that owns them.
//!
//! # Platform Support
//!
//! - **Windows**: CNG (`BCryptCreateHash` over a caller-allocated hash object)
//! - **Other targets**: OpenSSL (`EVP_MD_CTX`)
//!
//! [`PlatformHashSession`] names whichever backend this build selected.
//!
//! # Lifecycle
//!
//! [`DigestContext`] wraps a backend session with the state the backends do
//! not track themselves:
//!
//! 1. `Active`: [`append`](DigestContext::append) and
//!    [`finalize`](DigestContext::finalize) are accepted
//! 2. `Finalized`: set on entry to `finalize`, successful or not
//! 3. `Poisoned`: set when the backend rejects an `append`
//!
//! Outside `Active` every call is rejected before reaching the backend.

use std::fmt;
use std::io;

use super::*;

#[cfg(not(target_os = "windows"))]
mod hash_ossl;

#[cfg(target_os = "windows")]
mod hash_cng;

define_type!(pub PlatformHashSession, hash_ossl::OsslHashSession, hash_cng::CngHashSession);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Active,
    Finalized,
    Poisoned,
}

/// Streaming digest computation over a backend session.
///
/// Owns its session exclusively; dropping the context releases the backend
/// objects whether or not [`finalize`](Self::finalize) ran.
pub struct DigestContext<S: HashSession = PlatformHashSession> {
    session: S,
    state: State,
}

impl<S: HashSession> DigestContext<S> {
    /// Creates a context for `algo` on the backend `S`.
    ///
    /// # Errors
    ///
    /// Propagates the construction-time errors of [`HashSession::open`].
    pub fn new(algo: ShaAlgo) -> Result<Self, HashError> {
        let session = S::open(algo)?;
        Ok(Self {
            session,
            state: State::Active,
        })
    }

    /// Returns the algorithm of this context.
    pub fn algo(&self) -> ShaAlgo {
        self.session.algo()
    }

    /// Returns the digest length in bytes.
    pub fn digest_len(&self) -> usize {
        self.algo().digest_len()
    }

    /// Returns `true` once `finalize` has been called.
    pub fn is_finalized(&self) -> bool {
        self.state == State::Finalized
    }

    /// Returns `true` after a failed `append`.
    pub fn is_poisoned(&self) -> bool {
        self.state == State::Poisoned
    }

    /// Feeds `data` into the running digest.
    ///
    /// # Errors
    ///
    /// Returns [`HashError::HashUpdateFailed`] if the context was already
    /// finalized or poisoned, or if the backend fails. A backend failure
    /// poisons the context.
    pub fn append(&mut self, data: &[u8]) -> Result<(), HashError> {
        if self.state != State::Active {
            tracing::error!(algo = %self.algo(), state = ?self.state, "append on inactive hash context");
            Err(HashError::HashUpdateFailed {
                algo: self.algo(),
                op: "append",
            })?;
        }

        if let Err(err) = self.session.update(data) {
            self.state = State::Poisoned;
            return Err(err);
        }
        Ok(())
    }

    /// Appends `data` as the last chunk and returns the digest.
    ///
    /// May be called once. The context is marked finalized before the backend
    /// is touched, so a failure here also retires it.
    ///
    /// # Errors
    ///
    /// Returns [`HashError::HashFinalizeFailed`] if the context is not active,
    /// the trailing chunk cannot be hashed, or the backend cannot produce the
    /// full digest.
    pub fn finalize(&mut self, data: &[u8]) -> Result<Digest, HashError> {
        let algo = self.algo();
        if self.state != State::Active {
            tracing::error!(%algo, state = ?self.state, "finalize on inactive hash context");
            Err(HashError::HashFinalizeFailed {
                algo,
                op: "finalize",
            })?;
        }
        self.state = State::Finalized;

        self.session
            .update(data)
            .map_err(|err| HashError::HashFinalizeFailed {
                algo,
                op: err.op(),
            })?;

        let mut output = [0u8; MAX_DIGEST_LEN];
        let written = self.session.finish(Some(&mut output))?;
        if written != algo.digest_len() {
            tracing::error!(%algo, written, expected = algo.digest_len(), "backend returned a short digest");
            Err(HashError::HashFinalizeFailed {
                algo,
                op: "finalize",
            })?;
        }

        Ok(Digest::new(algo, output[..written].to_vec()))
    }

    /// Finalizes without a trailing chunk.
    pub fn finish(&mut self) -> Result<Digest, HashError> {
        self.finalize(&[])
    }
}

impl<S: HashSession> fmt::Debug for DigestContext<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DigestContext")
            .field("algo", &self.algo())
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

/// Hashes everything written; `flush` is a no-op.
impl<S: HashSession> io::Write for DigestContext<S> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.append(buf).map_err(io::Error::other)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests;
