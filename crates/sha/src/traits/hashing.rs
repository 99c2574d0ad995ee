// Copyright (C) Microsoft Corporation. All rights reserved.

//! Trait for backend hash sessions.
//!
//! A session is one in-progress digest computation living inside the backend.
//! It is created from a transient provider handle, fed with
//! [`update`](HashSession::update) any number of times, and closed exactly once
//! with [`finish`](HashSession::finish). Dropping the session releases every
//! backend resource it owns whether or not it was finished.
//!
//! Sessions do not guard against misuse after `finish`; that bookkeeping is
//! done once, in [`DigestContext`], so both backends share it.

use super::*;

/// Backend implementation of a streaming SHA-2 computation.
///
/// # Implementation Requirements
///
/// Implementors must:
/// - Release the provider handle used during [`open`](Self::open) before
///   returning, on success and on every failure path
/// - Produce identical digests for any partition of the same input across
///   [`update`](Self::update) calls
/// - Never write a partial digest: [`finish`](Self::finish) either fills the
///   first `digest_len` bytes of the output or fails
pub trait HashSession: Sized {
    /// Acquires the algorithm from the platform and creates a session.
    ///
    /// # Errors
    ///
    /// - [`HashError::ProviderUnavailable`] if the platform cannot supply `algo`
    /// - [`HashError::PropertyQueryFailed`] if sizing metadata is unavailable
    /// - [`HashError::SessionCreateFailed`] if the session object cannot be created
    fn open(algo: ShaAlgo) -> Result<Self, HashError>;

    /// Returns the algorithm this session computes.
    fn algo(&self) -> ShaAlgo;

    /// Feeds `data` into the running digest. Empty input is accepted.
    ///
    /// # Errors
    ///
    /// Returns [`HashError::HashUpdateFailed`] if the backend rejects the data.
    fn update(&mut self, data: &[u8]) -> Result<(), HashError>;

    /// Closes the running digest.
    ///
    /// With `output == None` this only reports the digest length and leaves
    /// the session untouched. With `Some(buffer)` the digest is written to the
    /// front of `buffer` and the session must not be used again.
    ///
    /// # Returns
    ///
    /// The digest length in bytes.
    ///
    /// # Errors
    ///
    /// Returns [`HashError::HashFinalizeFailed`] if `buffer` is shorter than the
    /// digest or the backend cannot close the computation.
    fn finish(&mut self, output: Option<&mut [u8]>) -> Result<usize, HashError>;

    /// Closes the running digest and returns it as a vector.
    ///
    /// Calls [`finish`](Self::finish) twice: once to size the buffer and once
    /// to compute the digest into it.
    fn finish_vec(&mut self) -> Result<Vec<u8>, HashError> {
        let digest_len = self.finish(None)?;
        let mut digest = vec![0u8; digest_len];
        let written = self.finish(Some(&mut digest))?;
        digest.truncate(written);
        Ok(digest)
    }
}
