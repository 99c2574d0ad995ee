// Copyright (C) Microsoft Corporation. All rights reserved.

//! Windows CNG (Cryptography Next Generation) hash sessions.
//!
//! CNG needs the caller to size and own the hash object's working memory.
//! Session creation therefore goes through a short-lived algorithm provider:
//!
//! 1. `BCryptOpenAlgorithmProvider` for the algorithm
//! 2. `BCryptGetProperty` for `BCRYPT_OBJECT_LENGTH` and `BCRYPT_HASH_LENGTH`
//! 3. `BCryptCreateHash` into a buffer of exactly the object length
//! 4. `BCryptCloseAlgorithmProvider` when the provider goes out of scope
//!
//! The session keeps the buffer and the hash handle until it is dropped.

use windows::core::PCWSTR;
use windows::Win32::Foundation::NTSTATUS;
use windows::Win32::Security::Cryptography::*;

use super::*;

impl ShaAlgo {
    /// Maps the algorithm to its CNG algorithm identifier.
    fn alg_id(&self) -> PCWSTR {
        match self {
            ShaAlgo::Sha256 => BCRYPT_SHA256_ALGORITHM,
            ShaAlgo::Sha384 => BCRYPT_SHA384_ALGORITHM,
            ShaAlgo::Sha512 => BCRYPT_SHA512_ALGORITHM,
        }
    }
}

/// RAII wrapper for an open CNG algorithm provider.
///
/// Only lives for the duration of [`CngHashSession::open`]; the provider is
/// closed on drop, including when a property query or hash creation fails.
struct CngProvider {
    algo: ShaAlgo,
    handle: BCRYPT_ALG_HANDLE,
    object_len: usize,
    digest_len: usize,
}

impl CngProvider {
    /// Opens the provider for `algo` and reads its sizing properties.
    #[allow(unsafe_code)]
    fn open(algo: ShaAlgo) -> Result<Self, HashError> {
        let mut handle = BCRYPT_ALG_HANDLE::default();
        // SAFETY: `handle` is a valid out-pointer; the identifier is a static wide string.
        let status = unsafe {
            BCryptOpenAlgorithmProvider(
                &mut handle,
                algo.alg_id(),
                PCWSTR::null(),
                BCRYPT_OPEN_ALGORITHM_PROVIDER_FLAGS(0),
            )
        };
        if status.is_err() {
            tracing::error!(%algo, "BCryptOpenAlgorithmProvider failed: {:#X}", status.0);
            Err(HashError::ProviderUnavailable {
                algo,
                op: "BCryptOpenAlgorithmProvider",
            })?;
        }
        tracing::debug!(%algo, "opened CNG algorithm provider");

        // From here on the provider is closed by `Drop` on every exit path.
        let mut provider = Self {
            algo,
            handle,
            object_len: 0,
            digest_len: 0,
        };
        provider.object_len = provider.property(BCRYPT_OBJECT_LENGTH)?;
        provider.digest_len = provider.property(BCRYPT_HASH_LENGTH)?;

        if provider.digest_len != algo.digest_len() {
            tracing::error!(%algo, digest_len = provider.digest_len, "unexpected CNG hash length");
            Err(HashError::PropertyQueryFailed {
                algo,
                op: "BCryptGetProperty",
            })?;
        }

        Ok(provider)
    }

    /// Reads a `u32` property of the algorithm provider.
    #[allow(unsafe_code)]
    fn property(&self, property: PCWSTR) -> Result<usize, HashError> {
        let mut value = [0u8; std::mem::size_of::<u32>()];
        let mut result_len: u32 = 0;
        // SAFETY: `self.handle` is an open provider and `value` is a writable u32-sized buffer.
        let status = unsafe {
            BCryptGetProperty(
                self.handle,
                property,
                Some(&mut value),
                &mut result_len,
                0,
            )
        };
        if status.is_err() || result_len as usize != value.len() {
            tracing::error!(algo = %self.algo, result_len, "BCryptGetProperty failed: {:#X}", status.0);
            Err(HashError::PropertyQueryFailed {
                algo: self.algo,
                op: "BCryptGetProperty",
            })?;
        }
        Ok(u32::from_le_bytes(value) as usize)
    }
}

impl Drop for CngProvider {
    #[allow(unsafe_code)]
    fn drop(&mut self) {
        // SAFETY: the handle was opened by `BCryptOpenAlgorithmProvider` and is closed once.
        let status: NTSTATUS = unsafe { BCryptCloseAlgorithmProvider(self.handle, 0) };
        if status.is_err() {
            tracing::error!(algo = %self.algo, "BCryptCloseAlgorithmProvider failed: {:#X}", status.0);
        } else {
            tracing::debug!(algo = %self.algo, "closed CNG algorithm provider");
        }
    }
}

/// CNG streaming hash session.
///
/// Owns the hash handle and the hash object buffer it was created over. The
/// handle is destroyed before the buffer is freed.
pub struct CngHashSession {
    algo: ShaAlgo,
    digest_len: usize,
    handle: BCRYPT_HASH_HANDLE,
    // Working memory for `handle`; must outlive it.
    _object: Vec<u8>,
}

// SAFETY: the hash handle and its object buffer are owned exclusively by the
// session and CNG hash objects may be used from any thread, one at a time.
#[allow(unsafe_code)]
unsafe impl Send for CngHashSession {}

impl HashSession for CngHashSession {
    #[allow(unsafe_code)]
    fn open(algo: ShaAlgo) -> Result<Self, HashError> {
        let provider = CngProvider::open(algo)?;

        let mut object = vec![0u8; provider.object_len];
        let mut handle = BCRYPT_HASH_HANDLE::default();
        // SAFETY: `object` is exactly BCRYPT_OBJECT_LENGTH bytes and is moved into the
        // session below without reallocating, so it outlives `handle`.
        let status = unsafe {
            BCryptCreateHash(provider.handle, &mut handle, Some(&mut object), None, 0)
        };
        if status.is_err() {
            tracing::error!(%algo, "BCryptCreateHash failed: {:#X}", status.0);
            Err(HashError::SessionCreateFailed {
                algo,
                op: "BCryptCreateHash",
            })?;
        }

        tracing::trace!(%algo, object_len = object.len(), "created CNG hash session");
        Ok(Self {
            algo,
            digest_len: provider.digest_len,
            handle,
            _object: object,
        })
        // `provider` is closed here; the hash object does not need it any more.
    }

    fn algo(&self) -> ShaAlgo {
        self.algo
    }

    #[allow(unsafe_code)]
    fn update(&mut self, data: &[u8]) -> Result<(), HashError> {
        // SAFETY: `self.handle` is a live hash object created by `BCryptCreateHash`.
        let status = unsafe { BCryptHashData(self.handle, data, 0) };
        if status.is_err() {
            tracing::error!(algo = %self.algo, "BCryptHashData failed: {:#X}", status.0);
            Err(HashError::HashUpdateFailed {
                algo: self.algo,
                op: "BCryptHashData",
            })?;
        }
        Ok(())
    }

    #[allow(unsafe_code)]
    fn finish(&mut self, output: Option<&mut [u8]>) -> Result<usize, HashError> {
        let algo = self.algo;
        let Some(output) = output else {
            return Ok(self.digest_len);
        };

        if output.len() < self.digest_len {
            tracing::error!(%algo, len = output.len(), expected = self.digest_len, "digest buffer too small");
            Err(HashError::HashFinalizeFailed {
                algo,
                op: "BCryptFinishHash",
            })?;
        }

        // CNG requires the output to be exactly the hash length.
        let output = &mut output[..self.digest_len];
        // SAFETY: `self.handle` is a live hash object and `output` is `digest_len` bytes.
        let status = unsafe { BCryptFinishHash(self.handle, output, 0) };
        if status.is_err() {
            tracing::error!(%algo, "BCryptFinishHash failed: {:#X}", status.0);
            Err(HashError::HashFinalizeFailed {
                algo,
                op: "BCryptFinishHash",
            })?;
        }
        Ok(self.digest_len)
    }
}

impl Drop for CngHashSession {
    #[allow(unsafe_code)]
    fn drop(&mut self) {
        // SAFETY: the handle was created by `BCryptCreateHash` and is destroyed once,
        // before `_object` is freed.
        let status = unsafe { BCryptDestroyHash(self.handle) };
        if status.is_err() {
            tracing::error!(algo = %self.algo, "BCryptDestroyHash failed: {:#X}", status.0);
        } else {
            tracing::trace!(algo = %self.algo, "released CNG hash session");
        }
    }
}
