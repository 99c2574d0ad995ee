// Copyright (C) Microsoft Corporation. All rights reserved.

//! OpenSSL-based hash sessions for non-Windows targets.
//!
//! The digest context (`EVP_MD_CTX`) is allocated and managed by OpenSSL, so
//! the provider handle reports no working-buffer size of its own. The digest
//! length is read back from `EVP_DigestFinal` on every finish, through a
//! stack buffer sized for the largest supported digest.

use openssl::md::Md;
use openssl::md::MdRef;
use openssl::md_ctx::MdCtx;
use openssl::nid::Nid;

use super::*;

impl ShaAlgo {
    /// Maps the algorithm to its OpenSSL object identifier.
    fn nid(&self) -> Nid {
        match self {
            ShaAlgo::Sha256 => Nid::SHA256,
            ShaAlgo::Sha384 => Nid::SHA384,
            ShaAlgo::Sha512 => Nid::SHA512,
        }
    }
}

/// Transient OpenSSL algorithm lookup.
///
/// OpenSSL's built-in digests are static, so there is nothing to close; the
/// handle only exists while the session is being created.
struct OsslProvider {
    md: &'static MdRef,
    digest_len: usize,
}

impl OsslProvider {
    /// Looks up `algo` in OpenSSL's digest table and checks its output size.
    fn open(algo: ShaAlgo) -> Result<Self, HashError> {
        let md = Md::from_nid(algo.nid()).ok_or_else(|| {
            tracing::error!(%algo, "OpenSSL has no digest registered for algorithm");
            HashError::ProviderUnavailable {
                algo,
                op: "EVP_get_digestbynid",
            }
        })?;

        let digest_len = md.size();
        if digest_len != algo.digest_len() || digest_len > MAX_DIGEST_LEN {
            tracing::error!(%algo, digest_len, "unexpected OpenSSL digest size");
            Err(HashError::PropertyQueryFailed {
                algo,
                op: "EVP_MD_get_size",
            })?;
        }

        tracing::debug!(%algo, digest_len, "opened OpenSSL digest provider");
        Ok(Self { md, digest_len })
    }
}

/// OpenSSL streaming hash session.
///
/// Owns one `EVP_MD_CTX`; the context is freed when the session is dropped.
///
/// # Thread Safety
///
/// The session can move between threads but must be driven by one writer
/// at a time; OpenSSL's context has no internal locking.
pub struct OsslHashSession {
    algo: ShaAlgo,
    digest_len: usize,
    ctx: MdCtx,
}

impl HashSession for OsslHashSession {
    fn open(algo: ShaAlgo) -> Result<Self, HashError> {
        let provider = OsslProvider::open(algo)?;

        let mut ctx = MdCtx::new().map_err(|openssl_error_stack| {
            tracing::error!(?openssl_error_stack, %algo);
            HashError::SessionCreateFailed {
                algo,
                op: "EVP_MD_CTX_new",
            }
        })?;

        ctx.digest_init(provider.md)
            .map_err(|openssl_error_stack| {
                tracing::error!(?openssl_error_stack, %algo);
                HashError::SessionCreateFailed {
                    algo,
                    op: "EVP_DigestInit_ex",
                }
            })?;

        tracing::trace!(%algo, "created OpenSSL hash session");
        Ok(Self {
            algo,
            digest_len: provider.digest_len,
            ctx,
        })
    }

    fn algo(&self) -> ShaAlgo {
        self.algo
    }

    fn update(&mut self, data: &[u8]) -> Result<(), HashError> {
        self.ctx
            .digest_update(data)
            .map_err(|openssl_error_stack| {
                tracing::error!(?openssl_error_stack, algo = %self.algo);
                HashError::HashUpdateFailed {
                    algo: self.algo,
                    op: "EVP_DigestUpdate",
                }
            })
    }

    fn finish(&mut self, output: Option<&mut [u8]>) -> Result<usize, HashError> {
        let algo = self.algo;
        let Some(output) = output else {
            return Ok(self.digest_len);
        };

        if output.len() < self.digest_len {
            tracing::error!(%algo, len = output.len(), expected = self.digest_len, "digest buffer too small");
            Err(HashError::HashFinalizeFailed {
                algo,
                op: "EVP_DigestFinal",
            })?;
        }

        let mut digest = [0u8; MAX_DIGEST_LEN];
        let written = self
            .ctx
            .digest_final(&mut digest)
            .map_err(|openssl_error_stack| {
                tracing::error!(?openssl_error_stack, %algo);
                HashError::HashFinalizeFailed {
                    algo,
                    op: "EVP_DigestFinal",
                }
            })? as usize;

        // EVP reports the size it wrote; anything else would be a partial digest.
        if written != self.digest_len {
            tracing::error!(%algo, written, expected = self.digest_len, "EVP_DigestFinal size mismatch");
            Err(HashError::HashFinalizeFailed {
                algo,
                op: "EVP_DigestFinal",
            })?;
        }

        output[..written].copy_from_slice(&digest[..written]);
        Ok(written)
    }
}

impl Drop for OsslHashSession {
    fn drop(&mut self) {
        tracing::trace!(algo = %self.algo, "releasing OpenSSL hash session");
    }
}
