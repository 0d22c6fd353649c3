// Copyright (C) Microsoft Corporation. All rights reserved.

//! SHA-2 hashing for HSM components.
//!
//! This crate exposes SHA-256, SHA-384 and SHA-512 behind one API while the
//! actual computation is done by the platform's native crypto library:
//!
//! - **Digests**: fixed-size value types ([`Sha256Digest`], [`Sha384Digest`],
//!   [`Sha512Digest`])
//! - **Hash functions**: [`Sha256`], [`Sha384`], [`Sha512`] implementing
//!   [`HashFunction`] (init, update, finalize, one-shot hash)
//! - **Hasher**: algorithm-selected-at-runtime wrapper with the caller
//!   buffer pattern used across HSM crates
//!
//! # Platform Support
//!
//! The backend is chosen at compile time, never at run time:
//! - Apple targets: CommonCrypto (`CC_SHA*` functions from libSystem)
//! - Everything else: OpenSSL EVP digests
//!
//! Enabling the `openssl` feature on Apple targets also builds the OpenSSL
//! backend so both can be compared. The public `Sha*` types stay bound to
//! CommonCrypto there.

mod digest;
mod hash;

mod op;
mod traits;

pub use digest::*;
pub use hash::*;
pub use op::*;
use thiserror::Error;
pub use traits::*;

/// Error type for all hashing operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CryptoError {
    /// Digest bytes do not match the algorithm's digest length.
    #[error("Digest length mismatch: expected {expected} bytes, got {actual}")]
    DigestLengthMismatch {
        /// Digest length of the algorithm.
        expected: usize,
        /// Length that was supplied.
        actual: usize,
    },

    /// Output buffer is too small to hold the hash result.
    #[error("Hash buffer too small")]
    HashBufferTooSmall,
    /// A hash context was updated or finished after it was already finished.
    #[error("Hash context used after finish")]
    HashMisusedState,
    /// One-shot hashing operation failed.
    #[error("Hashing operation failed")]
    HashError,
    /// Hash context initialization failed.
    #[error("Hash initialization failed")]
    HashInitError,
    /// Hash update operation failed.
    #[error("Hash update failed")]
    HashUpdateError,
    /// Hash finalization failed.
    #[error("Hash finalization failed")]
    HashFinishError,
}

/// Macro for defining backend-specific type aliases.
///
/// Creates a public alias bound to the CommonCrypto type on Apple targets
/// and to the OpenSSL type everywhere else.
macro_rules! define_type {
    ($vis:vis $name: ident, $cc_type: ty, $ossl_type: ty) => {
        /// Default type for the current platform
        #[cfg(target_vendor = "apple")]
        $vis type $name = $cc_type;

        /// Default type for the current platform
        #[cfg(not(target_vendor = "apple"))]
        $vis type $name = $ossl_type;
    };
}

pub(crate) use define_type;
