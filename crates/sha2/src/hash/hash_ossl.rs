// Copyright (C) Microsoft Corporation. All rights reserved.

//! OpenSSL-based SHA-2 implementations.
//!
//! All three algorithms share one generic EVP digest context
//! ([`openssl::hash::Hasher`]). The algorithm is chosen by the
//! [`MessageDigest`] each type hands to the context when it is created;
//! update and finalization go through the same generic entry points for
//! every algorithm.
//!
//! The EVP context is heap allocated by OpenSSL and freed when the owning
//! `Hasher` is dropped, whether or not the hash was finalized.

use openssl::hash::MessageDigest;

use super::*;

/// Generic EVP digest context shared by the OpenSSL hash functions.
#[derive(Clone)]
struct OsslHashContext {
    /// OpenSSL hasher maintaining the algorithm state.
    hasher: openssl::hash::Hasher,
}

impl OsslHashContext {
    /// Allocates and initializes an EVP context for `md`.
    fn new(md: MessageDigest) -> Result<Self, CryptoError> {
        let hasher = openssl::hash::Hasher::new(md).map_err(|e| {
            tracing::error!(?e, "EVP digest context initialization failed");
            CryptoError::HashInitError
        })?;
        Ok(Self { hasher })
    }

    fn update(&mut self, data: &[u8]) -> Result<(), CryptoError> {
        self.hasher.update(data).map_err(|e| {
            tracing::error!(?e, "EVP digest update failed");
            CryptoError::HashUpdateError
        })
    }

    /// Finalizes the context. The context is consumed so it cannot be fed
    /// further data.
    fn finish<D: ByteDigest>(mut self) -> Result<D, CryptoError> {
        let digest = self.hasher.finish().map_err(|e| {
            tracing::error!(?e, "EVP digest finalization failed");
            CryptoError::HashFinishError
        })?;
        D::from_bytes(&digest)
    }

    /// Hashes `data` with a single `EVP_Digest` call.
    fn one_shot<D: ByteDigest>(md: MessageDigest, data: &[u8]) -> Result<D, CryptoError> {
        let digest = openssl::hash::hash(md, data).map_err(|e| {
            tracing::error!(?e, "EVP one-shot digest failed");
            CryptoError::HashError
        })?;
        D::from_bytes(&digest)
    }
}

macro_rules! ossl_hash_function {
    ($(#[$meta:meta])* $name:ident, $algo:ident, $digest:ty, $md:path) => {
        $(#[$meta])*
        #[derive(Clone)]
        pub struct $name {
            context: OsslHashContext,
        }

        impl $name {
            /// Returns the OpenSSL algorithm selector this type binds to.
            pub fn message_digest() -> MessageDigest {
                $md()
            }
        }

        impl HashFunction for $name {
            type Digest = $digest;

            const ALGORITHM: HashAlgorithm = HashAlgorithm::$algo;

            fn init() -> Result<Self, CryptoError> {
                let context = OsslHashContext::new(Self::message_digest())?;
                Ok(Self { context })
            }

            fn update(&mut self, data: &[u8]) -> Result<(), CryptoError> {
                self.context.update(data)
            }

            fn finalize(self) -> Result<Self::Digest, CryptoError> {
                self.context.finish()
            }

            fn hash(data: &[u8]) -> Result<Self::Digest, CryptoError> {
                OsslHashContext::one_shot(Self::message_digest(), data)
            }
        }
    };
}

ossl_hash_function!(
    /// SHA-256 over an OpenSSL EVP context.
    OsslSha256,
    Sha256,
    Sha256Digest,
    MessageDigest::sha256
);

ossl_hash_function!(
    /// SHA-384 over an OpenSSL EVP context.
    OsslSha384,
    Sha384,
    Sha384Digest,
    MessageDigest::sha384
);

ossl_hash_function!(
    /// SHA-512 over an OpenSSL EVP context.
    OsslSha512,
    Sha512,
    Sha512Digest,
    MessageDigest::sha512
);
