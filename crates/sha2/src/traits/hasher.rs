// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Hash operation wrapper.
//!
//! This module provides a unified interface for hashing when the algorithm
//! is only known at run time, supporting both single-operation and
//! streaming hash modes. The backend is still fixed at compile time.

use super::*;

/// Hash operation wrapper.
///
/// Dispatches on a [`HashAlgorithm`] to the typed [`Sha256`], [`Sha384`] and
/// [`Sha512`] functions of the compiled backend.
pub struct Hasher;

impl Hasher {
    /// Performs single-operation hashing.
    ///
    /// # Arguments
    ///
    /// * `algo` - The hashing algorithm
    /// * `data` - Input data to hash
    /// * `output` - Optional output buffer. If `None`, only returns the required size.
    ///
    /// # Returns
    ///
    /// Returns the number of bytes written to the output buffer (digest
    /// length), or the required buffer size if `output` is `None`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The output buffer is too small
    /// - The underlying cryptographic operation fails
    pub fn hash(
        algo: HashAlgorithm,
        data: &[u8],
        output: Option<&mut [u8]>,
    ) -> Result<usize, CryptoError> {
        let len = algo.digest_size();
        if let Some(output) = output {
            if output.len() < len {
                Err(CryptoError::HashBufferTooSmall)?;
            }
            match algo {
                HashAlgorithm::Sha256 => write_digest(&Sha256::hash(data)?, output),
                HashAlgorithm::Sha384 => write_digest(&Sha384::hash(data)?, output),
                HashAlgorithm::Sha512 => write_digest(&Sha512::hash(data)?, output),
            }
        }
        Ok(len)
    }

    /// Performs single-operation hashing and returns the result as a vector.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying cryptographic operation fails.
    pub fn hash_vec(algo: HashAlgorithm, data: &[u8]) -> Result<Vec<u8>, CryptoError> {
        // First, query the required buffer size
        let hash_size = Hasher::hash(algo, data, None)?;
        let mut digest = vec![0u8; hash_size];
        let written = Hasher::hash(algo, data, Some(digest.as_mut_slice()))?;
        digest.truncate(written);
        Ok(digest)
    }

    /// Initializes a streaming hash context.
    ///
    /// # Errors
    ///
    /// Returns an error if the native context cannot be created.
    pub fn hash_init(algo: HashAlgorithm) -> Result<HashContext, CryptoError> {
        HashContext::new(algo)
    }
}
