// Copyright (C) Microsoft Corporation. All rights reserved.

//! Streaming hash context with the algorithm chosen at run time.
//!
//! [`HashContext`] wraps one of the typed hash functions and adds the
//! caller-buffer convention of the operation wrappers: `finish(None)` reports
//! the digest size, `finish(Some(buf))` writes the digest. Because the
//! context is finished through `&mut self`, reuse after finishing is caught
//! at run time and reported as [`CryptoError::HashMisusedState`].

use super::*;

#[derive(Clone)]
enum HashState {
    Sha256(Sha256),
    Sha384(Sha384),
    Sha512(Sha512),
    Finished,
}

/// Streaming hash context created by [`Hasher::hash_init`].
///
/// # Lifecycle
///
/// 1. [`update`](Self::update) any number of times
/// 2. [`finish`](Self::finish) once with an output buffer
///
/// Any call to `update` or `finish(Some(..))` after a completed finish
/// returns [`CryptoError::HashMisusedState`].
#[derive(Clone)]
pub struct HashContext {
    algo: HashAlgorithm,
    state: HashState,
}

impl HashContext {
    pub(crate) fn new(algo: HashAlgorithm) -> Result<Self, CryptoError> {
        let state = match algo {
            HashAlgorithm::Sha256 => HashState::Sha256(Sha256::init()?),
            HashAlgorithm::Sha384 => HashState::Sha384(Sha384::init()?),
            HashAlgorithm::Sha512 => HashState::Sha512(Sha512::init()?),
        };
        Ok(Self { algo, state })
    }

    /// Returns the algorithm of this context.
    pub fn algo(&self) -> HashAlgorithm {
        self.algo
    }

    /// Returns `true` once the context has produced its digest.
    pub fn is_finished(&self) -> bool {
        matches!(self.state, HashState::Finished)
    }

    /// Feeds `data` into the hash.
    ///
    /// # Errors
    ///
    /// - `CryptoError::HashMisusedState`: the context was already finished
    /// - `CryptoError::HashUpdateError`: the native update failed
    pub fn update(&mut self, data: &[u8]) -> Result<(), CryptoError> {
        match &mut self.state {
            HashState::Sha256(state) => state.update(data),
            HashState::Sha384(state) => state.update(data),
            HashState::Sha512(state) => state.update(data),
            HashState::Finished => Err(misused(self.algo, "update")),
        }
    }

    /// Finishes the hash.
    ///
    /// With `None`, returns the digest size and leaves the context usable.
    /// With `Some(hash)`, writes the digest into the first `digest_size`
    /// bytes of `hash` and finishes the context.
    ///
    /// # Errors
    ///
    /// - `CryptoError::HashBufferTooSmall`: `hash` is shorter than the digest;
    ///   the context stays usable
    /// - `CryptoError::HashMisusedState`: the context was already finished
    /// - `CryptoError::HashFinishError`: native finalization failed
    pub fn finish(&mut self, hash: Option<&mut [u8]>) -> Result<usize, CryptoError> {
        let len = self.algo.digest_size();
        let Some(hash) = hash else {
            return Ok(len);
        };

        if self.is_finished() {
            return Err(misused(self.algo, "finish"));
        }
        if hash.len() < len {
            Err(CryptoError::HashBufferTooSmall)?;
        }

        match std::mem::replace(&mut self.state, HashState::Finished) {
            HashState::Sha256(state) => write_digest(&state.finalize()?, hash),
            HashState::Sha384(state) => write_digest(&state.finalize()?, hash),
            HashState::Sha512(state) => write_digest(&state.finalize()?, hash),
            HashState::Finished => return Err(misused(self.algo, "finish")),
        }

        Ok(len)
    }

    /// Finishes the hash and returns the digest as a `Vec<u8>`.
    ///
    /// # Errors
    ///
    /// Same as [`finish`](Self::finish).
    pub fn finish_vec(&mut self) -> Result<Vec<u8>, CryptoError> {
        let hash_size = self.finish(None)?;
        let mut hash_buf = vec![0u8; hash_size];
        self.finish(Some(&mut hash_buf))?;
        Ok(hash_buf)
    }
}

fn misused(algo: HashAlgorithm, op: &'static str) -> CryptoError {
    tracing::error!(%algo, op, "Hash context used after finish");
    CryptoError::HashMisusedState
}

/// Copies `digest` into the front of `out`. `out` must be at least the
/// digest length.
pub(crate) fn write_digest<D: ByteDigest>(digest: &D, out: &mut [u8]) {
    out[..D::BYTE_COUNT].copy_from_slice(digest.bytes());
}
