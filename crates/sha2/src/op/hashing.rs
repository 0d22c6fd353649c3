// Copyright (C) Microsoft Corporation. All rights reserved.
//! Traits for SHA-2 hash operations.
//!
//! A [`HashFunction`] owns one native hashing context and moves through
//! `init → update (0..N times) → finalize`. [`HashFunction::finalize`] takes
//! the state by value, so updating or finalizing a finished context does not
//! compile.
//!
//! # Streaming equivalence
//!
//! For any split of a message into chunks `c1..cn`, feeding the chunks in
//! order through [`update`](HashFunction::update) and finalizing yields the
//! same digest as [`hash`](HashFunction::hash) over the whole message.

use std::fmt;

use super::*;

/// Fixed-length digest produced by a [`HashFunction`].
///
/// The byte length is a compile-time constant of the algorithm. A digest is
/// never mutated after creation; equality is exact byte equality.
pub trait ByteDigest: AsRef<[u8]> + Clone + fmt::Debug + PartialEq + Eq + Sized {
    /// Digest length in bytes.
    const BYTE_COUNT: usize;

    /// Builds a digest from raw bytes.
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::DigestLengthMismatch`] if `bytes.len()` is not
    /// [`BYTE_COUNT`](Self::BYTE_COUNT). Input is never truncated or padded.
    fn from_bytes(bytes: &[u8]) -> Result<Self, CryptoError>;

    /// Returns the digest bytes.
    fn bytes(&self) -> &[u8];

    /// Returns the digest bytes as an owned vector.
    fn to_vec(&self) -> Vec<u8> {
        self.bytes().to_vec()
    }
}

/// Incremental and one-shot hashing over a native context.
///
/// # Lifecycle
///
/// 1. [`init`](Self::init) creates and initializes the native context
/// 2. [`update`](Self::update) feeds data, any number of times
/// 3. [`finalize`](Self::finalize) consumes the state and yields the digest
///
/// Dropping an unfinished state releases the native context.
///
/// # Thread Safety
///
/// A state must not be shared between threads while it is being updated.
/// Distinct states are independent and can be moved to other threads.
pub trait HashFunction: Sized {
    /// Digest type produced by this function.
    type Digest: ByteDigest;

    /// Algorithm this type is bound to.
    const ALGORITHM: HashAlgorithm;

    /// Creates a fresh hashing state.
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::HashInitError`] if the native context cannot
    /// be created or initialized.
    fn init() -> Result<Self, CryptoError>;

    /// Feeds `data` into the hash state.
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::HashUpdateError`] if the native update fails.
    fn update(&mut self, data: &[u8]) -> Result<(), CryptoError>;

    /// Consumes the state and produces the digest.
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::HashFinishError`] if native finalization fails.
    fn finalize(self) -> Result<Self::Digest, CryptoError>;

    /// Hashes `data` in a single native call.
    ///
    /// Produces the same digest as `init`, `update(data)`, `finalize`.
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::HashError`] if the native call fails.
    fn hash(data: &[u8]) -> Result<Self::Digest, CryptoError>;
}
