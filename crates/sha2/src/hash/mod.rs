// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! SHA-2 hash function implementations.
//!
//! This module binds SHA-256, SHA-384 and SHA-512 to the platform crypto
//! library. Both backends implement [`HashFunction`] for three concrete
//! types; `define_type!` picks one set at compile time and exposes it as
//! [`Sha256`], [`Sha384`] and [`Sha512`].
//!
//! # Backends
//!
//! - **CommonCrypto** (Apple targets): one context struct and dedicated
//!   `CC_SHA*_Init/Update/Final` functions per algorithm, plus the one-shot
//!   `CC_SHA*` entry point
//! - **OpenSSL** (all other targets): one generic EVP digest context for all
//!   algorithms, parameterized by the `MessageDigest` selected when the
//!   context is created
//!
//! # Operation Modes
//!
//! ## One-shot Operations
//!
//! [`HashFunction::hash`] hashes a complete buffer with a single native call.
//!
//! ## Streaming Operations
//!
//! [`HashFunction::init`], [`HashFunction::update`] and
//! [`HashFunction::finalize`] process data arriving in chunks.

use super::*;

mod algo;
mod context;

#[cfg(target_vendor = "apple")]
mod hash_cc;

#[cfg(any(not(target_vendor = "apple"), feature = "openssl"))]
mod hash_ossl;

pub use algo::*;
pub use context::*;
// The OpenSSL types, available next to CommonCrypto for comparison.
#[cfg(all(target_vendor = "apple", feature = "openssl"))]
pub use hash_ossl::OsslSha256;
#[cfg(all(target_vendor = "apple", feature = "openssl"))]
pub use hash_ossl::OsslSha384;
#[cfg(all(target_vendor = "apple", feature = "openssl"))]
pub use hash_ossl::OsslSha512;

define_type!(pub Sha256, hash_cc::CcSha256, hash_ossl::OsslSha256);
define_type!(pub Sha384, hash_cc::CcSha384, hash_ossl::OsslSha384);
define_type!(pub Sha512, hash_cc::CcSha512, hash_ossl::OsslSha512);

/// Name of the native library backing [`Sha256`], [`Sha384`] and [`Sha512`].
#[cfg(target_vendor = "apple")]
pub const BACKEND: &str = "CommonCrypto";

/// Name of the native library backing [`Sha256`], [`Sha384`] and [`Sha512`].
#[cfg(not(target_vendor = "apple"))]
pub const BACKEND: &str = "OpenSSL";
