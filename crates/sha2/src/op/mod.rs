// Copyright (C) Microsoft Corporation. All rights reserved.

//! Core hashing traits.
//!
//! - [`hashing`]: the [`HashFunction`] state machine every backend
//!   implements, and the [`ByteDigest`] contract for its output
//!
//! Backends implement these traits for concrete per-algorithm types. The
//! public `Sha256`/`Sha384`/`Sha512` names are aliases resolved at compile
//! time, so generic code written against [`HashFunction`] is monomorphized
//! for exactly one backend.
mod hashing;

pub use hashing::*;

use super::*;
