// Copyright (C) Microsoft Corporation. All rights reserved.

//! High-level operation wrappers.
//!
//! - [`hasher`]: hash computation with the algorithm chosen at run time
//!   (one-shot and streaming)
//!
//! # Buffer Management
//!
//! Operations support two buffer patterns:
//! - Pass `None` to query the required buffer size
//! - Pass `Some(buffer)` to perform the actual operation
//!
//! Convenience methods returning owned `Vec<u8>` results are provided as well.
//!
//! # Thread Safety
//!
//! Operation contexts are not thread-safe. Each context should be used
//! from a single thread. For concurrent operations, create separate contexts.
mod hasher;

pub use hasher::*;

use super::*;
