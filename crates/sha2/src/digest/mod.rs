// Copyright (C) Microsoft Corporation. All rights reserved.

//! Digest value types.
//!
//! One type per algorithm, each wrapping exactly the algorithm's digest
//! length. Digests are shared by both backends, so results from either
//! backend compare directly.

use std::fmt;

use super::*;

macro_rules! define_digest {
    ($(#[$meta:meta])* $name:ident, $len:literal) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash)]
        pub struct $name {
            bytes: [u8; $len],
        }

        impl ByteDigest for $name {
            const BYTE_COUNT: usize = $len;

            fn from_bytes(bytes: &[u8]) -> Result<Self, CryptoError> {
                let bytes: [u8; $len] =
                    bytes
                        .try_into()
                        .map_err(|_| CryptoError::DigestLengthMismatch {
                            expected: $len,
                            actual: bytes.len(),
                        })?;
                Ok(Self { bytes })
            }

            fn bytes(&self) -> &[u8] {
                &self.bytes
            }
        }

        impl AsRef<[u8]> for $name {
            fn as_ref(&self) -> &[u8] {
                &self.bytes
            }
        }

        impl TryFrom<&[u8]> for $name {
            type Error = CryptoError;

            fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
                Self::from_bytes(bytes)
            }
        }

        impl From<$name> for [u8; $len] {
            fn from(digest: $name) -> Self {
                digest.bytes
            }
        }

        impl fmt::LowerHex for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                for b in &self.bytes {
                    write!(f, "{b:02x}")?;
                }
                Ok(())
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::LowerHex::fmt(self, f)
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_tuple(stringify!($name))
                    .field(&format_args!("{self:x}"))
                    .finish()
            }
        }
    };
}

define_digest!(
    /// SHA-256 digest (32 bytes).
    Sha256Digest,
    32
);

define_digest!(
    /// SHA-384 digest (48 bytes).
    Sha384Digest,
    48
);

define_digest!(
    /// SHA-512 digest (64 bytes).
    Sha512Digest,
    64
);
