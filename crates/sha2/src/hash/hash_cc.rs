// Copyright (C) Microsoft Corporation. All rights reserved.

//! CommonCrypto SHA-2 implementations for Apple platforms.
//!
//! Each algorithm has its own native context struct and its own set of
//! `CC_SHA*_Init`, `CC_SHA*_Update`, `CC_SHA*_Final` and one-shot `CC_SHA*`
//! functions; nothing is shared between algorithms beyond the
//! [`HashFunction`] shape. SHA-384 runs on the SHA-512 context struct.
//!
//! The context structs are plain values owned inline by the hash types, so
//! there is no native allocation to release.
//!
//! CommonCrypto takes 32-bit lengths (`CC_LONG`). Longer updates are split
//! into `CC_LONG::MAX` sized pieces and longer one-shot inputs go through the
//! incremental path.

use std::ffi::c_int;
use std::ffi::c_uchar;
use std::ffi::c_void;

use super::*;

/// `CC_LONG` from `<CommonCrypto/CommonDigest.h>`.
type CcLong = u32;

/// Largest slice a single CommonCrypto call accepts.
const MAX_CHUNK_LEN: usize = CcLong::MAX as usize;

/// `CC_SHA256_CTX`.
#[allow(dead_code)] // fields are only touched by CommonCrypto
#[repr(C)]
#[derive(Clone, Copy, Default)]
struct CcSha256Ctx {
    count: [u32; 2],
    hash: [u32; 8],
    wbuf: [u32; 16],
}

/// `CC_SHA512_CTX`, also used for SHA-384.
#[allow(dead_code)] // fields are only touched by CommonCrypto
#[repr(C)]
#[derive(Clone, Copy, Default)]
struct CcSha512Ctx {
    count: [u64; 2],
    hash: [u64; 8],
    wbuf: [u64; 16],
}

// Exported by libSystem, which every Apple binary links.
extern "C" {
    fn CC_SHA256_Init(c: *mut CcSha256Ctx) -> c_int;
    fn CC_SHA256_Update(c: *mut CcSha256Ctx, data: *const c_void, len: CcLong) -> c_int;
    fn CC_SHA256_Final(md: *mut c_uchar, c: *mut CcSha256Ctx) -> c_int;
    fn CC_SHA256(data: *const c_void, len: CcLong, md: *mut c_uchar) -> *mut c_uchar;

    fn CC_SHA384_Init(c: *mut CcSha512Ctx) -> c_int;
    fn CC_SHA384_Update(c: *mut CcSha512Ctx, data: *const c_void, len: CcLong) -> c_int;
    fn CC_SHA384_Final(md: *mut c_uchar, c: *mut CcSha512Ctx) -> c_int;
    fn CC_SHA384(data: *const c_void, len: CcLong, md: *mut c_uchar) -> *mut c_uchar;

    fn CC_SHA512_Init(c: *mut CcSha512Ctx) -> c_int;
    fn CC_SHA512_Update(c: *mut CcSha512Ctx, data: *const c_void, len: CcLong) -> c_int;
    fn CC_SHA512_Final(md: *mut c_uchar, c: *mut CcSha512Ctx) -> c_int;
    fn CC_SHA512(data: *const c_void, len: CcLong, md: *mut c_uchar) -> *mut c_uchar;
}

/// CommonCrypto digest functions return 1 on success.
fn check_status(status: c_int, err: CryptoError) -> Result<(), CryptoError> {
    if status == 1 {
        Ok(())
    } else {
        tracing::error!(status, ?err, "CommonCrypto digest call failed");
        Err(err)
    }
}

macro_rules! cc_hash_function {
    (
        $(#[$meta:meta])*
        $name:ident, $algo:ident, $digest:ty, $ctx:ty,
        $init:ident, $update:ident, $final:ident, $one_shot:ident
    ) => {
        $(#[$meta])*
        #[derive(Clone)]
        pub struct $name {
            ctx: $ctx,
        }

        impl $name {
            /// Feeds at most [`MAX_CHUNK_LEN`] bytes.
            #[allow(unsafe_code)]
            fn update_chunk(&mut self, chunk: &[u8]) -> Result<(), CryptoError> {
                debug_assert!(chunk.len() <= MAX_CHUNK_LEN);
                //SAFETY: `ctx` was initialized by `init` and `chunk` is valid
                // for reads of `chunk.len()` bytes, which fits in CC_LONG.
                let status =
                    unsafe { $update(&mut self.ctx, chunk.as_ptr().cast(), chunk.len() as CcLong) };
                check_status(status, CryptoError::HashUpdateError)
            }

            /// Feeds `data` in pieces of at most `max` bytes.
            pub(crate) fn update_chunked(
                &mut self,
                data: &[u8],
                max: usize,
            ) -> Result<(), CryptoError> {
                debug_assert!(max > 0 && max <= MAX_CHUNK_LEN);
                for chunk in data.chunks(max) {
                    self.update_chunk(chunk)?;
                }
                Ok(())
            }

            /// One-shot hash for inputs of at most `max` bytes. Longer inputs
            /// are hashed incrementally in `max` sized pieces.
            #[allow(unsafe_code)]
            pub(crate) fn hash_limited(data: &[u8], max: usize) -> Result<$digest, CryptoError> {
                debug_assert!(max > 0 && max <= MAX_CHUNK_LEN);
                if data.len() > max {
                    tracing::debug!(
                        len = data.len(),
                        max,
                        algo = %Self::ALGORITHM,
                        "Input exceeds one-shot limit, hashing incrementally"
                    );
                    let mut state = Self::init()?;
                    state.update_chunked(data, max)?;
                    return state.finalize();
                }

                let len = CcLong::try_from(data.len()).map_err(|_| CryptoError::HashError)?;
                let mut md = [0u8; <$digest as ByteDigest>::BYTE_COUNT];
                //SAFETY: `data` is valid for reads of `len` bytes and `md` is
                // exactly the digest length the function writes.
                let out = unsafe { $one_shot(data.as_ptr().cast(), len, md.as_mut_ptr()) };
                if out.is_null() {
                    tracing::error!(algo = %Self::ALGORITHM, "CommonCrypto one-shot digest failed");
                    Err(CryptoError::HashError)?;
                }
                <$digest>::from_bytes(&md)
            }
        }

        impl HashFunction for $name {
            type Digest = $digest;

            const ALGORITHM: HashAlgorithm = HashAlgorithm::$algo;

            #[allow(unsafe_code)]
            fn init() -> Result<Self, CryptoError> {
                let mut ctx = <$ctx>::default();
                //SAFETY: `ctx` is a live context struct with the layout
                // CommonCrypto expects.
                let status = unsafe { $init(&mut ctx) };
                check_status(status, CryptoError::HashInitError)?;
                Ok(Self { ctx })
            }

            fn update(&mut self, data: &[u8]) -> Result<(), CryptoError> {
                self.update_chunked(data, MAX_CHUNK_LEN)
            }

            #[allow(unsafe_code)]
            fn finalize(mut self) -> Result<Self::Digest, CryptoError> {
                let mut md = [0u8; <$digest as ByteDigest>::BYTE_COUNT];
                //SAFETY: `md` is exactly the digest length the final
                // function writes and `ctx` is initialized.
                let status = unsafe { $final(md.as_mut_ptr(), &mut self.ctx) };
                check_status(status, CryptoError::HashFinishError)?;
                <$digest>::from_bytes(&md)
            }

            fn hash(data: &[u8]) -> Result<Self::Digest, CryptoError> {
                Self::hash_limited(data, MAX_CHUNK_LEN)
            }
        }
    };
}

cc_hash_function!(
    /// SHA-256 over a CommonCrypto `CC_SHA256_CTX`.
    CcSha256,
    Sha256,
    Sha256Digest,
    CcSha256Ctx,
    CC_SHA256_Init,
    CC_SHA256_Update,
    CC_SHA256_Final,
    CC_SHA256
);

cc_hash_function!(
    /// SHA-384 over a CommonCrypto `CC_SHA512_CTX`.
    CcSha384,
    Sha384,
    Sha384Digest,
    CcSha512Ctx,
    CC_SHA384_Init,
    CC_SHA384_Update,
    CC_SHA384_Final,
    CC_SHA384
);

cc_hash_function!(
    /// SHA-512 over a CommonCrypto `CC_SHA512_CTX`.
    CcSha512,
    Sha512,
    Sha512Digest,
    CcSha512Ctx,
    CC_SHA512_Init,
    CC_SHA512_Update,
    CC_SHA512_Final,
    CC_SHA512
);
