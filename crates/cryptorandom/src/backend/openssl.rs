// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! OpenSSL backend (`RAND_bytes`).
//!
//! `RAND_bytes` signals success with `1`. On failure the native status is the
//! earliest code in the thread's OpenSSL error queue, i.e. what
//! `ERR_get_error()` would return. OpenSSL does not always queue a code, in
//! which case the status is 0.
//!
//! The `openssl` crate runs the library's one-time initialisation before the
//! first `RAND_bytes` call.

use core::ffi::{c_int, c_ulong};

use ::openssl::error::Error as OpenSslError;
use ::openssl::rand::rand_bytes;

use super::Backend;

/// The backend compiled into this build.
pub const BACKEND: Backend = Backend::OpenSsl;

/// Error-queue code (`unsigned long`) reported by OpenSSL.
pub type NativeStatus = c_ulong;

pub(crate) fn fill(dest: &mut [u8]) -> Result<(), NativeStatus> {
    // RAND_bytes takes an int length.
    for chunk in dest.chunks_mut(c_int::MAX as usize) {
        rand_bytes(chunk).map_err(|stack| stack.errors().first().map_or(0, OpenSslError::code))?;
    }

    Ok(())
}
