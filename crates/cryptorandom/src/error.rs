// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::ffi::c_ulong;

use thiserror::Error;

use crate::backend::{BACKEND, Backend, NativeStatus};

/// The compiled entropy backend reported a failure.
///
/// Carries the backend's own status code unchanged. Its meaning depends on
/// [`BACKEND`]: `errno` or `NTSTATUS` for the kernel backend,
/// `CCRNGStatus` for the security framework, the first queued
/// `ERR_get_error()` code for OpenSSL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{} entropy backend failed with native status {status}", BACKEND)]
pub struct EntropyError {
    status: NativeStatus,
}

impl EntropyError {
    /// Wraps a native backend status.
    pub const fn new(status: NativeStatus) -> Self {
        Self { status }
    }

    /// The status exactly as the backend reported it.
    pub const fn status(&self) -> NativeStatus {
        self.status
    }

    /// The backend that produced the status.
    pub const fn backend(&self) -> Backend {
        BACKEND
    }

    /// The status as a 64-bit host integer.
    ///
    /// The status is first read as a C `unsigned long`, then cast to `i64`.
    /// A negative `NTSTATUS` therefore reaches the host zero-extended from 32
    /// bits on Windows (`0xC000000D` becomes 3221225485). Codes above
    /// `i64::MAX` wrap.
    pub const fn to_host_integer(&self) -> i64 {
        self.status as c_ulong as i64
    }
}

/// A requested length was rejected before any backend call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LengthError {
    /// Zero or negative length.
    #[error("length must be a positive integer (got {0})")]
    NonPositive(i64),
    /// Length above [`MAX_LENGTH`](crate::MAX_LENGTH).
    #[error("length is too long (got {0})")]
    TooLong(i64),
}

/// Errors returned by [`generate_bytes`](crate::generate_bytes).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BytesError {
    /// The caller asked for an unusable length.
    #[error(transparent)]
    InvalidLength(#[from] LengthError),
    /// The output buffer could not be allocated.
    #[error("memory allocation failed ({0} bytes)")]
    AllocationFailed(usize),
    /// The backend failed to fill the buffer.
    #[error(transparent)]
    Entropy(#[from] EntropyError),
}

/// Errors returned by [`generate_finite_bounded`](crate::generate_finite_bounded).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FiniteError {
    /// The backend failed; sampling stopped at once.
    #[error(transparent)]
    Entropy(#[from] EntropyError),
    /// Every candidate was NaN or infinite.
    #[error("no finite value after {attempts} attempts")]
    Exhausted {
        /// Number of candidates drawn and rejected.
        attempts: usize,
    },
}
