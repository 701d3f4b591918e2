// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Kernel CSPRNG backend.
//!
//! - Linux/Android: `getrandom(2)` on the urandom pool. Short reads keep
//!   filling the remainder; `EINTR` re-issues the syscall.
//! - macOS/iOS, FreeBSD, OpenBSD: `getentropy(3)`, at most 256 bytes per call.
//! - Windows: `BCryptGenRandom` with the system-preferred RNG.
//!
//! On Unix the native status is `errno`. On Windows it is the `NTSTATUS`
//! returned by `BCryptGenRandom` (success is `STATUS_SUCCESS`, 0).

use super::Backend;

/// The backend compiled into this build.
pub const BACKEND: Backend = Backend::Kernel;

pub use imp::NativeStatus;
pub(crate) use imp::fill;

#[cfg(any(target_os = "linux", target_os = "android"))]
mod imp {
    use libc::{EINTR, c_void, getrandom};

    /// `errno` reported by `getrandom(2)`.
    pub type NativeStatus = i32;

    pub(crate) fn fill(dest: &mut [u8]) -> Result<(), NativeStatus> {
        let mut filled = 0;

        while filled < dest.len() {
            let remaining = &mut dest[filled..];
            let ret =
                unsafe { getrandom(remaining.as_mut_ptr() as *mut c_void, remaining.len(), 0) };

            if ret < 0 {
                let errno = super::last_errno();
                if errno == EINTR {
                    continue;
                }

                return Err(errno);
            }

            filled += ret as usize;
        }

        Ok(())
    }
}

#[cfg(any(
    target_vendor = "apple",
    target_os = "freebsd",
    target_os = "openbsd"
))]
mod imp {
    use libc::{c_void, getentropy};

    /// `errno` reported by `getentropy(3)`.
    pub type NativeStatus = i32;

    /// `getentropy` refuses requests above this size with `EIO`.
    const GETENTROPY_MAX: usize = 256;

    pub(crate) fn fill(dest: &mut [u8]) -> Result<(), NativeStatus> {
        for chunk in dest.chunks_mut(GETENTROPY_MAX) {
            let ret = unsafe { getentropy(chunk.as_mut_ptr() as *mut c_void, chunk.len()) };

            if ret != 0 {
                return Err(super::last_errno());
            }
        }

        Ok(())
    }
}

#[cfg(windows)]
mod imp {
    use windows_sys::Win32::Foundation::{NTSTATUS, STATUS_SUCCESS};
    use windows_sys::Win32::Security::Cryptography::{
        BCRYPT_USE_SYSTEM_PREFERRED_RNG, BCryptGenRandom,
    };

    /// `NTSTATUS` returned by `BCryptGenRandom`.
    pub type NativeStatus = NTSTATUS;

    pub(crate) fn fill(dest: &mut [u8]) -> Result<(), NativeStatus> {
        // cbBuffer is a ULONG.
        for chunk in dest.chunks_mut(u32::MAX as usize) {
            let status = unsafe {
                BCryptGenRandom(
                    core::ptr::null_mut(),
                    chunk.as_mut_ptr(),
                    chunk.len() as u32,
                    BCRYPT_USE_SYSTEM_PREFERRED_RNG,
                )
            };

            if status != STATUS_SUCCESS {
                return Err(status);
            }
        }

        Ok(())
    }
}

#[cfg(not(any(
    target_os = "linux",
    target_os = "android",
    target_vendor = "apple",
    target_os = "freebsd",
    target_os = "openbsd",
    windows
)))]
compile_error!(
    "cryptorandom: the `kernel` backend has no binding for this target; \
     build with `default-features = false` and the `openssl` feature"
);

#[cfg(unix)]
pub(crate) fn last_errno() -> i32 {
    errno::errno().0
}
