// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Apple CommonCrypto backend (`CCRandomGenerateBytes`).
//!
//! Success is `kCCSuccess` (0). Any other value is a `CCRNGStatus` such as
//! `kCCRNGFailure` (-4307) and is reported unchanged.

#[cfg(not(target_vendor = "apple"))]
compile_error!("cryptorandom: the `security-framework` backend is only available on Apple targets");

use core::ffi::c_void;

use super::Backend;

/// The backend compiled into this build.
pub const BACKEND: Backend = Backend::SecurityFramework;

/// `CCRNGStatus` returned by `CCRandomGenerateBytes`.
pub type NativeStatus = i32;

/// kCCSuccess
const CC_SUCCESS: NativeStatus = 0;

// libSystem re-exports CommonCrypto, so no explicit link attribute is needed.
unsafe extern "C" {
    fn CCRandomGenerateBytes(bytes: *mut c_void, count: usize) -> NativeStatus;
}

pub(crate) fn fill(dest: &mut [u8]) -> Result<(), NativeStatus> {
    let status = unsafe { CCRandomGenerateBytes(dest.as_mut_ptr() as *mut c_void, dest.len()) };

    if status != CC_SUCCESS {
        return Err(status);
    }

    Ok(())
}
