// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Build-time backend selection.
//!
//! Exactly one submodule is compiled. Each one exposes the same surface:
//!
//! - `NativeStatus`: the backend's own failure code type
//! - `BACKEND`: which [`Backend`] it is
//! - `fill(dest)`: fills `dest` completely or returns the native status
//!
//! No backend retries a failure, falls back to another backend, or reports
//! partial success.

use core::ffi::c_int;
use core::fmt;

#[cfg(not(any(feature = "kernel", feature = "security-framework", feature = "openssl")))]
compile_error!(
    "cryptorandom: no entropy backend selected; enable one of the `kernel`, \
     `security-framework` or `openssl` features"
);

#[cfg(any(
    all(feature = "kernel", feature = "security-framework"),
    all(feature = "kernel", feature = "openssl"),
    all(feature = "security-framework", feature = "openssl"),
))]
compile_error!(
    "cryptorandom: more than one entropy backend selected; the `kernel`, \
     `security-framework` and `openssl` features are mutually exclusive \
     (use `default-features = false` to drop `kernel`)"
);

#[cfg(feature = "kernel")]
mod kernel;
#[cfg(feature = "kernel")]
pub(crate) use kernel::fill;
#[cfg(feature = "kernel")]
pub use kernel::{BACKEND, NativeStatus};
#[cfg(all(test, feature = "kernel", unix))]
pub(crate) use kernel::last_errno;

#[cfg(feature = "security-framework")]
mod security_framework;
#[cfg(feature = "security-framework")]
pub(crate) use security_framework::fill;
#[cfg(feature = "security-framework")]
pub use security_framework::{BACKEND, NativeStatus};

#[cfg(feature = "openssl")]
mod openssl;
#[cfg(feature = "openssl")]
pub(crate) use self::openssl::fill;
#[cfg(feature = "openssl")]
pub use self::openssl::{BACKEND, NativeStatus};

/// Largest number of bytes a single [`generate_bytes`](crate::generate_bytes)
/// request may ask for.
///
/// Matches the narrowest length type among the backends (`RAND_bytes` takes
/// a C `int`). Every backend accepts requests up to this size.
pub const MAX_LENGTH: usize = c_int::MAX as usize;

/// The entropy API family a build draws its randomness from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    /// The operating system kernel CSPRNG.
    Kernel,
    /// Apple's CommonCrypto random generator.
    SecurityFramework,
    /// OpenSSL's `RAND_bytes`.
    OpenSsl,
}

impl Backend {
    /// Short, stable name of the backend.
    pub const fn name(self) -> &'static str {
        match self {
            Backend::Kernel => "kernel",
            Backend::SecurityFramework => "security-framework",
            Backend::OpenSsl => "openssl",
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
