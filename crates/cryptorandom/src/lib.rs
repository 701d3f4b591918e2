// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # cryptorandom
//!
//! Cryptographically secure random bytes and typed scalars drawn from the
//! platform CSPRNG.
//!
//! The crate is the core behind a scripting-language binding: it exposes a
//! handful of plain functions that either return a value or pass the
//! backend's native failure status through untouched.
//!
//! ## Operations
//!
//! - [`generate_bytes`]: `N` random bytes, `N` validated before allocating
//! - [`generate_fixed_int`]: one random C `int`
//! - [`generate_platform_int`]: one random [`PlatformInt`]
//! - [`generate_float`]: one random, finite [`PlatformFloat`]
//!
//! Each operation has a `_with` form taking any [`EntropySource`], which is
//! how tests inject failing or scripted sources.
//!
//! ## Example
//!
//! ```rust
//! use cryptorandom::{generate_bytes, generate_float, generate_platform_int};
//!
//! let bytes = generate_bytes(16).expect("Failed to generate bytes");
//! assert_eq!(bytes.len(), 16);
//!
//! let value = generate_float().expect("Failed to generate float");
//! assert!(value.is_finite());
//!
//! let _integer = generate_platform_int().expect("Failed to generate integer");
//! ```
//!
//! ## Backends
//!
//! Exactly one backend is compiled in, chosen with a Cargo feature:
//!
//! | Feature              | API                                                        | Native status        |
//! |----------------------|------------------------------------------------------------|----------------------|
//! | `kernel` (default)   | `getrandom(2)`, `getentropy(3)` or `BCryptGenRandom`       | `errno` / `NTSTATUS` |
//! | `security-framework` | `CCRandomGenerateBytes`                                    | `CCRNGStatus`        |
//! | `openssl`            | `RAND_bytes`                                               | `ERR_get_error()`    |
//!
//! Selecting none, or more than one, fails the build. Non-default backends
//! need `default-features = false`.

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod backend;
mod bytes;
mod error;
mod float;
mod platform;
mod scalar;
mod support;
mod system;
mod traits;
mod version;

pub use backend::{BACKEND, Backend, MAX_LENGTH, NativeStatus};
pub use bytes::{generate_bytes, generate_bytes_with, validate_length};
pub use error::{BytesError, EntropyError, FiniteError, LengthError};
pub use float::{
    FiniteFloat, generate_finite, generate_finite_bounded, generate_float, generate_float_with,
};
pub use platform::{FixedInt, PlatformFloat, PlatformInt};
pub use scalar::{
    NativeScalar, generate_fixed_int, generate_fixed_int_with, generate_platform_int,
    generate_platform_int_with, generate_scalar,
};
pub use system::{SystemEntropySource, fill_random_bytes};
pub use traits::EntropySource;
pub use version::{VERSION, VERSION_MAJOR, VERSION_MINOR, VERSION_PATCH};

#[cfg(any(test, feature = "test-utils"))]
pub use support::test_utils;
