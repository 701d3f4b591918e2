// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Scalar widths of the host runtime.
//!
//! Hosts are normally configured with 64-bit integers and doubles. The
//! `narrow-platform` feature switches both to 32 bits for hosts built that way.

/// The C `int` of the target.
pub type FixedInt = core::ffi::c_int;

/// The host runtime's integer type.
#[cfg(not(feature = "narrow-platform"))]
pub type PlatformInt = i64;
/// The host runtime's integer type.
#[cfg(feature = "narrow-platform")]
pub type PlatformInt = i32;

/// The host runtime's floating-point type.
#[cfg(not(feature = "narrow-platform"))]
pub type PlatformFloat = f64;
/// The host runtime's floating-point type.
#[cfg(feature = "narrow-platform")]
pub type PlatformFloat = f32;
