// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// Library version as `major.minor.patch`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Major component of [`VERSION`].
pub const VERSION_MAJOR: &str = env!("CARGO_PKG_VERSION_MAJOR");

/// Minor component of [`VERSION`].
pub const VERSION_MINOR: &str = env!("CARGO_PKG_VERSION_MINOR");

/// Patch component of [`VERSION`].
pub const VERSION_PATCH: &str = env!("CARGO_PKG_VERSION_PATCH");
