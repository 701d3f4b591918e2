// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Statistical test utilities for cryptorandom.
//!
//! Entropy-source output cannot be checked against expected values, so tests
//! fall back to coarse statistics: per-position byte histograms with a
//! chi-squared bound, and collision counts across samples.
//!
//! ## License
//!
//! GPL-3.0-only

mod chi_squared;
mod collisions;

pub use chi_squared::{
    CHI_SQUARED_BYTE_BOUND, byte_position_histograms, chi_squared_uniform_bytes,
};
pub use collisions::count_collisions;
