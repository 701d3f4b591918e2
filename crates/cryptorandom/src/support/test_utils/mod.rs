// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Test utilities for mocking and scripting entropy sources.
//!
//! Provides entropy sources with configurable failures and replayable output
//! so callers can exercise error paths and the rejection-sampling loop.

mod mock_entropy_source;
mod replay_entropy_source;

pub use mock_entropy_source::{MOCK_FAILURE_STATUS, MockEntropySource, MockEntropySourceBehaviour};
pub use replay_entropy_source::{ReplayEntropySource, ReplayStep};
