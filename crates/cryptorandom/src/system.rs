// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::backend::{self, BACKEND, NativeStatus};
use crate::error::EntropyError;
use crate::traits::EntropySource;

/// The CSPRNG selected at build time.
///
/// Stateless: every call goes straight to the backend API. See
/// [`Backend`](crate::Backend) for the available backends.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemEntropySource {}

impl SystemEntropySource {
    pub(crate) fn fill_bytes_with(
        fill_fn: &dyn Fn(&mut [u8]) -> Result<(), NativeStatus>,
        dest: &mut [u8],
    ) -> Result<(), EntropyError> {
        if dest.is_empty() {
            return Ok(());
        }

        fill_fn(dest).map_err(|status| {
            log::debug!(
                "{BACKEND} backend failed to fill {} bytes (native status {status})",
                dest.len()
            );
            EntropyError::new(status)
        })
    }
}

impl EntropySource for SystemEntropySource {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), EntropyError> {
        Self::fill_bytes_with(&backend::fill, dest)
    }
}

/// Fills `dest` from the compiled backend.
///
/// An empty slice succeeds without touching the backend.
///
/// # Errors
///
/// Returns [`EntropyError`] with the backend's native status.
///
/// # Example
///
/// ```rust
/// let mut key = [0u8; 32];
/// cryptorandom::fill_random_bytes(&mut key).expect("Failed to fill_random_bytes(..)");
/// ```
pub fn fill_random_bytes(dest: &mut [u8]) -> Result<(), EntropyError> {
    SystemEntropySource {}.fill_bytes(dest)
}
