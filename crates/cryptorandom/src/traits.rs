// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::error::EntropyError;

/// Trait for cryptographically secure random number generators.
///
/// Implementations must fill the whole destination or fail; callers must not
/// read `dest` after an error.
pub trait EntropySource {
    /// Fills the destination buffer with cryptographically secure random bytes.
    ///
    /// # Errors
    ///
    /// Returns [`EntropyError`] carrying the backend's native status if the
    /// entropy source fails.
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), EntropyError>;
}

impl<E: EntropySource + ?Sized> EntropySource for &E {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), EntropyError> {
        (**self).fill_bytes(dest)
    }
}
