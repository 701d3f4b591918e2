// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Random byte sequences of caller-chosen length.

use alloc::vec::Vec;

use crate::backend::MAX_LENGTH;
use crate::error::{BytesError, LengthError};
use crate::system::SystemEntropySource;
use crate::traits::EntropySource;

/// Checks a host-supplied length and converts it to a buffer size.
///
/// # Errors
///
/// - [`LengthError::NonPositive`] for `length <= 0`
/// - [`LengthError::TooLong`] for `length > MAX_LENGTH`
pub fn validate_length(length: i64) -> Result<usize, LengthError> {
    if length <= 0 {
        return Err(LengthError::NonPositive(length));
    }

    match usize::try_from(length) {
        Ok(len) if len <= MAX_LENGTH => Ok(len),
        _ => Err(LengthError::TooLong(length)),
    }
}

/// Generates `length` random bytes from `entropy`.
///
/// The length is validated before anything is allocated. The buffer is
/// allocated once, filled in place and handed back; on failure it is dropped
/// before returning.
///
/// # Errors
///
/// - [`BytesError::InvalidLength`] without calling `entropy`
/// - [`BytesError::AllocationFailed`] if the buffer cannot be reserved
/// - [`BytesError::Entropy`] with the source's native status
pub fn generate_bytes_with<E: EntropySource + ?Sized>(
    entropy: &E,
    length: i64,
) -> Result<Vec<u8>, BytesError> {
    let len = validate_length(length)?;

    let mut buffer = Vec::new();
    buffer
        .try_reserve_exact(len)
        .map_err(|_| BytesError::AllocationFailed(len))?;
    buffer.resize(len, 0);

    entropy.fill_bytes(&mut buffer)?;

    Ok(buffer)
}

/// Generates `length` random bytes from the system backend.
///
/// # Errors
///
/// See [`generate_bytes_with`].
///
/// # Example
///
/// ```rust
/// use cryptorandom::{BytesError, LengthError, generate_bytes};
///
/// let bytes = generate_bytes(16).expect("Failed to generate_bytes(..)");
/// assert_eq!(bytes.len(), 16);
///
/// assert_eq!(
///     generate_bytes(0),
///     Err(BytesError::InvalidLength(LengthError::NonPositive(0)))
/// );
/// ```
pub fn generate_bytes(length: i64) -> Result<Vec<u8>, BytesError> {
    generate_bytes_with(&SystemEntropySource {}, length)
}
