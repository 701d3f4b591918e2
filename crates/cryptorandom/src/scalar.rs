// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Fixed-width scalar extraction.
//!
//! A scalar of width `W` is produced by drawing exactly `W` bytes and reading
//! them as the type's in-memory representation (native endianness, two's
//! complement for signed integers, IEEE 754 for floats). Every bit pattern is
//! accepted here; rejecting non-finite floats is the job of
//! [`generate_finite`](crate::generate_finite).

use core::mem::size_of;

use crate::error::EntropyError;
use crate::platform::{FixedInt, PlatformInt};
use crate::system::SystemEntropySource;
use crate::traits::EntropySource;

mod sealed {
    pub trait Sealed {}
}

/// A primitive whose every `size_of::<Self>()`-byte pattern is a value.
///
/// Implemented for all primitive integers and for `f32`/`f64`.
pub trait NativeScalar: Copy + sealed::Sealed {
    /// Byte buffer of exactly `size_of::<Self>()` bytes.
    type Bytes: AsMut<[u8]> + Default;

    /// Reads `bytes` as the native-endian representation of `Self`.
    fn from_native_bytes(bytes: Self::Bytes) -> Self;
}

macro_rules! impl_native_scalar {
    ($($ty:ty),* $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}

            impl NativeScalar for $ty {
                type Bytes = [u8; size_of::<$ty>()];

                #[inline(always)]
                fn from_native_bytes(bytes: Self::Bytes) -> Self {
                    <$ty>::from_ne_bytes(bytes)
                }
            }
        )*
    };
}

impl_native_scalar!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
);

/// Draws `size_of::<T>()` bytes from `entropy` and reinterprets them as `T`.
///
/// # Errors
///
/// Returns the source's [`EntropyError`]; no partially filled value is ever
/// returned.
pub fn generate_scalar<T, E>(entropy: &E) -> Result<T, EntropyError>
where
    T: NativeScalar,
    E: EntropySource + ?Sized,
{
    let mut bytes = T::Bytes::default();
    entropy.fill_bytes(bytes.as_mut())?;

    Ok(T::from_native_bytes(bytes))
}

/// Generates one random C `int` from `entropy`.
///
/// # Errors
///
/// Returns the source's [`EntropyError`] unchanged.
pub fn generate_fixed_int_with<E: EntropySource + ?Sized>(
    entropy: &E,
) -> Result<FixedInt, EntropyError> {
    generate_scalar(entropy)
}

/// Generates one random C `int` from the system backend.
///
/// # Errors
///
/// Returns [`EntropyError`] with the backend's native status.
pub fn generate_fixed_int() -> Result<FixedInt, EntropyError> {
    generate_fixed_int_with(&SystemEntropySource {})
}

/// Generates one random [`PlatformInt`] from `entropy`.
///
/// # Errors
///
/// Returns the source's [`EntropyError`] unchanged.
pub fn generate_platform_int_with<E: EntropySource + ?Sized>(
    entropy: &E,
) -> Result<PlatformInt, EntropyError> {
    generate_scalar(entropy)
}

/// Generates one random [`PlatformInt`] from the system backend.
///
/// # Errors
///
/// Returns [`EntropyError`] with the backend's native status.
pub fn generate_platform_int() -> Result<PlatformInt, EntropyError> {
    generate_platform_int_with(&SystemEntropySource {})
}
