// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Finite floating-point values by rejection sampling.
//!
//! Raw IEEE 754 bit patterns include NaN and ±infinity. A candidate is drawn
//! from the full bit width and discarded until it is finite, which keeps the
//! distribution over finite encodings intact. Only exponent-all-ones patterns
//! are rejected (1 in 2^11 for `f64`, 1 in 2^8 for `f32`), so the expected
//! number of draws is barely above one.
//!
//! A backend failure ends the loop at once. A backend that only ever yields
//! non-finite patterns makes [`generate_finite`] spin forever; use
//! [`generate_finite_bounded`] when that must be ruled out.

use core::num::NonZeroUsize;

use crate::error::{EntropyError, FiniteError};
use crate::platform::PlatformFloat;
use crate::scalar::{NativeScalar, generate_scalar};
use crate::system::SystemEntropySource;
use crate::traits::EntropySource;

/// IEEE 754 types that can be rejection-sampled into finite values.
pub trait FiniteFloat: NativeScalar {
    /// `true` unless the value is NaN or ±infinity.
    fn is_finite_value(self) -> bool;

    /// `true` if the value is NaN.
    fn is_nan_value(self) -> bool;
}

impl FiniteFloat for f32 {
    #[inline(always)]
    fn is_finite_value(self) -> bool {
        self.is_finite()
    }

    #[inline(always)]
    fn is_nan_value(self) -> bool {
        self.is_nan()
    }
}

impl FiniteFloat for f64 {
    #[inline(always)]
    fn is_finite_value(self) -> bool {
        self.is_finite()
    }

    #[inline(always)]
    fn is_nan_value(self) -> bool {
        self.is_nan()
    }
}

#[inline(always)]
fn trace_rejected<F: FiniteFloat>(candidate: F) {
    let kind = if candidate.is_nan_value() {
        "NaN"
    } else {
        "infinite"
    };
    log::trace!("rejected {kind} candidate, drawing again");
}

/// Draws candidates from `entropy` until one is finite.
///
/// # Errors
///
/// Returns the first [`EntropyError`] the source reports; nothing is retried
/// after a backend failure.
pub fn generate_finite<F, E>(entropy: &E) -> Result<F, EntropyError>
where
    F: FiniteFloat,
    E: EntropySource + ?Sized,
{
    loop {
        let candidate: F = generate_scalar(entropy)?;

        if candidate.is_finite_value() {
            return Ok(candidate);
        }

        trace_rejected(candidate);
    }
}

/// Like [`generate_finite`], but gives up after `max_attempts` candidates.
///
/// # Errors
///
/// - [`FiniteError::Entropy`] on the first backend failure
/// - [`FiniteError::Exhausted`] if all `max_attempts` candidates were non-finite
pub fn generate_finite_bounded<F, E>(
    entropy: &E,
    max_attempts: NonZeroUsize,
) -> Result<F, FiniteError>
where
    F: FiniteFloat,
    E: EntropySource + ?Sized,
{
    for _ in 0..max_attempts.get() {
        let candidate: F = generate_scalar(entropy)?;

        if candidate.is_finite_value() {
            return Ok(candidate);
        }

        trace_rejected(candidate);
    }

    log::debug!("no finite value after {} attempts", max_attempts.get());

    Err(FiniteError::Exhausted {
        attempts: max_attempts.get(),
    })
}

/// Generates one random finite [`PlatformFloat`] from `entropy`.
///
/// # Errors
///
/// Returns the first [`EntropyError`] the source reports.
pub fn generate_float_with<E: EntropySource + ?Sized>(
    entropy: &E,
) -> Result<PlatformFloat, EntropyError> {
    generate_finite(entropy)
}

/// Generates one random finite [`PlatformFloat`] from the system backend.
///
/// The value is never NaN or infinite.
///
/// # Errors
///
/// Returns [`EntropyError`] with the backend's native status.
pub fn generate_float() -> Result<PlatformFloat, EntropyError> {
    generate_float_with(&SystemEntropySource {})
}
