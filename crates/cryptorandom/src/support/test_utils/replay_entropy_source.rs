// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::collections::VecDeque;
use alloc::vec::Vec;
use core::cell::{Cell, RefCell};

use crate::backend::NativeStatus;
use crate::error::EntropyError;
use crate::system::SystemEntropySource;
use crate::traits::EntropySource;

/// One scripted answer of a [`ReplayEntropySource`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplayStep {
    /// Copy these bytes into the request. Their length must match it.
    Bytes(Vec<u8>),
    /// Fail with this native status.
    Fail(NativeStatus),
}

/// Entropy source that answers from a script, then from the system source.
///
/// Each `fill_bytes` call consumes one [`ReplayStep`]. Once the script is
/// exhausted, calls are delegated to [`SystemEntropySource`].
///
/// # Panics
///
/// `fill_bytes` panics if a [`ReplayStep::Bytes`] length differs from the
/// requested length.
pub struct ReplayEntropySource {
    script: RefCell<VecDeque<ReplayStep>>,
    inner: SystemEntropySource,
    fill_bytes_count: Cell<usize>,
}

impl ReplayEntropySource {
    /// Creates a source that replays `steps` in order.
    pub fn new(steps: impl IntoIterator<Item = ReplayStep>) -> Self {
        Self {
            script: RefCell::new(steps.into_iter().collect()),
            inner: SystemEntropySource {},
            fill_bytes_count: Cell::new(0),
        }
    }

    /// Shorthand for a script made only of [`ReplayStep::Bytes`].
    pub fn from_patterns<I, B>(patterns: I) -> Self
    where
        I: IntoIterator<Item = B>,
        B: AsRef<[u8]>,
    {
        Self::new(
            patterns
                .into_iter()
                .map(|pattern| ReplayStep::Bytes(pattern.as_ref().to_vec())),
        )
    }

    /// Appends a step to the end of the script.
    pub fn push(&self, step: ReplayStep) {
        self.script.borrow_mut().push_back(step);
    }

    /// Number of scripted steps not consumed yet.
    pub fn remaining(&self) -> usize {
        self.script.borrow().len()
    }

    /// Returns the current call count.
    pub fn call_count(&self) -> usize {
        self.fill_bytes_count.get()
    }
}

impl EntropySource for ReplayEntropySource {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), EntropyError> {
        self.fill_bytes_count.set(self.fill_bytes_count.get() + 1);

        let step = self.script.borrow_mut().pop_front();

        match step {
            Some(ReplayStep::Bytes(bytes)) => {
                assert_eq!(
                    bytes.len(),
                    dest.len(),
                    "replayed pattern does not match the requested length"
                );
                dest.copy_from_slice(&bytes);
                Ok(())
            }
            Some(ReplayStep::Fail(status)) => Err(EntropyError::new(status)),
            None => self.inner.fill_bytes(dest),
        }
    }
}
