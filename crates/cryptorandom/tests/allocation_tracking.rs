// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Checks that no buffer outlives a `generate_bytes` call on any exit path.
//!
//! A counting global allocator records allocations made by the current
//! thread while tracking is on, so parallel tests do not disturb each other.

use std::alloc::{GlobalAlloc, Layout, System};
use std::cell::Cell;

use cryptorandom::{
    BytesError, EntropyError, EntropySource, LengthError, generate_bytes, generate_bytes_with,
    generate_float_with,
};

struct TrackingAllocator;

thread_local! {
    static TRACKING: Cell<bool> = const { Cell::new(false) };
    static LIVE_BYTES: Cell<isize> = const { Cell::new(0) };
    static ALLOCATIONS: Cell<usize> = const { Cell::new(0) };
}

fn is_tracking() -> bool {
    TRACKING.try_with(Cell::get).unwrap_or(false)
}

unsafe impl GlobalAlloc for TrackingAllocator {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        let ptr = unsafe { System.alloc(layout) };

        if !ptr.is_null() && is_tracking() {
            LIVE_BYTES.with(|live| live.set(live.get() + layout.size() as isize));
            ALLOCATIONS.with(|count| count.set(count.get() + 1));
        }

        ptr
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        if is_tracking() {
            LIVE_BYTES.with(|live| live.set(live.get() - layout.size() as isize));
        }

        unsafe { System.dealloc(ptr, layout) }
    }
}

#[global_allocator]
static ALLOCATOR: TrackingAllocator = TrackingAllocator;

/// Allocation summary of a tracked closure.
#[derive(Debug, PartialEq, Eq)]
struct Tracked {
    live_bytes: isize,
    allocations: usize,
}

/// Runs `f` with tracking on. Everything `f` returns is dropped inside the
/// tracked region, so `live_bytes` is what leaked.
fn track<R>(f: impl FnOnce() -> R) -> Tracked {
    LIVE_BYTES.with(|live| live.set(0));
    ALLOCATIONS.with(|count| count.set(0));
    TRACKING.with(|tracking| tracking.set(true));

    drop(f());

    TRACKING.with(|tracking| tracking.set(false));

    Tracked {
        live_bytes: LIVE_BYTES.with(Cell::get),
        allocations: ALLOCATIONS.with(Cell::get),
    }
}

struct FailingEntropySource;

impl EntropySource for FailingEntropySource {
    fn fill_bytes(&self, _dest: &mut [u8]) -> Result<(), EntropyError> {
        Err(EntropyError::new(11))
    }
}

#[test]
fn test_failed_generate_bytes_releases_its_buffer() {
    let mut result = None;

    let tracked = track(|| {
        result = Some(generate_bytes_with(&FailingEntropySource, 16));
    });

    assert_eq!(
        result,
        Some(Err(BytesError::Entropy(EntropyError::new(11))))
    );
    assert_eq!(
        tracked,
        Tracked {
            live_bytes: 0,
            allocations: 1
        }
    );
}

#[test]
fn test_successful_generate_bytes_allocates_exactly_once() {
    let mut len = 0;

    let tracked = track(|| {
        let bytes = generate_bytes(16).expect("Failed to generate_bytes(..)");
        len = bytes.len();
    });

    assert_eq!(len, 16);
    assert_eq!(
        tracked,
        Tracked {
            live_bytes: 0,
            allocations: 1
        }
    );
}

#[test]
fn test_invalid_length_allocates_nothing() {
    let mut result = None;

    let tracked = track(|| {
        result = Some(generate_bytes_with(&FailingEntropySource, 0));
    });

    assert_eq!(
        result,
        Some(Err(BytesError::InvalidLength(LengthError::NonPositive(0))))
    );
    assert_eq!(
        tracked,
        Tracked {
            live_bytes: 0,
            allocations: 0
        }
    );
}

#[test]
fn test_failed_float_generation_allocates_nothing() {
    let mut result = None;

    let tracked = track(|| {
        result = Some(generate_float_with(&FailingEntropySource));
    });

    assert_eq!(result, Some(Err(EntropyError::new(11))));
    assert_eq!(tracked.allocations, 0);
}
