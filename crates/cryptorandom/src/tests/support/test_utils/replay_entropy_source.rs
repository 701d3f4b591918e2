// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::error::EntropyError;
use crate::support::test_utils::{ReplayEntropySource, ReplayStep};
use crate::traits::EntropySource;

#[test]
fn test_replay_entropy_source_serves_script_in_order() {
    let replay = ReplayEntropySource::new([
        ReplayStep::Bytes(vec![1, 2]),
        ReplayStep::Fail(8),
        ReplayStep::Bytes(vec![3, 4]),
    ]);
    let mut buf = [0u8; 2];

    assert!(replay.fill_bytes(&mut buf).is_ok());
    assert_eq!(buf, [1, 2]);

    assert_eq!(replay.fill_bytes(&mut buf), Err(EntropyError::new(8)));

    assert!(replay.fill_bytes(&mut buf).is_ok());
    assert_eq!(buf, [3, 4]);

    assert_eq!(replay.call_count(), 3);
    assert_eq!(replay.remaining(), 0);
}

#[test]
fn test_replay_entropy_source_falls_back_to_system_source() {
    let replay = ReplayEntropySource::from_patterns([[0u8; 4]]);
    replay.push(ReplayStep::Bytes(vec![9; 4]));

    let mut buf = [0u8; 4];
    replay.fill_bytes(&mut buf).expect("Failed to fill_bytes(..)");
    replay.fill_bytes(&mut buf).expect("Failed to fill_bytes(..)");
    assert_eq!(buf, [9; 4]);

    let mut large = [0u8; 64];
    replay.fill_bytes(&mut large).expect("Failed to fill_bytes(..)");

    assert!(large.iter().any(|b| *b != 0));
    assert_eq!(replay.call_count(), 3);
}

#[test]
#[should_panic(expected = "replayed pattern does not match the requested length")]
fn test_replay_entropy_source_panics_on_width_mismatch() {
    let replay = ReplayEntropySource::from_patterns([[0u8; 4]]);
    let mut buf = [0u8; 8];

    let _ = replay.fill_bytes(&mut buf);
}
