// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::error::EntropyError;
use crate::support::test_utils::{
    MOCK_FAILURE_STATUS, MockEntropySource, MockEntropySourceBehaviour,
};
use crate::traits::EntropySource;

#[test]
fn test_mock_entropy_source_behaviour_none() {
    let mock = MockEntropySource::new(MockEntropySourceBehaviour::None);
    let mut buf = [0u8; 32];

    let result = mock.fill_bytes(&mut buf);

    assert!(result.is_ok());
    assert_eq!(mock.call_count(), 1);
}

#[test]
fn test_mock_entropy_source_behaviour_fail_always() {
    let mock = MockEntropySource::new(MockEntropySourceBehaviour::FailAlways);
    let mut buf = [0u8; 32];

    for _ in 0..3 {
        let result = mock.fill_bytes(&mut buf);
        assert_eq!(result, Err(EntropyError::new(MOCK_FAILURE_STATUS)));
    }

    assert_eq!(mock.call_count(), 3);
}

#[test]
fn test_mock_entropy_source_behaviour_fail_at_nth_fill_bytes() {
    let mock = MockEntropySource::new(MockEntropySourceBehaviour::FailAtNthFillBytes(2));
    let mut buf = [0u8; 32];

    assert!(mock.fill_bytes(&mut buf).is_ok());
    assert!(mock.fill_bytes(&mut buf).is_err());
    assert!(mock.fill_bytes(&mut buf).is_ok());

    mock.reset_count();
    assert_eq!(mock.call_count(), 0);

    assert!(mock.fill_bytes(&mut buf).is_ok());
    assert!(mock.fill_bytes(&mut buf).is_err());
}

#[test]
fn test_mock_entropy_source_change_behaviour() {
    let mut mock = MockEntropySource::new(MockEntropySourceBehaviour::None);
    let mut bytes = [0u8; 32];

    // First works
    assert!(mock.fill_bytes(&mut bytes).is_ok());

    // Change behaviour
    mock.change_behaviour(MockEntropySourceBehaviour::FailAlways);

    // Now fails
    assert!(mock.fill_bytes(&mut bytes).is_err());

    // Change back
    mock.change_behaviour(MockEntropySourceBehaviour::None);

    // Works again
    assert!(mock.fill_bytes(&mut bytes).is_ok());
}
