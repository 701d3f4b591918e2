// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::collections::HashSet;

/// Counts samples that repeat an earlier sample.
pub fn count_collisions<S: AsRef<[u8]>>(samples: &[S]) -> usize {
    let mut seen: HashSet<&[u8]> = HashSet::with_capacity(samples.len());
    let mut collisions = 0;

    for sample in samples {
        if !seen.insert(sample.as_ref()) {
            collisions += 1;
        }
    }

    collisions
}

#[cfg(test)]
mod tests {
    use super::count_collisions;

    #[test]
    fn test_count_collisions() {
        let samples = [vec![1u8, 2], vec![3, 4], vec![1, 2], vec![1, 2]];
        assert_eq!(count_collisions(&samples), 2);

        let distinct = [[0u8; 4], [1u8; 4]];
        assert_eq!(count_collisions(&distinct), 0);
    }
}
