// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// Upper bound for the chi-squared statistic of a 256-bin byte histogram.
///
/// With 255 degrees of freedom the statistic has mean 255 and standard
/// deviation ~22.6; 400 sits more than six deviations out, so a healthy
/// source essentially never crosses it.
pub const CHI_SQUARED_BYTE_BOUND: f64 = 400.0;

/// Builds one 256-bin histogram per byte position.
///
/// All samples must have the same length; the result has one histogram per
/// position of the first sample.
///
/// # Panics
///
/// Panics if samples differ in length.
pub fn byte_position_histograms<S: AsRef<[u8]>>(samples: &[S]) -> Vec<[u64; 256]> {
    let width = samples.first().map_or(0, |s| s.as_ref().len());
    let mut histograms = vec![[0u64; 256]; width];

    for sample in samples {
        let sample = sample.as_ref();
        assert_eq!(sample.len(), width, "samples must share one width");

        for (histogram, byte) in histograms.iter_mut().zip(sample) {
            histogram[*byte as usize] += 1;
        }
    }

    histograms
}

/// Pearson's chi-squared statistic of `histogram` against a uniform byte
/// distribution.
///
/// Returns 0.0 for an empty histogram.
pub fn chi_squared_uniform_bytes(histogram: &[u64; 256]) -> f64 {
    let total: u64 = histogram.iter().sum();
    if total == 0 {
        return 0.0;
    }

    let expected = total as f64 / 256.0;

    histogram
        .iter()
        .map(|observed| {
            let delta = *observed as f64 - expected;
            delta * delta / expected
        })
        .sum()
}
