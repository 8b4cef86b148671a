/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Percentile estimation over floating point samples
//!
//! Percentiles are computed with linear interpolation between the two
//! closest ranks, i.e for `n` sorted samples the `q`-th percentile sits at
//! fractional index `q/100 * (n-1)`.
//!
//! Non-finite samples (NaN and infinities) are skipped, HDR files
//! occasionally carry them in dead pixels and a single NaN would otherwise
//! poison every statistic.

/// Return the `q`-th percentile of `samples`
///
/// # Arguments
/// - samples: Values to inspect, order does not matter
/// - q: Percentile in the range `0.0..=100.0`
///
/// # Returns
/// - `Some(value)`: The interpolated percentile
/// - `None`: `samples` contained no finite values
///
/// # Panics
/// If `q` is outside `0.0..=100.0`
pub fn percentile(samples: &[f32], q: f32) -> Option<f32> {
    let mut scratch = finite_samples(samples);

    if scratch.is_empty() {
        return None;
    }
    Some(select_percentile(&mut scratch, q))
}

/// Return the `(low, high)` percentiles of `samples` in one pass over
/// a single scratch copy.
///
/// # Returns
/// - `Some((low,high))`: The interpolated percentiles, `low <= high`
///   whenever `low_q <= high_q`
/// - `None`: `samples` contained no finite values
///
/// # Panics
/// If either percentile is outside `0.0..=100.0`
pub fn percentile_bounds(samples: &[f32], low_q: f32, high_q: f32) -> Option<(f32, f32)> {
    let mut scratch = finite_samples(samples);

    if scratch.is_empty() {
        return None;
    }
    // selection only permutes the scratch buffer, the multiset of values is
    // unchanged so the second query sees the same data as the first
    let low = select_percentile(&mut scratch, low_q);
    let high = select_percentile(&mut scratch, high_q);

    Some((low, high))
}

fn finite_samples(samples: &[f32]) -> Vec<f32> {
    samples.iter().copied().filter(|x| x.is_finite()).collect()
}

#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
fn select_percentile(scratch: &mut [f32], q: f32) -> f32 {
    assert!(
        (0.0..=100.0).contains(&q),
        "percentile must be between 0 and 100, got {q}"
    );

    let last = scratch.len() - 1;
    let position = f64::from(q) / 100.0 * last as f64;

    let lower = (position.floor() as usize).min(last);
    let fraction = (position - lower as f64) as f32;

    let (_, lower_value, rest) = scratch.select_nth_unstable_by(lower, f32::total_cmp);
    let lower_value = *lower_value;

    if fraction == 0.0 || rest.is_empty() {
        return lower_value;
    }
    // everything right of the pivot is >= it, so the next rank is the minimum
    let upper_value = rest.iter().copied().fold(f32::INFINITY, f32::min);

    lower_value + (upper_value - lower_value) * fraction
}

#[cfg(test)]
mod tests {
    use nanorand::Rng;

    use crate::percentile::{percentile, percentile_bounds};

    #[test]
    fn percentile_interpolates_between_ranks() {
        let samples = [1.0, 2.0, 3.0, 4.0, 5.0];

        assert_eq!(percentile(&samples, 0.0), Some(1.0));
        assert_eq!(percentile(&samples, 50.0), Some(3.0));
        assert_eq!(percentile(&samples, 100.0), Some(5.0));
        // 1% of 4 is 0.04 -> 1.0 + 0.04
        let p1 = percentile(&samples, 1.0).unwrap();
        assert!((p1 - 1.04).abs() < 1e-5);
        // 99% of 4 is 3.96 -> 4.0 + 0.96
        let p99 = percentile(&samples, 99.0).unwrap();
        assert!((p99 - 4.96).abs() < 1e-5);
    }

    #[test]
    fn percentile_ignores_order() {
        let sorted = [0.25, 0.5, 1.0, 8.0, 16.0, 64.0];
        let shuffled = [16.0, 0.5, 64.0, 0.25, 8.0, 1.0];

        assert_eq!(percentile(&sorted, 37.0), percentile(&shuffled, 37.0));
    }

    #[test]
    fn percentile_skips_non_finite_values() {
        let samples = [f32::NAN, 2.0, f32::INFINITY, 4.0, f32::NEG_INFINITY];

        assert_eq!(percentile_bounds(&samples, 0.0, 100.0), Some((2.0, 4.0)));
    }

    #[test]
    fn percentile_of_nothing_is_none() {
        assert_eq!(percentile(&[], 50.0), None);
        assert_eq!(percentile_bounds(&[f32::NAN], 1.0, 99.0), None);
    }

    #[test]
    fn bounds_match_single_queries() {
        let mut raw = vec![0_u16; 4096];
        nanorand::WyRand::new_seed(7).fill(&mut raw);

        let samples: Vec<f32> = raw.iter().map(|x| f32::from(*x) / 64.0).collect();

        let (low, high) = percentile_bounds(&samples, 1.0, 99.0).unwrap();

        assert_eq!(Some(low), percentile(&samples, 1.0));
        assert_eq!(Some(high), percentile(&samples, 99.0));
        assert!(low <= high);
    }

    #[test]
    fn constant_samples_have_zero_range() {
        let samples = vec![3.5; 100];
        assert_eq!(percentile_bounds(&samples, 1.0, 99.0), Some((3.5, 3.5)));
    }
}
