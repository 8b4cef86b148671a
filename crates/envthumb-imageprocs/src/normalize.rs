/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Clip and rescale floating point samples into `[0.0, 1.0]`

/// Clip every sample to `[lower, upper]` and linearly map that
/// range onto `[0.0, 1.0]` in place.
///
/// # Arguments
///
/// * `pixels`: Samples to modify
/// * `lower`: Value that maps to `0.0`, anything below is clipped
/// * `upper`: Value that maps to `1.0`, anything above is clipped
///
/// # Degenerate ranges
///
/// If `upper - lower` is not strictly positive or is not finite (constant
/// images, all-NaN inputs) there is no meaningful mapping and every sample
/// becomes `0.0`.
///
/// NaN samples always become `0.0`.
pub fn normalize_range(pixels: &mut [f32], lower: f32, upper: f32) {
    let range = upper - lower;

    if !(range.is_finite() && range > 0.0) {
        pixels.iter_mut().for_each(|x| *x = 0.0);
        return;
    }
    let inv_range = 1.0 / range;

    for pixel in pixels.iter_mut() {
        if pixel.is_nan() {
            *pixel = 0.0;
            continue;
        }
        let clipped = pixel.clamp(lower, upper);
        // clamp for rounding, (upper-lower)*inv_range can land a hair above one
        *pixel = ((clipped - lower) * inv_range).clamp(0.0, 1.0);
    }
}

#[cfg(test)]
mod tests {
    use crate::normalize::normalize_range;

    #[test]
    fn normalize_maps_bounds_to_unit_range() {
        let mut pixels = [-5.0, 1.0, 2.0, 3.0, 50.0];
        normalize_range(&mut pixels, 1.0, 3.0);

        assert_eq!(pixels, [0.0, 0.0, 0.5, 1.0, 1.0]);
    }

    #[test]
    fn normalize_degenerate_range_is_black() {
        let mut pixels = [7.0; 16];
        normalize_range(&mut pixels, 7.0, 7.0);

        assert!(pixels.iter().all(|x| *x == 0.0));
    }

    #[test]
    fn normalize_handles_non_finite_samples() {
        let mut pixels = [f32::NAN, f32::INFINITY, f32::NEG_INFINITY, 0.5];
        normalize_range(&mut pixels, 0.0, 1.0);

        assert_eq!(pixels, [0.0, 1.0, 0.0, 0.5]);
    }

    #[test]
    fn normalize_rejects_inverted_range() {
        let mut pixels = [0.2, 0.4];
        normalize_range(&mut pixels, 1.0, 0.0);

        assert_eq!(pixels, [0.0, 0.0]);
    }
}
