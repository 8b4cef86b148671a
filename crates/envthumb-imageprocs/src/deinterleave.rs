/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Conversions between interleaved (`RGBRGB`) and planar (`RRGGBB`) layouts

/// Split interleaved pixels into one vector per component
///
/// # Arguments
/// - interleaved: Pixels laid out as `c0 c1 .. cn c0 c1 .. cn`
/// - components: Number of components per pixel
///
/// # Panics
/// If `components` is zero or does not divide `interleaved.len()`
pub fn deinterleave<T: Copy + Default>(interleaved: &[T], components: usize) -> Vec<Vec<T>> {
    assert!(components > 0, "components cannot be zero");
    assert_eq!(
        interleaved.len() % components,
        0,
        "length is not a multiple of the number of components"
    );

    let pixels = interleaved.len() / components;
    let mut planes = vec![vec![T::default(); pixels]; components];

    for (i, chunk) in interleaved.chunks_exact(components).enumerate() {
        for (plane, value) in planes.iter_mut().zip(chunk) {
            plane[i] = *value;
        }
    }
    planes
}

/// Merge planar channels into an interleaved output
///
/// # Panics
/// If the planes have differing lengths or `output` is not
/// `planes.len() * plane_length` long
pub fn interleave<T: Copy>(planes: &[&[T]], output: &mut [T]) {
    let Some(first) = planes.first() else {
        return;
    };
    let components = planes.len();

    assert!(
        planes.iter().all(|p| p.len() == first.len()),
        "planes have differing lengths"
    );
    assert_eq!(output.len(), first.len() * components, "output has the wrong size");

    for (i, chunk) in output.chunks_exact_mut(components).enumerate() {
        for (out, plane) in chunk.iter_mut().zip(planes) {
            *out = plane[i];
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::deinterleave::{deinterleave, interleave};

    #[test]
    fn deinterleave_three_components() {
        let planes = deinterleave(&[1, 2, 3, 4, 5, 6], 3);
        assert_eq!(planes, vec![vec![1, 4], vec![2, 5], vec![3, 6]]);
    }

    #[test]
    fn interleave_three_components() {
        let (r, g, b) = ([1_u8, 4], [2_u8, 5], [3_u8, 6]);
        let mut out = [0_u8; 6];

        interleave(&[&r, &g, &b], &mut out);
        assert_eq!(out, [1, 2, 3, 4, 5, 6]);
    }
}
