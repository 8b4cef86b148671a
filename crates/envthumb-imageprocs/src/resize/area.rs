/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use crate::traits::NumOps;

/// Contribution of a run of source pixels to one destination pixel
struct Footprint {
    start:   usize,
    weights: Vec<f32>
}

/// Compute the source footprint of every destination pixel along one axis.
///
/// Destination pixel `i` covers the source interval `[i*scale, (i+1)*scale)`,
/// partially covered source pixels contribute by the covered fraction.
/// Weights are pre-divided by `scale` so each footprint sums to one.
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
fn footprints(in_len: usize, out_len: usize) -> Vec<Footprint> {
    let scale = in_len as f64 / out_len as f64;
    let inv_scale = 1.0 / scale;

    (0..out_len)
        .map(|i| {
            let begin = i as f64 * scale;
            let end = ((i + 1) as f64 * scale).min(in_len as f64);

            let start = begin.floor() as usize;
            let stop = (end.ceil() as usize).min(in_len);

            let weights = (start..stop)
                .map(|src| {
                    let covered = end.min((src + 1) as f64) - begin.max(src as f64);
                    (covered.max(0.0) * inv_scale) as f32
                })
                .collect();

            Footprint { start, weights }
        })
        .collect()
}

/// Area (box filter) downsampling of a single channel
///
/// Integer and fractional scale factors are both supported, a destination
/// pixel is the coverage weighted mean of the source pixels beneath it.
pub fn area_impl<T>(
    in_channel: &[T], out_channel: &mut [T], in_width: usize, in_height: usize, out_width: usize,
    out_height: usize
) where
    T: Copy + NumOps<T>,
    f32: From<T>
{
    let columns = footprints(in_width, out_width);
    let rows = footprints(in_height, out_height);

    // horizontal pass, keep full precision between the passes
    let mut horizontal = vec![0.0_f32; out_width * in_height];

    for (in_row, out_row) in in_channel
        .chunks_exact(in_width)
        .zip(horizontal.chunks_exact_mut(out_width))
    {
        for (out_px, footprint) in out_row.iter_mut().zip(&columns) {
            *out_px = in_row[footprint.start..]
                .iter()
                .zip(&footprint.weights)
                .map(|(px, w)| f32::from(*px) * w)
                .sum();
        }
    }

    // vertical pass
    let mut accumulator = vec![0.0_f32; out_width];

    for (out_row, footprint) in out_channel.chunks_exact_mut(out_width).zip(&rows) {
        accumulator.iter_mut().for_each(|x| *x = 0.0);

        for (offset, weight) in footprint.weights.iter().enumerate() {
            let src_row = footprint.start + offset;
            let row = &horizontal[src_row * out_width..(src_row + 1) * out_width];

            for (acc, px) in accumulator.iter_mut().zip(row) {
                *acc += px * weight;
            }
        }
        for (out, acc) in out_row.iter_mut().zip(&accumulator) {
            *out = T::from_f32(*acc);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::resize::area::{area_impl, footprints};

    #[test]
    fn footprints_sum_to_one() {
        for (in_len, out_len) in [(1000, 400), (720, 225), (9, 3), (7, 7), (401, 400)] {
            for footprint in footprints(in_len, out_len) {
                let total: f32 = footprint.weights.iter().sum();
                assert!((total - 1.0).abs() < 1e-4, "{in_len}->{out_len}: {total}");
            }
        }
    }

    #[test]
    fn integer_factor_averages_blocks() {
        #[rustfmt::skip]
        let input: [u8; 16] = [
            0, 2, 10, 10,
            4, 6, 10, 10,
            100, 100, 1, 1,
            100, 100, 1, 3,
        ];
        let mut output = [0_u8; 4];

        area_impl(&input, &mut output, 4, 4, 2, 2);
        // block means: 3, 10, 100, 1.5 (rounded to 2)
        assert_eq!(output, [3, 10, 100, 2]);
    }

    #[test]
    fn fractional_factor_weights_partial_pixels() {
        // three source pixels into two, each output covers 1.5 pixels
        let input = [0.0_f32, 3.0, 6.0];
        let mut output = [0.0_f32; 2];

        area_impl(&input, &mut output, 3, 1, 2, 1);

        // (0*1 + 3*0.5)/1.5 = 1.0 and (3*0.5 + 6*1)/1.5 = 5.0
        assert!((output[0] - 1.0).abs() < 1e-5);
        assert!((output[1] - 5.0).abs() < 1e-5);
    }

    #[test]
    fn constant_image_stays_constant() {
        let input = vec![77_u8; 1024 * 512];
        let mut output = vec![0_u8; 400 * 225];

        area_impl(&input, &mut output, 1024, 512, 400, 225);
        assert!(output.iter().all(|x| *x == 77));
    }
}
