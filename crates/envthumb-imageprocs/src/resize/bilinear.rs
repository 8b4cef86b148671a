/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use crate::traits::NumOps;

/// Bilinear interpolation of a single channel, this interpolates a single channel, but not an image
///
/// Pixel centers are aligned, destination pixel `x` samples the source at
/// `(x + 0.5) * ratio - 0.5`, clamped to the image edges.
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_sign_loss,
    clippy::cast_possible_truncation
)]
pub fn bilinear_impl<T>(
    in_channel: &[T], out_channel: &mut [T], in_width: usize, in_height: usize, out_width: usize,
    out_height: usize
) where
    T: Copy + NumOps<T>,
    f32: From<T>
{
    let w_ratio = in_width as f32 / out_width as f32;
    let h_ratio = in_height as f32 / out_height as f32;

    for y in 0..out_height {
        let new_y = ((y as f32 + 0.5) * h_ratio - 0.5).max(0.0);
        let y0 = (new_y as usize).min(in_height - 1);
        let y1 = (y0 + 1).min(in_height - 1);
        let b = new_y - y0 as f32;

        for x in 0..out_width {
            let new_x = ((x as f32 + 0.5) * w_ratio - 0.5).max(0.0);
            let x0 = (new_x as usize).min(in_width - 1);
            let x1 = (x0 + 1).min(in_width - 1);
            let a = new_x - x0 as f32;

            let p00 = f32::from(in_channel[y0 * in_width + x0]);
            let p10 = f32::from(in_channel[y0 * in_width + x1]);
            let p01 = f32::from(in_channel[y1 * in_width + x0]);
            let p11 = f32::from(in_channel[y1 * in_width + x1]);

            let interpolated_pixel = p00 * (1.0 - a) * (1.0 - b)
                + p10 * a * (1.0 - b)
                + p01 * (1.0 - a) * b
                + p11 * a * b;

            out_channel[y * out_width + x] = T::from_f32(interpolated_pixel);
        }
    }
}
