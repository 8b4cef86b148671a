/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use log::trace;

use crate::traits::NumOps;

mod area;
mod bilinear;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ResizeMethod {
    /// Average every source pixel under the destination pixel's footprint.
    ///
    /// Best suited to shrinking, when either dimension grows the
    /// resize falls back to [`Bilinear`](ResizeMethod::Bilinear)
    Area,
    Bilinear
}

/// Resize an image to new dimensions
///
/// # Arguments
/// - in_image: A contiguous slice of a single channel of an image
/// - out_image: Where we will store the new resized pixels
/// - method: The resizing method to use
/// - in_width: `in_image`'s width
/// - in_height:  `in_image`'s height.
/// - out_width: The expected width
/// - out_height: The expected height.
/// # Panics
/// - `in_width*in_height` do not match `in_image.len()`.
/// - `out_width*out_height` do not match `out_image.len()`.
/// - any dimension is zero
pub fn resize<T>(
    in_image: &[T], out_image: &mut [T], method: ResizeMethod, in_width: usize, in_height: usize,
    out_width: usize, out_height: usize
) where
    T: Copy + NumOps<T>,
    f32: From<T>
{
    assert!(
        in_width > 0 && in_height > 0 && out_width > 0 && out_height > 0,
        "cannot resize zero sized images"
    );
    assert_eq!(in_image.len(), in_width * in_height, "input length mismatch");
    assert_eq!(out_image.len(), out_width * out_height, "output length mismatch");

    match method {
        ResizeMethod::Area if out_width <= in_width && out_height <= in_height => {
            area::area_impl(
                in_image, out_image, in_width, in_height, out_width, out_height
            );
        }
        ResizeMethod::Area | ResizeMethod::Bilinear => {
            if method == ResizeMethod::Area {
                trace!("Enlarging {in_width}x{in_height} to {out_width}x{out_height}, using bilinear");
            }
            bilinear::bilinear_impl(
                in_image, out_image, in_width, in_height, out_width, out_height
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::resize::{resize, ResizeMethod};

    #[test]
    fn area_shrinks_to_requested_size() {
        let input: Vec<u16> = (0..1200_u16).collect();
        let mut output = vec![0_u16; 10 * 6];

        resize(&input, &mut output, ResizeMethod::Area, 40, 30, 10, 6);

        // a monotonically increasing ramp stays monotonic along rows
        for row in output.chunks_exact(10) {
            assert!(row.windows(2).all(|w| w[0] <= w[1]));
        }
    }

    #[test]
    fn area_falls_back_when_enlarging() {
        let input = [10_u8, 10, 10, 10];
        let mut via_area = [0_u8; 12];
        let mut via_bilinear = [0_u8; 12];

        resize(&input, &mut via_area, ResizeMethod::Area, 2, 2, 4, 3);
        resize(&input, &mut via_bilinear, ResizeMethod::Bilinear, 2, 2, 4, 3);

        assert_eq!(via_area, via_bilinear);
    }

    #[test]
    #[should_panic]
    fn zero_sized_output_panics() {
        let input = [1_u8; 4];
        resize(&input, &mut [], ResizeMethod::Area, 2, 2, 0, 0);
    }
}
