/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

/// Gamma encode normalized samples in place
///
/// Every sample `v` in `[0.0, 1.0]` becomes `v^(1/gamma)`, brightening
/// mid tones for display. Samples outside the unit range are clamped first
/// so the result never leaves `[0.0, 1.0]`.
///
/// A non-positive or non-finite `gamma` leaves samples clamped but
/// otherwise untouched.
pub fn gamma_encode(pixels: &mut [f32], gamma: f32) {
    if !(gamma.is_finite() && gamma > 0.0) {
        pixels.iter_mut().for_each(|x| *x = x.max(0.0).min(1.0));
        return;
    }
    let exponent = 1.0 / gamma;

    for px in pixels {
        // NaN.clamp() is NaN, max() picks the number
        let value = px.max(0.0).min(1.0);
        *px = value.powf(exponent);
    }
}


#[cfg(all(feature = "benchmarks"))]
#[cfg(test)]
mod benchmarks {
    extern crate test;

    use crate::gamma::gamma_encode;

    #[bench]
    fn gamma_bench(b: &mut test::Bencher) {
        let width = 800;
        let height = 800;
        let dimensions = width * height;

        let mut c1 = vec![0.5_f32; dimensions];

        b.iter(|| {
            gamma_encode(&mut c1, 2.2);
        });
    }
}
