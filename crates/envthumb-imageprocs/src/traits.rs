/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

/// Numeric behaviour a pixel type needs for resampling
pub trait NumOps<T> {
    /// Convert from an `f32`, rounding and saturating integer types
    fn from_f32(x: f32) -> T;
}

macro_rules! numops_for_int {
    ($int:tt) => {
        impl NumOps<$int> for $int {
            #[inline(always)]
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            fn from_f32(x: f32) -> $int {
                // `as` saturates and maps NaN to zero
                x.round() as $int
            }
        }
    };
}

numops_for_int!(u8);
numops_for_int!(u16);

impl NumOps<f32> for f32 {
    #[inline(always)]
    fn from_f32(x: f32) -> f32 {
        x
    }
}

#[cfg(test)]
mod tests {
    use crate::traits::NumOps;

    #[test]
    fn integer_conversion_rounds_and_saturates() {
        assert_eq!(u8::from_f32(127.5), 128);
        assert_eq!(u8::from_f32(300.0), 255);
        assert_eq!(u8::from_f32(-4.0), 0);
        assert_eq!(u8::from_f32(f32::NAN), 0);
        assert_eq!(u16::from_f32(65535.9), 65535);
    }
}
