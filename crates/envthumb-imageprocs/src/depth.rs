/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Bit depth conversions

/// Convert normalized `f32` samples into 8 bit samples
///
/// Each input is scaled by 255 and truncated toward zero, the
/// same way a float to integer cast behaves, values outside `[0.0, 1.0]`
/// saturate and NaN becomes zero.
///
/// # Panics
/// If `from` and `to` differ in length
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn f32_to_u8(from: &[f32], to: &mut [u8]) {
    assert_eq!(from.len(), to.len(), "input and output lengths differ");

    for (old, new) in from.iter().zip(to.iter_mut()) {
        *new = (old * 255.0) as u8;
    }
}
