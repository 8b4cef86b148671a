/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Percentile clipping
use envthumb_imageprocs::normalize::normalize_range;
use envthumb_imageprocs::percentile::percentile_bounds;
use log::{debug, trace};
use zune_core::bit_depth::BitType;

use crate::errors::{ImageErrors, ImageOperationsErrors};
use crate::image::Image;
use crate::traits::OperationsTrait;

/// Clip an HDR image to two percentiles of its samples and
/// rescale the result to `[0.0, 1.0]`
///
/// Percentiles are computed over every sample of every channel,
/// so color balance is preserved.
///
/// If the two percentiles coincide (e.g. a constant image) the
/// image becomes black.
#[derive(Copy, Clone, Debug)]
pub struct PercentileNormalize {
    low:  f32,
    high: f32
}

impl PercentileNormalize {
    /// Create a new operation clipping to the `low` and `high`
    /// percentiles, both in `0.0..=100.0`
    pub fn new(low: f32, high: f32) -> PercentileNormalize {
        PercentileNormalize { low, high }
    }
}

impl Default for PercentileNormalize {
    fn default() -> Self {
        PercentileNormalize::new(1.0, 99.0)
    }
}

impl OperationsTrait for PercentileNormalize {
    fn name(&self) -> &'static str {
        "Percentile Normalize"
    }

    fn execute_impl(&self, image: &mut Image) -> Result<(), ImageErrors> {
        if !(0.0..=100.0).contains(&self.low) {
            return Err(ImageOperationsErrors::InvalidParameter("low percentile", self.low).into());
        }
        if !(self.low..=100.0).contains(&self.high) {
            return Err(
                ImageOperationsErrors::InvalidParameter("high percentile", self.high).into()
            );
        }
        let samples = image.samples_f32()?;

        // no finite samples, treat like a zero range
        let (lower, upper) = percentile_bounds(&samples, self.low, self.high).unwrap_or((0.0, 0.0));

        debug!(
            "Clipping to percentiles p{}={lower} and p{}={upper}",
            self.low, self.high
        );
        if upper - lower <= 0.0 {
            trace!("Zero percentile range, image will be black");
        }

        for channel in image.channels_mut() {
            normalize_range(channel.as_f32_mut()?, lower, upper);
        }
        Ok(())
    }

    fn supported_types(&self) -> &'static [BitType] {
        &[BitType::F32]
    }
}
