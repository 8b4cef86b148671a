/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
use envthumb_imageprocs::gamma::gamma_encode;
use log::trace;
use zune_core::bit_depth::BitType;

use crate::errors::{ImageErrors, ImageOperationsErrors};
use crate::image::Image;
use crate::traits::OperationsTrait;

/// Gamma encode a normalized image, each sample `v` becomes `v^(1/value)`
#[derive(Copy, Clone, Debug)]
pub struct Gamma {
    value: f32
}

impl Gamma {
    pub fn new(value: f32) -> Gamma {
        Gamma { value }
    }
}

impl OperationsTrait for Gamma {
    fn name(&self) -> &'static str {
        "Gamma Correction"
    }

    fn execute_impl(&self, image: &mut Image) -> Result<(), ImageErrors> {
        if !(self.value.is_finite() && self.value > 0.0) {
            return Err(ImageOperationsErrors::InvalidParameter("gamma", self.value).into());
        }
        trace!("Gamma encoding with gamma {}", self.value);

        for channel in image.channels_mut() {
            gamma_encode(channel.as_f32_mut()?, self.value);
        }
        Ok(())
    }

    fn supported_types(&self) -> &'static [BitType] {
        &[BitType::F32]
    }
}

#[cfg(test)]
mod tests {
    use zune_core::colorspace::ColorSpace;

    use crate::filters::gamma::Gamma;
    use crate::image::Image;
    use crate::traits::OperationsTrait;

    #[test]
    fn mid_tones_are_brightened() {
        let mut image = Image::fill_f32(0.25, ColorSpace::Luma, 2, 2);
        Gamma::new(2.0).execute(&mut image).unwrap();

        let samples = image.samples_f32().unwrap();
        assert!(samples.iter().all(|x| (x - 0.5).abs() < 1e-6));
    }

    #[test]
    fn zero_gamma_is_rejected() {
        let mut image = Image::fill_f32(0.25, ColorSpace::Luma, 2, 2);
        assert!(Gamma::new(0.0).execute(&mut image).is_err());
    }

    #[test]
    fn u8_images_are_not_supported() {
        let mut image = Image::from_u8(&[1, 2, 3, 4], 2, 2, ColorSpace::Luma).unwrap();
        assert!(Gamma::new(2.2).execute(&mut image).is_err());
    }
}
