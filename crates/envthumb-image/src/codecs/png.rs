/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! PNG encoding support, the only output format
use zune_core::bit_depth::BitDepth;
use zune_core::colorspace::ColorSpace;

use crate::codecs::{create_options_for_encoder, ImageFormat};
use crate::errors::ImageErrors;
use crate::errors::ImgEncodeErrors::ImageEncodeErrors;
use crate::image::Image;
use crate::traits::EncoderTrait;

#[derive(Default)]
pub struct PngEncoder;

impl PngEncoder {
    pub fn new() -> PngEncoder {
        PngEncoder
    }
}

impl EncoderTrait for PngEncoder {
    fn name(&self) -> &'static str {
        "PNG encoder"
    }

    fn encode_inner(&mut self, image: &Image) -> Result<Vec<u8>, ImageErrors> {
        let options = create_options_for_encoder(image);

        let pixels = image.flatten_u8()?;

        let mut encoder = zune_png::PngEncoder::new(&pixels, options);
        let mut sink = Vec::with_capacity(pixels.len() / 2);

        encoder
            .encode(&mut sink)
            .map_err(|e| ImageErrors::EncodeErrors(ImageEncodeErrors(format!("{e:?}"))))?;

        Ok(sink)
    }

    fn supported_colorspaces(&self) -> &'static [ColorSpace] {
        &[ColorSpace::Luma, ColorSpace::RGB]
    }

    fn format(&self) -> ImageFormat {
        ImageFormat::PNG
    }

    fn supported_bit_depth(&self) -> &'static [BitDepth] {
        &[BitDepth::Eight]
    }
}

#[cfg(test)]
mod tests {
    use zune_core::bytestream::ZCursor;
    use zune_core::colorspace::ColorSpace;
    use zune_png::PngDecoder;

    use crate::codecs::png::PngEncoder;
    use crate::image::Image;
    use crate::traits::EncoderTrait;

    #[test]
    fn encode_rgb_and_read_back() {
        let pixels: Vec<u8> = (0..4 * 3 * 3).map(|x| (x * 7) as u8).collect();
        let image = Image::from_u8(&pixels, 4, 3, ColorSpace::RGB).unwrap();

        let encoded = PngEncoder::new().encode(&image).unwrap();

        let mut decoder = PngDecoder::new(ZCursor::new(&encoded));
        let decoded = decoder.decode_raw().unwrap();

        assert_eq!(decoder.dimensions(), Some((4, 3)));
        assert_eq!(decoded, pixels);
    }

    #[test]
    fn float_images_are_rejected() {
        let image = Image::fill_f32(0.5, ColorSpace::RGB, 2, 2);

        assert!(PngEncoder::new().encode(&image).is_err());
    }

    #[test]
    fn bgr_images_are_rejected() {
        let image = Image::from_u8(&[0; 12], 2, 2, ColorSpace::BGR).unwrap();

        assert!(PngEncoder::new().encode(&image).is_err());
    }
}
