/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

#![cfg(feature = "hdr")]
//! Radiance HDR decoding support
use zune_core::bit_depth::BitDepth;
use zune_core::bytestream::ZCursor;
use zune_core::colorspace::ColorSpace;
use zune_hdr::{HdrDecodeErrors, HdrDecoder};

use crate::codecs::ImageFormat;
use crate::errors::ImageErrors;
use crate::image::Image;
use crate::metadata::ImageMetadata;
use crate::traits::DecoderTrait;

/// Decodes Radiance RGBE files into floating point RGB images
pub struct RadianceDecoder<'a> {
    inner: HdrDecoder<ZCursor<&'a [u8]>>
}

impl<'a> RadianceDecoder<'a> {
    pub fn new(data: &'a [u8]) -> RadianceDecoder<'a> {
        RadianceDecoder {
            inner: HdrDecoder::new(ZCursor::new(data))
        }
    }

    fn dimensions(&self) -> Result<(usize, usize), ImageErrors> {
        self.inner
            .dimensions()
            .ok_or(ImageErrors::GenericStr("hdr: headers were not decoded"))
    }
}

impl DecoderTrait for RadianceDecoder<'_> {
    fn decode(&mut self) -> Result<Image, ImageErrors> {
        let pixels = self.inner.decode()?;
        let (width, height) = self.dimensions()?;
        let colorspace = self.inner.get_colorspace().unwrap_or(ColorSpace::RGB);

        Image::from_f32(&pixels, width, height, colorspace)
    }

    fn name(&self) -> &'static str {
        "HDR decoder"
    }

    fn read_headers(&mut self) -> Result<ImageMetadata, ImageErrors> {
        self.inner.decode_headers()?;

        let (width, height) = self.dimensions()?;

        Ok(ImageMetadata {
            width,
            height,
            colorspace: ColorSpace::RGB,
            depth: BitDepth::Float32,
            format: Some(ImageFormat::HDR),
            channels: vec!["R".to_string(), "G".to_string(), "B".to_string()]
        })
    }
}

impl From<HdrDecodeErrors> for ImageErrors {
    fn from(value: HdrDecodeErrors) -> Self {
        Self::ImageDecodeErrors(format!("hdr: {value:?}"))
    }
}

#[cfg(test)]
mod tests {
    use zune_core::colorspace::ColorSpace;

    use crate::codecs::hdr::RadianceDecoder;
    use crate::traits::DecoderTrait;

    /// A flat (uncompressed) 2x1 RGBE file
    fn tiny_hdr() -> Vec<u8> {
        let mut data = b"#?RADIANCE\nFORMAT=32-bit_rle_rgbe\n\n-Y 1 +X 2\n".to_vec();
        // 1.0 in every channel, then 0.5 in every channel
        data.extend_from_slice(&[128, 128, 128, 129, 128, 128, 128, 128]);
        data
    }

    #[test]
    fn decode_flat_scanline() {
        let data = tiny_hdr();
        let mut decoder = RadianceDecoder::new(&data);

        let meta = decoder.read_headers().unwrap();
        assert_eq!(meta.dimensions(), (2, 1));

        let image = decoder.decode().unwrap();
        assert_eq!(image.colorspace(), ColorSpace::RGB);
        assert_eq!(image.dimensions(), (2, 1));

        let samples = image.samples_f32().unwrap();
        assert!((samples[0] - 1.0).abs() < 1e-3);
        assert!((samples[1] - 0.5).abs() < 1e-3);
    }

    #[test]
    fn truncated_file_is_an_error() {
        let data = b"#?RADIANCE\nFORMAT=32-bit_rle_rgbe\n".to_vec();
        let mut decoder = RadianceDecoder::new(&data);

        assert!(decoder.decode().is_err());
    }
}
