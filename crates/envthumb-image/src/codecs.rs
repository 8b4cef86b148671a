/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Entry point for all supported codecs the library understands
//!
//! HDR decoders can be enabled and disabled at compile time via the `exr`
//! and `hdr` features. Which of them are available is settled once per
//! process by [`registry`], later lookups only read the result.
use std::sync::OnceLock;

use log::{debug, info};
use zune_core::options::EncoderOptions;

use crate::errors::ImageErrors;
use crate::image::Image;
use crate::traits::DecoderTrait;

pub mod exr;
pub mod hdr;
pub mod png;

/// Encoder options describing `image`
pub(crate) fn create_options_for_encoder(image: &Image) -> EncoderOptions {
    let (width, height) = image.dimensions();

    EncoderOptions::default()
        .set_width(width)
        .set_height(height)
        .set_depth(image.depth())
        .set_colorspace(image.colorspace())
}

/// All supported image formats
///
/// This enum contains supported image formats, either
/// encoders or decoders for a particular image
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
#[allow(clippy::upper_case_acronyms)]
pub enum ImageFormat {
    /// OpenEXR, Industrial Light & Magic's HDR format
    EXR,
    /// Radiance HDR decoder
    HDR,
    /// Portable Network Graphics
    PNG,
    /// Any unknown format
    Unknown
}

const EXR_MAGIC: [u8; 4] = [0x76, 0x2f, 0x31, 0x01];
const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];
const RADIANCE_MAGICS: [&[u8]; 2] = [b"#?RADIANCE", b"#?RGBE"];

impl ImageFormat {
    /// Guess the format of an image from its first few bytes
    ///
    /// Returns `None` if no known signature matches
    pub fn guess_format(bytes: &[u8]) -> Option<ImageFormat> {
        if bytes.starts_with(&EXR_MAGIC) {
            return Some(ImageFormat::EXR);
        }
        if bytes.starts_with(&PNG_SIGNATURE) {
            return Some(ImageFormat::PNG);
        }
        if RADIANCE_MAGICS.iter().any(|magic| bytes.starts_with(magic)) {
            return Some(ImageFormat::HDR);
        }
        None
    }

    /// Map a file extension (without the dot, any case) to a format
    pub fn from_extension(extension: &str) -> ImageFormat {
        match extension.to_ascii_lowercase().as_str() {
            "exr" => ImageFormat::EXR,
            "hdr" | "rgbe" | "pic" => ImageFormat::HDR,
            "png" => ImageFormat::PNG,
            _ => ImageFormat::Unknown
        }
    }

    /// Short lowercase name, also the canonical extension
    pub const fn name(self) -> &'static str {
        match self {
            ImageFormat::EXR => "exr",
            ImageFormat::HDR => "hdr",
            ImageFormat::PNG => "png",
            ImageFormat::Unknown => "unknown"
        }
    }
}

/// The set of decoders available to this process
#[derive(Debug)]
pub struct CodecRegistry {
    decoders: Vec<ImageFormat>
}

static REGISTRY: OnceLock<CodecRegistry> = OnceLock::new();

/// Return the process wide codec registry, initializing it on first use
///
/// Initialization happens exactly once no matter how many threads race
/// here, the registry is read only afterwards.
pub fn registry() -> &'static CodecRegistry {
    REGISTRY.get_or_init(|| {
        #[allow(unused_mut)]
        let mut decoders = Vec::new();

        #[cfg(feature = "exr")]
        {
            decoders.push(ImageFormat::EXR);
        }
        #[cfg(feature = "hdr")]
        {
            decoders.push(ImageFormat::HDR);
        }
        info!("Enabled HDR decoders: {:?}", decoders);

        CodecRegistry { decoders }
    })
}

impl CodecRegistry {
    pub fn has_decoder(&self, format: ImageFormat) -> bool {
        self.decoders.contains(&format)
    }

    /// Create a decoder for `data`
    ///
    /// The format is guessed from the data's signature, `hint` (usually
    /// derived from the file extension) is used when no signature matches.
    ///
    /// # Errors
    /// - Neither the signature nor the hint name a known HDR format
    /// - The format's decoder was compiled out
    pub fn decoder<'a>(
        &self, data: &'a [u8], hint: ImageFormat
    ) -> Result<Box<dyn DecoderTrait + 'a>, ImageErrors> {
        let format = ImageFormat::guess_format(data).unwrap_or(hint);

        debug!("Treating input as {:?}", format);

        if !self.has_decoder(format) {
            return match format {
                ImageFormat::EXR | ImageFormat::HDR => Err(ImageErrors::DecoderNotEnabled(format)),
                _ => Err(ImageErrors::UnknownFormat)
            };
        }
        match format {
            #[cfg(feature = "exr")]
            ImageFormat::EXR => Ok(Box::new(exr::ExrDecoder::new(data))),
            #[cfg(feature = "hdr")]
            ImageFormat::HDR => Ok(Box::new(hdr::RadianceDecoder::new(data))),
            _ => Err(ImageErrors::UnknownFormat)
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::codecs::{registry, ImageFormat};

    #[test]
    fn guess_by_signature() {
        assert_eq!(
            ImageFormat::guess_format(&[0x76, 0x2f, 0x31, 0x01, 2, 0, 0, 0]),
            Some(ImageFormat::EXR)
        );
        assert_eq!(
            ImageFormat::guess_format(b"#?RADIANCE\nFORMAT=32-bit_rle_rgbe\n"),
            Some(ImageFormat::HDR)
        );
        assert_eq!(ImageFormat::guess_format(b"not an image"), None);
    }

    #[test]
    fn extension_is_case_insensitive() {
        assert_eq!(ImageFormat::from_extension("EXR"), ImageFormat::EXR);
        assert_eq!(ImageFormat::from_extension("hdr"), ImageFormat::HDR);
        assert_eq!(ImageFormat::from_extension("tiff"), ImageFormat::Unknown);
    }

    #[test]
    fn registry_is_initialized_once() {
        let first = registry() as *const _;
        let second = registry() as *const _;

        assert_eq!(first, second);
        assert!(registry().has_decoder(ImageFormat::EXR));
        assert!(registry().has_decoder(ImageFormat::HDR));
        assert!(!registry().has_decoder(ImageFormat::PNG));
    }

    #[test]
    fn garbage_has_no_decoder() {
        let result = registry().decoder(b"garbage", ImageFormat::Unknown);
        assert!(result.is_err());
    }
}
