/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Turn one HDR image file into one PNG preview
//!
//! The conversion is
//! 1. decode the file into floating point planes
//! 2. clip to the low and high percentiles of all samples and rescale to `[0,1]`
//! 3. gamma encode
//! 4. truncate to 8 bits
//! 5. resize to the thumbnail dimensions
//! 6. put color planes in RGB order
//! 7. encode as PNG and atomically replace the destination
use std::io::Write;
use std::path::Path;

use log::{debug, error, info};
use tempfile::NamedTempFile;
use zune_core::bit_depth::BitDepth;

use crate::codecs::png::PngEncoder;
use crate::codecs::{registry, ImageFormat};
use crate::errors::ImageErrors;
use crate::filters::channel_order::ChannelOrder;
use crate::filters::depth::Depth;
use crate::filters::gamma::Gamma;
use crate::filters::normalize::PercentileNormalize;
use crate::filters::resize::{Resize, ResizeMethod};
use crate::metadata::ImageMetadata;
use crate::pipelines::Pipeline;

/// Knobs for thumbnail generation
///
/// The defaults produce 400x225 previews clipped to the
/// 1st and 99th percentile with a display gamma of 2.2
#[derive(Copy, Clone, Debug)]
pub struct ThumbnailOptions {
    width:           usize,
    height:          usize,
    low_percentile:  f32,
    high_percentile: f32,
    gamma:           f32
}

impl Default for ThumbnailOptions {
    fn default() -> Self {
        ThumbnailOptions {
            width:           400,
            height:          225,
            low_percentile:  1.0,
            high_percentile: 99.0,
            gamma:           2.2
        }
    }
}

impl ThumbnailOptions {
    #[must_use]
    pub fn set_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }
    #[must_use]
    pub fn set_height(mut self, height: usize) -> Self {
        self.height = height;
        self
    }
    /// Set the percentiles samples are clipped to, both in `0.0..=100.0`
    #[must_use]
    pub fn set_percentiles(mut self, low: f32, high: f32) -> Self {
        self.low_percentile = low;
        self.high_percentile = high;
        self
    }
    #[must_use]
    pub fn set_gamma(mut self, gamma: f32) -> Self {
        self.gamma = gamma;
        self
    }

    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }
    pub const fn percentiles(&self) -> (f32, f32) {
        (self.low_percentile, self.high_percentile)
    }
    pub const fn gamma(&self) -> f32 {
        self.gamma
    }
}

/// Converts HDR images into fixed size 8 bit PNG previews
#[derive(Copy, Clone, Debug, Default)]
pub struct ThumbnailGenerator {
    options: ThumbnailOptions
}

impl ThumbnailGenerator {
    pub fn new(options: ThumbnailOptions) -> ThumbnailGenerator {
        ThumbnailGenerator { options }
    }

    pub const fn options(&self) -> &ThumbnailOptions {
        &self.options
    }

    /// Convert an in memory HDR image into PNG bytes
    ///
    /// `hint` is only consulted when the data carries no recognizable
    /// signature.
    ///
    /// # Errors
    /// Any decode, processing or encoding failure
    pub fn generate_bytes(&self, data: &[u8], hint: ImageFormat) -> Result<Vec<u8>, ImageErrors> {
        let decoder = registry().decoder(data, hint)?;
        let options = &self.options;

        let mut pipeline = Pipeline::new();

        pipeline
            .chain_decoder(decoder)
            .chain_operations(Box::new(PercentileNormalize::new(
                options.low_percentile,
                options.high_percentile
            )))
            .chain_operations(Box::new(Gamma::new(options.gamma)))
            .chain_operations(Box::new(Depth::new(BitDepth::Eight)))
            .chain_operations(Box::new(Resize::new(
                options.width,
                options.height,
                ResizeMethod::Area
            )))
            .chain_operations(Box::new(ChannelOrder::new()))
            .chain_encoder(Box::new(PngEncoder::new()));

        pipeline.advance_to_end()?;

        let result = pipeline
            .into_encode_result()
            .ok_or(ImageErrors::NoImageForEncoding)?;

        Ok(result.data)
    }

    /// Convert the image at `src` into a PNG preview stored at `dst`
    ///
    /// The output is written to a temporary file next to `dst` and renamed
    /// over it, so `dst` is either the complete new thumbnail or untouched.
    ///
    /// # Errors
    /// - `src` cannot be read
    /// - Any decode, processing or encoding failure
    /// - The destination cannot be written
    pub fn generate<P: AsRef<Path>, Q: AsRef<Path>>(
        &self, src: P, dst: Q
    ) -> Result<(), ImageErrors> {
        let (src, dst) = (src.as_ref(), dst.as_ref());

        let data = std::fs::read(src)?;
        let encoded = self.generate_bytes(&data, format_hint(src))?;

        write_atomically(dst, &encoded)?;

        debug!(
            "Wrote {} bytes to {}",
            encoded.len(),
            dst.display()
        );
        Ok(())
    }

    /// Like [`generate`](Self::generate) but only reports success
    ///
    /// Failures are logged together with the file name.
    pub fn try_generate<P: AsRef<Path>, Q: AsRef<Path>>(&self, src: P, dst: Q) -> bool {
        let src = src.as_ref();

        match self.generate(src, dst) {
            Ok(()) => {
                info!("Generated thumbnail for {}", src.display());
                true
            }
            Err(err) => {
                error!("Error processing {}: {}", src.display(), err);
                false
            }
        }
    }
}

/// Read the headers of the HDR image at `path` without decoding it
///
/// # Errors
/// If the file cannot be read or its headers are invalid
pub fn probe<P: AsRef<Path>>(path: P) -> Result<ImageMetadata, ImageErrors> {
    let path = path.as_ref();

    let data = std::fs::read(path)?;
    let mut decoder = registry().decoder(&data, format_hint(path))?;

    decoder.read_headers()
}

fn format_hint(path: &Path) -> ImageFormat {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map_or(ImageFormat::Unknown, ImageFormat::from_extension)
}

fn write_atomically(dst: &Path, data: &[u8]) -> Result<(), ImageErrors> {
    let parent = match dst.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new(".")
    };
    // dropped (and deleted) on any early return
    let mut temp = NamedTempFile::new_in(parent)?;

    temp.write_all(data)?;
    temp.as_file().sync_all()?;
    temp.persist(dst)?;

    Ok(())
}
