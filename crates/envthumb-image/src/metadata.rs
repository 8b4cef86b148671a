/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Image metadata
//!
//! Information about an image that can be gathered from its headers
//! without decoding pixels.
use zune_core::bit_depth::BitDepth;
use zune_core::colorspace::ColorSpace;

use crate::codecs::ImageFormat;

/// Header level information about an image
#[derive(Clone, Debug, PartialEq)]
pub struct ImageMetadata {
    pub(crate) width:      usize,
    pub(crate) height:     usize,
    pub(crate) colorspace: ColorSpace,
    pub(crate) depth:      BitDepth,
    pub(crate) format:     Option<ImageFormat>,
    /// Channel names as stored in the file, in storage order
    pub(crate) channels:   Vec<String>
}

impl Default for ImageMetadata {
    fn default() -> Self {
        ImageMetadata {
            width:      0,
            height:     0,
            colorspace: ColorSpace::Unknown,
            depth:      BitDepth::Unknown,
            format:     None,
            channels:   vec![]
        }
    }
}

impl ImageMetadata {
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub const fn colorspace(&self) -> ColorSpace {
        self.colorspace
    }

    pub const fn depth(&self) -> BitDepth {
        self.depth
    }

    pub const fn format(&self) -> Option<ImageFormat> {
        self.format
    }

    pub fn channel_names(&self) -> &[String] {
        &self.channels
    }
}
