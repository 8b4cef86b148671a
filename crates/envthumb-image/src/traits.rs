/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Main image traits for decoding, processing and encoding
use log::trace;
use zune_core::bit_depth::{BitDepth, BitType};
use zune_core::colorspace::ColorSpace;

use crate::codecs::ImageFormat;
use crate::errors::{ImageErrors, ImgEncodeErrors};
use crate::image::Image;
use crate::metadata::ImageMetadata;

/// Encapsulates an image decoder.
///
/// All supported image decoders must implement this class
pub trait DecoderTrait {
    /// Decode a buffer already in memory
    ///
    /// The buffer should be added during the decoder's initialization,
    /// the returned image holds floating point channels for HDR formats.
    ///
    /// # Errors
    /// If the data is not a valid image of this decoder's format
    fn decode(&mut self) -> Result<Image, ImageErrors>;

    /// Get the name of the decoder
    fn name(&self) -> &'static str;

    /// Read image headers without decoding pixels
    ///
    /// # Errors
    /// If the headers are invalid
    fn read_headers(&mut self) -> Result<ImageMetadata, ImageErrors>;
}

/// This encapsulates an image operation.
///
/// All operations that can be stored in a workflow
/// need to encapsulate this struct.
pub trait OperationsTrait {
    /// Get the name of this operation
    fn name(&self) -> &'static str;

    /// Execute a simple operation on the image
    /// manipulating the image struct
    ///
    /// An object should implement this function, but
    /// a caller should call [`execute`](Self::execute), which
    /// does some error checking before calling this method
    ///
    /// # Errors
    /// Implementation specific
    fn execute_impl(&self, image: &mut Image) -> Result<(), ImageErrors>;

    /// Return the bit types this operation can work on
    fn supported_types(&self) -> &'static [BitType];

    /// Execute the operation on the image
    ///
    /// Checks that the image's storage type is supported,
    /// runs the operation and confirms the image is still consistent.
    ///
    /// # Errors
    /// - The image bit type is not supported
    /// - The operation failed
    /// - The operation left the image in an inconsistent state
    fn execute(&self, image: &mut Image) -> Result<(), ImageErrors> {
        let bit_type = image.bit_type();

        if !self.supported_types().contains(&bit_type) {
            return Err(ImageErrors::ImageOperationNotImplemented(
                self.name(),
                bit_type
            ));
        }
        self.execute_impl(image)?;

        image.validate()?;

        Ok(())
    }
}

/// Encapsulates an image encoder
pub trait EncoderTrait {
    /// Get the name of the encoder
    fn name(&self) -> &'static str;

    /// Encode an image whose depth and colorspace
    /// were already checked by [`encode`](Self::encode)
    ///
    /// # Errors
    /// Implementation specific
    fn encode_inner(&mut self, image: &Image) -> Result<Vec<u8>, ImageErrors>;

    /// Colorspaces this encoder accepts
    fn supported_colorspaces(&self) -> &'static [ColorSpace];

    /// Format this encoder produces
    fn format(&self) -> ImageFormat;

    /// Bit depths this encoder accepts
    fn supported_bit_depth(&self) -> &'static [BitDepth];

    /// Encode an image into a new buffer
    ///
    /// # Errors
    /// - The image colorspace or depth is not supported by the encoder
    /// - The encoder failed
    fn encode(&mut self, image: &Image) -> Result<Vec<u8>, ImageErrors> {
        let colorspace = image.colorspace();

        if !self.supported_colorspaces().contains(&colorspace) {
            return Err(ImageErrors::UnsupportedColorspace(
                colorspace,
                self.name(),
                self.supported_colorspaces()
            ));
        }
        let depth = image.depth();

        if !self.supported_bit_depth().contains(&depth) {
            return Err(ImgEncodeErrors::UnsupportedDepth(image.bit_type(), self.name()).into());
        }
        trace!("Encoding {:?} image as {:?}", colorspace, self.format());

        self.encode_inner(image)
    }
}
