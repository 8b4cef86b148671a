/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! This module represents a single image, an image is a set of
//! planar channels sharing the same dimensions, colorspace and bit type.
use envthumb_imageprocs::deinterleave::{deinterleave, interleave};
use zune_core::bit_depth::{BitDepth, BitType};
use zune_core::colorspace::ColorSpace;

use crate::channel::Channel;
use crate::errors::{ImageErrors, ImageOperationsErrors};

/// Represents a single image
#[derive(Clone, Debug, PartialEq)]
pub struct Image {
    width:      usize,
    height:     usize,
    colorspace: ColorSpace,
    channels:   Vec<Channel>
}

impl Image {
    /// Create a new image from planar channels
    ///
    /// # Errors
    /// - The number of channels does not match the colorspace
    /// - A channel's length is not `width*height`
    /// - Channels do not share one bit type
    pub fn new(
        channels: Vec<Channel>, width: usize, height: usize, colorspace: ColorSpace
    ) -> Result<Image, ImageErrors> {
        let image = Image {
            width,
            height,
            colorspace,
            channels
        };
        image.validate()?;
        Ok(image)
    }

    /// Create an image from interleaved floating point samples
    ///
    /// # Errors
    /// If `pixels.len()` is not `width*height*components`
    pub fn from_f32(
        pixels: &[f32], width: usize, height: usize, colorspace: ColorSpace
    ) -> Result<Image, ImageErrors> {
        let components = colorspace.num_components();
        let expected = width * height * components;

        if components == 0 || pixels.len() != expected {
            return Err(ImageErrors::DimensionsMisMatch(expected, pixels.len()));
        }
        let channels = deinterleave(pixels, components)
            .into_iter()
            .map(Channel::F32)
            .collect();

        Image::new(channels, width, height, colorspace)
    }

    /// Create an image from interleaved 8 bit samples
    ///
    /// # Errors
    /// If `pixels.len()` is not `width*height*components`
    pub fn from_u8(
        pixels: &[u8], width: usize, height: usize, colorspace: ColorSpace
    ) -> Result<Image, ImageErrors> {
        let components = colorspace.num_components();
        let expected = width * height * components;

        if components == 0 || pixels.len() != expected {
            return Err(ImageErrors::DimensionsMisMatch(expected, pixels.len()));
        }
        let channels = deinterleave(pixels, components)
            .into_iter()
            .map(Channel::U8)
            .collect();

        Image::new(channels, width, height, colorspace)
    }

    /// Create an image where every sample has the value `value`
    pub fn fill_f32(value: f32, colorspace: ColorSpace, width: usize, height: usize) -> Image {
        let channels = (0..colorspace.num_components())
            .map(|_| Channel::F32(vec![value; width * height]))
            .collect();

        Image {
            width,
            height,
            colorspace,
            channels
        }
    }

    /// Check the invariants every image upholds
    ///
    /// # Errors
    /// If channel count, channel length or bit type are inconsistent
    pub fn validate(&self) -> Result<(), ImageErrors> {
        if self.width == 0 || self.height == 0 {
            return Err(ImageErrors::ZeroDimensions(self.width, self.height));
        }
        let components = self.colorspace.num_components();

        if components == 0 || components != self.channels.len() {
            return Err(ImageErrors::DimensionsMisMatch(
                components,
                self.channels.len()
            ));
        }
        let expected = self.width * self.height;

        for channel in &self.channels {
            if channel.len() != expected {
                return Err(ImageErrors::DimensionsMisMatch(expected, channel.len()));
            }
            if channel.bit_type() != self.channels[0].bit_type() {
                return Err(ImageOperationsErrors::WrongTypeId(
                    self.channels[0].bit_type(),
                    channel.bit_type()
                )
                .into());
            }
        }
        Ok(())
    }

    /// Get image dimensions as a tuple of (width,height)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Set new image dimensions
    ///
    /// Callers resizing channels must keep the dimensions in sync,
    /// [`validate`](Self::validate) catches the mismatch otherwise
    pub fn set_dimensions(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
    }

    pub const fn colorspace(&self) -> ColorSpace {
        self.colorspace
    }

    pub fn set_colorspace(&mut self, colorspace: ColorSpace) {
        self.colorspace = colorspace;
    }

    /// The storage type shared by all channels
    pub fn bit_type(&self) -> BitType {
        self.channels
            .first()
            .map_or(BitType::F32, Channel::bit_type)
    }

    /// The image depth, derived from the channel storage
    pub fn depth(&self) -> BitDepth {
        match self.bit_type() {
            BitType::U8 => BitDepth::Eight,
            BitType::F32 => BitDepth::Float32,
            _ => BitDepth::Unknown
        }
    }

    pub fn channels_ref(&self) -> &[Channel] {
        &self.channels
    }

    pub fn channels_mut(&mut self) -> &mut [Channel] {
        &mut self.channels
    }

    /// Replace all channels at once
    ///
    /// Used by operations that change the bit type of an image.
    pub fn set_channels(&mut self, channels: Vec<Channel>) {
        self.channels = channels;
    }

    /// Return interleaved 8 bit pixels, `RGBRGB` for three channel images
    ///
    /// # Errors
    /// If the image is not stored as 8 bit channels
    pub fn flatten_u8(&self) -> Result<Vec<u8>, ImageErrors> {
        let planes = self
            .channels
            .iter()
            .map(Channel::as_u8)
            .collect::<Result<Vec<&[u8]>, _>>()?;

        let mut output = vec![0; self.width * self.height * planes.len()];
        interleave(&planes, &mut output);

        Ok(output)
    }

    /// Return all floating point samples of every channel as one vector
    ///
    /// # Errors
    /// If the image is not stored as `f32` channels
    pub fn samples_f32(&self) -> Result<Vec<f32>, ImageErrors> {
        let mut samples = Vec::with_capacity(self.width * self.height * self.channels.len());

        for channel in &self.channels {
            samples.extend_from_slice(channel.as_f32()?);
        }
        Ok(samples)
    }
}
