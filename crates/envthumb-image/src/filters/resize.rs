/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Resize operation
use envthumb_imageprocs::resize::resize;
pub use envthumb_imageprocs::resize::ResizeMethod;
use log::trace;
use zune_core::bit_depth::BitType;

use crate::errors::ImageErrors;
use crate::image::Image;
use crate::traits::OperationsTrait;

/// Resize an image to a new width and height
/// using the resize method specified
#[derive(Copy, Clone)]
pub struct Resize {
    new_width:  usize,
    new_height: usize,
    method:     ResizeMethod
}

impl Resize {
    /// Create a new resize operation
    ///
    /// # Argument
    /// - new_width: The new image width
    /// - new_height: The new image height.
    /// - method: The resize method to use
    pub fn new(new_width: usize, new_height: usize, method: ResizeMethod) -> Resize {
        Resize {
            new_width,
            new_height,
            method
        }
    }
}

impl OperationsTrait for Resize {
    fn name(&self) -> &'static str {
        "Resize"
    }

    fn execute_impl(&self, image: &mut Image) -> Result<(), ImageErrors> {
        if self.new_width == 0 || self.new_height == 0 {
            return Err(ImageErrors::ZeroDimensions(self.new_width, self.new_height));
        }
        let (old_w, old_h) = image.dimensions();

        if (old_w, old_h) == (self.new_width, self.new_height) {
            trace!("Image already {old_w}x{old_h}, no-op");
            return Ok(());
        }
        let depth = image.bit_type();
        let new_length = self.new_width * self.new_height;

        for old_channel in image.channels_mut() {
            let mut new_channel = old_channel.zeroed_like(new_length);

            match depth {
                BitType::U8 => resize::<u8>(
                    old_channel.as_u8()?,
                    new_channel.as_u8_mut()?,
                    self.method,
                    old_w,
                    old_h,
                    self.new_width,
                    self.new_height
                ),
                BitType::F32 => resize::<f32>(
                    old_channel.as_f32()?,
                    new_channel.as_f32_mut()?,
                    self.method,
                    old_w,
                    old_h,
                    self.new_width,
                    self.new_height
                ),
                d => return Err(ImageErrors::ImageOperationNotImplemented(self.name(), d))
            }
            *old_channel = new_channel;
        }
        image.set_dimensions(self.new_width, self.new_height);

        Ok(())
    }

    fn supported_types(&self) -> &'static [BitType] {
        &[BitType::U8, BitType::F32]
    }
}
