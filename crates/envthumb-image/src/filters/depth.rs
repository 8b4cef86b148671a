/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Depth conversion
//!
//! Floating point images are expected to hold normalized samples in
//! `[0.0, 1.0]`, which map onto `0..=255` for 8 bit images.
use envthumb_imageprocs::depth::f32_to_u8;
use log::trace;
use zune_core::bit_depth::{BitDepth, BitType};

use crate::channel::Channel;
use crate::errors::ImageErrors;
use crate::image::Image;
use crate::traits::OperationsTrait;

/// Change the image's bit depth from it's initial
/// value to the one specified by this operation.
#[derive(Copy, Clone)]
pub struct Depth {
    depth: BitDepth
}

impl Depth {
    pub fn new(depth: BitDepth) -> Depth {
        Depth { depth }
    }
}

impl OperationsTrait for Depth {
    fn name(&self) -> &'static str {
        "Depth"
    }

    fn execute_impl(&self, image: &mut Image) -> Result<(), ImageErrors> {
        let image_depth = image.depth();

        if image_depth == self.depth {
            trace!("Image depth already matches requested, no-op");
            return Ok(());
        }

        match (image_depth, self.depth) {
            (BitDepth::Float32, BitDepth::Eight) => {
                let mut new_channels = Vec::with_capacity(image.channels_ref().len());

                for channel in image.channels_ref() {
                    let old_data = channel.as_f32()?;
                    let mut new_data = vec![0_u8; old_data.len()];

                    f32_to_u8(old_data, &mut new_data);
                    new_channels.push(Channel::U8(new_data));
                }
                image.set_channels(new_channels);
            }
            (_, _) => {
                return Err(ImageErrors::GenericString(format!(
                    "Unsupported depth conversion from {image_depth:?} to {:?}",
                    self.depth
                )));
            }
        }
        Ok(())
    }

    fn supported_types(&self) -> &'static [BitType] {
        &[BitType::U8, BitType::F32]
    }
}
