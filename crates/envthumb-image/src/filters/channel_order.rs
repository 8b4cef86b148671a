/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Reorder color planes
use log::trace;
use zune_core::bit_depth::BitType;
use zune_core::colorspace::ColorSpace;

use crate::errors::ImageErrors;
use crate::image::Image;
use crate::traits::OperationsTrait;

/// Make sure three channel images are laid out red, green, blue
///
/// BGR images have their first and last plane swapped, RGB and
/// Luma images are left as is.
#[derive(Copy, Clone, Default)]
pub struct ChannelOrder;

impl ChannelOrder {
    pub fn new() -> ChannelOrder {
        ChannelOrder
    }
}

impl OperationsTrait for ChannelOrder {
    fn name(&self) -> &'static str {
        "Channel Order"
    }

    fn execute_impl(&self, image: &mut Image) -> Result<(), ImageErrors> {
        match image.colorspace() {
            ColorSpace::BGR => {
                trace!("Swapping BGR planes to RGB");
                image.channels_mut().swap(0, 2);
                image.set_colorspace(ColorSpace::RGB);
                Ok(())
            }
            ColorSpace::RGB | ColorSpace::Luma => Ok(()),
            colorspace => Err(ImageErrors::UnsupportedColorspace(
                colorspace,
                self.name(),
                &[ColorSpace::BGR, ColorSpace::RGB, ColorSpace::Luma]
            ))
        }
    }

    fn supported_types(&self) -> &'static [BitType] {
        &[BitType::U8, BitType::F32]
    }
}
