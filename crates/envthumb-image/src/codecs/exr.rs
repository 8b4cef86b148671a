/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

#![cfg(feature = "exr")]
//! OpenEXR decoding support
//!
//! Only the first valid layer at its largest resolution level is decoded.
//! Colour planes are returned in the order the file stores them, which
//! for the usual `R`,`G`,`B` channels is alphabetical, so RGB files come
//! out as [`ColorSpace::BGR`] images.
use std::io::Cursor;

use exr::prelude::{MetaData, ReadChannels, ReadLayers};
use log::trace;
use zune_core::bit_depth::BitDepth;
use zune_core::colorspace::ColorSpace;

use crate::channel::Channel;
use crate::codecs::ImageFormat;
use crate::errors::ImageErrors;
use crate::image::Image;
use crate::metadata::ImageMetadata;
use crate::traits::DecoderTrait;

/// Order in which colour planes are handed out for three channel images
const COLOUR_ORDER: [&str; 3] = ["B", "G", "R"];

pub struct ExrDecoder<'a> {
    data: &'a [u8]
}

impl<'a> ExrDecoder<'a> {
    pub fn new(data: &'a [u8]) -> ExrDecoder<'a> {
        ExrDecoder { data }
    }
}

/// Strip any layer prefix, `diffuse.R` becomes `R`
fn short_name(name: &str) -> &str {
    name.rsplit('.').next().unwrap_or(name)
}

/// Pick the colour channels out of a channel list
///
/// Returns the colorspace of the decoded image and the indices of the
/// channels that make up its planes, in plane order. Alpha is dropped.
fn colour_layout(names: &[String]) -> Result<(ColorSpace, Vec<usize>), ImageErrors> {
    let colour: Vec<usize> = names
        .iter()
        .enumerate()
        .filter(|(_, name)| !short_name(name).eq_ignore_ascii_case("A"))
        .map(|(pos, _)| pos)
        .collect();

    match colour.len() {
        1 => Ok((ColorSpace::Luma, colour)),
        3 => {
            let mut planes = Vec::with_capacity(3);

            for wanted in COLOUR_ORDER {
                let found = colour
                    .iter()
                    .copied()
                    .find(|pos| short_name(&names[*pos]).eq_ignore_ascii_case(wanted));

                match found {
                    Some(pos) => planes.push(pos),
                    None => {
                        return Err(ImageErrors::ImageDecodeErrors(format!(
                            "exr: three colour channels {names:?} but no {wanted} channel"
                        )))
                    }
                }
            }
            Ok((ColorSpace::BGR, planes))
        }
        count => Err(ImageErrors::ImageDecodeErrors(format!(
            "exr: expected 1 or 3 colour channels but found {count} ({names:?})"
        )))
    }
}

impl DecoderTrait for ExrDecoder<'_> {
    fn decode(&mut self) -> Result<Image, ImageErrors> {
        let image = exr::prelude::read()
            .no_deep_data()
            .largest_resolution_level()
            .all_channels()
            .first_valid_layer()
            .all_attributes()
            .from_buffered(Cursor::new(self.data))?;

        let layer = image.layer_data;
        let (width, height) = (layer.size.width(), layer.size.height());

        let names: Vec<String> = layer
            .channel_data
            .list
            .iter()
            .map(|channel| channel.name.to_string())
            .collect();

        trace!("EXR channels: {:?}", names);

        let (colorspace, planes) = colour_layout(&names)?;

        let channels = planes
            .into_iter()
            .map(|pos| {
                let samples = &layer.channel_data.list[pos].sample_data;
                Channel::F32(samples.values_as_f32().collect())
            })
            .collect();

        Image::new(channels, width, height, colorspace)
    }

    fn name(&self) -> &'static str {
        "EXR decoder"
    }

    fn read_headers(&mut self) -> Result<ImageMetadata, ImageErrors> {
        let meta = MetaData::read_from_buffered(Cursor::new(self.data), false)?;

        let header = meta
            .headers
            .first()
            .ok_or(ImageErrors::GenericStr("exr: file has no layers"))?;

        let names: Vec<String> = header
            .channels
            .list
            .iter()
            .map(|channel| channel.name.to_string())
            .collect();

        // planes are stored B, G, R but the file itself is plain RGB
        let colorspace = match colour_layout(&names)?.0 {
            ColorSpace::BGR => ColorSpace::RGB,
            colorspace => colorspace
        };

        Ok(ImageMetadata {
            width: header.layer_size.width(),
            height: header.layer_size.height(),
            colorspace,
            depth: BitDepth::Float32,
            format: Some(ImageFormat::EXR),
            channels: names
        })
    }
}

impl From<exr::error::Error> for ImageErrors {
    fn from(value: exr::error::Error) -> Self {
        Self::ImageDecodeErrors(format!("exr: {value}"))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use exr::prelude::{AnyChannel, AnyChannels, FlatSamples, SmallVec, WritableImage};
    use zune_core::colorspace::ColorSpace;

    use crate::codecs::exr::{colour_layout, ExrDecoder};
    use crate::traits::DecoderTrait;

    fn encode(width: usize, height: usize, channels: Vec<(&str, Vec<f32>)>) -> Vec<u8> {
        let list = channels
            .into_iter()
            .map(|(name, samples)| AnyChannel::new(name, FlatSamples::F32(samples)))
            .collect();
        let channels = AnyChannels::sort(SmallVec::from_vec(list));
        let image = exr::prelude::Image::from_channels((width, height), channels);

        let mut out = Vec::new();
        image.write().to_buffered(Cursor::new(&mut out)).unwrap();
        out
    }

    #[test]
    fn rgb_comes_out_as_bgr() {
        let (w, h) = (4, 2);
        let data = encode(
            w,
            h,
            vec![
                ("R", vec![1.0; w * h]),
                ("G", vec![2.0; w * h]),
                ("B", vec![3.0; w * h]),
            ]
        );
        let mut decoder = ExrDecoder::new(&data);
        assert_eq!(decoder.read_headers().unwrap().colorspace(), ColorSpace::RGB);

        let image = decoder.decode().unwrap();
        assert_eq!(image.colorspace(), ColorSpace::BGR);
        assert_eq!(image.dimensions(), (w, h));

        let planes = image.channels_ref();
        assert_eq!(planes[0].as_f32().unwrap()[0], 3.0);
        assert_eq!(planes[1].as_f32().unwrap()[0], 2.0);
        assert_eq!(planes[2].as_f32().unwrap()[0], 1.0);
    }

    #[test]
    fn alpha_is_dropped_and_luma_kept() {
        let data = encode(3, 3, vec![("Y", vec![0.5; 9]), ("A", vec![1.0; 9])]);
        let mut decoder = ExrDecoder::new(&data);

        let meta = decoder.read_headers().unwrap();
        assert_eq!(meta.dimensions(), (3, 3));
        assert_eq!(meta.channel_names().len(), 2);

        let image = decoder.decode().unwrap();
        assert_eq!(image.colorspace(), ColorSpace::Luma);
        assert_eq!(image.channels_ref().len(), 1);
    }

    #[test]
    fn unusual_channel_counts_fail() {
        let names = |list: &[&str]| list.iter().map(|x| x.to_string()).collect::<Vec<_>>();

        assert!(colour_layout(&names(&["R", "G"])).is_err());
        assert!(colour_layout(&names(&["X", "Y", "Z"])).is_err());
        assert!(colour_layout(&names(&["B", "G", "R", "Z"])).is_err());

        let (colorspace, planes) = colour_layout(&names(&["A", "B", "G", "R"])).unwrap();
        assert_eq!(colorspace, ColorSpace::BGR);
        assert_eq!(planes, vec![1, 2, 3]);

        let (_, planes) = colour_layout(&names(&["beauty.B", "beauty.G", "beauty.R"])).unwrap();
        assert_eq!(planes, vec![0, 1, 2]);
    }

    #[test]
    fn garbage_is_an_error() {
        let mut decoder = ExrDecoder::new(&[0x76, 0x2f, 0x31, 0x01, 0, 0]);
        assert!(decoder.decode().is_err());
    }
}
