/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

#![cfg(feature = "serde-support")]

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::codecs::ImageFormat;
use crate::metadata::ImageMetadata;

impl Serialize for ImageMetadata {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        const STRUCT_FIELDS: usize = 6;
        let mut state = serializer.serialize_struct("Metadata", STRUCT_FIELDS)?;

        state.serialize_field("width", &self.width)?;
        state.serialize_field("height", &self.height)?;
        state.serialize_field("colorspace", &format!("{:?}", self.colorspace))?;
        state.serialize_field("depth", &format!("{:?}", self.depth))?;
        state.serialize_field("format", &self.format)?;
        state.serialize_field("channels", &self.channels)?;

        state.end()
    }
}

impl Serialize for ImageFormat {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        serializer.serialize_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use zune_core::bit_depth::BitDepth;
    use zune_core::colorspace::ColorSpace;

    use crate::codecs::ImageFormat;
    use crate::metadata::ImageMetadata;

    #[test]
    fn metadata_serializes_to_json() {
        let metadata = ImageMetadata {
            width:      64,
            height:     32,
            colorspace: ColorSpace::RGB,
            depth:      BitDepth::Float32,
            format:     Some(ImageFormat::EXR),
            channels:   vec!["B".to_string(), "G".to_string(), "R".to_string()]
        };
        let json = serde_json::to_value(&metadata).unwrap();

        assert_eq!(json["width"], 64);
        assert_eq!(json["colorspace"], "RGB");
        assert_eq!(json["depth"], "Float32");
        assert_eq!(json["format"], "exr");
        assert_eq!(json["channels"][2], "R");
    }
}
