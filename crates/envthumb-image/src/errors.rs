/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Errors possible during image processing
use std::fmt::{Debug, Display, Formatter};
use std::io::Error;

use zune_core::bit_depth::BitType;
use zune_core::colorspace::ColorSpace;

use crate::codecs::ImageFormat;

/// All possible image errors that can occur.
///
/// This is the grandfather of image errors and contains
/// all decoding, processing and encoding errors possible
pub enum ImageErrors {
    /// A decoder could not make sense of the input
    ImageDecodeErrors(String),
    /// The bytes do not belong to any format we know
    UnknownFormat,
    /// The format is known but its decoder was compiled out
    DecoderNotEnabled(ImageFormat),
    /// The image has a colorspace this stage cannot handle
    UnsupportedColorspace(ColorSpace, &'static str, &'static [ColorSpace]),
    /// Width and height do not match the pixels present
    DimensionsMisMatch(usize, usize),
    /// Zero sized image or zero sized output requested
    ZeroDimensions(usize, usize),
    NoImageForOperations,
    NoImageForEncoding,
    OperationsError(ImageOperationsErrors),
    EncodeErrors(ImgEncodeErrors),
    GenericString(String),
    GenericStr(&'static str),
    /// Operation does not support images of this bit type
    ImageOperationNotImplemented(&'static str, BitType),
    IoError(std::io::Error)
}

/// Errors that may occur during image operations
pub enum ImageOperationsErrors {
    /// A parameter given to the operation is out of range
    InvalidParameter(&'static str, f32),
    /// A channel was accessed with the wrong storage type
    WrongTypeId(BitType, BitType)
}

/// Errors that may occur during image encoding
pub enum ImgEncodeErrors {
    ImageEncodeErrors(String),
    UnsupportedDepth(BitType, &'static str)
}

impl Debug for ImageErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ImageDecodeErrors(err) => {
                writeln!(f, "{err}")
            }
            Self::UnknownFormat => {
                writeln!(f, "Unknown or unsupported image format")
            }
            Self::DecoderNotEnabled(format) => {
                writeln!(
                    f,
                    "The {format:?} decoder is not enabled, recompile with its feature turned on"
                )
            }
            Self::UnsupportedColorspace(present, operation, supported) => {
                writeln!(f, "Unsupported colorspace {present:?}, for the operation {operation}\nSupported colorspaces are {supported:?}")
            }
            Self::DimensionsMisMatch(expected, found) => {
                writeln!(
                    f,
                    "Dimensions mismatch, expected {expected} but found {found}"
                )
            }
            Self::ZeroDimensions(width, height) => {
                writeln!(f, "Zero sized dimensions {width}x{height} are not allowed")
            }
            Self::NoImageForOperations => {
                writeln!(f, "No image found for which we can execute operations")
            }
            Self::NoImageForEncoding => {
                writeln!(f, "No image found for which we can encode")
            }
            Self::OperationsError(ref error) => {
                writeln!(f, "{error:?}")
            }
            Self::EncodeErrors(ref err) => {
                writeln!(f, "{err:?}")
            }
            Self::GenericString(err) => {
                writeln!(f, "{err}")
            }
            Self::GenericStr(err) => {
                writeln!(f, "{err}")
            }
            Self::ImageOperationNotImplemented(operation, depth) => {
                writeln!(f, "{operation} not implemented for {depth:?}")
            }
            Self::IoError(err) => {
                writeln!(f, "I/O error {err}")
            }
        }
    }
}

impl Debug for ImageOperationsErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidParameter(param, value) => {
                writeln!(f, "Invalid value {value} for parameter {param}")
            }
            Self::WrongTypeId(expected, found) => {
                writeln!(f, "Expected channel of type {expected:?} but found {found:?}")
            }
        }
    }
}

impl Debug for ImgEncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ImageEncodeErrors(err) => {
                writeln!(f, "Image could not be encoded, reason: {err}")
            }
            Self::UnsupportedDepth(depth, encoder) => {
                writeln!(f, "The {encoder} encoder cannot encode images of type {depth:?}")
            }
        }
    }
}

impl Display for ImageErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

impl std::error::Error for ImageErrors {}

impl From<ImageOperationsErrors> for ImageErrors {
    fn from(from: ImageOperationsErrors) -> Self {
        ImageErrors::OperationsError(from)
    }
}

impl From<ImgEncodeErrors> for ImageErrors {
    fn from(from: ImgEncodeErrors) -> Self {
        ImageErrors::EncodeErrors(from)
    }
}

impl From<std::io::Error> for ImageErrors {
    fn from(value: Error) -> Self {
        ImageErrors::IoError(value)
    }
}

impl From<tempfile::PersistError> for ImageErrors {
    fn from(value: tempfile::PersistError) -> Self {
        ImageErrors::IoError(value.error)
    }
}
