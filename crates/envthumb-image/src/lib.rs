/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! HDR environment map previews
//!
//! This crate decodes floating point environment maps (OpenEXR and Radiance HDR),
//! tone maps them with percentile clipping and gamma encoding, shrinks them with an
//! area filter and writes 8 bit PNG previews.
//!
//! The building blocks mirror a classic decode, operate, encode flow
//! - [`DecoderTrait`](traits::DecoderTrait) implementations turn bytes into an [`Image`](image::Image)
//! - [`OperationsTrait`](traits::OperationsTrait) implementations modify images in place
//! - [`EncoderTrait`](traits::EncoderTrait) implementations turn images back into bytes
//! - a [`Pipeline`](pipelines::Pipeline) runs all three in order
//!
//! Most callers only need the [`ThumbnailGenerator`](thumbnail::ThumbnailGenerator)
//!
//! ```no_run
//! use envthumb_image::thumbnail::{ThumbnailGenerator, ThumbnailOptions};
//!
//! let generator = ThumbnailGenerator::new(ThumbnailOptions::default());
//! generator.generate("studio.exr", "thumbnails/studio.png").unwrap();
//! ```
#![warn(clippy::correctness, clippy::perf, clippy::pedantic, clippy::panic)]
#![allow(
    clippy::needless_return,
    clippy::module_name_repetitions,
    clippy::missing_panics_doc,
    clippy::doc_markdown
)]

pub mod channel;
pub mod codecs;
pub mod errors;
pub mod filters;
pub mod image;
pub mod metadata;
pub mod pipelines;
mod serde;
pub mod thumbnail;
pub mod traits;
