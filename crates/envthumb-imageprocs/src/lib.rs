/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Image processing routines for `envthumb`
//!
//! The routines here work on a single planar channel (or a flattened
//! set of channels) and know nothing about files, colorspaces or codecs.
//! `envthumb-image` wraps them into operations that run on whole images.
//!
//! # Example
//! - Tone map a handful of HDR samples into 8 bit values
//! ```
//! use envthumb_imageprocs::depth::f32_to_u8;
//! use envthumb_imageprocs::gamma::gamma_encode;
//! use envthumb_imageprocs::normalize::normalize_range;
//! use envthumb_imageprocs::percentile::percentile_bounds;
//!
//! let mut samples = vec![0.0_f32, 0.5, 4.0, 12.0, 100.0];
//! let (low, high) = percentile_bounds(&samples, 1.0, 99.0).unwrap();
//! normalize_range(&mut samples, low, high);
//! gamma_encode(&mut samples, 2.2);
//!
//! let mut out = vec![0_u8; samples.len()];
//! f32_to_u8(&samples, &mut out);
//! assert_eq!(out[0], 0);
//! ```

// Benchmark support needs nightly
#![cfg_attr(feature = "benchmarks", feature(test))]
#![warn(
    clippy::correctness,
    clippy::perf,
    clippy::pedantic,
    clippy::inline_always,
    clippy::missing_errors_doc,
    clippy::panic
)]
#![allow(
    clippy::needless_return,
    clippy::similar_names,
    clippy::doc_markdown,
    clippy::module_name_repetitions,
    clippy::missing_panics_doc
)]

pub mod deinterleave;
pub mod depth;
pub mod gamma;
pub mod normalize;
pub mod percentile;
pub mod resize;
pub mod traits;
