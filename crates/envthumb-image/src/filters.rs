/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Image operations used to turn an HDR image into a preview
//!
//! Every operation implements [`OperationsTrait`](crate::traits::OperationsTrait),
//! a thumbnail is produced by running them in this order
//!
//! 1. [`PercentileNormalize`](normalize::PercentileNormalize)
//! 2. [`Gamma`](gamma::Gamma)
//! 3. [`Depth`](depth::Depth)
//! 4. [`Resize`](resize::Resize)
//! 5. [`ChannelOrder`](channel_order::ChannelOrder)
pub mod channel_order;
pub mod depth;
pub mod gamma;
pub mod normalize;
pub mod resize;
