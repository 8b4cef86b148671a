/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A single image channel
//!
//! Images are stored planar, one [`Channel`] per color component, so that
//! operations can work on contiguous runs of samples of the same kind.
use zune_core::bit_depth::BitType;

use crate::errors::ImageOperationsErrors;

/// Samples of one color component, either 8 bit or floating point
#[derive(Clone, Debug, PartialEq)]
pub enum Channel {
    U8(Vec<u8>),
    F32(Vec<f32>)
}

impl Channel {
    /// Create a zero filled channel of `length` samples with the same
    /// storage type as `self`
    pub fn zeroed_like(&self, length: usize) -> Channel {
        match self {
            Channel::U8(_) => Channel::U8(vec![0; length]),
            Channel::F32(_) => Channel::F32(vec![0.0; length])
        }
    }
    /// Number of samples in this channel
    pub fn len(&self) -> usize {
        match self {
            Channel::U8(samples) => samples.len(),
            Channel::F32(samples) => samples.len()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub const fn bit_type(&self) -> BitType {
        match self {
            Channel::U8(_) => BitType::U8,
            Channel::F32(_) => BitType::F32
        }
    }
    /// Borrow the samples as floats
    ///
    /// # Errors
    /// If the channel does not store `f32` samples
    pub fn as_f32(&self) -> Result<&[f32], ImageOperationsErrors> {
        match self {
            Channel::F32(samples) => Ok(samples),
            other => Err(ImageOperationsErrors::WrongTypeId(
                BitType::F32,
                other.bit_type()
            ))
        }
    }

    /// Mutably borrow the samples as floats
    ///
    /// # Errors
    /// If the channel does not store `f32` samples
    pub fn as_f32_mut(&mut self) -> Result<&mut [f32], ImageOperationsErrors> {
        match self {
            Channel::F32(samples) => Ok(samples),
            other => Err(ImageOperationsErrors::WrongTypeId(
                BitType::F32,
                other.bit_type()
            ))
        }
    }

    /// Borrow the samples as bytes
    ///
    /// # Errors
    /// If the channel does not store `u8` samples
    pub fn as_u8(&self) -> Result<&[u8], ImageOperationsErrors> {
        match self {
            Channel::U8(samples) => Ok(samples),
            other => Err(ImageOperationsErrors::WrongTypeId(
                BitType::U8,
                other.bit_type()
            ))
        }
    }

    /// Mutably borrow the samples as bytes
    ///
    /// # Errors
    /// If the channel does not store `u8` samples
    pub fn as_u8_mut(&mut self) -> Result<&mut [u8], ImageOperationsErrors> {
        match self {
            Channel::U8(samples) => Ok(samples),
            other => Err(ImageOperationsErrors::WrongTypeId(
                BitType::U8,
                other.bit_type()
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use zune_core::bit_depth::BitType;

    use crate::channel::Channel;

    #[test]
    fn reinterpret_wrong_type_fails() {
        let mut channel = Channel::U8(vec![7; 4]).zeroed_like(10);

        assert_eq!(channel.len(), 10);
        assert!(channel.as_u8_mut().is_ok());
        assert!(channel.as_f32().is_err());
    }

    #[test]
    fn zeroed_like_keeps_storage_type() {
        let channel = Channel::F32(vec![1.5; 3]).zeroed_like(5);

        assert_eq!(channel.bit_type(), BitType::F32);
        assert_eq!(channel.as_f32().unwrap(), &[0.0; 5]);
    }
}
