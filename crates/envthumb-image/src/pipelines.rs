/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Pipelines, decode, process and encode a single image
//!
use std::time::Instant;

use log::Level::Trace;
use log::{log_enabled, trace};

use crate::codecs::ImageFormat;
use crate::errors::ImageErrors;
use crate::image::Image;
use crate::traits::{DecoderTrait, EncoderTrait, OperationsTrait};

#[derive(Copy, Clone, Debug)]
enum PipelineState {
    /// Initial state, the struct has been defined
    Initialized,
    /// The pipeline is ready to carry out image decoding
    Decode,
    /// The pipeline is ready to carry out image processing routines
    Operations,
    /// The pipeline is ready to carry out image encoding
    Encode,
    /// The pipeline is done.
    Finished
}

impl PipelineState {
    pub fn next(self) -> Option<Self> {
        match self {
            PipelineState::Initialized => Some(PipelineState::Decode),
            PipelineState::Decode => Some(PipelineState::Operations),
            PipelineState::Operations => Some(PipelineState::Encode),
            PipelineState::Encode => Some(PipelineState::Finished),
            PipelineState::Finished => None
        }
    }
}

/// A struct holding the result of an encode operation
///
/// It contains the image format the data is in
pub struct EncodeResult {
    pub(crate) format: ImageFormat,
    pub(crate) data:   Vec<u8>
}

impl EncodeResult {
    /// Return the raw data of the encoded format
    pub fn data(&self) -> &[u8] {
        &self.data
    }
    /// Return the format for which the data
    /// of this encode result is stored in
    pub fn format(&self) -> ImageFormat {
        self.format
    }
}

/// Pipeline, single image processing
///
/// A pipeline takes one decoder (or an already decoded image), runs
/// every queued operation on the image in order and encodes the result
/// with the configured encoder.
///
/// Each stage is timed and logged at trace level.
pub struct Pipeline<'a> {
    state:      Option<PipelineState>,
    decode:     Option<Box<dyn DecoderTrait + 'a>>,
    image:      Option<Image>,
    operations: Vec<Box<dyn OperationsTrait>>,
    encode:     Option<Box<dyn EncoderTrait>>,
    result:     Option<EncodeResult>
}

impl<'a> Pipeline<'a> {
    /// Create a new, empty pipeline
    #[allow(clippy::new_without_default)]
    pub fn new() -> Pipeline<'a> {
        Pipeline {
            state:      Some(PipelineState::Initialized),
            decode:     None,
            image:      None,
            operations: vec![],
            encode:     None,
            result:     None
        }
    }

    /// Use an already decoded image, the decode stage is then skipped
    pub fn chain_image(&mut self, image: Image) -> &mut Pipeline<'a> {
        self.image = Some(image);
        self
    }

    /// Override the decoder present in the pipeline with a different
    /// decoder.
    ///
    /// There can only be one decoder in a pipeline, so the last decoder
    /// is the one that will be considered.
    pub fn chain_decoder(&mut self, decoder: Box<dyn DecoderTrait + 'a>) -> &mut Pipeline<'a> {
        self.decode = Some(decoder);
        self
    }

    /// Add a new operation to the pipeline.
    ///
    /// Operations run in the order they were added
    ///
    /// # Example
    /// ```
    /// use envthumb_image::filters::gamma::Gamma;
    /// use envthumb_image::image::Image;
    /// use envthumb_image::pipelines::Pipeline;
    /// use zune_core::colorspace::ColorSpace;
    ///
    /// let mut pipeline = Pipeline::new();
    ///
    /// pipeline
    ///     .chain_image(Image::fill_f32(0.25, ColorSpace::Luma, 4, 4))
    ///     .chain_operations(Box::new(Gamma::new(2.0)));
    ///
    /// pipeline.advance_to_end().unwrap();
    /// ```
    pub fn chain_operations(&mut self, operations: Box<dyn OperationsTrait>) -> &mut Pipeline<'a> {
        self.operations.push(operations);
        self
    }

    /// Set the encoder used at the end of the pipeline
    pub fn chain_encoder(&mut self, encoder: Box<dyn EncoderTrait>) -> &mut Pipeline<'a> {
        self.encode = Some(encoder);
        self
    }

    /// Return the image being processed, if decoded
    pub fn image(&self) -> Option<&Image> {
        self.image.as_ref()
    }

    /// Return the encoded output, available once the pipeline finished
    /// with an encoder configured
    pub fn encode_result(&self) -> Option<&EncodeResult> {
        self.result.as_ref()
    }

    /// Consume the pipeline returning the encoded output
    pub fn into_encode_result(self) -> Option<EncodeResult> {
        self.result
    }

    /// Advance the pipeline one state forward
    ///
    /// The pipeline advance is as follows
    ///
    /// 1. Decode
    /// 2. One or more operations [ all ran at once]
    /// 3. Encode
    /// 4. Finish
    ///
    /// Calling `Pipeline::advance()` will run one of this operation
    ///
    /// # Errors
    /// Any error from the decoder, an operation or the encoder
    pub fn advance(&mut self) -> Result<(), ImageErrors> {
        let Some(state) = self.state else {
            return Ok(());
        };
        match state {
            PipelineState::Decode => {
                match self.decode.take() {
                    Some(mut decoder) => {
                        if log_enabled!(Trace) {
                            trace!("Current state: {:?}", state);
                        }
                        let start = Instant::now();

                        self.image = Some(decoder.decode()?);

                        trace!(
                            "Finished decoding with `{}` in {} ms",
                            decoder.name(),
                            start.elapsed().as_millis()
                        );
                    }
                    None => {
                        if self.image.is_none() {
                            return Err(ImageErrors::NoImageForOperations);
                        }
                        trace!("Image already present, no need to decode");
                    }
                }
            }
            PipelineState::Operations => {
                let image = self
                    .image
                    .as_mut()
                    .ok_or(ImageErrors::NoImageForOperations)?;

                if log_enabled!(Trace) && !self.operations.is_empty() {
                    trace!("Current state: {:?}", state);
                }

                for operation in &self.operations {
                    let operation_name = operation.name();

                    trace!("Running {}", operation_name);

                    let start = Instant::now();

                    operation.execute(image)?;

                    trace!(
                        "Finished running `{operation_name}` in {} ms",
                        start.elapsed().as_millis()
                    );
                }
            }
            PipelineState::Encode => {
                if let Some(encoder) = self.encode.as_mut() {
                    let image = self.image.as_ref().ok_or(ImageErrors::NoImageForEncoding)?;

                    if log_enabled!(Trace) {
                        trace!("Current state: {:?}", state);
                    }
                    let start = Instant::now();

                    let data = encoder.encode(image)?;

                    trace!(
                        "Finished encoding with `{}` in {} ms",
                        encoder.name(),
                        start.elapsed().as_millis()
                    );
                    self.result = Some(EncodeResult {
                        format: encoder.format(),
                        data
                    });
                }
            }
            PipelineState::Finished => {
                trace!("Finished operations for this pipeline");
            }
            PipelineState::Initialized => {}
        }
        self.state = state.next();

        Ok(())
    }

    /// Advance the operations in this pipeline up until
    /// we finish.
    ///
    /// This will run the decoder, all operations and the encoder
    ///
    /// # Errors
    /// The first error any stage returns, later stages are not run
    pub fn advance_to_end(&mut self) -> Result<(), ImageErrors> {
        while self.state.is_some() {
            self.advance()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use zune_core::bit_depth::BitDepth;
    use zune_core::colorspace::ColorSpace;

    use crate::codecs::png::PngEncoder;
    use crate::codecs::ImageFormat;
    use crate::filters::depth::Depth;
    use crate::image::Image;
    use crate::pipelines::Pipeline;

    #[test]
    fn runs_operations_and_encoder() {
        let mut pipeline = Pipeline::new();

        pipeline
            .chain_image(Image::fill_f32(0.5, ColorSpace::RGB, 8, 4))
            .chain_operations(Box::new(Depth::new(BitDepth::Eight)))
            .chain_encoder(Box::new(PngEncoder::new()));

        pipeline.advance_to_end().unwrap();

        assert_eq!(pipeline.image().unwrap().depth(), BitDepth::Eight);

        let result = pipeline.encode_result().unwrap();
        assert_eq!(result.format(), ImageFormat::PNG);
        assert_eq!(ImageFormat::guess_format(result.data()), Some(ImageFormat::PNG));
    }

    #[test]
    fn missing_image_is_an_error() {
        let mut pipeline = Pipeline::new();
        assert!(pipeline.advance_to_end().is_err());
    }

    #[test]
    fn encoder_errors_stop_the_pipeline() {
        let mut pipeline = Pipeline::new();

        // png cannot store floats
        pipeline
            .chain_image(Image::fill_f32(0.5, ColorSpace::RGB, 8, 4))
            .chain_encoder(Box::new(PngEncoder::new()));

        assert!(pipeline.advance_to_end().is_err());
        assert!(pipeline.encode_result().is_none());
    }
}
