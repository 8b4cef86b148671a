/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Errors that stop a whole batch
use std::fmt::{Debug, Display, Formatter};
use std::path::PathBuf;

/// Fatal batch errors
///
/// Errors for a single file never end up here, they are
/// counted as failures and the batch moves on
pub enum BatchErrors {
    /// The output directory could not be created
    CreateOutputDir(PathBuf, std::io::Error),
    /// The input directory could not be listed
    ListInputDir(PathBuf, std::io::Error),
    /// A command line option has an unusable value
    InvalidOption(&'static str, String),
    /// Probing requested metadata that could not be serialized
    Serialization(serde_json::Error)
}

impl Debug for BatchErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CreateOutputDir(path, err) => {
                writeln!(
                    f,
                    "Could not create output directory {}: {err}",
                    path.display()
                )
            }
            Self::ListInputDir(path, err) => {
                writeln!(
                    f,
                    "Could not list input directory {}: {err}",
                    path.display()
                )
            }
            Self::InvalidOption(option, reason) => {
                writeln!(f, "Invalid value for --{option}: {reason}")
            }
            Self::Serialization(err) => {
                writeln!(f, "Could not serialize metadata: {err}")
            }
        }
    }
}

impl Display for BatchErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

impl std::error::Error for BatchErrors {}

impl From<serde_json::Error> for BatchErrors {
    fn from(value: serde_json::Error) -> Self {
        BatchErrors::Serialization(value)
    }
}
