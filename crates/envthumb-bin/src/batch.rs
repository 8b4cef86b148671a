/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Convert every environment map in a directory
use std::fmt::{Display, Formatter};
use std::fs;
use std::path::{Path, PathBuf};

use envthumb_image::thumbnail::ThumbnailGenerator;
use log::{debug, info, warn};

use crate::cmd_args::DEFAULT_WEB_OUTPUT;
use crate::errors::BatchErrors;

/// Directories and file selection for one batch run
#[derive(Debug, Clone)]
pub struct BatchConfig {
    input_dir:      PathBuf,
    output_dir:     PathBuf,
    web_output_dir: Option<PathBuf>,
    extension:      String
}

impl BatchConfig {
    /// Create a configuration reading `*.exr` from `input_dir`
    ///
    /// Thumbnails go to `<input_dir>/thumbnails` and are copied
    /// into the default web directory when its parent exists.
    pub fn new<P: Into<PathBuf>>(input_dir: P) -> BatchConfig {
        let input_dir = input_dir.into();

        BatchConfig {
            output_dir: input_dir.join("thumbnails"),
            input_dir,
            web_output_dir: Some(PathBuf::from(DEFAULT_WEB_OUTPUT)),
            extension: "exr".to_string()
        }
    }

    #[must_use]
    pub fn set_output_dir<P: Into<PathBuf>>(mut self, output_dir: P) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    /// Set the secondary output directory, `None` disables it
    #[must_use]
    pub fn set_web_output_dir(mut self, web_output_dir: Option<PathBuf>) -> Self {
        self.web_output_dir = web_output_dir;
        self
    }

    /// Set the extension of input files, without the leading dot
    #[must_use]
    pub fn set_extension(mut self, extension: &str) -> Self {
        self.extension = extension.to_string();
        self
    }

    pub fn input_dir(&self) -> &Path {
        &self.input_dir
    }
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }
    pub fn web_output_dir(&self) -> Option<&Path> {
        self.web_output_dir.as_deref()
    }
    pub fn extension(&self) -> &str {
        &self.extension
    }
}

/// Outcome of a batch run
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct BatchReport {
    /// Thumbnails written to the primary directory
    pub succeeded: usize,
    /// Input files found
    pub total:     usize
}

impl Display for BatchReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Completed! Generated {}/{} thumbnails",
            self.succeeded, self.total
        )
    }
}

/// List regular files in `dir` whose extension is exactly `extension`,
/// sorted by path
///
/// # Errors
/// If the directory cannot be read
pub fn find_inputs(dir: &Path, extension: &str) -> Result<Vec<PathBuf>, BatchErrors> {
    let list_err = |err: std::io::Error| BatchErrors::ListInputDir(dir.to_path_buf(), err);

    let mut files = Vec::new();

    for entry in fs::read_dir(dir).map_err(list_err)? {
        let path = entry.map_err(list_err)?.path();

        let matches = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext == extension);

        if matches && path.is_file() {
            files.push(path);
        }
    }
    files.sort();

    Ok(files)
}

/// Create the secondary directory if its parent exists
///
/// Returns the directory when it can be used
fn prepare_web_output(web_dir: &Path) -> Option<&Path> {
    let parent_exists = match web_dir.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.is_dir(),
        _ => true
    };
    if !parent_exists {
        debug!(
            "Parent of {} does not exist, skipping secondary output",
            web_dir.display()
        );
        return None;
    }
    match fs::create_dir_all(web_dir) {
        Ok(()) => Some(web_dir),
        Err(err) => {
            warn!(
                "Could not create secondary output {}: {err}",
                web_dir.display()
            );
            None
        }
    }
}

/// Run the generator on every matching file in the input directory
///
/// Files are processed one at a time in sorted order, a failing file
/// is reported and skipped.
///
/// # Errors
/// - The input directory cannot be listed
/// - The primary output directory cannot be created
pub fn run_batch(
    config: &BatchConfig, generator: &ThumbnailGenerator
) -> Result<BatchReport, BatchErrors> {
    // list first, the default output dir lives inside the input dir
    let files = find_inputs(&config.input_dir, &config.extension)?;

    fs::create_dir_all(&config.output_dir)
        .map_err(|err| BatchErrors::CreateOutputDir(config.output_dir.clone(), err))?;

    let web_dir = config.web_output_dir().and_then(prepare_web_output);

    println!(
        "Found {} {} files",
        files.len(),
        config.extension.to_uppercase()
    );

    let mut report = BatchReport {
        succeeded: 0,
        total:     files.len()
    };

    for file in &files {
        let stem = file
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();
        let name = file
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        let output = config.output_dir.join(format!("{stem}.png"));

        println!("Processing {name}...");

        if !generator.try_generate(file, &output) {
            println!("  ✗ Failed to generate thumbnail");
            continue;
        }
        report.succeeded += 1;
        println!("  ✓ Generated {stem}.png");

        if let Some(web_dir) = web_dir {
            let copy = web_dir.join(format!("{stem}_thumb.png"));

            match fs::copy(&output, &copy) {
                Ok(_) => debug!("Copied thumbnail to {}", copy.display()),
                Err(err) => warn!("Could not copy thumbnail to {}: {err}", copy.display())
            }
        }
    }
    println!();
    println!("{report}");

    info!(
        "{} of {} files failed",
        report.total - report.succeeded,
        report.total
    );

    Ok(report)
}
