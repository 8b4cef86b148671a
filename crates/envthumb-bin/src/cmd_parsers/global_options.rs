/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::PathBuf;

use clap::parser::ValueSource;
use clap::ArgMatches;
use envthumb_image::thumbnail::ThumbnailOptions;
use log::{info, Level};

use crate::batch::BatchConfig;
use crate::errors::BatchErrors;

#[derive(Debug, Clone)]
pub struct CmdOptions {
    pub batch:     BatchConfig,
    pub thumbnail: ThumbnailOptions,
    pub probe:     bool
}

fn get_path(options: &ArgMatches, id: &str) -> Option<PathBuf> {
    options.get_one::<PathBuf>(id).cloned()
}

fn get_number<T: Copy + Send + Sync + 'static>(options: &ArgMatches, id: &str, default: T) -> T {
    options.get_one::<T>(id).copied().unwrap_or(default)
}

pub fn parse_options(options: &ArgMatches) -> Result<CmdOptions, BatchErrors> {
    let input = get_path(options, "in").unwrap_or_else(|| PathBuf::from("environments"));

    let mut batch = BatchConfig::new(input);

    if let Some(out) = get_path(options, "out") {
        info!("Writing thumbnails to {}", out.display());
        batch = batch.set_output_dir(out);
    }

    if options.get_flag("no-web-output") {
        info!("Secondary output disabled");
        batch = batch.set_web_output_dir(None);
    } else if let Some(web) = get_path(options, "web-output") {
        if options.value_source("web-output") == Some(ValueSource::CommandLine) {
            info!("Secondary output set to {}", web.display());
        }
        batch = batch.set_web_output_dir(Some(web));
    }

    if let Some(extension) = options.get_one::<String>("extension") {
        let extension = extension.trim_start_matches('.');

        if extension.is_empty() {
            return Err(BatchErrors::InvalidOption(
                "extension",
                "extension cannot be empty".to_string()
            ));
        }
        batch = batch.set_extension(extension);
    }

    let defaults = ThumbnailOptions::default();
    let (default_w, default_h) = defaults.dimensions();
    let (default_low, default_high) = defaults.percentiles();

    let width = get_number(options, "width", default_w);
    let height = get_number(options, "height", default_h);

    if width == 0 || height == 0 {
        return Err(BatchErrors::InvalidOption(
            "width",
            format!("thumbnail dimensions {width}x{height} must be non-zero")
        ));
    }

    let low = get_number(options, "low-percentile", default_low);
    let high = get_number(options, "high-percentile", default_high);

    if !(0.0..=100.0).contains(&low) || !(0.0..=100.0).contains(&high) || low > high {
        return Err(BatchErrors::InvalidOption(
            "low-percentile",
            format!("percentiles {low} and {high} must satisfy 0 <= low <= high <= 100")
        ));
    }

    let gamma = get_number(options, "gamma", defaults.gamma());

    if !(gamma.is_finite() && gamma > 0.0) {
        return Err(BatchErrors::InvalidOption(
            "gamma",
            format!("{gamma} is not a positive number")
        ));
    }

    let thumbnail = defaults
        .set_width(width)
        .set_height(height)
        .set_percentiles(low, high)
        .set_gamma(gamma);

    Ok(CmdOptions {
        batch,
        thumbnail,
        probe: options.get_flag("probe")
    })
}

/// Set up logging options
pub fn setup_logger(options: &ArgMatches) {
    let log_level;

    if options.get_flag("debug") {
        log_level = Level::Debug;
    } else if options.get_flag("trace") {
        log_level = Level::Trace;
    } else if options.get_flag("warn") {
        log_level = Level::Warn;
    } else if options.get_flag("info") {
        log_level = Level::Info;
    } else {
        log_level = Level::Warn;
    }

    if let Err(err) = simple_logger::init_with_level(log_level) {
        eprintln!("Could not initialize logger: {err}");
        return;
    }

    info!("Initialized logger");
    info!("Log level :{}", log_level);
}
