/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::process::exit;

use envthumb_image::thumbnail::ThumbnailGenerator;
use log::error;

use crate::batch::run_batch;
use crate::probe_files::probe_input_files;

pub mod batch;
mod cmd_args;
mod cmd_parsers;
pub mod errors;
mod probe_files;
mod serde;

pub fn main() {
    let cmd = cmd_args::create_cmd_args();
    let options = cmd.get_matches();

    cmd_parsers::global_options::setup_logger(&options);

    let result = cmd_parsers::global_options::parse_options(&options).and_then(|parsed_opts| {
        if parsed_opts.probe {
            probe_input_files(&parsed_opts.batch)
        } else {
            let generator = ThumbnailGenerator::new(parsed_opts.thumbnail);
            run_batch(&parsed_opts.batch, &generator).map(|_| ())
        }
    });

    if let Err(err) = result {
        println!();
        error!(" Could not complete batch, reason {:?}", err);

        println!();
        exit(-1);
    }
}
