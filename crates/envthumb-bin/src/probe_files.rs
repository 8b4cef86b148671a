/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use envthumb_image::thumbnail::probe;
use log::warn;

use crate::batch::{find_inputs, BatchConfig};
use crate::errors::BatchErrors;
use crate::serde::Metadata;

/// Probe input files, extract metadata, and print to standard output.
///
/// Files whose headers cannot be read are skipped with a warning
pub fn probe_input_files(config: &BatchConfig) -> Result<(), BatchErrors> {
    for in_file in find_inputs(config.input_dir(), config.extension())? {
        let size = match in_file.metadata() {
            Ok(meta) => meta.len(),
            Err(err) => {
                warn!("Could not stat {}: {err}", in_file.display());
                continue;
            }
        };
        match probe(&in_file) {
            Ok(metadata) => {
                let real_metadata =
                    Metadata::new(in_file.clone().into_os_string(), size, &metadata);

                println!("{}", serde_json::to_string_pretty(&real_metadata)?);
            }
            Err(err) => warn!("Could not probe {}: {err}", in_file.display())
        }
    }
    Ok(())
}
