/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::Path;

use envthumb_bin::batch::{run_batch, BatchConfig, BatchReport};
use envthumb_bin::errors::BatchErrors;
use envthumb_image::thumbnail::{ThumbnailGenerator, ThumbnailOptions};

#[allow(clippy::cast_precision_loss)]
fn populate(dir: &Path) {
    for (i, name) in ["alpha.exr", "beta.exr", "gamma.exr"].iter().enumerate() {
        exr::prelude::write_rgb_file(dir.join(name), 64, 32, |x, y| {
            (x as f32 * (i + 1) as f32, y as f32, 0.5_f32)
        })
        .unwrap();
    }
    std::fs::write(dir.join("corrupt.exr"), b"this is not an exr file").unwrap();
    // ignored, wrong extension
    std::fs::write(dir.join("notes.txt"), b"hello").unwrap();
    std::fs::write(dir.join("beta.EXR"), b"not picked up").unwrap();
}

fn file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

fn small_generator() -> ThumbnailGenerator {
    ThumbnailGenerator::new(ThumbnailOptions::default().set_width(40).set_height(20))
}

#[test]
fn corrupt_file_does_not_stop_the_batch() {
    let input = tempfile::tempdir().unwrap();
    populate(input.path());

    let config = BatchConfig::new(input.path()).set_web_output_dir(None);
    let report = run_batch(&config, &small_generator()).unwrap();

    assert_eq!(
        report,
        BatchReport {
            succeeded: 3,
            total:     4
        }
    );
    assert_eq!(
        file_names(&input.path().join("thumbnails")),
        ["alpha.png", "beta.png", "gamma.png"]
    );
}

#[test]
fn secondary_dir_is_skipped_without_parent() {
    let input = tempfile::tempdir().unwrap();
    let scratch = tempfile::tempdir().unwrap();
    populate(input.path());

    let web = scratch.path().join("web/public/thumbnails");
    let config = BatchConfig::new(input.path()).set_web_output_dir(Some(web.clone()));

    let report = run_batch(&config, &small_generator()).unwrap();

    assert_eq!(report.succeeded, 3);
    assert!(!web.exists());
    assert!(!scratch.path().join("web/public").exists());
}

#[test]
fn secondary_dir_receives_copies() {
    let input = tempfile::tempdir().unwrap();
    let scratch = tempfile::tempdir().unwrap();
    populate(input.path());

    let output = scratch.path().join("primary");
    let web = scratch.path().join("thumbnails");
    let config = BatchConfig::new(input.path())
        .set_output_dir(&output)
        .set_web_output_dir(Some(web.clone()));

    run_batch(&config, &small_generator()).unwrap();

    assert_eq!(
        file_names(&web),
        ["alpha_thumb.png", "beta_thumb.png", "gamma_thumb.png"]
    );
    assert_eq!(
        std::fs::read(output.join("beta.png")).unwrap(),
        std::fs::read(web.join("beta_thumb.png")).unwrap()
    );
}

#[test]
fn hdr_extension_selects_other_files() {
    let input = tempfile::tempdir().unwrap();
    populate(input.path());

    let config = BatchConfig::new(input.path())
        .set_web_output_dir(None)
        .set_extension("hdr");

    let report = run_batch(&config, &small_generator()).unwrap();

    assert_eq!(report, BatchReport::default());
}

#[test]
fn missing_input_dir_is_fatal() {
    let scratch = tempfile::tempdir().unwrap();
    let config = BatchConfig::new(scratch.path().join("absent"))
        .set_output_dir(scratch.path().join("out"))
        .set_web_output_dir(None);

    let result = run_batch(&config, &small_generator());

    assert!(matches!(result, Err(BatchErrors::ListInputDir(_, _))));
}

#[test]
fn missing_input_dir_is_not_created() {
    let scratch = tempfile::tempdir().unwrap();
    let absent = scratch.path().join("typo_environments");
    let config = BatchConfig::new(&absent).set_web_output_dir(None);

    let result = run_batch(&config, &small_generator());

    assert!(matches!(result, Err(BatchErrors::ListInputDir(_, _))));
    assert!(!absent.exists());
}

#[test]
#[allow(clippy::cast_precision_loss)]
fn upper_case_extension_does_not_overwrite() {
    let input = tempfile::tempdir().unwrap();

    for name in ["sky.exr", "sky.EXR"] {
        exr::prelude::write_rgb_file(input.path().join(name), 16, 8, |x, y| {
            (x as f32, y as f32, 1.0_f32)
        })
        .unwrap();
    }
    let config = BatchConfig::new(input.path()).set_web_output_dir(None);
    let report = run_batch(&config, &small_generator()).unwrap();

    assert_eq!(
        report,
        BatchReport {
            succeeded: 1,
            total:     1
        }
    );
    assert_eq!(file_names(&input.path().join("thumbnails")), ["sky.png"]);
}

#[test]
fn uncreatable_output_dir_is_fatal() {
    let scratch = tempfile::tempdir().unwrap();
    let blocker = scratch.path().join("file");
    std::fs::write(&blocker, b"").unwrap();

    let config = BatchConfig::new(scratch.path())
        .set_output_dir(blocker.join("thumbnails"))
        .set_web_output_dir(None);

    let result = run_batch(&config, &small_generator());

    assert!(matches!(result, Err(BatchErrors::CreateOutputDir(_, _))));
}
