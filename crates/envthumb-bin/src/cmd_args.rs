/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::PathBuf;

use clap::{value_parser, Arg, ArgAction, Command};

/// Where secondary copies go when `--web-output` is not given
pub const DEFAULT_WEB_OUTPUT: &str = "web/public/environments/thumbnails";

#[rustfmt::skip]
pub fn create_cmd_args() -> Command {
    Command::new("envthumb")
        .about("Generate PNG thumbnails for HDR environment maps")
        .arg(Arg::new("in")
            .short('i')
            .long("input")
            .help("Directory containing the environment maps")
            .value_parser(value_parser!(PathBuf))
            .default_value("environments"))
        .arg(Arg::new("out")
            .short('o')
            .long("output")
            .help("Directory thumbnails are written to [default: <input>/thumbnails]")
            .value_parser(value_parser!(PathBuf)))
        .arg(Arg::new("web-output")
            .long("web-output")
            .help("Secondary directory receiving <name>_thumb.png copies")
            .long_help("Secondary directory receiving <name>_thumb.png copies.\nIt is only used when its parent directory already exists.")
            .value_parser(value_parser!(PathBuf))
            .default_value(DEFAULT_WEB_OUTPUT)
            .conflicts_with("no-web-output"))
        .arg(Arg::new("no-web-output")
            .long("no-web-output")
            .action(ArgAction::SetTrue)
            .help("Do not copy thumbnails into a secondary directory"))
        .arg(Arg::new("extension")
            .long("extension")
            .help("Extension of input files, matched exactly")
            .default_value("exr"))
        .arg(Arg::new("probe")
            .long("probe")
            .action(ArgAction::SetTrue)
            .help("Print metadata of every input file as json and exit"))
        .arg(Arg::new("width")
            .long("width")
            .help_heading("THUMBNAIL")
            .help("Thumbnail width")
            .value_parser(value_parser!(usize))
            .default_value("400"))
        .arg(Arg::new("height")
            .long("height")
            .help_heading("THUMBNAIL")
            .help("Thumbnail height")
            .value_parser(value_parser!(usize))
            .default_value("225"))
        .arg(Arg::new("low-percentile")
            .long("low-percentile")
            .help_heading("THUMBNAIL")
            .help("Samples below this percentile become black")
            .value_parser(value_parser!(f32))
            .default_value("1.0"))
        .arg(Arg::new("high-percentile")
            .long("high-percentile")
            .help_heading("THUMBNAIL")
            .help("Samples above this percentile become white")
            .value_parser(value_parser!(f32))
            .default_value("99.0"))
        .arg(Arg::new("gamma")
            .long("gamma")
            .help_heading("THUMBNAIL")
            .help("Display gamma, samples are raised to 1/gamma")
            .value_parser(value_parser!(f32))
            .default_value("2.2"))
        .arg(Arg::new("debug")
            .long("debug")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display debug information and higher"))
        .arg(Arg::new("trace")
            .long("trace")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display very verbose information"))
        .arg(Arg::new("warn")
            .long("warn")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display warnings and errors"))
        .arg(Arg::new("info")
            .long("info")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display information about the files being processed"))
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use crate::cmd_args::create_cmd_args;

    #[test]
    fn command_is_consistent() {
        create_cmd_args().debug_assert();
    }

    #[test]
    fn defaults() {
        let matches = create_cmd_args().get_matches_from(["envthumb"]);

        assert_eq!(
            matches.get_one::<PathBuf>("in"),
            Some(&PathBuf::from("environments"))
        );
        assert_eq!(matches.get_one::<usize>("width"), Some(&400));
        assert_eq!(matches.get_one::<String>("extension").map(String::as_str), Some("exr"));
        assert!(matches.get_one::<PathBuf>("out").is_none());
    }

    #[test]
    fn web_output_conflicts() {
        let result = create_cmd_args().try_get_matches_from([
            "envthumb",
            "--web-output",
            "a",
            "--no-web-output"
        ]);
        assert!(result.is_err());
    }
}
