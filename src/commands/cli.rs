//! Command line definition and argument-to-config mapping

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command as ClapCommand};
use log::info;

use crate::config::{names, OutputFormat, SlicerConfig};
use crate::errors::SliceResult;

/// Default directory receiving the extracted objects
pub const DEFAULT_OUTPUT_DIR: &str = "sliced";

/// Build the clap command for the `spriteslicer` binary
pub fn build_cli() -> ClapCommand {
    ClapCommand::new("SpriteSlicer")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Slice a sprite sheet on a dark background into named transparent images")
        .arg(
            Arg::new("input")
                .help("Input sprite sheet")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .help("Directory for the extracted objects")
                .value_name("DIR")
                .default_value(DEFAULT_OUTPUT_DIR),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help("TOML file with thresholds, names and output options")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("brightness")
                .long("brightness")
                .help("Foreground when r+g+b exceeds this value")
                .value_name("SUM")
                .value_parser(value_parser!(u32).range(0..=765))
                .required(false),
        )
        .arg(
            Arg::new("min-area")
                .long("min-area")
                .help("Drop regions whose bounding box area is not above this")
                .value_name("PIXELS")
                .value_parser(value_parser!(u64))
                .required(false),
        )
        .arg(
            Arg::new("row-gap")
                .long("row-gap")
                .help("Vertical center gap that starts a new row")
                .value_name("PIXELS")
                .value_parser(value_parser!(f64))
                .required(false),
        )
        .arg(
            Arg::new("transparency")
                .long("transparency")
                .help("Pixels with r, g and b all below this become transparent")
                .value_name("LEVEL")
                .value_parser(value_parser!(u8))
                .required(false),
        )
        .arg(
            Arg::new("names")
                .long("names")
                .help("Comma-separated output names in reading order")
                .value_name("LIST")
                .required(false),
        )
        .arg(
            Arg::new("prefix")
                .long("prefix")
                .help("Name prefix for objects beyond the name list")
                .value_name("PREFIX")
                .required(false),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .help("Output format (png, webp, tiff)")
                .value_name("FORMAT")
                .required(false),
        )
        .arg(
            Arg::new("keep-going")
                .long("keep-going")
                .help("Keep writing remaining objects after a failed write")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("inspect")
                .short('i')
                .long("inspect")
                .help("Print the detected layout without writing files")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .help("Write log output to this file")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
}

/// Build the run configuration from parsed arguments
///
/// Starts from the config file if one is given, otherwise from the
/// defaults, then applies any flags on top.
pub fn config_from_args(args: &ArgMatches) -> SliceResult<SlicerConfig> {
    let mut config = match args.get_one::<String>("config") {
        Some(path) => SlicerConfig::from_file(path)?,
        None => SlicerConfig::default(),
    };

    if let Some(&value) = args.get_one::<u32>("brightness") {
        config.brightness_threshold = value;
    }
    if let Some(&value) = args.get_one::<u64>("min-area") {
        config.min_area = value;
    }
    if let Some(&value) = args.get_one::<f64>("row-gap") {
        config.row_gap = value;
    }
    if let Some(&value) = args.get_one::<u8>("transparency") {
        config.transparency_threshold = value;
    }
    if let Some(list) = args.get_one::<String>("names") {
        config.names = names::parse_name_list(list)?;
    }
    if let Some(prefix) = args.get_one::<String>("prefix") {
        config.fallback_prefix = prefix.clone();
    }
    if let Some(format) = args.get_one::<String>("format") {
        config.output_format = OutputFormat::from_name(format)?;
    }
    if args.get_flag("keep-going") {
        config.continue_on_write_error = true;
    }

    config.validate()?;
    info!("Using configuration: {:?}", config);
    Ok(config)
}
