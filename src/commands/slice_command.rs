//! Sprite slicing command
//!
//! This module implements the command that cuts every object out of a
//! sprite sheet and writes it to the output directory.

use clap::ArgMatches;
use log::info;
use std::path::PathBuf;

use crate::api::SpriteSlicer;
use crate::commands::cli::{config_from_args, DEFAULT_OUTPUT_DIR};
use crate::commands::command_traits::Command;
use crate::errors::{SliceError, SliceResult};
use crate::utils::logger::Logger;

/// Command for slicing a sprite sheet into individual files
pub struct SliceCommand<'a> {
    /// Path to the input file
    input_file: PathBuf,
    /// Directory receiving the objects
    output_dir: PathBuf,
    /// Configured slicer
    slicer: SpriteSlicer,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> SliceCommand<'a> {
    /// Create a new slice command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger for recording operations
    ///
    /// # Returns
    /// A new SliceCommand instance or an error
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> SliceResult<Self> {
        let input_file = args.get_one::<String>("input")
            .ok_or_else(|| SliceError::GenericError("Missing input file".to_string()))?
            .into();

        let output_dir = args.get_one::<String>("output")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR));

        let slicer = SpriteSlicer::new(config_from_args(args)?)?;

        Ok(SliceCommand {
            input_file,
            output_dir,
            slicer,
            logger,
        })
    }
}

impl<'a> Command for SliceCommand<'a> {
    fn execute(&self) -> SliceResult<()> {
        info!("Slicing {} into {}", self.input_file.display(), self.output_dir.display());

        let report = self.slicer.slice(&self.input_file, &self.output_dir)?;

        let summary = format!("Wrote {} objects to {}", report.written.len(), self.output_dir.display());
        info!("{}", summary);
        self.logger.log(&summary)?;

        Ok(())
    }
}
