//! CLI command implementations
//!
//! This module contains implementations of various commands
//! supported by the CLI application using the Command pattern.

pub mod cli;
pub mod command_traits;
pub mod slice_command;
pub mod inspect_command;

pub use cli::{build_cli, config_from_args};
pub use command_traits::{Command, CommandFactory};
pub use slice_command::SliceCommand;
pub use inspect_command::InspectCommand;

use clap::ArgMatches;
use crate::utils::logger::Logger;
use crate::errors::SliceResult;

/// Factory for creating command instances based on CLI arguments
///
/// This factory examines the command-line arguments and creates
/// the appropriate command instance for execution.
pub struct SpriteslicerCommandFactory;

impl SpriteslicerCommandFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        SpriteslicerCommandFactory
    }
}

impl Default for SpriteslicerCommandFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> CommandFactory<'a> for SpriteslicerCommandFactory {
    fn create_command(&self, args: &ArgMatches, logger: &'a Logger) -> SliceResult<Box<dyn Command + 'a>> {
        if args.get_flag("inspect") {
            Ok(Box::new(InspectCommand::new(args, logger)?))
        } else {
            // Default to slicing
            Ok(Box::new(SliceCommand::new(args, logger)?))
        }
    }
}
