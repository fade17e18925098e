//! Traits shared by the slice and inspect commands

use crate::utils::logger::Logger;
use crate::errors::SliceResult;

/// One run of the binary: slicing a sheet to disk or printing its layout
pub trait Command {
    /// Run against the configured input
    ///
    /// Fatal conditions (unreadable input, output directory, failed
    /// writes) come back as errors; an empty sheet is a successful run.
    fn execute(&self) -> SliceResult<()>;
}

/// Picks and builds the command matching the parsed flags
pub trait CommandFactory<'a> {
    /// Build the command for `args`
    ///
    /// # Arguments
    /// * `args` - Parsed flags from [`build_cli`](crate::commands::build_cli)
    /// * `logger` - Receives the run summary or layout report
    ///
    /// # Returns
    /// The command, or a configuration error from the flags
    fn create_command(&self, args: &clap::ArgMatches, logger: &'a Logger) -> SliceResult<Box<dyn Command + 'a>>;
}
