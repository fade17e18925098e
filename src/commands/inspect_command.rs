//! Layout inspection command
//!
//! Runs segmentation only and prints the reading order, row assignment
//! and geometry of every object, together with the name it would get.

use clap::ArgMatches;
use log::info;
use std::fmt::Write as _;
use std::path::PathBuf;

use crate::api::SpriteSlicer;
use crate::commands::cli::config_from_args;
use crate::commands::command_traits::Command;
use crate::config::SlicerConfig;
use crate::errors::{SliceError, SliceResult};
use crate::extractor::object_name;
use crate::segmentation::Segmentation;
use crate::utils::logger::Logger;

/// Command for printing the detected layout without writing images
pub struct InspectCommand<'a> {
    /// Path to the input file
    input_file: PathBuf,
    /// Configured slicer
    slicer: SpriteSlicer,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> InspectCommand<'a> {
    /// Create a new inspect command
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> SliceResult<Self> {
        let input_file = args.get_one::<String>("input")
            .ok_or_else(|| SliceError::GenericError("Missing input file".to_string()))?
            .into();

        let slicer = SpriteSlicer::new(config_from_args(args)?)?;

        Ok(InspectCommand {
            input_file,
            slicer,
            logger,
        })
    }
}

/// Render a segmentation as a human readable table
pub fn format_layout(layout: &Segmentation, config: &SlicerConfig) -> String {
    let mut result = String::from("Layout:\n");
    let _ = writeln!(result, "  Blobs found: {}", layout.blob_count);
    let _ = writeln!(result, "  Valid objects: {}", layout.ordered.len());
    let _ = writeln!(result, "  Rows: {}", layout.row_count);

    for (i, ordered) in layout.ordered.iter().enumerate() {
        let region = &ordered.region;
        let center = region.center();
        let _ = writeln!(
            result,
            "  #{:<3} row {:<2} {:<20} {} center=({:.1}, {:.1}) area={}",
            i,
            ordered.row,
            object_name(i, &config.names, &config.fallback_prefix),
            region.bbox,
            center.x,
            center.y,
            region.area(),
        );
    }

    result
}

impl<'a> Command for InspectCommand<'a> {
    fn execute(&self) -> SliceResult<()> {
        info!("Inspecting {}", self.input_file.display());

        let layout = self.slicer.inspect(&self.input_file)?;
        let report = format_layout(&layout, self.slicer.config());

        println!("{}", report);
        self.logger.log(&report)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coordinate::PixelBox;
    use crate::segmentation::{OrderedRegion, Region};

    #[test]
    fn test_format_layout_lists_names_in_order() {
        let layout = Segmentation {
            blob_count: 5,
            row_count: 2,
            ordered: vec![
                OrderedRegion { region: Region::new(0, PixelBox::new(0, 40, 0, 50)), row: 0 },
                OrderedRegion { region: Region::new(1, PixelBox::new(200, 240, 0, 50)), row: 1 },
            ],
        };
        let config = SlicerConfig {
            names: vec!["only".to_string()],
            ..SlicerConfig::default()
        };

        let text = format_layout(&layout, &config);
        assert!(text.contains("Blobs found: 5"));
        assert!(text.contains("Valid objects: 2"));
        assert!(text.contains("Rows: 2"));
        let only = text.find("only").unwrap();
        let extra = text.find("extra_1").unwrap();
        assert!(only < extra);
        assert!(text.contains("area=2000"));
    }
}
