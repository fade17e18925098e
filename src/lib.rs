pub mod errors;
pub mod config;
pub mod coordinate;
pub mod segmentation;
pub mod extractor;
pub mod utils;
pub mod commands;
pub mod api;

pub use crate::api::SpriteSlicer;

pub use config::{OutputFormat, SlicerConfig};
pub use coordinate::{PixelBox, Point};
pub use errors::{SliceError, SliceResult};
pub use extractor::{ExportReport, ExtractedObject};
pub use segmentation::{OrderedRegion, Region, Segmentation};
