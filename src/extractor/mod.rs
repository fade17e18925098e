//! Object extraction and export
//!
//! Crops ordered regions out of the source image, clears their dark
//! background and writes them out under their assigned names.

mod object_extractor;
mod exporter;

// Public exports
pub use object_extractor::{
    clear_background, crop_region, extract_object, extract_objects, is_background, ExtractedObject,
};
pub use exporter::{ensure_output_dir, export_objects, object_name, write_object, ExportReport};
