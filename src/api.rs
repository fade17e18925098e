use std::path::Path;

use image::{ImageReader, RgbaImage};
use log::info;

use crate::config::SlicerConfig;
use crate::errors::{SliceError, SliceResult};
use crate::extractor::{self, ExportReport, ExtractedObject};
use crate::segmentation::{self, Segmentation};

/// Main interface to the SpriteSlicer library
///
/// Holds the configuration for a run; every call is independent and keeps
/// no state between invocations.
pub struct SpriteSlicer {
    config: SlicerConfig,
}

impl SpriteSlicer {
    /// Create a new SpriteSlicer with a validated configuration
    pub fn new(config: SlicerConfig) -> SliceResult<Self> {
        config.validate()?;
        Ok(SpriteSlicer { config })
    }

    /// The configuration this slicer runs with
    pub fn config(&self) -> &SlicerConfig {
        &self.config
    }

    /// Decode an image file into RGBA pixels
    ///
    /// # Arguments
    /// * `input_path` - Path to the sprite sheet
    ///
    /// # Returns
    /// The decoded image, or `InputError` if the file is missing or not a
    /// decodable image
    pub fn load_image<P: AsRef<Path>>(&self, input_path: P) -> SliceResult<RgbaImage> {
        let input_path = input_path.as_ref();
        if !input_path.is_file() {
            return Err(SliceError::InputError(input_path.to_path_buf(), "file not found".to_string()));
        }

        // Decoder is picked from the file contents, not the extension
        let input_error = |msg: String| SliceError::InputError(input_path.to_path_buf(), msg);
        let image = ImageReader::open(input_path)
            .and_then(|reader| reader.with_guessed_format())
            .map_err(|e| input_error(e.to_string()))?
            .decode()
            .map_err(|e| input_error(e.to_string()))?;
        info!("Loaded {} ({}x{})", input_path.display(), image.width(), image.height());
        Ok(image.to_rgba8())
    }

    /// Segment an in-memory image without writing anything
    pub fn segment(&self, image: &RgbaImage) -> Segmentation {
        segmentation::segment(image, &self.config)
    }

    /// Segment an image and crop every surviving object
    pub fn extract(&self, image: &RgbaImage) -> Vec<ExtractedObject> {
        let layout = self.segment(image);
        extractor::extract_objects(image, &layout.ordered, self.config.transparency_threshold)
    }

    /// Segment an image file and report the layout without writing files
    pub fn inspect<P: AsRef<Path>>(&self, input_path: P) -> SliceResult<Segmentation> {
        let image = self.load_image(input_path)?;
        Ok(self.segment(&image))
    }

    /// Slice an in-memory image into `output_dir`
    ///
    /// The directory is created up front. An image without any surviving
    /// object produces an empty report, not an error.
    pub fn slice_image<P: AsRef<Path>>(&self, image: &RgbaImage, output_dir: P) -> SliceResult<ExportReport> {
        let output_dir = output_dir.as_ref();
        extractor::ensure_output_dir(output_dir)?;

        let layout = self.segment(image);
        if layout.is_empty() {
            info!("No objects survived filtering, nothing to write");
            return Ok(ExportReport::default());
        }

        let objects = extractor::extract_objects(image, &layout.ordered, self.config.transparency_threshold);
        extractor::export_objects(&objects, output_dir, &self.config)
    }

    /// Slice an image file into `output_dir`
    ///
    /// # Arguments
    /// * `input_path` - Path to the sprite sheet
    /// * `output_dir` - Directory receiving one file per object
    ///
    /// # Returns
    /// The list of written files, or the first fatal error
    pub fn slice<P: AsRef<Path>, Q: AsRef<Path>>(&self, input_path: P, output_dir: Q) -> SliceResult<ExportReport> {
        let image = self.load_image(input_path)?;
        self.slice_image(&image, output_dir)
    }
}
