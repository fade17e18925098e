//! Cropping and background removal
//!
//! Each ordered region is cropped out of the source image and every dark
//! pixel in the crop is replaced by a fully transparent one.

use image::{imageops, Rgba, RgbaImage};
use log::debug;

use crate::coordinate::PixelBox;
use crate::segmentation::OrderedRegion;

/// Replacement for background pixels
const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// A cropped, background-free object ready for export
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedObject {
    /// Position in reading order
    pub index: usize,
    /// Row the object was clustered into
    pub row: usize,
    /// Source bounding box
    pub bbox: PixelBox,
    /// Cropped pixels with the background cleared
    pub image: RgbaImage,
}

/// Copy the pixels covered by a box into a new image
///
/// The box is half-open, so the result is `bbox.width() x bbox.height()`.
pub fn crop_region(image: &RgbaImage, bbox: &PixelBox) -> RgbaImage {
    imageops::crop_imm(image, bbox.col_start, bbox.row_start, bbox.width(), bbox.height()).to_image()
}

/// Whether a pixel counts as dark background
///
/// All three color channels must be strictly below the threshold; alpha is
/// not consulted.
pub fn is_background(pixel: &Rgba<u8>, threshold: u8) -> bool {
    pixel[0] < threshold && pixel[1] < threshold && pixel[2] < threshold
}

/// Return a copy of `image` with dark pixels made fully transparent
///
/// Other pixels pass through unchanged. Applying this twice gives the same
/// result as applying it once.
pub fn clear_background(image: &RgbaImage, threshold: u8) -> RgbaImage {
    let mut cleared = image.clone();
    for pixel in cleared.pixels_mut() {
        if is_background(pixel, threshold) {
            *pixel = TRANSPARENT;
        }
    }
    cleared
}

/// Crop one ordered region and clear its background
pub fn extract_object(image: &RgbaImage, index: usize, ordered: &OrderedRegion, threshold: u8) -> ExtractedObject {
    let bbox = ordered.region.bbox;
    let crop = crop_region(image, &bbox);
    debug!("Extracted object #{} ({}x{}) from {}", index, crop.width(), crop.height(), bbox);

    ExtractedObject {
        index,
        row: ordered.row,
        bbox,
        image: clear_background(&crop, threshold),
    }
}

/// Extract every ordered region, keeping the order
pub fn extract_objects(image: &RgbaImage, ordered: &[OrderedRegion], threshold: u8) -> Vec<ExtractedObject> {
    ordered.iter()
        .enumerate()
        .map(|(index, region)| extract_object(image, index, region, threshold))
        .collect()
}
