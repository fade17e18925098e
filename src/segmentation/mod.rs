//! Blob segmentation and ordering
//!
//! This module turns an RGBA image into an ordered list of foreground
//! regions: threshold, label connected components, drop small noise, then
//! cluster into rows and order top to bottom, left to right.

mod binarize;
mod labeler;
mod filter;
mod rows;

pub use binarize::{binarize, Mask};
pub use labeler::{label_regions, Region};
pub use filter::filter_regions;
pub use rows::{cluster_rows, order_regions, OrderedRegion};

use image::RgbaImage;
use log::info;

use crate::config::SlicerConfig;

/// Outcome of segmenting one image
#[derive(Debug, Clone, PartialEq)]
pub struct Segmentation {
    /// Connected components found before noise filtering
    pub blob_count: usize,
    /// Number of rows the surviving regions were clustered into
    pub row_count: usize,
    /// Surviving regions in reading order
    pub ordered: Vec<OrderedRegion>,
}

impl Segmentation {
    /// True when no region survived filtering
    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }
}

/// Run threshold, labeling, filtering and ordering on an image
///
/// # Arguments
/// * `image` - The source image
/// * `config` - Thresholds to apply
///
/// # Returns
/// The ordered regions plus diagnostic counts
pub fn segment(image: &RgbaImage, config: &SlicerConfig) -> Segmentation {
    let mask = binarize(image, config.brightness_threshold);

    info!("Labeling connected components...");
    let regions = label_regions(&mask);
    let blob_count = regions.len();
    info!("Found {} blobs.", blob_count);

    let valid = filter_regions(regions, config.min_area);
    let ordered = order_regions(valid, config.row_gap);
    let row_count = ordered.last().map(|o| o.row + 1).unwrap_or(0);

    Segmentation {
        blob_count,
        row_count,
        ordered,
    }
}
