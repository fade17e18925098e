//! Pixel-space geometry
//!
//! This module provides the box and point types shared by the
//! segmentation and extraction stages.

mod bbox;
mod point;

// Re-export key types
pub use self::bbox::PixelBox;
pub use self::point::Point;
