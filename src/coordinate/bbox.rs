//! Bounding box structure for labeled regions

use std::fmt;

use super::point::Point;

/// An axis-aligned box in pixel coordinates
///
/// Both intervals are half-open: a box covering the single pixel at
/// `(x, y)` has `col_start = x`, `col_stop = x + 1`, and likewise for rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelBox {
    /// First row covered by the box
    pub row_start: u32,
    /// One past the last row covered by the box
    pub row_stop: u32,
    /// First column covered by the box
    pub col_start: u32,
    /// One past the last column covered by the box
    pub col_stop: u32,
}

impl PixelBox {
    /// Create a new box from half-open row and column intervals
    pub fn new(row_start: u32, row_stop: u32, col_start: u32, col_stop: u32) -> Self {
        PixelBox {
            row_start,
            row_stop,
            col_start,
            col_stop,
        }
    }

    /// Create a box covering exactly one pixel
    pub fn from_pixel(x: u32, y: u32) -> Self {
        PixelBox::new(y, y + 1, x, x + 1)
    }

    /// Grow the box so that it also covers the pixel at `(x, y)`
    pub fn include(&mut self, x: u32, y: u32) {
        self.row_start = self.row_start.min(y);
        self.row_stop = self.row_stop.max(y + 1);
        self.col_start = self.col_start.min(x);
        self.col_stop = self.col_stop.max(x + 1);
    }

    /// Get the width of the box (`col_stop - col_start`)
    pub fn width(&self) -> u32 {
        self.col_stop.saturating_sub(self.col_start)
    }

    /// Get the height of the box (`row_stop - row_start`)
    pub fn height(&self) -> u32 {
        self.row_stop.saturating_sub(self.row_start)
    }

    /// Box area in square pixels
    pub fn area(&self) -> u64 {
        self.width() as u64 * self.height() as u64
    }

    /// True when the box covers no pixel at all
    pub fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    /// Get the center point of the box
    pub fn center(&self) -> Point {
        Point::new(
            (self.col_start as f64 + self.col_stop as f64) / 2.0,
            (self.row_start as f64 + self.row_stop as f64) / 2.0,
        )
    }
}

impl fmt::Display for PixelBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rows {}..{}, cols {}..{}",
               self.row_start, self.row_stop, self.col_start, self.col_stop)
    }
}
