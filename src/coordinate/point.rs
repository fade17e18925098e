//! Point structure for representing pixel-space centers

/// A point in image space, measured in pixels
///
/// Centers of half-open boxes fall on half-pixel positions, so the
/// coordinates are kept as floating point values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// X coordinate (column axis)
    pub x: f64,
    /// Y coordinate (row axis)
    pub y: f64,
}

impl Point {
    /// Create a new point
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    /// Absolute vertical distance to another point
    pub fn vertical_gap(&self, other: &Point) -> f64 {
        (self.y - other.y).abs()
    }
}
