//! Brightness thresholding
//!
//! Converts an RGBA image into a foreground/background mask. A pixel is
//! foreground when the sum of its red, green and blue channels exceeds the
//! brightness threshold. Alpha never takes part in the decision.

use image::RgbaImage;
use log::debug;

/// Boolean foreground mask with the same dimensions as its source image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mask {
    width: u32,
    height: u32,
    data: Vec<bool>,
}

impl Mask {
    /// Create an all-background mask
    pub fn new(width: u32, height: u32) -> Self {
        Mask {
            width,
            height,
            data: vec![false; width as usize * height as usize],
        }
    }

    /// Mask width in pixels
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Mask height in pixels
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Whether the pixel at `(x, y)` is foreground
    ///
    /// Coordinates outside the mask read as background.
    pub fn get(&self, x: u32, y: u32) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        self.data[self.index(x, y)]
    }

    /// Set the pixel at `(x, y)`; out of range coordinates are ignored
    pub fn set(&mut self, x: u32, y: u32, value: bool) {
        if x < self.width && y < self.height {
            let idx = self.index(x, y);
            self.data[idx] = value;
        }
    }

    /// Mark every pixel of a half-open rectangle as foreground
    #[cfg(test)]
    pub(crate) fn fill_rect(&mut self, x: u32, y: u32, width: u32, height: u32) {
        for yy in y..y.saturating_add(height) {
            for xx in x..x.saturating_add(width) {
                self.set(xx, yy, true);
            }
        }
    }

    /// Number of foreground pixels
    pub fn count_foreground(&self) -> usize {
        self.data.iter().filter(|&&v| v).count()
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }
}

/// Threshold an image into a foreground mask
///
/// # Arguments
/// * `image` - The source RGBA image
/// * `brightness_threshold` - A pixel is foreground when `r + g + b` is
///   strictly greater than this value
///
/// # Returns
/// A mask with the same dimensions as the image
pub fn binarize(image: &RgbaImage, brightness_threshold: u32) -> Mask {
    let mut mask = Mask::new(image.width(), image.height());

    for (x, y, pixel) in image.enumerate_pixels() {
        let brightness = pixel[0] as u32 + pixel[1] as u32 + pixel[2] as u32;
        if brightness > brightness_threshold {
            mask.set(x, y, true);
        }
    }

    debug!("Binarized {}x{} image: {} foreground pixels",
           mask.width(), mask.height(), mask.count_foreground());
    mask
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn test_threshold_is_strict() {
        let mut image = RgbaImage::new(3, 1);
        image.put_pixel(0, 0, Rgba([10, 10, 5, 255])); // sum 25
        image.put_pixel(1, 0, Rgba([10, 10, 6, 255])); // sum 26
        image.put_pixel(2, 0, Rgba([255, 255, 255, 0]));

        let mask = binarize(&image, 25);
        assert!(!mask.get(0, 0));
        assert!(mask.get(1, 0));
        assert!(mask.get(2, 0), "alpha must not influence the decision");
    }

    #[test]
    fn test_black_image_has_no_foreground() {
        let image = RgbaImage::from_pixel(100, 200, Rgba([8, 8, 8, 255]));
        let mask = binarize(&image, 25);
        assert_eq!(mask.count_foreground(), 0);
        assert_eq!((mask.width(), mask.height()), (100, 200));
    }

    #[test]
    fn test_out_of_range_reads_background() {
        let mut mask = Mask::new(2, 2);
        mask.fill_rect(0, 0, 5, 5);
        assert_eq!(mask.count_foreground(), 4);
        assert!(!mask.get(2, 0));
        assert!(!mask.get(0, 2));
    }
}
