//! Noise suppression by bounding box area

use log::info;

use super::labeler::Region;

/// Keep only regions whose bounding box area is strictly greater than `min_area`
///
/// The relative order of surviving regions is preserved.
pub fn filter_regions(regions: Vec<Region>, min_area: u64) -> Vec<Region> {
    let total = regions.len();
    let kept: Vec<Region> = regions
        .into_iter()
        .filter(|region| region.area() > min_area)
        .collect();

    info!("Found {} valid objects > {}px (of {} blobs)", kept.len(), min_area, total);
    kept
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coordinate::PixelBox;

    fn region_with_area(label: usize, width: u32, height: u32) -> Region {
        Region::new(label, PixelBox::new(0, height, 0, width))
    }

    #[test]
    fn test_boundary_is_exclusive() {
        let regions = vec![
            region_with_area(0, 40, 25),  // 1000
            region_with_area(1, 1001, 1), // 1001
            region_with_area(2, 1, 1),
        ];

        let kept = filter_regions(regions, 1000);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].label, 1);
    }

    #[test]
    fn test_order_is_preserved() {
        let regions = vec![
            region_with_area(0, 50, 50),
            region_with_area(1, 2, 2),
            region_with_area(2, 60, 60),
        ];

        let labels: Vec<usize> = filter_regions(regions, 1000).iter().map(|r| r.label).collect();
        assert_eq!(labels, vec![0, 2]);
    }
}
