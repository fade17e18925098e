//! Row clustering and reading order
//!
//! Regions are sorted by vertical center and walked in that order. A new
//! row starts whenever the vertical gap to the immediately preceding region
//! exceeds the row gap. The comparison is against the predecessor only, not
//! against a row centroid, so a row can drift downwards across a chain of
//! small steps. Rows are then sorted left to right by horizontal center and
//! concatenated top to bottom.
//!
//! All sorts are stable, so equal keys keep their labeling order.

use log::info;

use crate::coordinate::Point;
use super::labeler::Region;

/// A region together with the row it was assigned to
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrderedRegion {
    /// The region itself
    pub region: Region,
    /// Zero-based row index, counted from the top
    pub row: usize,
}

/// Partition regions into rows by vertical proximity
///
/// # Arguments
/// * `regions` - Regions in any order
/// * `row_gap` - Largest vertical center gap that keeps two consecutive
///   regions in the same row
///
/// # Returns
/// Rows from top to bottom, each sorted left to right. Empty input yields
/// no rows.
pub fn cluster_rows(mut regions: Vec<Region>, row_gap: f64) -> Vec<Vec<Region>> {
    regions.sort_by(|a, b| a.center().y.total_cmp(&b.center().y));

    let mut rows: Vec<Vec<Region>> = Vec::new();
    let mut current: Vec<Region> = Vec::new();
    let mut last_center: Option<Point> = None;

    for region in regions {
        let center = region.center();
        if let Some(prev) = last_center {
            if center.vertical_gap(&prev) > row_gap {
                rows.push(std::mem::take(&mut current));
            }
        }
        current.push(region);
        last_center = Some(center);
    }
    if !current.is_empty() {
        rows.push(current);
    }

    for row in rows.iter_mut() {
        row.sort_by(|a, b| a.center().x.total_cmp(&b.center().x));
    }

    rows
}

/// Produce the final reading order of a set of regions
///
/// Rows from [`cluster_rows`] are flattened in order, each region tagged
/// with its row index.
pub fn order_regions(regions: Vec<Region>, row_gap: f64) -> Vec<OrderedRegion> {
    let rows = cluster_rows(regions, row_gap);
    info!("Detailed sorting: Found {} rows.", rows.len());

    rows.into_iter()
        .enumerate()
        .flat_map(|(row, members)| {
            members.into_iter().map(move |region| OrderedRegion { region, row })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coordinate::PixelBox;

    /// A 10x10 region centered at (cx, cy)
    fn region_at(label: usize, cx: u32, cy: u32) -> Region {
        Region::new(label, PixelBox::new(cy - 5, cy + 5, cx - 5, cx + 5))
    }

    fn labels(ordered: &[OrderedRegion]) -> Vec<usize> {
        ordered.iter().map(|o| o.region.label).collect()
    }

    #[test]
    fn test_empty_input_yields_no_rows() {
        assert!(cluster_rows(Vec::new(), 50.0).is_empty());
        assert!(order_regions(Vec::new(), 50.0).is_empty());
    }

    #[test]
    fn test_single_region_single_row() {
        let ordered = order_regions(vec![region_at(0, 100, 100)], 50.0);
        assert_eq!(ordered.len(), 1);
        assert_eq!(ordered[0].row, 0);
    }

    #[test]
    fn test_gap_boundary() {
        // Gap of exactly 50 stays together
        let rows = cluster_rows(vec![region_at(0, 100, 100), region_at(1, 20, 150)], 50.0);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0][0].label, 1, "row must be sorted by x");

        // Gap of 51 splits
        let rows = cluster_rows(vec![region_at(0, 100, 100), region_at(1, 20, 151)], 50.0);
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn test_rows_drift_through_small_steps() {
        // Each step is 40, total spread 120, still a single row
        let regions = vec![
            region_at(0, 400, 100),
            region_at(1, 300, 140),
            region_at(2, 200, 180),
            region_at(3, 100, 220),
        ];
        let ordered = order_regions(regions, 50.0);
        assert!(ordered.iter().all(|o| o.row == 0));
        assert_eq!(labels(&ordered), vec![3, 2, 1, 0]);
    }

    #[test]
    fn test_two_rows_ordered_top_then_left() {
        let regions = vec![
            region_at(0, 300, 400),
            region_at(1, 500, 100),
            region_at(2, 100, 410),
            region_at(3, 200, 95),
        ];
        let ordered = order_regions(regions, 50.0);
        assert_eq!(labels(&ordered), vec![3, 1, 2, 0]);
        let rows: Vec<usize> = ordered.iter().map(|o| o.row).collect();
        assert_eq!(rows, vec![0, 0, 1, 1]);
    }

    #[test]
    fn test_equal_keys_keep_encounter_order() {
        let regions = vec![region_at(4, 100, 100), region_at(2, 100, 100)];
        let ordered = order_regions(regions, 50.0);
        assert_eq!(labels(&ordered), vec![4, 2]);
    }
}
