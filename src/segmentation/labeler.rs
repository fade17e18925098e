//! Connected component labeling
//!
//! Two-pass labeling with a union-find table over provisional labels.
//! Adjacency is 4-connected: a pixel touches the pixels directly above,
//! below, left and right of it, never its diagonals.
//!
//! Components are numbered in raster order of their first pixel
//! (top to bottom, then left to right), which gives later stable sorts a
//! deterministic encounter order.

use std::cmp::Ordering;

use log::debug;

use crate::coordinate::{PixelBox, Point};
use super::binarize::Mask;

/// One connected foreground component
///
/// `area` and `center` are derived from the bounding box, not from the
/// pixel count. Holes and irregular outlines count as if the component
/// filled its box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Region {
    /// Zero-based component number in raster order of first pixel
    pub label: usize,
    /// Tight half-open bounding box
    pub bbox: PixelBox,
}

impl Region {
    /// Create a region from a label and bounding box
    pub fn new(label: usize, bbox: PixelBox) -> Self {
        Region { label, bbox }
    }

    /// Bounding box area in square pixels
    pub fn area(&self) -> u64 {
        self.bbox.area()
    }

    /// Midpoint of the bounding box on both axes
    pub fn center(&self) -> Point {
        self.bbox.center()
    }
}

/// Label slot value for background pixels
const UNLABELED: u32 = 0;

/// Union-find table over provisional labels
struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<usize>,
}

impl UnionFind {
    fn new() -> Self {
        Self {
            parent: Vec::new(),
            rank: Vec::new(),
        }
    }

    fn make_set(&mut self) -> usize {
        let id = self.parent.len();
        self.parent.push(id);
        self.rank.push(0);
        id
    }

    fn len(&self) -> usize {
        self.parent.len()
    }

    fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        // Path compression
        let mut node = x;
        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }
        root
    }

    fn union(&mut self, x: usize, y: usize) {
        let px = self.find(x);
        let py = self.find(y);

        if px == py {
            return;
        }

        match self.rank[px].cmp(&self.rank[py]) {
            Ordering::Less => self.parent[px] = py,
            Ordering::Greater => self.parent[py] = px,
            Ordering::Equal => {
                self.parent[py] = px;
                self.rank[px] += 1;
            }
        }
    }
}

/// Find the connected foreground components of a mask
///
/// # Arguments
/// * `mask` - The foreground mask
///
/// # Returns
/// One region per component, ordered by the raster position of the
/// component's first pixel
pub fn label_regions(mask: &Mask) -> Vec<Region> {
    let width = mask.width() as usize;
    let height = mask.height() as usize;
    if width == 0 || height == 0 {
        return Vec::new();
    }

    // First pass: provisional labels and equivalences. A label slot holds
    // the provisional id plus one; zero marks background.
    let mut labels: Vec<u32> = vec![UNLABELED; width * height];
    let mut sets = UnionFind::new();

    for y in 0..height {
        for x in 0..width {
            if !mask.get(x as u32, y as u32) {
                continue;
            }

            let idx = y * width + x;
            let left = if x > 0 { labels[idx - 1] } else { UNLABELED };
            let up = if y > 0 { labels[idx - width] } else { UNLABELED };

            labels[idx] = match (left, up) {
                (UNLABELED, UNLABELED) => sets.make_set() as u32 + 1,
                (l, UNLABELED) => l,
                (UNLABELED, u) => u,
                (l, u) => {
                    sets.union(l as usize - 1, u as usize - 1);
                    l.min(u)
                }
            };
        }
    }

    // Compact roots into final labels. Provisional labels were created in
    // raster order, so the first time a root is seen here belongs to the
    // component's first pixel.
    let mut final_label: Vec<Option<usize>> = vec![None; sets.len()];
    let mut root_to_final: Vec<Option<usize>> = vec![None; sets.len()];
    let mut component_count = 0;
    for provisional in 0..sets.len() {
        let root = sets.find(provisional);
        let id = match root_to_final[root] {
            Some(id) => id,
            None => {
                root_to_final[root] = Some(component_count);
                component_count += 1;
                component_count - 1
            }
        };
        final_label[provisional] = Some(id);
    }

    // Second pass: bounding boxes
    let mut boxes: Vec<Option<PixelBox>> = vec![None; component_count];
    for y in 0..height {
        for x in 0..width {
            let slot = labels[y * width + x];
            if slot == UNLABELED {
                continue;
            }
            let Some(id) = final_label[slot as usize - 1] else {
                continue;
            };

            boxes[id] = Some(match boxes[id] {
                Some(mut bbox) => {
                    bbox.include(x as u32, y as u32);
                    bbox
                }
                None => PixelBox::from_pixel(x as u32, y as u32),
            });
        }
    }

    let regions: Vec<Region> = boxes
        .into_iter()
        .enumerate()
        .filter_map(|(label, bbox)| bbox.filter(|b| !b.is_empty()).map(|b| Region::new(label, b)))
        .collect();

    debug!("Labeled {} connected components", regions.len());
    regions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_mask_has_no_regions() {
        let mask = Mask::new(100, 200);
        assert!(label_regions(&mask).is_empty());
    }

    #[test]
    fn test_single_rectangle_bbox() {
        let mut mask = Mask::new(64, 48);
        mask.fill_rect(10, 5, 20, 30);

        let regions = label_regions(&mask);
        assert_eq!(regions.len(), 1);
        assert_eq!(regions[0].bbox, PixelBox::new(5, 35, 10, 30));
        assert_eq!(regions[0].area(), 600);
        assert_eq!(regions[0].center(), Point::new(20.0, 20.0));
    }

    #[test]
    fn test_diagonal_pixels_are_separate_components() {
        let mut mask = Mask::new(4, 4);
        mask.set(0, 0, true);
        mask.set(1, 1, true);

        let regions = label_regions(&mask);
        assert_eq!(regions.len(), 2);
    }

    #[test]
    fn test_u_shape_merges_into_one_component() {
        // Two vertical arms joined at the bottom; the arms receive distinct
        // provisional labels that must be merged.
        let mut mask = Mask::new(10, 10);
        mask.fill_rect(1, 1, 2, 7);
        mask.fill_rect(7, 1, 2, 7);
        mask.fill_rect(1, 7, 8, 2);

        let regions = label_regions(&mask);
        assert_eq!(regions.len(), 1);
        assert_eq!(regions[0].bbox, PixelBox::new(1, 9, 1, 9));
        // Bounding box area, not pixel count
        assert_eq!(regions[0].area(), 64);
    }

    #[test]
    fn test_labels_follow_first_pixel_raster_order() {
        let mut mask = Mask::new(20, 20);
        mask.fill_rect(12, 2, 3, 3); // first pixel at row 2
        mask.fill_rect(1, 8, 3, 3); // first pixel at row 8
        mask.fill_rect(5, 1, 2, 10); // first pixel at row 1

        let regions = label_regions(&mask);
        assert_eq!(regions.len(), 3);
        assert_eq!(regions[0].bbox.col_start, 5);
        assert_eq!(regions[1].bbox.col_start, 12);
        assert_eq!(regions[2].bbox.col_start, 1);
        assert!(regions.iter().enumerate().all(|(i, r)| r.label == i));
    }

    #[test]
    fn test_many_small_components() {
        // Isolated pixels on a 3-pixel grid: every one is its own component
        let mut mask = Mask::new(600, 400);
        for y in (0..400).step_by(3) {
            for x in (0..600).step_by(3) {
                mask.set(x, y, true);
            }
        }

        let regions = label_regions(&mask);
        assert_eq!(regions.len(), 200 * 134);
        assert!(regions.iter().all(|r| r.area() == 1));
        assert_eq!(regions[0].bbox, PixelBox::from_pixel(0, 0));
        assert_eq!(regions[200].bbox, PixelBox::from_pixel(0, 3));
    }

    #[test]
    fn test_staircase_merges_late() {
        // Each step only touches the previous one from below, so the
        // component collects one provisional label per row before merging
        let mut mask = Mask::new(40, 40);
        for i in 0..20 {
            mask.fill_rect(39 - 2 * i - 1, i, 2, 1);
            mask.fill_rect(39 - 2 * i - 1, i + 1, 1, 1);
        }

        let regions = label_regions(&mask);
        assert_eq!(regions.len(), 1);
        assert_eq!(regions[0].label, 0);
    }

    #[test]
    fn test_components_touching_image_border() {
        let mut mask = Mask::new(5, 5);
        mask.fill_rect(0, 0, 5, 1);
        mask.fill_rect(4, 0, 1, 5);

        let regions = label_regions(&mask);
        assert_eq!(regions.len(), 1);
        assert_eq!(regions[0].bbox, PixelBox::new(0, 5, 0, 5));
    }
}
