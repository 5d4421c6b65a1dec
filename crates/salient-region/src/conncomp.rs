//! Connected component analysis
//!
//! This module provides functions for finding and labeling connected
//! components in binary masks. Labeling is a two-pass raster scan over a
//! Union-Find (disjoint set) structure: the first pass assigns provisional
//! labels and records equivalences, the second pass resolves roots into
//! compact labels and accumulates pixel counts.
//!
//! Label identifiers carry no ordering guarantee; downstream consumers only
//! rely on the multiset of component areas.

use crate::error::{RegionError, RegionResult};
use salient_core::BinaryMask;

/// Connectivity type for component analysis
///
/// Invalid connectivity values are unrepresentable in this enum; untyped
/// configuration values go through [`Connectivity::from_raw`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Connectivity {
    /// 4-way connectivity (up, down, left, right)
    #[default]
    FourWay,
    /// 8-way connectivity (includes diagonals)
    EightWay,
}

impl Connectivity {
    /// Parse a raw connectivity value.
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::InvalidConnectivity`] for any value other
    /// than 4 or 8.
    pub fn from_raw(raw: u32) -> RegionResult<Self> {
        match raw {
            4 => Ok(Connectivity::FourWay),
            8 => Ok(Connectivity::EightWay),
            other => Err(RegionError::InvalidConnectivity(other)),
        }
    }

    /// Get the raw connectivity value (4 or 8).
    pub fn raw(self) -> u32 {
        match self {
            Connectivity::FourWay => 4,
            Connectivity::EightWay => 8,
        }
    }
}

/// A connected component in a binary mask
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConnectedComponent {
    /// Label of this component in the label map (1-based)
    pub label: u32,
    /// Number of foreground pixels in this component
    pub pixel_count: u32,
}

/// Per-pixel component labels for one mask
///
/// Background pixels carry label 0; foreground pixels carry the compact
/// label (1..=component_count) of their component.
#[derive(Debug, Clone)]
pub struct LabelMap {
    width: u32,
    height: u32,
    labels: Vec<u32>,
    component_count: u32,
}

impl LabelMap {
    /// Get the label map width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the label map height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the number of components (the maximum label).
    #[inline]
    pub fn component_count(&self) -> u32 {
        self.component_count
    }

    /// Get the label at (x, y), or `None` if out of bounds.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.labels[y as usize * self.width as usize + x as usize])
    }

    /// Get raw access to the label buffer.
    #[inline]
    pub fn labels(&self) -> &[u32] {
        &self.labels
    }
}

/// Union-Find over provisional labels, with path compression.
struct UnionFind {
    parent: Vec<u32>,
}

impl UnionFind {
    fn new() -> Self {
        // Index 0 is the background sentinel and never unioned.
        Self { parent: vec![0] }
    }

    fn make_set(&mut self) -> u32 {
        let label = self.parent.len() as u32;
        self.parent.push(label);
        label
    }

    fn find(&mut self, x: u32) -> u32 {
        let mut root = x;
        while self.parent[root as usize] != root {
            root = self.parent[root as usize];
        }
        let mut cur = x;
        while self.parent[cur as usize] != root {
            let next = self.parent[cur as usize];
            self.parent[cur as usize] = root;
            cur = next;
        }
        root
    }

    fn union(&mut self, a: u32, b: u32) {
        let ra = self.find(a);
        let rb = self.find(b);
        if ra != rb {
            let (lo, hi) = if ra < rb { (ra, rb) } else { (rb, ra) };
            self.parent[hi as usize] = lo;
        }
    }
}

/// Label all connected components in a binary mask
///
/// Returns a [`LabelMap`] of the same dimensions where each foreground
/// pixel carries the compact label of its component and background pixels
/// carry 0.
pub fn label_connected_components(mask: &BinaryMask, connectivity: Connectivity) -> LabelMap {
    let width = mask.width() as usize;
    let height = mask.height() as usize;
    let mut labels = vec![0u32; width * height];
    let mut uf = UnionFind::new();

    // Adopt the first labeled neighbor and merge the rest into it.
    fn adopt(neighbor: u32, uf: &mut UnionFind, adopted: &mut u32) {
        if neighbor == 0 {
            return;
        }
        if *adopted == 0 {
            *adopted = neighbor;
        } else {
            uf.union(*adopted, neighbor);
        }
    }

    // First pass: provisional labels from the already-scanned neighbors.
    for y in 0..height {
        for x in 0..width {
            if mask.row(y as u32)[x] != salient_core::FOREGROUND {
                continue;
            }
            let idx = y * width + x;

            let mut adopted = 0u32;
            if x > 0 {
                adopt(labels[idx - 1], &mut uf, &mut adopted);
            }
            if y > 0 {
                adopt(labels[idx - width], &mut uf, &mut adopted);
                if connectivity == Connectivity::EightWay {
                    if x > 0 {
                        adopt(labels[idx - width - 1], &mut uf, &mut adopted);
                    }
                    if x + 1 < width {
                        adopt(labels[idx - width + 1], &mut uf, &mut adopted);
                    }
                }
            }

            labels[idx] = if adopted == 0 { uf.make_set() } else { adopted };
        }
    }

    // Second pass: resolve equivalences into compact labels.
    let mut compact = vec![0u32; uf.parent.len()];
    let mut component_count = 0u32;
    for label in labels.iter_mut() {
        if *label == 0 {
            continue;
        }
        let root = uf.find(*label);
        if compact[root as usize] == 0 {
            component_count += 1;
            compact[root as usize] = component_count;
        }
        *label = compact[root as usize];
    }

    LabelMap {
        width: mask.width(),
        height: mask.height(),
        labels,
        component_count,
    }
}

/// Find all connected components in a binary mask
///
/// Returns one [`ConnectedComponent`] per foreground region with its pixel
/// count. The background is never reported.
pub fn find_connected_components(
    mask: &BinaryMask,
    connectivity: Connectivity,
) -> Vec<ConnectedComponent> {
    let label_map = label_connected_components(mask, connectivity);
    let sizes = component_sizes(&label_map);
    sizes
        .into_iter()
        .enumerate()
        .map(|(i, pixel_count)| ConnectedComponent {
            label: i as u32 + 1,
            pixel_count,
        })
        .collect()
}

/// Get the pixel count of each component in a label map
///
/// The index in the returned vector corresponds to (label - 1).
pub fn component_sizes(label_map: &LabelMap) -> Vec<u32> {
    let mut sizes = vec![0u32; label_map.component_count() as usize];
    for &label in label_map.labels() {
        if label > 0 {
            sizes[label as usize - 1] += 1;
        }
    }
    sizes
}

/// Count the number of connected components in a binary mask
pub fn count_components(mask: &BinaryMask, connectivity: Connectivity) -> u32 {
    label_connected_components(mask, connectivity).component_count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_mask(width: u32, height: u32, pixels: &[(u32, u32)]) -> BinaryMask {
        let mut mask = BinaryMask::new(width, height).unwrap();
        for &(x, y) in pixels {
            mask.set(x, y, true).unwrap();
        }
        mask
    }

    #[test]
    fn test_from_raw() {
        assert_eq!(Connectivity::from_raw(4).unwrap(), Connectivity::FourWay);
        assert_eq!(Connectivity::from_raw(8).unwrap(), Connectivity::EightWay);
        assert!(matches!(
            Connectivity::from_raw(6),
            Err(RegionError::InvalidConnectivity(6))
        ));
        assert!(Connectivity::from_raw(0).is_err());
    }

    #[test]
    fn test_count_components() {
        let mask = create_test_mask(
            10,
            10,
            &[
                (0, 0),
                (1, 0), // component 1
                (5, 5),
                (6, 5), // component 2
                (8, 8), // component 3
            ],
        );

        assert_eq!(count_components(&mask, Connectivity::FourWay), 3);
    }

    #[test]
    fn test_component_sizes() {
        let mask = create_test_mask(
            10,
            10,
            &[
                (0, 0),
                (1, 0), // 2 pixels
                (5, 5), // 1 pixel
            ],
        );

        let components = find_connected_components(&mask, Connectivity::FourWay);
        assert_eq!(components.len(), 2);
        let mut sizes: Vec<u32> = components.iter().map(|c| c.pixel_count).collect();
        sizes.sort_unstable();
        assert_eq!(sizes, vec![1, 2]);
    }

    #[test]
    fn test_background_not_reported() {
        let mask = create_test_mask(10, 10, &[]);
        assert!(find_connected_components(&mask, Connectivity::FourWay).is_empty());
        assert_eq!(count_components(&mask, Connectivity::EightWay), 0);
    }

    #[test]
    fn test_diagonal_connectivity_divergence() {
        // A diagonal staircase: separate under 4-way, one region under 8-way.
        let mask = create_test_mask(10, 10, &[(1, 1), (2, 2), (3, 3), (4, 4)]);

        assert_eq!(count_components(&mask, Connectivity::FourWay), 4);
        assert_eq!(count_components(&mask, Connectivity::EightWay), 1);
    }

    #[test]
    fn test_u_shape_equivalence_resolved() {
        // A U shape forces a label merge in the second pass: the two arms
        // get distinct provisional labels before the bottom row joins them.
        let mask = create_test_mask(
            5,
            4,
            &[
                (0, 0),
                (4, 0),
                (0, 1),
                (4, 1),
                (0, 2),
                (4, 2),
                (0, 3),
                (1, 3),
                (2, 3),
                (3, 3),
                (4, 3),
            ],
        );

        let components = find_connected_components(&mask, Connectivity::FourWay);
        assert_eq!(components.len(), 1);
        assert_eq!(components[0].pixel_count, 11);
    }

    #[test]
    fn test_label_map_consistency() {
        let mask = create_test_mask(6, 3, &[(0, 0), (1, 0), (4, 2)]);
        let label_map = label_connected_components(&mask, Connectivity::FourWay);

        assert_eq!(label_map.component_count(), 2);
        assert_eq!(label_map.get(0, 0), label_map.get(1, 0));
        assert_ne!(label_map.get(0, 0), label_map.get(4, 2));
        assert_eq!(label_map.get(3, 1), Some(0));
        assert_eq!(label_map.get(6, 0), None);

        let sizes = component_sizes(&label_map);
        let total: u32 = sizes.iter().sum();
        assert_eq!(u64::from(total), mask.count_foreground());
    }
}
