//! salient-region - Connected component analysis for threshold selection
//!
//! This crate labels the foreground of a [`BinaryMask`](salient_core::BinaryMask)
//! into maximal connected regions under 4- or 8-way adjacency and reports
//! each region's pixel area. The area multiset is what the data-driven
//! binarizer scores; label identifiers themselves carry no ordering
//! guarantee.
//!
//! # Example
//!
//! ```
//! use salient_core::BinaryMask;
//! use salient_region::{Connectivity, find_connected_components};
//!
//! let mut mask = BinaryMask::new(100, 100).unwrap();
//! mask.set(10, 10, true).unwrap();
//! mask.set(11, 10, true).unwrap();
//! mask.set(50, 50, true).unwrap();
//!
//! let components = find_connected_components(&mask, Connectivity::FourWay);
//! assert_eq!(components.len(), 2);
//! ```

pub mod conncomp;
pub mod error;

pub use conncomp::{
    ConnectedComponent, Connectivity, LabelMap, component_sizes, count_components,
    find_connected_components, label_connected_components,
};
pub use error::{RegionError, RegionResult};
