//! Hexahedral lattice builder: thresholded slices in, pooled nodes and
//! eight-node elements out.
#![forbid(unsafe_code)]

pub mod build;
pub mod group;
pub mod hex;
pub mod mask;

pub use build::LatticeBuilder;
pub use group::{GroupBox, MeshGroup};
pub use hex::{Element, HEX_WINDING, voxel_corners};
pub use mask::SliceMask;
