//! Slice loading, group box files, run configuration and text writers.
#![forbid(unsafe_code)]

pub mod boxes;
pub mod config;
pub mod error;
pub mod slices;
pub mod writers;

pub use boxes::{parse_boxes, read_boxes};
pub use config::RunConfig;
pub use error::IoError;
pub use slices::{Threshold, list_slices, load_slice, mask_from_rgb, probe_dimensions};
pub use writers::{Coord, create_output, group_path, write_element, write_elements, write_nodes};
