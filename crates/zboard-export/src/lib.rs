//! Devicetree export for parsed SoC configurations.
//!
//! Maps a [`zboard_soc::Soc`] onto the fixed devicetree structure Zephyr's
//! board tooling expects and renders it to text. The mapping is two-phase:
//! the whole node tree is built first, then rendered, so a configuration
//! that fails its consistency checks produces no output at all.

mod exporter;

pub use exporter::export;
