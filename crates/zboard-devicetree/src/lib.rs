//! Generic devicetree node model and deterministic text renderer.
//!
//! A devicetree document is a hierarchy of named nodes, each carrying an
//! optional unit address, an optional label, ordered properties, and ordered
//! children. The renderer reproduces the on-disk grammar that board build
//! tooling parses token-by-token, so formatting is exact: tab indentation
//! per nesting level, 8-digit lowercase unit addresses, `;`-terminated
//! property lines, and single blank lines between sibling blocks.

mod writer;

pub use writer::{render, Node, Property};
