//! Error types for the SoC configuration model.

use thiserror::Error;

/// Errors raised by SoC memory-map consistency checks.
#[derive(Debug, Error)]
pub enum SocError {
    /// A required memory region slot was never filled.
    #[error("SoC has no {name} memory region")]
    MissingRegion {
        /// Name of the empty slot.
        name: &'static str,
    },

    /// A second region was routed into an already-occupied slot.
    #[error("duplicate {name} memory region")]
    DuplicateRegion {
        /// Name of the doubly-defined region.
        name: String,
    },
}
