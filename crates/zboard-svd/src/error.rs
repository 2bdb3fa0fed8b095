//! Error types for descriptor parsing.

use std::path::PathBuf;

use thiserror::Error;
use zboard_soc::SocError;

/// Errors that can occur while parsing an SVD export.
#[derive(Debug, Error)]
pub enum SvdError {
    /// Input file not found.
    #[error("SVD file not found: {}", path.display())]
    NotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// I/O error reading the input.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The text is not well-formed markup.
    #[error("malformed SVD markup: {0}")]
    Syntax(String),

    /// A required element is absent.
    #[error("missing required element <{element}> in <{context}>")]
    MissingElement {
        /// Name of the absent element.
        element: &'static str,
        /// Element it was expected inside.
        context: &'static str,
    },

    /// A numeric field does not hold a valid integer literal.
    #[error("invalid value '{literal}' for <{field}>: expected a decimal or 0x-prefixed integer")]
    InvalidNumber {
        /// Field the literal was read from.
        field: &'static str,
        /// The offending literal.
        literal: String,
    },

    /// The parsed regions violate the SoC memory-map rules.
    #[error(transparent)]
    Soc(#[from] SocError),
}
