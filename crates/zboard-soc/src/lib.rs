//! SoC configuration model for the zboard exporter.
//!
//! A [`Soc`] holds one parsed chip configuration: name, vendor, the ordered
//! peripheral list, and the memory map partitioned into the slots the board
//! export cares about (ROM, main RAM, CSR control block, everything else).
//! The model is filled by the descriptor parser and read-only afterwards.

mod error;
mod soc;

pub use error::SocError;
pub use soc::{MemoryRegion, Peripheral, Soc};
