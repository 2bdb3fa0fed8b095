//! Parser for the SVD export of a LiteX SoC.
//!
//! The entry points are [`parse`] for in-memory text and [`parse_file`] for
//! a path on disk. Both produce a validated [`Soc`] model. Nothing about
//! the input is corrected silently: required elements must be present,
//! numeric fields must be decimal or `0x`-prefixed hex, and the only
//! fallback is the documented `"custom"` vendor default.

mod error;
mod tree;

pub use error::SvdError;
pub use tree::Element;

use std::path::Path;

use zboard_soc::{MemoryRegion, Peripheral, Soc};

/// Parse an SVD export into a SoC configuration.
pub fn parse(svd: &str) -> Result<Soc, SvdError> {
    let device = Element::parse(svd)?;
    if device.name != "device" {
        return Err(SvdError::MissingElement {
            element: "device",
            context: "document",
        });
    }

    let name = required_text(&device, "name", "device")?;
    let vendor = device
        .child_text("vendor")
        .or_else(|| device.child_text("vendorID"))
        .unwrap_or("custom");
    let name = match device.child_text("series") {
        Some(series) => format!("{series}_{name}"),
        None => name.to_string(),
    };
    log::debug!("parsing device {name} (vendor {vendor})");

    let mut soc = Soc::new(name, vendor);

    if let Some(peripherals) = device.child("peripherals") {
        for peripheral in peripherals.children_named("peripheral") {
            let name = required_text(peripheral, "name", "peripheral")?;
            let base_address = parse_u32(
                required_text(peripheral, "baseAddress", "peripheral")?,
                "baseAddress",
            )?;
            soc.add_peripheral(Peripheral {
                name: name.into(),
                base_address,
            });
        }
    }

    if let Some(extensions) = device.child("vendorExtensions") {
        for region in extensions
            .child("memoryRegions")
            .into_iter()
            .flat_map(|regions| regions.children_named("memoryRegion"))
        {
            let name = required_text(region, "name", "memoryRegion")?;
            let base_address = parse_u32(
                required_text(region, "baseAddress", "memoryRegion")?,
                "baseAddress",
            )?;
            let size = parse_u32(required_text(region, "size", "memoryRegion")?, "size")?;
            soc.add_memory_region(MemoryRegion {
                name: name.into(),
                base_address,
                size,
            })?;
        }

        // Constants and other vendor extension blocks are informational
        // only; they never influence the parsed model.
        for other in extensions
            .children
            .iter()
            .filter(|child| child.name != "memoryRegions")
        {
            log::debug!(
                "ignoring vendor extension <{}> with {} entries",
                other.name,
                other.children.len()
            );
        }
    }

    log::debug!(
        "parsed {} peripherals and {} usable memory regions",
        soc.peripherals().len(),
        soc.usable_memory_regions().len()
    );
    Ok(soc)
}

/// Parse an SVD export from a file.
pub fn parse_file(path: &Path) -> Result<Soc, SvdError> {
    if !path.exists() {
        return Err(SvdError::NotFound {
            path: path.to_path_buf(),
        });
    }
    log::info!("parsing SVD file {}", path.display());
    let svd = std::fs::read_to_string(path)?;
    parse(&svd)
}

/// Parse a descriptor integer: decimal or `0x`-prefixed hexadecimal.
pub fn parse_u32(literal: &str, field: &'static str) -> Result<u32, SvdError> {
    let trimmed = literal.trim();
    let parsed = match trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
    {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => trimmed.parse(),
    };
    parsed.map_err(|_| SvdError::InvalidNumber {
        field,
        literal: trimmed.into(),
    })
}

fn required_text<'a>(
    element: &'a Element,
    child: &'static str,
    context: &'static str,
) -> Result<&'a str, SvdError> {
    element.child_text(child).ok_or(SvdError::MissingElement {
        element: child,
        context,
    })
}
