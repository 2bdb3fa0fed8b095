//! SoC-to-devicetree mapping.

use zboard_devicetree::{render, Node};
use zboard_soc::{MemoryRegion, Soc, SocError};

/// Render a SoC configuration as a devicetree board document.
pub fn export(soc: &Soc) -> Result<String, SocError> {
    log::info!("generating SoC devicetree for {}", soc.name);

    // Resolve the required slot up front: a model without main RAM must
    // not emit anything.
    let main_ram = soc.main_ram()?;

    let mut soc_node = Node::new("soc");
    soc_node.add_property("#address-cells", "<1>");
    soc_node.add_property("#size-cells", "<1>");
    soc_node.add_property(
        "compatible",
        format!(
            "\"{},{}\"",
            soc.vendor.to_lowercase(),
            soc.name.to_lowercase()
        ),
    );
    soc_node.add_flag("ranges");

    let memory_regions = soc_node.add_child(Node::new("memory_regions"));
    memory_regions.add_property("#address-cells", "<1>");
    memory_regions.add_property("#size-cells", "<1>");

    memory_regions.add_child(memory_node(main_ram, Some("main_ram")));
    for region in soc.usable_memory_regions() {
        memory_regions.add_child(memory_node(region, None));
    }

    let mut root = Node::new("/");
    root.add_child(soc_node);
    Ok(render(&root))
}

/// Build one `memory` node for a region.
fn memory_node(region: &MemoryRegion, label: Option<&str>) -> Node {
    let mut node = Node::new("memory").with_unit_address(region.base_address);
    if let Some(label) = label {
        node = node.with_label(label);
    }
    node.add_property("label", format!("\"{}\"", region.name.to_lowercase()));
    node.add_property("device_type", "\"memory\"");
    node.add_property(
        "reg",
        format!("<0x{:08x} 0x{:08x}>", region.base_address, region.size),
    );
    node
}
