//! Devicetree node tree and text writer.

/// A property of a devicetree node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    /// Property name.
    pub name: String,
    /// Property value; `None` renders the flag form `name;`.
    pub value: Option<String>,
}

/// A single devicetree node.
///
/// A node exclusively owns its properties and children; trees are built
/// once, rendered once, and never mutated after rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    /// Node name.
    pub name: String,
    /// Optional unit address, rendered as `@xxxxxxxx` after the name.
    pub unit_address: Option<u32>,
    /// Optional label, rendered as `label: ` before the name.
    pub label: Option<String>,
    properties: Vec<Property>,
    children: Vec<Node>,
}

impl Node {
    /// Create a node with no address, label, properties, or children.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            unit_address: None,
            label: None,
            properties: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Set the unit address.
    pub fn with_unit_address(mut self, unit_address: u32) -> Self {
        self.unit_address = Some(unit_address);
        self
    }

    /// Set the label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Append a `name = value;` property.
    pub fn add_property(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.properties.push(Property {
            name: name.into(),
            value: Some(value.into()),
        });
    }

    /// Append a valueless `name;` flag property.
    pub fn add_flag(&mut self, name: impl Into<String>) {
        self.properties.push(Property {
            name: name.into(),
            value: None,
        });
    }

    /// Append a child node and return a reference to it for nested building.
    pub fn add_child(&mut self, child: Node) -> &mut Node {
        self.children.push(child);
        self.children.last_mut().unwrap()
    }

    /// Properties in insertion order.
    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    /// Children in insertion order.
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Header line: `<label: >name<@xxxxxxxx> {`.
    fn header(&self) -> String {
        let mut header = String::new();
        if let Some(label) = &self.label {
            header.push_str(label);
            header.push_str(": ");
        }
        header.push_str(&self.name);
        if let Some(unit_address) = self.unit_address {
            header.push_str(&format!("@{unit_address:08x}"));
        }
        header.push_str(" {");
        header
    }

    /// Body lines at this node's own indentation level: property lines,
    /// then child blocks, with one blank line between the property block
    /// and the first child and between successive children.
    fn body_lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        for property in &self.properties {
            match &property.value {
                Some(value) => lines.push(format!("{} = {};", property.name, value)),
                None => lines.push(format!("{};", property.name)),
            }
        }
        for (index, child) in self.children.iter().enumerate() {
            if index > 0 || !self.properties.is_empty() {
                lines.push(String::new());
            }
            lines.extend(child.write_lines());
        }
        lines
    }

    /// Full rendering of this node: header, indented body, `};` footer.
    fn write_lines(&self) -> Vec<String> {
        let mut lines = vec![self.header()];
        lines.extend(self.body_lines().iter().map(|line| indent(line)));
        lines.push("};".into());
        lines
    }
}

/// Shift a line one tab stop deeper. Blank separator lines stay empty.
fn indent(line: &str) -> String {
    if line.is_empty() {
        String::new()
    } else {
        format!("\t{line}")
    }
}

/// Render a node tree to devicetree text.
///
/// The root is a synthetic container: it carries no header or footer of its
/// own, only its children are emitted.
pub fn render(root: &Node) -> String {
    root.body_lines().join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(node: Node) -> String {
        let mut root = Node::new("/");
        root.add_child(node);
        render(&root)
    }

    #[test]
    fn bare_node() {
        assert_eq!(rendered(Node::new("chosen")), "chosen {\n};");
    }

    #[test]
    fn node_with_unit_address() {
        let node = Node::new("memory").with_unit_address(0x4000_0000);
        assert_eq!(rendered(node), "memory@40000000 {\n};");
    }

    #[test]
    fn unit_address_is_zero_padded_lowercase() {
        let node = Node::new("memory").with_unit_address(0xE000_100C);
        assert_eq!(rendered(node), "memory@e000100c {\n};");
    }

    #[test]
    fn node_with_label_and_unit_address() {
        let node = Node::new("memory")
            .with_label("main_ram")
            .with_unit_address(0x4000_0000);
        assert_eq!(rendered(node), "main_ram: memory@40000000 {\n};");
    }

    #[test]
    fn value_and_flag_properties() {
        let mut node = Node::new("soc");
        node.add_property("#address-cells", "<1>");
        node.add_flag("ranges");
        assert_eq!(
            rendered(node),
            "soc {\n\t#address-cells = <1>;\n\tranges;\n};"
        );
    }

    #[test]
    fn blank_line_between_properties_and_child() {
        let mut node = Node::new("soc");
        node.add_property("#address-cells", "<1>");
        let mut child = Node::new("memory").with_unit_address(0x4000_0000);
        child.add_property("device_type", "\"memory\"");
        node.add_child(child);

        let expected = "soc {\n\
                        \t#address-cells = <1>;\n\
                        \n\
                        \tmemory@40000000 {\n\
                        \t\tdevice_type = \"memory\";\n\
                        \t};\n\
                        };";
        assert_eq!(rendered(node), expected);
    }

    #[test]
    fn no_blank_line_without_properties() {
        let mut node = Node::new("soc");
        node.add_child(Node::new("memory"));
        assert_eq!(rendered(node), "soc {\n\tmemory {\n\t};\n};");
    }

    #[test]
    fn blank_line_between_successive_children_only() {
        let mut node = Node::new("soc");
        node.add_child(Node::new("first"));
        node.add_child(Node::new("second"));

        let expected = "soc {\n\
                        \tfirst {\n\
                        \t};\n\
                        \n\
                        \tsecond {\n\
                        \t};\n\
                        };";
        assert_eq!(rendered(node), expected);
    }

    #[test]
    fn indentation_deepens_per_level() {
        let mut grandchild = Node::new("inner");
        grandchild.add_property("reg", "<0>");
        let mut child = Node::new("middle");
        child.add_child(grandchild);
        let mut node = Node::new("outer");
        node.add_child(child);

        let expected = "outer {\n\
                        \tmiddle {\n\
                        \t\tinner {\n\
                        \t\t\treg = <0>;\n\
                        \t\t};\n\
                        \t};\n\
                        };";
        assert_eq!(rendered(node), expected);
    }

    #[test]
    fn root_children_separated_by_blank_line() {
        let mut root = Node::new("/");
        root.add_child(Node::new("soc"));
        root.add_child(Node::new("chosen"));
        assert_eq!(render(&root), "soc {\n};\n\nchosen {\n};");
    }

    #[test]
    fn empty_root_renders_nothing() {
        assert_eq!(render(&Node::new("/")), "");
    }

    #[test]
    fn nested_building_through_add_child() {
        let mut root = Node::new("/");
        let soc = root.add_child(Node::new("soc"));
        let regions = soc.add_child(Node::new("memory_regions"));
        regions.add_property("#address-cells", "<1>");

        let expected = "soc {\n\
                        \tmemory_regions {\n\
                        \t\t#address-cells = <1>;\n\
                        \t};\n\
                        };";
        assert_eq!(render(&root), expected);
    }
}
