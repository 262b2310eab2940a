use crate::tree::FileNode;

use super::surface::MemorySurface;

/// Format rendered content as indented plain text, one item per line.
pub fn format_text(surface: &MemorySurface) -> String {
    let mut output = String::new();
    for row in surface.rows() {
        output.push_str(&" ".repeat(row.indent));
        output.push_str(row.label);
        output.push('\n');
    }
    output
}

/// Format a forest as a JSON tree document.
pub fn format_json(forest: &[FileNode], pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(forest)
    } else {
        serde_json::to_string(forest)
    }
}
