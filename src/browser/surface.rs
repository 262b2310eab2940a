//! Display surfaces the browser renders into.

use crate::tree::{NodeKind, NodePath};

/// A rendered list: items sharing one indentation level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemList {
    /// Columns this list is indented relative to its parent
    pub indent: u16,
    pub items: Vec<Item>,
}

/// A single rendered node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    /// Marker and name, e.g. "📂 scripts"
    pub label: String,
    pub kind: NodeKind,
    /// Activation target; set for files only
    pub trigger: Option<NodePath>,
    /// Nested list of a folder with children
    pub children: Option<ItemList>,
}

/// A target that can be cleared and populated with nested lists.
pub trait Surface {
    /// Remove all content.
    fn clear(&mut self);

    /// Attach a list after any existing content.
    fn append(&mut self, list: ItemList);
}

/// A flattened view of one rendered item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row<'a> {
    /// Total indentation in columns
    pub indent: usize,
    /// Depth of the item (0 = top level)
    pub depth: usize,
    pub label: &'a str,
    pub kind: NodeKind,
    pub trigger: Option<&'a NodePath>,
}

/// A retained surface that keeps rendered lists in memory for a host to read.
#[derive(Debug, Clone, Default)]
pub struct MemorySurface {
    lists: Vec<ItemList>,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lists(&self) -> &[ItemList] {
        &self.lists
    }

    pub fn is_empty(&self) -> bool {
        self.lists.iter().all(|list| list.items.is_empty())
    }

    /// All items in display order (depth-first, pre-order).
    pub fn rows(&self) -> Vec<Row<'_>> {
        let mut rows = Vec::new();
        for list in &self.lists {
            collect_rows(list, 0, 0, &mut rows);
        }
        rows
    }

    /// Number of rendered items of the given kind.
    pub fn count(&self, kind: NodeKind) -> usize {
        self.rows().iter().filter(|row| row.kind == kind).count()
    }

    /// Trigger of the first item with this label, if it has one.
    pub fn trigger_for(&self, label: &str) -> Option<NodePath> {
        self.rows()
            .into_iter()
            .find(|row| row.label == label)
            .and_then(|row| row.trigger.cloned())
    }
}

impl Surface for MemorySurface {
    fn clear(&mut self) {
        self.lists.clear();
    }

    fn append(&mut self, list: ItemList) {
        self.lists.push(list);
    }
}

fn collect_rows<'a>(list: &'a ItemList, base: usize, depth: usize, rows: &mut Vec<Row<'a>>) {
    let indent = base + list.indent as usize;
    for item in &list.items {
        rows.push(Row {
            indent,
            depth,
            label: &item.label,
            kind: item.kind,
            trigger: item.trigger.as_ref(),
        });
        if let Some(children) = &item.children {
            collect_rows(children, indent, depth + 1, rows);
        }
    }
}
