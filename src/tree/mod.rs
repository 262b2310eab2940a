mod node;
mod options;
mod source;

pub use node::{branch_count, leaf_count, node_at, FileNode, NodeKind, NodePath};
pub use options::SourceOptions;
pub use source::{load_forest, parse_forest, scan_forest};
