use serde::{Deserialize, Serialize};

/// Whether a node is a file (leaf) or a folder (branch).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    File,
    Folder,
}

/// A file or folder in the browser tree.
///
/// Only folders carry children. A folder with no children is an empty folder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileNode {
    /// Display name of the file or folder
    pub name: String,

    /// Serialized as `"type": "file" | "folder"`
    #[serde(rename = "type")]
    pub kind: NodeKind,

    /// Child nodes, in display order (folders only)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<FileNode>,
}

impl FileNode {
    /// Create a file node.
    pub fn file(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: NodeKind::File,
            children: Vec::new(),
        }
    }

    /// Create a folder node with the given children.
    pub fn folder(name: impl Into<String>, children: Vec<FileNode>) -> Self {
        Self {
            name: name.into(),
            kind: NodeKind::Folder,
            children,
        }
    }

    pub fn is_file(&self) -> bool {
        self.kind == NodeKind::File
    }

    pub fn is_folder(&self) -> bool {
        self.kind == NodeKind::Folder
    }

    /// Children as seen by the renderer. A file's children are ignored.
    pub fn visible_children(&self) -> &[FileNode] {
        match self.kind {
            NodeKind::Folder => &self.children,
            NodeKind::File => &[],
        }
    }
}

/// Position of a node in a forest: the sibling index at each level, root first.
///
/// Nodes are identified by position rather than by name, so siblings with
/// duplicate names stay distinct.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct NodePath(Vec<usize>);

impl NodePath {
    pub fn root(index: usize) -> Self {
        Self(vec![index])
    }

    /// Path of the `index`-th child of the node at this path.
    pub fn child(&self, index: usize) -> Self {
        let mut indices = self.0.clone();
        indices.push(index);
        Self(indices)
    }

    pub fn indices(&self) -> &[usize] {
        &self.0
    }
}

impl From<Vec<usize>> for NodePath {
    fn from(indices: Vec<usize>) -> Self {
        Self(indices)
    }
}

/// Resolve `path` against `forest`.
pub fn node_at<'a>(forest: &'a [FileNode], path: &NodePath) -> Option<&'a FileNode> {
    let (first, rest) = path.indices().split_first()?;
    let mut node = forest.get(*first)?;
    for &index in rest {
        node = node.visible_children().get(index)?;
    }
    Some(node)
}

/// Number of file nodes reachable from the forest roots.
pub fn leaf_count(forest: &[FileNode]) -> usize {
    forest
        .iter()
        .map(|node| match node.kind {
            NodeKind::File => 1,
            NodeKind::Folder => leaf_count(&node.children),
        })
        .sum()
}

/// Number of folder nodes reachable from the forest roots.
pub fn branch_count(forest: &[FileNode]) -> usize {
    forest
        .iter()
        .filter(|node| node.is_folder())
        .map(|node| 1 + branch_count(&node.children))
        .sum()
}
