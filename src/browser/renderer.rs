//! Renders a file forest into a [`Surface`] and dispatches file activations.

use std::fmt;

use crate::config::RenderConfig;
use crate::tree::{node_at, FileNode, NodeKind, NodePath};

use super::surface::{Item, ItemList, Surface};

/// Callback invoked with the activated file node.
pub type FileSelectHandler = Box<dyn FnMut(&FileNode)>;

/// Markers and indentation used when building items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderStyle {
    pub folder_marker: String,
    pub file_marker: String,
    pub root_indent: u16,
    pub nested_indent: u16,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self::from(&RenderConfig::default())
    }
}

impl From<&RenderConfig> for RenderStyle {
    fn from(config: &RenderConfig) -> Self {
        Self {
            folder_marker: config.folder_marker.clone(),
            file_marker: config.file_marker.clone(),
            root_indent: config.root_indent,
            nested_indent: config.nested_indent,
        }
    }
}

impl RenderStyle {
    /// Label for a node: kind marker, a space, then the name.
    pub fn label(&self, node: &FileNode) -> String {
        let marker = match node.kind {
            NodeKind::Folder => &self.folder_marker,
            NodeKind::File => &self.file_marker,
        };
        format!("{} {}", marker, node.name)
    }
}

/// Construction options for [`FileBrowser`].
pub struct FileBrowserOptions<S> {
    /// Surface the tree is rendered into
    pub surface: S,
    /// Root nodes, in display order
    pub root: Vec<FileNode>,
    /// Invoked when a file item is activated
    pub on_file_select: Option<FileSelectHandler>,
    pub style: RenderStyle,
}

impl<S> FileBrowserOptions<S> {
    pub fn new(surface: S, root: Vec<FileNode>) -> Self {
        Self {
            surface,
            root,
            on_file_select: None,
            style: RenderStyle::default(),
        }
    }

    pub fn with_handler(mut self, handler: impl FnMut(&FileNode) + 'static) -> Self {
        self.on_file_select = Some(Box::new(handler));
        self
    }

    pub fn with_style(mut self, style: RenderStyle) -> Self {
        self.style = style;
        self
    }
}

/// Outcome of delivering an activation to the browser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    /// The handler was invoked with the file node.
    Dispatched,
    /// A file was activated but no handler is installed.
    NoHandler,
    /// The path names a folder or no node at all.
    Ignored,
}

/// Number of items produced by one render pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderCounts {
    pub files: usize,
    pub folders: usize,
}

/// A file/folder tree rendered into a surface.
///
/// The surface is fully redrawn on construction and on every call to
/// [`FileBrowser::render`]. File items carry their [`NodePath`] as trigger;
/// the host passes it back to [`FileBrowser::activate`] when the item is
/// clicked or otherwise activated.
pub struct FileBrowser<S: Surface> {
    surface: S,
    root: Vec<FileNode>,
    on_file_select: Option<FileSelectHandler>,
    style: RenderStyle,
}

impl<S: Surface> FileBrowser<S> {
    /// Create the browser and render the tree immediately.
    pub fn new(options: FileBrowserOptions<S>) -> Self {
        let mut browser = Self {
            surface: options.surface,
            root: options.root,
            on_file_select: options.on_file_select,
            style: options.style,
        };
        browser.render();
        browser
    }

    /// Replace the surface content with a fresh rendering of the tree.
    pub fn render(&mut self) -> RenderCounts {
        self.surface.clear();

        let mut counts = RenderCounts::default();
        let items = self
            .root
            .iter()
            .enumerate()
            .map(|(i, node)| self.render_node(node, NodePath::root(i), &mut counts))
            .collect();

        self.surface.append(ItemList {
            indent: self.style.root_indent,
            items,
        });

        tracing::debug!(
            roots = self.root.len(),
            files = counts.files,
            folders = counts.folders,
            "Rendered file tree"
        );
        counts
    }

    fn render_node(&self, node: &FileNode, path: NodePath, counts: &mut RenderCounts) -> Item {
        match node.kind {
            NodeKind::File => counts.files += 1,
            NodeKind::Folder => counts.folders += 1,
        }

        let children = match node.kind {
            NodeKind::Folder if !node.children.is_empty() => Some(ItemList {
                indent: self.style.nested_indent,
                items: node
                    .children
                    .iter()
                    .enumerate()
                    .map(|(i, child)| self.render_node(child, path.child(i), counts))
                    .collect(),
            }),
            _ => None,
        };

        let trigger = match node.kind {
            NodeKind::File => Some(path),
            NodeKind::Folder => None,
        };

        Item {
            label: self.style.label(node),
            kind: node.kind,
            trigger,
            children,
        }
    }

    /// Deliver an activation for the item rendered from the node at `path`.
    ///
    /// Only files dispatch. A panic raised by the handler is not caught.
    pub fn activate(&mut self, path: &NodePath) -> Activation {
        let Some(node) = node_at(&self.root, path).filter(|node| node.is_file()) else {
            tracing::trace!(?path, "Activation ignored");
            return Activation::Ignored;
        };

        match self.on_file_select.as_mut() {
            Some(handler) => {
                tracing::info!(file = %node.name, "File selected");
                handler(node);
                Activation::Dispatched
            }
            None => Activation::NoHandler,
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn root(&self) -> &[FileNode] {
        &self.root
    }

    pub fn has_handler(&self) -> bool {
        self.on_file_select.is_some()
    }

    /// Give the surface back, e.g. to build a new browser over it.
    pub fn into_surface(self) -> S {
        self.surface
    }
}

impl<S: Surface + fmt::Debug> fmt::Debug for FileBrowser<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileBrowser")
            .field("surface", &self.surface)
            .field("roots", &self.root.len())
            .field("has_handler", &self.has_handler())
            .field("style", &self.style)
            .finish()
    }
}
