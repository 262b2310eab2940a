use crate::config::SourceConfig;

/// Options for building a tree from a directory on disk.
#[derive(Debug, Clone, Default)]
pub struct SourceOptions {
    /// Maximum depth below the scanned directory (None = unlimited).
    /// Depth 1 lists only the directory's own entries.
    pub max_depth: Option<usize>,

    /// Include hidden files/directories (starting with .)
    pub include_hidden: bool,

    /// Follow symbolic links
    pub follow_symlinks: bool,
}

impl SourceOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set maximum recursion depth
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    /// Set whether to include hidden files
    pub fn with_hidden(mut self, include: bool) -> Self {
        self.include_hidden = include;
        self
    }

    pub fn with_follow_symlinks(mut self, follow: bool) -> Self {
        self.follow_symlinks = follow;
        self
    }
}

impl From<&SourceConfig> for SourceOptions {
    fn from(config: &SourceConfig) -> Self {
        Self {
            max_depth: config.max_depth,
            include_hidden: config.show_hidden,
            follow_symlinks: config.follow_symlinks,
        }
    }
}
