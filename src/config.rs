use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub render: RenderConfig,
    pub source: SourceConfig,
    pub tui: TuiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Marker shown before folder names
    pub folder_marker: String,
    /// Marker shown before file names
    pub file_marker: String,
    /// Indentation of the top-level list, in columns
    pub root_indent: u16,
    /// Indentation added by each nested list, in columns
    pub nested_indent: u16,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// Maximum directory depth when building a tree from disk (unset = unlimited)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_depth: Option<usize>,
    /// Include hidden entries when building a tree from disk
    pub show_hidden: bool,
    /// Descend into symlinked directories when building a tree from disk
    pub follow_symlinks: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TuiConfig {
    /// Show the key hint footer
    pub show_footer: bool,
    /// Symbol drawn in front of the selected row
    pub highlight_symbol: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            render: RenderConfig::default(),
            source: SourceConfig::default(),
            tui: TuiConfig::default(),
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            folder_marker: "📂".to_string(),
            file_marker: "📄".to_string(),
            root_indent: 1,
            nested_indent: 2,
        }
    }
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            show_footer: true,
            highlight_symbol: "> ".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from `path`, or from the default location.
    ///
    /// An explicitly given file must exist. The default file is optional and
    /// its absence yields the built-in defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let (path, required) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => match Self::default_path() {
                Some(p) => (p, false),
                None => return Ok(Self::default()),
            },
        };

        if !path.exists() {
            if required {
                return Err(ConfigError::NotFound(path));
            }
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;

        let config: Config =
            toml::from_str(&contents).map_err(|source| ConfigError::Parse { path, source })?;
        config.validate()?;

        Ok(config)
    }

    /// Default config file location: `<config dir>/file-browser/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("file-browser").join("config.toml"))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.render.folder_marker.is_empty() {
            return Err(ConfigError::EmptyMarker("folder_marker"));
        }
        if self.render.file_marker.is_empty() {
            return Err(ConfigError::EmptyMarker("file_marker"));
        }
        Ok(())
    }
}
