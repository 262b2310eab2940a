//! File Browser - render file/folder trees and react to file selection
//!
//! This crate provides functionality for:
//! - Rendering an ordered file/folder forest into a display surface
//! - Dispatching a callback when a rendered file is activated
//! - Loading trees from JSON documents or directories on disk
//! - Interactive TUI and plain-text output

pub mod browser;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod tree;
pub mod tui;

// Re-export commonly used types
pub use browser::{Activation, FileBrowser, FileBrowserOptions, MemorySurface, Surface};
pub use config::Config;
pub use error::{BrowserError, Result};
pub use tree::{FileNode, NodeKind, NodePath};
