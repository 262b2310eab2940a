//! Rendering a file forest into a display surface.

mod formatter;
mod renderer;
mod surface;

pub use formatter::{format_json, format_text};
pub use renderer::{
    Activation, FileBrowser, FileBrowserOptions, FileSelectHandler, RenderCounts, RenderStyle,
};
pub use surface::{Item, ItemList, MemorySurface, Row, Surface};
