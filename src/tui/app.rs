//! Application state for the TUI.

use std::cell::RefCell;
use std::rc::Rc;

use crate::browser::{Activation, FileBrowser, FileBrowserOptions, MemorySurface, RenderStyle};
use crate::config::Config;
use crate::tree::FileNode;

/// The current UI mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Normal navigation mode.
    Normal,
    /// Help overlay mode.
    Help,
}

/// Main application state for the TUI.
pub struct App {
    /// Title shown on the tree border (file or directory being browsed).
    pub title: String,

    /// Rendered file tree.
    pub browser: FileBrowser<MemorySurface>,

    /// Currently selected row.
    pub selected: usize,

    /// Current UI mode.
    pub mode: Mode,

    /// Application should quit.
    pub should_quit: bool,

    /// Status message to display.
    pub status_message: Option<String>,

    /// Show the key hint footer.
    pub show_footer: bool,

    /// Symbol drawn in front of the selected row.
    pub highlight_symbol: String,

    /// Name of the last file reported by the selection handler.
    last_selected: Rc<RefCell<Option<String>>>,
}

impl App {
    /// Create a new App rendering `forest` with the given configuration.
    pub fn new(title: impl Into<String>, forest: Vec<FileNode>, config: &Config) -> Self {
        let last_selected = Rc::new(RefCell::new(None));
        let sink = Rc::clone(&last_selected);

        let options = FileBrowserOptions::new(MemorySurface::new(), forest)
            .with_style(RenderStyle::from(&config.render))
            .with_handler(move |file: &FileNode| {
                *sink.borrow_mut() = Some(file.name.clone());
            });

        Self {
            title: title.into(),
            browser: FileBrowser::new(options),
            selected: 0,
            mode: Mode::Normal,
            should_quit: false,
            status_message: None,
            show_footer: config.tui.show_footer,
            highlight_symbol: config.tui.highlight_symbol.clone(),
            last_selected,
        }
    }

    /// Number of rendered rows.
    pub fn row_count(&self) -> usize {
        self.browser.surface().rows().len()
    }

    /// Move selection by delta, clamped to the row range.
    pub fn move_selection(&mut self, delta: i32) {
        let count = self.row_count();
        if count == 0 {
            self.set_selected(0);
            return;
        }
        let target = self.selected as i64 + delta as i64;
        self.set_selected(target.clamp(0, count as i64 - 1) as usize);
    }

    pub fn select_first(&mut self) {
        self.set_selected(0);
    }

    pub fn select_last(&mut self) {
        self.set_selected(self.row_count().saturating_sub(1));
    }

    /// Select a row by index; out-of-range indices are ignored.
    pub fn select_row(&mut self, index: usize) {
        if index < self.row_count() {
            self.set_selected(index);
        }
    }

    /// Every selection change drops the status of the previous activation.
    fn set_selected(&mut self, index: usize) {
        self.selected = index;
        self.status_message = None;
    }

    /// Activate the selected row. Folders do nothing.
    pub fn activate_selected(&mut self) -> Activation {
        let trigger = self
            .browser
            .surface()
            .rows()
            .get(self.selected)
            .and_then(|row| row.trigger.cloned());

        let Some(path) = trigger else {
            return Activation::Ignored;
        };

        let outcome = self.browser.activate(&path);
        if outcome == Activation::Dispatched {
            if let Some(name) = self.last_selected.borrow().as_ref() {
                self.status_message = Some(format!("Selected file: {}", name));
            }
        }
        outcome
    }

    /// Name of the last file passed to the selection handler.
    pub fn last_selected(&self) -> Option<String> {
        self.last_selected.borrow().clone()
    }
}
