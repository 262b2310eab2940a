//! View command implementation

use crate::cli::ViewArgs;
use crate::config::Config;
use crate::error::{BrowserError, Result};
use crate::tui::{self, App};

/// Run the view command
pub fn run(args: ViewArgs, config: &Config) -> Result<()> {
    let (title, forest) = super::load_source(&args.source, config)?;
    let app = App::new(title.clone(), forest, config);

    tui::run(app).map_err(|source| BrowserError::Io {
        path: title.into(),
        source,
    })
}
