//! Print command implementation

use crate::browser::{
    format_json, format_text, FileBrowser, FileBrowserOptions, MemorySurface, RenderStyle,
};
use crate::cli::PrintArgs;
use crate::config::Config;
use crate::error::Result;
use crate::tree::{branch_count, leaf_count};

/// Run the print command
pub fn run(args: PrintArgs, config: &Config) -> Result<()> {
    let (_, forest) = super::load_source(&args.source, config)?;

    if args.json {
        println!("{}", format_json(&forest, true)?);
        return Ok(());
    }

    tracing::debug!(
        files = leaf_count(&forest),
        folders = branch_count(&forest),
        "Printing tree"
    );

    let browser = FileBrowser::new(
        FileBrowserOptions::new(MemorySurface::new(), forest)
            .with_style(RenderStyle::from(&config.render)),
    );

    print!("{}", format_text(browser.surface()));
    Ok(())
}
