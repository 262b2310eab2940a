//! Subcommand implementations

pub mod completions;
pub mod print;
pub mod view;

use crate::cli::SourceArgs;
use crate::config::Config;
use crate::error::{BrowserError, Result};
use crate::tree::{load_forest, scan_forest, FileNode, SourceOptions};

/// Load the forest named by the source arguments.
///
/// Returns a display title alongside the forest. Directory options on the
/// command line override the `[source]` config section.
pub fn load_source(args: &SourceArgs, config: &Config) -> Result<(String, Vec<FileNode>)> {
    if let Some(dir) = &args.dir {
        let mut options = SourceOptions::from(&config.source);
        if let Some(depth) = args.max_depth {
            options = options.with_max_depth(depth);
        }
        if args.all {
            options = options.with_hidden(true);
        }
        if args.follow_links {
            options = options.with_follow_symlinks(true);
        }

        tracing::info!(path = %dir.display(), "Building tree from directory");
        let forest = scan_forest(dir, &options)?;
        return Ok((dir.display().to_string(), forest));
    }

    let Some(file) = args.file.as_deref() else {
        return Err(BrowserError::MissingSource);
    };
    let forest = load_forest(file)?;
    Ok((file.display().to_string(), forest))
}
