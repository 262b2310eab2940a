use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// File Browser - browse file/folder trees in the terminal
#[derive(Parser, Debug)]
#[command(name = "file-browser")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Browse a tree interactively
    View(ViewArgs),

    /// Print a tree to stdout
    Print(PrintArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Where the tree comes from: a JSON document or a directory.
#[derive(Args, Debug)]
pub struct SourceArgs {
    /// JSON tree document
    #[arg(value_name = "FILE", required_unless_present = "dir", conflicts_with = "dir")]
    pub file: Option<PathBuf>,

    /// Build the tree from a directory instead
    #[arg(long, value_name = "PATH")]
    pub dir: Option<PathBuf>,

    /// Maximum directory depth (with --dir)
    #[arg(short = 'd', long, value_name = "N", requires = "dir")]
    pub max_depth: Option<usize>,

    /// Include hidden entries (with --dir)
    #[arg(short, long, requires = "dir")]
    pub all: bool,

    /// Follow symbolic links (with --dir)
    #[arg(short = 'L', long, requires = "dir")]
    pub follow_links: bool,
}

#[derive(Args, Debug)]
pub struct ViewArgs {
    #[command(flatten)]
    pub source: SourceArgs,
}

#[derive(Args, Debug)]
pub struct PrintArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Output the tree as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
