//! Completions command implementation

use clap::CommandFactory;

use crate::cli::{Cli, CompletionsArgs};

/// Write shell completions to stdout
pub fn run(args: CompletionsArgs) {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(args.shell, &mut command, name, &mut std::io::stdout());
}
