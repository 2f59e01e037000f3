//! Main entry point for the volpath CLI.
//!
//! This is the command-line interface for storage volume reference
//! resolution. It provides commands for turning picker references into
//! absolute paths and back:
//! - `resolve`: resolve a reference to an absolute path
//! - `parse`: show a reference's volume key and document path
//! - `volumes`: list the currently enumerable storage volumes
//! - `files-uri`: build the reverse reference for a private files directory

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let logger = volpath::init_logger(cli.verbose, cli.quiet);

    // Convert CLI args to GlobalOptions
    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        documents_dir: cli.documents_dir,
        downloads_dir: cli.downloads_dir,
        primary_root: cli.primary_root,
    };

    // Execute the command
    let result = match cli.command {
        cli::Command::Resolve(cmd) => cmd.execute(&global),
        cli::Command::Parse(cmd) => cmd.execute(&global),
        cli::Command::Volumes(cmd) => cmd.execute(&global),
        cli::Command::FilesUri(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            logger.error(&e.to_string());
            std::process::exit(e.exit_code());
        }
    }
}
