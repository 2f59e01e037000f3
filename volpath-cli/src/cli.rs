//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    CompletionsCommand, FilesUriCommand, ParseCommand, ResolveCommand, VolumesCommand,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line tool for resolving storage volume references.
#[derive(Parser)]
#[command(name = "volpath")]
#[command(version, about = "Resolve storage volume references to absolute paths", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Override the directory the "home" alias resolves to
    #[arg(long, value_name = "PATH", global = true, env = "VOLPATH_DOCUMENTS_DIR")]
    pub documents_dir: Option<PathBuf>,

    /// Override the directory the "downloads" alias resolves to
    #[arg(long, value_name = "PATH", global = true, env = "VOLPATH_DOWNLOADS_DIR")]
    pub downloads_dir: Option<PathBuf>,

    /// Override the mount path treated as the primary volume's root
    #[arg(long, value_name = "PATH", global = true, env = "VOLPATH_PRIMARY_ROOT")]
    pub primary_root: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Resolve a reference to an absolute path
    Resolve(ResolveCommand),

    /// Show a reference's volume key and document path
    Parse(ParseCommand),

    /// List the currently enumerable storage volumes
    Volumes(VolumesCommand),

    /// Build the reverse reference for a private files directory
    FilesUri(FilesUriCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
