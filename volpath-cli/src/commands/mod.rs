//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `resolve`: resolve a reference to an absolute path
//! - `parse`: show a reference's volume key and document path
//! - `volumes`: list the currently enumerable storage volumes
//! - `files_uri`: build the reverse reference for a private files directory
//! - `completions`: generate shell completion scripts

pub mod completions;
pub mod files_uri;
pub mod parse;
pub mod resolve;
pub mod volumes;

pub use completions::CompletionsCommand;
pub use files_uri::FilesUriCommand;
pub use parse::ParseCommand;
pub use resolve::ResolveCommand;
pub use volumes::VolumesCommand;
