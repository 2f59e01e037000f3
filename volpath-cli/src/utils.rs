//! Utility functions for CLI operations.
//!
//! This module provides the shared plumbing for CLI commands: global option
//! handling and construction of the catalog/resolver over the real system
//! environment.

use crate::error::CliError;
use std::path::PathBuf;
use volpath::{Config, SystemEnvironment, TreeResolver, VolumeCatalog};

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
#[allow(dead_code)] // verbose/quiet are consumed by the logger in main.rs
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Override the directory the "home" alias resolves to.
    pub documents_dir: Option<PathBuf>,

    /// Override the directory the "downloads" alias resolves to.
    pub downloads_dir: Option<PathBuf>,

    /// Override the mount path treated as the primary volume's root.
    pub primary_root: Option<PathBuf>,
}

/// Build the storage configuration from global options.
///
/// The clap layer already merged environment variables into the options
/// (the `--documents-dir` family is env-backed), so the options are the
/// single source here.
pub fn build_config(global: &GlobalOptions) -> Result<Config, CliError> {
    let config = Config {
        documents_dir: global.documents_dir.clone(),
        downloads_dir: global.downloads_dir.clone(),
        primary_root: global.primary_root.clone(),
    };
    config
        .validate()
        .map_err(|e| CliError::Config(e.to_string()))?;
    Ok(config)
}

/// Build a catalog over the real operating system.
pub fn build_catalog(global: &GlobalOptions) -> Result<VolumeCatalog, CliError> {
    let config = build_config(global)?;
    Ok(VolumeCatalog::new(Box::new(SystemEnvironment::with_config(
        config,
    ))))
}

/// Build a resolver over the real operating system.
pub fn build_resolver(global: &GlobalOptions) -> Result<TreeResolver, CliError> {
    Ok(TreeResolver::new(build_catalog(global)?))
}
