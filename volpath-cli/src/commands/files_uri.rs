//! Command to build the reverse reference for a private files directory.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use std::path::PathBuf;
use volpath::private_files_reference;

/// Build a picker reference for the application's private files directory on
/// a non-primary volume.
#[derive(Args)]
pub struct FilesUriCommand {
    /// The application's package identifier
    #[arg(long)]
    pub package: String,

    /// The default private directory (on the primary volume)
    #[arg(long = "default", value_name = "PATH")]
    pub default_dir: PathBuf,

    /// The application's private directories across all mounted volumes
    #[arg(required = true, value_name = "PATH")]
    pub paths: Vec<PathBuf>,
}

impl FilesUriCommand {
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        match private_files_reference(&self.paths, &self.default_dir, &self.package) {
            Some(reference) => {
                println!("{reference}");
                Ok(())
            }
            None => Err(CliError::SemanticFailure(
                "no private files directory on a non-primary volume".to_string(),
            )),
        }
    }
}
