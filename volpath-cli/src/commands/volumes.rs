//! Command to list the currently enumerable storage volumes.

use crate::error::CliError;
use crate::utils::{build_catalog, GlobalOptions};
use clap::{Args, ValueEnum};

/// Output format for the volume listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    /// Aligned human-readable lines.
    Human,
    /// A JSON array of volume records.
    Json,
}

/// List the storage volumes the platform currently enumerates.
#[derive(Args)]
pub struct VolumesCommand {
    /// Output format
    #[arg(long, value_enum, default_value = "human")]
    pub format: ListFormat,
}

impl VolumesCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let catalog = build_catalog(global)?;
        let volumes = catalog.volumes();

        match self.format {
            ListFormat::Json => {
                let json = serde_json::to_string_pretty(&volumes)
                    .map_err(|e| CliError::SemanticFailure(e.to_string()))?;
                println!("{json}");
            }
            ListFormat::Human => {
                for volume in &volumes {
                    let key = if volume.is_primary() {
                        "primary".to_string()
                    } else {
                        volume.uuid().unwrap_or("-").to_string()
                    };
                    let mount = volume
                        .directory()
                        .or_else(|| volume.legacy_path())
                        .map_or_else(|| "(unmounted)".to_string(), |p| p.display().to_string());
                    println!("{key:<16} {mount}");
                }
            }
        }
        Ok(())
    }
}
