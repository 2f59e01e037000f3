//! Command to resolve a reference to an absolute path.

use crate::error::CliError;
use crate::utils::{build_resolver, GlobalOptions};
use clap::Args;

/// Resolve a picker reference or bare document id to an absolute path.
#[derive(Args)]
pub struct ResolveCommand {
    /// Reference to resolve: a `content://` picker reference or a bare
    /// `<volume-key>:<document-path>` id
    pub reference: String,

    /// Fail instead of printing the root fallback when the volume cannot be
    /// found
    #[arg(long)]
    pub strict: bool,
}

impl ResolveCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let resolver = build_resolver(global)?;

        let resolution = if self.reference.starts_with("content://") {
            resolver.resolve_uri(&self.reference)?
        } else {
            resolver.resolve(&self.reference)?
        };

        if self.strict && resolution.is_root_fallback() {
            return Err(CliError::SemanticFailure(format!(
                "reference '{}' did not resolve to a mounted volume",
                self.reference
            )));
        }

        println!("{}", resolution.path());
        Ok(())
    }
}
