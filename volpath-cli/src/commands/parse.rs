//! Command to display a reference's parsed components.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use volpath::reference::tree_document_id;
use volpath::DocumentRef;

/// Show the volume key and document path a reference encodes.
#[derive(Args)]
pub struct ParseCommand {
    /// Reference to parse: a `content://` picker reference or a bare
    /// `<volume-key>:<document-path>` id
    pub reference: String,
}

impl ParseCommand {
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        let document_id = if self.reference.starts_with("content://") {
            tree_document_id(&self.reference).ok_or_else(|| {
                CliError::SemanticFailure(format!(
                    "reference '{}' carries no tree document id",
                    self.reference
                ))
            })?
        } else {
            self.reference.clone()
        };

        let reference = DocumentRef::parse(&document_id)?;
        println!("volume key:    {}", reference.volume_key());
        println!("document path: {}", reference.document_path());
        Ok(())
    }
}
