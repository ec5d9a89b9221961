//! Export types for serializing forged sigils.
//!
//! The export pairs the request with everything derived from it, so a
//! renderer (or a later run) can reproduce and check the figure.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::assemble::{Sigil, SigilRequest};
use crate::error::ExportError;

/// Prefix of generated export file names.
const FILE_PREFIX: &str = "sigil_";
/// How many characters of the intent go into a file name.
const FILE_STEM_CHARS: usize = 20;

/// A forged sigil together with the request that produced it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SigilExport {
    /// Crate version that produced the export.
    pub generator: String,
    pub request: SigilRequest,
    pub sigil: Sigil,
}

impl SigilExport {
    pub fn new(request: SigilRequest, sigil: Sigil) -> Self {
        Self {
            generator: concat!("sigil-forge ", env!("CARGO_PKG_VERSION")).to_string(),
            request,
            sigil,
        }
    }

    /// Pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, ExportError> {
        serde_json::to_string_pretty(self).map_err(|e| ExportError::Serialize {
            message: e.to_string(),
        })
    }

    /// Write the JSON export to `path`.
    pub fn write_json(&self, path: &Path) -> Result<(), ExportError> {
        let json = self.to_json()?;
        std::fs::write(path, json).map_err(|source| ExportError::Write {
            path: path.display().to_string(),
            source,
        })?;
        tracing::info!(path = %path.display(), "wrote sigil export");
        Ok(())
    }
}

/// A filesystem-safe name stem derived from the intent.
///
/// Takes the first 20 characters, turns spaces into underscores, keeps only
/// alphanumerics and underscores, and lowercases the result.
pub fn sanitize_file_stem(intent: &str) -> String {
    intent
        .chars()
        .take(FILE_STEM_CHARS)
        .map(|c| if c == ' ' { '_' } else { c })
        .filter(|c| c.is_alphanumeric() || *c == '_')
        .flat_map(char::to_lowercase)
        .collect()
}

/// Default export file name for an intent, e.g. `sigil_my_desire.json`.
pub fn default_file_name(intent: &str) -> String {
    format!("{FILE_PREFIX}{}.json", sanitize_file_stem(intent))
}
