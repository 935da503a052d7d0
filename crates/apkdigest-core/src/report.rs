//! Machine-readable outcome of one extraction.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::extract::ExtractError;

/// One extraction result, suitable for JSON output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DigestReport {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub archive: Option<String>,
    /// Extracted digest; `None` means absence.
    pub digest: Option<String>,
    /// Stable failure label (see `ExtractError::kind`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// Human-readable failure message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl DigestReport {
    pub fn from_result(result: &Result<String, ExtractError>) -> Self {
        match result {
            Ok(digest) => Self {
                digest: Some(digest.clone()),
                ..Self::default()
            },
            Err(e) => Self {
                reason: Some(e.kind().to_string()),
                detail: Some(e.to_string()),
                ..Self::default()
            },
        }
    }

    pub fn with_archive(mut self, archive: &Path) -> Self {
        self.archive = Some(archive.display().to_string());
        self
    }

    pub fn with_app_id(mut self, app_id: &str) -> Self {
        self.app_id = Some(app_id.to_string());
        self
    }

    pub fn is_present(&self) -> bool {
        self.digest.is_some()
    }

    pub fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
