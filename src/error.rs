//! Error types surfaced by the emitters.
//!
//! Rendering blocks never fails; only encoding with an optional capability
//! and writing files can.

use std::path::PathBuf;

/// Errors returned by emitters and the save helpers.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// An optional output capability was not compiled in or not supplied.
    #[error("{capability} output is unavailable: {remediation}")]
    CapabilityUnavailable {
        capability: &'static str,
        remediation: &'static str,
    },

    /// The output file could not be created, written, or moved into place.
    #[error("failed to write '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl RenderError {
    pub fn is_capability_unavailable(&self) -> bool {
        matches!(self, RenderError::CapabilityUnavailable { .. })
    }
}

pub type Result<T> = std::result::Result<T, RenderError>;
