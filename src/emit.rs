//! The emitter contract shared by every output format, plus the atomic file
//! write used by all of them.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::block::Block;
use crate::document::DocumentEmitter;
use crate::error::{RenderError, Result};
use crate::model::ResumeData;
use crate::text::TextEmitter;

/// Serialises a block sequence into one concrete output format.
///
/// Implementations share no state with each other; adding a format means
/// adding an implementation, not touching the section renderer.
pub trait Emitter {
    /// Short human-readable format name, used in logs and errors.
    fn name(&self) -> &'static str;

    /// File extension without the leading dot.
    fn extension(&self) -> &'static str;

    /// Encode `blocks` into the output bytes.
    fn emit(&self, blocks: &[Block]) -> Result<Vec<u8>>;

    /// Encode `blocks` and write them to `path`.
    ///
    /// Nothing is written when encoding fails, and a failed write never
    /// leaves a truncated file at `path`.
    fn save(&self, blocks: &[Block], path: &Path) -> Result<()> {
        let bytes = self.emit(blocks)?;
        write_atomic(path, &bytes)?;
        log::info!(
            "Wrote {} output '{}' ({} bytes)",
            self.name(),
            path.display(),
            bytes.len()
        );
        Ok(())
    }
}

/// Available output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputFormat {
    Text,
    Document,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 2] = [OutputFormat::Text, OutputFormat::Document];

    /// Build the emitter for rendering `data` in this format with default
    /// settings.
    pub fn emitter_for(self, data: &ResumeData) -> Box<dyn Emitter> {
        match self {
            OutputFormat::Text => Box::new(TextEmitter),
            OutputFormat::Document => Box::new(DocumentEmitter::for_resume(data)),
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Text => "txt",
            OutputFormat::Document => "pdf",
        }
    }
}

/// Write `bytes` to a temporary file next to `path`, then move it over
/// `path`. The temporary file is removed if any step fails.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    let io_err = |source: std::io::Error| RenderError::Io {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(io_err)?;
    tmp.write_all(bytes).map_err(io_err)?;
    tmp.flush().map_err(io_err)?;
    tmp.as_file().sync_all().map_err(io_err)?;
    tmp.persist(path).map_err(|e| io_err(e.error))?;
    Ok(())
}
