//! Pipeline – ties together section rendering, layout, and encoding into
//! single function calls.

use std::path::Path;

use crate::document::{DocumentConfig, DocumentEmitter};
use crate::document_layout::DocumentLayout;
use crate::emit::{write_atomic, Emitter};
use crate::error::Result;
use crate::model::ResumeData;
use crate::sections::render_sections;
use crate::text::{render_text, TextEmitter};

/// Full text pipeline: resume → blocks → plain text.
pub fn generate_text(data: &ResumeData) -> String {
    render_text(&render_sections(data))
}

/// Render the text resume and write it to `path` as UTF-8.
pub fn save_text(data: &ResumeData, path: &Path) -> Result<()> {
    TextEmitter.save(&render_sections(data), path)
}

/// Whether this build can encode documents.
pub fn document_available() -> bool {
    DocumentEmitter::new(DocumentConfig::default()).is_available()
}

/// Generate only the document layout (no encoding) – useful for testing and
/// works without the document capability.
pub fn compute_document_layout(data: &ResumeData, config: &DocumentConfig) -> DocumentLayout {
    DocumentEmitter::without_backend(config.clone().titled_for(data)).layout(&render_sections(data))
}

/// Full document pipeline: resume → blocks → pages → PDF bytes.
///
/// Returns `(pdf_bytes, layout)`.
pub fn generate_document(
    data: &ResumeData,
    config: &DocumentConfig,
) -> Result<(Vec<u8>, DocumentLayout)> {
    let emitter = DocumentEmitter::new(config.clone().titled_for(data));
    let backend = emitter.backend()?;
    let layout = emitter.layout(&render_sections(data));
    let bytes = backend.encode(&layout)?;
    Ok((bytes, layout))
}

/// Render the document and write it to `path`. Nothing is written when the
/// capability is missing.
pub fn save_document(data: &ResumeData, config: &DocumentConfig, path: &Path) -> Result<DocumentLayout> {
    let (bytes, layout) = generate_document(data, config)?;
    write_atomic(path, &bytes)?;
    log::info!(
        "Wrote document '{}' ({} bytes, {} page{})",
        path.display(),
        bytes.len(),
        layout.page_count(),
        if layout.page_count() == 1 { "" } else { "s" }
    );
    Ok(layout)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::sample_resume;

    #[test]
    fn layout_title_defaults_to_name() {
        let layout = compute_document_layout(&sample_resume(), &DocumentConfig::default());
        assert_eq!(layout.title, "John Doe");
    }

    #[test]
    fn output_format_emitter_shares_pipeline_title() {
        let data = sample_resume();
        let via_format = DocumentEmitter::for_resume(&data).layout(&render_sections(&data));
        let via_pipeline = compute_document_layout(&data, &DocumentConfig::default());
        assert_eq!(via_format.title, via_pipeline.title);
        assert_eq!(via_format, via_pipeline);
    }

    #[test]
    fn explicit_title_wins() {
        let config = DocumentConfig {
            title: Some("CV".into()),
            ..DocumentConfig::default()
        };
        let layout = compute_document_layout(&sample_resume(), &config);
        assert_eq!(layout.title, "CV");
    }

    #[test]
    fn availability_matches_feature() {
        assert_eq!(document_available(), cfg!(feature = "pdf"));
    }

    #[cfg(feature = "pdf")]
    #[test]
    fn pipeline_basic() {
        let (bytes, layout) = generate_document(&sample_resume(), &DocumentConfig::default()).unwrap();
        assert!(!bytes.is_empty());
        assert!(!layout.pages.is_empty());
        assert_eq!(&bytes[0..5], b"%PDF-");
    }

    #[cfg(not(feature = "pdf"))]
    #[test]
    fn document_reports_missing_capability() {
        let err = generate_document(&sample_resume(), &DocumentConfig::default()).unwrap_err();
        assert!(err.is_capability_unavailable());
    }
}
