//! # resume-forge – resume data → plain text and PDF
//!
//! The pipeline stages are:
//!
//! 1. **Model** – the caller fills in a [`ResumeData`] ([`model`])
//! 2. **Sections** – ordered, conditionally-included blocks ([`sections`], [`block`])
//! 3. **Emit** – serialise blocks through an [`Emitter`]:
//!    plain text ([`text`]) or paginated document ([`document`])
//! 4. **Encode** – document layouts become PDF bytes via printpdf
//!    (`render`, behind the `pdf` feature)
//!
//! Text output never depends on the `pdf` feature.

pub mod block;
pub mod document;
pub mod document_layout;
pub mod emit;
pub mod error;
pub mod fonts;
pub mod model;
pub mod pipeline;
#[cfg(feature = "pdf")]
pub mod render;
pub mod sample;
pub mod sections;
pub mod text;

// Re-exports for convenience
pub use block::Block;
pub use emit::{Emitter, OutputFormat};
pub use error::{RenderError, Result};
pub use model::{Education, Experience, PersonalInfo, Project, ResumeData};
pub use pipeline::{generate_document, generate_text, save_document, save_text};
pub use sections::render_sections;
