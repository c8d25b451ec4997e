//! Document emitter – lays blocks out on fixed-size pages and hands the
//! resulting [`DocumentLayout`] to a pluggable encoding backend.
//!
//! Handles:
//! - US Letter pages with 0.75 in margins (configurable)
//! - Per-role paragraph styles (name, contact lines, headings, body)
//! - Word wrapping with bold runs for emphasized labels
//! - Page breaks between paragraphs, and line-level splits for paragraphs
//!   taller than a page

use crate::block::{Block, HeadingLevel, Run, Separator};
use crate::document_layout::*;
use crate::emit::Emitter;
use crate::error::{RenderError, Result};
use crate::fonts::{wrap_runs, FontMetrics, WrappedLine};
use crate::model::ResumeData;

pub const POINTS_PER_INCH: f32 = 72.0;

/// US Letter, 8.5 in × 11 in.
pub const LETTER_WIDTH_PT: f32 = 8.5 * POINTS_PER_INCH;
pub const LETTER_HEIGHT_PT: f32 = 11.0 * POINTS_PER_INCH;

/// Default page margin, 0.75 in on every side.
pub const PAGE_MARGIN_PT: f32 = 0.75 * POINTS_PER_INCH;

/// Horizontal indent of list item text; the marker sits in this gutter.
pub const LIST_INDENT_PT: f32 = 14.0;

/// Glyph drawn in front of list items.
pub const LIST_MARKER: &str = "•";

const CAPABILITY: &str = "PDF";
const REMEDIATION: &str =
    "enable the `pdf` cargo feature (e.g. `cargo build --features pdf`) or supply a DocumentBackend";

/// Typography for one kind of paragraph.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParagraphStyle {
    pub font_size: f32,
    pub bold: bool,
    pub align: TextAlign,
    /// Space above the paragraph; dropped at the top of a page.
    pub space_before: f32,
    pub space_after: f32,
}

/// Styles for every block role.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DocumentStyles {
    /// The person's name.
    pub title: ParagraphStyle,
    /// Contact and link lines.
    pub contact: ParagraphStyle,
    /// Section headings.
    pub heading: ParagraphStyle,
    /// Body text and list items.
    pub body: ParagraphStyle,
    /// Vertical gap after the header.
    pub header_spacer: f32,
    /// Vertical gap after each entry.
    pub entry_spacer: f32,
}

impl Default for DocumentStyles {
    fn default() -> Self {
        Self {
            title: ParagraphStyle {
                font_size: 18.0,
                bold: true,
                align: TextAlign::Center,
                space_before: 0.0,
                space_after: 6.0,
            },
            contact: ParagraphStyle {
                font_size: 10.0,
                bold: false,
                align: TextAlign::Center,
                space_before: 0.0,
                space_after: 12.0,
            },
            heading: ParagraphStyle {
                font_size: 12.0,
                bold: true,
                align: TextAlign::Left,
                space_before: 12.0,
                space_after: 6.0,
            },
            body: ParagraphStyle {
                font_size: 10.0,
                bold: false,
                align: TextAlign::Left,
                space_before: 0.0,
                space_after: 6.0,
            },
            header_spacer: 0.2 * POINTS_PER_INCH,
            entry_spacer: 0.1 * POINTS_PER_INCH,
        }
    }
}

/// Page geometry and typography for the document emitter.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentConfig {
    /// Title embedded in the PDF metadata. When `None` the name heading is
    /// used; see [`DocumentConfig::titled_for`] for the person's name as written.
    pub title: Option<String>,
    /// Page width in points (default: Letter = 612).
    pub page_width: f32,
    /// Page height in points (default: Letter = 792).
    pub page_height: f32,
    /// Margin on all four sides, in points (default: 54).
    pub page_margin: f32,
    pub styles: DocumentStyles,
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            title: None,
            page_width: LETTER_WIDTH_PT,
            page_height: LETTER_HEIGHT_PT,
            page_margin: PAGE_MARGIN_PT,
            styles: DocumentStyles::default(),
        }
    }
}

impl DocumentConfig {
    pub fn content_width(&self) -> f32 {
        self.page_width - 2.0 * self.page_margin
    }

    pub fn content_height(&self) -> f32 {
        self.page_height - 2.0 * self.page_margin
    }

    /// Use the person's name as the metadata title unless one is set.
    pub fn titled_for(mut self, data: &ResumeData) -> Self {
        if self.title.is_none() {
            self.title = Some(data.personal_info.name.clone());
        }
        self
    }
}

// ---------------------------------------------------------------------------
// Encoding backends
// ---------------------------------------------------------------------------

/// Encodes a finished layout into document bytes.
pub trait DocumentBackend {
    fn name(&self) -> &'static str;
    fn encode(&self, layout: &DocumentLayout) -> Result<Vec<u8>>;
}

/// The backend compiled into this build, if any.
pub fn default_backend() -> Option<Box<dyn DocumentBackend>> {
    #[cfg(feature = "pdf")]
    {
        Some(Box::new(crate::render::PdfBackend))
    }
    #[cfg(not(feature = "pdf"))]
    {
        None
    }
}

fn unavailable() -> RenderError {
    RenderError::CapabilityUnavailable {
        capability: CAPABILITY,
        remediation: REMEDIATION,
    }
}

// ---------------------------------------------------------------------------
// Emitter
// ---------------------------------------------------------------------------

/// Paginated-document emitter.
pub struct DocumentEmitter {
    config: DocumentConfig,
    backend: Option<Box<dyn DocumentBackend>>,
}

impl DocumentEmitter {
    /// Emitter using the backend compiled into this build.
    pub fn new(config: DocumentConfig) -> Self {
        Self {
            config,
            backend: default_backend(),
        }
    }

    /// Default-styled emitter titled after the person in `data`.
    pub fn for_resume(data: &ResumeData) -> Self {
        Self::new(DocumentConfig::default().titled_for(data))
    }

    pub fn with_backend(config: DocumentConfig, backend: Box<dyn DocumentBackend>) -> Self {
        Self {
            config,
            backend: Some(backend),
        }
    }

    /// Emitter that can lay out pages but never encode them.
    pub fn without_backend(config: DocumentConfig) -> Self {
        Self {
            config,
            backend: None,
        }
    }

    pub fn config(&self) -> &DocumentConfig {
        &self.config
    }

    /// Whether [`Emitter::emit`] can produce bytes.
    pub fn is_available(&self) -> bool {
        self.backend.is_some()
    }

    /// The encoding backend, or `CapabilityUnavailable`.
    pub fn backend(&self) -> Result<&dyn DocumentBackend> {
        self.backend.as_deref().ok_or_else(unavailable)
    }

    /// Lay `blocks` out into pages. Needs no backend.
    pub fn layout(&self, blocks: &[Block]) -> DocumentLayout {
        paginate(blocks, &self.config)
    }
}

impl Emitter for DocumentEmitter {
    fn name(&self) -> &'static str {
        "document"
    }

    fn extension(&self) -> &'static str {
        "pdf"
    }

    fn emit(&self, blocks: &[Block]) -> Result<Vec<u8>> {
        let backend = self.backend()?;
        let layout = self.layout(blocks);
        log::debug!(
            "Encoding {} page(s) with the {} backend",
            layout.page_count(),
            backend.name()
        );
        backend.encode(&layout)
    }
}

// ---------------------------------------------------------------------------
// Pagination
// ---------------------------------------------------------------------------

/// Lay `blocks` out on pages according to `config`.
pub fn paginate(blocks: &[Block], config: &DocumentConfig) -> DocumentLayout {
    let mut paginator = Paginator::new(config);
    let styles = &config.styles;

    for block in blocks {
        match block {
            Block::Heading { level, text } => {
                let style = match level {
                    HeadingLevel::Title => &styles.title,
                    HeadingLevel::Subtitle => &styles.contact,
                    HeadingLevel::Section => &styles.heading,
                };
                paginator.place(&[Run::plain(text.clone())], style, 0.0, None);
            }
            Block::Paragraph(p) => paginator.place(&p.runs, &styles.body, 0.0, None),
            Block::ListItem { text } => paginator.place(
                &[Run::plain(text.clone())],
                &styles.body,
                LIST_INDENT_PT,
                Some(LIST_MARKER),
            ),
            Block::Separator { separator } => paginator.advance(match separator {
                Separator::HeaderEnd => styles.header_spacer,
                Separator::Blank => styles.entry_spacer,
            }),
        }
    }

    let title = config.title.clone().unwrap_or_else(|| {
        blocks
            .iter()
            .find_map(|b| match b {
                Block::Heading {
                    level: HeadingLevel::Title,
                    text,
                } => Some(text.clone()),
                _ => None,
            })
            .unwrap_or_else(|| "Resume".to_string())
    });

    let layout = paginator.finish(title);
    log::debug!(
        "Laid out {} blocks on {} page(s)",
        blocks.len(),
        layout.page_count()
    );
    layout
}

struct Paginator<'a> {
    config: &'a DocumentConfig,
    metrics: FontMetrics,
    pages: Vec<PageLayout>,
    current: PageLayout,
    /// Vertical position within the content area of the current page.
    cursor: f32,
}

impl<'a> Paginator<'a> {
    fn new(config: &'a DocumentConfig) -> Self {
        Self {
            config,
            metrics: FontMetrics::default(),
            pages: Vec::new(),
            current: PageLayout {
                page_index: 0,
                boxes: Vec::new(),
            },
            cursor: 0.0,
        }
    }

    fn new_page(&mut self) {
        let next = PageLayout {
            page_index: self.pages.len() + 1,
            boxes: Vec::new(),
        };
        self.pages.push(std::mem::replace(&mut self.current, next));
        self.cursor = 0.0;
    }

    /// Vertical whitespace; ignored at the top of a page.
    fn advance(&mut self, dy: f32) {
        if !self.current.boxes.is_empty() {
            self.cursor += dy;
        }
    }

    fn place(&mut self, runs: &[Run], style: &ParagraphStyle, indent: f32, marker: Option<&str>) {
        let runs: Vec<Run> = runs
            .iter()
            .map(|r| Run {
                text: r.text.clone(),
                strong: r.strong || style.bold,
            })
            .collect();
        let width = self.config.content_width() - indent;
        let lines = wrap_runs(&runs, style.font_size, width, &self.metrics);
        let line_height = self.metrics.line_height(style.font_size);
        let content_height = self.config.content_height();

        self.advance(style.space_before);

        let mut remaining = &lines[..];
        let mut marker = marker;
        while !remaining.is_empty() {
            let needed = remaining.len() as f32 * line_height;
            let fits = self.cursor + needed <= content_height;
            if !fits && !self.current.boxes.is_empty() {
                self.new_page();
                continue;
            }

            // Either everything fits, or the page is empty and we take as
            // many lines as it holds (at least one).
            let take = if fits {
                remaining.len()
            } else {
                let room = ((content_height - self.cursor) / line_height).floor() as usize;
                room.clamp(1, remaining.len())
            };

            let tbox = self.build_box(&remaining[..take], style, indent, width, marker.take());
            self.cursor += tbox.height;
            self.current.boxes.push(tbox);

            remaining = &remaining[take..];
            if !remaining.is_empty() {
                self.new_page();
            }
        }

        self.cursor += style.space_after;
    }

    fn build_box(
        &self,
        lines: &[WrappedLine],
        style: &ParagraphStyle,
        indent: f32,
        width: f32,
        marker: Option<&str>,
    ) -> TextBox {
        let line_height = self.metrics.line_height(style.font_size);
        let ascender = self.metrics.ascender_pt(style.font_size);

        let text_lines = lines
            .iter()
            .enumerate()
            .map(|(i, line)| {
                let spans = &line.spans;
                let shift = match style.align {
                    TextAlign::Left => 0.0,
                    TextAlign::Center => {
                        let line_w = self.metrics.line_width(spans, style.font_size);
                        ((width - line_w) / 2.0).max(0.0)
                    }
                };
                TextLine {
                    baseline: i as f32 * line_height + ascender,
                    spans: spans
                        .iter()
                        .map(|s| TextSpan {
                            text: s.text.clone(),
                            bold: s.bold,
                            x_offset: s.x_offset + shift,
                        })
                        .collect(),
                    break_before: line.break_before.clone(),
                }
            })
            .collect();

        TextBox {
            x: self.config.page_margin + indent,
            y: self.config.page_margin + self.cursor,
            width,
            height: lines.len() as f32 * line_height,
            font_size: style.font_size,
            line_height,
            align: style.align,
            list_marker: marker.map(str::to_string),
            lines: text_lines,
        }
    }

    fn finish(mut self, title: String) -> DocumentLayout {
        if !self.current.boxes.is_empty() || self.pages.is_empty() {
            self.pages.push(self.current);
        }
        DocumentLayout {
            title,
            page_width_pt: self.config.page_width,
            page_height_pt: self.config.page_height,
            pages: self.pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Experience, PersonalInfo, Project};
    use crate::sections::render_sections;

    struct FakeBackend;

    impl DocumentBackend for FakeBackend {
        fn name(&self) -> &'static str {
            "fake"
        }

        fn encode(&self, layout: &DocumentLayout) -> Result<Vec<u8>> {
            Ok(layout.plain_text().into_bytes())
        }
    }

    fn minimal_blocks() -> Vec<Block> {
        render_sections(&ResumeData::new(PersonalInfo::new(
            "Minimal User",
            "min@test.com",
            "555-0000",
        )))
    }

    fn all_boxes(layout: &DocumentLayout) -> impl Iterator<Item = &TextBox> {
        layout.pages.iter().flat_map(|p| p.boxes.iter())
    }

    #[test]
    fn letter_defaults() {
        let config = DocumentConfig::default();
        assert_eq!(config.page_width, 612.0);
        assert_eq!(config.page_height, 792.0);
        assert_eq!(config.page_margin, 54.0);
        assert_eq!(config.content_width(), 504.0);
    }

    #[test]
    fn single_page() {
        let layout = paginate(&minimal_blocks(), &DocumentConfig::default());
        assert_eq!(layout.page_count(), 1);
        assert_eq!(layout.title, "MINIMAL USER");
        assert_eq!(layout.plain_text(), "MINIMAL USER\nmin@test.com | 555-0000");
    }

    #[test]
    fn name_is_bold_and_centered() {
        let layout = paginate(&minimal_blocks(), &DocumentConfig::default());
        let name = &layout.pages[0].boxes[0];
        assert_eq!(name.font_size, 18.0);
        assert_eq!(name.align, TextAlign::Center);
        assert!(name.lines[0].spans.iter().all(|s| s.bold));
        assert!(name.lines[0].spans[0].x_offset > 0.0);
        let contact = &layout.pages[0].boxes[1];
        assert!(contact.lines[0].spans.iter().all(|s| !s.bold));
    }

    #[test]
    fn boxes_stay_within_margins() {
        let config = DocumentConfig::default();
        let layout = paginate(&render_sections(&crate::sample::sample_resume()), &config);
        for tbox in all_boxes(&layout) {
            assert!(tbox.x >= config.page_margin);
            assert!(tbox.y >= config.page_margin);
            assert!(
                tbox.y + tbox.height <= config.page_height - config.page_margin + 0.01,
                "box bottom {} below margin",
                tbox.y + tbox.height
            );
        }
    }

    #[test]
    fn long_words_stay_inside_right_margin() {
        let config = DocumentConfig::default();
        let right_edge = config.page_width - config.page_margin;
        let metrics = FontMetrics::default();
        let url = format!("github.com/{}", "a".repeat(110));
        let mut data = ResumeData::new(PersonalInfo::new("Long Link", "l@l.com", "3"));
        data.personal_info.website = Some(url.clone());
        data.projects.push(Project {
            name: "Link".into(),
            description: "x".repeat(150),
            technologies: vec!["Rust".into()],
            url: Some(url.clone()),
        });

        let layout = paginate(&render_sections(&data), &config);
        for tbox in all_boxes(&layout) {
            for line in &tbox.lines {
                for span in &line.spans {
                    let end = tbox.x
                        + span.x_offset
                        + metrics.measure_text_width(&span.text, tbox.font_size, span.bold);
                    assert!(
                        end <= right_edge + 0.01,
                        "span {:?} ends at {end}, past {right_edge}",
                        span.text
                    );
                }
            }
        }
        let text = layout.plain_text();
        assert!(text.contains(&format!("URL: {url}")));
        assert!(text.contains(&"x".repeat(150)));
    }

    #[test]
    fn titled_for_keeps_explicit_title() {
        let data = ResumeData::new(PersonalInfo::new("Ana Ruiz", "a@r.com", "4"));
        assert_eq!(
            DocumentConfig::default().titled_for(&data).title.as_deref(),
            Some("Ana Ruiz")
        );
        let config = DocumentConfig {
            title: Some("CV".into()),
            ..DocumentConfig::default()
        };
        assert_eq!(config.titled_for(&data).title.as_deref(), Some("CV"));
    }

    #[test]
    fn multiple_pages() {
        let mut data = ResumeData::new(PersonalInfo::new("Busy Person", "b@p.com", "1"));
        for i in 0..40 {
            data.experience.push(Experience {
                title: format!("Role {i}"),
                company: "Corp".into(),
                location: "Remote".into(),
                start_date: "2001".into(),
                end_date: "2002".into(),
                responsibilities: vec!["Did work".into(), "Did more work".into()],
            });
        }
        let layout = paginate(&render_sections(&data), &DocumentConfig::default());
        assert!(
            layout.page_count() > 1,
            "Expected multiple pages, got {}",
            layout.page_count()
        );
        for (i, page) in layout.pages.iter().enumerate() {
            assert_eq!(page.page_index, i);
        }
    }

    #[test]
    fn oversized_paragraph_splits_across_pages() {
        let mut data = ResumeData::new(PersonalInfo::new("Verbose", "v@x.com", "2"));
        data.summary = Some("word ".repeat(4000).trim_end().to_string());
        let layout = paginate(&render_sections(&data), &DocumentConfig::default());
        assert!(layout.page_count() > 1);
        let words: usize = all_boxes(&layout)
            .map(|b| b.text().split_whitespace().filter(|w| *w == "word").count())
            .sum();
        assert_eq!(words, 4000);
    }

    #[test]
    fn list_items_carry_marker_and_indent() {
        let blocks = vec![Block::list_item("Shipped")];
        let layout = paginate(&blocks, &DocumentConfig::default());
        let tbox = &layout.pages[0].boxes[0];
        assert_eq!(tbox.list_marker.as_deref(), Some(LIST_MARKER));
        assert_eq!(tbox.x, PAGE_MARGIN_PT + LIST_INDENT_PT);
        assert_eq!(tbox.text(), "Shipped");
    }

    #[test]
    fn missing_backend_is_reported() {
        let emitter = DocumentEmitter::without_backend(DocumentConfig::default());
        assert!(!emitter.is_available());
        let err = emitter.emit(&minimal_blocks()).unwrap_err();
        assert!(err.is_capability_unavailable());
        assert!(err.to_string().contains("pdf"));
    }

    #[test]
    fn injected_backend_receives_layout() {
        let emitter = DocumentEmitter::with_backend(DocumentConfig::default(), Box::new(FakeBackend));
        assert!(emitter.is_available());
        let bytes = emitter.emit(&minimal_blocks()).unwrap();
        assert_eq!(
            String::from_utf8(bytes).unwrap(),
            "MINIMAL USER\nmin@test.com | 555-0000"
        );
    }

    #[test]
    fn default_backend_matches_feature() {
        assert_eq!(default_backend().is_some(), cfg!(feature = "pdf"));
    }
}
