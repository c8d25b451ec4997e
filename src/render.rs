//! PDF backend – takes a [`DocumentLayout`] and produces PDF bytes using
//! `printpdf` (v0.8 ops-based API) with the builtin Helvetica faces.

use printpdf::*;

use crate::document::{DocumentBackend, LIST_INDENT_PT};
use crate::document_layout::{DocumentLayout, TextBox};
use crate::error::Result;

const POINTS_TO_MM: f32 = 0.352778;

/// Encodes layouts as PDF via printpdf.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfBackend;

impl DocumentBackend for PdfBackend {
    fn name(&self) -> &'static str {
        "printpdf"
    }

    fn encode(&self, layout: &DocumentLayout) -> Result<Vec<u8>> {
        Ok(render_pdf(layout))
    }
}

/// Render a DocumentLayout into PDF bytes.
pub fn render_pdf(layout: &DocumentLayout) -> Vec<u8> {
    let page_w = Mm(layout.page_width_pt * POINTS_TO_MM);
    let page_h = Mm(layout.page_height_pt * POINTS_TO_MM);

    let mut doc = PdfDocument::new(&layout.title);
    let mut replaced = 0usize;

    let mut pages: Vec<PdfPage> = layout
        .pages
        .iter()
        .map(|page_layout| {
            let mut ops = Vec::new();
            for tbox in &page_layout.boxes {
                replaced += render_box(&mut ops, tbox, layout.page_height_pt);
            }
            PdfPage::new(page_w, page_h, ops)
        })
        .collect();

    // Ensure at least one page.
    if pages.is_empty() {
        pages.push(PdfPage::new(page_w, page_h, Vec::new()));
    }

    if replaced > 0 {
        log::warn!(
            "{replaced} character(s) have no WinAnsi glyph in the builtin fonts and were drawn as '?'"
        );
    }

    doc.with_pages(pages);
    doc.save(&PdfSaveOptions::default(), &mut Vec::new())
}

/// Convert a UTF-8 string to raw Windows-1252 bytes then wrap in a String so
/// printpdf writes the bytes unchanged into the PDF stream (builtin fonts use
/// WinAnsiEncoding, so each glyph is one byte 0x00–0xFF).
///
/// Returns the converted text and the number of characters replaced by `?`.
fn to_winlatin(s: &str) -> (String, usize) {
    let mut replaced = 0usize;
    let bytes: Vec<u8> = s
        .chars()
        .map(|c| match c {
            '\u{20AC}' => 0x80, // euro
            '\u{201A}' => 0x82, // single low-9 quote
            '\u{201E}' => 0x84, // double low-9 quote
            '\u{2026}' => 0x85, // ellipsis
            '\u{2018}' => 0x91, // left single quote
            '\u{2019}' => 0x92, // right single quote
            '\u{201C}' => 0x93, // left double quote
            '\u{201D}' => 0x94, // right double quote
            '\u{2022}' => 0x95, // bullet
            '\u{2013}' => 0x96, // en-dash
            '\u{2014}' => 0x97, // em-dash
            '\u{2122}' => 0x99, // trademark
            '\u{00A0}' => 0x20, // non-breaking space -> space
            c if (c as u32) < 256 => c as u8,
            _ => {
                replaced += 1;
                b'?'
            }
        })
        .collect();
    // SAFETY: this breaks `String`'s UTF-8 invariant on purpose: bytes
    // 0x80-0xFF are WinAnsi codes, not UTF-8. printpdf 0.8 only takes builtin
    // font text as a `String` and copies its bytes into the content stream
    // unchanged. The value must not escape this module or reach any `str`
    // API that decodes UTF-8 (`chars`, slicing, `Display`); only `as_bytes`
    // is sound. A printpdf upgrade that re-encodes text breaks this.
    #[allow(unsafe_code)]
    let text = unsafe { String::from_utf8_unchecked(bytes) };
    (text, replaced)
}

fn black() -> Color {
    Color::Rgb(Rgb {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        icc_profile: None,
    })
}

fn write_text(ops: &mut Vec<Op>, text: &str, x: f32, y: f32, size: f32, font: BuiltinFont) -> usize {
    let (encoded, replaced) = to_winlatin(text);
    ops.push(Op::StartTextSection);
    ops.push(Op::SetTextCursor {
        pos: Point { x: Pt(x), y: Pt(y) },
    });
    ops.push(Op::SetFontSizeBuiltinFont {
        size: Pt(size),
        font,
    });
    ops.push(Op::SetFillColor { col: black() });
    ops.push(Op::WriteTextBuiltinFont {
        items: vec![TextItem::Text(encoded)],
        font,
    });
    ops.push(Op::EndTextSection);
    replaced
}

/// Render one text box into PDF ops. Returns the count of replaced glyphs.
fn render_box(ops: &mut Vec<Op>, tbox: &TextBox, page_height: f32) -> usize {
    // PDF coordinate system: origin at bottom-left.
    // Our layout uses origin at top-left. Convert:
    let pdf_top = page_height - tbox.y;
    let mut replaced = 0;

    for line in &tbox.lines {
        let baseline_y = pdf_top - line.baseline;
        for span in &line.spans {
            if span.text.trim().is_empty() {
                continue;
            }
            let font = if span.bold {
                BuiltinFont::HelveticaBold
            } else {
                BuiltinFont::Helvetica
            };
            replaced += write_text(
                ops,
                &span.text,
                tbox.x + span.x_offset,
                baseline_y,
                tbox.font_size,
                font,
            );
        }
    }

    // List marker sits in the indent gutter, level with the first line.
    if let (Some(marker), Some(first)) = (&tbox.list_marker, tbox.lines.first()) {
        replaced += write_text(
            ops,
            marker,
            tbox.x - LIST_INDENT_PT + 4.0,
            pdf_top - first.baseline,
            tbox.font_size,
            BuiltinFont::Helvetica,
        );
    }

    replaced
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_layout() -> DocumentLayout {
        DocumentLayout {
            title: "Resume".into(),
            page_width_pt: 612.0,
            page_height_pt: 792.0,
            pages: Vec::new(),
        }
    }

    #[test]
    fn render_empty_page() {
        let bytes = render_pdf(&empty_layout());
        assert!(bytes.len() > 100, "PDF should have content");
        // PDF magic number
        assert_eq!(&bytes[0..5], b"%PDF-");
    }

    #[test]
    fn winlatin_maps_bullet_and_accents() {
        let (text, replaced) = to_winlatin("• José");
        assert_eq!(replaced, 0);
        assert_eq!(text.as_bytes(), &[0x95, b' ', b'J', b'o', b's', 0xE9]);
    }

    #[test]
    fn winlatin_counts_replacements() {
        let (text, replaced) = to_winlatin("李 Li");
        assert_eq!(replaced, 1);
        assert_eq!(text.as_bytes(), b"? Li");
    }
}
