//! Document layout – the intermediate representation between pagination and
//! PDF encoding. This is the "frozen" structure that encodes exactly what
//! goes on each page.

use serde::{Deserialize, Serialize};

/// A complete paginated document ready for encoding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentLayout {
    /// Document title embedded in the PDF metadata.
    pub title: String,
    /// Width of each page in PDF points (1 pt = 1/72 inch).
    pub page_width_pt: f32,
    /// Height of each page in PDF points.
    pub page_height_pt: f32,
    /// Ordered list of pages.
    pub pages: Vec<PageLayout>,
}

/// One page of content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageLayout {
    pub page_index: usize,
    pub boxes: Vec<TextBox>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextAlign {
    Left,
    Center,
}

/// A positioned block of wrapped text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextBox {
    /// Position relative to page top-left, in points.
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,

    pub font_size: f32,
    pub line_height: f32,
    pub align: TextAlign,
    /// List bullet drawn to the left of the first line.
    pub list_marker: Option<String>,
    /// Pre-wrapped lines of text.
    pub lines: Vec<TextLine>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextLine {
    /// Baseline offset from the top of the box.
    pub baseline: f32,
    pub spans: Vec<TextSpan>,
    /// Whitespace the wrap replaced before this line; empty when a word
    /// too wide for the box was split.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub break_before: String,
}

/// A run of same-weight text within a line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextSpan {
    pub text: String,
    pub bold: bool,
    /// X offset from the left edge of the box.
    pub x_offset: f32,
}

impl DocumentLayout {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Text of every box, wrapped lines re-joined with the whitespace the
    /// wrap replaced, one box per line. List markers are left out.
    pub fn plain_text(&self) -> String {
        let mut out: Vec<String> = Vec::new();
        for page in &self.pages {
            for tbox in &page.boxes {
                out.push(tbox.text());
            }
        }
        out.join("\n")
    }

    /// Serialise to JSON.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }

    /// Deserialise from JSON.
    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| e.to_string())
    }
}

impl TextBox {
    pub fn text(&self) -> String {
        let mut out = String::new();
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                out.push_str(&line.break_before);
            }
            out.push_str(&line.text());
        }
        out
    }
}

impl TextLine {
    pub fn text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }
}
