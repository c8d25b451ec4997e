//! Blocks – the format-agnostic intermediate representation between the
//! section renderer and the emitters.
//!
//! A block carries content and a little semantic intent (heading role,
//! emphasis, detail lines), never markup or layout metrics. Every emitter
//! consumes the same `&[Block]`.

use serde::{Deserialize, Serialize};

/// Role of a heading block within the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeadingLevel {
    /// The person's name at the top of the document.
    Title,
    /// Contact and link lines directly under the title.
    Subtitle,
    /// Section heading such as `SKILLS`.
    Section,
}

/// Spacing between groups of blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Separator {
    /// Ends the header; emitters draw their banner/spacer here.
    HeaderEnd,
    /// Ends an entry or a single-paragraph section.
    Blank,
}

/// A piece of paragraph text, optionally emphasized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Run {
    pub text: String,
    pub strong: bool,
}

impl Run {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            strong: false,
        }
    }

    pub fn strong(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            strong: true,
        }
    }
}

/// A line of body text built from one or more runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paragraph {
    pub runs: Vec<Run>,
    /// Secondary line belonging to the entry above it (description, GPA, URL…).
    pub detail: bool,
}

impl Paragraph {
    /// Concatenated run text without any emphasis.
    pub fn text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Block {
    Heading { level: HeadingLevel, text: String },
    Paragraph(Paragraph),
    ListItem { text: String },
    Separator { separator: Separator },
}

impl Block {
    pub fn heading(level: HeadingLevel, text: impl Into<String>) -> Self {
        Block::Heading {
            level,
            text: text.into(),
        }
    }

    pub fn paragraph(runs: Vec<Run>) -> Self {
        Block::Paragraph(Paragraph {
            runs,
            detail: false,
        })
    }

    pub fn detail(text: impl Into<String>) -> Self {
        Block::Paragraph(Paragraph {
            runs: vec![Run::plain(text)],
            detail: true,
        })
    }

    pub fn list_item(text: impl Into<String>) -> Self {
        Block::ListItem { text: text.into() }
    }

    pub fn blank() -> Self {
        Block::Separator {
            separator: Separator::Blank,
        }
    }

    pub fn header_end() -> Self {
        Block::Separator {
            separator: Separator::HeaderEnd,
        }
    }

    /// Textual content of the block, or `None` for separators.
    pub fn content(&self) -> Option<String> {
        match self {
            Block::Heading { text, .. } | Block::ListItem { text } => Some(text.clone()),
            Block::Paragraph(p) => Some(p.text()),
            Block::Separator { .. } => None,
        }
    }
}

/// Serialise a block list to pretty JSON.
pub fn blocks_to_json(blocks: &[Block]) -> String {
    serde_json::to_string_pretty(blocks).unwrap_or_default()
}

/// Deserialise a block list from JSON.
pub fn blocks_from_json(json: &str) -> Result<Vec<Block>, String> {
    serde_json::from_str(json).map_err(|e| e.to_string())
}
