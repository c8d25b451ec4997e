//! Plain-text emitter – one output line per block, joined with `\n`.

use crate::block::{Block, HeadingLevel, Separator};
use crate::emit::Emitter;
use crate::error::Result;

/// Width of the `=` banner and `-` heading rules.
pub const RULE_WIDTH: usize = 80;

/// Prefix for list items, after the detail indent.
pub const BULLET: &str = "• ";

const DETAIL_INDENT: &str = "  ";

/// Renders blocks as UTF-8 plain text.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextEmitter;

impl TextEmitter {
    pub fn render(&self, blocks: &[Block]) -> String {
        render_text(blocks)
    }
}

impl Emitter for TextEmitter {
    fn name(&self) -> &'static str {
        "text"
    }

    fn extension(&self) -> &'static str {
        "txt"
    }

    fn emit(&self, blocks: &[Block]) -> Result<Vec<u8>> {
        Ok(render_text(blocks).into_bytes())
    }
}

/// Render `blocks` into the plain-text layout.
pub fn render_text(blocks: &[Block]) -> String {
    let mut lines: Vec<String> = Vec::with_capacity(blocks.len() + 8);

    for block in blocks {
        match block {
            Block::Heading { level, text } => {
                lines.push(text.clone());
                if *level == HeadingLevel::Section {
                    lines.push("-".repeat(RULE_WIDTH));
                }
            }
            Block::Paragraph(p) => {
                let indent = if p.detail { DETAIL_INDENT } else { "" };
                lines.push(format!("{indent}{}", p.text()));
            }
            Block::ListItem { text } => {
                lines.push(format!("{DETAIL_INDENT}{BULLET}{text}"));
            }
            Block::Separator {
                separator: Separator::HeaderEnd,
            } => {
                lines.push(String::new());
                lines.push("=".repeat(RULE_WIDTH));
                lines.push(String::new());
            }
            Block::Separator {
                separator: Separator::Blank,
            } => lines.push(String::new()),
        }
    }

    lines.join("\n")
}
