//! Text measurement and word wrapping for the builtin Helvetica faces.
//!
//! No font files are embedded; widths come from an average-advance heuristic
//! that is close enough to keep wrapped lines inside the content box.

use crate::block::Run;
use crate::document_layout::TextSpan;

/// Average advance as a fraction of the font size.
const REGULAR_ADVANCE: f32 = 0.5;
/// Bold glyphs run about 10 % wider.
const BOLD_ADVANCE: f32 = 0.55;

/// Helvetica-like metrics for the builtin PDF fonts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontMetrics {
    /// Baseline offset below the top of a line, as a fraction of font size.
    pub ascender: f32,
    /// Line height as a multiple of font size.
    pub leading: f32,
}

impl Default for FontMetrics {
    fn default() -> Self {
        Self {
            ascender: 0.75,
            leading: 1.2,
        }
    }
}

impl FontMetrics {
    /// Width of `text` in points.
    pub fn measure_text_width(&self, text: &str, font_size: f32, bold: bool) -> f32 {
        let avg = if bold { BOLD_ADVANCE } else { REGULAR_ADVANCE };
        text.chars().count() as f32 * font_size * avg
    }

    pub fn line_height(&self, font_size: f32) -> f32 {
        font_size * self.leading
    }

    pub fn ascender_pt(&self, font_size: f32) -> f32 {
        font_size * self.ascender
    }

    /// Total width of a laid-out line.
    pub fn line_width(&self, spans: &[TextSpan], font_size: f32) -> f32 {
        spans
            .last()
            .map(|s| s.x_offset + self.measure_text_width(&s.text, font_size, s.bold))
            .unwrap_or(0.0)
    }
}

/// A whitespace-delimited word carrying its emphasis.
struct Word<'a> {
    text: &'a str,
    bold: bool,
    /// Whitespace between this word and the previous one, kept verbatim.
    gap: String,
}

fn split_words(runs: &[Run]) -> Vec<Word<'_>> {
    let mut words = Vec::new();
    let mut pending = String::new();
    for run in runs {
        let mut rest = run.text.as_str();
        loop {
            let trimmed = rest.trim_start();
            pending.push_str(&rest[..rest.len() - trimmed.len()]);
            rest = trimmed;
            if rest.is_empty() {
                break;
            }
            let end = rest.find(char::is_whitespace).unwrap_or(rest.len());
            let gap = std::mem::take(&mut pending);
            words.push(Word {
                text: &rest[..end],
                bold: run.strong,
                gap: if words.is_empty() { String::new() } else { gap },
            });
            rest = &rest[end..];
        }
    }
    words
}

/// Break `word` at character boundaries into pieces no wider than
/// `max_width`. Every piece holds at least one character.
fn split_long_word<'a>(
    word: &'a str,
    font_size: f32,
    bold: bool,
    max_width: f32,
    metrics: &FontMetrics,
) -> Vec<&'a str> {
    if metrics.measure_text_width(word, font_size, bold) <= max_width {
        return vec![word];
    }
    let mut pieces = Vec::new();
    let mut start = 0;
    let mut width = 0.0f32;
    let mut buf = [0u8; 4];
    for (idx, ch) in word.char_indices() {
        let w = metrics.measure_text_width(ch.encode_utf8(&mut buf), font_size, bold);
        if width + w > max_width && idx > start {
            pieces.push(&word[start..idx]);
            start = idx;
            width = 0.0;
        }
        width += w;
    }
    pieces.push(&word[start..]);
    pieces
}

/// One wrapped line.
#[derive(Debug, Clone, PartialEq)]
pub struct WrappedLine {
    /// Spans with x offsets relative to the line start.
    pub spans: Vec<TextSpan>,
    /// Whitespace the break before this line replaced. Empty for the first
    /// line and where a word too wide for the line was split.
    pub break_before: String,
}

/// Word-wrap `runs` to `max_width` points. Adjacent words of the same weight
/// share a span, and whitespace inside a line is kept as written. A word
/// wider than `max_width` is split across lines.
pub fn wrap_runs(
    runs: &[Run],
    font_size: f32,
    max_width: f32,
    metrics: &FontMetrics,
) -> Vec<WrappedLine> {
    let mut lines = Vec::new();
    let mut current: Vec<TextSpan> = Vec::new();
    let mut break_before = String::new();
    let mut width = 0.0f32;

    for word in split_words(runs) {
        let pieces = split_long_word(word.text, font_size, word.bold, max_width, metrics);
        for (i, text) in pieces.into_iter().enumerate() {
            let gap = if i == 0 { word.gap.as_str() } else { "" };
            let piece = format!("{gap}{text}");
            let piece_w = metrics.measure_text_width(&piece, font_size, word.bold);

            if width + piece_w > max_width && !current.is_empty() {
                lines.push(WrappedLine {
                    spans: std::mem::take(&mut current),
                    break_before: std::mem::replace(&mut break_before, gap.to_string()),
                });
                current.push(TextSpan {
                    text: text.to_string(),
                    bold: word.bold,
                    x_offset: 0.0,
                });
                width = metrics.measure_text_width(text, font_size, word.bold);
                continue;
            }

            match current.last_mut() {
                Some(last) if last.bold == word.bold => last.text.push_str(&piece),
                _ => current.push(TextSpan {
                    text: piece,
                    bold: word.bold,
                    x_offset: width,
                }),
            }
            width += piece_w;
        }
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(WrappedLine {
            spans: current,
            break_before,
        });
    }
    lines
}
