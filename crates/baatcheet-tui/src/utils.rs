//! Text utilities for TUI rendering.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Display width of `text` in terminal cells.
pub fn display_width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

/// Wrap text with an indent prefix on every line.
///
/// Widths are measured in terminal cells. Breaks at the last space that
/// fits, or mid-word when a word is wider than the line.
pub fn wrap_text_indented(text: &str, width: usize, indent: &str) -> Vec<String> {
    let effective_width = width.saturating_sub(display_width(indent));

    if effective_width == 0 {
        return vec![format!("{}{}", indent, text)];
    }

    let mut lines = Vec::new();

    for line in text.lines() {
        if line.is_empty() {
            lines.push(indent.to_string());
            continue;
        }

        let chars: Vec<char> = line.chars().collect();
        let mut start = 0;

        while start < chars.len() {
            // Take as many chars as fit in effective_width cells
            let mut end = start;
            let mut used = 0;
            while end < chars.len() {
                let w = UnicodeWidthChar::width(chars[end]).unwrap_or(0);
                if used + w > effective_width && end > start {
                    break;
                }
                used += w;
                end += 1;
            }

            if end == chars.len() {
                let remaining: String = chars[start..].iter().collect();
                lines.push(format!("{}{}", indent, remaining));
                break;
            }

            // Prefer breaking at a space within the fitted run
            let break_offset = chars[start..end]
                .iter()
                .rposition(|&c| c == ' ')
                .filter(|&offset| offset > 0)
                .unwrap_or(end - start);
            let actual_end = start + break_offset;

            let chunk: String = chars[start..actual_end].iter().collect();
            lines.push(format!("{}{}", indent, chunk.trim_end()));

            // Skip past the space
            start = actual_end;
            while start < chars.len() && chars[start] == ' ' {
                start += 1;
            }
        }
    }

    if lines.is_empty() {
        lines.push(indent.to_string());
    }

    lines
}
