// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Approximate Helvetica metrics and word wrapping.
//
// Widths are estimated from an average glyph advance rather than a real
// metrics table; they only need to be good enough to place a bold value
// after its label and to decide how many lines a wrapped value takes.

/// Millimetres per PDF point.
pub const MM_PER_PT: f32 = 0.3528;

/// Average Helvetica advance as a fraction of the font size.
const AVG_ADVANCE_EM: f32 = 0.50;

/// Estimated width of `text` in millimetres at `font_size_pt`.
pub fn text_width_mm(text: &str, font_size_pt: f32) -> f32 {
    text.chars().count() as f32 * char_width_mm(font_size_pt)
}

/// How many characters fit on a line of `width_mm` at `font_size_pt`.
pub fn chars_per_line(width_mm: f32, font_size_pt: f32) -> usize {
    ((width_mm / char_width_mm(font_size_pt)) as usize).max(1)
}

fn char_width_mm(font_size_pt: f32) -> f32 {
    AVG_ADVANCE_EM * font_size_pt * MM_PER_PT
}

/// Wrap `text` so that no line exceeds `max_chars` characters.
///
/// Splits on existing newlines first, then performs greedy word-wrap within
/// each paragraph. Words longer than `max_chars` are force-broken.
pub fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    let max_chars = max_chars.max(1);
    let mut result = Vec::new();

    for paragraph in text.split('\n') {
        let words: Vec<&str> = paragraph.split_whitespace().collect();
        if words.is_empty() {
            result.push(String::new());
            continue;
        }

        let mut current = String::new();
        let mut current_len = 0usize;

        for word in words {
            let word_len = word.chars().count();
            if word_len > max_chars {
                if !current.is_empty() {
                    result.push(std::mem::take(&mut current));
                }
                let chars: Vec<char> = word.chars().collect();
                let mut chunks = chars.chunks(max_chars).peekable();
                while let Some(chunk) = chunks.next() {
                    if chunks.peek().is_some() {
                        result.push(chunk.iter().collect());
                    } else {
                        current = chunk.iter().collect();
                        current_len = chunk.len();
                    }
                }
            } else if current.is_empty() {
                current.push_str(word);
                current_len = word_len;
            } else if current_len + 1 + word_len <= max_chars {
                current.push(' ');
                current.push_str(word);
                current_len += 1 + word_len;
            } else {
                result.push(std::mem::replace(&mut current, word.to_owned()));
                current_len = word_len;
            }
        }

        if !current.is_empty() {
            result.push(current);
        }
    }

    result
}
