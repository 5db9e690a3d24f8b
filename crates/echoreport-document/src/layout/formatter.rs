// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Field formatter: renders labelled values.
//
// Three shapes share one suppression rule (absent, blank or "Not Assessed"
// renders nothing):
//
// * inline: `Label:` then the bold value on the same baseline, in the left
//   or right column; the caller owns the row advance (`render_row`).
// * wrapped: `Label: value` word-wrapped to the column width; consumes its
//   own vertical space.
// * summary row: bold label in a fixed-width column, value beside it.

use echoreport_core::config::LayoutConfig;

use crate::fields::is_suppressed;
use crate::layout::canvas::Canvas;
use crate::layout::text::{chars_per_line, text_width_mm, wrap_text};
use crate::model::FontWeight;

/// Space reserved before a free-text block heading.
pub const TEXT_BLOCK_RESERVE: f32 = 20.0;

/// Horizontal placement of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Left,
    Right,
}

/// Renders single fields onto a canvas.
pub struct FieldFormatter<'a> {
    config: &'a LayoutConfig,
}

impl<'a> FieldFormatter<'a> {
    pub fn new(config: &'a LayoutConfig) -> Self {
        Self { config }
    }

    /// x-origin of `column`.
    pub fn column_x(&self, column: Column) -> f32 {
        match column {
            Column::Left => self.config.margin_left,
            Column::Right => self.config.right_column_x,
        }
    }

    /// Usable width from `column` to the right content edge.
    pub fn column_width(&self, column: Column) -> f32 {
        self.config.margin_left + self.config.content_width - self.column_x(column)
    }

    /// Render one field. Returns `false` when the value was suppressed and
    /// nothing was drawn.
    pub fn render_field(
        &self,
        canvas: &mut Canvas,
        label: &str,
        value: Option<&str>,
        column: Column,
        wrap: bool,
    ) -> bool {
        let Some(value) = value.filter(|v| !is_suppressed(v)) else {
            return false;
        };
        if wrap {
            let composed = format!("{label}: {}", value.trim());
            self.render_wrapped_lines(canvas, column, &composed, FontWeight::Regular);
        } else {
            self.render_inline(canvas, label, value.trim(), column);
        }
        true
    }

    fn render_inline(&self, canvas: &mut Canvas, label: &str, value: &str, column: Column) {
        let size = self.config.body_font_size;
        let x = self.column_x(column);
        canvas.ensure_space(self.config.row_height);
        canvas.text(x, format!("{label}:"), size, FontWeight::Regular);
        let value_x = x + text_width_mm(&format!("{label}: "), size);
        canvas.text(value_x, value, size, FontWeight::Bold);
    }

    /// Word-wrap `text` at `column` and advance one line height per line.
    fn render_wrapped_lines(
        &self,
        canvas: &mut Canvas,
        column: Column,
        text: &str,
        weight: FontWeight,
    ) -> usize {
        let cfg = self.config;
        let size = cfg.body_font_size;
        let x = self.column_x(column);
        let lines = wrap_text(text, chars_per_line(self.column_width(column), size));

        // Keep short blocks together; anything taller than a page breaks per line.
        let total = lines.len() as f32 * cfg.line_height;
        if total <= canvas.cursor().usable_height() {
            canvas.ensure_space(total);
        }
        for line in &lines {
            canvas.ensure_space(cfg.line_height);
            canvas.text(x, line.as_str(), size, weight);
            canvas.advance(cfg.line_height);
        }
        lines.len()
    }

    /// Two inline fields sharing a baseline. The row height is consumed only
    /// when at least one of them rendered.
    pub fn render_row(
        &self,
        canvas: &mut Canvas,
        left: (&str, Option<&str>),
        right: Option<(&str, Option<&str>)>,
    ) -> bool {
        let left_drawn = self.render_field(canvas, left.0, left.1, Column::Left, false);
        let right_drawn = right.is_some_and(|(label, value)| {
            self.render_field(canvas, label, value, Column::Right, false)
        });
        let drawn = left_drawn || right_drawn;
        if drawn {
            canvas.advance(self.config.row_height);
        }
        drawn
    }

    /// Bold label at the margin, value in the summary column. Long values
    /// wrap within the value column.
    pub fn render_summary_row(&self, canvas: &mut Canvas, label: &str, value: Option<&str>) -> bool {
        let Some(value) = value.filter(|v| !is_suppressed(v)) else {
            return false;
        };
        let cfg = self.config;
        let size = cfg.body_font_size;
        let value_x = cfg.margin_left + cfg.summary_value_offset;
        let value_width = cfg.content_width - cfg.summary_value_offset;
        let lines = wrap_text(value.trim(), chars_per_line(value_width, size));

        canvas.ensure_space(cfg.summary_row_height);
        canvas.text(cfg.margin_left, format!("{label}:"), size, FontWeight::Bold);
        for (i, line) in lines.iter().enumerate() {
            if i > 0 {
                canvas.advance(cfg.line_height);
                canvas.ensure_space(cfg.line_height);
            }
            canvas.text(value_x, line.as_str(), size, FontWeight::Regular);
        }
        canvas.advance(cfg.summary_row_height);
        true
    }

    /// Bold heading followed by wrapped free text, or `fallback` when the
    /// text is absent. Always rendered.
    pub fn render_text_block(
        &self,
        canvas: &mut Canvas,
        heading: &str,
        text: Option<&str>,
        fallback: &str,
    ) {
        let cfg = self.config;
        canvas.ensure_space(TEXT_BLOCK_RESERVE);
        canvas.text(cfg.margin_left, format!("{heading}:"), cfg.body_font_size, FontWeight::Bold);
        canvas.advance(cfg.line_height);

        let body = text.filter(|t| !is_suppressed(t)).unwrap_or(fallback);
        self.render_wrapped_lines(canvas, Column::Left, body, FontWeight::Regular);
    }
}

#[cfg(test)]
mod tests {
    use echoreport_core::PaperSize;

    use super::*;
    use crate::layout::cursor::LayoutCursor;
    use crate::model::{Primitive, RenderedDocument};

    fn canvas(config: &LayoutConfig) -> Canvas {
        Canvas::new(
            LayoutCursor::from_config(config, PaperSize::A4),
            RenderedDocument::new("t", PaperSize::A4),
        )
    }

    fn text_runs(doc: &RenderedDocument) -> Vec<(f32, f32, String, FontWeight)> {
        doc.pages()
            .iter()
            .flat_map(|p| p.primitives.iter())
            .filter_map(|p| match p {
                Primitive::Text {
                    x, y, text, weight, ..
                } => Some((*x, *y, text.clone(), *weight)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn suppressed_values_draw_nothing() {
        let config = LayoutConfig::default();
        let fmt = FieldFormatter::new(&config);
        let mut canvas = canvas(&config);
        for value in [None, Some(""), Some("  "), Some("Not Assessed")] {
            assert!(!fmt.render_field(&mut canvas, "Effusion", value, Column::Left, false));
            assert!(!fmt.render_field(&mut canvas, "Effusion", value, Column::Left, true));
        }
        assert_eq!(canvas.y(), 15.0);
        assert_eq!(canvas.finish().texts().count(), 0);
    }

    #[test]
    fn inline_places_bold_value_after_label() {
        let config = LayoutConfig::default();
        let fmt = FieldFormatter::new(&config);
        let mut canvas = canvas(&config);
        assert!(fmt.render_field(&mut canvas, "RVSP", Some("45 mmHg"), Column::Right, false));
        // inline mode leaves the advance to the caller
        assert_eq!(canvas.y(), 15.0);

        let runs = text_runs(&canvas.finish());
        assert_eq!(runs.len(), 2);
        assert_eq!(runs[0].0, 110.0);
        assert_eq!(runs[0].2, "RVSP:");
        assert_eq!(runs[1].2, "45 mmHg");
        assert_eq!(runs[1].3, FontWeight::Bold);
        assert!(runs[1].0 > runs[0].0);
        assert_eq!(runs[0].1, runs[1].1);
    }

    #[test]
    fn wrapped_advances_by_line_count() {
        let config = LayoutConfig::default();
        let fmt = FieldFormatter::new(&config);
        let mut canvas = canvas(&config);
        let long = "word ".repeat(60);
        assert!(fmt.render_field(&mut canvas, "Indication", Some(&long), Column::Left, true));

        let runs = text_runs(canvas.document());
        assert_eq!(runs.len(), 3);
        assert!(runs[0].2.starts_with("Indication: word"));
        assert_eq!(canvas.y(), 15.0 + 3.0 * 5.0);
    }

    #[test]
    fn row_only_advances_when_something_rendered() {
        let config = LayoutConfig::default();
        let fmt = FieldFormatter::new(&config);
        let mut canvas = canvas(&config);

        assert!(!fmt.render_row(&mut canvas, ("A", None), Some(("B", Some("Not Assessed")))));
        assert_eq!(canvas.y(), 15.0);

        assert!(fmt.render_row(&mut canvas, ("A", None), Some(("B", Some("Mild")))));
        assert_eq!(canvas.y(), 20.0);
    }

    #[test]
    fn summary_row_uses_value_column() {
        let config = LayoutConfig::default();
        let fmt = FieldFormatter::new(&config);
        let mut canvas = canvas(&config);
        assert!(fmt.render_summary_row(&mut canvas, "LV Size/Function", Some("Normal / Normal")));
        assert_eq!(canvas.y(), 21.0);

        let runs = text_runs(&canvas.finish());
        assert_eq!(runs[0], (20.0, 15.0, "LV Size/Function:".into(), FontWeight::Bold));
        assert_eq!(runs[1], (60.0, 15.0, "Normal / Normal".into(), FontWeight::Regular));
    }

    #[test]
    fn text_block_falls_back() {
        let config = LayoutConfig::default();
        let fmt = FieldFormatter::new(&config);
        let mut canvas = canvas(&config);
        fmt.render_text_block(&mut canvas, "General Comments", Some(""), "None recorded.");
        let doc = canvas.finish();
        assert!(doc.contains_text("General Comments:"));
        assert!(doc.contains_text("None recorded."));
    }

    #[test]
    fn wrapped_text_taller_than_a_page_breaks_per_line() {
        let config = LayoutConfig::default();
        let fmt = FieldFormatter::new(&config);
        let mut canvas = canvas(&config);
        let paragraphs = vec!["line"; 80].join("\n");
        fmt.render_text_block(&mut canvas, "General Comments", Some(&paragraphs), "-");

        assert!(canvas.cursor().page_index() >= 1);
        assert!(canvas.y() <= config.page_limit(PaperSize::A4));
        for (_, y, _, _) in text_runs(canvas.document()) {
            assert!(y <= config.page_limit(PaperSize::A4));
        }
    }
}
