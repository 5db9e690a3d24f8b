// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Section headers: the filled super-section banner and the ruled sub-section
// title. Both reserve their full height before drawing, so a header is never
// split from the page it starts on.

use echoreport_core::config::LayoutConfig;

use crate::layout::canvas::Canvas;
use crate::model::FontWeight;

/// Space reserved before a super-section banner.
pub const SUPER_HEADER_RESERVE: f32 = 15.0;
/// Space reserved before a sub-section title.
pub const SUB_HEADER_RESERVE: f32 = 10.0;

const BANNER_HEIGHT: f32 = 8.0;
const BANNER_TEXT_INSET: f32 = 2.0;
const BANNER_BASELINE: f32 = 6.0;
const SUPER_HEADER_ADVANCE: f32 = 12.0;
const SUB_TITLE_ADVANCE: f32 = 5.0;
const SUB_RULE_ADVANCE: f32 = 6.0;
const RULE_THICKNESS: f32 = 0.1;

/// Draws the two header tiers.
pub struct SectionRenderer<'a> {
    config: &'a LayoutConfig,
}

impl<'a> SectionRenderer<'a> {
    pub fn new(config: &'a LayoutConfig) -> Self {
        Self { config }
    }

    /// Banner spanning the content width with the upper-cased title inside.
    pub fn render_super_header(&self, canvas: &mut Canvas, title: &str) {
        let cfg = self.config;
        canvas.ensure_space(SUPER_HEADER_RESERVE);

        let top = canvas.y();
        canvas.filled_rect(cfg.margin_left, cfg.content_width, BANNER_HEIGHT, cfg.banner_rgb);
        canvas.text_at(
            cfg.margin_left + BANNER_TEXT_INSET,
            top + BANNER_BASELINE,
            title.to_uppercase(),
            cfg.super_header_font_size,
            FontWeight::Bold,
        );
        canvas.advance(SUPER_HEADER_ADVANCE);
    }

    /// Bold title with a thin rule underneath.
    pub fn render_sub_header(&self, canvas: &mut Canvas, title: &str) {
        let cfg = self.config;
        canvas.ensure_space(SUB_HEADER_RESERVE);

        canvas.text(cfg.margin_left, title, cfg.sub_header_font_size, FontWeight::Bold);
        canvas.advance(SUB_TITLE_ADVANCE);
        canvas.rule(
            cfg.margin_left,
            cfg.margin_left + cfg.content_width,
            RULE_THICKNESS,
        );
        canvas.advance(SUB_RULE_ADVANCE);
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

    #[test]
    fn super_header_upper_cases_and_advances() {
        let config = LayoutConfig::default();
        let mut canvas = canvas(&config);
        SectionRenderer::new(&config).render_super_header(&mut canvas, "Patient Information");

        assert_eq!(canvas.y(), 27.0);
        let doc = canvas.finish();
        let prims = &doc.pages()[0].primitives;
        assert!(matches!(prims[0], Primitive::FilledRect { width, height, .. } if width == 170.0 && height == 8.0));
        assert!(matches!(&prims[1], Primitive::Text { text, y, weight: FontWeight::Bold, .. } if text == "PATIENT INFORMATION" && *y == 21.0));
    }

    #[test]
    fn sub_header_keeps_title_case_and_draws_rule() {
        let config = LayoutConfig::default();
        let mut canvas = canvas(&config);
        SectionRenderer::new(&config).render_sub_header(&mut canvas, "Apical Views");

        assert_eq!(canvas.y(), 26.0);
        let doc = canvas.finish();
        let prims = &doc.pages()[0].primitives;
        assert!(matches!(&prims[0], Primitive::Text { text, .. } if text == "Apical Views"));
        assert!(matches!(prims[1], Primitive::Rule { x1, x2, y, .. } if x1 == 20.0 && x2 == 190.0 && y == 20.0));
    }

    #[test]
    fn super_header_moves_to_next_page_when_short_of_room() {
        let config = LayoutConfig::default();
        let mut canvas = canvas(&config);
        canvas.advance(255.0); // y = 270
        SectionRenderer::new(&config).render_super_header(&mut canvas, "Summary Findings");

        assert_eq!(canvas.cursor().page_index(), 1);
        let doc = canvas.finish();
        assert!(doc.pages()[0].primitives.is_empty());
        assert_eq!(doc.pages()[1].primitives.len(), 2);
    }
}
