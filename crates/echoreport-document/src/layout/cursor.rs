// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Layout cursor: vertical write position and page index.
//
// Invariant: `margin_top <= y <= page_limit` after every mutation.

use echoreport_core::PaperSize;
use echoreport_core::config::LayoutConfig;

/// Tracks where the next line goes.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutCursor {
    page_index: usize,
    y: f32,
    page_limit: f32,
    margin_top: f32,
}

impl LayoutCursor {
    /// A cursor at the top of the first page.
    pub fn new(margin_top: f32, page_limit: f32) -> Self {
        let page_limit = page_limit.max(margin_top);
        Self {
            page_index: 0,
            y: margin_top,
            page_limit,
            margin_top,
        }
    }

    /// A cursor for `config` laid out on `paper`.
    pub fn from_config(config: &LayoutConfig, paper: PaperSize) -> Self {
        Self::new(config.margin_top, config.page_limit(paper))
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn page_limit(&self) -> f32 {
        self.page_limit
    }

    pub fn margin_top(&self) -> f32 {
        self.margin_top
    }

    /// Height available between the top margin and the page limit.
    pub fn usable_height(&self) -> f32 {
        self.page_limit - self.margin_top
    }

    /// Whether `required` more units fit on the current page.
    pub fn fits(&self, required: f32) -> bool {
        self.y + required <= self.page_limit
    }

    /// Start a new page if `required` does not fit. Returns `true` when a
    /// page break happened.
    ///
    /// A cursor already at the top margin never breaks: a fresh page is as
    /// much room as there will ever be.
    pub fn ensure_space(&mut self, required: f32) -> bool {
        if self.fits(required) || self.y <= self.margin_top {
            return false;
        }
        self.page_index += 1;
        self.y = self.margin_top;
        true
    }

    /// Move down by `dy`, clamped to the page limit.
    pub fn advance(&mut self, dy: f32) {
        self.y = (self.y + dy.max(0.0)).min(self.page_limit);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fits_without_break() {
        let mut cursor = LayoutCursor::new(15.0, 280.0);
        cursor.advance(100.0);
        assert!(!cursor.ensure_space(50.0));
        assert_eq!(cursor.page_index(), 0);
        assert_eq!(cursor.y(), 115.0);
    }

    #[test]
    fn breaks_and_resets_to_margin() {
        let mut cursor = LayoutCursor::new(15.0, 280.0);
        cursor.advance(260.0);
        assert!(cursor.ensure_space(15.0));
        assert_eq!(cursor.page_index(), 1);
        assert_eq!(cursor.y(), 15.0);
    }

    #[test]
    fn exact_fit_does_not_break() {
        let mut cursor = LayoutCursor::new(15.0, 280.0);
        cursor.advance(250.0);
        assert!(!cursor.ensure_space(15.0));
    }

    #[test]
    fn advance_clamps_to_limit() {
        let mut cursor = LayoutCursor::new(15.0, 280.0);
        cursor.advance(1000.0);
        assert_eq!(cursor.y(), 280.0);
        assert!(cursor.ensure_space(0.5));
        assert_eq!(cursor.page_index(), 1);
    }

    #[test]
    fn limit_comes_from_paper_height() {
        let layout = LayoutConfig::default();
        assert_eq!(LayoutCursor::from_config(&layout, PaperSize::A4).page_limit(), 280.0);
        assert_eq!(LayoutCursor::from_config(&layout, PaperSize::A5).page_limit(), 193.0);
    }

    #[test]
    fn oversized_request_at_top_does_not_loop() {
        let mut cursor = LayoutCursor::new(15.0, 280.0);
        assert!(!cursor.ensure_space(500.0));
        assert_eq!(cursor.page_index(), 0);
    }
}
