// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Canvas: the cursor and the document it writes into, kept in step.
//
// Every page break seen by the cursor opens a new page in the document, so
// `document.page_count() == cursor.page_index() + 1` always holds.

use crate::layout::cursor::LayoutCursor;
use crate::model::{FontWeight, Primitive, RenderedDocument};

/// Mutable state of one render pass.
#[derive(Debug)]
pub struct Canvas {
    cursor: LayoutCursor,
    document: RenderedDocument,
}

impl Canvas {
    pub fn new(cursor: LayoutCursor, document: RenderedDocument) -> Self {
        Self { cursor, document }
    }

    pub fn cursor(&self) -> &LayoutCursor {
        &self.cursor
    }

    pub fn document(&self) -> &RenderedDocument {
        &self.document
    }

    /// Current baseline.
    pub fn y(&self) -> f32 {
        self.cursor.y()
    }

    /// Start a new page if `required` does not fit on this one.
    pub fn ensure_space(&mut self, required: f32) {
        if self.cursor.ensure_space(required) {
            self.document.start_page();
        }
    }

    pub fn advance(&mut self, dy: f32) {
        self.cursor.advance(dy);
    }

    /// Text run on the current baseline.
    pub fn text(&mut self, x: f32, text: impl Into<String>, size: f32, weight: FontWeight) {
        let y = self.cursor.y();
        self.text_at(x, y, text, size, weight);
    }

    /// Text run at an explicit baseline on the current page.
    pub fn text_at(
        &mut self,
        x: f32,
        y: f32,
        text: impl Into<String>,
        size: f32,
        weight: FontWeight,
    ) {
        self.document.push(Primitive::Text {
            x,
            y,
            text: text.into(),
            size,
            weight,
        });
    }

    /// Horizontal rule on the current baseline.
    pub fn rule(&mut self, x1: f32, x2: f32, thickness: f32) {
        let y = self.cursor.y();
        self.document.push(Primitive::Rule {
            x1,
            x2,
            y,
            thickness,
        });
    }

    /// Filled rectangle whose top edge sits on the current baseline.
    pub fn filled_rect(&mut self, x: f32, width: f32, height: f32, rgb: [u8; 3]) {
        let y = self.cursor.y();
        self.document.push(Primitive::FilledRect {
            x,
            y,
            width,
            height,
            rgb,
        });
    }

    /// Consume the canvas and return the finished document.
    pub fn finish(self) -> RenderedDocument {
        self.document
    }
}
