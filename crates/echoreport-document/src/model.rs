// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Document model: the ordered list of positioned primitives per page.
//
// Coordinates are millimetres from the top-left corner; `y` is the text
// baseline for text runs and the top edge for rectangles.

use echoreport_core::PaperSize;

/// Helvetica weight used for a text run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontWeight {
    Regular,
    Bold,
}

/// A single drawing instruction.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Text {
        x: f32,
        y: f32,
        text: String,
        size: f32,
        weight: FontWeight,
    },
    /// Horizontal rule from `x1` to `x2`.
    Rule {
        x1: f32,
        x2: f32,
        y: f32,
        thickness: f32,
    },
    FilledRect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        rgb: [u8; 3],
    },
}

/// One page of primitives, in draw order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    pub primitives: Vec<Primitive>,
}

impl Page {
    /// Text runs on this page, in draw order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.primitives.iter().filter_map(|p| match p {
            Primitive::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

/// The accumulated output of one render pass.
///
/// Always holds at least one page; the layout cursor appends further pages
/// as content overflows.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedDocument {
    title: String,
    width_mm: f32,
    height_mm: f32,
    pages: Vec<Page>,
}

impl RenderedDocument {
    pub fn new(title: impl Into<String>, paper_size: PaperSize) -> Self {
        let (w, h) = paper_size.dimensions_mm();
        Self {
            title: title.into(),
            width_mm: w as f32,
            height_mm: h as f32,
            pages: vec![Page::default()],
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Page dimensions in millimetres (width, height).
    pub fn dimensions_mm(&self) -> (f32, f32) {
        (self.width_mm, self.height_mm)
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Append a primitive to the last page.
    pub fn push(&mut self, primitive: Primitive) {
        if let Some(page) = self.pages.last_mut() {
            page.primitives.push(primitive);
        }
    }

    /// Start a fresh, empty page.
    pub fn start_page(&mut self) {
        self.pages.push(Page::default());
    }

    /// Every text run in the document, page by page.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.pages.iter().flat_map(Page::texts)
    }

    /// Whether any text run contains `needle`.
    pub fn contains_text(&self, needle: &str) -> bool {
        self.texts().any(|t| t.contains(needle))
    }
}
