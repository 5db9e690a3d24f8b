// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// PDF writer: turn a `RenderedDocument` into PDF bytes using `printpdf` 0.8.
//
// printpdf 0.8 uses a data-oriented API: documents are built by constructing
// `PdfPage` structs containing `Vec<Op>` operation lists, then serialised via
// `PdfDocument::save()`. The model is top-left origin in millimetres; PDF is
// bottom-left origin in points, so every y is flipped against page height.

use echoreport_core::error::{EchoReportError, Result};
use printpdf::{
    BuiltinFont, Color, Line, LinePoint, Mm, Op, PaintMode, PdfDocument, PdfPage,
    PdfSaveOptions, PdfWarnMsg, Point, Polygon, PolygonRing, Pt, Rgb, TextItem, WindingOrder,
};
use tracing::{debug, instrument};

use crate::model::{FontWeight, Page, Primitive, RenderedDocument};
use crate::pdf::encoding::builtin_text;

/// Serialises rendered documents to PDF.
#[derive(Debug, Default)]
pub struct PdfWriter {
    /// Overrides the document title in the PDF /Info dictionary.
    title: Option<String>,
}

impl PdfWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a title for the PDF metadata.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = Some(title.into());
    }

    /// Serialise `document`, one PDF page per model page.
    #[instrument(skip_all, fields(pages = document.page_count()))]
    pub fn render(&self, document: &RenderedDocument) -> Result<Vec<u8>> {
        if document.page_count() == 0 {
            return Err(EchoReportError::PdfError("document has no pages".into()));
        }

        let title = self.title.as_deref().unwrap_or(document.title());
        let (width_mm, height_mm) = document.dimensions_mm();

        let mut doc = PdfDocument::new(title);
        let pages: Vec<PdfPage> = document
            .pages()
            .iter()
            .map(|page| PdfPage::new(Mm(width_mm), Mm(height_mm), page_ops(page, height_mm)))
            .collect();
        doc.with_pages(pages);

        let mut warnings: Vec<PdfWarnMsg> = Vec::new();
        let output = doc.save(&PdfSaveOptions::default(), &mut warnings);

        debug!(
            warnings = warnings.len(),
            bytes = output.len(),
            "PDF serialised"
        );
        Ok(output)
    }
}

fn page_ops(page: &Page, page_height_mm: f32) -> Vec<Op> {
    let mut ops = Vec::with_capacity(page.primitives.len() * 5);
    for primitive in &page.primitives {
        match primitive {
            Primitive::Text {
                x,
                y,
                text,
                size,
                weight,
            } => {
                let font = match weight {
                    FontWeight::Regular => BuiltinFont::Helvetica,
                    FontWeight::Bold => BuiltinFont::HelveticaBold,
                };
                ops.push(Op::StartTextSection);
                ops.push(Op::SetTextCursor {
                    pos: point(*x, *y, page_height_mm),
                });
                ops.push(Op::SetFontSizeBuiltinFont {
                    size: Pt(*size),
                    font,
                });
                ops.push(Op::WriteTextBuiltinFont {
                    items: vec![TextItem::Text(builtin_text(text).into_owned())],
                    font,
                });
                ops.push(Op::EndTextSection);
            }
            Primitive::Rule {
                x1,
                x2,
                y,
                thickness,
            } => {
                ops.push(Op::SaveGraphicsState);
                ops.push(Op::SetOutlineColor { col: black() });
                ops.push(Op::SetOutlineThickness {
                    pt: Mm(*thickness).into_pt(),
                });
                ops.push(Op::DrawLine {
                    line: Line {
                        points: vec![
                            line_point(*x1, *y, page_height_mm),
                            line_point(*x2, *y, page_height_mm),
                        ],
                        is_closed: false,
                    },
                });
                ops.push(Op::RestoreGraphicsState);
            }
            Primitive::FilledRect {
                x,
                y,
                width,
                height,
                rgb,
            } => {
                let bottom = y + height;
                // Graphics state is restored so later text keeps the default black fill.
                ops.push(Op::SaveGraphicsState);
                ops.push(Op::SetFillColor { col: color(*rgb) });
                ops.push(Op::DrawPolygon {
                    polygon: Polygon {
                        rings: vec![PolygonRing {
                            points: vec![
                                line_point(*x, *y, page_height_mm),
                                line_point(x + width, *y, page_height_mm),
                                line_point(x + width, bottom, page_height_mm),
                                line_point(*x, bottom, page_height_mm),
                            ],
                        }],
                        mode: PaintMode::Fill,
                        winding_order: WindingOrder::NonZero,
                    },
                });
                ops.push(Op::RestoreGraphicsState);
            }
        }
    }
    ops
}

/// Model coordinates (mm, top-left) to a PDF point (pt, bottom-left).
fn point(x_mm: f32, y_mm: f32, page_height_mm: f32) -> Point {
    Point {
        x: Mm(x_mm).into_pt(),
        y: Mm(page_height_mm - y_mm).into_pt(),
    }
}

fn line_point(x_mm: f32, y_mm: f32, page_height_mm: f32) -> LinePoint {
    LinePoint {
        p: point(x_mm, y_mm, page_height_mm),
        bezier: false,
    }
}

fn color(rgb: [u8; 3]) -> Color {
    let [r, g, b] = rgb.map(|c| f32::from(c) / 255.0);
    Color::Rgb(Rgb::new(r, g, b, None))
}

fn black() -> Color {
    color([0, 0, 0])
}
