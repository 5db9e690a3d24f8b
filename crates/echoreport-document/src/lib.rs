// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// echoreport-document: Layout and rendering for the Echo Report engine.
//
// Turns a validated exam field set into a paginated document model (pages of
// positioned text runs, rules and filled rectangles), then serialises that
// model to PDF bytes with `printpdf`. The layout side never touches the PDF
// library, so it can be tested on the model alone.

pub mod assembler;
pub mod fields;
pub mod layout;
pub mod model;
pub mod pdf;
pub mod schema;

// Re-export the primary structs so callers can use `echoreport_document::FieldSet` etc.
pub use assembler::ReportAssembler;
pub use fields::{FieldSet, FieldValue};
pub use model::{FontWeight, Page, Primitive, RenderedDocument};
pub use pdf::writer::PdfWriter;
