// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Layout module: cursor, headers, field formatting, and segment expansion.

pub mod canvas;
pub mod cursor;
pub mod formatter;
pub mod sections;
pub mod segments;
pub mod text;

pub use canvas::Canvas;
pub use cursor::LayoutCursor;
pub use formatter::{Column, FieldFormatter};
pub use sections::SectionRenderer;
pub use segments::SegmentExpander;
