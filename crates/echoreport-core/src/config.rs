// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Report configuration.
//
// All geometry is in millimetres measured from the top-left corner of the
// page, which is how the layout engine reasons about position. The PDF
// backend converts to points with a bottom-left origin.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::PaperSize;
use crate::error::{EchoReportError, Result};

/// Smallest usable page height; every reserved block must fit on an empty page.
const MIN_USABLE_HEIGHT: f32 = 40.0;

/// How measurement fields behave when the magnitude is missing but a unit
/// suffix is configured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum UnitPolicy {
    /// A measurement without a magnitude is suppressed.
    #[default]
    RequireMagnitude,
    /// The unit is appended before the presence check, so a bare unit
    /// (e.g. `"cm"`) still renders.
    Lenient,
}

/// Page geometry and typography used by the layout engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Left margin and x-origin of the left column.
    pub margin_left: f32,
    /// First baseline on every page; the cursor resets here after a break.
    pub margin_top: f32,
    /// Distance from the bottom paper edge to the lowest baseline content
    /// may occupy before a page break.
    pub margin_bottom: f32,
    /// Width of banners, rules and wrapped text.
    pub content_width: f32,
    /// x-origin of the right column.
    pub right_column_x: f32,
    /// Offset of the summary value column from the left margin.
    pub summary_value_offset: f32,
    /// Baseline-to-baseline distance for wrapped text and bullet rows.
    pub line_height: f32,
    /// Vertical advance after a two-column field row.
    pub row_height: f32,
    /// Vertical advance after a summary row.
    pub summary_row_height: f32,
    /// Gap after the last row of an examination sub-section.
    pub section_gap: f32,
    pub title_font_size: f32,
    pub super_header_font_size: f32,
    pub sub_header_font_size: f32,
    pub body_font_size: f32,
    pub patient_font_size: f32,
    /// Fill colour of the super-section banner (RGB, 0-255).
    pub banner_rgb: [u8; 3],
}

impl LayoutConfig {
    /// Lowest baseline on a page of `paper`.
    pub fn page_limit(&self, paper: PaperSize) -> f32 {
        let (_, height) = paper.dimensions_mm();
        height as f32 - self.margin_bottom
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            margin_left: 20.0,
            margin_top: 15.0,
            margin_bottom: 17.0,
            content_width: 170.0,
            right_column_x: 110.0,
            summary_value_offset: 40.0,
            line_height: 5.0,
            row_height: 5.0,
            summary_row_height: 6.0,
            section_gap: 3.0,
            title_font_size: 16.0,
            super_header_font_size: 11.0,
            sub_header_font_size: 9.0,
            body_font_size: 8.0,
            patient_font_size: 9.0,
            banner_rgb: [233, 236, 239],
        }
    }
}

/// Settings for one export: page, layout, captions, and output naming.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Page size of the generated PDF.
    pub paper_size: PaperSize,
    pub layout: LayoutConfig,
    /// Heading printed at the top of the first page.
    pub report_title: String,
    /// Title passed to the platform share sheet (also the PDF /Title).
    pub share_title: String,
    /// Caption text passed to the platform share sheet.
    pub share_text: String,
    /// Filename stem before the date, e.g. `Echo_Report`.
    pub filename_prefix: String,
    /// Token used in place of the date when no valid exam date exists.
    pub filename_fallback: String,
    /// Directory for the direct-save fallback. `None` uses the working directory.
    pub output_dir: Option<PathBuf>,
    pub unit_policy: UnitPolicy,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            paper_size: PaperSize::A4,
            layout: LayoutConfig::default(),
            report_title: "POCUS PAH CARDIAC ECHO REPORT".into(),
            share_title: "Echo Report".into(),
            share_text: "POCUS PAH Cardiac Echo Report".into(),
            filename_prefix: "Echo_Report".into(),
            filename_fallback: "Export".into(),
            output_dir: None,
            unit_policy: UnitPolicy::default(),
        }
    }
}

impl ReportConfig {
    /// Lowest baseline on the configured paper.
    pub fn page_limit(&self) -> f32 {
        self.layout.page_limit(self.paper_size)
    }

    /// Check that the layout geometry fits the configured paper.
    pub fn validate(&self) -> Result<()> {
        let layout = &self.layout;
        let (width, height) = self.paper_size.dimensions_mm();
        let (width, height) = (width as f32, height as f32);
        let right_edge = layout.margin_left + layout.content_width;

        if layout.margin_left < 0.0 || right_edge > width {
            return Err(EchoReportError::InvalidConfig(format!(
                "content spans {}-{right_edge} mm but the page is {width} mm wide",
                layout.margin_left
            )));
        }
        if layout.right_column_x <= layout.margin_left || layout.right_column_x >= right_edge {
            return Err(EchoReportError::InvalidConfig(format!(
                "right column at {} mm lies outside the content area",
                layout.right_column_x
            )));
        }
        if layout.summary_value_offset <= 0.0 || layout.summary_value_offset >= layout.content_width {
            return Err(EchoReportError::InvalidConfig(format!(
                "summary value offset {} mm lies outside the content area",
                layout.summary_value_offset
            )));
        }
        let limit = self.page_limit();
        if layout.margin_top < 0.0 || limit > height || limit - layout.margin_top < MIN_USABLE_HEIGHT {
            return Err(EchoReportError::InvalidConfig(format!(
                "baselines {}-{limit} mm leave too little room on a {height} mm page",
                layout.margin_top
            )));
        }
        Ok(())
    }
}
