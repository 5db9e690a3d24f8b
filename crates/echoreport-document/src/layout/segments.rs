// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Segment expansion: the 17-segment wall-motion findings.
//
// Only runs when the RWMA trigger reads as yes. Abnormal segments become
// bullets laid out two per row; the alternation counts emitted bullets only,
// so a skipped segment never leaves a gap.

use echoreport_core::config::LayoutConfig;
use tracing::debug;

use crate::fields::FieldSet;
use crate::layout::canvas::Canvas;
use crate::model::FontWeight;
use crate::schema::{RWMA_PRESENT, SEGMENTS, SegmentDefinition};

const BULLET_INDENT: f32 = 2.0;

/// Expands segment findings under the short-axis view.
pub struct SegmentExpander<'a> {
    config: &'a LayoutConfig,
}

impl<'a> SegmentExpander<'a> {
    pub fn new(config: &'a LayoutConfig) -> Self {
        Self { config }
    }

    /// Segments with a reported value that differs from their baseline, in
    /// segment order. Empty when the trigger is not set.
    pub fn abnormal_segments<'f>(
        &self,
        fields: &'f FieldSet,
    ) -> Vec<(&'static SegmentDefinition, &'f str)> {
        if !fields.is_affirmative(RWMA_PRESENT) {
            return Vec::new();
        }
        SEGMENTS
            .iter()
            .filter_map(|seg| {
                fields
                    .text(seg.field)
                    .filter(|value| !value.eq_ignore_ascii_case(seg.normal))
                    .map(|value| (seg, value))
            })
            .collect()
    }

    /// Draw the bullets. Returns how many were emitted.
    pub fn render(&self, canvas: &mut Canvas, fields: &FieldSet) -> usize {
        let cfg = self.config;
        let findings = self.abnormal_segments(fields);
        let left_x = cfg.margin_left + BULLET_INDENT;
        let right_x = cfg.right_column_x;

        for (index, (segment, value)) in findings.iter().enumerate() {
            let bullet = format!("\u{2022} {}: {value}", segment.label);
            if index % 2 == 0 {
                canvas.ensure_space(cfg.line_height);
                canvas.text(left_x, bullet, cfg.body_font_size, FontWeight::Regular);
            } else {
                canvas.text(right_x, bullet, cfg.body_font_size, FontWeight::Regular);
                canvas.advance(cfg.line_height);
            }
        }
        if findings.len() % 2 == 1 {
            canvas.advance(cfg.line_height);
        }

        debug!(bullets = findings.len(), "segment findings expanded");
        findings.len()
    }
}
