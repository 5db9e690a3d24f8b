// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Output filename derivation: `<prefix>_<DD-MM-YYYY>.pdf`, or
// `<prefix>_<fallback>.pdf` when there is no usable exam date.

use echoreport_core::ReportConfig;
use echoreport_document::FieldSet;
use echoreport_document::schema::EXAM_DATE;

/// Characters that are unsafe in filenames on at least one supported platform.
const UNSAFE_CHARS: &[char] = &['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

/// Filename for the report built from `fields`.
pub fn report_filename(config: &ReportConfig, fields: &FieldSet) -> String {
    let token = fields
        .display_date(EXAM_DATE)
        .map(|date| sanitize(&date))
        .unwrap_or_else(|| sanitize(&config.filename_fallback));
    format!("{}_{token}.pdf", sanitize(&config.filename_prefix))
}

/// Replace separators and whitespace with `-`.
fn sanitize(raw: &str) -> String {
    raw.trim()
        .chars()
        .map(|c| {
            if UNSAFE_CHARS.contains(&c) || c.is_whitespace() {
                '-'
            } else {
                c
            }
        })
        .collect()
}
