// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// echoreport-export: the output side of an export action.
//
// Serialises the assembled report, derives its filename from the exam date,
// fingerprints the payload, and hands it to the platform: share first, and
// save directly when sharing is unavailable or fails.

pub mod filename;
pub mod integrity;
pub mod service;

pub use filename::report_filename;
pub use integrity::hash_bytes;
pub use service::ExportService;
