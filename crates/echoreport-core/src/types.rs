// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for Echo Report exports.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for one export action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExportId(pub Uuid);

impl ExportId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ExportId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ExportId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Standard paper sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaperSize {
    A4,
    A5,
    Letter,
    Custom { width_mm: u32, height_mm: u32 },
}

impl PaperSize {
    /// Dimensions in millimetres (width, height).
    pub fn dimensions_mm(&self) -> (u32, u32) {
        match self {
            Self::A4 => (210, 297),
            Self::A5 => (148, 210),
            Self::Letter => (216, 279),
            Self::Custom {
                width_mm,
                height_mm,
            } => (*width_mm, *height_mm),
        }
    }
}

/// Title and caption handed to the platform share sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareCaption {
    pub title: String,
    pub text: String,
}

/// Why a report ended up saved directly instead of shared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SaveReason {
    /// The platform cannot share files at all.
    ShareUnsupported,
    /// The share call failed for a reason other than user cancellation.
    ShareFailed,
}

/// Terminal state of an export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Disposition {
    /// Handed to the platform share sheet and accepted.
    Shared,
    /// The user dismissed the share sheet. Nothing was saved.
    ShareCancelled,
    /// Written to local storage.
    Saved { path: PathBuf, reason: SaveReason },
}

/// Summary of a completed export.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportReceipt {
    pub id: ExportId,
    pub filename: String,
    pub page_count: usize,
    pub byte_len: usize,
    /// SHA-256 of the PDF payload, lowercase hex.
    pub document_hash: String,
    pub disposition: Disposition,
}
