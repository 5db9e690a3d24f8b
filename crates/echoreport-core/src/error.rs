// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for Echo Report.

use thiserror::Error;

/// Top-level error type for all Echo Report operations.
#[derive(Debug, Error)]
pub enum EchoReportError {
    // -- Input --
    #[error("invalid field set: {0}")]
    FieldSet(String),

    // -- Configuration --
    #[error("invalid report settings: {0}")]
    InvalidConfig(String),

    // -- Document errors --
    #[error("PDF operation failed: {0}")]
    PdfError(String),

    // -- Export --
    #[error("an export is already in progress")]
    ExportInProgress,

    #[error("share was cancelled by the user")]
    ShareCancelled,

    #[error("share failed: {0}")]
    Share(String),

    // -- Storage / persistence --
    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    // -- Platform bridge --
    #[error("platform bridge error: {0}")]
    Bridge(String),

    #[error("feature not available on this platform")]
    PlatformUnavailable,
}

impl EchoReportError {
    /// Whether this error is the user dismissing the share sheet.
    pub fn is_cancellation(&self) -> bool {
        matches!(self, Self::ShareCancelled)
    }
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, EchoReportError>;
