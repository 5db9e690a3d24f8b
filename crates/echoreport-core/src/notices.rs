// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Plain-language notices for clinicians.
//
// Export errors and fallback paths are mapped to a short message plus a
// suggestion. The severity drives how the host UI presents the notice.

use crate::error::EchoReportError;

/// How prominently a notice should be shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Informational: the export completed, but not the way the user asked.
    Info,
    /// Retrying the export is likely to work.
    Transient,
    /// The user must change something before retrying.
    ActionRequired,
    /// Cannot be fixed by retrying.
    Permanent,
}

/// A human-readable notice with an actionable suggestion.
#[derive(Debug, Clone)]
pub struct UserNotice {
    /// Plain English summary (shown as a heading).
    pub message: String,
    /// What the user should do next (shown as body text).
    pub suggestion: String,
    pub severity: Severity,
}

/// Notice raised when the platform has no file-share support and the report
/// was saved directly instead.
pub fn share_unsupported_notice(filename: &str) -> UserNotice {
    UserNotice {
        message: "Sharing isn't available on this device.".into(),
        suggestion: format!("The report was saved as {filename} instead."),
        severity: Severity::Info,
    }
}

/// Convert an `EchoReportError` into a notice a clinician can act on.
pub fn humanize_error(err: &EchoReportError) -> UserNotice {
    match err {
        EchoReportError::FieldSet(detail) => UserNotice {
            message: "The exam form could not be read.".into(),
            suggestion: format!("Check the form was saved completely, then export again. ({detail})"),
            severity: Severity::ActionRequired,
        },

        EchoReportError::InvalidConfig(detail) => UserNotice {
            message: "The report settings don't fit the page.".into(),
            suggestion: format!("Adjust or remove the settings file to use the defaults. ({detail})"),
            severity: Severity::ActionRequired,
        },

        EchoReportError::PdfError(detail) => UserNotice {
            message: "The report could not be created.".into(),
            suggestion: format!("Try exporting again. ({detail})"),
            severity: Severity::Transient,
        },

        EchoReportError::ExportInProgress => UserNotice {
            message: "A report is already being exported.".into(),
            suggestion: "Wait for the current export to finish.".into(),
            severity: Severity::Transient,
        },

        EchoReportError::ShareCancelled => UserNotice {
            message: "Sharing was cancelled.".into(),
            suggestion: "Export again whenever you are ready.".into(),
            severity: Severity::Info,
        },

        EchoReportError::Share(_) | EchoReportError::Bridge(_) => UserNotice {
            message: "The report couldn't be shared.".into(),
            suggestion: "It has been saved to this device instead.".into(),
            severity: Severity::Info,
        },

        EchoReportError::Io(e) => {
            if e.kind() == std::io::ErrorKind::PermissionDenied {
                UserNotice {
                    message: "The report couldn't be saved.".into(),
                    suggestion: "This app isn't allowed to write to the save folder. Choose another folder in settings.".into(),
                    severity: Severity::ActionRequired,
                }
            } else {
                UserNotice {
                    message: "The report couldn't be saved.".into(),
                    suggestion: format!("Make sure the device has free space, then try again. ({e})"),
                    severity: Severity::Transient,
                }
            }
        }

        EchoReportError::Serialization(e) => UserNotice {
            message: "Saved settings could not be read.".into(),
            suggestion: format!("Default settings will be used. ({e})"),
            severity: Severity::Permanent,
        },

        EchoReportError::PlatformUnavailable => UserNotice {
            message: "This feature isn't available on this device.".into(),
            suggestion: "The report can still be saved and sent from another app.".into(),
            severity: Severity::Permanent,
        },
    }
}
