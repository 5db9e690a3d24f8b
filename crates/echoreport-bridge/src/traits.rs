// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Platform-agnostic trait definitions for native capabilities used by the
// export pipeline.

use std::future::Future;
use std::path::PathBuf;

use echoreport_core::ShareCaption;
use echoreport_core::error::Result;
use echoreport_core::notices::UserNotice;

/// Unified bridge that groups the capabilities an export needs.
pub trait PlatformBridge: NativeShare + NativeSave + NativeNotify {
    /// Human-readable platform name (e.g. "iOS 17", "Desktop").
    fn platform_name(&self) -> &str;
}

/// Share documents via the OS share sheet.
pub trait NativeShare {
    /// Whether this target can accept a file share at all.
    fn can_share_files(&self) -> bool;

    /// Present the share sheet for `document`.
    ///
    /// Resolves to `Err(EchoReportError::ShareCancelled)` when the user
    /// dismisses the sheet; any other error is a genuine failure.
    fn share_file(
        &self,
        document: &[u8],
        filename: &str,
        caption: &ShareCaption,
    ) -> impl Future<Output = Result<()>> + Send;
}

/// Save documents directly to local storage.
pub trait NativeSave {
    /// Persist `document` under `filename`. Returns the path written.
    fn save_file(&self, document: &[u8], filename: &str) -> Result<PathBuf>;
}

/// Lightweight user-visible notifications (toast, banner, alert).
pub trait NativeNotify {
    fn notify(&self, notice: &UserNotice);
}
