// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Desktop bridge for builds without a native share sheet.
//
// Sharing is reported as unsupported, saves go to a fixed directory, and
// notices are written to the log.

use std::path::{Path, PathBuf};

use echoreport_core::ShareCaption;
use echoreport_core::error::{EchoReportError, Result};
use echoreport_core::notices::UserNotice;
use tracing::{info, warn};

use crate::traits::*;

/// Bridge that saves into `output_dir`.
#[derive(Debug, Clone)]
pub struct DesktopBridge {
    output_dir: PathBuf,
}

impl DesktopBridge {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }
}

impl PlatformBridge for DesktopBridge {
    fn platform_name(&self) -> &str {
        "Desktop"
    }
}

impl NativeShare for DesktopBridge {
    fn can_share_files(&self) -> bool {
        false
    }

    async fn share_file(
        &self,
        _document: &[u8],
        _filename: &str,
        _caption: &ShareCaption,
    ) -> Result<()> {
        warn!("NativeShare::share_file called on desktop bridge");
        Err(EchoReportError::PlatformUnavailable)
    }
}

impl NativeSave for DesktopBridge {
    fn save_file(&self, document: &[u8], filename: &str) -> Result<PathBuf> {
        std::fs::create_dir_all(&self.output_dir)?;
        let path = unique_path(&self.output_dir, filename);
        std::fs::write(&path, document)?;
        info!(path = %path.display(), bytes = document.len(), "report saved");
        Ok(path)
    }
}

impl NativeNotify for DesktopBridge {
    fn notify(&self, notice: &UserNotice) {
        info!(
            severity = ?notice.severity,
            suggestion = %notice.suggestion,
            "{}",
            notice.message
        );
    }
}

/// `dir/filename`, or `dir/stem (n).ext` if that already exists.
fn unique_path(dir: &Path, filename: &str) -> PathBuf {
    let candidate = dir.join(filename);
    if !candidate.exists() {
        return candidate;
    }
    let (stem, ext) = match filename.rsplit_once('.') {
        Some((stem, ext)) => (stem, format!(".{ext}")),
        None => (filename, String::new()),
    };
    (1..)
        .map(|n| dir.join(format!("{stem} ({n}){ext}")))
        .find(|path| !path.exists())
        .unwrap_or(candidate)
}
