// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Export service: one export action end to end.
//
// Layout and serialisation run synchronously; only the share hand-off
// awaits. One export may be in flight per service at a time.

use echoreport_bridge::traits::PlatformBridge;
use echoreport_core::error::{EchoReportError, Result};
use echoreport_core::notices::share_unsupported_notice;
use echoreport_core::{
    Disposition, ExportId, ExportReceipt, ReportConfig, SaveReason, ShareCaption,
};
use echoreport_document::{FieldSet, PdfWriter, ReportAssembler};
use tokio::sync::Mutex;
use tracing::{field, info, instrument, warn};

use crate::filename::report_filename;
use crate::integrity::hash_bytes;

/// Builds reports and hands them to a platform bridge.
pub struct ExportService<B> {
    bridge: B,
    config: ReportConfig,
    in_flight: Mutex<()>,
}

impl<B: PlatformBridge> ExportService<B> {
    pub fn new(bridge: B, config: ReportConfig) -> Self {
        Self {
            bridge,
            config,
            in_flight: Mutex::new(()),
        }
    }

    pub fn bridge(&self) -> &B {
        &self.bridge
    }

    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    /// Assemble, serialise, and deliver the report for `fields`.
    ///
    /// A cancelled share sheet and a share failure recovered by saving are
    /// both successful exports; the receipt's disposition says which path
    /// was taken. Fails with `ExportInProgress` while another export on this
    /// service is running, and with `InvalidConfig` when the layout does not
    /// fit the paper.
    #[instrument(
        skip_all,
        fields(export_id = field::Empty, platform = self.bridge.platform_name())
    )]
    pub async fn export(&self, fields: &FieldSet) -> Result<ExportReceipt> {
        let _guard = self.in_flight.try_lock().map_err(|_| {
            warn!("export requested while another is in flight");
            EchoReportError::ExportInProgress
        })?;

        self.config.validate()?;

        let id = ExportId::new();
        tracing::Span::current().record("export_id", field::display(&id));

        let document = ReportAssembler::new(&self.config).assemble(fields);
        let mut writer = PdfWriter::new();
        writer.set_title(self.config.share_title.clone());
        let bytes = writer.render(&document)?;

        let filename = report_filename(&self.config, fields);
        let document_hash = hash_bytes(&bytes);
        let disposition = self.deliver(&bytes, &filename).await?;

        info!(
            filename = %filename,
            pages = document.page_count(),
            bytes = bytes.len(),
            disposition = ?disposition,
            "export complete"
        );

        Ok(ExportReceipt {
            id,
            filename,
            page_count: document.page_count(),
            byte_len: bytes.len(),
            document_hash,
            disposition,
        })
    }

    /// Share `bytes`, falling back to a direct save.
    ///
    /// Only a failed save is an error.
    async fn deliver(&self, bytes: &[u8], filename: &str) -> Result<Disposition> {
        if !self.bridge.can_share_files() {
            let path = self.bridge.save_file(bytes, filename)?;
            self.bridge.notify(&share_unsupported_notice(filename));
            info!(path = %path.display(), "file sharing unsupported, saved directly");
            return Ok(Disposition::Saved {
                path,
                reason: SaveReason::ShareUnsupported,
            });
        }

        let caption = ShareCaption {
            title: self.config.share_title.clone(),
            text: self.config.share_text.clone(),
        };

        match self.bridge.share_file(bytes, filename, &caption).await {
            Ok(()) => Ok(Disposition::Shared),
            Err(e) if e.is_cancellation() => {
                info!("share dismissed by user");
                Ok(Disposition::ShareCancelled)
            }
            Err(e) => {
                warn!(error = %e, "share failed, saving directly");
                let path = self.bridge.save_file(bytes, filename)?;
                Ok(Disposition::Saved {
                    path,
                    reason: SaveReason::ShareFailed,
                })
            }
        }
    }
}
