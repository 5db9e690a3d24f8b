// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>

//! Echo Report: platform bridge abstractions.
//!
//! The export pipeline talks to the host platform only through the traits in
//! [`traits`]: a file-share capability check, the share call itself, a
//! direct save, and a user-visible notice. Mobile hosts implement them over
//! their native share sheets; desktop and CI builds use [`desktop`].

pub mod desktop;
pub mod traits;

use std::path::PathBuf;

use echoreport_core::ReportConfig;

/// The bridge for the current target.
///
/// Desktop builds save into the configured output directory (or the working
/// directory) and cannot share.
pub fn platform_bridge(config: &ReportConfig) -> desktop::DesktopBridge {
    let dir = config
        .output_dir
        .clone()
        .unwrap_or_else(|| PathBuf::from("."));
    desktop::DesktopBridge::new(dir)
}
