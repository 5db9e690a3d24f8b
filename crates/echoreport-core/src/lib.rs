// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Echo Report: Core types and error definitions shared across all crates.

pub mod config;
pub mod error;
pub mod notices;
pub mod types;

pub use config::{ReportConfig, UnitPolicy};
pub use error::EchoReportError;
pub use types::*;
