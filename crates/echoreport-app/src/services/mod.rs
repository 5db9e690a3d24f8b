// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Service layer: settings persistence and data directory resolution for the
// command-line front end.

pub mod config;
pub mod data_dir;
