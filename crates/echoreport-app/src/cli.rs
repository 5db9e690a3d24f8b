// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "echo-report",
    version,
    about = "Build a POCUS PAH cardiac echo report from exam fields and export it as PDF"
)]
pub struct Cli {
    /// Settings file (default: <data dir>/config.json).
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Export the report for a JSON file of exam fields.
    Export(ExportArgs),

    /// Print the effective settings as JSON.
    ShowConfig,

    /// Write the default settings to the settings file.
    InitConfig {
        /// Replace an existing settings file.
        #[arg(long)]
        force: bool,
    },
}

#[derive(Debug, Parser)]
pub struct ExportArgs {
    /// JSON object of exam field values.
    #[arg(value_name = "FIELDS_JSON")]
    pub fields: PathBuf,

    /// Directory the report is saved into (overrides the settings file).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Render measurements with no magnitude as their bare unit.
    #[arg(long)]
    pub lenient_units: bool,
}
