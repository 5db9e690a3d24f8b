// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Echo Report: POCUS PAH cardiac echo report exporter
//
// Entry point. Initialises logging, loads settings, and runs one command.

mod cli;
mod services;

use std::process::ExitCode;

use clap::Parser;
use echoreport_bridge::platform_bridge;
use echoreport_core::error::Result;
use echoreport_core::notices::humanize_error;
use echoreport_core::{ReportConfig, UnitPolicy};
use echoreport_document::FieldSet;
use echoreport_export::ExportService;

use cli::{Cli, Command, ExportArgs};
use services::config::{default_config_path, load_config, persist_config};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config_path = cli.config.clone().unwrap_or_else(default_config_path);
    let config = load_config(&config_path);

    let outcome = match cli.command {
        Command::Export(args) => export(config, args).await,
        Command::ShowConfig => show_config(&config),
        Command::InitConfig { force } => init_config(&config_path, force),
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "command failed");
            let notice = humanize_error(&e);
            eprintln!("{}\n{}", notice.message, notice.suggestion);
            ExitCode::FAILURE
        }
    }
}

async fn export(mut config: ReportConfig, args: ExportArgs) -> Result<()> {
    if let Some(dir) = args.output_dir {
        config.output_dir = Some(dir);
    }
    if args.lenient_units {
        config.unit_policy = UnitPolicy::Lenient;
    }

    let raw = std::fs::read_to_string(&args.fields)?;
    let fields = FieldSet::from_json_str(&raw)?;
    tracing::info!(path = %args.fields.display(), fields = fields.len(), "exam fields loaded");

    let service = ExportService::new(platform_bridge(&config), config);
    let receipt = service.export(&fields).await?;
    println!("{}", serde_json::to_string_pretty(&receipt)?);
    Ok(())
}

fn show_config(config: &ReportConfig) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(config)?);
    Ok(())
}

fn init_config(path: &std::path::Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        tracing::warn!(path = %path.display(), "settings file exists, pass --force to replace it");
        return Ok(());
    }
    persist_config(path, &ReportConfig::default())?;
    tracing::info!(path = %path.display(), "default settings written");
    Ok(())
}
