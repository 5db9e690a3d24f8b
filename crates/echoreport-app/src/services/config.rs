// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Settings file handling.

use std::path::{Path, PathBuf};

use echoreport_core::ReportConfig;
use echoreport_core::error::Result;
use tracing::{info, warn};

use super::data_dir;

const CONFIG_FILE: &str = "config.json";

/// Default location of the settings file.
pub fn default_config_path() -> PathBuf {
    data_dir::data_dir().join(CONFIG_FILE)
}

/// Load settings from `path`, or defaults when the file is missing.
///
/// An unreadable or malformed file, or one whose layout does not fit its
/// paper, is logged and replaced by defaults.
pub fn load_config(path: &Path) -> ReportConfig {
    match read_config(path) {
        Ok(Some(config)) => {
            info!(path = %path.display(), "settings loaded");
            config
        }
        Ok(None) => ReportConfig::default(),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "settings unreadable, using defaults");
            ReportConfig::default()
        }
    }
}

fn read_config(path: &Path) -> Result<Option<ReportConfig>> {
    if !path.exists() {
        return Ok(None);
    }
    let data = std::fs::read_to_string(path)?;
    let config: ReportConfig = serde_json::from_str(&data)?;
    config.validate()?;
    Ok(Some(config))
}

/// Write `config` to `path` as pretty-printed JSON.
pub fn persist_config(path: &Path, config: &ReportConfig) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(config)?;
    std::fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use echoreport_core::{PaperSize, UnitPolicy};

    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config(&dir.path().join("absent.json"));
        assert_eq!(config.filename_prefix, "Echo_Report");
    }

    #[test]
    fn malformed_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "{ not json").unwrap();
        assert_eq!(load_config(&path).report_title, "POCUS PAH CARDIAC ECHO REPORT");
    }

    #[test]
    fn layout_wider_than_paper_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, r#"{ "paper_size": "A5", "filename_prefix": "PAH_Echo" }"#).unwrap();
        let loaded = load_config(&path);
        assert_eq!(loaded.paper_size, PaperSize::A4);
        assert_eq!(loaded.filename_prefix, "Echo_Report");
    }

    #[test]
    fn persisted_settings_load_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(CONFIG_FILE);
        let config = ReportConfig {
            unit_policy: UnitPolicy::Lenient,
            output_dir: Some(dir.path().join("reports")),
            ..ReportConfig::default()
        };
        persist_config(&path, &config).unwrap();

        let loaded = load_config(&path);
        assert_eq!(loaded.unit_policy, UnitPolicy::Lenient);
        assert_eq!(loaded.output_dir, config.output_dir);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, r#"{ "filename_prefix": "PAH_Echo" }"#).unwrap();
        let loaded = load_config(&path);
        assert_eq!(loaded.filename_prefix, "PAH_Echo");
        assert_eq!(loaded.share_title, "Echo Report");
    }
}
