// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Archi-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Archi and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! TOML configuration.
//!
//! Search order:
//! 1. an explicit path (missing file is an error)
//! 2. `archi/config.toml` below the working directory
//! 3. `config.toml` in the platform config directory
//! 4. built-in defaults

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::Deserialize;
use thiserror::Error;

use crate::command::Interpreter;
use crate::layout::GridLayout;
use crate::ops::CascadeRule;

pub const LOCAL_CONFIG_PATH: &str = "archi/config.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing configuration file: {}", .0.display())]
    MissingFile(PathBuf),
    #[error("failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: std::io::Error },
    #[error("failed to parse {}: {source}", path.display())]
    Parse { path: PathBuf, source: toml::de::Error },
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub layout: GridLayout,
    pub interpreter: InterpreterConfig,
    pub store: StoreConfig,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InterpreterConfig {
    pub cascade: CascadeRule,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StoreConfig {
    /// Directory holding `elements.json`; the CLI falls back to the working directory.
    pub dir: Option<PathBuf>,
    /// fsync files and their directory after each save.
    pub durable: bool,
}

impl AppConfig {
    pub fn interpreter(&self) -> Interpreter {
        Interpreter::new(self.layout, self.interpreter.cascade)
    }
}

pub fn load_config(explicit_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    if let Some(path) = explicit_path {
        log::info!("loading configuration from {}", path.display());
        return load_config_file(path);
    }

    let local = Path::new(LOCAL_CONFIG_PATH);
    if local.exists() {
        log::info!("loading configuration from {}", local.display());
        return load_config_file(local);
    }

    if let Some(dirs) = ProjectDirs::from("com", "archi", "archi") {
        let system = dirs.config_dir().join("config.toml");
        if system.exists() {
            log::info!("loading configuration from {}", system.display());
            return load_config_file(&system);
        }
        log::debug!("no configuration at {}", system.display());
    } else {
        log::debug!("could not determine platform config directory");
    }

    log::debug!("using default configuration");
    Ok(AppConfig::default())
}

pub fn load_config_file(path: &Path) -> Result<AppConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::MissingFile(path.to_path_buf()));
    }
    let content = fs::read_to_string(path)
        .map_err(|source| ConfigError::Read { path: path.to_path_buf(), source })?;
    toml::from_str(&content).map_err(|source| ConfigError::Parse { path: path.to_path_buf(), source })
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;

    use tempfile::TempDir;

    use super::{load_config, load_config_file, AppConfig, ConfigError};
    use crate::ops::CascadeRule;

    #[test]
    fn empty_file_is_default_config() {
        let config: AppConfig = toml::from_str("").expect("config");
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.interpreter.cascade, CascadeRule::Endpoints);
        assert_eq!(config.layout.columns, 3);
    }

    #[test]
    fn sections_override_defaults() {
        let config: AppConfig = toml::from_str(
            "[layout]\ncolumns = 5\nspacing_x = 250.0\n\n[interpreter]\ncascade = \"label\"\n\n[store]\ndir = \"diagrams\"\ndurable = true\n",
        )
        .expect("config");

        assert_eq!(config.layout.columns, 5);
        assert_eq!(config.layout.spacing_x, 250.0);
        assert_eq!(config.layout.base_x, 100.0);
        assert_eq!(config.interpreter.cascade, CascadeRule::Label);
        assert_eq!(config.store.dir, Some(PathBuf::from("diagrams")));
        assert!(config.store.durable);
        assert_eq!(config.interpreter().cascade(), CascadeRule::Label);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(toml::from_str::<AppConfig>("[layout]\nrows = 2\n").is_err());
        assert!(toml::from_str::<AppConfig>("[interpreter]\ncascade = \"all\"\n").is_err());
    }

    #[test]
    fn explicit_path_is_loaded_or_reported_missing() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("archi.toml");

        let err = load_config(Some(&path)).expect_err("missing");
        assert!(matches!(err, ConfigError::MissingFile(_)));

        fs::write(&path, "[layout]\nbase_y = 40.0\n").expect("write");
        let config = load_config(Some(&path)).expect("config");
        assert_eq!(config.layout.base_y, 40.0);
    }

    #[test]
    fn parse_errors_name_the_file() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("broken.toml");
        fs::write(&path, "[layout\n").expect("write");

        let err = load_config_file(&path).expect_err("broken");
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("broken.toml"));
    }
}
