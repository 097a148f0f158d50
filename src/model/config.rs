use anyhow::Result;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const DEFAULT_CONFIG: &str = include_str!("../../config/default.toml");

#[derive(Debug, Clone, Deserialize)]
pub struct PluginConfig {
    pub logging: LoggingConfig,
    pub frontend: FrontendConfig,
    pub demo: DemoConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, e.g. `plugin_settings=info`.
    pub filter: String,
    pub file_name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FrontendConfig {
    /// Front-end method pinged on load and on mount.
    pub method: String,
    /// Count for which `receive_frontend_message` answers `true`.
    pub accept_count: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DemoConfig {
    /// Write a few settings during load to show the notifications.
    pub exercise_on_load: bool,
}

impl PluginConfig {
    /// Load configuration with layering: defaults → user config.
    pub fn load() -> Result<Self> {
        Self::load_from(user_config_path().as_deref())
    }

    /// Load the defaults, deep-merged with the file at `user_path` if it exists.
    pub fn load_from(user_path: Option<&Path>) -> Result<Self> {
        let mut table: toml::Table = toml::from_str(DEFAULT_CONFIG)?;

        if let Some(path) = user_path.filter(|path| path.exists()) {
            let user_str = fs::read_to_string(path)?;
            let user_table: toml::Table = toml::from_str(&user_str)?;
            merge_tables(&mut table, user_table);
        }

        let config: PluginConfig = toml::Value::Table(table).try_into()?;
        Ok(config)
    }

    pub fn defaults() -> Result<Self> {
        Self::load_from(None)
    }
}

/// Platform log directory; falls back to the system temp dir.
pub fn log_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "plugin-settings")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(std::env::temp_dir)
}

fn user_config_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "plugin-settings")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

fn merge_tables(base: &mut toml::Table, overlay: toml::Table) {
    for (key, value) in overlay {
        match value {
            toml::Value::Table(overlay_table) => match base.get_mut(&key) {
                Some(toml::Value::Table(base_table)) => merge_tables(base_table, overlay_table),
                _ => {
                    base.insert(key, toml::Value::Table(overlay_table));
                }
            },
            other => {
                base.insert(key, other);
            }
        }
    }
}
