use std::{fs, path::Path};

use serde::Deserialize;
use url::Url;

use crate::error::ConfigError;

pub const DEFAULT_SETTINGS_FILE: &str = "client.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientSettings {
    pub api_host: String,
    pub api_port: String,
    pub api_base: String,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            api_host: "localhost".into(),
            api_port: "8081".into(),
            api_base: "/sgu-api".into(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct SettingsFile {
    api_host: Option<String>,
    api_port: Option<String>,
    api_base: Option<String>,
}

impl ClientSettings {
    /// `http://{host}:{port}{base}`, with the base path normalised to a
    /// leading slash and no trailing slash.
    pub fn base_url(&self) -> Result<Url, ConfigError> {
        let port = self.api_port.trim();
        if port.parse::<u16>().is_err() {
            return Err(ConfigError::InvalidPort(self.api_port.clone()));
        }

        let base = normalize_base_path(&self.api_base);
        let raw = format!("http://{}:{port}{base}", self.api_host.trim());
        Url::parse(&raw).map_err(|source| ConfigError::InvalidUrl { url: raw, source })
    }
}

pub fn load_settings_from(path: &Path) -> ClientSettings {
    load_settings_with(path, |key| std::env::var(key).ok())
}

fn load_settings_with(path: &Path, lookup: impl Fn(&str) -> Option<String>) -> ClientSettings {
    let mut settings = ClientSettings::default();

    if let Ok(raw) = fs::read_to_string(path) {
        match toml::from_str::<SettingsFile>(&raw) {
            Ok(file_cfg) => apply_file(&mut settings, file_cfg),
            Err(err) => tracing::warn!(
                path = %path.display(),
                "ignoring unreadable client settings file: {err}"
            ),
        }
    }

    apply_env(&mut settings, lookup);
    settings
}

fn apply_file(settings: &mut ClientSettings, file_cfg: SettingsFile) {
    if let Some(v) = file_cfg.api_host {
        settings.api_host = v;
    }
    if let Some(v) = file_cfg.api_port {
        settings.api_port = v;
    }
    if let Some(v) = file_cfg.api_base {
        settings.api_base = v;
    }
}

/// `APP__*` keys are applied last and win over `SGU_*`.
fn apply_env(settings: &mut ClientSettings, lookup: impl Fn(&str) -> Option<String>) {
    for prefix in ["SGU_API_", "APP__API_"] {
        if let Some(v) = lookup(&format!("{prefix}HOST")) {
            settings.api_host = v;
        }
        if let Some(v) = lookup(&format!("{prefix}PORT")) {
            settings.api_port = v;
        }
        if let Some(v) = lookup(&format!("{prefix}BASE")) {
            settings.api_base = v;
        }
    }
}

fn normalize_base_path(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{trimmed}")
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
