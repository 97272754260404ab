use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use serde::Deserialize;

pub const DEFAULT_SETTINGS_FILE: &str = "contacts.toml";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub window_title: String,
    pub window_width: f32,
    pub window_height: f32,
    pub log_filter: String,
    pub seed_contacts: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_title: "Contacts".into(),
            window_width: 560.0,
            window_height: 760.0,
            log_filter: "info".into(),
            seed_contacts: true,
        }
    }
}

impl Settings {
    fn keep_valid_dimensions(&mut self) {
        let defaults = Settings::default();
        if !is_valid_dimension(self.window_width) {
            self.window_width = defaults.window_width;
        }
        if !is_valid_dimension(self.window_height) {
            self.window_height = defaults.window_height;
        }
    }
}

/// Defaults, then the settings file, then `APP__*` variables from `env`.
///
/// An explicitly requested file must exist; the default `contacts.toml` is optional.
pub fn load_settings(
    explicit_path: Option<&Path>,
    env: impl Fn(&str) -> Option<String>,
) -> anyhow::Result<Settings> {
    let mut settings = match explicit_path {
        Some(path) => read_settings_file(path)?,
        None => {
            let path = PathBuf::from(DEFAULT_SETTINGS_FILE);
            if path.exists() {
                read_settings_file(&path)?
            } else {
                Settings::default()
            }
        }
    };

    apply_env_overrides(&mut settings, env);
    Ok(settings)
}

fn read_settings_file(path: &Path) -> anyhow::Result<Settings> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read settings file '{}'", path.display()))?;
    let mut settings = toml::from_str::<Settings>(&raw)
        .with_context(|| format!("failed to parse settings file '{}'", path.display()))?;
    settings.keep_valid_dimensions();
    Ok(settings)
}

fn apply_env_overrides(settings: &mut Settings, env: impl Fn(&str) -> Option<String>) {
    if let Some(v) = env("APP__WINDOW_TITLE") {
        settings.window_title = v;
    }
    if let Some(v) = env("APP__WINDOW_WIDTH") {
        if let Some(parsed) = parse_dimension(&v) {
            settings.window_width = parsed;
        }
    }
    if let Some(v) = env("APP__WINDOW_HEIGHT") {
        if let Some(parsed) = parse_dimension(&v) {
            settings.window_height = parsed;
        }
    }
    if let Some(v) = env("APP__LOG_FILTER") {
        settings.log_filter = v;
    }
    if let Some(v) = env("APP__SEED_CONTACTS") {
        if let Some(parsed) = parse_flag(&v) {
            settings.seed_contacts = parsed;
        }
    }
}

/// Window sizes must be finite and positive; anything else is ignored.
fn is_valid_dimension(value: f32) -> bool {
    value.is_finite() && value > 0.0
}

fn parse_dimension(raw: &str) -> Option<f32> {
    raw.trim()
        .parse::<f32>()
        .ok()
        .filter(|value| is_valid_dimension(*value))
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
