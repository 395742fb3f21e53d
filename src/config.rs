use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::PathBuf;

use serde::Deserialize;

pub const REPORT_MODES: &[&str] = &["text", "json"];

#[derive(Debug, Clone, Deserialize, Default)]
pub struct ProfileConfig {
    pub output_dir: Option<String>,
    pub report: Option<String>,
    pub quiet: Option<bool>,
}

#[derive(Debug, Deserialize, Default)]
struct ConfigFile {
    profiles: Option<HashMap<String, ProfileConfig>>,
}

pub fn load_profile(name: &str) -> Result<ProfileConfig, String> {
    let path = config_path()?;
    let raw = fs::read_to_string(&path)
        .map_err(|err| format!("Failed to read config file '{}': {err}", path.display()))?;

    let config: ConfigFile = toml::from_str(&raw)
        .map_err(|err| format!("Failed to parse config file '{}': {err}", path.display()))?;

    let profiles = config.profiles.ok_or_else(|| {
        format!(
            "Config file '{}' does not contain a [profiles] section.",
            path.display()
        )
    })?;

    profiles.get(name).cloned().ok_or_else(|| {
        format!(
            "Profile '{}' not found in config file '{}'.",
            name,
            path.display()
        )
    })
}

/// Parses the config file and, when a profile name is given, checks that the
/// profile exists and its fields hold supported values. Returns the config
/// file path on success.
pub fn validate_config(profile: Option<&str>) -> Result<PathBuf, String> {
    let path = config_path()?;

    match profile {
        Some(name) => {
            let profile = load_profile(name)?;
            validate_profile(name, &profile)?;
        }
        None => {
            let raw = fs::read_to_string(&path)
                .map_err(|err| format!("Failed to read config file '{}': {err}", path.display()))?;
            let config: ConfigFile = toml::from_str(&raw).map_err(|err| {
                format!("Failed to parse config file '{}': {err}", path.display())
            })?;
            for (name, profile) in config.profiles.unwrap_or_default() {
                validate_profile(&name, &profile)?;
            }
        }
    }

    Ok(path)
}

fn validate_profile(name: &str, profile: &ProfileConfig) -> Result<(), String> {
    if let Some(report) = &profile.report {
        if !REPORT_MODES.contains(&report.as_str()) {
            return Err(format!(
                "Invalid profile report '{report}' in profile '{name}'. Supported values: text, json."
            ));
        }
    }
    Ok(())
}

fn config_path() -> Result<PathBuf, String> {
    if let Ok(path) = env::var("IMS_CONFIG") {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return Ok(PathBuf::from(trimmed));
        }
    }

    if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
        let trimmed = xdg.trim();
        if !trimmed.is_empty() {
            return Ok(PathBuf::from(trimmed).join("imgsplit").join("config.toml"));
        }
    }

    let home = env::var("HOME").map_err(|_| {
        "Cannot resolve config path: set IMS_CONFIG or HOME/XDG_CONFIG_HOME.".to_string()
    })?;
    Ok(PathBuf::from(home)
        .join(".config")
        .join("imgsplit")
        .join("config.toml"))
}
