//! Configuration for `CampusGrades`
//!
//! Two sections, `[logging]` and `[paths]`, stored as TOML in the user's
//! config directory. Values may use `$CAMPUS_GRADES`, which stands for that
//! directory: it is expanded on load and written back unexpanded on save.

use crate::logger::Level;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;
use std::str::FromStr;

#[cfg(not(debug_assertions))]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultCLIConfigRelease.toml");

#[cfg(debug_assertions)]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultCLIConfigDebug.toml");

#[cfg(not(debug_assertions))]
const CONFIG_FILE_NAME: &str = "config.toml";

#[cfg(debug_assertions)]
const CONFIG_FILE_NAME: &str = "dconfig.toml";

const DIR_VARIABLE: &str = "$CAMPUS_GRADES";

/// `[logging]` section
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug)
    pub level: String,
    /// Log file path; empty logs to the console
    pub file: String,
    /// Verbose console output
    pub verbose: bool,
}

/// `[paths]` section
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Default directory for CSV exports
    pub exports_dir: String,
    /// Default directory for reports
    pub reports_dir: String,
}

/// User configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Logging settings
    pub logging: LoggingConfig,
    /// Output locations
    pub paths: PathsConfig,
}

/// Optional CLI overrides, applied on top of the loaded file
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Override `logging.level`
    pub level: Option<String>,
    /// Override `logging.file`
    pub file: Option<String>,
    /// Override `logging.verbose`
    pub verbose: Option<bool>,
    /// Override `paths.exports_dir`
    pub exports_dir: Option<String>,
    /// Override `paths.reports_dir`
    pub reports_dir: Option<String>,
}

/// A key accepted by `config get/set/unset`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    /// `logging.level`
    Level,
    /// `logging.file`
    File,
    /// `logging.verbose`
    Verbose,
    /// `paths.exports_dir`
    ExportsDir,
    /// `paths.reports_dir`
    ReportsDir,
}

impl ConfigKey {
    /// Every key, in display order
    pub const ALL: [Self; 5] = [
        Self::Level,
        Self::File,
        Self::Verbose,
        Self::ExportsDir,
        Self::ReportsDir,
    ];

    /// Name as written in the TOML file
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Level => "level",
            Self::File => "file",
            Self::Verbose => "verbose",
            Self::ExportsDir => "exports_dir",
            Self::ReportsDir => "reports_dir",
        }
    }

    /// Section holding the key
    #[must_use]
    pub const fn section(self) -> &'static str {
        match self {
            Self::Level | Self::File | Self::Verbose => "logging",
            Self::ExportsDir | Self::ReportsDir => "paths",
        }
    }

    /// Keys whose value is a path and may contain `$CAMPUS_GRADES`
    const fn is_path(self) -> bool {
        matches!(self, Self::File | Self::ExportsDir | Self::ReportsDir)
    }
}

impl FromStr for ConfigKey {
    type Err = String;

    /// Accepts the TOML name, with dashes allowed in place of underscores
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|key| key.name() == normalized)
            .ok_or_else(|| format!("Unknown config key: '{s}'"))
    }
}

impl Config {
    /// The `$CAMPUS_GRADES` directory (`<config dir>/campusgrades`)
    #[must_use]
    pub fn get_campusgrades_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("campusgrades")
    }

    /// Path of the user config file (`dconfig.toml` in debug builds)
    #[must_use]
    pub fn get_config_file_path() -> PathBuf {
        Self::get_campusgrades_dir().join(CONFIG_FILE_NAME)
    }

    fn dir_string() -> String {
        Self::get_campusgrades_dir().to_string_lossy().into_owned()
    }

    fn text(&self, key: ConfigKey) -> Option<&String> {
        match key {
            ConfigKey::Level => Some(&self.logging.level),
            ConfigKey::File => Some(&self.logging.file),
            ConfigKey::ExportsDir => Some(&self.paths.exports_dir),
            ConfigKey::ReportsDir => Some(&self.paths.reports_dir),
            ConfigKey::Verbose => None,
        }
    }

    fn text_mut(&mut self, key: ConfigKey) -> Option<&mut String> {
        match key {
            ConfigKey::Level => Some(&mut self.logging.level),
            ConfigKey::File => Some(&mut self.logging.file),
            ConfigKey::ExportsDir => Some(&mut self.paths.exports_dir),
            ConfigKey::ReportsDir => Some(&mut self.paths.reports_dir),
            ConfigKey::Verbose => None,
        }
    }

    /// Rewrite every path value with `rewrite`
    fn map_paths(&mut self, rewrite: impl Fn(&str) -> String) {
        for key in ConfigKey::ALL.into_iter().filter(|k| k.is_path()) {
            if let Some(value) = self.text_mut(key) {
                *value = rewrite(value.as_str());
            }
        }
    }

    /// Parse a config from TOML, expanding `$CAMPUS_GRADES` in path values
    ///
    /// Missing sections and keys are left empty.
    ///
    /// # Errors
    /// Returns an error if the TOML is malformed or has wrongly typed values
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(toml_str)?;
        let dir = Self::dir_string();
        config.map_paths(|value| value.replace(DIR_VARIABLE, &dir));
        Ok(config)
    }

    /// Serialize to TOML, folding the config directory back into `$CAMPUS_GRADES`
    ///
    /// # Errors
    /// Returns an error if serialization fails
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        let dir = Self::dir_string();
        let mut stored = self.clone();
        stored.map_paths(|value| match value.strip_prefix(dir.as_str()) {
            Some(rest) => format!("{DIR_VARIABLE}{rest}"),
            None => value.to_string(),
        });
        toml::to_string_pretty(&stored)
    }

    /// Compiled-in defaults for this build profile
    ///
    /// # Panics
    /// Panics if the embedded defaults are not valid TOML, which only a broken build can cause.
    #[must_use]
    pub fn from_defaults() -> Self {
        Self::from_toml(CONFIG_DEFAULTS).expect("Failed to parse compiled-in default configuration")
    }

    /// Load the user config, creating it from defaults on first run
    ///
    /// Keys missing from an existing file are filled in from the defaults
    /// and the file is rewritten. An unreadable file falls back to defaults.
    #[must_use]
    pub fn load() -> Self {
        let config_file = Self::get_config_file_path();
        let defaults = Self::from_defaults();

        if !config_file.exists() {
            defaults.save_or_warn();
            return defaults;
        }

        let parsed = fs::read_to_string(&config_file)
            .map_err(|e| e.to_string())
            .and_then(|content| Self::from_toml(&content).map_err(|e| e.to_string()));

        match parsed {
            Ok(mut config) => {
                if config.merge_defaults(&defaults) {
                    config.save_or_warn();
                }
                config
            }
            Err(e) => {
                crate::warn!(
                    "Ignoring unreadable config {}: {e}",
                    config_file.display()
                );
                defaults
            }
        }
    }

    fn save_or_warn(&self) {
        if let Err(e) = self.save() {
            crate::warn!(
                "Failed to save config to {}: {e}",
                Self::get_config_file_path().display()
            );
        }
    }

    /// Write the config file, creating its directory if needed
    ///
    /// # Errors
    /// Returns an error if the directory or file cannot be written
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let config_file = Self::get_config_file_path();
        if let Some(parent) = config_file.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&config_file, self.to_toml()?)?;
        Ok(())
    }

    /// Delete the config file so the next [`load`](Config::load) starts from defaults
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be removed
    pub fn reset() -> Result<(), std::io::Error> {
        let config_file = Self::get_config_file_path();
        if config_file.exists() {
            fs::remove_file(config_file)?;
        }
        Ok(())
    }

    /// Fill empty text values from `defaults`
    ///
    /// # Returns
    /// `true` if anything changed
    pub fn merge_defaults(&mut self, defaults: &Self) -> bool {
        let mut changed = false;
        for key in ConfigKey::ALL {
            let Some(default) = defaults.text(key).filter(|d| !d.is_empty()) else {
                continue;
            };
            if let Some(value) = self.text_mut(key).filter(|v| v.is_empty()) {
                value.clone_from(default);
                changed = true;
            }
        }
        changed
    }

    /// Apply CLI overrides in memory; the file is not touched
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        let text_overrides = [
            (ConfigKey::Level, &overrides.level),
            (ConfigKey::File, &overrides.file),
            (ConfigKey::ExportsDir, &overrides.exports_dir),
            (ConfigKey::ReportsDir, &overrides.reports_dir),
        ];
        for (key, value) in text_overrides {
            if let (Some(value), Some(slot)) = (value, self.text_mut(key)) {
                slot.clone_from(value);
            }
        }
        if let Some(verbose) = overrides.verbose {
            self.logging.verbose = verbose;
        }
    }

    /// Value of a key as shown by `config get`
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        match key.parse::<ConfigKey>().ok()? {
            ConfigKey::Verbose => Some(self.logging.verbose.to_string()),
            key => self.text(key).cloned(),
        }
    }

    /// Set a key in memory; call [`save`](Config::save) to persist
    ///
    /// `level` must name a log level and is stored in lowercase; `verbose`
    /// must be `true` or `false`.
    ///
    /// # Errors
    /// Returns an error for an unknown key or an invalid value
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), String> {
        match key.parse::<ConfigKey>()? {
            ConfigKey::Verbose => {
                self.logging.verbose = value
                    .parse()
                    .map_err(|_| format!("Invalid boolean value for 'verbose': '{value}'"))?;
            }
            ConfigKey::Level => {
                self.logging.level = value.parse::<Level>()?.to_string();
            }
            key => {
                if let Some(slot) = self.text_mut(key) {
                    *slot = value.to_string();
                }
            }
        }
        Ok(())
    }

    /// Restore a key to its value in `defaults`
    ///
    /// # Errors
    /// Returns an error for an unknown key
    pub fn unset(&mut self, key: &str, defaults: &Self) -> Result<(), String> {
        match key.parse::<ConfigKey>()? {
            ConfigKey::Verbose => self.logging.verbose = defaults.logging.verbose,
            key => {
                if let (Some(slot), Some(default)) = (self.text_mut(key), defaults.text(key)) {
                    slot.clone_from(default);
                }
            }
        }
        Ok(())
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut section = "";
        for key in ConfigKey::ALL {
            if key.section() != section {
                if !section.is_empty() {
                    writeln!(f)?;
                }
                section = key.section();
                writeln!(f, "[{section}]")?;
            }
            match key {
                ConfigKey::Verbose => writeln!(f, "  {} = {}", key.name(), self.logging.verbose)?,
                _ => writeln!(
                    f,
                    "  {} = \"{}\"",
                    key.name(),
                    self.text(key).map_or("", String::as_str)
                )?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_accept_dashes() {
        assert_eq!("exports-dir".parse::<ConfigKey>(), Ok(ConfigKey::ExportsDir));
        assert_eq!("reports_dir".parse::<ConfigKey>(), Ok(ConfigKey::ReportsDir));
        assert!("token".parse::<ConfigKey>().is_err());
    }

    #[test]
    fn display_groups_keys_by_section() {
        let shown = Config::from_defaults().to_string();
        let logging = shown.find("[logging]").expect("logging section");
        let paths = shown.find("[paths]").expect("paths section");

        assert!(logging < shown.find("verbose =").expect("verbose key"));
        assert!(paths < shown.find("exports_dir =").expect("exports key"));
    }
}
