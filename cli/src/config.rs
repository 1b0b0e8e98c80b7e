use std::fs;
use std::path::PathBuf;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tinta_theme::ThemeConfig;
use tracing::Level;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Off,
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn as_tracing_level(&self) -> Option<Level> {
        match self {
            LogLevel::Off => None,
            LogLevel::Error => Some(Level::ERROR),
            LogLevel::Warn => Some(Level::WARN),
            LogLevel::Info => Some(Level::INFO),
            LogLevel::Debug => Some(Level::DEBUG),
            LogLevel::Trace => Some(Level::TRACE),
        }
    }
}

/// JSON layout for machine-readable output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Pretty,
    Compact,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserConfig {
    pub log_level: LogLevel,
    pub log_to_file: bool,
    pub output: OutputFormat,
    pub theme: ThemeConfig,
}

pub fn config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("~/.config"))
        .join("tinta")
}

pub fn log_dir() -> PathBuf {
    dirs::state_dir()
        .or_else(dirs::cache_dir)
        .unwrap_or_else(|| PathBuf::from("/tmp"))
        .join("tinta")
}

pub fn config_path() -> PathBuf {
    config_dir().join("config.toml")
}

pub fn ensure_dirs() -> std::io::Result<()> {
    fs::create_dir_all(config_dir())
}

impl UserConfig {
    pub fn load() -> Self {
        let path = config_path();
        if !path.exists() {
            return Self::default();
        }

        match fs::read_to_string(&path) {
            Ok(content) => Self::parse(&content),
            Err(_) => Self::default(),
        }
    }

    /// Unparsable content yields the defaults.
    pub fn parse(content: &str) -> Self {
        toml::from_str(content).unwrap_or_default()
    }

    pub fn save(&self) -> std::io::Result<()> {
        ensure_dirs()?;
        let content = toml::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))?;
        fs::write(config_path(), content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_partial_file() {
        let config = UserConfig::parse(
            r##"
log_level = "debug"

[theme]
primary = "#7C3AED"
"##,
        );
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.output, OutputFormat::Pretty);
        assert_eq!(config.theme.primary, "#7C3AED");
        assert_eq!(config.theme.secondary, "#10B981");
        assert_eq!(config.theme.radius, "0.5rem");
    }

    #[test]
    fn test_unparsable_file_falls_back() {
        assert_eq!(UserConfig::parse("log_level = 3"), UserConfig::default());
    }

    #[test]
    fn test_round_trip() {
        let config = UserConfig {
            log_to_file: true,
            output: OutputFormat::Compact,
            ..Default::default()
        };
        let content = toml::to_string_pretty(&config).unwrap();
        assert!(content.contains("[theme]"));
        assert_eq!(UserConfig::parse(&content), config);
    }

    #[test]
    fn test_tracing_levels() {
        assert_eq!(LogLevel::Off.as_tracing_level(), None);
        assert_eq!(LogLevel::Info.as_tracing_level(), Some(Level::INFO));
    }
}
