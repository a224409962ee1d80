use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use crate::components::popover::Align;

pub const APP_DIR: &str = "slot-picker";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Horizontal alignment of the picker popover against its trigger.
    pub align: Align,
    pub toast_seconds: u64,
    pub log_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            align: Align::End,
            toast_seconds: 3,
            log_dir: None,
        }
    }
}

impl Config {
    /// Load `config.toml` from the user config dir, or defaults if absent.
    pub fn load() -> Result<Self, ConfigError> {
        match config_path() {
            Some(path) if path.exists() => Self::from_path(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn toast_ttl(&self) -> Duration {
        Duration::from_secs(self.toast_seconds.max(1))
    }

    pub fn log_dir(&self) -> PathBuf {
        self.log_dir.clone().unwrap_or_else(|| {
            dirs::data_local_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(APP_DIR)
                .join("logs")
        })
    }
}

fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join(APP_DIR).join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.align, Align::End);
        assert_eq!(config.toast_seconds, 3);
        assert!(config.log_dir.is_none());
    }

    #[test]
    fn reads_alignment_and_toast_time() {
        let config: Config = toml::from_str(
            r#"
            align = "center"
            toast_seconds = 0
            log_dir = "/tmp/slot-picker"
            "#,
        )
        .unwrap();
        assert_eq!(config.align, Align::Center);
        assert_eq!(config.toast_ttl(), Duration::from_secs(1));
        assert_eq!(config.log_dir(), PathBuf::from("/tmp/slot-picker"));
    }

    #[test]
    fn unknown_alignment_is_rejected() {
        assert!(toml::from_str::<Config>(r#"align = "middle""#).is_err());
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let err = Config::from_path(Path::new("/nonexistent/slot-picker.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
