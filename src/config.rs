//! Application configuration.
//!
//! Config keys (TOML): `[artifacts]` with `scaler`, `columns`, `classifier`
//! paths, and `[logging]` with `filter`. Every key is optional. Relative
//! artifact paths are resolved against the directory of the config file.
//!
//! The file is looked up in order: the `--config` flag, the
//! `SPACESHIP_TRANSPORT_CONFIG` environment variable, then
//! `spaceship-transport.toml` in the working directory. Without any of them
//! the defaults apply.

use crate::artifacts::ArtifactPaths;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const CONFIG_FILE_NAME: &str = "spaceship-transport.toml";
pub const CONFIG_ENV_VAR: &str = "SPACESHIP_TRANSPORT_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid config file {path}: {source}")]
    ParseToml {
        path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub artifacts: ArtifactPaths,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive; `RUST_LOG` takes precedence.
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}

/// Where the effective configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    Flag(PathBuf),
    Env(PathBuf),
    WorkingDir(PathBuf),
    Defaults,
}

impl ConfigSource {
    /// Picks the config file from the flag, the environment and the working directory.
    pub fn locate(flag: Option<&Path>, env: Option<PathBuf>, working_dir: &Path) -> Self {
        if let Some(path) = flag {
            return ConfigSource::Flag(path.to_path_buf());
        }
        if let Some(path) = env.filter(|p| !p.as_os_str().is_empty()) {
            return ConfigSource::Env(path);
        }
        let candidate = working_dir.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            ConfigSource::WorkingDir(candidate)
        } else {
            ConfigSource::Defaults
        }
    }

    pub fn path(&self) -> Option<&Path> {
        match self {
            ConfigSource::Flag(path) | ConfigSource::Env(path) | ConfigSource::WorkingDir(path) => {
                Some(path)
            }
            ConfigSource::Defaults => None,
        }
    }
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigSource::Flag(path) => write!(f, "{} (--config)", path.display()),
            ConfigSource::Env(path) => write!(f, "{} (${CONFIG_ENV_VAR})", path.display()),
            ConfigSource::WorkingDir(path) => write!(f, "{}", path.display()),
            ConfigSource::Defaults => f.write_str("built-in defaults"),
        }
    }
}

impl AppConfig {
    /// Loads the configuration for `flag`, consulting the environment and the
    /// working directory when no flag is given.
    pub fn load(flag: Option<&Path>) -> Result<(Self, ConfigSource), ConfigError> {
        let env = std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from);
        let working_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        let source = ConfigSource::locate(flag, env, &working_dir);
        let config = match source.path() {
            Some(path) => Self::from_path(path)?,
            None => Self::default(),
        };
        Ok((config, source))
    }

    /// Reads a config file and resolves its artifact paths.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml(&text).map_err(|source| ConfigError::ParseToml {
            path: path.to_path_buf(),
            source,
        })?;
        let base = path.parent().unwrap_or_else(|| Path::new(""));
        Ok(Self {
            artifacts: config.artifacts.resolve_against(base),
            ..config
        })
    }

    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.logging.filter, "info");
        assert_eq!(
            config.artifacts.classifier,
            PathBuf::from("artifacts/classifier.json")
        );
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = AppConfig::from_toml(
            r#"
            [artifacts]
            classifier = "models/svc.bin"
            "#,
        )
        .unwrap();
        assert_eq!(config.artifacts.classifier, PathBuf::from("models/svc.bin"));
        assert_eq!(config.artifacts.scaler, PathBuf::from("artifacts/scaler.json"));
        assert_eq!(config.logging, LoggingConfig::default());
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(AppConfig::from_toml("[artifacts]\nmodel = \"x.json\"\n").is_err());
    }

    #[test]
    fn test_from_path_resolves_relative_artifacts() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(
            &path,
            "[artifacts]\nscaler = \"a/scaler.bin\"\n\n[logging]\nfilter = \"debug\"\n",
        )
        .unwrap();

        let config = AppConfig::from_path(&path).unwrap();
        assert_eq!(config.artifacts.scaler, dir.path().join("a/scaler.bin"));
        assert_eq!(
            config.artifacts.columns,
            dir.path().join("artifacts/model_columns.json")
        );
        assert_eq!(config.logging.filter, "debug");
    }

    #[test]
    fn test_from_path_errors() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.toml");
        assert!(matches!(
            AppConfig::from_path(&missing),
            Err(ConfigError::Read { .. })
        ));

        let broken = dir.path().join("broken.toml");
        std::fs::write(&broken, "[artifacts\n").unwrap();
        assert!(matches!(
            AppConfig::from_path(&broken),
            Err(ConfigError::ParseToml { .. })
        ));
    }

    #[test]
    fn test_locate_order() {
        let dir = tempfile::tempdir().unwrap();
        let flag = PathBuf::from("flag.toml");
        let env = PathBuf::from("env.toml");

        assert_eq!(
            ConfigSource::locate(Some(&flag), Some(env.clone()), dir.path()),
            ConfigSource::Flag(flag)
        );
        assert_eq!(
            ConfigSource::locate(None, Some(env.clone()), dir.path()),
            ConfigSource::Env(env)
        );
        assert_eq!(
            ConfigSource::locate(None, None, dir.path()),
            ConfigSource::Defaults
        );

        let local = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&local, "").unwrap();
        assert_eq!(
            ConfigSource::locate(None, Some(PathBuf::new()), dir.path()),
            ConfigSource::WorkingDir(local)
        );
    }
}
