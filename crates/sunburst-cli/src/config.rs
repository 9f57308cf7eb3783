//! Locating and reading `sunburst` TOML configuration files.

use std::{
    fs,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, info};
use thiserror::Error;

use sunburst::{SunburstError, config::AppConfig};

/// Configuration-related errors for CLI
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse TOML configuration: {0}")]
    Parse(String),

    #[error("Missing configuration file: {0}")]
    MissingFile(PathBuf),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<ConfigError> for SunburstError {
    fn from(err: ConfigError) -> Self {
        SunburstError::Config(err.to_string())
    }
}

/// Relative path checked in the working directory.
const LOCAL_CONFIG_PATH: &str = "sunburst/config.toml";

/// Loads the configuration for a run.
///
/// `explicit_path` wins when given. Otherwise `sunburst/config.toml` in the
/// working directory is tried, then `config.toml` in the platform config
/// directory. Without any file the defaults apply.
///
/// # Errors
///
/// Returns [`SunburstError::Config`] if the explicit file is missing, or if
/// the chosen file cannot be parsed or fails validation.
pub fn load_config(explicit_path: Option<impl AsRef<Path>>) -> Result<AppConfig, SunburstError> {
    if let Some(path) = explicit_path {
        let path = path.as_ref();
        info!(path = path.display().to_string(); "Loading configuration from explicit path");
        return load_config_file(path);
    }

    match discover_config_file() {
        Some(path) => {
            info!(path = path.display().to_string(); "Loading configuration");
            load_config_file(&path)
        }
        None => {
            debug!("No configuration file found, using defaults");
            Ok(AppConfig::default())
        }
    }
}

fn discover_config_file() -> Option<PathBuf> {
    let local = PathBuf::from(LOCAL_CONFIG_PATH);
    if local.exists() {
        return Some(local);
    }

    let Some(dirs) = ProjectDirs::from("com", "sunburst", "sunburst") else {
        debug!("No platform config directory");
        return None;
    };
    let system = dirs.config_dir().join("config.toml");
    if system.exists() {
        Some(system)
    } else {
        debug!(path = system.display().to_string(); "No configuration in platform directory");
        None
    }
}

/// Reads, parses and validates one TOML file.
fn load_config_file(path: impl AsRef<Path>) -> Result<AppConfig, SunburstError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ConfigError::MissingFile(path.to_path_buf()).into());
    }

    let content = fs::read_to_string(path)?;

    let config: AppConfig =
        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))?;

    config.validate().map_err(|err| match err {
        SunburstError::Config(message) => ConfigError::Validation(message),
        other => ConfigError::Validation(other.to_string()),
    })?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use sunburst::config::{OutputFormat, ZeroTotalPolicy};

    use super::*;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(content.as_bytes()).expect("write config");
        file
    }

    #[test]
    fn test_explicit_file_is_loaded() {
        let file = write_config(
            r#"
            [layout]
            ring_spacing = 100.0
            zero_total = "reject"

            [render]
            format = "svg"
            "#,
        );

        let config = load_config(Some(file.path())).expect("config loads");
        assert_eq!(config.layout().ring_spacing(), 100.0);
        assert_eq!(config.layout().zero_total(), ZeroTotalPolicy::Reject);
        assert_eq!(config.render().format(), OutputFormat::Svg);
        assert_eq!(config.render().node_size(), 80.0);
    }

    #[test]
    fn test_no_file_found_gives_defaults() {
        // Tests run from the crate directory, which has no local config
        assert!(!Path::new(LOCAL_CONFIG_PATH).exists());

        let config = load_config(None::<&Path>).expect("defaults load");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_explicit_file() {
        let err = load_config(Some("definitely/not/here.toml")).expect_err("missing file");
        assert!(matches!(err, SunburstError::Config(_)));
        assert!(err.to_string().contains("Missing configuration file"));
    }

    #[test]
    fn test_malformed_toml() {
        let file = write_config("[layout\nring_spacing = ");

        let err = load_config(Some(file.path())).expect_err("parse error");
        assert!(err.to_string().contains("Failed to parse TOML configuration"));
    }

    #[test]
    fn test_invalid_values_fail_validation() {
        let file = write_config("[render]\nnode_size = 0.0\n");

        let err = load_config(Some(file.path())).expect_err("validation error");
        assert!(err.to_string().contains("Validation error"));
        assert!(err.to_string().contains("render.node_size"));
    }
}
