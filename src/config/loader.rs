use super::Config;
use crate::error::{common, CaseFilterError, ErrorCode, Result};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

/// Configuration file picked up from the working directory when present
pub const DEFAULT_CONFIG_FILE: &str = "case-filter.toml";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Yaml,
    Json,
}

impl ConfigFormat {
    /// Pick a format from a file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()?.to_ascii_lowercase().as_str() {
            "toml" => Some(Self::Toml),
            "yaml" | "yml" => Some(Self::Yaml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Parse configuration text in the given format
pub fn parse_config(content: &str, format: ConfigFormat) -> Result<Config> {
    match format {
        ConfigFormat::Toml => toml::from_str(content).map_err(|e| {
            CaseFilterError::config_with_code(ErrorCode::CONFIG_INVALID_TOML, e.to_string(), None)
                .with_source(e)
        }),
        ConfigFormat::Yaml => serde_yaml::from_str(content).map_err(|e| {
            CaseFilterError::config_with_code(ErrorCode::CONFIG_INVALID_YAML, e.to_string(), None)
                .with_source(e)
        }),
        ConfigFormat::Json => serde_json::from_str(content).map_err(|e| {
            CaseFilterError::config_with_code(ErrorCode::CONFIG_INVALID_JSON, e.to_string(), None)
                .with_source(e)
        }),
    }
}

/// Resolves and reads the configuration file
pub struct ConfigLoader {
    working_dir: PathBuf,
}

impl ConfigLoader {
    pub fn new(working_dir: impl Into<PathBuf>) -> Self {
        Self {
            working_dir: working_dir.into(),
        }
    }

    /// Load configuration from `explicit`, or the default file if it exists
    ///
    /// An explicitly named file must exist; the default file is optional.
    /// Environment overrides are applied last.
    pub async fn load(&self, explicit: Option<&Path>) -> Result<Config> {
        let mut config = match explicit {
            Some(path) => {
                let path = self.resolve(path);
                if !path.exists() {
                    return Err(common::config_not_found(&path));
                }
                self.load_file(&path).await?
            }
            None => {
                let path = self.working_dir.join(DEFAULT_CONFIG_FILE);
                if path.exists() {
                    self.load_file(&path).await?
                } else {
                    debug!("No {} found, using defaults", DEFAULT_CONFIG_FILE);
                    Config::default()
                }
            }
        };

        config.merge_env_vars();
        Ok(config)
    }

    async fn load_file(&self, path: &Path) -> Result<Config> {
        let format = ConfigFormat::from_path(path).ok_or_else(|| {
            CaseFilterError::config_with_code(
                ErrorCode::CONFIG_UNSUPPORTED_FORMAT,
                "expected a .toml, .yaml, .yml or .json file",
                Some(path.to_path_buf()),
            )
        })?;

        let content = fs::read_to_string(path).await.map_err(|e| {
            CaseFilterError::config_with_code(
                ErrorCode::CONFIG_GENERIC,
                "could not read configuration file",
                Some(path.to_path_buf()),
            )
            .with_source(e)
        })?;

        debug!("Loading configuration from {}", path.display());
        parse_config(&content, format).map_err(|e| e.with_context(path.display()))
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.working_dir.join(path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cases::CaseStatus;
    use crate::config::OutputFormat;
    use tempfile::TempDir;

    #[test]
    fn test_format_from_path() {
        assert_eq!(
            ConfigFormat::from_path(Path::new("a/case-filter.toml")),
            Some(ConfigFormat::Toml)
        );
        assert_eq!(
            ConfigFormat::from_path(Path::new("c.YML")),
            Some(ConfigFormat::Yaml)
        );
        assert_eq!(ConfigFormat::from_path(Path::new("c.ini")), None);
        assert_eq!(ConfigFormat::from_path(Path::new("noext")), None);
    }

    #[test]
    fn test_parse_toml_config() {
        let content = r#"
output = "yaml"

[defaults]
status = ["PENDING", "IN_PROGRESS"]
date_from = "2024-01-01"
"#;
        let config = parse_config(content, ConfigFormat::Toml).unwrap();
        assert_eq!(config.output, OutputFormat::Yaml);
        assert!(config.defaults.status.contains(&CaseStatus::from("PENDING")));
        assert!(config.defaults.date_from.is_some());
    }

    #[test]
    fn test_parse_yaml_partial_config() {
        let config = parse_config("output: yaml\n", ConfigFormat::Yaml).unwrap();
        assert_eq!(config.output, OutputFormat::Yaml);
        assert!(config.defaults.is_empty());
    }

    #[test]
    fn test_parse_invalid_json() {
        let err = parse_config("{not json", ConfigFormat::Json).unwrap_err();
        assert_eq!(err.code(), ErrorCode::CONFIG_INVALID_JSON);
    }

    #[tokio::test]
    async fn test_load_defaults_without_file() {
        let temp = TempDir::new().unwrap();
        let loader = ConfigLoader::new(temp.path());
        let config = loader.load(None).await.unwrap();
        assert!(config.defaults.is_empty());
    }

    #[tokio::test]
    async fn test_load_default_file() {
        let temp = TempDir::new().unwrap();
        std::fs::write(
            temp.path().join(DEFAULT_CONFIG_FILE),
            "[defaults]\nsearchTerm = \"visa\"\n",
        )
        .unwrap();

        let config = ConfigLoader::new(temp.path()).load(None).await.unwrap();
        assert_eq!(config.defaults.search_term, "visa");
    }

    #[tokio::test]
    async fn test_missing_explicit_file() {
        let temp = TempDir::new().unwrap();
        let err = ConfigLoader::new(temp.path())
            .load(Some(Path::new("nope.toml")))
            .await
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::CONFIG_NOT_FOUND);
    }

    #[tokio::test]
    async fn test_unsupported_extension() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("settings.ini"), "x=1").unwrap();
        let err = ConfigLoader::new(temp.path())
            .load(Some(Path::new("settings.ini")))
            .await
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::CONFIG_UNSUPPORTED_FORMAT);
    }
}
