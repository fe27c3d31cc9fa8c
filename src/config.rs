//! Dialect configuration.
//!
//! A `dialect.toml` names the target database and overrides the profile
//! settings that vary between deployments:
//!
//! ```toml
//! dialect = "sqlserver"
//! default_variable_length = 2048
//! pagination = "top"
//!
//! [case_sensitivity]
//! catalog = false
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::TranslationResult;
use crate::transpiler::{CaseSensitivity, Dialect, DialectProfile, Pagination};

/// Construction-time settings of a [`DialectProfile`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialectConfig {
    /// Target database.
    #[serde(default)]
    pub dialect: Dialect,

    /// Length for bounded types declared without one (dialect default otherwise).
    #[serde(default)]
    pub default_variable_length: Option<u32>,

    /// Pagination style override.
    #[serde(default)]
    pub pagination: Option<Pagination>,

    /// Which identifier kinds are quoted. All of them by default.
    #[serde(default)]
    pub case_sensitivity: CaseSensitivity,
}

impl DialectConfig {
    /// Create a new configuration builder
    pub fn builder() -> DialectConfigBuilder {
        DialectConfigBuilder::default()
    }

    pub fn from_toml(content: &str) -> TranslationResult<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> TranslationResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml(&content)?;
        tracing::info!("Loaded dialect config from {} ({})", path.display(), config.dialect);
        Ok(config)
    }

    /// `<config_dir>/adql-sql/dialect.toml`, when the platform has a config
    /// directory.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("adql-sql").join("dialect.toml"))
    }

    /// Load from [`default_path`](Self::default_path) if that file exists,
    /// otherwise use the built-in defaults.
    pub fn load() -> TranslationResult<Self> {
        match Self::default_path() {
            Some(path) if path.exists() => Self::from_file(path),
            _ => {
                tracing::debug!("No dialect config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Build the profile this configuration describes.
    pub fn profile(&self) -> TranslationResult<DialectProfile> {
        DialectProfile::from_config(self)
    }
}

/// Builder for DialectConfig
#[derive(Debug, Default)]
pub struct DialectConfigBuilder {
    config: DialectConfig,
}

impl DialectConfigBuilder {
    pub fn dialect(mut self, dialect: Dialect) -> Self {
        self.config.dialect = dialect;
        self
    }

    pub fn default_variable_length(mut self, length: u32) -> Self {
        self.config.default_variable_length = Some(length);
        self
    }

    pub fn pagination(mut self, pagination: Pagination) -> Self {
        self.config.pagination = Some(pagination);
        self
    }

    pub fn case_sensitivity(mut self, case_sensitivity: CaseSensitivity) -> Self {
        self.config.case_sensitivity = case_sensitivity;
        self
    }

    /// Build the configuration
    pub fn build(self) -> DialectConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TranslationError;

    #[test]
    fn test_parse_full_config() {
        let config = DialectConfig::from_toml(
            r#"
            dialect = "postgres"
            default_variable_length = 512
            pagination = "fetch_first"

            [case_sensitivity]
            catalog = false
            column = false
            "#,
        )
        .unwrap();

        assert_eq!(config.dialect, Dialect::Postgres);
        assert_eq!(config.default_variable_length, Some(512));
        assert_eq!(config.pagination, Some(Pagination::FetchFirst));
        assert_eq!(config.case_sensitivity, CaseSensitivity::new(false, true, true, false));
    }

    #[test]
    fn test_empty_config_is_default() {
        let config = DialectConfig::from_toml("").unwrap();
        assert_eq!(config, DialectConfig::default());
        assert_eq!(config.dialect, Dialect::SqlServer);
        assert_eq!(config.case_sensitivity, CaseSensitivity::all(true));
    }

    #[test]
    fn test_dialect_short_names() {
        for (name, dialect) in [
            ("pg", Dialect::Postgres),
            ("postgresql", Dialect::Postgres),
            ("mssql", Dialect::SqlServer),
        ] {
            let config = DialectConfig::from_toml(&format!("dialect = \"{}\"", name)).unwrap();
            assert_eq!(config.dialect, dialect);
            assert_eq!(name.parse::<Dialect>().unwrap(), dialect);
        }
    }

    #[test]
    fn test_unknown_dialect_is_rejected() {
        let err = DialectConfig::from_toml(r#"dialect = "oracle""#).unwrap_err();
        assert!(matches!(err, TranslationError::Toml(_)));
    }

    #[test]
    fn test_zero_length_is_a_config_error() {
        let config = DialectConfig::builder().default_variable_length(0).build();
        let err = config.profile().unwrap_err();
        assert!(matches!(err, TranslationError::Config(_)));
    }

    #[test]
    fn test_builder_to_profile() {
        let profile = DialectConfig::builder()
            .dialect(Dialect::MySql)
            .default_variable_length(255)
            .pagination(Pagination::FetchFirst)
            .build()
            .profile()
            .unwrap();
        assert_eq!(profile.dialect(), Dialect::MySql);
        assert_eq!(profile.default_variable_length(), 255);
        assert_eq!(profile.pagination(), Pagination::FetchFirst);
        assert_eq!(profile.quote_char(), '`');
    }

    #[test]
    fn test_default_path_file_name() {
        if let Some(path) = DialectConfig::default_path() {
            assert!(path.ends_with("adql-sql/dialect.toml"));
        }
    }
}
