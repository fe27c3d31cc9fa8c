use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::functions::FunctionMapper;
use super::identifiers::CaseSensitivity;
use super::sql::mysql::MySqlDialect;
use super::sql::postgres::PostgresDialect;
use super::sql::sqlite::SqliteDialect;
use super::sql::sqlserver::SqlServerDialect;
use super::traits::DialectDefaults;
use super::types::TypeMapper;
use crate::config::DialectConfig;
use crate::error::{TranslationError, TranslationResult};
use crate::types::DbType;

/// Supported SQL Dialects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    #[default]
    #[serde(alias = "mssql")]
    SqlServer,
    #[serde(alias = "postgresql", alias = "pg")]
    Postgres,
    MySql,
    Sqlite,
}

impl Dialect {
    pub const ALL: [Dialect; 4] = [
        Dialect::SqlServer,
        Dialect::Postgres,
        Dialect::MySql,
        Dialect::Sqlite,
    ];

    pub fn defaults(&self) -> Box<dyn DialectDefaults> {
        match self {
            Dialect::SqlServer => Box::new(SqlServerDialect),
            Dialect::Postgres => Box::new(PostgresDialect),
            Dialect::MySql => Box::new(MySqlDialect),
            Dialect::Sqlite => Box::new(SqliteDialect),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Dialect::SqlServer => "sqlserver",
            Dialect::Postgres => "postgres",
            Dialect::MySql => "mysql",
            Dialect::Sqlite => "sqlite",
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Dialect {
    type Err = TranslationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sqlserver" | "mssql" => Ok(Dialect::SqlServer),
            "postgres" | "postgresql" | "pg" => Ok(Dialect::Postgres),
            "mysql" => Ok(Dialect::MySql),
            "sqlite" => Ok(Dialect::Sqlite),
            other => Err(TranslationError::Config(format!(
                "Unknown dialect: '{}'",
                other
            ))),
        }
    }
}

/// Where the row limit of a SELECT goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pagination {
    /// `SELECT [DISTINCT] TOP n ...`
    Top,
    /// Trailing `LIMIT n`.
    Limit,
    /// Trailing `FETCH FIRST n ROWS ONLY`.
    FetchFirst,
}

/// How string operands are concatenated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConcatStyle {
    /// Infix operator, e.g. `+` or `||`.
    Operator(&'static str),
    /// Variadic function, e.g. `CONCAT`.
    Function(&'static str),
}

/// Everything dialect-specific the translator consults.
///
/// Built once, then shared read-only by any number of translations.
#[derive(Debug, Clone)]
pub struct DialectProfile {
    dialect: Dialect,
    quote_char: char,
    concat: ConcatStyle,
    pagination: Pagination,
    namespace: Option<&'static str>,
    case_sensitivity: CaseSensitivity,
    default_variable_length: u32,
    types: TypeMapper,
    functions: FunctionMapper,
}

impl DialectProfile {
    /// Profile with the dialect's defaults and every identifier kind
    /// case-sensitive.
    pub fn new(dialect: Dialect) -> Self {
        let defaults = dialect.defaults();
        Self {
            dialect,
            quote_char: defaults.quote_char(),
            concat: defaults.concat_style(),
            pagination: defaults.pagination(),
            namespace: defaults.namespace(),
            case_sensitivity: CaseSensitivity::default(),
            default_variable_length: defaults.default_variable_length(),
            types: defaults.type_mapper(),
            functions: defaults.function_mapper(),
        }
    }

    pub fn with_case_sensitivity(mut self, case_sensitivity: CaseSensitivity) -> Self {
        self.case_sensitivity = case_sensitivity;
        self
    }

    /// Zero is ignored; a bounded type always keeps a positive length.
    pub fn with_default_variable_length(mut self, length: u32) -> Self {
        if length > 0 {
            self.default_variable_length = length;
        }
        self
    }

    pub fn with_pagination(mut self, pagination: Pagination) -> Self {
        self.pagination = pagination;
        self
    }

    pub fn from_config(config: &DialectConfig) -> TranslationResult<Self> {
        let mut profile = Self::new(config.dialect).with_case_sensitivity(config.case_sensitivity);
        if let Some(length) = config.default_variable_length {
            if length == 0 {
                return Err(TranslationError::Config(
                    "default_variable_length must be positive".to_string(),
                ));
            }
            profile = profile.with_default_variable_length(length);
        }
        if let Some(pagination) = config.pagination {
            profile = profile.with_pagination(pagination);
        }
        tracing::debug!(
            dialect = %profile.dialect,
            pagination = ?profile.pagination,
            "Built dialect profile"
        );
        Ok(profile)
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    pub fn quote_char(&self) -> char {
        self.quote_char
    }

    pub fn concat_style(&self) -> ConcatStyle {
        self.concat
    }

    pub fn pagination(&self) -> Pagination {
        self.pagination
    }

    pub fn namespace(&self) -> Option<&'static str> {
        self.namespace
    }

    pub fn case_sensitivity(&self) -> CaseSensitivity {
        self.case_sensitivity
    }

    pub fn default_variable_length(&self) -> u32 {
        self.default_variable_length
    }

    pub fn types(&self) -> &TypeMapper {
        &self.types
    }

    pub fn functions(&self) -> &FunctionMapper {
        &self.functions
    }

    /// Concatenate already-translated string operands.
    pub fn concat(&self, parts: &[String]) -> String {
        match parts {
            [] => String::new(),
            [single] => single.clone(),
            _ => match self.concat {
                ConcatStyle::Operator(op) => parts.join(&format!(" {} ", op)),
                ConcatStyle::Function(name) => format!("{}({})", name, parts.join(", ")),
            },
        }
    }

    /// Token placed right after `SELECT [DISTINCT]`.
    pub fn limit_prefix(&self, limit: u64) -> Option<String> {
        match self.pagination {
            Pagination::Top => Some(format!("TOP {}", limit)),
            _ => None,
        }
    }

    /// Clause appended after ORDER BY.
    pub fn limit_suffix(&self, limit: u64) -> Option<String> {
        match self.pagination {
            Pagination::Top => None,
            Pagination::Limit => Some(format!("LIMIT {}", limit)),
            Pagination::FetchFirst => Some(format!("FETCH FIRST {} ROWS ONLY", limit)),
        }
    }

    /// See [`TypeMapper::from_native`].
    pub fn from_native(
        &self,
        type_code: i32,
        raw_name: &str,
        normalized_name: &str,
        params: &[String],
    ) -> Option<DbType> {
        self.types.from_native(type_code, raw_name, normalized_name, params)
    }

    /// Native declaration of `ty`, using this profile's default length.
    pub fn to_native(&self, ty: Option<&DbType>) -> String {
        self.types.to_native(ty, self.default_variable_length)
    }
}

impl Default for DialectProfile {
    fn default() -> Self {
        Self::new(Dialect::default())
    }
}
