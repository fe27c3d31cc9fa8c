//! Error types for ADQL translation.

use thiserror::Error;

/// Which operand of a join a column lookup was run against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinSide {
    Left,
    Right,
}

impl std::fmt::Display for JoinSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JoinSide::Left => write!(f, "left"),
            JoinSide::Right => write!(f, "right"),
        }
    }
}

/// Why a NATURAL or USING join column could not be matched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JoinColumnError {
    /// No column of that name in the operand.
    #[error("Column \"{column}\" doesn't exist in the {side} table")]
    NotFound { column: String, side: JoinSide },

    /// More than one column of that name in the operand.
    #[error("Common column name \"{column}\" appears {count} times in the {side} table")]
    Ambiguous {
        column: String,
        side: JoinSide,
        count: usize,
    },

    /// A NATURAL join whose operands share no column name.
    #[error("No common column between the joined tables")]
    NoCommonColumn,
}

/// The main error type for translation.
#[derive(Debug, Error)]
pub enum TranslationError {
    /// A NATURAL or USING join could not be rewritten into an ON predicate.
    #[error("Impossible to resolve the {kind} between {left} and {right}!")]
    UnresolvedJoin {
        kind: &'static str,
        left: String,
        right: String,
        #[source]
        source: JoinColumnError,
    },

    /// A dialect function rule needs an argument the call does not have.
    #[error("Function {function} expects {expected} argument(s), got {found}")]
    Arity {
        function: String,
        expected: usize,
        found: usize,
    },

    /// A join operand names a table the catalog does not know.
    #[error("Unknown table: '{0}'")]
    UnknownTable(String),

    /// A database value was handed over to be read as a geometry.
    #[error("Unsupported geometrical value! The value \"{0}\" can not be parsed as a region.")]
    UnsupportedGeometry(String),

    /// A geometry was handed over to be written to the database.
    #[error("Geometries can not be uploaded in the database in this implementation!")]
    GeometryUpload,

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed TOML configuration.
    #[error("Invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),

    /// Malformed JSON catalog.
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl TranslationError {
    /// Create an arity error for a function call.
    pub fn arity(function: impl Into<String>, expected: usize, found: usize) -> Self {
        Self::Arity {
            function: function.into(),
            expected,
            found,
        }
    }
}

/// Result type alias for translation operations.
pub type TranslationResult<T> = Result<T, TranslationError>;
