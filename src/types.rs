//! Backend-independent datatypes.

use serde::{Deserialize, Serialize};

/// Datatype tag of the query language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Datatype {
    Smallint,
    Integer,
    Bigint,
    Real,
    Double,
    Char,
    Varchar,
    Binary,
    Varbinary,
    Blob,
    Clob,
    Timestamp,
    Point,
    Region,
}

impl Datatype {
    /// Character and binary types that take a length bound.
    pub fn is_bounded(&self) -> bool {
        matches!(
            self,
            Datatype::Char | Datatype::Varchar | Datatype::Binary | Datatype::Varbinary
        )
    }

    pub fn is_geometry(&self) -> bool {
        matches!(self, Datatype::Point | Datatype::Region)
    }
}

impl std::fmt::Display for Datatype {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Datatype::Smallint => write!(f, "SMALLINT"),
            Datatype::Integer => write!(f, "INTEGER"),
            Datatype::Bigint => write!(f, "BIGINT"),
            Datatype::Real => write!(f, "REAL"),
            Datatype::Double => write!(f, "DOUBLE"),
            Datatype::Char => write!(f, "CHAR"),
            Datatype::Varchar => write!(f, "VARCHAR"),
            Datatype::Binary => write!(f, "BINARY"),
            Datatype::Varbinary => write!(f, "VARBINARY"),
            Datatype::Blob => write!(f, "BLOB"),
            Datatype::Clob => write!(f, "CLOB"),
            Datatype::Timestamp => write!(f, "TIMESTAMP"),
            Datatype::Point => write!(f, "POINT"),
            Datatype::Region => write!(f, "REGION"),
        }
    }
}

/// A datatype with its optional length.
///
/// `length` is `None` when no length was specified. A zero length is
/// normalized to `None` on construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DbType {
    pub datatype: Datatype,
    #[serde(default)]
    pub length: Option<u32>,
}

impl DbType {
    pub fn new(datatype: Datatype) -> Self {
        Self {
            datatype,
            length: None,
        }
    }

    pub fn with_length(datatype: Datatype, length: Option<u32>) -> Self {
        Self {
            datatype,
            length: length.filter(|l| *l > 0),
        }
    }

    /// The declared length, ignoring zero.
    pub fn length(&self) -> Option<u32> {
        self.length.filter(|l| *l > 0)
    }
}

impl From<Datatype> for DbType {
    fn from(datatype: Datatype) -> Self {
        Self::new(datatype)
    }
}

impl std::fmt::Display for DbType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.length() {
            Some(len) => write!(f, "{}({})", self.datatype, len),
            None => write!(f, "{}", self.datatype),
        }
    }
}
