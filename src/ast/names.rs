use serde::{Deserialize, Serialize};

use crate::catalog::{ColumnMeta, TableMeta};

/// An identifier as written in the query.
///
/// `case_sensitive` is set when the identifier was double-quoted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Ident {
    pub name: String,
    #[serde(default)]
    pub case_sensitive: bool,
}

impl Ident {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            case_sensitive: false,
        }
    }

    pub fn quoted(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            case_sensitive: true,
        }
    }

    /// Name comparison honouring case sensitivity of either side.
    pub fn matches(&self, other: &str, other_case_sensitive: bool) -> bool {
        if self.case_sensitive || other_case_sensitive {
            self.name == other
        } else {
            self.name.eq_ignore_ascii_case(other)
        }
    }
}

impl From<&str> for Ident {
    fn from(name: &str) -> Self {
        Ident::new(name)
    }
}

impl std::fmt::Display for Ident {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.case_sensitive {
            write!(f, "\"{}\"", self.name.replace('"', "\"\""))
        } else {
            write!(f, "{}", self.name)
        }
    }
}

/// A base table as written in the query, with the catalog link set by the
/// upstream checker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableName {
    #[serde(default)]
    pub catalog: Option<Ident>,
    #[serde(default)]
    pub schema: Option<Ident>,
    pub table: Ident,
    #[serde(default)]
    pub db: Option<TableMeta>,
}

impl TableName {
    pub fn new(table: impl Into<Ident>) -> Self {
        Self {
            catalog: None,
            schema: None,
            table: table.into(),
            db: None,
        }
    }

    pub fn in_schema(mut self, schema: impl Into<Ident>) -> Self {
        self.schema = Some(schema.into());
        self
    }

    pub fn in_catalog(mut self, catalog: impl Into<Ident>) -> Self {
        self.catalog = Some(catalog.into());
        self
    }

    /// Attach the database table this name resolves to.
    pub fn linked(mut self, meta: TableMeta) -> Self {
        self.db = Some(meta);
        self
    }
}

impl std::fmt::Display for TableName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(catalog) = &self.catalog {
            write!(f, "{}.", catalog)?;
        }
        if let Some(schema) = &self.schema {
            write!(f, "{}.", schema)?;
        }
        write!(f, "{}", self.table)
    }
}

/// A column reference.
///
/// `prefix` is the table prefix as written (`t.ra`, `public.gaia.ra`);
/// `table_alias` is the alias of the FROM item the column was resolved
/// against, if that item has one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnRef {
    #[serde(default)]
    pub prefix: Option<TableName>,
    #[serde(default)]
    pub table_alias: Option<Ident>,
    pub name: Ident,
    #[serde(default)]
    pub db: Option<ColumnMeta>,
}

impl ColumnRef {
    pub fn new(name: impl Into<Ident>) -> Self {
        Self {
            prefix: None,
            table_alias: None,
            name: name.into(),
            db: None,
        }
    }

    /// Prefix with a table alias, as in `g.ra`.
    pub fn of(mut self, alias: impl Into<Ident>) -> Self {
        let alias = alias.into();
        self.prefix = Some(TableName::new(alias.clone()));
        self.table_alias = Some(alias);
        self
    }

    /// Prefix with a table name, as in `gaia.ra`.
    pub fn of_table(mut self, table: TableName) -> Self {
        self.prefix = Some(table);
        self
    }

    pub fn linked(mut self, meta: ColumnMeta) -> Self {
        self.db = Some(meta);
        self
    }
}

impl std::fmt::Display for ColumnRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(prefix) = &self.prefix {
            write!(f, "{}.", prefix)?;
        }
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quoted_ident_display() {
        assert_eq!(Ident::quoted("Mag\"V").to_string(), "\"Mag\"\"V\"");
        assert_eq!(Ident::new("ra").to_string(), "ra");
    }

    #[test]
    fn test_ident_matching() {
        assert!(Ident::new("RA").matches("ra", false));
        assert!(!Ident::quoted("RA").matches("ra", false));
        assert!(!Ident::new("RA").matches("ra", true));
    }

    #[test]
    fn test_column_display() {
        let col = ColumnRef::new("ra").of_table(TableName::new("gaia").in_schema("dr3"));
        assert_eq!(col.to_string(), "dr3.gaia.ra");
        assert_eq!(ColumnRef::new("dec").of("g").to_string(), "g.dec");
    }
}
