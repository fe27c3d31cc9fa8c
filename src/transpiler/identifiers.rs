//! Identifier quoting and qualified table names.

use serde::{Deserialize, Serialize};

use super::dialect::DialectProfile;
use crate::ast::Ident;
use crate::catalog::TableMeta;

/// Schema reachable without the dialect's namespace token.
pub const META_SCHEMA: &str = "TAP_SCHEMA";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdentifierKind {
    Catalog,
    Schema,
    Table,
    Column,
}

/// Which kinds of database identifiers are case-sensitive, hence quoted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseSensitivity {
    #[serde(default = "default_true")]
    pub catalog: bool,
    #[serde(default = "default_true")]
    pub schema: bool,
    #[serde(default = "default_true")]
    pub table: bool,
    #[serde(default = "default_true")]
    pub column: bool,
}

fn default_true() -> bool {
    true
}

impl Default for CaseSensitivity {
    fn default() -> Self {
        Self::all(true)
    }
}

impl CaseSensitivity {
    pub const fn all(sensitive: bool) -> Self {
        Self {
            catalog: sensitive,
            schema: sensitive,
            table: sensitive,
            column: sensitive,
        }
    }

    pub const fn new(catalog: bool, schema: bool, table: bool, column: bool) -> Self {
        Self {
            catalog,
            schema,
            table,
            column,
        }
    }

    pub fn is_case_sensitive(&self, kind: IdentifierKind) -> bool {
        match kind {
            IdentifierKind::Catalog => self.catalog,
            IdentifierKind::Schema => self.schema,
            IdentifierKind::Table => self.table,
            IdentifierKind::Column => self.column,
        }
    }
}

/// Wrap `name` in `quote`, doubling any embedded quote character.
pub fn quote_with(name: &str, quote: char) -> String {
    let doubled: String = [quote, quote].iter().collect();
    format!("{q}{}{q}", name.replace(quote, &doubled), q = quote)
}

impl DialectProfile {
    /// Render a database identifier of the given kind.
    ///
    /// Quoted when that kind is case-sensitive, bare otherwise, whatever
    /// the case of `name`.
    pub fn quote(&self, name: &str, kind: IdentifierKind) -> String {
        if self.case_sensitivity().is_case_sensitive(kind) {
            quote_with(name, self.quote_char())
        } else {
            name.to_string()
        }
    }

    /// Render an identifier quoted regardless of the policy.
    pub fn quote_always(&self, name: &str) -> String {
        quote_with(name, self.quote_char())
    }

    /// Render a query alias: quoted only when it was written quoted.
    pub fn quote_alias(&self, alias: &Ident) -> String {
        if alias.case_sensitive {
            self.quote_always(&alias.name)
        } else {
            alias.name.clone()
        }
    }

    /// Database name of a select label: as written when quoted, lower-cased
    /// otherwise.
    pub fn label_name(name: &str, case_sensitive: bool) -> String {
        if case_sensitive {
            name.to_string()
        } else {
            name.to_lowercase()
        }
    }

    /// Render a select label (` AS <label>`).
    ///
    /// Always quoted, so an outer query can reference it with the same text
    /// whatever the backend's case folding.
    pub fn quote_label(&self, name: &str, case_sensitive: bool) -> String {
        self.quote_always(&Self::label_name(name, case_sensitive))
    }

    /// `[catalog.]schema`, or an empty string for a table without schema.
    pub fn qualified_schema_name(&self, table: &TableMeta) -> String {
        let Some(schema) = &table.db_schema else {
            return String::new();
        };
        let mut buf = String::new();
        if let Some(catalog) = &table.db_catalog {
            buf.push_str(&self.quote(catalog, IdentifierKind::Catalog));
            buf.push('.');
        }
        buf.push_str(&self.quote(schema, IdentifierKind::Schema));
        buf
    }

    /// Full database name of a table.
    ///
    /// With a namespace token (`dbo`), the schema and table are separated by
    /// `.<namespace>.` unless the qualified schema contains the meta-schema
    /// name (case-insensitively), in which case a single `.` is used.
    pub fn qualified_table_name(&self, table: &TableMeta) -> String {
        let mut buf = self.qualified_schema_name(table);
        if !buf.is_empty() {
            match self.namespace() {
                Some(ns) if !buf.to_uppercase().contains(META_SCHEMA) => {
                    buf.push('.');
                    buf.push_str(ns);
                    buf.push('.');
                }
                _ => buf.push('.'),
            }
        }
        buf.push_str(&self.quote(&table.db_name, IdentifierKind::Table));
        buf
    }
}
