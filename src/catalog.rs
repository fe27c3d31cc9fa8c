//! Table and column metadata, and the catalog the join resolver reads.
//!
//! # Example
//! ```
//! use adql_sql::catalog::MemoryCatalog;
//! use adql_sql::transpiler::{Dialect, DialectProfile};
//!
//! let json = r#"{
//!     "tables": [{
//!         "schema": "dr3",
//!         "name": "gaia_source",
//!         "columns": [
//!             { "name": "source_id", "type": "bigint" },
//!             { "name": "ra", "type": "float(53)" }
//!         ]
//!     }]
//! }"#;
//!
//! let profile = DialectProfile::new(Dialect::SqlServer);
//! let catalog = MemoryCatalog::from_json(json, &profile).unwrap();
//! assert_eq!(catalog.len(), 1);
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ast::TableName;
use crate::error::{TranslationError, TranslationResult};
use crate::transpiler::DialectProfile;
use crate::types::DbType;

/// Database-side description of a table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableMeta {
    /// Name of the table in the query language.
    pub adql_name: String,
    #[serde(default)]
    pub db_catalog: Option<String>,
    #[serde(default)]
    pub db_schema: Option<String>,
    pub db_name: String,
}

impl TableMeta {
    pub fn new(adql_name: impl Into<String>, db_name: impl Into<String>) -> Self {
        Self {
            adql_name: adql_name.into(),
            db_catalog: None,
            db_schema: None,
            db_name: db_name.into(),
        }
    }

    /// A table whose database name is its query-language name.
    pub fn named(name: impl Into<String>) -> Self {
        let name = name.into();
        Self::new(name.clone(), name)
    }

    pub fn in_schema(mut self, schema: impl Into<String>) -> Self {
        self.db_schema = Some(schema.into());
        self
    }

    pub fn in_catalog(mut self, catalog: impl Into<String>) -> Self {
        self.db_catalog = Some(catalog.into());
        self
    }
}

/// Database-side description of a column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnMeta {
    /// Owning table.
    #[serde(default)]
    pub table: Option<TableMeta>,
    pub adql_name: String,
    pub db_name: String,
    /// Whether the query-language name must be matched exactly.
    #[serde(default)]
    pub case_sensitive: bool,
    /// `None` when the native type has no usable mapping.
    #[serde(default)]
    pub datatype: Option<DbType>,
    /// Output label of a subquery; `db_name` is rendered always quoted.
    #[serde(skip)]
    pub labelled: bool,
}

impl ColumnMeta {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            table: None,
            adql_name: name.clone(),
            db_name: name,
            case_sensitive: false,
            datatype: None,
            labelled: false,
        }
    }

    /// Column named by a subquery's select label.
    pub fn label(name: impl Into<String>, case_sensitive: bool) -> Self {
        let name = name.into();
        let mut meta = Self::new(DialectProfile::label_name(&name, case_sensitive));
        meta.adql_name = name;
        meta.case_sensitive = case_sensitive;
        meta.labelled = true;
        meta
    }

    pub fn db_name(mut self, db_name: impl Into<String>) -> Self {
        self.db_name = db_name.into();
        self
    }

    pub fn owned_by(mut self, table: TableMeta) -> Self {
        self.table = Some(table);
        self
    }

    pub fn case_sensitive(mut self) -> Self {
        self.case_sensitive = true;
        self
    }

    pub fn typed(mut self, datatype: DbType) -> Self {
        self.datatype = Some(datatype);
        self
    }

    /// Whether `name` designates this column.
    ///
    /// An exact match is required when either the searched name or the
    /// column's own name is case-sensitive.
    pub fn matches(&self, name: &str, case_sensitive: bool) -> bool {
        if case_sensitive || self.case_sensitive {
            self.adql_name == name
        } else {
            self.adql_name.eq_ignore_ascii_case(name)
        }
    }
}

/// Read-only column lookup.
///
/// Implementations must tolerate concurrent reads; the translator calls
/// `columns_of` once per join operand and may call it repeatedly within one
/// translation.
pub trait ColumnCatalog: Send + Sync {
    /// Columns of a base table, in declaration order.
    fn columns_of(&self, table: &TableName) -> TranslationResult<Vec<ColumnMeta>>;
}

/// Catalog definition as loaded from JSON.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogDef {
    pub tables: Vec<TableDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableDef {
    #[serde(default)]
    pub catalog: Option<String>,
    #[serde(default)]
    pub schema: Option<String>,
    pub name: String,
    /// Database name when it differs from `name`.
    #[serde(default)]
    pub db_name: Option<String>,
    pub columns: Vec<ColumnDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnDef {
    pub name: String,
    #[serde(default)]
    pub db_name: Option<String>,
    /// Native type declaration, e.g. `varchar(32)`.
    #[serde(rename = "type", alias = "typ", default)]
    pub typ: Option<String>,
    /// Driver-level type code, if the source reports one.
    #[serde(default)]
    pub type_code: i32,
    #[serde(default)]
    pub case_sensitive: bool,
}

#[derive(Debug, Clone)]
struct CatalogTable {
    adql_schema: Option<String>,
    meta: TableMeta,
    columns: Vec<ColumnMeta>,
}

/// In-memory catalog.
#[derive(Debug, Clone, Default)]
pub struct MemoryCatalog {
    tables: Vec<CatalogTable>,
}

impl MemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a table. Columns are re-owned by `meta`.
    pub fn add_table(&mut self, adql_schema: Option<&str>, meta: TableMeta, columns: Vec<ColumnMeta>) {
        let columns = columns
            .into_iter()
            .map(|c| c.owned_by(meta.clone()))
            .collect();
        self.tables.push(CatalogTable {
            adql_schema: adql_schema.map(str::to_string),
            meta,
            columns,
        });
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Build a catalog, mapping native type declarations through `profile`.
    pub fn from_def(def: &CatalogDef, profile: &DialectProfile) -> Self {
        let mut catalog = Self::new();
        for table in &def.tables {
            let mut meta = TableMeta::new(
                table.name.clone(),
                table.db_name.clone().unwrap_or_else(|| table.name.clone()),
            );
            meta.db_schema = table.schema.clone();
            meta.db_catalog = table.catalog.clone();

            let columns = table
                .columns
                .iter()
                .map(|c| {
                    let mut col = ColumnMeta::new(c.name.clone())
                        .db_name(c.db_name.clone().unwrap_or_else(|| c.name.clone()));
                    col.case_sensitive = c.case_sensitive;
                    if let Some(decl) = &c.typ {
                        let (raw, params) = split_native_type(decl);
                        col.datatype =
                            profile.from_native(c.type_code, &raw, &raw.to_lowercase(), &params);
                        if col.datatype.is_none() {
                            tracing::warn!(
                                "No datatype mapping for {}.{} ({}), exposing it untyped",
                                table.name,
                                c.name,
                                decl
                            );
                        }
                    }
                    col
                })
                .collect();

            tracing::debug!("Loaded catalog table: {}", table.name);
            catalog.add_table(table.schema.as_deref(), meta, columns);
        }
        catalog
    }

    /// Load a catalog from a JSON string.
    pub fn from_json(json: &str, profile: &DialectProfile) -> TranslationResult<Self> {
        let def: CatalogDef = serde_json::from_str(json)?;
        Ok(Self::from_def(&def, profile))
    }

    /// Load a catalog from a JSON file.
    pub fn from_file(path: impl AsRef<Path>, profile: &DialectProfile) -> TranslationResult<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let catalog = Self::from_json(&content, profile)?;
        tracing::info!(
            "Loaded {} catalog tables from {}",
            catalog.len(),
            path.as_ref().display()
        );
        Ok(catalog)
    }

    fn find(&self, name: &TableName) -> Option<&CatalogTable> {
        if let Some(meta) = &name.db {
            return self.tables.iter().find(|t| t.meta == *meta);
        }
        self.tables.iter().find(|t| {
            let schema_ok = match (&name.schema, &t.adql_schema) {
                (None, _) => true,
                (Some(want), Some(have)) => want.matches(have, false),
                (Some(_), None) => false,
            };
            schema_ok && name.table.matches(&t.meta.adql_name, false)
        })
    }

    /// Table metadata for a query-language table name.
    pub fn table(&self, name: &TableName) -> Option<&TableMeta> {
        self.find(name).map(|t| &t.meta)
    }

    /// Return `name` with its catalog link set.
    pub fn link(&self, name: TableName) -> TranslationResult<TableName> {
        let meta = self
            .table(&name)
            .cloned()
            .ok_or_else(|| TranslationError::UnknownTable(name.to_string()))?;
        Ok(name.linked(meta))
    }

    /// Metadata of one column of a table.
    pub fn column(&self, table: &TableName, column: &str) -> Option<&ColumnMeta> {
        self.find(table)?
            .columns
            .iter()
            .find(|c| c.matches(column, false))
    }
}

impl ColumnCatalog for MemoryCatalog {
    fn columns_of(&self, table: &TableName) -> TranslationResult<Vec<ColumnMeta>> {
        self.find(table)
            .map(|t| t.columns.clone())
            .ok_or_else(|| TranslationError::UnknownTable(table.to_string()))
    }
}

/// Split `varchar(32)` into `("varchar", ["32"])`.
pub(crate) fn split_native_type(decl: &str) -> (String, Vec<String>) {
    match decl.find('(') {
        Some(open) => {
            let name = decl[..open].trim().to_string();
            let inner = decl[open + 1..].trim_end().trim_end_matches(')');
            let params = inner
                .split(',')
                .map(|p| p.trim().to_string())
                .filter(|p| !p.is_empty())
                .collect();
            (name, params)
        }
        None => (decl.trim().to_string(), Vec::new()),
    }
}
