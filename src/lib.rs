//! # adql-sql
//!
//! Translates checked ADQL query trees into SQL for a target database.
//!
//! The engine is dialect-agnostic: identifier quoting, pagination,
//! concatenation, native type names and function spellings all come from a
//! [`DialectProfile`](transpiler::DialectProfile). `NATURAL` and `USING`
//! joins are rewritten into explicit `ON` predicates using the column lists
//! of a [`ColumnCatalog`](catalog::ColumnCatalog).
//!
//! ## Quick Example
//!
//! ```
//! use adql_sql::prelude::*;
//! use adql_sql::ast::builders::*;
//!
//! let profile = DialectProfile::new(Dialect::SqlServer);
//! let catalog = MemoryCatalog::new();
//!
//! let query = Query::select_from(table("gaia"))
//!     .distinct()
//!     .top(10)
//!     .item(col("ra"))
//!     .item(col("dec"));
//!
//! let sql = adql_sql::translate(&query, &catalog, &profile).unwrap();
//! assert_eq!(sql, "SELECT DISTINCT TOP 10 ra, dec\nFROM gaia");
//! ```

pub mod ast;
pub mod catalog;
pub mod config;
pub mod error;
pub mod transpiler;
pub mod types;

pub mod prelude {
    pub use crate::ast::*;
    pub use crate::catalog::{ColumnCatalog, ColumnMeta, MemoryCatalog, TableMeta};
    pub use crate::config::DialectConfig;
    pub use crate::error::*;
    pub use crate::transpiler::{
        CaseSensitivity, Dialect, DialectProfile, IdentifierKind, Pagination, ToSql, Translator,
    };
    pub use crate::types::{Datatype, DbType};
}

/// Translate a query into SQL for `profile`, resolving implicit joins
/// against `catalog`.
pub fn translate(
    query: &ast::Query,
    catalog: &dyn catalog::ColumnCatalog,
    profile: &transpiler::DialectProfile,
) -> error::TranslationResult<String> {
    transpiler::Translator::new(profile, catalog).translate(query)
}
