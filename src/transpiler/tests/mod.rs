//! Transpiler test modules.
//!
//! Tests are organized by category:
//! - `core`: SELECT assembly, clauses, operands and constraints
//! - `dialects`: per-dialect quoting, pagination, qualified names and types
//! - `joins`: NATURAL and USING resolution
//! - `functions`: math overrides and geometry passthrough

mod dialects;
mod functions;

use crate::ast::{ColumnRef, Ident, Query, TableName};
use crate::catalog::{ColumnMeta, MemoryCatalog, TableMeta};
use crate::transpiler::{CaseSensitivity, Dialect, DialectProfile, ToSql, Translator};

/// Tables shared by the transpiler tests.
///
/// - `dr3.gaia` (db `gaia_source`): id (db `source_id`), ra, dec, mag
/// - `l_tab`, `r_tab`: ra, dec, id
/// - `hip`: id, mag
/// - `dup`: x, x
/// - `x_tab`: x
/// - `flux_tab`: flux
/// - `TAP_SCHEMA.tables`: table_name
pub(super) fn catalog() -> MemoryCatalog {
    let mut catalog = MemoryCatalog::new();
    catalog.add_table(
        Some("dr3"),
        TableMeta::new("gaia", "gaia_source").in_schema("dr3"),
        vec![
            ColumnMeta::new("id").db_name("source_id"),
            ColumnMeta::new("ra"),
            ColumnMeta::new("dec"),
            ColumnMeta::new("mag"),
        ],
    );
    for name in ["l_tab", "r_tab"] {
        catalog.add_table(None, TableMeta::named(name), columns(&["ra", "dec", "id"]));
    }
    catalog.add_table(None, TableMeta::named("hip"), columns(&["id", "mag"]));
    catalog.add_table(None, TableMeta::named("dup"), columns(&["x", "x"]));
    catalog.add_table(None, TableMeta::named("x_tab"), columns(&["x"]));
    catalog.add_table(None, TableMeta::named("flux_tab"), columns(&["flux"]));
    catalog.add_table(
        Some("TAP_SCHEMA"),
        TableMeta::named("tables").in_schema("TAP_SCHEMA"),
        columns(&["table_name"]),
    );
    catalog
}

fn columns(names: &[&str]) -> Vec<ColumnMeta> {
    names.iter().map(|n| ColumnMeta::new(*n)).collect()
}

/// Profile that never quotes, for readable expectations.
pub(super) fn plain(dialect: Dialect) -> DialectProfile {
    DialectProfile::new(dialect).with_case_sensitivity(CaseSensitivity::all(false))
}

/// `dr3.gaia`, linked to its catalog entry.
pub(super) fn gaia(catalog: &MemoryCatalog) -> TableName {
    catalog
        .link(TableName::new("gaia").in_schema("dr3"))
        .unwrap()
}

/// Column `name` of `dr3.gaia` seen through the FROM alias `g`.
pub(super) fn gaia_col(catalog: &MemoryCatalog, name: &str) -> ColumnRef {
    let meta = catalog.column(&gaia(catalog), name).cloned().unwrap();
    ColumnRef::new(name).of(Ident::new("g")).linked(meta)
}

pub(super) fn render<N: ToSql + ?Sized>(node: &N, profile: &DialectProfile) -> String {
    let catalog = catalog();
    Translator::new(profile, &catalog).translate(node).unwrap()
}

pub(super) fn render_query(query: &Query, profile: &DialectProfile) -> String {
    let catalog = catalog();
    crate::translate(query, &catalog, profile).unwrap()
}
