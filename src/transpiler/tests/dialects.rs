//! Per-dialect quoting, pagination, qualified names and type tables.

use pretty_assertions::assert_eq;

use super::{catalog, gaia, gaia_col, plain, render, render_query};
use crate::ast::builders::*;
use crate::ast::{Ident, Query, TableRef};
use crate::catalog::TableMeta;
use crate::transpiler::{
    CaseSensitivity, Dialect, DialectProfile, IdentifierKind, Pagination,
};
use crate::types::{Datatype, DbType};

fn gaia_query(limit: u64) -> Query {
    let c = catalog();
    Query::select_from(TableRef::base(gaia(&c)).alias("g"))
        .item(gaia_col(&c, "ra"))
        .top(limit)
}

#[test]
fn test_same_query_in_every_dialect() {
    let cases = [
        (
            Dialect::SqlServer,
            "SELECT TOP 3 g.\"ra\"\nFROM \"dr3\".dbo.\"gaia_source\" AS g",
        ),
        (
            Dialect::Postgres,
            "SELECT g.\"ra\"\nFROM \"dr3\".\"gaia_source\" AS g\nLIMIT 3",
        ),
        (
            Dialect::MySql,
            "SELECT g.`ra`\nFROM `dr3`.`gaia_source` AS g\nLIMIT 3",
        ),
        (
            Dialect::Sqlite,
            "SELECT g.\"ra\"\nFROM \"dr3\".\"gaia_source\" AS g\nLIMIT 3",
        ),
    ];
    for (dialect, expected) in cases {
        assert_eq!(render_query(&gaia_query(3), &DialectProfile::new(dialect)), expected);
    }
}

#[test]
fn test_fetch_first_pagination() {
    let profile = DialectProfile::new(Dialect::Postgres)
        .with_case_sensitivity(CaseSensitivity::all(false))
        .with_pagination(Pagination::FetchFirst);
    assert_eq!(
        render_query(&gaia_query(7), &profile),
        "SELECT g.ra\nFROM dr3.gaia_source AS g\nFETCH FIRST 7 ROWS ONLY"
    );
}

#[test]
fn test_per_kind_case_sensitivity() {
    let profile = DialectProfile::new(Dialect::SqlServer)
        .with_case_sensitivity(CaseSensitivity::new(false, false, true, false));
    assert_eq!(
        render_query(&gaia_query(1), &profile),
        "SELECT TOP 1 g.ra\nFROM dr3.dbo.\"gaia_source\" AS g"
    );
}

#[test]
fn test_column_flag_only_affects_columns() {
    let with_column = DialectProfile::new(Dialect::Sqlite);
    let without_column = DialectProfile::new(Dialect::Sqlite)
        .with_case_sensitivity(CaseSensitivity::new(true, true, true, false));
    let table = TableMeta::named("Gaia").in_schema("Dr3").in_catalog("Archive");
    assert_eq!(
        with_column.qualified_table_name(&table),
        without_column.qualified_table_name(&table)
    );
    assert_eq!(with_column.quote("Ra", IdentifierKind::Column), "\"Ra\"");
    assert_eq!(without_column.quote("Ra", IdentifierKind::Column), "Ra");
}

#[test]
fn test_quoting_is_deterministic() {
    for dialect in Dialect::ALL {
        for sensitive in [true, false] {
            let a = DialectProfile::new(dialect).with_case_sensitivity(CaseSensitivity::all(sensitive));
            let b = DialectProfile::new(dialect).with_case_sensitivity(CaseSensitivity::all(sensitive));
            for kind in [
                IdentifierKind::Catalog,
                IdentifierKind::Schema,
                IdentifierKind::Table,
                IdentifierKind::Column,
            ] {
                assert_eq!(a.quote("MixedCase", kind), b.quote("MixedCase", kind));
            }
        }
    }
}

#[test]
fn test_meta_schema_from_clause() {
    let c = catalog();
    let tables = c
        .link(table("tables").in_schema("TAP_SCHEMA"))
        .unwrap();
    let query = Query::select_from(tables);
    assert_eq!(
        render_query(&query, &DialectProfile::new(Dialect::SqlServer)),
        "SELECT *\nFROM \"TAP_SCHEMA\".\"tables\""
    );
    assert_eq!(
        render_query(&query, &plain(Dialect::SqlServer)),
        "SELECT *\nFROM TAP_SCHEMA.tables"
    );
}

#[test]
fn test_catalog_prefix_before_namespace() {
    let table = TableMeta::named("obs").in_schema("ivoa").in_catalog("archive");
    assert_eq!(
        plain(Dialect::SqlServer).qualified_table_name(&table),
        "archive.ivoa.dbo.obs"
    );
    assert_eq!(plain(Dialect::Postgres).qualified_table_name(&table), "archive.ivoa.obs");
}

#[test]
fn test_unbounded_fallback_per_dialect() {
    let expected = [
        (Dialect::SqlServer, "varchar(2048)", "varchar"),
        (Dialect::Postgres, "character varying(2048)", "text"),
        (Dialect::MySql, "varchar(2048)", "longtext"),
        (Dialect::Sqlite, "varchar(2048)", "text"),
    ];
    for (dialect, none, region) in expected {
        let profile = DialectProfile::new(dialect);
        assert_eq!(profile.to_native(None), none);
        assert_eq!(profile.to_native(Some(&DbType::new(Datatype::Region))), region);
        assert_eq!(profile.to_native(Some(&DbType::new(Datatype::Point))), region);
    }
}

#[test]
fn test_native_round_trip_is_valid_everywhere() {
    let names = [
        "smallint", "tinyint", "int", "integer", "bigint", "real", "float", "double",
        "double precision", "decimal", "numeric", "char", "nchar", "character", "varchar",
        "nvarchar", "character varying", "binary", "varbinary", "bytea", "blob", "image",
        "text", "ntext", "clob", "longtext", "timestamp", "datetime", "date", "time",
    ];
    for dialect in Dialect::ALL {
        let profile = DialectProfile::new(dialect);
        for name in names {
            for params in [vec![], vec!["16".to_string()], vec!["max".to_string()]] {
                let Some(ty) = profile.from_native(0, name, name, &params) else {
                    continue;
                };
                let native = profile.to_native(Some(&ty));
                assert!(!native.trim().is_empty(), "{}: {} -> empty", dialect, name);
                assert_eq!(native.matches('(').count(), native.matches(')').count());
                if ty.datatype.is_bounded() && native.contains('(') {
                    assert!(!native.contains("(0)"), "{}: {} -> {}", dialect, name, native);
                }
            }
        }
    }
}

#[test]
fn test_type_mapping_is_deterministic() {
    for dialect in Dialect::ALL {
        let a = DialectProfile::new(dialect);
        let b = DialectProfile::new(dialect);
        let params = vec!["32".to_string()];
        assert_eq!(
            a.from_native(12, "varchar", "varchar", &params),
            b.from_native(12, "varchar", "varchar", &params)
        );
        let ty = DbType::with_length(Datatype::Char, Some(8));
        assert_eq!(a.to_native(Some(&ty)), b.to_native(Some(&ty)));
    }
}

#[test]
fn test_sqlserver_required_type_table() {
    let profile = DialectProfile::new(Dialect::SqlServer);
    let map = |name: &str, params: &[&str]| {
        let params: Vec<String> = params.iter().map(|p| p.to_string()).collect();
        profile.from_native(0, name, name, &params)
    };
    let cases: [(&str, &[&str], Option<DbType>); 14] = [
        ("bit", &[], Some(DbType::new(Datatype::Smallint))),
        ("int", &[], Some(DbType::new(Datatype::Integer))),
        ("unsigned bigint", &[], Some(DbType::new(Datatype::Bigint))),
        ("float", &["1"], Some(DbType::new(Datatype::Real))),
        ("float", &["53"], Some(DbType::new(Datatype::Double))),
        ("numeric", &["10", "2"], Some(DbType::new(Datatype::Double))),
        ("binary", &["4"], Some(DbType::with_length(Datatype::Binary, Some(4)))),
        ("varbinary", &[], Some(DbType::new(Datatype::Varbinary))),
        ("nchar", &["3"], Some(DbType::with_length(Datatype::Char, Some(3)))),
        ("nvarchar", &["max"], Some(DbType::new(Datatype::Varchar))),
        ("image", &[], Some(DbType::new(Datatype::Blob))),
        ("ntext", &[], Some(DbType::new(Datatype::Clob))),
        ("smalldatetime", &[], Some(DbType::new(Datatype::Timestamp))),
        ("geography", &[], None),
    ];
    for (name, params, expected) in cases {
        assert_eq!(map(name, params), expected, "{}", name);
    }
    assert_eq!(
        profile.to_native(Some(&DbType::with_length(Datatype::Varchar, Some(32)))),
        "VARCHAR(32)"
    );
    assert_eq!(profile.to_native(Some(&DbType::new(Datatype::Char))), "CHAR(2048)");
}

#[test]
fn test_mysql_backtick_alias_quoting() {
    let c = catalog();
    let meta = c.column(&gaia(&c), "ra").cloned().unwrap();
    let query = Query::select_from(TableRef::base(gaia(&c)).alias(Ident::quoted("G")))
        .item(col("ra").of(Ident::quoted("G")).linked(meta));
    assert_eq!(
        render(&query, &plain(Dialect::MySql)),
        "SELECT `G`.ra\nFROM dr3.gaia_source AS `G`"
    );
}
