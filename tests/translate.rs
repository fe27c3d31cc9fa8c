//! End-to-end: configuration file, JSON catalog, translation.

use std::fs;

use adql_sql::ast::builders::*;
use adql_sql::prelude::*;
use pretty_assertions::assert_eq;

const CATALOG: &str = r#"{
    "tables": [
        {
            "schema": "dr3",
            "name": "gaia",
            "db_name": "gaia_source",
            "columns": [
                { "name": "id", "db_name": "source_id", "type": "bigint" },
                { "name": "ra", "type": "float(53)" },
                { "name": "dec", "type": "float(53)" },
                { "name": "phot_g_mean_mag", "type": "real" }
            ]
        },
        {
            "schema": "dr3",
            "name": "tycho",
            "columns": [
                { "name": "id", "type": "int" },
                { "name": "ra", "type": "float" },
                { "name": "dec", "type": "float" },
                { "name": "vt", "type": "float(24)" }
            ]
        }
    ]
}"#;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn load(config_toml: &str) -> (DialectProfile, MemoryCatalog) {
    init_tracing();
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("dialect.toml");
    let catalog_path = dir.path().join("catalog.json");
    fs::write(&config_path, config_toml).unwrap();
    fs::write(&catalog_path, CATALOG).unwrap();

    let profile = DialectConfig::from_file(&config_path).unwrap().profile().unwrap();
    let catalog = MemoryCatalog::from_file(&catalog_path, &profile).unwrap();
    (profile, catalog)
}

fn cone_query(catalog: &MemoryCatalog) -> Query {
    let gaia = catalog.link(table("gaia").in_schema("dr3")).unwrap();
    let tycho = catalog.link(table("tycho").in_schema("dr3")).unwrap();
    let column = |t: &TableName, alias: &str, name: &str| {
        let meta = catalog.column(t, name).cloned().unwrap();
        ColumnRef::new(name).of(alias).linked(meta)
    };

    Query::select_from(using_join(
        JoinKind::Inner,
        TableRef::base(gaia.clone()).alias("g").into(),
        TableRef::base(tycho.clone()).alias("t").into(),
        &["ra", "dec"],
    ))
    .top(20)
    .item(column(&gaia, "g", "id"))
    .item(SelectItem::aliased(
        math(MathFunc::Abs, [Operand::from(column(&tycho, "t", "vt"))]),
        "abs_vt",
    ))
    .filter(compare(
        geom(
            GeometryFunc::Contains,
            [
                point("ICRS", column(&gaia, "g", "ra").into(), column(&gaia, "g", "dec").into()),
                circle("ICRS", num(56.75), num(24.12), num(0.5)),
            ],
        ),
        CompOp::Eq,
        num(1),
    ))
}

#[test]
fn sqlserver_end_to_end() {
    let (profile, catalog) = load(
        r#"
        dialect = "sqlserver"

        [case_sensitivity]
        catalog = false
        schema = false
        table = false
        column = false
        "#,
    );
    assert_eq!(catalog.len(), 2);

    let sql = adql_sql::translate(&cone_query(&catalog), &catalog, &profile).unwrap();
    assert_eq!(
        sql,
        "SELECT TOP 20 g.source_id AS \"id\", abs(convert(float, t.vt)) AS \"abs_vt\"\n\
         FROM dr3.dbo.gaia_source AS g INNER JOIN dr3.dbo.tycho AS t ON g.ra=t.ra AND g.dec=t.dec\n\
         WHERE CONTAINS(POINT('ICRS', g.ra, g.dec), CIRCLE('ICRS', 56.75, 24.12, 0.5)) = 1"
    );
}

#[test]
fn postgres_end_to_end() {
    let (profile, catalog) = load(
        r#"
        dialect = "postgres"
        pagination = "fetch_first"
        "#,
    );
    let sql = adql_sql::translate(&cone_query(&catalog), &catalog, &profile).unwrap();
    assert!(sql.starts_with("SELECT g.\"source_id\" AS \"id\", ABS(t.\"vt\") AS \"abs_vt\"\n"));
    assert!(sql.contains("ON g.\"ra\"=t.\"ra\" AND g.\"dec\"=t.\"dec\""));
    assert!(sql.ends_with("\nFETCH FIRST 20 ROWS ONLY"));
    assert!(!sql.contains("TOP"));
}

#[test]
fn catalog_types_follow_the_profile() {
    let (profile, catalog) = load(r#"dialect = "sqlserver""#);
    let tycho = table("tycho").in_schema("dr3");
    let vt = catalog.column(&tycho, "vt").unwrap();
    assert_eq!(vt.datatype, Some(DbType::new(Datatype::Real)));
    assert_eq!(profile.to_native(vt.datatype.as_ref()), "real");

    let ra = catalog.column(&tycho, "ra").unwrap();
    assert_eq!(ra.datatype, Some(DbType::new(Datatype::Double)));
    assert_eq!(profile.to_native(ra.datatype.as_ref()), "float(53)");
}

#[test]
fn broken_join_reports_operands() {
    let (profile, catalog) = load(r#"dialect = "mysql""#);
    let query = Query::select_from(using_join(
        JoinKind::Inner,
        catalog.link(table("gaia").in_schema("dr3")).unwrap().into(),
        catalog.link(table("tycho").in_schema("dr3")).unwrap().into(),
        &["vt"],
    ));
    let err = adql_sql::translate(&query, &catalog, &profile).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Impossible to resolve the JOIN USING between dr3.gaia and dr3.tycho!"
    );
}

#[test]
fn missing_config_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = DialectConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, TranslationError::Io(_)));
}
