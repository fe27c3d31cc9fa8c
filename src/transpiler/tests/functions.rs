//! Math function overrides and geometry passthrough.

use pretty_assertions::assert_eq;

use super::{plain, render};
use crate::ast::builders::*;
use crate::ast::{CompOp, GeometryFunc, MathFunc, Operand};
use crate::catalog::MemoryCatalog;
use crate::error::TranslationError;
use crate::transpiler::{Dialect, DialectProfile, Translator};

fn sqlserver(expr: &Operand) -> String {
    render(expr, &plain(Dialect::SqlServer))
}

fn try_sqlserver(expr: &Operand) -> Result<String, TranslationError> {
    let profile = plain(Dialect::SqlServer);
    let catalog = MemoryCatalog::new();
    Translator::new(&profile, &catalog).translate(expr)
}

fn c(name: &str) -> Operand {
    col(name).into()
}

#[test]
fn test_mod_two_arguments() {
    assert_eq!(
        sqlserver(&math(MathFunc::Mod, [c("a"), c("b")])),
        "convert(float, a) % convert(float, b)"
    );
}

#[test]
fn test_mod_single_argument_is_empty() {
    assert_eq!(sqlserver(&math(MathFunc::Mod, [c("a")])), "");
}

#[test]
fn test_truncate_forms() {
    assert_eq!(
        sqlserver(&math(MathFunc::Truncate, [c("a"), num(2)])),
        "round(convert(float, a, 2), 1)"
    );
    assert_eq!(
        sqlserver(&math(MathFunc::Truncate, [c("a")])),
        "round(convert(float, ), 1)"
    );
}

#[test]
fn test_atan2() {
    assert_eq!(sqlserver(&math(MathFunc::Atan2, [c("y"), c("x")])), "ATN2(y, x)");

    let err = try_sqlserver(&math(MathFunc::Atan2, [c("y")])).unwrap_err();
    assert!(matches!(
        err,
        TranslationError::Arity {
            expected: 2,
            found: 1,
            ..
        }
    ));
    assert_eq!(err.to_string(), "Function ATAN2 expects 2 argument(s), got 1");
}

#[test]
fn test_float_coerced_unary_functions() {
    let cases = [
        (MathFunc::Abs, "abs(convert(float, v))"),
        (MathFunc::Ceiling, "ceiling(convert(float, v))"),
        (MathFunc::Degrees, "degrees(convert(float, v))"),
        (MathFunc::Floor, "floor(convert(float, v))"),
        (MathFunc::Radians, "radians(convert(float, v))"),
    ];
    for (func, expected) in cases {
        assert_eq!(sqlserver(&math(func, [c("v")])), expected);
    }
}

#[test]
fn test_round() {
    assert_eq!(
        sqlserver(&math(MathFunc::Round, [c("v"), num(3)])),
        "round(convert(float, v), 3)"
    );
    assert_eq!(
        sqlserver(&math(MathFunc::Round, [c("v")])),
        "round(convert(float, v), 0)"
    );
}

#[test]
fn test_nested_overrides() {
    let expr = math(MathFunc::Round, [math(MathFunc::Abs, [c("v")]), num(2)]);
    assert_eq!(sqlserver(&expr), "round(convert(float, abs(convert(float, v))), 2)");
}

#[test]
fn test_unlisted_math_uses_default_syntax() {
    assert_eq!(sqlserver(&math(MathFunc::Sqrt, [c("v")])), "SQRT(v)");
    assert_eq!(sqlserver(&math(MathFunc::Power, [c("v"), num(2)])), "POWER(v, 2)");
    assert_eq!(sqlserver(&math(MathFunc::Pi, [])), "PI()");
}

#[test]
fn test_circle_is_echoed_by_every_dialect() {
    let circle = circle("ICRS", num(10.5), num(-3), num(0.1));
    let adql = circle.to_string();
    assert_eq!(adql, "CIRCLE('ICRS', 10.5, -3, 0.1)");
    for dialect in Dialect::ALL {
        assert_eq!(render(&circle, &DialectProfile::new(dialect)), adql);
        assert_eq!(render(&circle, &plain(dialect)), adql);
    }
}

#[test]
fn test_contains_predicate_passthrough() {
    let contains = geom(
        GeometryFunc::Contains,
        [
            point("ICRS", c("ra"), c("dec")),
            circle("ICRS", num(10), num(20), num(1)),
        ],
    );
    let predicate = compare(contains, CompOp::Eq, num(1));
    assert_eq!(
        render(&predicate, &plain(Dialect::Postgres)),
        "CONTAINS(POINT('ICRS', ra, dec), CIRCLE('ICRS', 10, 20, 1)) = 1"
    );
}

#[test]
fn test_postgres_renames() {
    let profile = plain(Dialect::Postgres);
    assert_eq!(render(&math(MathFunc::Log, [c("v")]), &profile), "ln(v)");
    assert_eq!(render(&math(MathFunc::Log10, [c("v")]), &profile), "log(v)");
    assert_eq!(render(&math(MathFunc::Rand, []), &profile), "random()");
    assert_eq!(
        render(&math(MathFunc::Truncate, [c("v"), num(1)]), &profile),
        "trunc(cast(v as numeric), 1)"
    );
    assert_eq!(render(&math(MathFunc::Mod, [c("a"), c("b")]), &profile), "MOD(a, b)");
}

#[test]
fn test_postgres_places_on_double_columns() {
    let c = super::catalog();
    let ra = Operand::Column(super::gaia_col(&c, "ra"));
    let profile = plain(Dialect::Postgres);
    assert_eq!(
        render(&math(MathFunc::Round, [ra.clone(), num(2)]), &profile),
        "round(cast(g.ra as numeric), 2)"
    );
    assert_eq!(
        render(&math(MathFunc::Truncate, [ra.clone(), num(3)]), &profile),
        "trunc(cast(g.ra as numeric), 3)"
    );
    assert_eq!(render(&math(MathFunc::Round, [ra]), &profile), "round(g.ra)");
}

#[test]
fn test_mysql_and_sqlite_overrides() {
    let mysql = plain(Dialect::MySql);
    assert_eq!(render(&math(MathFunc::Log, [c("v")]), &mysql), "ln(v)");
    assert_eq!(render(&math(MathFunc::Truncate, [c("v")]), &mysql), "truncate(v, 0)");

    let sqlite = plain(Dialect::Sqlite);
    assert_eq!(render(&math(MathFunc::Log10, [c("v")]), &sqlite), "log10(v)");
    assert_eq!(render(&math(MathFunc::Truncate, [c("v")]), &sqlite), "trunc(v)");
    assert!(render(&math(MathFunc::Rand, []), &sqlite).contains("random()"));
}

#[test]
fn test_function_arguments_are_translated() {
    let c = super::catalog();
    let ra = super::gaia_col(&c, "ra");
    let expr = math(MathFunc::Abs, [Operand::Column(ra)]);
    assert_eq!(
        render(&expr, &DialectProfile::new(Dialect::SqlServer)),
        "abs(convert(float, g.\"ra\"))"
    );
}
