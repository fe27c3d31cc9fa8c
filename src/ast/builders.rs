//! Helper functions to build query trees without spelling out every struct.
//!
//! # Example
//! ```
//! use adql_sql::ast::builders::*;
//! use adql_sql::ast::{MathFunc, Operand, Query};
//!
//! let query = Query::select_from(table("gaia"))
//!     .item(col("ra"))
//!     .item(math(MathFunc::Abs, [Operand::from(col("dec"))]))
//!     .filter(gt(col("phot_g_mean_mag").into(), num(12)))
//!     .top(100);
//! assert_eq!(
//!     query.to_string(),
//!     "SELECT TOP 100 ra, ABS(dec)\nFROM gaia\nWHERE phot_g_mean_mag > 12"
//! );
//! ```

use super::constraint::{CompOp, Constraint, InList};
use super::from::{FromContent, JoinCondition, JoinKind};
use super::names::{ColumnRef, Ident, TableName};
use super::operand::{
    AggregateFunc, ArithOp, GeometryCall, GeometryFunc, MathCall, MathFunc, Operand,
};
use super::query::SelectItem;

/// Unqualified column reference.
pub fn col(name: &str) -> ColumnRef {
    ColumnRef::new(name)
}

/// Base table reference.
pub fn table(name: &str) -> TableName {
    TableName::new(name)
}

pub fn ident(name: &str) -> Ident {
    Ident::new(name)
}

/// Numeric literal.
pub fn num(value: impl ToString) -> Operand {
    Operand::Number(value.to_string())
}

/// String literal.
pub fn text(value: &str) -> Operand {
    Operand::String(value.to_string())
}

pub fn concat(parts: impl IntoIterator<Item = Operand>) -> Operand {
    Operand::Concat(parts.into_iter().collect())
}

pub fn math(func: MathFunc, args: impl IntoIterator<Item = Operand>) -> Operand {
    Operand::Math(MathCall {
        func,
        args: args.into_iter().collect(),
    })
}

pub fn geom(func: GeometryFunc, args: impl IntoIterator<Item = Operand>) -> Operand {
    Operand::Geometry(GeometryCall {
        func,
        args: args.into_iter().collect(),
    })
}

/// `POINT('<frame>', ra, dec)`
pub fn point(frame: &str, ra: Operand, dec: Operand) -> Operand {
    geom(GeometryFunc::Point, [text(frame), ra, dec])
}

/// `CIRCLE('<frame>', ra, dec, radius)`
pub fn circle(frame: &str, ra: Operand, dec: Operand, radius: Operand) -> Operand {
    geom(GeometryFunc::Circle, [text(frame), ra, dec, radius])
}

pub fn arith(left: Operand, op: ArithOp, right: Operand) -> Operand {
    Operand::Operation {
        left: Box::new(left),
        op,
        right: Box::new(right),
    }
}

pub fn aggregate(func: AggregateFunc, arg: Operand) -> Operand {
    Operand::Aggregate {
        func,
        distinct: false,
        arg: Some(Box::new(arg)),
    }
}

/// `COUNT(*)`
pub fn count_all() -> Operand {
    Operand::Aggregate {
        func: AggregateFunc::Count,
        distinct: false,
        arg: None,
    }
}

pub fn compare(left: Operand, op: CompOp, right: Operand) -> Constraint {
    Constraint::Comparison { left, op, right }
}

pub fn eq(left: Operand, right: Operand) -> Constraint {
    compare(left, CompOp::Eq, right)
}

pub fn gt(left: Operand, right: Operand) -> Constraint {
    compare(left, CompOp::Gt, right)
}

pub fn lt(left: Operand, right: Operand) -> Constraint {
    compare(left, CompOp::Lt, right)
}

pub fn between(operand: Operand, low: Operand, high: Operand) -> Constraint {
    Constraint::Between {
        operand,
        low,
        high,
        negated: false,
    }
}

pub fn in_values(operand: Operand, values: impl IntoIterator<Item = Operand>) -> Constraint {
    Constraint::In {
        operand,
        list: InList::Values(values.into_iter().collect()),
        negated: false,
    }
}

pub fn is_null(column: ColumnRef) -> Constraint {
    Constraint::IsNull {
        column,
        negated: false,
    }
}

/// `left NATURAL <kind> right`
pub fn natural_join(kind: JoinKind, left: FromContent, right: FromContent) -> FromContent {
    FromContent::join(kind, left, right, JoinCondition::Natural)
}

/// `left <kind> right USING(cols...)`
pub fn using_join(kind: JoinKind, left: FromContent, right: FromContent, cols: &[&str]) -> FromContent {
    let cols = cols.iter().map(|c| Ident::new(*c)).collect();
    FromContent::join(kind, left, right, JoinCondition::Using(cols))
}

/// `left <kind> right ON cond`
pub fn on_join(kind: JoinKind, left: FromContent, right: FromContent, cond: Constraint) -> FromContent {
    FromContent::join(kind, left, right, JoinCondition::On(cond))
}

impl From<ColumnRef> for Operand {
    fn from(col: ColumnRef) -> Self {
        Operand::Column(col)
    }
}

impl From<Operand> for SelectItem {
    fn from(operand: Operand) -> Self {
        SelectItem::expr(operand)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_builder() {
        let c = geom(
            GeometryFunc::Contains,
            [
                point("ICRS", col("ra").into(), col("dec").into()),
                circle("ICRS", num(10), num(-5.5), num(0.1)),
            ],
        );
        assert_eq!(
            c.to_string(),
            "CONTAINS(POINT('ICRS', ra, dec), CIRCLE('ICRS', 10, -5.5, 0.1))"
        );
    }

    #[test]
    fn test_using_join_display() {
        let from = using_join(
            JoinKind::Inner,
            table("gaia").into(),
            table("tycho").into(),
            &["ra", "dec"],
        );
        assert_eq!(from.to_string(), "gaia INNER JOIN tycho USING(ra, dec)");
    }

    #[test]
    fn test_string_literal_escaping() {
        assert_eq!(text("O'Brien").to_string(), "'O''Brien'");
    }
}
