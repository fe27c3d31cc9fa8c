use serde::{Deserialize, Serialize};

use super::names::ColumnRef;
use super::operand::Operand;
use super::query::{ClauseList, Query};

/// Comparison operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompOp {
    Eq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
    Like,
    NotLike,
}

impl std::fmt::Display for CompOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CompOp::Eq => write!(f, "="),
            CompOp::NotEq => write!(f, "<>"),
            CompOp::Lt => write!(f, "<"),
            CompOp::LtEq => write!(f, "<="),
            CompOp::Gt => write!(f, ">"),
            CompOp::GtEq => write!(f, ">="),
            CompOp::Like => write!(f, "LIKE"),
            CompOp::NotLike => write!(f, "NOT LIKE"),
        }
    }
}

/// Right-hand side of an IN predicate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum InList {
    Values(Vec<Operand>),
    Subquery(Box<Query>),
}

/// A search condition (WHERE, HAVING, ON).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Constraint {
    Comparison {
        left: Operand,
        op: CompOp,
        right: Operand,
    },
    Between {
        operand: Operand,
        low: Operand,
        high: Operand,
        #[serde(default)]
        negated: bool,
    },
    In {
        operand: Operand,
        list: InList,
        #[serde(default)]
        negated: bool,
    },
    IsNull {
        column: ColumnRef,
        #[serde(default)]
        negated: bool,
    },
    Exists(Box<Query>),
    Not(Box<Constraint>),
    /// Parenthesized group of constraints.
    Group(ClauseList<Constraint>),
}

impl std::fmt::Display for Constraint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Constraint::Comparison { left, op, right } => write!(f, "{} {} {}", left, op, right),
            Constraint::Between {
                operand,
                low,
                high,
                negated,
            } => {
                let not = if *negated { "NOT " } else { "" };
                write!(f, "{} {}BETWEEN {} AND {}", operand, not, low, high)
            }
            Constraint::In {
                operand,
                list,
                negated,
            } => {
                let not = if *negated { "NOT " } else { "" };
                match list {
                    InList::Values(values) => {
                        write!(f, "{} {}IN ", operand, not)?;
                        super::operand::write_call(f, "", values)
                    }
                    InList::Subquery(query) => write!(f, "{} {}IN ({})", operand, not, query),
                }
            }
            Constraint::IsNull { column, negated } => {
                if *negated {
                    write!(f, "{} IS NOT NULL", column)
                } else {
                    write!(f, "{} IS NULL", column)
                }
            }
            Constraint::Exists(query) => write!(f, "EXISTS({})", query),
            Constraint::Not(inner) => write!(f, "NOT {}", inner),
            Constraint::Group(list) => write!(f, "({})", list),
        }
    }
}
