//! Query tree handed over by the upstream parser and checker.
//!
//! Every node is immutable input to the translator. `Display` renders a
//! node back as query-language text; that text is what the default function
//! renderer and error messages show.

pub mod builders;
pub mod constraint;
pub mod from;
pub mod names;
pub mod operand;
pub mod query;

pub use self::constraint::{CompOp, Constraint, InList};
pub use self::from::{FromContent, Join, JoinCondition, JoinKind, TableRef, TableSource};
pub use self::names::{ColumnRef, Ident, TableName};
pub use self::operand::{
    AggregateFunc, ArithOp, GeometryCall, GeometryFunc, MathCall, MathFunc, Operand,
};
pub use self::query::{
    ClauseList, OrderItem, OrderTarget, Query, SelectClause, SelectItem, Separator,
};
