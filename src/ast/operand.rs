use serde::{Deserialize, Serialize};

use super::names::ColumnRef;

/// Arithmetic operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ArithOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl std::fmt::Display for ArithOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ArithOp::Add => write!(f, "+"),
            ArithOp::Sub => write!(f, "-"),
            ArithOp::Mul => write!(f, "*"),
            ArithOp::Div => write!(f, "/"),
        }
    }
}

/// Built-in mathematical functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MathFunc {
    Abs,
    Ceiling,
    Degrees,
    Exp,
    Floor,
    Log,
    Log10,
    Mod,
    Pi,
    Power,
    Radians,
    Rand,
    Round,
    Sqrt,
    Truncate,
    Acos,
    Asin,
    Atan,
    Atan2,
    Cos,
    Cot,
    Sin,
    Tan,
}

impl MathFunc {
    pub fn name(&self) -> &'static str {
        match self {
            MathFunc::Abs => "ABS",
            MathFunc::Ceiling => "CEILING",
            MathFunc::Degrees => "DEGREES",
            MathFunc::Exp => "EXP",
            MathFunc::Floor => "FLOOR",
            MathFunc::Log => "LOG",
            MathFunc::Log10 => "LOG10",
            MathFunc::Mod => "MOD",
            MathFunc::Pi => "PI",
            MathFunc::Power => "POWER",
            MathFunc::Radians => "RADIANS",
            MathFunc::Rand => "RAND",
            MathFunc::Round => "ROUND",
            MathFunc::Sqrt => "SQRT",
            MathFunc::Truncate => "TRUNCATE",
            MathFunc::Acos => "ACOS",
            MathFunc::Asin => "ASIN",
            MathFunc::Atan => "ATAN",
            MathFunc::Atan2 => "ATAN2",
            MathFunc::Cos => "COS",
            MathFunc::Cot => "COT",
            MathFunc::Sin => "SIN",
            MathFunc::Tan => "TAN",
        }
    }
}

/// Geometrical functions. They are never computed, only rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum GeometryFunc {
    Coord1,
    Coord2,
    CoordSys,
    Area,
    Centroid,
    Distance,
    Contains,
    Intersects,
    Point,
    Circle,
    Box,
    Polygon,
    Region,
}

impl GeometryFunc {
    pub fn name(&self) -> &'static str {
        match self {
            GeometryFunc::Coord1 => "COORD1",
            GeometryFunc::Coord2 => "COORD2",
            GeometryFunc::CoordSys => "COORDSYS",
            GeometryFunc::Area => "AREA",
            GeometryFunc::Centroid => "CENTROID",
            GeometryFunc::Distance => "DISTANCE",
            GeometryFunc::Contains => "CONTAINS",
            GeometryFunc::Intersects => "INTERSECTS",
            GeometryFunc::Point => "POINT",
            GeometryFunc::Circle => "CIRCLE",
            GeometryFunc::Box => "BOX",
            GeometryFunc::Polygon => "POLYGON",
            GeometryFunc::Region => "REGION",
        }
    }
}

/// Aggregate functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AggregateFunc {
    Count,
    Sum,
    Avg,
    Min,
    Max,
}

impl std::fmt::Display for AggregateFunc {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AggregateFunc::Count => write!(f, "COUNT"),
            AggregateFunc::Sum => write!(f, "SUM"),
            AggregateFunc::Avg => write!(f, "AVG"),
            AggregateFunc::Min => write!(f, "MIN"),
            AggregateFunc::Max => write!(f, "MAX"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MathCall {
    pub func: MathFunc,
    #[serde(default)]
    pub args: Vec<Operand>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeometryCall {
    pub func: GeometryFunc,
    #[serde(default)]
    pub args: Vec<Operand>,
}

/// An operand expression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Operand {
    Column(ColumnRef),
    /// Numeric literal, kept as written.
    Number(String),
    /// String literal, unescaped.
    String(String),
    /// String concatenation (`a || b`).
    Concat(Vec<Operand>),
    Negative(Box<Operand>),
    Operation {
        left: Box<Operand>,
        op: ArithOp,
        right: Box<Operand>,
    },
    /// Parenthesized operand.
    Wrapped(Box<Operand>),
    Math(MathCall),
    Geometry(GeometryCall),
    /// Aggregate call; `arg: None` is `COUNT(*)`.
    Aggregate {
        func: AggregateFunc,
        #[serde(default)]
        distinct: bool,
        #[serde(default)]
        arg: Option<Box<Operand>>,
    },
    UserFunction {
        name: String,
        #[serde(default)]
        args: Vec<Operand>,
    },
}

pub(crate) fn write_call<T: std::fmt::Display>(
    f: &mut std::fmt::Formatter<'_>,
    name: &str,
    args: &[T],
) -> std::fmt::Result {
    write!(f, "{}(", name)?;
    for (i, arg) in args.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", arg)?;
    }
    write!(f, ")")
}

impl std::fmt::Display for MathCall {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write_call(f, self.func.name(), &self.args)
    }
}

impl std::fmt::Display for GeometryCall {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write_call(f, self.func.name(), &self.args)
    }
}

impl std::fmt::Display for Operand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operand::Column(col) => write!(f, "{}", col),
            Operand::Number(n) => write!(f, "{}", n),
            Operand::String(s) => write!(f, "'{}'", s.replace('\'', "''")),
            Operand::Concat(parts) => {
                for (i, part) in parts.iter().enumerate() {
                    if i > 0 {
                        write!(f, " || ")?;
                    }
                    write!(f, "{}", part)?;
                }
                Ok(())
            }
            Operand::Negative(op) => write!(f, "-{}", op),
            Operand::Operation { left, op, right } => write!(f, "{} {} {}", left, op, right),
            Operand::Wrapped(op) => write!(f, "({})", op),
            Operand::Math(call) => write!(f, "{}", call),
            Operand::Geometry(call) => write!(f, "{}", call),
            Operand::Aggregate {
                func,
                distinct,
                arg,
            } => match arg {
                Some(arg) if *distinct => write!(f, "{}(DISTINCT {})", func, arg),
                Some(arg) => write!(f, "{}({})", func, arg),
                None => write!(f, "{}(*)", func),
            },
            Operand::UserFunction { name, args } => write_call(f, name, args),
        }
    }
}
