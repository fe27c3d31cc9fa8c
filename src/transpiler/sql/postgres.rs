use super::super::functions::{require_args, FunctionMapper};
use super::super::traits::DialectDefaults;
use super::super::types::{FromNative, ToNative, TypeMapper};
use crate::ast::MathFunc;
use crate::error::TranslationResult;
use crate::types::Datatype;

/// PostgreSQL.
pub struct PostgresDialect;

impl DialectDefaults for PostgresDialect {
    fn type_mapper(&self) -> TypeMapper {
        TypeMapper::new("character varying", "text")
            .alias(&["smallint", "int2"], FromNative::Plain(Datatype::Smallint))
            .alias(&["integer", "int", "int4", "serial"], FromNative::Plain(Datatype::Integer))
            .alias(&["bigint", "int8", "bigserial"], FromNative::Plain(Datatype::Bigint))
            .alias(&["real", "float4"], FromNative::Plain(Datatype::Real))
            .alias(
                &["float"],
                FromNative::Precision {
                    low: Datatype::Real,
                    high: Datatype::Double,
                    max: 24,
                },
            )
            .alias(
                &["double precision", "float8", "numeric", "decimal"],
                FromNative::Plain(Datatype::Double),
            )
            .alias(&["character", "char", "bpchar"], FromNative::Sized(Datatype::Char))
            .alias(&["character varying", "varchar"], FromNative::Sized(Datatype::Varchar))
            .alias(&["bytea"], FromNative::Plain(Datatype::Blob))
            .alias(&["text"], FromNative::Plain(Datatype::Clob))
            .alias(
                &[
                    "timestamp",
                    "timestamp without time zone",
                    "timestamp with time zone",
                    "timestamptz",
                    "date",
                    "time",
                ],
                FromNative::Plain(Datatype::Timestamp),
            )
            .render(Datatype::Smallint, ToNative::Name("smallint"))
            .render(Datatype::Integer, ToNative::Name("integer"))
            .render(Datatype::Bigint, ToNative::Name("bigint"))
            .render(Datatype::Real, ToNative::Name("real"))
            .render(Datatype::Double, ToNative::Name("double precision"))
            .render(Datatype::Char, ToNative::Sized("character"))
            .render(Datatype::Varchar, ToNative::Sized("character varying"))
            .render(Datatype::Binary, ToNative::Name("bytea"))
            .render(Datatype::Varbinary, ToNative::Name("bytea"))
            .render(Datatype::Blob, ToNative::Name("bytea"))
            .render(Datatype::Clob, ToNative::Name("text"))
            .render(Datatype::Timestamp, ToNative::Name("timestamp"))
    }

    fn function_mapper(&self) -> FunctionMapper {
        FunctionMapper::new()
            .rename(MathFunc::Log, "ln")
            .rename(MathFunc::Log10, "log")
            .rename(MathFunc::Rand, "random")
            .transform(MathFunc::Truncate, |args| numeric_places("trunc", MathFunc::Truncate, args))
            .transform(MathFunc::Round, |args| numeric_places("round", MathFunc::Round, args))
    }
}

/// `name(x)`, or `name(cast(x as numeric), places)`: the two-argument forms
/// only exist for `numeric`.
fn numeric_places(name: &str, func: MathFunc, args: &[String]) -> TranslationResult<String> {
    require_args(func.into(), args, 1)?;
    Ok(match args {
        [x, places, ..] => format!("{}(cast({} as numeric), {})", name, x, places),
        _ => format!("{}({})", name, args.join(", ")),
    })
}
