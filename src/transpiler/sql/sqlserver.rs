use super::super::dialect::{ConcatStyle, Pagination};
use super::super::functions::{require_args, FunctionMapper, FunctionTag};
use super::super::traits::DialectDefaults;
use super::super::types::{FromNative, ToNative, TypeMapper};
use crate::ast::MathFunc;
use crate::types::Datatype;

/// Microsoft SQL Server.
///
/// Identifiers are quoted with `"` (QUOTED_IDENTIFIER ON), ordinary tables
/// live under the `dbo` namespace and the row limit is a `TOP n` prefix.
pub struct SqlServerDialect;

impl DialectDefaults for SqlServerDialect {
    fn concat_style(&self) -> ConcatStyle {
        ConcatStyle::Operator("+")
    }

    fn pagination(&self) -> Pagination {
        Pagination::Top
    }

    fn namespace(&self) -> Option<&'static str> {
        Some("dbo")
    }

    fn type_mapper(&self) -> TypeMapper {
        TypeMapper::new("varchar", "varchar")
            .alias(&["smallint", "tinyint", "bit"], FromNative::Plain(Datatype::Smallint))
            .alias(&["int"], FromNative::Plain(Datatype::Integer))
            .alias(&["bigint", "unsigned bigint"], FromNative::Plain(Datatype::Bigint))
            .alias(&["real"], FromNative::Plain(Datatype::Real))
            .alias(
                &["float"],
                FromNative::Precision {
                    low: Datatype::Real,
                    high: Datatype::Double,
                    max: 24,
                },
            )
            .alias(&["decimal", "numeric"], FromNative::Plain(Datatype::Double))
            .alias(&["binary"], FromNative::Sized(Datatype::Binary))
            .alias(&["varbinary"], FromNative::Sized(Datatype::Varbinary))
            .alias(&["char", "nchar"], FromNative::Sized(Datatype::Char))
            .alias(&["varchar", "nvarchar"], FromNative::Sized(Datatype::Varchar))
            .alias(&["image"], FromNative::Plain(Datatype::Blob))
            .alias(&["text", "ntext"], FromNative::Plain(Datatype::Clob))
            .alias(
                &[
                    "timestamp",
                    "datetime",
                    "datetime2",
                    "datetimeoffset",
                    "smalldatetime",
                    "time",
                    "date",
                ],
                FromNative::Plain(Datatype::Timestamp),
            )
            .render(Datatype::Smallint, ToNative::Name("smallint"))
            .render(Datatype::Real, ToNative::Name("real"))
            .render(Datatype::Bigint, ToNative::Name("bigint"))
            .render(Datatype::Char, ToNative::Sized("CHAR"))
            .render(Datatype::Varchar, ToNative::Sized("VARCHAR"))
            .render(Datatype::Binary, ToNative::Sized("BINARY"))
            .render(Datatype::Varbinary, ToNative::Sized("VARBINARY"))
            .render(Datatype::Integer, ToNative::Name("int"))
            .render(Datatype::Double, ToNative::Name("float(53)"))
            .render(Datatype::Timestamp, ToNative::Name("datetime"))
            .render(Datatype::Blob, ToNative::Name("image"))
            .render(Datatype::Clob, ToNative::Name("text"))
    }

    fn function_mapper(&self) -> FunctionMapper {
        let mut mapper = FunctionMapper::new()
            // a non-zero third argument to round() truncates
            .transform(MathFunc::Truncate, |args| {
                let inner = match args {
                    [a, b, ..] => format!("{}, {}", a, b),
                    _ => String::new(),
                };
                Ok(format!("round(convert(float, {}), 1)", inner))
            })
            .transform(MathFunc::Mod, |args| {
                Ok(match args {
                    [a, b, ..] => format!("convert(float, {}) % convert(float, {})", a, b),
                    _ => String::new(),
                })
            })
            .transform(MathFunc::Atan2, |args| {
                require_args(MathFunc::Atan2.into(), args, 2)?;
                Ok(format!("ATN2({}, {})", args[0], args[1]))
            })
            .transform(MathFunc::Round, |args| {
                require_args(MathFunc::Round.into(), args, 1)?;
                let places = args.get(1).map(String::as_str).unwrap_or("0");
                Ok(format!("round(convert(float, {}), {})", args[0], places))
            });

        // These return the argument's own type natively; a float is expected.
        for func in [
            MathFunc::Abs,
            MathFunc::Ceiling,
            MathFunc::Degrees,
            MathFunc::Floor,
            MathFunc::Radians,
        ] {
            mapper = mapper.transform(func, move |args| float_unary(func.into(), args));
        }
        mapper
    }
}

fn float_unary(tag: FunctionTag, args: &[String]) -> crate::error::TranslationResult<String> {
    require_args(tag, args, 1)?;
    Ok(format!(
        "{}(convert(float, {}))",
        tag.name().to_lowercase(),
        args[0]
    ))
}
