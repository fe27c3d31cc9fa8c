use super::super::dialect::ConcatStyle;
use super::super::functions::{require_args, FunctionMapper};
use super::super::traits::DialectDefaults;
use super::super::types::{FromNative, ToNative, TypeMapper};
use crate::ast::MathFunc;
use crate::types::Datatype;

/// MySQL and MariaDB.
pub struct MySqlDialect;

impl DialectDefaults for MySqlDialect {
    fn quote_char(&self) -> char {
        '`'
    }

    fn concat_style(&self) -> ConcatStyle {
        ConcatStyle::Function("CONCAT")
    }

    fn type_mapper(&self) -> TypeMapper {
        TypeMapper::new("varchar", "longtext")
            .alias(&["tinyint", "smallint", "bit"], FromNative::Plain(Datatype::Smallint))
            .alias(&["mediumint", "int", "integer"], FromNative::Plain(Datatype::Integer))
            .alias(&["bigint"], FromNative::Plain(Datatype::Bigint))
            .alias(
                &["float"],
                FromNative::Precision {
                    low: Datatype::Real,
                    high: Datatype::Double,
                    max: 24,
                },
            )
            .alias(
                &["double", "double precision", "real", "decimal", "numeric"],
                FromNative::Plain(Datatype::Double),
            )
            .alias(&["char"], FromNative::Sized(Datatype::Char))
            .alias(&["varchar"], FromNative::Sized(Datatype::Varchar))
            .alias(&["binary"], FromNative::Sized(Datatype::Binary))
            .alias(&["varbinary"], FromNative::Sized(Datatype::Varbinary))
            .alias(
                &["tinyblob", "blob", "mediumblob", "longblob"],
                FromNative::Plain(Datatype::Blob),
            )
            .alias(
                &["tinytext", "text", "mediumtext", "longtext"],
                FromNative::Plain(Datatype::Clob),
            )
            .alias(
                &["datetime", "timestamp", "date", "time", "year"],
                FromNative::Plain(Datatype::Timestamp),
            )
            .render(Datatype::Smallint, ToNative::Name("smallint"))
            .render(Datatype::Integer, ToNative::Name("int"))
            .render(Datatype::Bigint, ToNative::Name("bigint"))
            .render(Datatype::Real, ToNative::Name("float"))
            .render(Datatype::Double, ToNative::Name("double"))
            .render(Datatype::Char, ToNative::Sized("CHAR"))
            .render(Datatype::Varchar, ToNative::Sized("VARCHAR"))
            .render(Datatype::Binary, ToNative::Sized("BINARY"))
            .render(Datatype::Varbinary, ToNative::Sized("VARBINARY"))
            .render(Datatype::Blob, ToNative::Name("longblob"))
            .render(Datatype::Clob, ToNative::Name("longtext"))
            .render(Datatype::Timestamp, ToNative::Name("datetime"))
    }

    fn function_mapper(&self) -> FunctionMapper {
        FunctionMapper::new()
            .rename(MathFunc::Log, "ln")
            // truncate() has no one-argument form
            .transform(MathFunc::Truncate, |args| {
                require_args(MathFunc::Truncate.into(), args, 1)?;
                let places = args.get(1).map(String::as_str).unwrap_or("0");
                Ok(format!("truncate({}, {})", args[0], places))
            })
    }
}
