use super::super::functions::FunctionMapper;
use super::super::traits::DialectDefaults;
use super::super::types::{FromNative, ToNative, TypeMapper};
use crate::ast::MathFunc;
use crate::types::Datatype;

/// SQLite. Declared types only carry an affinity; the table keeps the
/// common spellings.
pub struct SqliteDialect;

impl DialectDefaults for SqliteDialect {
    fn type_mapper(&self) -> TypeMapper {
        TypeMapper::new("varchar", "text")
            .alias(&["smallint", "tinyint"], FromNative::Plain(Datatype::Smallint))
            .alias(&["integer", "int", "mediumint"], FromNative::Plain(Datatype::Integer))
            .alias(&["bigint", "unsigned big int"], FromNative::Plain(Datatype::Bigint))
            .alias(
                &["real", "double", "double precision", "float", "numeric", "decimal"],
                FromNative::Plain(Datatype::Double),
            )
            .alias(&["character", "char", "nchar"], FromNative::Sized(Datatype::Char))
            .alias(
                &["varchar", "nvarchar", "varying character"],
                FromNative::Sized(Datatype::Varchar),
            )
            .alias(&["blob"], FromNative::Plain(Datatype::Blob))
            .alias(&["text", "clob"], FromNative::Plain(Datatype::Clob))
            .alias(
                &["datetime", "timestamp", "date"],
                FromNative::Plain(Datatype::Timestamp),
            )
            .render(Datatype::Smallint, ToNative::Name("smallint"))
            .render(Datatype::Integer, ToNative::Name("integer"))
            .render(Datatype::Bigint, ToNative::Name("bigint"))
            .render(Datatype::Real, ToNative::Name("real"))
            .render(Datatype::Double, ToNative::Name("real"))
            .render(Datatype::Char, ToNative::Sized("char"))
            .render(Datatype::Varchar, ToNative::Sized("varchar"))
            .render(Datatype::Binary, ToNative::Name("blob"))
            .render(Datatype::Varbinary, ToNative::Name("blob"))
            .render(Datatype::Blob, ToNative::Name("blob"))
            .render(Datatype::Clob, ToNative::Name("text"))
            .render(Datatype::Timestamp, ToNative::Name("timestamp"))
    }

    fn function_mapper(&self) -> FunctionMapper {
        FunctionMapper::new()
            .rename(MathFunc::Log, "ln")
            .rename(MathFunc::Log10, "log10")
            .rename(MathFunc::Truncate, "trunc")
            // random() is a signed 64-bit integer; scale it into [0, 1)
            .transform(MathFunc::Rand, |_| {
                Ok("(0.5 + random() / 18446744073709551616.0)".to_string())
            })
    }
}
