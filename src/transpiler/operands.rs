use super::functions::{default_function, FunctionTag};
use super::identifiers::IdentifierKind;
use super::{ToSql, Translator};
use crate::ast::{ColumnRef, GeometryCall, MathCall, Operand, TableName};
use crate::error::TranslationResult;

impl ToSql for Operand {
    fn to_sql(&self, tr: &Translator<'_>) -> TranslationResult<String> {
        match self {
            Operand::Column(col) => col.to_sql(tr),
            Operand::Number(n) => Ok(n.clone()),
            Operand::String(s) => Ok(format!("'{}'", s.replace('\'', "''"))),
            Operand::Concat(parts) => Ok(tr.profile().concat(&tr.translate_all(parts)?)),
            Operand::Negative(op) => {
                let inner = op.to_sql(tr)?;
                // `--` would open a line comment
                if inner.starts_with('-') {
                    Ok(format!("-({})", inner))
                } else {
                    Ok(format!("-{}", inner))
                }
            }
            Operand::Operation { left, op, right } => {
                Ok(format!("{} {} {}", left.to_sql(tr)?, op, right.to_sql(tr)?))
            }
            Operand::Wrapped(op) => Ok(format!("({})", op.to_sql(tr)?)),
            Operand::Math(call) => call.to_sql(tr),
            Operand::Geometry(call) => call.to_sql(tr),
            Operand::Aggregate {
                func,
                distinct,
                arg,
            } => Ok(match arg {
                Some(arg) if *distinct => format!("{}(DISTINCT {})", func, arg.to_sql(tr)?),
                Some(arg) => format!("{}({})", func, arg.to_sql(tr)?),
                None => format!("{}(*)", func),
            }),
            Operand::UserFunction { name, args } => {
                Ok(default_function(name, &tr.translate_all(args)?))
            }
        }
    }
}

impl ToSql for MathCall {
    fn to_sql(&self, tr: &Translator<'_>) -> TranslationResult<String> {
        let args = tr.translate_all(&self.args)?;
        tr.profile().functions().render(FunctionTag::Math(self.func), &args)
    }
}

impl ToSql for GeometryCall {
    fn to_sql(&self, tr: &Translator<'_>) -> TranslationResult<String> {
        let args = tr.translate_all(&self.args)?;
        tr.profile().functions().render(FunctionTag::Geometry(self.func), &args)
    }
}

impl ToSql for TableName {
    /// Qualified database name when linked, the name as written otherwise.
    fn to_sql(&self, tr: &Translator<'_>) -> TranslationResult<String> {
        Ok(match &self.db {
            Some(meta) => tr.profile().qualified_table_name(meta),
            None => self.to_string(),
        })
    }
}

impl ToSql for ColumnRef {
    fn to_sql(&self, tr: &Translator<'_>) -> TranslationResult<String> {
        let Some(meta) = &self.db else {
            return Ok(self.to_string());
        };
        let profile = tr.profile();
        let column = if meta.labelled {
            profile.quote_always(&meta.db_name)
        } else {
            profile.quote(&meta.db_name, IdentifierKind::Column)
        };

        let qualifier = if let Some(alias) = &self.table_alias {
            Some(profile.quote_alias(alias))
        } else if let Some(table) = &meta.table {
            Some(profile.qualified_table_name(table))
        } else if let Some(prefix) = &self.prefix {
            Some(prefix.to_sql(tr)?)
        } else {
            None
        };

        Ok(match qualifier {
            Some(q) => format!("{}.{}", q, column),
            None => column,
        })
    }
}
