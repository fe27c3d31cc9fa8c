use super::{ToSql, Translator};
use crate::ast::{Constraint, InList};
use crate::error::TranslationResult;

impl ToSql for Constraint {
    fn to_sql(&self, tr: &Translator<'_>) -> TranslationResult<String> {
        let not = |negated: bool| if negated { "NOT " } else { "" };
        Ok(match self {
            Constraint::Comparison { left, op, right } => {
                format!("{} {} {}", left.to_sql(tr)?, op, right.to_sql(tr)?)
            }
            Constraint::Between {
                operand,
                low,
                high,
                negated,
            } => format!(
                "{} {}BETWEEN {} AND {}",
                operand.to_sql(tr)?,
                not(*negated),
                low.to_sql(tr)?,
                high.to_sql(tr)?
            ),
            Constraint::In {
                operand,
                list,
                negated,
            } => {
                let list = match list {
                    InList::Values(values) => tr.translate_all(values)?.join(", "),
                    InList::Subquery(query) => query.to_sql(tr)?,
                };
                format!("{} {}IN ({})", operand.to_sql(tr)?, not(*negated), list)
            }
            Constraint::IsNull { column, negated } => {
                format!("{} IS {}NULL", column.to_sql(tr)?, not(*negated))
            }
            Constraint::Exists(query) => format!("EXISTS({})", query.to_sql(tr)?),
            Constraint::Not(inner) => format!("NOT {}", inner.to_sql(tr)?),
            Constraint::Group(list) => format!("({})", list.to_sql(tr)?),
        })
    }
}
