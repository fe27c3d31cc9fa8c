use super::{ToSql, Translator};
use crate::ast::{ClauseList, OrderItem, OrderTarget, Operand, Query, SelectClause, SelectItem};
use crate::error::TranslationResult;

impl ToSql for Query {
    fn to_sql(&self, tr: &Translator<'_>) -> TranslationResult<String> {
        let mut sql = self.select.to_sql(tr)?;

        sql.push_str("\nFROM ");
        sql.push_str(&self.from.to_sql(tr)?);

        if !self.where_clause.is_empty() {
            sql.push_str("\nWHERE ");
            sql.push_str(&self.where_clause.to_sql(tr)?);
        }
        if !self.group_by.is_empty() {
            sql.push_str("\nGROUP BY ");
            sql.push_str(&self.group_by.to_sql(tr)?);
        }
        if !self.having.is_empty() {
            sql.push_str("\nHAVING ");
            sql.push_str(&self.having.to_sql(tr)?);
        }
        if !self.order_by.is_empty() {
            sql.push_str("\nORDER BY ");
            sql.push_str(&self.order_by.to_sql(tr)?);
        }

        // Trailing pagination
        if let Some(suffix) = self.select.limit.and_then(|n| tr.profile().limit_suffix(n)) {
            sql.push('\n');
            sql.push_str(&suffix);
        }
        Ok(sql)
    }
}

impl ToSql for SelectClause {
    fn to_sql(&self, tr: &Translator<'_>) -> TranslationResult<String> {
        let mut sql = String::from("SELECT");
        if self.distinct {
            sql.push_str(" DISTINCT");
        }
        if let Some(prefix) = self.limit.and_then(|n| tr.profile().limit_prefix(n)) {
            sql.push(' ');
            sql.push_str(&prefix);
        }

        sql.push(' ');
        if self.items.is_empty() {
            sql.push('*');
        } else {
            sql.push_str(&tr.translate_all(&self.items)?.join(", "));
        }
        Ok(sql)
    }
}

impl ToSql for SelectItem {
    fn to_sql(&self, tr: &Translator<'_>) -> TranslationResult<String> {
        let profile = tr.profile();
        match self {
            SelectItem::All => Ok("*".to_string()),
            SelectItem::AllOf { table, table_alias } => {
                let qualifier = match table_alias {
                    Some(alias) => profile.quote_alias(alias),
                    None => table.to_sql(tr)?,
                };
                Ok(format!("{}.*", qualifier))
            }
            SelectItem::Expr { operand, alias } => {
                let sql = operand.to_sql(tr)?;
                if let Some(alias) = alias {
                    let label = profile.quote_label(&alias.name, alias.case_sensitive);
                    return Ok(format!("{} AS {}", sql, label));
                }
                // Keep the query-language label on renamed columns
                if let Operand::Column(col) = operand {
                    if let Some(meta) = &col.db {
                        if meta.db_name != meta.adql_name {
                            let label = profile.quote_label(&meta.adql_name, meta.case_sensitive);
                            return Ok(format!("{} AS {}", sql, label));
                        }
                    }
                }
                Ok(sql)
            }
        }
    }
}

impl<T: ToSql> ToSql for ClauseList<T> {
    fn to_sql(&self, tr: &Translator<'_>) -> TranslationResult<String> {
        Ok(tr.translate_all(&self.items)?.join(self.separator.joiner()))
    }
}

impl ToSql for OrderItem {
    fn to_sql(&self, tr: &Translator<'_>) -> TranslationResult<String> {
        let mut sql = match &self.target {
            OrderTarget::Index(i) => i.to_string(),
            OrderTarget::Operand(op) => op.to_sql(tr)?,
        };
        if self.descending {
            sql.push_str(" DESC");
        }
        Ok(sql)
    }
}
