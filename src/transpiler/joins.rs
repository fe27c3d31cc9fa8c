//! FROM clause rendering and resolution of NATURAL and USING joins.
//!
//! Implicit join conditions are rewritten into explicit `ON` predicates,
//! one `left=right` equality per key column, conjoined with `AND`. The
//! columns each operand exposes come from the catalog for base tables,
//! from the select list for derived tables, and recursively for nested
//! joins.

use super::{ToSql, Translator};
use crate::ast::{
    ColumnRef, FromContent, Ident, Join, JoinCondition, Operand, Query, SelectItem, TableName,
    TableRef, TableSource,
};
use crate::catalog::ColumnMeta;
use crate::error::{JoinColumnError, JoinSide, TranslationError, TranslationResult};

impl ToSql for TableRef {
    fn to_sql(&self, tr: &Translator<'_>) -> TranslationResult<String> {
        let mut sql = match &self.source {
            TableSource::Base(name) => name.to_sql(tr)?,
            TableSource::Derived(query) => format!("({})", query.to_sql(tr)?),
        };
        if let Some(alias) = &self.alias {
            sql.push_str(" AS ");
            sql.push_str(&tr.profile().quote_alias(alias));
        }
        Ok(sql)
    }
}

impl ToSql for FromContent {
    fn to_sql(&self, tr: &Translator<'_>) -> TranslationResult<String> {
        match self {
            FromContent::Table(table) => table.to_sql(tr),
            FromContent::Join(join) => join.to_sql(tr),
        }
    }
}

impl ToSql for Join {
    fn to_sql(&self, tr: &Translator<'_>) -> TranslationResult<String> {
        let mut sql = format!(
            "{} {} {}",
            self.left.to_sql(tr)?,
            self.kind,
            self.right.to_sql(tr)?
        );
        if let Some(on) = tr.resolve_join(self)? {
            sql.push_str(" ON ");
            sql.push_str(&on);
        }
        Ok(sql)
    }
}

/// A matched key column: left operand column, right operand column.
type KeyPair<'c> = (&'c ColumnRef, &'c ColumnRef);

impl Translator<'_> {
    /// The `ON` predicate of a join, or `None` for a join without condition.
    ///
    /// Fails with [`TranslationError::UnresolvedJoin`] when a NATURAL or
    /// USING key column is missing from an operand or appears more than
    /// once in it.
    pub fn resolve_join(&self, join: &Join) -> TranslationResult<Option<String>> {
        let kind = match &join.condition {
            JoinCondition::None => return Ok(None),
            JoinCondition::On(constraint) => return constraint.to_sql(self).map(Some),
            JoinCondition::Natural => "NATURAL JOIN",
            JoinCondition::Using(_) => "JOIN USING",
        };

        let left = self.exposed_columns(&join.left)?;
        let right = self.exposed_columns(&join.right)?;

        let pairs = match &join.condition {
            JoinCondition::Using(columns) => using_pairs(columns, &left, &right),
            _ => natural_pairs(&left, &right),
        }
        .map_err(|source| TranslationError::UnresolvedJoin {
            kind,
            left: join.left.to_string(),
            right: join.right.to_string(),
            source,
        })?;

        let predicates = pairs
            .iter()
            .map(|(l, r)| -> TranslationResult<String> {
                Ok(format!("{}={}", l.to_sql(self)?, r.to_sql(self)?))
            })
            .collect::<TranslationResult<Vec<_>>>()?;

        tracing::debug!("Resolved {} on {} column(s)", kind, predicates.len());
        Ok(Some(predicates.join(" AND ")))
    }

    /// Columns visible through a FROM item, qualified by that item.
    fn exposed_columns(&self, content: &FromContent) -> TranslationResult<Vec<ColumnRef>> {
        match content {
            FromContent::Table(table) => self.table_columns(table),
            FromContent::Join(join) => {
                let mut left = self.exposed_columns(&join.left)?;
                let mut right = self.exposed_columns(&join.right)?;
                // key columns are exposed once, from the left operand
                match &join.condition {
                    JoinCondition::Natural => {
                        right.retain(|r| !left.iter().any(|l| column_matches(r, adql_name(l), false)));
                    }
                    JoinCondition::Using(keys) => {
                        right.retain(|r| !keys.iter().any(|k| column_matches(r, &k.name, k.case_sensitive)));
                    }
                    _ => {}
                }
                left.append(&mut right);
                Ok(left)
            }
        }
    }

    fn table_columns(&self, table: &TableRef) -> TranslationResult<Vec<ColumnRef>> {
        match &table.source {
            TableSource::Base(name) => Ok(self
                .catalog()
                .columns_of(name)?
                .into_iter()
                .map(|meta| ColumnRef {
                    prefix: Some(name.clone()),
                    table_alias: table.alias.clone(),
                    name: Ident {
                        name: meta.adql_name.clone(),
                        case_sensitive: meta.case_sensitive,
                    },
                    db: Some(meta),
                })
                .collect()),
            TableSource::Derived(query) => self.derived_columns(query, table.alias.as_ref()),
        }
    }

    /// Output columns of a subquery, seen from outside through `alias`.
    fn derived_columns(&self, query: &Query, alias: Option<&Ident>) -> TranslationResult<Vec<ColumnRef>> {
        let mut columns = Vec::new();
        for item in &query.select.items {
            match item {
                SelectItem::All => {
                    for col in self.exposed_columns(&query.from)? {
                        columns.push(requalify(col, alias));
                    }
                }
                SelectItem::AllOf { table, table_alias } => {
                    let target = table_alias.as_ref().unwrap_or(&table.table);
                    for col in self.exposed_columns(&query.from)? {
                        if belongs_to(&col, target) {
                            columns.push(requalify(col, alias));
                        }
                    }
                }
                SelectItem::Expr { operand, alias: label } => {
                    let meta = match (label, operand) {
                        (Some(label), _) => {
                            let mut meta = ColumnMeta::label(label.name.clone(), label.case_sensitive);
                            if let Operand::Column(col) = operand {
                                meta.datatype = col.db.as_ref().and_then(|m| m.datatype);
                            }
                            meta
                        }
                        (None, Operand::Column(col)) => match &col.db {
                            Some(db) if db.db_name != db.adql_name => {
                                let mut meta = ColumnMeta::label(db.adql_name.clone(), db.case_sensitive);
                                meta.datatype = db.datatype;
                                meta
                            }
                            Some(db) => ColumnMeta {
                                table: None,
                                ..db.clone()
                            },
                            None => {
                                let mut meta = ColumnMeta::new(col.name.name.clone());
                                meta.case_sensitive = col.name.case_sensitive;
                                meta
                            }
                        },
                        // unnamed expressions cannot be join keys
                        (None, _) => continue,
                    };
                    columns.push(derived_column(meta, alias));
                }
            }
        }
        if query.select.items.is_empty() {
            for col in self.exposed_columns(&query.from)? {
                columns.push(requalify(col, alias));
            }
        }
        Ok(columns)
    }
}

fn derived_column(meta: ColumnMeta, alias: Option<&Ident>) -> ColumnRef {
    ColumnRef {
        prefix: alias.map(|a| TableName::new(a.clone())),
        table_alias: alias.cloned(),
        name: Ident {
            name: meta.adql_name.clone(),
            case_sensitive: meta.case_sensitive,
        },
        db: Some(meta),
    }
}

/// A column passed through `SELECT *`, now owned by the derived table.
fn requalify(col: ColumnRef, alias: Option<&Ident>) -> ColumnRef {
    let mut meta = col.db.unwrap_or_else(|| ColumnMeta::new(col.name.name.clone()));
    meta.table = None;
    derived_column(meta, alias)
}

fn belongs_to(col: &ColumnRef, target: &Ident) -> bool {
    col.table_alias
        .as_ref()
        .or(col.prefix.as_ref().map(|p| &p.table))
        .is_some_and(|q| q.matches(&target.name, target.case_sensitive))
}

fn adql_name(col: &ColumnRef) -> &str {
    col.db
        .as_ref()
        .map(|m| m.adql_name.as_str())
        .unwrap_or(col.name.name.as_str())
}

fn column_matches(col: &ColumnRef, name: &str, case_sensitive: bool) -> bool {
    match &col.db {
        Some(meta) => meta.matches(name, case_sensitive),
        None => col.name.matches(name, case_sensitive),
    }
}

fn find_at_most_one<'c>(
    name: &str,
    case_sensitive: bool,
    columns: &'c [ColumnRef],
    side: JoinSide,
) -> Result<Option<&'c ColumnRef>, JoinColumnError> {
    let mut found = columns
        .iter()
        .filter(|c| column_matches(c, name, case_sensitive));
    let first = found.next();
    let extra = found.count();
    if extra > 0 {
        return Err(JoinColumnError::Ambiguous {
            column: name.to_string(),
            side,
            count: extra + 1,
        });
    }
    Ok(first)
}

fn find_exactly_one<'c>(
    name: &str,
    case_sensitive: bool,
    columns: &'c [ColumnRef],
    side: JoinSide,
) -> Result<&'c ColumnRef, JoinColumnError> {
    find_at_most_one(name, case_sensitive, columns, side)?.ok_or_else(|| JoinColumnError::NotFound {
        column: name.to_string(),
        side,
    })
}

/// One pair per USING column, in the order the columns were named.
fn using_pairs<'c>(
    keys: &[Ident],
    left: &'c [ColumnRef],
    right: &'c [ColumnRef],
) -> Result<Vec<KeyPair<'c>>, JoinColumnError> {
    keys.iter()
        .map(|key| -> Result<KeyPair<'c>, JoinColumnError> {
            let l = find_exactly_one(&key.name, key.case_sensitive, left, JoinSide::Left)?;
            let r = find_exactly_one(&key.name, key.case_sensitive, right, JoinSide::Right)?;
            Ok((l, r))
        })
        .collect()
}

/// One pair per left column that also exists on the right, in left order.
fn natural_pairs<'c>(
    left: &'c [ColumnRef],
    right: &'c [ColumnRef],
) -> Result<Vec<KeyPair<'c>>, JoinColumnError> {
    let mut pairs = Vec::new();
    for l in left {
        let name = adql_name(l);
        if let Some(r) = find_at_most_one(name, false, right, JoinSide::Right)? {
            // the left operand may itself repeat the name
            find_exactly_one(name, false, left, JoinSide::Left)?;
            pairs.push((l, r));
        }
    }
    if pairs.is_empty() {
        return Err(JoinColumnError::NoCommonColumn);
    }
    Ok(pairs)
}
