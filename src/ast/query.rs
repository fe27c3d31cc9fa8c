use serde::{Deserialize, Serialize};

use super::constraint::Constraint;
use super::from::FromContent;
use super::names::{ColumnRef, Ident, TableName};
use super::operand::Operand;

/// Separator between the items of a clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Separator {
    Comma,
    And,
    Or,
}

impl std::fmt::Display for Separator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Separator::Comma => write!(f, ","),
            Separator::And => write!(f, "AND"),
            Separator::Or => write!(f, "OR"),
        }
    }
}

impl Separator {
    /// Text placed between two rendered items.
    pub fn joiner(&self) -> &'static str {
        match self {
            Separator::Comma => ", ",
            Separator::And => " AND ",
            Separator::Or => " OR ",
        }
    }
}

/// Items of a clause with the separator placed between them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClauseList<T> {
    pub items: Vec<T>,
    pub separator: Separator,
}

impl<T> ClauseList<T> {
    pub fn new(separator: Separator) -> Self {
        Self {
            items: Vec::new(),
            separator,
        }
    }

    pub fn comma() -> Self {
        Self::new(Separator::Comma)
    }

    pub fn and() -> Self {
        Self::new(Separator::And)
    }

    pub fn or() -> Self {
        Self::new(Separator::Or)
    }

    pub fn with(mut self, item: T) -> Self {
        self.items.push(item);
        self
    }

    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}

impl<T: std::fmt::Display> std::fmt::Display for ClauseList<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                write!(f, "{}", self.separator.joiner())?;
            }
            write!(f, "{}", item)?;
        }
        Ok(())
    }
}

/// One output item of a SELECT clause.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SelectItem {
    /// `*`
    All,
    /// `t.*`
    AllOf {
        table: TableName,
        #[serde(default)]
        table_alias: Option<Ident>,
    },
    Expr {
        operand: Operand,
        #[serde(default)]
        alias: Option<Ident>,
    },
}

impl SelectItem {
    pub fn expr(operand: Operand) -> Self {
        SelectItem::Expr {
            operand,
            alias: None,
        }
    }

    pub fn aliased(operand: Operand, alias: impl Into<Ident>) -> Self {
        SelectItem::Expr {
            operand,
            alias: Some(alias.into()),
        }
    }
}

impl From<ColumnRef> for SelectItem {
    fn from(col: ColumnRef) -> Self {
        SelectItem::expr(Operand::Column(col))
    }
}

impl std::fmt::Display for SelectItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SelectItem::All => write!(f, "*"),
            SelectItem::AllOf { table, .. } => write!(f, "{}.*", table),
            SelectItem::Expr { operand, alias } => match alias {
                Some(alias) => write!(f, "{} AS {}", operand, alias),
                None => write!(f, "{}", operand),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SelectClause {
    #[serde(default)]
    pub distinct: bool,
    /// Maximum number of rows (`TOP n` in the query language).
    #[serde(default)]
    pub limit: Option<u64>,
    #[serde(default)]
    pub items: Vec<SelectItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum OrderTarget {
    /// 1-based index into the select list.
    Index(u32),
    Operand(Operand),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub target: OrderTarget,
    #[serde(default)]
    pub descending: bool,
}

impl OrderItem {
    pub fn asc(target: OrderTarget) -> Self {
        Self {
            target,
            descending: false,
        }
    }

    pub fn desc(target: OrderTarget) -> Self {
        Self {
            target,
            descending: true,
        }
    }
}

impl std::fmt::Display for OrderItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.target {
            OrderTarget::Index(i) => write!(f, "{}", i)?,
            OrderTarget::Operand(op) => write!(f, "{}", op)?,
        }
        if self.descending {
            write!(f, " DESC")?;
        }
        Ok(())
    }
}

/// A checked query tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Query {
    pub select: SelectClause,
    pub from: FromContent,
    pub where_clause: ClauseList<Constraint>,
    pub group_by: ClauseList<Operand>,
    pub having: ClauseList<Constraint>,
    pub order_by: ClauseList<OrderItem>,
}

impl Query {
    /// An empty `SELECT` over the given FROM content.
    pub fn select_from(from: impl Into<FromContent>) -> Self {
        Self {
            select: SelectClause::default(),
            from: from.into(),
            where_clause: ClauseList::and(),
            group_by: ClauseList::comma(),
            having: ClauseList::and(),
            order_by: ClauseList::comma(),
        }
    }

    pub fn item(mut self, item: impl Into<SelectItem>) -> Self {
        self.select.items.push(item.into());
        self
    }

    pub fn distinct(mut self) -> Self {
        self.select.distinct = true;
        self
    }

    pub fn top(mut self, limit: u64) -> Self {
        self.select.limit = Some(limit);
        self
    }

    pub fn filter(mut self, constraint: Constraint) -> Self {
        self.where_clause.push(constraint);
        self
    }

    pub fn group(mut self, operand: Operand) -> Self {
        self.group_by.push(operand);
        self
    }

    pub fn having(mut self, constraint: Constraint) -> Self {
        self.having.push(constraint);
        self
    }

    pub fn order(mut self, item: OrderItem) -> Self {
        self.order_by.push(item);
        self
    }
}

impl std::fmt::Display for Query {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SELECT")?;
        if self.select.distinct {
            write!(f, " DISTINCT")?;
        }
        if let Some(limit) = self.select.limit {
            write!(f, " TOP {}", limit)?;
        }
        if self.select.items.is_empty() {
            write!(f, " *")?;
        }
        for (i, item) in self.select.items.iter().enumerate() {
            let sep = if i == 0 { " " } else { ", " };
            write!(f, "{}{}", sep, item)?;
        }
        write!(f, "\nFROM {}", self.from)?;
        if !self.where_clause.is_empty() {
            write!(f, "\nWHERE {}", self.where_clause)?;
        }
        if !self.group_by.is_empty() {
            write!(f, "\nGROUP BY {}", self.group_by)?;
        }
        if !self.having.is_empty() {
            write!(f, "\nHAVING {}", self.having)?;
        }
        if !self.order_by.is_empty() {
            write!(f, "\nORDER BY {}", self.order_by)?;
        }
        Ok(())
    }
}
