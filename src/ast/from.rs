use serde::{Deserialize, Serialize};

use super::constraint::Constraint;
use super::names::{Ident, TableName};
use super::query::Query;

/// What a FROM item reads from: a catalog table or a subquery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TableSource {
    Base(TableName),
    Derived(Box<Query>),
}

/// A single FROM item with its optional alias.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableRef {
    pub source: TableSource,
    #[serde(default)]
    pub alias: Option<Ident>,
}

impl TableRef {
    pub fn base(table: TableName) -> Self {
        Self {
            source: TableSource::Base(table),
            alias: None,
        }
    }

    pub fn derived(query: Query, alias: impl Into<Ident>) -> Self {
        Self {
            source: TableSource::Derived(Box::new(query)),
            alias: Some(alias.into()),
        }
    }

    pub fn alias(mut self, alias: impl Into<Ident>) -> Self {
        self.alias = Some(alias.into());
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JoinKind {
    Cross,
    Inner,
    LeftOuter,
    RightOuter,
    FullOuter,
}

impl std::fmt::Display for JoinKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JoinKind::Cross => write!(f, "CROSS JOIN"),
            JoinKind::Inner => write!(f, "INNER JOIN"),
            JoinKind::LeftOuter => write!(f, "LEFT OUTER JOIN"),
            JoinKind::RightOuter => write!(f, "RIGHT OUTER JOIN"),
            JoinKind::FullOuter => write!(f, "FULL OUTER JOIN"),
        }
    }
}

/// How the rows of a join are matched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum JoinCondition {
    Natural,
    Using(Vec<Ident>),
    On(Constraint),
    None,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Join {
    pub kind: JoinKind,
    pub left: FromContent,
    pub right: FromContent,
    pub condition: JoinCondition,
}

/// Content of a FROM clause.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FromContent {
    Table(TableRef),
    Join(Box<Join>),
}

impl FromContent {
    pub fn join(kind: JoinKind, left: FromContent, right: FromContent, condition: JoinCondition) -> Self {
        FromContent::Join(Box::new(Join {
            kind,
            left,
            right,
            condition,
        }))
    }
}

impl From<TableRef> for FromContent {
    fn from(table: TableRef) -> Self {
        FromContent::Table(table)
    }
}

impl From<TableName> for FromContent {
    fn from(table: TableName) -> Self {
        FromContent::Table(TableRef::base(table))
    }
}

impl std::fmt::Display for TableRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.source {
            TableSource::Base(name) => write!(f, "{}", name)?,
            TableSource::Derived(query) => write!(f, "({})", query)?,
        }
        if let Some(alias) = &self.alias {
            write!(f, " AS {}", alias)?;
        }
        Ok(())
    }
}

impl std::fmt::Display for Join {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.condition {
            JoinCondition::Natural => write!(f, "{} NATURAL {} {}", self.left, self.kind, self.right),
            JoinCondition::Using(cols) => {
                write!(f, "{} {} {} USING", self.left, self.kind, self.right)?;
                super::operand::write_call(f, "", cols)
            }
            JoinCondition::On(cond) => {
                write!(f, "{} {} {} ON {}", self.left, self.kind, self.right, cond)
            }
            JoinCondition::None => write!(f, "{} {} {}", self.left, self.kind, self.right),
        }
    }
}

impl std::fmt::Display for FromContent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FromContent::Table(table) => write!(f, "{}", table),
            FromContent::Join(join) => write!(f, "{}", join),
        }
    }
}
