//! SQL transpiler for checked query trees.
//!
//! A [`Translator`] pairs an immutable [`DialectProfile`] with a
//! [`ColumnCatalog`] and turns any node implementing [`ToSql`] into SQL
//! text. Translation is a pure function of the node and those two
//! collaborators; nothing is cached between calls.

pub mod dialect;
pub mod functions;
pub mod identifiers;
pub mod sql;
pub mod traits;
pub mod types;

mod conditions;
mod joins;
mod operands;
mod select;

#[cfg(test)]
mod tests;

use std::fmt;

use crate::ast::GeometryCall;
use crate::catalog::ColumnCatalog;
use crate::error::{TranslationError, TranslationResult};

pub use dialect::{ConcatStyle, Dialect, DialectProfile, Pagination};
pub use functions::{default_function, FunctionMapper, FunctionTag, Translation};
pub use identifiers::{CaseSensitivity, IdentifierKind, META_SCHEMA};
pub use traits::{DialectDefaults, DEFAULT_VARIABLE_LENGTH};
pub use types::{FromNative, ToNative, TypeMapper};

/// Trait for converting AST nodes to SQL.
pub trait ToSql {
    fn to_sql(&self, tr: &Translator<'_>) -> TranslationResult<String>;
}

impl<T: ToSql + ?Sized> ToSql for Box<T> {
    fn to_sql(&self, tr: &Translator<'_>) -> TranslationResult<String> {
        (**self).to_sql(tr)
    }
}

/// Translation context: the target dialect and the catalog used to resolve
/// NATURAL and USING joins.
#[derive(Clone, Copy)]
pub struct Translator<'a> {
    profile: &'a DialectProfile,
    catalog: &'a dyn ColumnCatalog,
}

impl fmt::Debug for Translator<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Translator")
            .field("dialect", &self.profile.dialect())
            .finish()
    }
}

impl<'a> Translator<'a> {
    pub fn new(profile: &'a DialectProfile, catalog: &'a dyn ColumnCatalog) -> Self {
        Self { profile, catalog }
    }

    pub fn profile(&self) -> &'a DialectProfile {
        self.profile
    }

    pub fn catalog(&self) -> &'a dyn ColumnCatalog {
        self.catalog
    }

    pub fn translate<N: ToSql + ?Sized>(&self, node: &N) -> TranslationResult<String> {
        node.to_sql(self)
    }

    /// Translate each node in order.
    pub(crate) fn translate_all<N: ToSql>(&self, nodes: &[N]) -> TranslationResult<Vec<String>> {
        nodes.iter().map(|n| n.to_sql(self)).collect()
    }

    /// Read a database value as a geometry. Always fails: geometries are
    /// never interpreted here.
    pub fn geometry_from_db(&self, value: &dyn fmt::Display) -> TranslationResult<GeometryCall> {
        Err(TranslationError::UnsupportedGeometry(value.to_string()))
    }

    /// Write a geometry as a database value. Always fails.
    pub fn geometry_to_db(&self, _region: &GeometryCall) -> TranslationResult<String> {
        Err(TranslationError::GeometryUpload)
    }
}
