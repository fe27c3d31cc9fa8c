use super::dialect::{ConcatStyle, Pagination};
use super::functions::FunctionMapper;
use super::types::TypeMapper;

/// Length given to bounded character and binary types declared without one.
pub const DEFAULT_VARIABLE_LENGTH: u32 = 2048;

/// Built-in behaviour of a target database.
///
/// A [`DialectProfile`](super::DialectProfile) is seeded from these values
/// once and may then override the configurable ones.
pub trait DialectDefaults: Send + Sync {
    fn quote_char(&self) -> char {
        '"'
    }

    fn concat_style(&self) -> ConcatStyle {
        ConcatStyle::Operator("||")
    }

    fn pagination(&self) -> Pagination {
        Pagination::Limit
    }

    /// Token inserted between schema and table, if the dialect has one.
    fn namespace(&self) -> Option<&'static str> {
        None
    }

    fn default_variable_length(&self) -> u32 {
        DEFAULT_VARIABLE_LENGTH
    }

    fn type_mapper(&self) -> TypeMapper;

    /// Function overrides; anything not listed uses the generic call syntax.
    fn function_mapper(&self) -> FunctionMapper {
        FunctionMapper::new()
    }
}
