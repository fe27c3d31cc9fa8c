//! Function override registry.
//!
//! A dialect lists the functions it renders differently; every other call
//! is written back in the query language's own call syntax. Geometrical
//! functions normally have no rule and are echoed that way, to be handled
//! (or rejected) by the database at execution time.

use std::collections::HashMap;
use std::sync::Arc;

use crate::ast::{GeometryFunc, MathFunc};
use crate::error::{TranslationError, TranslationResult};

/// Rule body receiving the already translated arguments.
pub type TransformFn = Arc<dyn Fn(&[String]) -> TranslationResult<String> + Send + Sync>;

/// Key of a function rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FunctionTag {
    Math(MathFunc),
    Geometry(GeometryFunc),
}

impl FunctionTag {
    pub fn name(&self) -> &'static str {
        match self {
            FunctionTag::Math(f) => f.name(),
            FunctionTag::Geometry(f) => f.name(),
        }
    }
}

impl From<MathFunc> for FunctionTag {
    fn from(f: MathFunc) -> Self {
        FunctionTag::Math(f)
    }
}

impl From<GeometryFunc> for FunctionTag {
    fn from(f: GeometryFunc) -> Self {
        FunctionTag::Geometry(f)
    }
}

/// How one function is rendered.
#[derive(Clone)]
pub enum Translation {
    /// Same arguments, other name: `LOG(x)` → `ln(x)`.
    Rename(&'static str),
    Transform(TransformFn),
}

/// Rules of one dialect, keyed by function.
#[derive(Clone, Default)]
pub struct FunctionMapper {
    rules: HashMap<FunctionTag, Translation>,
}

impl std::fmt::Debug for FunctionMapper {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FunctionMapper")
            .field("rules_count", &self.rules.len())
            .finish()
    }
}

impl FunctionMapper {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rename(mut self, tag: impl Into<FunctionTag>, to: &'static str) -> Self {
        self.rules.insert(tag.into(), Translation::Rename(to));
        self
    }

    pub fn transform<F>(mut self, tag: impl Into<FunctionTag>, f: F) -> Self
    where
        F: Fn(&[String]) -> TranslationResult<String> + Send + Sync + 'static,
    {
        self.rules.insert(tag.into(), Translation::Transform(Arc::new(f)));
        self
    }

    pub fn has_rule(&self, tag: FunctionTag) -> bool {
        self.rules.contains_key(&tag)
    }

    /// Apply the rule for `tag`, or `None` when the dialect has none.
    pub fn translate(&self, tag: FunctionTag, args: &[String]) -> Option<TranslationResult<String>> {
        self.rules.get(&tag).map(|rule| match rule {
            Translation::Rename(name) => Ok(default_function(name, args)),
            Translation::Transform(f) => f(args),
        })
    }

    /// Apply the rule for `tag`, falling back to the default rendering.
    pub fn render(&self, tag: FunctionTag, args: &[String]) -> TranslationResult<String> {
        self.translate(tag, args)
            .unwrap_or_else(|| Ok(default_function(tag.name(), args)))
    }
}

/// The query language's own call syntax: `NAME(arg0, arg1)`.
pub fn default_function(name: &str, args: &[String]) -> String {
    format!("{}({})", name, args.join(", "))
}

/// Fail unless at least `expected` arguments are present.
pub(crate) fn require_args(tag: FunctionTag, args: &[String], expected: usize) -> TranslationResult<()> {
    if args.len() < expected {
        return Err(TranslationError::arity(tag.name(), expected, args.len()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(a: &[&str]) -> Vec<String> {
        a.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_rename_rule() {
        let m = FunctionMapper::new().rename(MathFunc::Log, "ln");
        assert_eq!(m.render(MathFunc::Log.into(), &args(&["x"])).unwrap(), "ln(x)");
    }

    #[test]
    fn test_transform_rule() {
        let m = FunctionMapper::new().transform(MathFunc::Pi, |_| Ok("3.14".to_string()));
        assert_eq!(m.render(MathFunc::Pi.into(), &[]).unwrap(), "3.14");
    }

    #[test]
    fn test_missing_rule_uses_default_rendering() {
        let m = FunctionMapper::new();
        assert!(m.translate(GeometryFunc::Area.into(), &args(&["r"])).is_none());
        assert_eq!(
            m.render(GeometryFunc::Circle.into(), &args(&["'ICRS'", "1", "2", "3"])).unwrap(),
            "CIRCLE('ICRS', 1, 2, 3)"
        );
    }

    #[test]
    fn test_require_args() {
        let err = require_args(MathFunc::Atan2.into(), &args(&["y"]), 2).unwrap_err();
        assert_eq!(err.to_string(), "Function ATAN2 expects 2 argument(s), got 1");
    }
}
