//! Table-driven mapping between native column types and query-language
//! datatypes.

use std::collections::HashMap;

use crate::types::{Datatype, DbType};

/// How a native type name maps to a datatype.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FromNative {
    /// Always the same datatype, no length.
    Plain(Datatype),
    /// The datatype, with the first parameter as its length.
    Sized(Datatype),
    /// `low` when the precision parameter lies in `1..=max`, `high` otherwise.
    Precision {
        low: Datatype,
        high: Datatype,
        max: u32,
    },
}

/// How a datatype is declared natively.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToNative {
    /// A fixed type name.
    Name(&'static str),
    /// `name(length)`, the default length standing in for a missing one.
    Sized(&'static str),
}

/// Both directions of a dialect's type table.
#[derive(Debug, Clone)]
pub struct TypeMapper {
    from_native: HashMap<&'static str, FromNative>,
    to_native: HashMap<Datatype, ToNative>,
    bounded_char: &'static str,
    unbounded_char: &'static str,
}

impl TypeMapper {
    /// `bounded_char` declares a column of unknown type (at the default
    /// length); `unbounded_char` is the last resort for types the dialect
    /// cannot store.
    pub fn new(bounded_char: &'static str, unbounded_char: &'static str) -> Self {
        Self {
            from_native: HashMap::new(),
            to_native: HashMap::new(),
            bounded_char,
            unbounded_char,
        }
    }

    /// Map every native name in `names` with `rule`.
    pub fn alias(mut self, names: &[&'static str], rule: FromNative) -> Self {
        for name in names {
            self.from_native.insert(*name, rule);
        }
        self
    }

    /// Declare how `datatype` is rendered.
    pub fn render(mut self, datatype: Datatype, native: ToNative) -> Self {
        self.to_native.insert(datatype, native);
        self
    }

    /// Map a native type to a datatype.
    ///
    /// Matching is done on the lower-cased `normalized_name`. The first
    /// parameter is read as the length when it is a number. `None` means the
    /// type has no usable mapping.
    pub fn from_native(
        &self,
        type_code: i32,
        raw_name: &str,
        normalized_name: &str,
        params: &[String],
    ) -> Option<DbType> {
        let name = normalized_name.trim().to_lowercase();
        if name.is_empty() {
            return None;
        }

        let length = params.first().and_then(|p| p.trim().parse::<u32>().ok());

        let Some(rule) = self.from_native.get(name.as_str()) else {
            tracing::trace!(type_code, raw_name, "no datatype for native type");
            return None;
        };

        let ty = match *rule {
            FromNative::Plain(datatype) => DbType::new(datatype),
            FromNative::Sized(datatype) => DbType::with_length(datatype, length),
            FromNative::Precision { low, high, max } => match length {
                Some(p) if (1..=max).contains(&p) => DbType::new(low),
                _ => DbType::new(high),
            },
        };
        Some(ty)
    }

    /// Render a datatype as a native declaration.
    ///
    /// A bounded type never renders without a length: `default_length`
    /// replaces a missing one. `None` renders as the bounded character type.
    pub fn to_native(&self, ty: Option<&DbType>, default_length: u32) -> String {
        let Some(ty) = ty else {
            return format!("{}({})", self.bounded_char, default_length);
        };
        match self.to_native.get(&ty.datatype) {
            Some(ToNative::Name(name)) => name.to_string(),
            Some(ToNative::Sized(name)) => {
                format!("{}({})", name, ty.length().unwrap_or(default_length))
            }
            None => self.unbounded_char.to_string(),
        }
    }
}
