//! Primitive type checkers.
//!
//! Each [`PrimitiveKind`] owns exactly one type check. The shared required
//! validator for every kind is built once, on first use, into a registry
//! that nothing mutates afterwards.

use crate::context::Context;
use crate::error::ValidationError;
use crate::validator::{Rule, Validator};
use crate::value::Value;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

/// The unparametrized primitive types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    Any,
    Array,
    Bool,
    Func,
    Number,
    Object,
    String,
    /// Anything renderable: numbers, strings, elements or arrays of those.
    Node,
    /// A single UI element.
    Element,
}

impl PrimitiveKind {
    pub const ALL: [PrimitiveKind; 9] = [
        Self::Any,
        Self::Array,
        Self::Bool,
        Self::Func,
        Self::Number,
        Self::Object,
        Self::String,
        Self::Node,
        Self::Element,
    ];

    /// Canonical name, as used by [`types::by_name`](crate::types::by_name).
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Any => "any",
            Self::Array => "array",
            Self::Bool => "bool",
            Self::Func => "func",
            Self::Number => "number",
            Self::Object => "object",
            Self::String => "string",
            Self::Node => "node",
            Self::Element => "element",
        }
    }

    /// Type name quoted in mismatch messages.
    #[must_use]
    pub fn expected_type(self) -> &'static str {
        match self {
            Self::Bool => "boolean",
            Self::Func => "function",
            other => other.name(),
        }
    }

    /// Checks a non-null subject against this kind.
    pub(crate) fn check(
        self,
        value: &Value,
        path: &str,
        ctx: &Context<'_>,
    ) -> Result<(), ValidationError> {
        let ok = match self {
            Self::Any => true,
            Self::Array => matches!(value, Value::Array(_)),
            Self::Bool => matches!(value, Value::Bool(_)),
            Self::Func => matches!(value, Value::Function(_)),
            Self::Number => matches!(value, Value::Number(_)),
            Self::Object => matches!(
                value,
                Value::Object(_) | Value::Instance(_) | Value::Element(_)
            ),
            Self::String => matches!(value, Value::String(_)),
            Self::Node => {
                return if is_node(value) {
                    Ok(())
                } else {
                    Err(ValidationError::expected(
                        ctx,
                        path,
                        value,
                        "a renderable node",
                    ))
                };
            }
            Self::Element => {
                return if matches!(value, Value::Element(_)) {
                    Ok(())
                } else {
                    Err(ValidationError::expected(
                        ctx,
                        path,
                        value,
                        "a single element",
                    ))
                };
            }
        };

        if ok {
            Ok(())
        } else {
            Err(ValidationError::type_mismatch(
                ctx,
                path,
                value,
                self.expected_type(),
            ))
        }
    }

    /// The shared required validator for this kind.
    #[must_use]
    pub fn validator(self) -> Validator {
        REGISTRY[self as usize].clone()
    }
}

fn is_node(value: &Value) -> bool {
    match value {
        Value::Undefined | Value::Null | Value::Number(_) | Value::String(_) => true,
        Value::Bool(b) => !b,
        Value::Array(items) => items.iter().all(is_node),
        Value::Element(_) => true,
        Value::Object(_) | Value::Function(_) | Value::Instance(_) => false,
    }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unknown primitive name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown primitive type `{0}`")]
pub struct UnknownPrimitive(pub String);

impl FromStr for PrimitiveKind {
    type Err = UnknownPrimitive;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| UnknownPrimitive(s.to_owned()))
    }
}

// Indexed by discriminant, in `PrimitiveKind::ALL` order.
static REGISTRY: LazyLock<[Validator; 9]> =
    LazyLock::new(|| PrimitiveKind::ALL.map(|kind| Validator::new(Rule::Primitive(kind))));
