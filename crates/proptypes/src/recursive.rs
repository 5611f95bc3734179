//! Validators inferred from nested literals.
//!
//! Instead of nesting combinator calls, a structure can be described by an
//! example:
//!
//! ```rust,ignore
//! use proptypes::prelude::*;
//! use serde_json::json;
//!
//! let table = recursive(json!({"user": {"name": "x", "tags": ["t"]}}))?;
//! // user: shape({name: string, tags: arrayOf(string)})
//! assert!(check(table.get("user").unwrap(), json!({"name": "Bob", "tags": []})).is_ok());
//! ```
//!
//! Rules:
//! - validator leaves are used as-is;
//! - scalar samples become the validator of their runtime kind;
//! - a list becomes `arrayOf` of its *first* element (later elements are
//!   not inspected, an empty list becomes plain `array`);
//! - a nested record becomes a `shape`; the top-level record is returned
//!   as an unwrapped prop table.

use crate::combinators::shape::shape_of;
use crate::combinators::{array_of, instance_of};
use crate::primitive::PrimitiveKind;
use crate::validator::{PropTypes, Validator};
use crate::value::Value;
use indexmap::IndexMap;

/// A structure description mixing validators and example values.
#[derive(Debug, Clone)]
pub enum Literal {
    Validator(Validator),
    Sample(Value),
    List(Vec<Literal>),
    Record(IndexMap<String, Literal>),
}

impl Literal {
    /// Builds a record literal from field pairs.
    pub fn record<K, L, I>(fields: I) -> Self
    where
        K: Into<String>,
        L: Into<Literal>,
        I: IntoIterator<Item = (K, L)>,
    {
        Self::Record(
            fields
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    fn kind_name(&self) -> &'static str {
        match self {
            Self::Validator(_) => "validator",
            Self::Sample(value) => value.type_name(),
            Self::List(_) => "list",
            Self::Record(_) => "record",
        }
    }
}

impl From<Validator> for Literal {
    fn from(validator: Validator) -> Self {
        Self::Validator(validator)
    }
}

impl From<Value> for Literal {
    fn from(value: Value) -> Self {
        match value {
            Value::Array(items) => Self::List(items.into_iter().map(Self::from).collect()),
            Value::Object(map) => {
                Self::Record(map.into_iter().map(|(k, v)| (k, Self::from(v))).collect())
            }
            other => Self::Sample(other),
        }
    }
}

impl From<serde_json::Value> for Literal {
    fn from(value: serde_json::Value) -> Self {
        Self::from(Value::from(value))
    }
}

impl From<&str> for Literal {
    fn from(value: &str) -> Self {
        Self::Sample(Value::from(value))
    }
}

impl From<Vec<Literal>> for Literal {
    fn from(items: Vec<Literal>) -> Self {
        Self::List(items)
    }
}

/// Errors raised while inferring validators from a literal.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecursiveError {
    #[error("cannot infer a validator from `{value}` at `{path}`")]
    UnsupportedSample { path: String, value: String },

    #[error("top-level literal must be a record, found {found}")]
    NotARecord { found: &'static str },
}

/// Transforms every field of a top-level record literal.
///
/// The result is not wrapped in a shape, so it can serve directly as a
/// component's prop table.
pub fn recursive(literal: impl Into<Literal>) -> Result<PropTypes, RecursiveError> {
    match literal.into() {
        Literal::Record(fields) => build_fields(fields, ""),
        other => Err(RecursiveError::NotARecord {
            found: other.kind_name(),
        }),
    }
}

/// Transforms any literal into a single validator; a top-level record is
/// wrapped in a shape.
pub fn recursive_validator(literal: impl Into<Literal>) -> Result<Validator, RecursiveError> {
    build(literal.into(), "")
}

fn build(literal: Literal, path: &str) -> Result<Validator, RecursiveError> {
    match literal {
        Literal::Validator(validator) => Ok(validator),
        Literal::Sample(value) => sample(&value, path),
        Literal::List(items) => {
            if items.len() > 1 {
                tracing::debug!(
                    path,
                    len = items.len(),
                    "inferring list element type from the first element only"
                );
            }
            match items.into_iter().next() {
                Some(first) => Ok(array_of(build(first, &format!("{path}[0]"))?)),
                None => Ok(PrimitiveKind::Array.validator()),
            }
        }
        Literal::Record(fields) => build_fields(fields, path).map(shape_of),
    }
}

fn build_fields(
    fields: IndexMap<String, Literal>,
    path: &str,
) -> Result<PropTypes, RecursiveError> {
    fields
        .into_iter()
        .map(|(key, literal)| {
            let child_path = if path.is_empty() {
                key.clone()
            } else {
                format!("{path}.{key}")
            };
            build(literal, &child_path).map(|validator| (key, validator))
        })
        .collect()
}

fn sample(value: &Value, path: &str) -> Result<Validator, RecursiveError> {
    let kind = match value {
        Value::Bool(_) => PrimitiveKind::Bool,
        Value::Number(_) => PrimitiveKind::Number,
        Value::String(_) => PrimitiveKind::String,
        Value::Function(_) => PrimitiveKind::Func,
        Value::Element(_) => PrimitiveKind::Element,
        Value::Instance(instance) => return Ok(instance_of(instance.class())),
        Value::Array(_) | Value::Object(_) => {
            return build(Literal::from(value.clone()), path);
        }
        Value::Undefined | Value::Null => {
            return Err(RecursiveError::UnsupportedSample {
                path: path.to_owned(),
                value: value.to_string(),
            });
        }
    };
    Ok(kind.validator())
}
