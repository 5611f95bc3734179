//! The validator type and its required/optional pairing.
//!
//! A [`Validator`] is an `Arc`-shared rule plus a [`Requiredness`] flag.
//! Both forms of a validator share the same rule, so toggling never builds
//! anything new:
//!
//! ```rust,ignore
//! use proptypes::prelude::*;
//!
//! let number = types::number();
//! assert_eq!(number.optional().required(), number);
//! assert_eq!(number.optional().required().optional(), number.optional());
//! ```
//!
//! Evaluation follows one algorithm for every kind: a `null` or absent
//! subject is rejected by the required form and accepted by the optional
//! form; anything else is handed to the rule.

use crate::combinators::{collection, custom, shape, union};
use crate::context::Context;
use crate::error::ValidationError;
use crate::primitive::PrimitiveKind;
use crate::value::{Class, Map, Value};
use indexmap::IndexMap;
use std::fmt;
use std::sync::Arc;

// ============================================================================
// REQUIREDNESS
// ============================================================================

/// Whether a validator rejects `null`/absent subjects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Requiredness {
    #[default]
    Required,
    Optional,
}

// ============================================================================
// KIND AND ARGUMENTS
// ============================================================================

/// Which evaluation algorithm a validator uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidatorKind {
    Primitive(PrimitiveKind),
    /// The parametrized primitive built by `instance_of`.
    InstanceOf,
    Shape,
    ExactShape,
    ArrayOf,
    ObjectOf,
    OneOf,
    OneOfType,
    Custom,
}

/// Constructor arguments a validator was built from.
#[derive(Debug, Clone, Copy)]
pub enum Arguments<'a> {
    None,
    Class(&'a Class),
    Descriptor(&'a Descriptor),
    Element(&'a Validator),
    Values(&'a [Value]),
    Alternatives(&'a [Validator]),
    Predicate,
}

// ============================================================================
// DESCRIPTOR
// ============================================================================

/// Field name to validator mapping used by shapes and prop tables.
///
/// Field order is insertion order; it decides which failure a fail-fast
/// shape reports first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Descriptor {
    fields: IndexMap<String, Validator>,
}

/// A component's prop-type table.
pub type PropTypes = Descriptor;

impl Descriptor {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn with_field(mut self, name: impl Into<String>, validator: Validator) -> Self {
        self.fields.insert(name.into(), validator);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, validator: Validator) -> Option<Validator> {
        self.fields.insert(name.into(), validator)
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Validator> {
        self.fields.get(name)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Validator)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, Validator)> for Descriptor {
    fn from_iter<I: IntoIterator<Item = (K, Validator)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

// ============================================================================
// RULE
// ============================================================================

pub(crate) type Predicate = dyn Fn(&Value) -> bool + Send + Sync;
pub(crate) type MessagePredicate = dyn Fn(&Value) -> Result<(), String> + Send + Sync;

/// Evaluation logic shared by the required and optional forms.
pub(crate) enum Rule {
    Primitive(PrimitiveKind),
    InstanceOf(Class),
    Shape(Descriptor),
    ExactShape(Descriptor),
    ArrayOf(Validator),
    ObjectOf(Validator),
    OneOf(Vec<Value>),
    OneOfType(Vec<Validator>),
    Custom(Box<Predicate>),
    CustomMessage(Box<MessagePredicate>),
}

impl Rule {
    fn check(&self, value: &Value, path: &str, ctx: &Context<'_>) -> Result<(), ValidationError> {
        match self {
            Self::Primitive(kind) => kind.check(value, path, ctx),
            Self::InstanceOf(class) => match value {
                Value::Instance(instance) if instance.is_instance_of(class) => Ok(()),
                _ => Err(ValidationError::not_instance(ctx, path, value, class.name())),
            },
            Self::Shape(descriptor) => shape::check_shape(descriptor, value, path, ctx),
            Self::ExactShape(descriptor) => shape::check_exact_shape(descriptor, value, path, ctx),
            Self::ArrayOf(element) => collection::check_array_of(element, value, path, ctx),
            Self::ObjectOf(element) => collection::check_object_of(element, value, path, ctx),
            Self::OneOf(allowed) => union::check_one_of(allowed, value, path, ctx),
            Self::OneOfType(alternatives) => {
                union::check_one_of_type(alternatives, value, path, ctx)
            }
            Self::Custom(predicate) => custom::check_predicate(predicate, value, path, ctx),
            Self::CustomMessage(predicate) => custom::check_with_message(predicate, value, path),
        }
    }
}

// ============================================================================
// VALIDATOR
// ============================================================================

static UNDEFINED: Value = Value::Undefined;

/// A composable runtime validator.
///
/// Cloning is cheap; clones share the underlying rule.
#[derive(Clone)]
pub struct Validator {
    rule: Arc<Rule>,
    requiredness: Requiredness,
}

impl Validator {
    /// Builds the required form of a new validator.
    pub(crate) fn new(rule: Rule) -> Self {
        Self {
            rule: Arc::new(rule),
            requiredness: Requiredness::Required,
        }
    }

    /// The form that accepts `null`/absent subjects.
    #[must_use]
    pub fn optional(&self) -> Self {
        self.with_requiredness(Requiredness::Optional)
    }

    /// The form that rejects `null`/absent subjects.
    #[must_use]
    pub fn required(&self) -> Self {
        self.with_requiredness(Requiredness::Required)
    }

    #[must_use]
    pub fn with_requiredness(&self, requiredness: Requiredness) -> Self {
        Self {
            rule: Arc::clone(&self.rule),
            requiredness,
        }
    }

    #[must_use]
    pub fn requiredness(&self) -> Requiredness {
        self.requiredness
    }

    #[must_use]
    pub fn is_required(&self) -> bool {
        self.requiredness == Requiredness::Required
    }

    /// True when both validators share the same rule, regardless of
    /// requiredness.
    #[must_use]
    pub fn same_as(&self, other: &Validator) -> bool {
        Arc::ptr_eq(&self.rule, &other.rule)
    }

    #[must_use]
    pub fn kind(&self) -> ValidatorKind {
        match &*self.rule {
            Rule::Primitive(kind) => ValidatorKind::Primitive(*kind),
            Rule::InstanceOf(_) => ValidatorKind::InstanceOf,
            Rule::Shape(_) => ValidatorKind::Shape,
            Rule::ExactShape(_) => ValidatorKind::ExactShape,
            Rule::ArrayOf(_) => ValidatorKind::ArrayOf,
            Rule::ObjectOf(_) => ValidatorKind::ObjectOf,
            Rule::OneOf(_) => ValidatorKind::OneOf,
            Rule::OneOfType(_) => ValidatorKind::OneOfType,
            Rule::Custom(_) | Rule::CustomMessage(_) => ValidatorKind::Custom,
        }
    }

    #[must_use]
    pub fn primitive_kind(&self) -> Option<PrimitiveKind> {
        match self.kind() {
            ValidatorKind::Primitive(kind) => Some(kind),
            _ => None,
        }
    }

    #[must_use]
    pub fn arguments(&self) -> Arguments<'_> {
        match &*self.rule {
            Rule::Primitive(_) => Arguments::None,
            Rule::InstanceOf(class) => Arguments::Class(class),
            Rule::Shape(descriptor) | Rule::ExactShape(descriptor) => {
                Arguments::Descriptor(descriptor)
            }
            Rule::ArrayOf(element) | Rule::ObjectOf(element) => Arguments::Element(element),
            Rule::OneOf(values) => Arguments::Values(values),
            Rule::OneOfType(alternatives) => Arguments::Alternatives(alternatives),
            Rule::Custom(_) | Rule::CustomMessage(_) => Arguments::Predicate,
        }
    }

    /// Short type description, e.g. `arrayOf(number)`.
    #[must_use]
    pub fn describe(&self) -> String {
        match &*self.rule {
            Rule::Primitive(kind) => kind.name().to_owned(),
            Rule::InstanceOf(class) => format!("instanceOf({})", class.name()),
            Rule::Shape(_) => "shape".to_owned(),
            Rule::ExactShape(_) => "exactShape".to_owned(),
            Rule::ArrayOf(element) => format!("arrayOf({})", element.describe()),
            Rule::ObjectOf(element) => format!("objectOf({})", element.describe()),
            Rule::OneOf(_) => "oneOf".to_owned(),
            Rule::OneOfType(_) => "oneOfType".to_owned(),
            Rule::Custom(_) | Rule::CustomMessage(_) => "custom".to_owned(),
        }
    }

    /// Validates `props[field]`, the host framework's calling convention.
    ///
    /// `full_path` overrides the name used in messages, for fields that
    /// live below the top level of a props object.
    pub fn evaluate(
        &self,
        props: &Map,
        field: &str,
        ctx: &Context<'_>,
        full_path: Option<&str>,
    ) -> Result<(), ValidationError> {
        self.validate_at(props.get(field), full_path.unwrap_or(field), ctx)
    }

    /// Validates a single subject found at `path`; `None` means absent.
    pub fn validate_at(
        &self,
        value: Option<&Value>,
        path: &str,
        ctx: &Context<'_>,
    ) -> Result<(), ValidationError> {
        let value = value.unwrap_or(&UNDEFINED);
        if value.is_nullish() {
            return match self.requiredness {
                Requiredness::Required => Err(ValidationError::missing_required(ctx, path, value)),
                Requiredness::Optional => Ok(()),
            };
        }
        self.rule.check(value, path, ctx)
    }
}

impl PartialEq for Validator {
    fn eq(&self, other: &Self) -> bool {
        self.same_as(other) && self.requiredness == other.requiredness
    }
}

impl fmt::Debug for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validator")
            .field("kind", &self.describe())
            .field("requiredness", &self.requiredness)
            .finish()
    }
}

impl fmt::Display for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())?;
        if self.requiredness == Requiredness::Optional {
            f.write_str("?")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn number() -> Validator {
        PrimitiveKind::Number.validator()
    }

    #[test]
    fn test_required_by_default() {
        assert!(number().is_required());
        assert!(!number().optional().is_required());
    }

    #[test]
    fn test_toggle_forms_a_two_cycle() {
        let required = number();
        let optional = required.optional();

        assert_eq!(optional.required(), required);
        assert_eq!(required.optional(), optional);
        assert_eq!(optional.required().optional().required().optional(), optional);
        assert!(optional.same_as(&required));
        assert_ne!(optional, required);
    }

    #[test]
    fn test_nullish_handling() {
        let ctx = Context::new("T");
        assert!(number().validate_at(None, "n", &ctx).is_err());
        assert!(number().validate_at(Some(&Value::Null), "n", &ctx).is_err());
        assert!(number().optional().validate_at(None, "n", &ctx).is_ok());
        assert!(number().optional().validate_at(Some(&Value::Null), "n", &ctx).is_ok());
        assert!(
            number()
                .optional()
                .validate_at(Some(&Value::from("x")), "n", &ctx)
                .is_err()
        );
    }

    #[test]
    fn test_evaluate_uses_full_path() {
        let ctx = Context::new("Card");
        let mut props = Map::new();
        props.insert("n".into(), Value::from("x"));

        let err = number().evaluate(&props, "n", &ctx, Some("outer.n")).unwrap_err();
        assert_eq!(err.field(), Some("outer.n"));

        let err = number().evaluate(&props, "n", &ctx, None).unwrap_err();
        assert_eq!(err.field(), Some("n"));
    }

    #[test]
    fn test_introspection() {
        let v = number().optional();
        assert_eq!(v.kind(), ValidatorKind::Primitive(PrimitiveKind::Number));
        assert!(matches!(v.arguments(), Arguments::None));
        assert_eq!(v.to_string(), "number?");
    }

    #[test]
    fn test_descriptor_order() {
        let descriptor: Descriptor = [("b", number()), ("a", number())].into_iter().collect();
        assert_eq!(descriptor.keys().collect::<Vec<_>>(), ["b", "a"]);
        assert_eq!(descriptor.len(), 2);
        assert!(descriptor.get("a").is_some());
    }
}
