//! SHAPE and EXACT SHAPE combinators - fixed field mappings
//!
//! A shape checks every listed field of an object-like subject and ignores
//! fields it does not list. An exact shape first requires the subject's key
//! set to equal the descriptor's, then checks fields the same way.
//!
//! # Examples
//!
//! ```rust,ignore
//! use proptypes::prelude::*;
//! use serde_json::json;
//!
//! let person = exact_shape([("name", types::string()), ("age", types::number())]);
//! assert!(check(&person, json!({"name": "Bob", "age": 99})).is_ok());
//! assert!(check(&person, json!({"name": "Bob", "age": 99, "extra": 1})).is_err());
//! ```

use crate::context::{Context, Reporting};
use crate::diff::key_diff;
use crate::error::ValidationError;
use crate::validator::{Descriptor, Rule, Validator};
use crate::value::{Class, Value};

/// Builds a subset-matching shape validator.
pub fn shape<K, I>(fields: I) -> Validator
where
    K: Into<String>,
    I: IntoIterator<Item = (K, Validator)>,
{
    Validator::new(Rule::Shape(fields.into_iter().collect()))
}

pub(crate) fn shape_of(descriptor: Descriptor) -> Validator {
    Validator::new(Rule::Shape(descriptor))
}

/// Builds a shape validator that also rejects missing and extra keys.
pub fn exact_shape<K, I>(fields: I) -> Validator
where
    K: Into<String>,
    I: IntoIterator<Item = (K, Validator)>,
{
    Validator::new(Rule::ExactShape(fields.into_iter().collect()))
}

/// Builds a validator accepting instances of `class` or its subclasses.
#[must_use]
pub fn instance_of(class: &Class) -> Validator {
    Validator::new(Rule::InstanceOf(class.clone()))
}

pub(crate) fn check_shape(
    descriptor: &Descriptor,
    value: &Value,
    path: &str,
    ctx: &Context<'_>,
) -> Result<(), ValidationError> {
    let Some(fields) = value.as_map() else {
        return Err(ValidationError::type_mismatch(ctx, path, value, "object"));
    };

    let results = descriptor.iter().map(|(key, child)| {
        let child_path = format!("{path}.{key}");
        child
            .validate_at(fields.get(key), &child_path, ctx)
            .map_err(|e| ValidationError::field_mismatch(ctx, path, e))
    });

    match ctx.reporting() {
        Reporting::FailFast => results.collect(),
        Reporting::CollectAll => {
            let mut failures: Vec<ValidationError> =
                results.filter_map(Result::err).collect();
            match failures.len() {
                0 => Ok(()),
                1 => Err(failures.remove(0)),
                _ => Err(ValidationError::fields_mismatch(path, failures)),
            }
        }
    }
}

pub(crate) fn check_exact_shape(
    descriptor: &Descriptor,
    value: &Value,
    path: &str,
    ctx: &Context<'_>,
) -> Result<(), ValidationError> {
    if let Some(diff) = key_diff(descriptor.keys(), value.as_map()) {
        return Err(ValidationError::key_mismatch(ctx, path, &diff));
    }
    check_shape(descriptor, value, path, ctx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::primitive::PrimitiveKind;
    use crate::value::Map;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn string() -> Validator {
        PrimitiveKind::String.validator()
    }

    fn number() -> Validator {
        PrimitiveKind::Number.validator()
    }

    fn run(v: &Validator, value: serde_json::Value) -> Result<(), ValidationError> {
        v.validate_at(Some(&Value::from(value)), "value", &Context::new("Test"))
    }

    #[test]
    fn test_shape_ignores_extra_fields() {
        let v = shape([("name", string())]);
        assert!(run(&v, json!({"name": "Bob", "extra": 1})).is_ok());
    }

    #[test]
    fn test_shape_rejects_non_objects() {
        let v = shape([("name", string())]);
        let err = run(&v, json!([1, 2])).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TypeMismatch);
        assert_eq!(
            err.message(),
            "Invalid prop `value` of type `array` supplied to `Test`, expected `object`."
        );
    }

    #[test]
    fn test_shape_reports_nested_path() {
        let v = shape([("address", shape([("street", string())]))]);
        let err = run(&v, json!({"address": {"street": 2}})).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ShapeFieldMismatch);
        assert_eq!(err.field(), Some("value.address.street"));
        assert_eq!(
            err.message(),
            "Invalid prop `value.address.street` of type `number` supplied to `Test`, expected `string`."
        );
        assert_eq!(err.root_cause().kind(), ErrorKind::TypeMismatch);
    }

    #[test]
    fn test_shape_fails_fast_in_field_order() {
        let v = shape([("name", string()), ("age", number())]);
        let err = run(&v, json!({"name": 1, "age": "x"})).unwrap_err();
        assert_eq!(err.field(), Some("value.name"));
    }

    #[test]
    fn test_shape_collects_all_failures() {
        let v = shape([("name", string()), ("age", number()), ("ok", string())]);
        let ctx = Context::new("Test").with_reporting(Reporting::CollectAll);
        let subject = Value::from(json!({"name": 1, "age": "x", "ok": "y"}));

        let err = v.validate_at(Some(&subject), "value", &ctx).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ShapeFieldMismatch);
        assert_eq!(err.nested().len(), 2);
        assert_eq!(err.param("failed_count"), Some("2"));
        assert_eq!(err.message().lines().count(), 2);
    }

    #[test]
    fn test_optional_fields_may_be_absent() {
        let v = shape([("name", string()), ("nick", string().optional())]);
        assert!(run(&v, json!({"name": "Bob"})).is_ok());
        assert!(run(&v, json!({"name": "Bob", "nick": null})).is_ok());
        assert!(run(&v, json!({"nick": "b"})).is_err());
    }

    #[test]
    fn test_exact_shape() {
        let v = exact_shape([("name", string()), ("age", number())]);
        assert!(run(&v, json!({"age": 99, "name": "Bob"})).is_ok());

        let err = run(&v, json!({"name": "Bob", "age": 99, "extra": 1})).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ShapeKeyMismatch);
        assert_eq!(
            err.message(),
            "Invalid prop `value` supplied to `Test`: extra keys: [\"extra\"]."
        );

        let err = run(&v, json!({"age": 99})).unwrap_err();
        assert_eq!(err.param("missing"), Some(r#"["name"]"#));

        let err = run(&v, json!({"name": "Bob", "age": "99"})).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ShapeFieldMismatch);
    }

    #[test]
    fn test_exact_shape_reports_both_lists() {
        let v = exact_shape([("name", string())]);
        let err = run(&v, json!({"nom": "Bob"})).unwrap_err();
        assert_eq!(
            err.message(),
            "Invalid prop `value` supplied to `Test`: missing keys: [\"name\"]\nextra keys: [\"nom\"]."
        );
    }

    #[test]
    fn test_exact_shape_treats_scalars_as_keyless() {
        let v = exact_shape([("name", string())]);
        let err = run(&v, json!(5)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ShapeKeyMismatch);
    }

    #[test]
    fn test_exact_shape_null() {
        let v = exact_shape([("name", string())]);
        let ctx = Context::new("Test");
        assert!(v.validate_at(Some(&Value::Null), "value", &ctx).is_err());
        assert!(v.optional().validate_at(Some(&Value::Null), "value", &ctx).is_ok());
    }

    #[test]
    fn test_instance_fields_form_a_shape() {
        let point = Class::new("Point");
        let v = shape([("x", number()), ("y", number())]);
        let ctx = Context::new("Test");
        let p = point.instantiate([("x", 1), ("y", 2)]);
        assert!(v.validate_at(Some(&p), "value", &ctx).is_ok());
        assert!(v.validate_at(Some(&Value::Object(Map::new())), "value", &ctx).is_err());
    }

    #[test]
    fn test_instance_of() {
        let base = Class::new("Base");
        let derived = base.extend("Derived");
        let v = instance_of(&base);
        let ctx = Context::new("Test");

        assert!(v.validate_at(Some(&derived.instantiate::<&str, i32, _>([])), "value", &ctx).is_ok());
        let err = v.validate_at(Some(&Value::from(json!({}))), "value", &ctx).unwrap_err();
        assert_eq!(
            err.message(),
            "Invalid prop `value` of type `Object` supplied to `Test`, expected instance of `Base`."
        );
    }
}
