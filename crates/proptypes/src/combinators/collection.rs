//! ARRAY OF and OBJECT OF combinators - per-element validation
//!
//! Both stop at the first failing element and return that element's error
//! unchanged; element paths read `list[2]` and `map.key`.

use crate::context::Context;
use crate::error::ValidationError;
use crate::validator::{Rule, Validator};
use crate::value::Value;

/// Builds a validator for sequences whose every element passes `element`.
#[must_use]
pub fn array_of(element: Validator) -> Validator {
    Validator::new(Rule::ArrayOf(element))
}

/// Builds a validator for mappings whose every value passes `element`.
#[must_use]
pub fn object_of(element: Validator) -> Validator {
    Validator::new(Rule::ObjectOf(element))
}

pub(crate) fn check_array_of(
    element: &Validator,
    value: &Value,
    path: &str,
    ctx: &Context<'_>,
) -> Result<(), ValidationError> {
    let Some(items) = value.as_array() else {
        return Err(ValidationError::expected(ctx, path, value, "an array"));
    };

    items.iter().enumerate().try_for_each(|(index, item)| {
        element.validate_at(Some(item), &format!("{path}[{index}]"), ctx)
    })
}

pub(crate) fn check_object_of(
    element: &Validator,
    value: &Value,
    path: &str,
    ctx: &Context<'_>,
) -> Result<(), ValidationError> {
    let entries = match value {
        Value::Array(_) => None,
        other => other.as_map(),
    };
    let Some(entries) = entries else {
        return Err(ValidationError::expected(ctx, path, value, "an object"));
    };

    entries
        .iter()
        .try_for_each(|(key, item)| element.validate_at(Some(item), &format!("{path}.{key}"), ctx))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::primitive::PrimitiveKind;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn number() -> Validator {
        PrimitiveKind::Number.validator()
    }

    fn run(v: &Validator, value: serde_json::Value) -> Result<(), ValidationError> {
        v.validate_at(Some(&Value::from(value)), "value", &Context::new("Test"))
    }

    #[test]
    fn test_array_of() {
        let v = array_of(number());
        assert!(run(&v, json!([1, 2, 3])).is_ok());
        assert!(run(&v, json!([])).is_ok());

        let err = run(&v, json!([1, "2", "3"])).unwrap_err();
        assert_eq!(err.field(), Some("value[1]"));
        assert_eq!(err.kind(), ErrorKind::TypeMismatch);
    }

    #[test]
    fn test_array_of_rejects_non_arrays() {
        let err = run(&array_of(number()), json!({"a": 1})).unwrap_err();
        assert_eq!(
            err.message(),
            "Invalid prop `value` of type `object` supplied to `Test`, expected an array."
        );
    }

    #[test]
    fn test_array_of_null_elements() {
        assert!(run(&array_of(number()), json!([1, null])).is_err());
        assert!(run(&array_of(number().optional()), json!([1, null])).is_ok());
    }

    #[test]
    fn test_object_of() {
        let v = object_of(number());
        assert!(run(&v, json!({"id": 22})).is_ok());

        let err = run(&v, json!({"id": 22, "other": "22"})).unwrap_err();
        assert_eq!(err.field(), Some("value.other"));
    }

    #[test]
    fn test_object_of_rejects_arrays() {
        let err = run(&object_of(number()), json!([1])).unwrap_err();
        assert_eq!(err.param("expected"), Some("an object"));
    }

    #[test]
    fn test_nested_collections() {
        let v = array_of(object_of(array_of(number())));
        assert!(run(&v, json!([{"a": [1, 2]}, {"b": []}])).is_ok());
        let err = run(&v, json!([{"a": [1, 2]}, {"b": [true]}])).unwrap_err();
        assert_eq!(err.field(), Some("value[1].b[0]"));
    }
}
