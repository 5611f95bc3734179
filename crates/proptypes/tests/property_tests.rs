//! Property-based tests for proptypes.

use proptypes::diff::key_diff;
use proptypes::prelude::*;
use proptest::prelude::*;

fn any_validator() -> impl Strategy<Value = Validator> {
    let point = Class::new("Point");
    proptest::sample::select(vec![
        types::any(),
        types::number(),
        types::string(),
        types::node(),
        types::array_of(types::number()),
        object_of(types::string()),
        shape([("a", types::number())]),
        exact_shape([("a", types::number()), ("b", types::string().optional())]),
        one_of(["foo", "bar"]),
        one_of_type([types::string(), types::func()]),
        create_custom_checker(|v| v.as_str().is_some_and(|s| !s.is_empty())),
        types::instance_of(&point),
    ])
}

// ============================================================================
// REQUIREDNESS: optional/required is a two-state toggle
// ============================================================================

proptest! {
    #[test]
    fn toggling_is_idempotent(v in any_validator()) {
        prop_assert_eq!(v.optional().optional(), v.optional());
        prop_assert_eq!(v.required().required(), v.required());
        prop_assert_eq!(v.optional().required(), v.clone());
    }

    #[test]
    fn optional_accepts_nullish(v in any_validator()) {
        prop_assert!(check(&v.optional(), Value::Null).is_ok());
        prop_assert!(check(&v.optional(), Value::Undefined).is_ok());
        prop_assert!(check(&v, Value::Null).is_err());
    }

    #[test]
    fn optional_agrees_on_present_values(n in any::<i32>(), s in ".{0,10}") {
        let v = types::number();
        prop_assert_eq!(check(&v, n).is_ok(), check(&v.optional(), n).is_ok());
        prop_assert_eq!(check(&v, s.as_str()).is_ok(), check(&v.optional(), s.as_str()).is_ok());
    }
}

// ============================================================================
// KEY DIFF: empty exactly when the key sets are equal
// ============================================================================

proptest! {
    #[test]
    fn key_diff_of_same_keys_is_empty(keys in proptest::collection::hash_set("[a-z]{1,4}", 0..6)) {
        let map: Map = keys.iter().map(|k| (k.clone(), Value::Null)).collect();
        prop_assert!(key_diff(keys.iter().map(String::as_str), Some(&map)).is_none());
    }

    #[test]
    fn key_diff_partitions_keys(
        expected in proptest::collection::hash_set("[a-z]{1,3}", 0..6),
        actual in proptest::collection::hash_set("[a-z]{1,3}", 0..6),
    ) {
        let map: Map = actual.iter().map(|k| (k.clone(), Value::Null)).collect();
        match key_diff(expected.iter().map(String::as_str), Some(&map)) {
            None => prop_assert_eq!(&expected, &actual),
            Some(diff) => {
                for key in diff.missing() {
                    prop_assert!(expected.contains(key) && !actual.contains(key));
                }
                for key in diff.extra() {
                    prop_assert!(actual.contains(key) && !expected.contains(key));
                }
                prop_assert_eq!(
                    diff.missing().len() + diff.extra().len(),
                    expected.symmetric_difference(&actual).count()
                );
            }
        }
    }
}

// ============================================================================
// ARRAY OF: passes iff every element passes
// ============================================================================

proptest! {
    #[test]
    fn array_of_is_elementwise(items in proptest::collection::vec(prop_oneof![
        any::<i32>().prop_map(Value::from),
        "[a-z]{0,3}".prop_map(Value::from),
    ], 0..8)) {
        let expected = items.iter().all(|v| matches!(v, Value::Number(_)));
        let v = types::array_of(types::number());
        prop_assert_eq!(check(&v, items).is_ok(), expected);
    }
}
