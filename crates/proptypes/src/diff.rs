//! Key-set comparison between an expected shape and a candidate object.
//!
//! [`key_diff`] walks each key set once with hashed lookups into the
//! other: expected keys absent from the candidate are missing, candidate
//! keys absent from the expected set are extra. Missing keys are listed in
//! expected order, extra keys in the candidate's own key order.

use crate::value::Map;
use indexmap::IndexSet;
use std::fmt;

/// Keys that differ between an expected key set and an object.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeyDiff {
    missing: Vec<String>,
    extra: Vec<String>,
}

impl KeyDiff {
    /// Expected keys the object lacks.
    #[must_use]
    pub fn missing(&self) -> &[String] {
        &self.missing
    }

    /// Object keys that were not expected.
    #[must_use]
    pub fn extra(&self) -> &[String] {
        &self.extra
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.missing.is_empty() && self.extra.is_empty()
    }

    /// JSON rendering of the missing keys, e.g. `["name"]`.
    #[must_use]
    pub fn render_missing(&self) -> String {
        render(&self.missing)
    }

    /// JSON rendering of the extra keys.
    #[must_use]
    pub fn render_extra(&self) -> String {
        render(&self.extra)
    }
}

fn render(keys: &[String]) -> String {
    serde_json::to_string(keys).unwrap_or_else(|_| format!("{keys:?}"))
}

impl fmt::Display for KeyDiff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.missing.is_empty() {
            write!(f, "missing keys: {}", self.render_missing())?;
            if !self.extra.is_empty() {
                f.write_str("\n")?;
            }
        }
        if !self.extra.is_empty() {
            write!(f, "extra keys: {}", self.render_extra())?;
        }
        Ok(())
    }
}

/// Compares `expected` keys against the own keys of `actual`.
///
/// A missing object (`None`) has no own keys, so every expected key is
/// reported missing. Returns `None` when the key sets are equal.
pub fn key_diff<'a, I>(expected: I, actual: Option<&Map>) -> Option<KeyDiff>
where
    I: IntoIterator<Item = &'a str>,
{
    let expected: IndexSet<&str> = expected.into_iter().collect();

    let missing: Vec<String> = expected
        .iter()
        .filter(|key| actual.is_none_or(|map| !map.contains_key(**key)))
        .map(|key| (*key).to_owned())
        .collect();
    let extra: Vec<String> = actual
        .into_iter()
        .flat_map(Map::keys)
        .filter(|key| !expected.contains(key.as_str()))
        .cloned()
        .collect();

    if missing.is_empty() && extra.is_empty() {
        return None;
    }

    Some(KeyDiff { missing, extra })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Value;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn map(value: serde_json::Value) -> Map {
        match Value::from(value) {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn test_equal_key_sets() {
        let actual = map(json!({"age": 1, "name": "x"}));
        assert_eq!(key_diff(["name", "age"], Some(&actual)), None);
    }

    #[test]
    fn test_missing_keys() {
        let actual = map(json!({"age": 1}));
        let diff = key_diff(["name", "age"], Some(&actual)).unwrap();
        assert_eq!(diff.missing(), ["name"]);
        assert!(diff.extra().is_empty());
        assert_eq!(diff.to_string(), r#"missing keys: ["name"]"#);
    }

    #[test]
    fn test_extra_keys() {
        let actual = map(json!({"name": "x", "extra": 1}));
        let diff = key_diff(["name"], Some(&actual)).unwrap();
        assert_eq!(diff.to_string(), r#"extra keys: ["extra"]"#);
    }

    #[test]
    fn test_missing_before_extra() {
        let actual = map(json!({"b": 1, "c": 2}));
        let diff = key_diff(["a", "b"], Some(&actual)).unwrap();
        assert_eq!(
            diff.to_string(),
            "missing keys: [\"a\"]\nextra keys: [\"c\"]"
        );
    }

    #[test]
    fn test_absent_object_misses_everything() {
        let diff = key_diff(["a", "b"], None).unwrap();
        assert_eq!(diff.missing(), ["a", "b"]);
        assert_eq!(key_diff([], None), None);
    }

    #[test]
    fn test_large_key_sets() {
        let keys: Vec<String> = (0..100_000).map(|i| format!("k{i}")).collect();
        let mut actual: Map = keys.iter().map(|k| (k.clone(), Value::Null)).collect();
        assert_eq!(key_diff(keys.iter().map(String::as_str), Some(&actual)), None);

        actual.shift_remove("k0");
        actual.insert("zz".into(), Value::Null);
        let diff = key_diff(keys.iter().map(String::as_str), Some(&actual)).unwrap();
        assert_eq!(diff.missing(), ["k0"]);
        assert_eq!(diff.extra(), ["zz"]);
    }

    #[test]
    fn test_extra_keys_keep_object_order() {
        let actual = map(json!({"a": 1, "zz": 1, "bb": 1}));
        let diff = key_diff(["a"], Some(&actual)).unwrap();
        assert_eq!(diff.extra(), ["zz", "bb"]);
    }

    #[test]
    fn test_undefined_values_still_count_as_keys() {
        let mut actual = Map::new();
        actual.insert("a".into(), Value::Undefined);
        assert_eq!(key_diff(["a"], Some(&actual)), None);
    }
}
