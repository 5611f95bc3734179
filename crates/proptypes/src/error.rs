//! Error types for validation failures
//!
//! Validators never raise: every failure is returned as a
//! [`ValidationError`] value carrying a stable [`ErrorKind`], the
//! human-readable message, the full field path, ordered parameters and any
//! nested errors that caused it.
//!
//! Messages follow a fixed convention: they start with `Invalid ` or
//! `Required ` so that composite validators can tell whether a nested
//! message already names its field.

use crate::context::Context;
use crate::diff::KeyDiff;
use crate::value::Value;
use smallvec::SmallVec;
use std::borrow::Cow;
use std::fmt;

type Param = (Cow<'static, str>, Cow<'static, str>);

// ============================================================================
// ERROR KIND
// ============================================================================

/// Failure taxonomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    /// A required subject was `null` or absent.
    MissingRequired,
    /// The subject has the wrong runtime kind.
    TypeMismatch,
    /// An exact shape found missing and/or extra keys.
    ShapeKeyMismatch,
    /// A field nested inside a shape failed its own validator.
    ShapeFieldMismatch,
    /// The subject matched none of the allowed values or types.
    UnionMismatch,
    /// A user predicate rejected the subject.
    CustomMismatch,
}

impl ErrorKind {
    /// Stable code for programmatic handling.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::MissingRequired => "required",
            Self::TypeMismatch => "type_mismatch",
            Self::ShapeKeyMismatch => "shape_keys",
            Self::ShapeFieldMismatch => "shape_field",
            Self::UnionMismatch => "union",
            Self::CustomMismatch => "custom",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A structured validation failure.
///
/// # Examples
///
/// ```rust,ignore
/// use proptypes::prelude::*;
///
/// let err = check(&types::number(), "x").unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::TypeMismatch);
/// assert_eq!(err.param("expected"), Some("number"));
/// ```
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{message}")]
pub struct ValidationError {
    kind: ErrorKind,
    message: Cow<'static, str>,
    field: Option<String>,
    params: SmallVec<[Param; 4]>,
    nested: Vec<ValidationError>,
}

impl ValidationError {
    pub fn new(kind: ErrorKind, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            kind,
            message: message.into(),
            field: None,
            params: SmallVec::new(),
            nested: Vec::new(),
        }
    }

    /// Sets the field path for this error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Adds a parameter to the error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Adds a single nested error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_nested_error(mut self, error: ValidationError) -> Self {
        self.nested.push(error);
        self
    }

    /// Replaces the nested errors.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_nested(mut self, errors: Vec<ValidationError>) -> Self {
        self.nested = errors;
        self
    }

    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    #[must_use]
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Full path of the field that failed, e.g. `value.address.street`.
    #[must_use]
    pub fn field(&self) -> Option<&str> {
        self.field.as_deref()
    }

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }

    #[must_use]
    pub fn nested(&self) -> &[ValidationError] {
        &self.nested
    }

    /// True when the message already names its field (`Invalid ...` or
    /// `Required ...`), so wrapping it would repeat the field.
    #[must_use]
    pub fn is_conventional(&self) -> bool {
        self.message.starts_with("Invalid ") || self.message.starts_with("Required ")
    }

    /// Follows the first nested error down to the innermost failure.
    #[must_use]
    pub fn root_cause(&self) -> &ValidationError {
        let mut current = self;
        while let Some(first) = current.nested.first() {
            current = first;
        }
        current
    }

    /// Flattens all errors into a single list (depth-first).
    #[must_use]
    pub fn flatten(&self) -> Vec<&ValidationError> {
        let mut result = vec![self];
        for nested in &self.nested {
            result.extend(nested.flatten());
        }
        result
    }
}

// ============================================================================
// CONVENIENCE CONSTRUCTORS
// ============================================================================

impl ValidationError {
    /// A required subject was null or absent.
    pub fn missing_required(ctx: &Context<'_>, path: &str, actual: &Value) -> Self {
        Self::new(
            ErrorKind::MissingRequired,
            format!(
                "Required {} `{path}` was not specified in `{}`.",
                ctx.location(),
                ctx.component()
            ),
        )
        .with_field(path)
        .with_param("actual", actual.type_name())
    }

    /// The subject has the wrong runtime type; `expected` is a type name.
    pub fn type_mismatch(ctx: &Context<'_>, path: &str, actual: &Value, expected: &str) -> Self {
        Self::new(
            ErrorKind::TypeMismatch,
            format!(
                "Invalid {} `{path}` of type `{}` supplied to `{}`, expected `{expected}`.",
                ctx.location(),
                actual.type_name(),
                ctx.component()
            ),
        )
        .with_field(path)
        .with_param("expected", expected.to_owned())
        .with_param("actual", actual.type_name())
    }

    /// The subject has the wrong runtime type; `expectation` is free prose
    /// such as `an array`.
    pub fn expected(
        ctx: &Context<'_>,
        path: &str,
        actual: &Value,
        expectation: &'static str,
    ) -> Self {
        Self::new(
            ErrorKind::TypeMismatch,
            format!(
                "Invalid {} `{path}` of type `{}` supplied to `{}`, expected {expectation}.",
                ctx.location(),
                actual.type_name(),
                ctx.component()
            ),
        )
        .with_field(path)
        .with_param("expected", expectation)
        .with_param("actual", actual.type_name())
    }

    /// The subject is not an instance of the expected class.
    pub fn not_instance(ctx: &Context<'_>, path: &str, actual: &Value, class: &str) -> Self {
        Self::new(
            ErrorKind::TypeMismatch,
            format!(
                "Invalid {} `{path}` of type `{}` supplied to `{}`, expected instance of `{class}`.",
                ctx.location(),
                actual.constructor_name(),
                ctx.component()
            ),
        )
        .with_field(path)
        .with_param("expected", class.to_owned())
        .with_param("actual", actual.constructor_name().to_owned())
    }

    /// An exact shape found missing and/or extra keys.
    pub fn key_mismatch(ctx: &Context<'_>, path: &str, diff: &KeyDiff) -> Self {
        Self::new(
            ErrorKind::ShapeKeyMismatch,
            format!(
                "Invalid {} `{path}` supplied to `{}`: {diff}.",
                ctx.location(),
                ctx.component()
            ),
        )
        .with_field(path)
        .with_param("missing", diff.render_missing())
        .with_param("extra", diff.render_extra())
    }

    /// A field nested in a shape failed. Conventional messages are surfaced
    /// as-is, anything else is prefixed with the enclosing field.
    pub fn field_mismatch(ctx: &Context<'_>, path: &str, nested: ValidationError) -> Self {
        let message = if nested.is_conventional() {
            nested.message.clone()
        } else {
            Cow::Owned(format!(
                "Invalid {} `{path}` supplied to `{}`: {}",
                ctx.location(),
                ctx.component(),
                nested.message
            ))
        };
        let field = nested.field.clone().unwrap_or_else(|| path.to_owned());
        Self::new(ErrorKind::ShapeFieldMismatch, message)
            .with_field(field)
            .with_nested_error(nested)
    }

    /// Several fields of a shape failed at once.
    pub fn fields_mismatch(path: &str, nested: Vec<ValidationError>) -> Self {
        let message = nested
            .iter()
            .map(|e| e.message.as_ref())
            .collect::<Vec<_>>()
            .join("\n");
        Self::new(ErrorKind::ShapeFieldMismatch, message)
            .with_field(path)
            .with_param("failed_count", nested.len().to_string())
            .with_nested(nested)
    }

    /// The subject is none of the allowed values.
    pub fn not_one_of(ctx: &Context<'_>, path: &str, actual: &Value, allowed: &[Value]) -> Self {
        let allowed = Value::Array(allowed.to_vec()).to_string();
        Self::new(
            ErrorKind::UnionMismatch,
            format!(
                "Invalid {} `{path}` of value `{actual}` supplied to `{}`, expected one of {allowed}.",
                ctx.location(),
                ctx.component()
            ),
        )
        .with_field(path)
        .with_param("expected", allowed)
        .with_param("actual", actual.to_string())
    }

    /// The subject satisfies none of the alternative validators.
    pub fn not_one_of_type(
        ctx: &Context<'_>,
        path: &str,
        expected: &[String],
        nested: Vec<ValidationError>,
    ) -> Self {
        let expected = format!("[{}]", expected.join(", "));
        Self::new(
            ErrorKind::UnionMismatch,
            format!(
                "Invalid {} `{path}` supplied to `{}`, expected one of type {expected}.",
                ctx.location(),
                ctx.component()
            ),
        )
        .with_field(path)
        .with_param("expected", expected)
        .with_nested(nested)
    }

    /// A boolean predicate rejected the subject.
    pub fn custom(ctx: &Context<'_>, path: &str) -> Self {
        Self::new(
            ErrorKind::CustomMismatch,
            format!("Invalid `{path}` supplied to `{}`.", ctx.component()),
        )
        .with_field(path)
    }

    /// A predicate rejected the subject with its own free-form message.
    pub fn custom_message(path: &str, message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::CustomMismatch, message).with_field(path)
    }
}

// ============================================================================
// ERROR COLLECTION
// ============================================================================

/// A collection of validation errors.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    #[must_use]
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    pub fn add(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    #[must_use]
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Converts to a Result.
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl FromIterator<ValidationError> for ValidationErrors {
    fn from_iter<I: IntoIterator<Item = ValidationError>>(iter: I) -> Self {
        Self {
            errors: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Validation failed with {} error(s):", self.errors.len())?;
        for (i, error) in self.errors.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn ctx() -> Context<'static> {
        Context::new("Card")
    }

    #[test]
    fn test_missing_required_message() {
        let err = ValidationError::missing_required(&ctx(), "title", &Value::Null);
        assert_eq!(err.kind(), ErrorKind::MissingRequired);
        assert_eq!(
            err.to_string(),
            "Required prop `title` was not specified in `Card`."
        );
        assert_eq!(err.param("actual"), Some("null"));
        assert!(err.is_conventional());
    }

    #[test]
    fn test_type_mismatch_message() {
        let err = ValidationError::type_mismatch(&ctx(), "age", &Value::from("9"), "number");
        assert_eq!(
            err.message(),
            "Invalid prop `age` of type `string` supplied to `Card`, expected `number`."
        );
        assert_eq!(err.field(), Some("age"));
        assert_eq!(err.code(), "type_mismatch");
    }

    #[test]
    fn test_field_mismatch_keeps_conventional_message() {
        let inner = ValidationError::type_mismatch(&ctx(), "user.age", &Value::Null, "number");
        let outer = ValidationError::field_mismatch(&ctx(), "user", inner.clone());
        assert_eq!(outer.message(), inner.message());
        assert_eq!(outer.field(), Some("user.age"));
        assert_eq!(outer.root_cause(), &inner);
    }

    #[test]
    fn test_field_mismatch_prefixes_free_form_message() {
        let inner = ValidationError::custom_message("user.age", "too young");
        let outer = ValidationError::field_mismatch(&ctx(), "user", inner);
        assert_eq!(
            outer.message(),
            "Invalid prop `user` supplied to `Card`: too young"
        );
    }

    #[test]
    fn test_flatten() {
        let err = ValidationError::new(ErrorKind::UnionMismatch, "Invalid root").with_nested(vec![
            ValidationError::new(ErrorKind::TypeMismatch, "Invalid a")
                .with_nested_error(ValidationError::new(ErrorKind::TypeMismatch, "Invalid b")),
            ValidationError::new(ErrorKind::TypeMismatch, "Invalid c"),
        ]);
        assert_eq!(err.flatten().len(), 4);
    }

    #[test]
    fn test_error_collection() {
        let mut errors = ValidationErrors::new();
        assert!(errors.clone().into_result().is_ok());
        errors.add(ValidationError::custom(&ctx(), "a"));
        errors.add(ValidationError::custom(&ctx(), "b"));
        assert_eq!(errors.len(), 2);
        assert!(errors.to_string().contains("2 error(s)"));
        assert!(errors.into_result().is_err());
    }
}
