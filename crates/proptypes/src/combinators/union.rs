//! ONE OF and ONE OF TYPE combinators - alternatives

use crate::context::Context;
use crate::error::ValidationError;
use crate::validator::{Rule, Validator};
use crate::value::Value;

/// Builds a validator accepting values equal to one of `allowed`.
pub fn one_of<V, I>(allowed: I) -> Validator
where
    V: Into<Value>,
    I: IntoIterator<Item = V>,
{
    Validator::new(Rule::OneOf(allowed.into_iter().map(Into::into).collect()))
}

/// Builds a validator accepting values that pass any of `alternatives`.
pub fn one_of_type<I>(alternatives: I) -> Validator
where
    I: IntoIterator<Item = Validator>,
{
    Validator::new(Rule::OneOfType(alternatives.into_iter().collect()))
}

pub(crate) fn check_one_of(
    allowed: &[Value],
    value: &Value,
    path: &str,
    ctx: &Context<'_>,
) -> Result<(), ValidationError> {
    if allowed.contains(value) {
        Ok(())
    } else {
        Err(ValidationError::not_one_of(ctx, path, value, allowed))
    }
}

pub(crate) fn check_one_of_type(
    alternatives: &[Validator],
    value: &Value,
    path: &str,
    ctx: &Context<'_>,
) -> Result<(), ValidationError> {
    let mut errors = Vec::with_capacity(alternatives.len());
    for alternative in alternatives {
        match alternative.validate_at(Some(value), path, ctx) {
            Ok(()) => return Ok(()),
            Err(e) => errors.push(e),
        }
    }

    let expected: Vec<String> = alternatives.iter().map(Validator::describe).collect();
    Err(ValidationError::not_one_of_type(ctx, path, &expected, errors))
}
