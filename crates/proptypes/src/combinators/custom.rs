//! Custom validators from user predicates.
//!
//! ```rust,ignore
//! use proptypes::prelude::*;
//!
//! let even = create_custom_checker(|v| v.as_f64().is_some_and(|n| n % 2.0 == 0.0));
//! assert!(check(&even, 4).is_ok());
//! assert!(check(&even, 3).is_err());
//! ```

use crate::context::Context;
use crate::error::ValidationError;
use crate::validator::{MessagePredicate, Predicate, Rule, Validator};
use crate::value::Value;

/// Builds a validator from a boolean predicate.
///
/// Rejections read ``Invalid `<field>` supplied to `<component>`.``
pub fn create_custom_checker<F>(predicate: F) -> Validator
where
    F: Fn(&Value) -> bool + Send + Sync + 'static,
{
    Validator::new(Rule::Custom(Box::new(predicate)))
}

/// Alias for [`create_custom_checker`].
pub fn create_simple_checker<F>(predicate: F) -> Validator
where
    F: Fn(&Value) -> bool + Send + Sync + 'static,
{
    create_custom_checker(predicate)
}

/// Builds a validator from a predicate that explains its rejections.
///
/// The message is used verbatim at the top level; inside a shape it is
/// prefixed with the enclosing field.
pub fn custom_with_message<F>(predicate: F) -> Validator
where
    F: Fn(&Value) -> Result<(), String> + Send + Sync + 'static,
{
    Validator::new(Rule::CustomMessage(Box::new(predicate)))
}

pub(crate) fn check_predicate(
    predicate: &Predicate,
    value: &Value,
    path: &str,
    ctx: &Context<'_>,
) -> Result<(), ValidationError> {
    if predicate(value) {
        Ok(())
    } else {
        Err(ValidationError::custom(ctx, path))
    }
}

pub(crate) fn check_with_message(
    predicate: &MessagePredicate,
    value: &Value,
    path: &str,
) -> Result<(), ValidationError> {
    predicate(value).map_err(|message| ValidationError::custom_message(path, message))
}
