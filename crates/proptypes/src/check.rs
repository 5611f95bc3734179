//! Entry points for validating values outside a props object.
//!
//! [`check`] wraps the value as the single field `value` of a synthetic
//! props object and evaluates the validator against it, so messages read
//! ``Invalid prop `value` ...``. The canonical convention is a `Result`;
//! [`check_error`] adapts it to the "error or nothing" convention.
//!
//! # Examples
//!
//! ```rust,ignore
//! use proptypes::prelude::*;
//!
//! assert!(check(&types::number(), 123).is_ok());
//!
//! // Curried form, reusable across values:
//! let is_number = check_with(&types::number());
//! assert!(is_number.run(123).is_ok());
//! assert!(is_number.error("123").is_some());
//! ```

use crate::config::CheckConfig;
use crate::context::Context;
use crate::error::{ValidationError, ValidationErrors};
use crate::validator::{PropTypes, Validator};
use crate::value::{Map, Value};

/// Field name the checked value is stored under.
pub const CHECK_FIELD: &str = "value";

/// Validates `value` with the default label.
pub fn check(validator: &Validator, value: impl Into<Value>) -> Result<(), ValidationError> {
    check_with(validator).run(value)
}

/// Validates `value`, naming its owner `label` in messages.
pub fn check_labeled(
    validator: &Validator,
    value: impl Into<Value>,
    label: &str,
) -> Result<(), ValidationError> {
    check_with(validator).with_label(label).run(value)
}

/// Validates `value` and returns the error, if any.
pub fn check_error(validator: &Validator, value: impl Into<Value>) -> Option<ValidationError> {
    check(validator, value).err()
}

/// Curried form of [`check`].
#[must_use]
pub fn check_with(validator: &Validator) -> Check {
    Check::new(validator.clone())
}

/// A validator bound to a check configuration.
#[derive(Debug, Clone)]
pub struct Check {
    validator: Validator,
    config: CheckConfig,
}

impl Check {
    #[must_use]
    pub fn new(validator: Validator) -> Self {
        Self {
            validator,
            config: CheckConfig::default(),
        }
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.config.label = label.into();
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn with_config(mut self, config: CheckConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn validator(&self) -> &Validator {
        &self.validator
    }

    pub fn run(&self, value: impl Into<Value>) -> Result<(), ValidationError> {
        let mut holder = Map::with_capacity(1);
        holder.insert(CHECK_FIELD.to_owned(), value.into());

        tracing::trace!(validator = %self.validator, label = %self.config.label, "running check");
        self.validator
            .evaluate(&holder, CHECK_FIELD, &self.config.context(), None)
    }

    pub fn error(&self, value: impl Into<Value>) -> Option<ValidationError> {
        self.run(value).err()
    }
}

/// Validates every declared prop of `table` against `props`.
///
/// Unlike a shape, all failures are collected, and each one is logged as a
/// warning.
pub fn check_prop_types(
    table: &PropTypes,
    props: &Map,
    ctx: &Context<'_>,
) -> Result<(), ValidationErrors> {
    table
        .iter()
        .filter_map(|(name, validator)| validator.evaluate(props, name, ctx, None).err())
        .inspect(|error| {
            tracing::warn!(
                component = ctx.component(),
                field = error.field().unwrap_or_default(),
                code = error.code(),
                "Failed {} type: {}",
                ctx.location(),
                error
            );
        })
        .collect::<ValidationErrors>()
        .into_result()
}
