//! The public type table.
//!
//! One function per supported type, each returning a required validator.
//! Primitive validators come from a shared registry built on first use;
//! parametrized constructors build a fresh validator per call.
//!
//! ```rust,ignore
//! use proptypes::types;
//!
//! let person = types::shape([
//!     ("name", types::string()),
//!     ("age", types::number().optional()),
//!     ("tags", types::array_of(types::string())),
//! ]);
//! ```

use crate::primitive::PrimitiveKind;
use crate::validator::Validator;

pub use crate::combinators::{
    array_of, exact_shape, instance_of, object_of, one_of, one_of_type, shape,
};

#[must_use]
pub fn any() -> Validator {
    PrimitiveKind::Any.validator()
}

#[must_use]
pub fn array() -> Validator {
    PrimitiveKind::Array.validator()
}

#[must_use]
pub fn bool() -> Validator {
    PrimitiveKind::Bool.validator()
}

#[must_use]
pub fn func() -> Validator {
    PrimitiveKind::Func.validator()
}

#[must_use]
pub fn number() -> Validator {
    PrimitiveKind::Number.validator()
}

#[must_use]
pub fn object() -> Validator {
    PrimitiveKind::Object.validator()
}

#[must_use]
pub fn string() -> Validator {
    PrimitiveKind::String.validator()
}

/// Anything renderable: numbers, strings, elements, or arrays of those.
#[must_use]
pub fn node() -> Validator {
    PrimitiveKind::Node.validator()
}

#[must_use]
pub fn element() -> Validator {
    PrimitiveKind::Element.validator()
}

/// Looks up a primitive validator by its canonical name (`"number"`,
/// `"func"`, ...).
#[must_use]
pub fn by_name(name: &str) -> Option<Validator> {
    name.parse::<PrimitiveKind>()
        .ok()
        .map(PrimitiveKind::validator)
}
