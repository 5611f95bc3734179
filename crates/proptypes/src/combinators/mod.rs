//! Validator combinators.
//!
//! Every combinator lifts child validators (or a fixed value set) into a new
//! [`Validator`](crate::validator::Validator). Results are required by
//! default; call `.optional()` for the other form.
//!
//! - [`shape`] / [`exact_shape`] - fixed field mappings
//! - [`array_of`] / [`object_of`] - per-element validation
//! - [`one_of`] / [`one_of_type`] - alternatives
//! - [`instance_of`] - class membership
//! - [`create_custom_checker`] / [`custom_with_message`] - user predicates

pub mod collection;
pub mod custom;
pub mod shape;
pub mod union;

pub use collection::{array_of, object_of};
pub use custom::{create_custom_checker, create_simple_checker, custom_with_message};
pub use shape::{exact_shape, instance_of, shape};
pub use union::{one_of, one_of_type};
