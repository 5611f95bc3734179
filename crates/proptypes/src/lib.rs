//! # proptypes
//!
//! Composable runtime validators for loosely-typed component properties.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use proptypes::prelude::*;
//! use serde_json::json;
//!
//! let person = exact_shape([
//!     ("name", types::string()),
//!     ("age", types::number()),
//!     ("address", shape([("street", types::string())])),
//! ]);
//!
//! assert!(check(&person, json!({"name": "Bob", "age": 99, "address": {"street": "2nd Ave"}})).is_ok());
//! assert!(check(&person, json!({"name": "Bob", "age": 99})).is_err());
//! ```
//!
//! ## Building Validators
//!
//! - **Primitives**: [`types::any`], [`types::array`], [`types::bool`],
//!   [`types::func`], [`types::number`], [`types::object`], [`types::string`],
//!   [`types::node`], [`types::element`]
//! - **Structures**: [`shape`](combinators::shape()), [`exact_shape`](combinators::exact_shape)
//! - **Collections**: [`array_of`](combinators::array_of), [`object_of`](combinators::object_of)
//! - **Alternatives**: [`one_of`](combinators::one_of), [`one_of_type`](combinators::one_of_type)
//! - **Custom**: [`create_custom_checker`](combinators::create_custom_checker)
//! - **From examples**: [`recursive`](recursive::recursive())
//!
//! Every validator is required by default; `.optional()` and `.required()`
//! switch between the two forms without rebuilding anything.
//!
//! ## Running Validators
//!
//! - [`Validator::evaluate`](validator::Validator::evaluate) - props object,
//!   field name and naming context
//! - [`check`](check::check()) - a bare value
//! - [`check_prop_types`](check::check_prop_types) - a whole prop table

// ValidationError is the fundamental error type for all validators;
// boxing it would add indirection to every validation call.
#![allow(clippy::result_large_err)]

pub mod check;
pub mod combinators;
pub mod config;
pub mod context;
pub mod diff;
pub mod error;
pub mod prelude;
pub mod primitive;
pub mod recursive;
pub mod types;
pub mod validator;
pub mod value;
