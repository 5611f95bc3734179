//! Prelude module for convenient imports.
//!
//! ```rust,ignore
//! use proptypes::prelude::*;
//!
//! let person = exact_shape([("name", types::string()), ("age", types::number())]);
//! assert!(check(&person, serde_json::json!({"name": "Bob", "age": 99})).is_ok());
//! ```

pub use crate::check::{Check, check, check_error, check_labeled, check_prop_types, check_with};
pub use crate::combinators::{
    array_of, create_custom_checker, create_simple_checker, custom_with_message, exact_shape,
    instance_of, object_of, one_of, one_of_type, shape,
};
pub use crate::config::CheckConfig;
pub use crate::context::{Context, Location, Reporting};
pub use crate::error::{ErrorKind, ValidationError, ValidationErrors};
pub use crate::recursive::{Literal, recursive, recursive_validator};
pub use crate::types;
pub use crate::validator::{Descriptor, PropTypes, Requiredness, Validator, ValidatorKind};
pub use crate::value::{Class, Element, Function, Map, Value};
