//! # jsonlike-ops
//!
//! ECMAScript type coercion and operators over any [`Json`](jsonlike::Json) implementation.
//!
//! Every function here behaves like the corresponding JavaScript operator applied to the JSON
//! value, with two differences: numbers are exact decimals, and results that would be `NaN` are
//! `null` (or `None` where a plain Rust value is returned).
//!
//! ```rust
//! use serde_json::json;
//!
//! assert_eq!(jsonlike_ops::plus(&json!(1), &json!("2")), json!("12"));
//! assert_eq!(jsonlike_ops::minus(&json!("5"), &json!([2])), json!(3));
//! assert!(jsonlike_ops::loose_equality(&json!([1, 2]), &json!("1,2")));
//! assert_eq!(jsonlike_ops::divide(&json!(1), &json!(0)), json!(null));
//! ```
//!
//! Conversions of nested arrays recurse. To bound the recursion on untrusted input, use an
//! [`Engine`]:
//!
//! ```rust
//! use serde_json::json;
//!
//! let engine = jsonlike_ops::options().with_max_depth(16).build();
//! assert_eq!(engine.less_than(&json!([[1]]), &json!(2)), Ok(json!(true)));
//! ```
mod arithmetic;
mod budget;
mod coerce;
mod compare;
mod equality;
mod error;
mod ext;
mod logic;
mod options;

pub use arithmetic::{divide, minus, multiply, plus};
pub use coerce::{coerce_to_boolean, coerce_to_number, coerce_to_primitive, coerce_to_string};
pub use compare::{greater_than, greater_than_or_equal, less_than, less_than_or_equal};
pub use equality::{
    are_same_type, convert_types, equal, loose_equality, not_equal, strict_equal,
    strict_equality, strict_not_equal,
};
pub use error::Error;
pub use ext::JsonOps;
pub use logic::{and, not, or};
pub use options::{Engine, EngineOptions, DEFAULT_MAX_DEPTH};

/// Configure an [`Engine`].
#[must_use]
pub fn options() -> EngineOptions {
    EngineOptions::default()
}
