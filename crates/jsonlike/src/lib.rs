//! # jsonlike
//!
//! A uniform interface over JSON value representations.
//!
//! Generic code written against [`Json`] can construct, inspect and transform JSON values
//! without committing to a concrete JSON model. The crate ships [`JsonValue`], an in-memory tree
//! with exact decimal numbers, and, behind the `serde_json` feature, an implementation for
//! [`serde_json::Value`](https://docs.rs/serde_json/latest/serde_json/enum.Value.html).
//!
//! ```rust
//! use jsonlike::{Json, JsonRef, JsonValue};
//!
//! fn depth<J: Json>(value: &J) -> usize {
//!     match value.view() {
//!         JsonRef::Array(items) => 1 + items.iter().map(depth).max().unwrap_or(0),
//!         _ => 0,
//!     }
//! }
//!
//! let value = JsonValue::array_of([JsonValue::array_of([JsonValue::from_i32(1)])]);
//! assert_eq!(depth(&value), 2);
//! ```
mod impls;
mod json;
mod types;
mod value;

pub use bigdecimal::BigDecimal;
pub use json::{Json, JsonRef};
pub use types::JsonType;
pub use value::JsonValue;
