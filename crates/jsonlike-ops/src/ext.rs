use std::borrow::Cow;

use bigdecimal::BigDecimal;
use jsonlike::Json;

/// Method syntax for the operators of this crate.
///
/// Implemented for every [`Json`] type.
///
/// ```rust
/// use jsonlike::{Json, JsonValue};
/// use jsonlike_ops::JsonOps;
///
/// let five = JsonValue::from_string("5");
/// assert!(five.loose_eq(&JsonValue::from_i32(5)));
/// assert_eq!(five.plus(&JsonValue::from_i32(1)), JsonValue::from_string("51"));
/// ```
pub trait JsonOps: Json {
    fn coerce_to_number(&self) -> Option<BigDecimal> {
        crate::coerce_to_number(self)
    }
    fn coerce_to_string(&self) -> String {
        crate::coerce_to_string(self)
    }
    fn coerce_to_boolean(&self) -> bool {
        crate::coerce_to_boolean(self)
    }
    fn coerce_to_primitive(&self) -> Cow<'_, Self> {
        crate::coerce_to_primitive(self)
    }
    fn loose_eq(&self, other: &Self) -> bool {
        crate::loose_equality(self, other)
    }
    fn strict_eq(&self, other: &Self) -> bool {
        crate::strict_equality(self, other)
    }
    #[must_use]
    fn less_than(&self, other: &Self) -> Self {
        crate::less_than(self, other)
    }
    #[must_use]
    fn less_than_or_equal(&self, other: &Self) -> Self {
        crate::less_than_or_equal(self, other)
    }
    #[must_use]
    fn greater_than(&self, other: &Self) -> Self {
        crate::greater_than(self, other)
    }
    #[must_use]
    fn greater_than_or_equal(&self, other: &Self) -> Self {
        crate::greater_than_or_equal(self, other)
    }
    #[must_use]
    fn plus(&self, other: &Self) -> Self {
        crate::plus(self, other)
    }
    #[must_use]
    fn minus(&self, other: &Self) -> Self {
        crate::minus(self, other)
    }
    #[must_use]
    fn multiply(&self, other: &Self) -> Self {
        crate::multiply(self, other)
    }
    #[must_use]
    fn divide(&self, other: &Self) -> Self {
        crate::divide(self, other)
    }
    #[must_use]
    fn and(&self, other: &Self) -> Self {
        crate::and(self, other)
    }
    #[must_use]
    fn or(&self, other: &Self) -> Self {
        crate::or(self, other)
    }
}

impl<J: Json> JsonOps for J {}
