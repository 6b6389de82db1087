//! Boolean operators.
//!
//! Unlike `&&` and `||` in ECMAScript, both operands are always converted and the result is a
//! fresh boolean rather than one of the operands.
use jsonlike::Json;

use crate::coerce::coerce_to_boolean;

/// Boolean conjunction of the truthiness of both operands.
#[must_use]
pub fn and<J: Json>(left: &J, right: &J) -> J {
    J::from_bool(coerce_to_boolean(left) && coerce_to_boolean(right))
}

/// Boolean disjunction of the truthiness of both operands.
#[must_use]
pub fn or<J: Json>(left: &J, right: &J) -> J {
    J::from_bool(coerce_to_boolean(left) || coerce_to_boolean(right))
}

/// `!value`.
#[must_use]
pub fn not<J: Json>(value: &J) -> J {
    J::from_bool(!coerce_to_boolean(value))
}
