//! Relational operators: `<`, `<=`, `>` and `>=`.
use std::{borrow::Cow, cmp::Ordering};

use jsonlike::{Json, JsonRef};

use crate::{
    budget::{unwrap_infallible, Budget, Unbounded},
    coerce::{to_number, to_string},
};

pub(crate) type Predicate = fn(Ordering) -> bool;

/// Boolean `left < right`.
#[must_use]
pub fn less_than<J: Json>(left: &J, right: &J) -> J {
    J::from_bool(unwrap_infallible(compare(left, right, Unbounded, Ordering::is_lt)))
}

/// Boolean `left <= right`.
#[must_use]
pub fn less_than_or_equal<J: Json>(left: &J, right: &J) -> J {
    J::from_bool(unwrap_infallible(compare(left, right, Unbounded, Ordering::is_le)))
}

/// Boolean `left > right`.
#[must_use]
pub fn greater_than<J: Json>(left: &J, right: &J) -> J {
    J::from_bool(unwrap_infallible(compare(left, right, Unbounded, Ordering::is_gt)))
}

/// Boolean `left >= right`.
#[must_use]
pub fn greater_than_or_equal<J: Json>(left: &J, right: &J) -> J {
    J::from_bool(unwrap_infallible(compare(left, right, Unbounded, Ordering::is_ge)))
}

/// Strings and arrays on both sides compare as strings, anything else as numbers.
/// A side that is not a number makes every comparison false.
pub(crate) fn compare<J: Json, B: Budget>(
    left: &J,
    right: &J,
    budget: B,
    predicate: Predicate,
) -> Result<bool, B::Error> {
    if let Some(left) = string_operand(left, budget)? {
        if let Some(right) = string_operand(right, budget)? {
            return Ok(predicate(left.cmp(&right)));
        }
    }
    match (to_number(left, budget)?, to_number(right, budget)?) {
        (Some(left), Some(right)) => Ok(predicate(left.cmp(&right))),
        _ => {
            tracing::trace!(
                left = %left.json_type(),
                right = %right.json_type(),
                "comparison operand is not a number"
            );
            Ok(false)
        }
    }
}

fn string_operand<J: Json, B: Budget>(
    value: &J,
    budget: B,
) -> Result<Option<Cow<'_, str>>, B::Error> {
    match value.view() {
        JsonRef::String(text) => Ok(Some(Cow::Borrowed(text))),
        JsonRef::Array(_) => Ok(Some(Cow::Owned(to_string(value, budget)?))),
        _ => Ok(None),
    }
}
