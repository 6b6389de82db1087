//! Arithmetic operators: `+`, `-`, `*` and `/`.
use bigdecimal::BigDecimal;
use jsonlike::{Json, JsonType};
use num_traits::Zero;

use crate::{
    budget::{unwrap_infallible, Budget, Unbounded},
    coerce::{finite, to_number, to_string},
};

/// A binary operation on two numbers. `None` stands for a NaN result.
pub(crate) type Operation = fn(&BigDecimal, &BigDecimal) -> Option<BigDecimal>;

/// `left + right`.
///
/// Numbers and `null` are added, any other combination is concatenated as strings. In
/// particular, an object operand never turns into a number here.
#[must_use]
pub fn plus<J: Json>(left: &J, right: &J) -> J {
    unwrap_infallible(add(left, right, Unbounded))
}

/// `left - right`, or `null` if either side is not a number.
#[must_use]
pub fn minus<J: Json>(left: &J, right: &J) -> J {
    unwrap_infallible(arithmetic(left, right, Unbounded, "-", subtract))
}

/// `left * right`, or `null` if either side is not a number.
#[must_use]
pub fn multiply<J: Json>(left: &J, right: &J) -> J {
    unwrap_infallible(arithmetic(left, right, Unbounded, "*", product))
}

/// `left / right`, or `null` if either side is not a number or `right` is zero.
#[must_use]
pub fn divide<J: Json>(left: &J, right: &J) -> J {
    unwrap_infallible(arithmetic(left, right, Unbounded, "/", quotient))
}

pub(crate) fn add<J: Json, B: Budget>(left: &J, right: &J, budget: B) -> Result<J, B::Error> {
    if is_numeric(left) && is_numeric(right) {
        arithmetic(left, right, budget, "+", sum)
    } else {
        let mut output = to_string(left, budget)?;
        output.push_str(&to_string(right, budget)?);
        Ok(J::from_string(output))
    }
}

/// Convert both operands to numbers and apply `operation`.
///
/// Operands and results beyond the range of finite doubles are not numbers.
pub(crate) fn arithmetic<J: Json, B: Budget>(
    left: &J,
    right: &J,
    budget: B,
    operator: &'static str,
    operation: Operation,
) -> Result<J, B::Error> {
    let x = to_number(left, budget)?.and_then(finite);
    let y = to_number(right, budget)?.and_then(finite);
    if let (Some(x), Some(y)) = (x, y) {
        if let Some(result) = operation(&x, &y).and_then(finite) {
            return Ok(J::from_number(result));
        }
    }
    tracing::trace!(
        operator,
        left = %left.json_type(),
        right = %right.json_type(),
        "arithmetic result is not a number"
    );
    Ok(J::null())
}

fn is_numeric<J: Json>(value: &J) -> bool {
    matches!(value.json_type(), JsonType::Number | JsonType::Null)
}

pub(crate) fn sum(left: &BigDecimal, right: &BigDecimal) -> Option<BigDecimal> {
    Some(left + right)
}

pub(crate) fn subtract(left: &BigDecimal, right: &BigDecimal) -> Option<BigDecimal> {
    Some(left - right)
}

pub(crate) fn product(left: &BigDecimal, right: &BigDecimal) -> Option<BigDecimal> {
    Some(left * right)
}

pub(crate) fn quotient(left: &BigDecimal, right: &BigDecimal) -> Option<BigDecimal> {
    if right.is_zero() {
        None
    } else {
        Some(left / right)
    }
}
