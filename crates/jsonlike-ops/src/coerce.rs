//! Abstract conversions: `ToNumber`, `ToString`, `ToBoolean` and `ToPrimitive`.
use std::borrow::Cow;

use bigdecimal::BigDecimal;
use jsonlike::{Json, JsonRef};
use num_traits::{One, Signed, Zero};

use crate::budget::{unwrap_infallible, Budget, Unbounded};

/// What every object turns into when converted to a string.
pub(crate) const OBJECT_STRING: &str = "[object Object]";

/// Convert a value to a number, or `None` where the conversion yields NaN.
///
/// - `null` and `false` are `0`, `true` is `1`.
/// - Strings are trimmed; blank strings are `0`, others must be decimal literals.
/// - An empty array is `0` and a single-element array converts its element. Larger arrays and
///   all objects are NaN.
#[must_use]
pub fn coerce_to_number<J: Json>(value: &J) -> Option<BigDecimal> {
    unwrap_infallible(to_number(value, Unbounded))
}

/// Convert a value to its string form.
///
/// Arrays join their converted elements with `,` and objects become `"[object Object]"`
/// regardless of their content.
#[must_use]
pub fn coerce_to_string<J: Json>(value: &J) -> String {
    unwrap_infallible(to_string(value, Unbounded))
}

/// Convert a value to its truthiness. Arrays and objects are truthy even when empty.
#[must_use]
pub fn coerce_to_boolean<J: Json>(value: &J) -> bool {
    match value.view() {
        JsonRef::Null => false,
        JsonRef::Bool(flag) => flag,
        JsonRef::Number(number) => !number.is_zero(),
        JsonRef::String(text) => !text.is_empty(),
        JsonRef::Array(_) | JsonRef::Object(_) => true,
    }
}

/// Replace an array or object with its string form. Atomic values are returned as is.
#[must_use]
pub fn coerce_to_primitive<J: Json>(value: &J) -> Cow<'_, J> {
    unwrap_infallible(to_primitive(value, Unbounded))
}

pub(crate) fn to_number<J: Json, B: Budget>(
    value: &J,
    budget: B,
) -> Result<Option<BigDecimal>, B::Error> {
    let number = match value.view() {
        JsonRef::Null | JsonRef::Bool(false) | JsonRef::Array([]) => Some(BigDecimal::zero()),
        JsonRef::Bool(true) => Some(BigDecimal::one()),
        JsonRef::Number(number) => Some(number.into_owned()),
        JsonRef::String(text) => parse_number(text),
        JsonRef::Array([item]) => return to_number(item, budget.descend()?),
        JsonRef::Array(_) | JsonRef::Object(_) => None,
    };
    Ok(number)
}

pub(crate) fn to_string<J: Json, B: Budget>(value: &J, budget: B) -> Result<String, B::Error> {
    let string = match value.view() {
        JsonRef::Null => "null".to_string(),
        JsonRef::Bool(flag) => flag.to_string(),
        JsonRef::Number(number) => format_number(&number),
        JsonRef::String(text) => text.to_string(),
        JsonRef::Array([]) => String::new(),
        JsonRef::Array(items) => {
            let budget = budget.descend()?;
            let mut output = String::new();
            for (idx, item) in items.iter().enumerate() {
                if idx > 0 {
                    output.push(',');
                }
                output.push_str(&to_string(item, budget)?);
            }
            output
        }
        JsonRef::Object(_) => OBJECT_STRING.to_string(),
    };
    Ok(string)
}

pub(crate) fn to_primitive<J: Json, B: Budget>(
    value: &J,
    budget: B,
) -> Result<Cow<'_, J>, B::Error> {
    if value.is_associative() {
        Ok(Cow::Owned(J::from_string(to_string(value, budget)?)))
    } else {
        Ok(Cow::Borrowed(value))
    }
}

/// Decimal exponent of the largest finite double.
const MAX_EXPONENT: i64 = 308;
/// Decimal exponent of the smallest non-zero double.
const MIN_EXPONENT: i64 = -324;

/// Numeric text as `Number.prototype.toString` writes it: plain digits for magnitudes in
/// `1e-7..1e21` and exponent notation outside, with trailing zeros removed.
pub(crate) fn format_number(number: &BigDecimal) -> String {
    if number.is_zero() {
        return "0".to_string();
    }
    let (int, scale) = number.normalized().as_bigint_and_exponent();
    let digits = int.magnitude().to_string();
    let count = i64::try_from(digits.len()).unwrap_or(i64::MAX);
    // Position of the decimal point relative to the first digit
    let point = count.saturating_sub(scale);
    let mut output = String::with_capacity(digits.len() + 8);
    if number.is_negative() {
        output.push('-');
    }
    if count <= point && point <= 21 {
        output.push_str(&digits);
        output.push_str(&"0".repeat(zeros(point - count)));
    } else if 0 < point && point <= 21 {
        let (whole, fraction) = digits.split_at(zeros(point));
        output.push_str(whole);
        output.push('.');
        output.push_str(fraction);
    } else if -6 < point && point <= 0 {
        output.push_str("0.");
        output.push_str(&"0".repeat(zeros(-point)));
        output.push_str(&digits);
    } else {
        let (first, rest) = digits.split_at(1);
        output.push_str(first);
        if !rest.is_empty() {
            output.push('.');
            output.push_str(rest);
        }
        let exponent = point.saturating_sub(1);
        output.push('e');
        output.push(if exponent < 0 { '-' } else { '+' });
        output.push_str(&exponent.unsigned_abs().to_string());
    }
    output
}

fn zeros(count: i64) -> usize {
    usize::try_from(count).unwrap_or(0)
}

/// Restrict a number to the range of finite doubles.
///
/// Larger magnitudes have no finite value and become `None`, smaller ones flush to zero. Keeping
/// operands in this range keeps the scales of decimal arithmetic small.
pub(crate) fn finite(number: BigDecimal) -> Option<BigDecimal> {
    if number.is_zero() {
        return Some(number);
    }
    let (_, scale) = number.as_bigint_and_exponent();
    let digits = i64::try_from(number.digits()).unwrap_or(i64::MAX);
    // Exponent of the leading digit
    let exponent = digits.saturating_sub(scale).saturating_sub(1);
    if exponent > MAX_EXPONENT {
        None
    } else if exponent < MIN_EXPONENT {
        Some(BigDecimal::zero())
    } else {
        Some(number)
    }
}

fn parse_number(text: &str) -> Option<BigDecimal> {
    let text = text.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}');
    if text.is_empty() {
        return Some(BigDecimal::zero());
    }
    parse_decimal_literal(text)
}

/// Parse `[+-]? (digits [. digits?] | . digits) ([eE] [+-]? digits)?`.
fn parse_decimal_literal(text: &str) -> Option<BigDecimal> {
    let (sign, rest) = if let Some(rest) = text.strip_prefix('-') {
        ("-", rest)
    } else {
        ("", text.strip_prefix('+').unwrap_or(text))
    };
    let (mantissa, exponent) = match rest.find(|c: char| c == 'e' || c == 'E') {
        Some(idx) => (&rest[..idx], Some(&rest[idx + 1..])),
        None => (rest, None),
    };
    let (integer, fraction) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    if (integer.is_empty() && fraction.is_empty()) || !is_digits(integer) || !is_digits(fraction)
    {
        return None;
    }
    let exponent = match exponent {
        Some(exponent) => parse_exponent(exponent)?,
        None => 0,
    };
    let mut literal = String::with_capacity(mantissa.len() + 2);
    literal.push_str(sign);
    literal.push_str(if integer.is_empty() { "0" } else { integer });
    if !fraction.is_empty() {
        literal.push('.');
        literal.push_str(fraction);
    }
    let mantissa: BigDecimal = literal.parse().ok()?;
    if mantissa.is_zero() {
        return Some(BigDecimal::zero());
    }
    let (int, scale) = mantissa.as_bigint_and_exponent();
    match scale.checked_sub(exponent) {
        Some(scale) => finite(BigDecimal::new(int, scale)),
        // Beyond any scale a decimal can hold
        None if exponent < 0 => Some(BigDecimal::zero()),
        None => None,
    }
}

/// `[+-]? digits`, saturating at the bounds of `i64`.
fn parse_exponent(text: &str) -> Option<i64> {
    let (negative, digits) = match text.strip_prefix('-') {
        Some(digits) => (true, digits),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };
    if digits.is_empty() || !is_digits(digits) {
        return None;
    }
    let value = digits.parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -value } else { value })
}

fn is_digits(text: &str) -> bool {
    text.bytes().all(|byte| byte.is_ascii_digit())
}
