//! Loose (`==`) and strict (`===`) equality.
use std::borrow::Cow;

use jsonlike::{Json, JsonRef, JsonType};

use crate::{
    budget::{unwrap_infallible, Budget, Unbounded},
    coerce::{to_number, to_primitive},
};

/// Types as far as coercion is concerned. Arrays and objects are not told apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kind {
    Null,
    Boolean,
    Number,
    String,
    Associative,
}

fn kind<J: Json>(value: &J) -> Kind {
    match value.json_type() {
        JsonType::Null => Kind::Null,
        JsonType::Boolean => Kind::Boolean,
        JsonType::Number => Kind::Number,
        JsonType::String => Kind::String,
        JsonType::Array | JsonType::Object => Kind::Associative,
    }
}

/// Whether both values are `null`, booleans, numbers, strings, or arrays / objects.
#[must_use]
pub fn are_same_type<J: Json>(left: &J, right: &J) -> bool {
    kind(left) == kind(right)
}

/// Bring two values to a common type before comparing them.
///
/// Values of the same type, or pairs involving `null`, are returned unchanged. Otherwise arrays
/// and objects are replaced with their string form and, if the types still differ, both values
/// are converted to numbers. `None` means one of them is not a number.
#[must_use]
pub fn convert_types<'a, J: Json>(
    left: &'a J,
    right: &'a J,
) -> Option<(Cow<'a, J>, Cow<'a, J>)> {
    unwrap_infallible(convert(left, right, Unbounded))
}

/// `left == right`. Two arrays or objects are never loosely equal.
#[must_use]
pub fn loose_equality<J: Json>(left: &J, right: &J) -> bool {
    unwrap_infallible(loosely_equal(left, right, Unbounded))
}

/// `left === right`: equal without any conversion.
///
/// Arrays and objects are never strictly equal, there is no identity to compare them by.
#[must_use]
pub fn strict_equality<J: Json>(left: &J, right: &J) -> bool {
    same_value(left, right)
}

/// Boolean `left == right`.
#[must_use]
pub fn equal<J: Json>(left: &J, right: &J) -> J {
    J::from_bool(loose_equality(left, right))
}

/// Boolean `left != right`.
#[must_use]
pub fn not_equal<J: Json>(left: &J, right: &J) -> J {
    J::from_bool(!loose_equality(left, right))
}

/// Boolean `left === right`.
#[must_use]
pub fn strict_equal<J: Json>(left: &J, right: &J) -> J {
    J::from_bool(strict_equality(left, right))
}

/// Boolean `left !== right`.
#[must_use]
pub fn strict_not_equal<J: Json>(left: &J, right: &J) -> J {
    J::from_bool(!strict_equality(left, right))
}

pub(crate) fn convert<'a, J: Json, B: Budget>(
    left: &'a J,
    right: &'a J,
    budget: B,
) -> Result<Option<(Cow<'a, J>, Cow<'a, J>)>, B::Error> {
    if are_same_type(left, right) || left.is_null() || right.is_null() {
        return Ok(Some((Cow::Borrowed(left), Cow::Borrowed(right))));
    }
    let left = to_primitive(left, budget)?;
    let right = to_primitive(right, budget)?;
    if are_same_type(&*left, &*right) {
        return Ok(Some((left, right)));
    }
    match (
        to_number(&*left, budget)?,
        to_number(&*right, budget)?,
    ) {
        (Some(left), Some(right)) => Ok(Some((
            Cow::Owned(J::from_number(left)),
            Cow::Owned(J::from_number(right)),
        ))),
        _ => Ok(None),
    }
}

pub(crate) fn loosely_equal<J: Json, B: Budget>(
    left: &J,
    right: &J,
    budget: B,
) -> Result<bool, B::Error> {
    if left.is_associative() && right.is_associative() {
        return Ok(false);
    }
    Ok(convert(left, right, budget)?
        .is_some_and(|(left, right)| same_value(&*left, &*right)))
}

/// Same atomic shape and same content. Numbers compare by value.
fn same_value<J: Json>(left: &J, right: &J) -> bool {
    match (left.view(), right.view()) {
        (JsonRef::Null, JsonRef::Null) => true,
        (JsonRef::Bool(left), JsonRef::Bool(right)) => left == right,
        (JsonRef::Number(left), JsonRef::Number(right)) => left == right,
        (JsonRef::String(left), JsonRef::String(right)) => left == right,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use jsonlike::{Json, JsonValue};
    use serde_json::{json, Value};
    use test_case::test_case;

    use super::*;

    fn value(input: Value) -> JsonValue {
        JsonValue::from(input)
    }

    #[test_case(json!(null), json!(null), true; "nulls")]
    #[test_case(json!(true), json!(false), true; "booleans")]
    #[test_case(json!(1), json!(2.5), true; "numbers")]
    #[test_case(json!("a"), json!(""), true; "strings")]
    #[test_case(json!([]), json!({}), true; "array and object")]
    #[test_case(json!([1]), json!([]), true; "arrays")]
    #[test_case(json!(1), json!("1"), false; "number and string")]
    #[test_case(json!(null), json!(false), false; "null and boolean")]
    #[test_case(json!({}), json!("x"), false; "object and string")]
    fn same_type(left: Value, right: Value, expected: bool) {
        assert_eq!(are_same_type(&value(left), &value(right)), expected);
    }

    #[test_case(json!("5"), json!(5), Some((json!(5), json!(5))); "string to number")]
    #[test_case(json!(true), json!("1"), Some((json!(1), json!(1))); "boolean and string")]
    #[test_case(json!(null), json!(5), Some((json!(null), json!(5))); "null is kept")]
    #[test_case(json!(5), json!(null), Some((json!(5), json!(null))); "null on the right")]
    #[test_case(json!("a"), json!("b"), Some((json!("a"), json!("b"))); "same type")]
    #[test_case(json!([1]), json!("1"), Some((json!("1"), json!("1"))); "array to string")]
    #[test_case(json!([1, 2]), json!({}), Some((json!([1, 2]), json!({}))); "both associative")]
    #[test_case(json!([]), json!(false), Some((json!(0), json!(0))); "empty array and false")]
    #[test_case(json!({}), json!(1), None; "object is not a number")]
    #[test_case(json!("foo"), json!(1), None; "string is not a number")]
    fn conversion(left: Value, right: Value, expected: Option<(Value, Value)>) {
        let (left, right) = (value(left), value(right));
        let converted = convert_types(&left, &right)
            .map(|(left, right)| (left.into_owned(), right.into_owned()));
        let expected = expected.map(|(left, right)| (value(left), value(right)));
        assert_eq!(converted, expected);
    }

    #[test_case(json!("5"), json!(5), true; "numeric string")]
    #[test_case(json!("1.0"), json!(1), true; "decimal string")]
    #[test_case(json!(0), json!(false), true; "zero and false")]
    #[test_case(json!(1), json!(true), true; "one and true")]
    #[test_case(json!(""), json!(0), true; "empty string and zero")]
    #[test_case(json!(" "), json!(false), true; "blank string and false")]
    #[test_case(json!(null), json!(null), true; "nulls")]
    #[test_case(json!("abc"), json!("abc"), true; "same strings")]
    #[test_case(json!([1]), json!(1), true; "single element array")]
    #[test_case(json!([1, 2]), json!("1,2"), true; "array and its string form")]
    #[test_case(json!([]), json!(false), true; "empty array and false")]
    #[test_case(json!({}), json!("[object Object]"), true; "object and its string form")]
    #[test_case(json!(null), json!(0), false; "null is not zero")]
    #[test_case(json!(null), json!(false), false; "null is not false")]
    #[test_case(json!(null), json!([]), false; "null is not an empty array")]
    #[test_case(json!("a"), json!("b"), false; "different strings")]
    #[test_case(json!("foo"), json!(1), false; "not a number")]
    #[test_case(json!([]), json!([]), false; "arrays")]
    #[test_case(json!({}), json!({}), false; "objects")]
    #[test_case(json!([1]), json!({}), false; "array and object")]
    #[test_case(json!({}), json!(true), false; "object and boolean")]
    fn loose(left: Value, right: Value, expected: bool) {
        let (jleft, jright) = (value(left.clone()), value(right.clone()));
        assert_eq!(loose_equality(&jleft, &jright), expected);
        assert_eq!(loose_equality(&jright, &jleft), expected);
        assert_eq!(loose_equality(&left, &right), expected);
        assert_eq!(equal(&jleft, &jright), JsonValue::from_bool(expected));
        assert_eq!(not_equal(&jleft, &jright), JsonValue::from_bool(!expected));
    }

    #[test_case(json!(1), json!(1.0), true; "numbers by value")]
    #[test_case(json!("a"), json!("a"), true; "strings")]
    #[test_case(json!(null), json!(null), true; "nulls")]
    #[test_case(json!(false), json!(false), true; "booleans")]
    #[test_case(json!("1"), json!(1), false; "no conversion")]
    #[test_case(json!(0), json!(false), false; "zero and false")]
    #[test_case(json!([]), json!([]), false; "arrays")]
    #[test_case(json!({}), json!({}), false; "objects")]
    fn strict(left: Value, right: Value, expected: bool) {
        let (left, right) = (value(left), value(right));
        assert_eq!(strict_equality(&left, &right), expected);
        assert_eq!(strict_equal(&left, &right), JsonValue::from_bool(expected));
        assert_eq!(
            strict_not_equal(&left, &right),
            JsonValue::from_bool(!expected)
        );
    }
}
