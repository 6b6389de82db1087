use std::fmt::Debug;

use jsonlike::{BigDecimal, Json, JsonValue};
use jsonlike_ops::{
    coerce_to_boolean, coerce_to_number, coerce_to_string, divide, equal, greater_than,
    greater_than_or_equal, less_than, less_than_or_equal, minus, multiply, plus,
};
use serde_json::{json, Value};
use test_case::test_case;

fn decimal(text: &str) -> BigDecimal {
    text.parse().expect("Invalid decimal")
}

/// One value of every shape, built through the contract only.
fn samples<J: Json>() -> Vec<J> {
    vec![
        J::null(),
        J::from_bool(true),
        J::from_bool(false),
        J::from_i32(0),
        J::from_number(decimal("-12.5")),
        J::from_string(""),
        J::from_string("foobar"),
        J::from_string(" 42 "),
        J::array_of([]),
        J::array_of([J::from_i32(7)]),
        J::array_of([J::from_string("a"), J::array_of([J::null()])]),
        J::object_of(Vec::<(String, J)>::new()),
        J::object_of([("key", J::from_bool(false))]),
    ]
}

fn classification_is_exclusive<J: Json + Debug>() {
    for value in samples::<J>() {
        let classifiers = [
            value.is_null(),
            value.is_bool(),
            value.is_number(),
            value.is_string(),
            value.is_array(),
            value.is_object(),
        ];
        assert_eq!(
            classifiers.iter().filter(|flag| **flag).count(),
            1,
            "{value:?}"
        );
        assert_eq!(value.as_null().is_some(), value.is_null(), "{value:?}");
        assert_eq!(value.as_bool().is_some(), value.is_bool(), "{value:?}");
        assert_eq!(value.as_number().is_some(), value.is_number(), "{value:?}");
        assert_eq!(value.as_str().is_some(), value.is_string(), "{value:?}");
        assert_eq!(value.as_array().is_some(), value.is_array(), "{value:?}");
        assert_eq!(value.as_object().is_some(), value.is_object(), "{value:?}");
        assert_ne!(value.is_atomic(), value.is_associative(), "{value:?}");
    }
}

#[test]
fn classification_is_exclusive_for_every_backend() {
    classification_is_exclusive::<JsonValue>();
    classification_is_exclusive::<Value>();
}

fn constructors_round_trip<J: Json + Debug>() {
    assert_eq!(J::null().as_null(), Some(()));
    assert_eq!(J::from_bool(true).as_bool(), Some(true));
    assert_eq!(J::from_string("text").as_str(), Some("text"));
    let number = decimal("3.25");
    assert_eq!(J::from_number(number.clone()).as_number(), Some(number));
    let items = vec![J::from_i32(1), J::from_string("two")];
    assert_eq!(
        J::array_of(items.clone())
            .as_array()
            .map(<[J]>::len),
        Some(items.len())
    );
    assert!(J::object_of([("a", J::null())]).as_object().is_some());
}

#[test]
fn constructors_round_trip_for_every_backend() {
    constructors_round_trip::<JsonValue>();
    constructors_round_trip::<Value>();
}

fn number_coercion_is_idempotent<J: Json>() {
    for text in ["0", "-1", "1.5", "0.1", "123456789", "-0.000001"] {
        let number = decimal(text);
        assert_eq!(coerce_to_number(&J::from_number(number.clone())), Some(number));
    }
}

#[test]
fn number_coercion_is_idempotent_for_every_backend() {
    number_coercion_is_idempotent::<JsonValue>();
    number_coercion_is_idempotent::<Value>();
}

fn arrays<J: Json>() {
    let empty = J::array_of([]);
    assert_eq!(coerce_to_string(&empty), "");
    assert!(coerce_to_boolean(&empty));
    assert_eq!(coerce_to_number(&empty), Some(decimal("0")));
    let mixed = J::array_of([J::from_string("a"), J::from_i32(1)]);
    assert_eq!(coerce_to_string(&mixed), "a,1");
}

#[test]
fn arrays_for_every_backend() {
    arrays::<JsonValue>();
    arrays::<Value>();
}

fn addition<J: Json + PartialEq + Debug>() {
    assert_eq!(
        plus(&J::from_i32(42), &J::null()),
        J::from_number(decimal("42"))
    );
    assert_eq!(
        plus(&J::from_string("foo"), &J::from_string("bar")),
        J::from_string("foobar")
    );
    let five = J::from_i32(5);
    let array = J::array_of([J::from_bool(true)]);
    assert_eq!(
        plus(&five, &array),
        J::from_string(coerce_to_string(&five) + &coerce_to_string(&array))
    );
}

#[test]
fn addition_for_every_backend() {
    addition::<JsonValue>();
    addition::<Value>();
}

fn not_a_number_is_null<J: Json + PartialEq + Debug>() {
    let foobar = J::from_string("foobar");
    for other in samples::<J>() {
        for (left, right) in [(&foobar, &other), (&other, &foobar)] {
            assert_eq!(minus(left, right), J::null());
            assert_eq!(multiply(left, right), J::null());
            assert_eq!(divide(left, right), J::null());
        }
    }
}

#[test]
fn not_a_number_is_null_for_every_backend() {
    not_a_number_is_null::<JsonValue>();
    not_a_number_is_null::<Value>();
}

fn loose_equality<J: Json + PartialEq + Debug>() {
    assert_eq!(
        equal(&J::from_string("5"), &J::from_i32(5)),
        J::from_bool(true)
    );
    let object = J::object_of(Vec::<(String, J)>::new());
    for other in samples::<J>() {
        if other.is_atomic() {
            assert_eq!(equal(&object, &other), J::from_bool(false));
            assert_eq!(equal(&other, &object), J::from_bool(false));
        }
    }
}

#[test]
fn loose_equality_for_every_backend() {
    loose_equality::<JsonValue>();
    loose_equality::<Value>();
}

fn arrays_compare_as_strings<J: Json + PartialEq + Debug>() {
    let left = J::array_of([J::from_i32(1), J::from_i32(2)]);
    let right = J::array_of([J::from_i32(3), J::from_i32(4)]);
    assert_eq!(greater_than(&left, &right), J::from_bool(false));
    assert_eq!(less_than(&left, &right), J::from_bool(true));
}

#[test]
fn arrays_compare_as_strings_for_every_backend() {
    arrays_compare_as_strings::<JsonValue>();
    arrays_compare_as_strings::<Value>();
}

#[test_case(json!(5))]
#[test_case(json!(-1.5))]
#[test_case(json!(null))]
#[test_case(json!(true))]
#[test_case(json!(false))]
#[test_case(json!(0))]
fn incomparable_operands(number: Value) {
    let foobar = json!("foobar");
    for (left, right) in [(&foobar, &number), (&number, &foobar)] {
        assert_eq!(less_than(left, right), json!(false));
        assert_eq!(less_than_or_equal(left, right), json!(false));
        assert_eq!(greater_than(left, right), json!(false));
        assert_eq!(greater_than_or_equal(left, right), json!(false));
    }
}

#[test_case(json!(1), json!("1"))]
#[test_case(json!([1, [2, 3]]), json!("1,2,3"))]
#[test_case(json!({"a": 1}), json!({"b": 2}))]
#[test_case(json!(0.5), json!(null))]
#[test_case(json!(""), json!(false))]
fn backends_agree(left: Value, right: Value) {
    let (jleft, jright) = (JsonValue::from(left.clone()), JsonValue::from(right.clone()));
    assert_eq!(coerce_to_number(&left), coerce_to_number(&jleft));
    assert_eq!(coerce_to_string(&left), coerce_to_string(&jleft));
    assert_eq!(coerce_to_boolean(&left), coerce_to_boolean(&jleft));
    assert_eq!(
        jsonlike_ops::loose_equality(&left, &right),
        jsonlike_ops::loose_equality(&jleft, &jright)
    );
    assert_eq!(plus(&left, &right), plus(&jleft, &jright));
    assert_eq!(minus(&left, &right), minus(&jleft, &jright));
    assert_eq!(less_than(&left, &right), less_than(&jleft, &jright));
}
