#![no_main]
use jsonlike::JsonValue;
use libfuzzer_sys::fuzz_target;
use serde_json::Value;

fuzz_target!(|data: &[u8]| {
    let Ok(Value::Array(operands)) = serde_json::from_slice::<Value>(data) else {
        return;
    };
    let [left, right] = operands.as_slice() else {
        return;
    };
    let engine = jsonlike_ops::options().with_max_depth(32).build();
    for (left, right) in [
        (left.clone(), right.clone()),
        (right.clone(), left.clone()),
    ] {
        let _ = engine.coerce_to_number(&left);
        let _ = engine.coerce_to_string(&left);
        let _ = engine.coerce_to_primitive(&left);
        let _ = engine.convert_types(&left, &right);
        let _ = engine.less_than(&left, &right);
        let _ = engine.less_than_or_equal(&left, &right);
        let _ = engine.greater_than(&left, &right);
        let _ = engine.greater_than_or_equal(&left, &right);
        let _ = engine.plus(&left, &right);
        let _ = engine.minus(&left, &right);
        let _ = engine.multiply(&left, &right);
        let _ = engine.divide(&left, &right);
        let _ = engine.not_equal(&left, &right);
        let _ = jsonlike_ops::coerce_to_boolean(&left);
        let _ = jsonlike_ops::strict_equality(&left, &right);
        let _ = jsonlike_ops::and(&left, &right);
        let _ = jsonlike_ops::or(&left, &right);
        let _ = jsonlike_ops::not(&left);

        // Both backends implement the same operators.
        let (reference_left, reference_right) =
            (JsonValue::from(left.clone()), JsonValue::from(right.clone()));
        if let (Ok(expected), Ok(actual)) = (
            engine.loose_equality(&left, &right),
            engine.loose_equality(&reference_left, &reference_right),
        ) {
            assert_eq!(expected, actual);
        }
        if let (Ok(expected), Ok(actual)) = (
            engine.coerce_to_string(&left),
            engine.coerce_to_string(&reference_left),
        ) {
            assert_eq!(expected, actual);
        }
        let _ = engine.equal(&reference_left, &reference_right);
    }
});
