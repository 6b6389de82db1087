use std::borrow::Cow;

use bigdecimal::BigDecimal;
use num_traits::ToPrimitive;
use serde_json::{Map, Number, Value};

use crate::{Json, JsonRef, JsonType, JsonValue};

impl Json for Value {
    type Object = Map<String, Value>;

    #[inline]
    fn null() -> Self {
        Value::Null
    }
    #[inline]
    fn from_bool(value: bool) -> Self {
        Value::Bool(value)
    }
    /// Decimals outside of the range of JSON numbers become `null`.
    fn from_number(value: BigDecimal) -> Self {
        number_from_decimal(&value).map_or(Value::Null, Value::Number)
    }
    #[inline]
    fn from_string(value: impl Into<String>) -> Self {
        Value::String(value.into())
    }
    fn array_of<I>(items: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        Value::Array(items.into_iter().collect())
    }
    fn object_of<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Self)>,
    {
        Value::Object(
            entries
                .into_iter()
                .map(|(key, value)| (key.into(), value))
                .collect(),
        )
    }
    #[inline]
    fn from_object(object: Map<String, Value>) -> Self {
        Value::Object(object)
    }
    #[inline]
    fn from_i32(value: i32) -> Self {
        Value::from(value)
    }
    #[inline]
    fn from_i64(value: i64) -> Self {
        Value::from(value)
    }
    #[inline]
    fn from_u64(value: u64) -> Self {
        Value::from(value)
    }
    /// Keeps the binary float as is. Fails for NaN and infinities.
    fn from_f64(value: f64) -> Option<Self> {
        Number::from_f64(value).map(Value::Number)
    }
    fn from_f32(value: f32) -> Option<Self> {
        Number::from_f64(f64::from(value)).map(Value::Number)
    }

    fn json_type(&self) -> JsonType {
        match self {
            Value::Null => JsonType::Null,
            Value::Bool(_) => JsonType::Boolean,
            Value::Number(_) => JsonType::Number,
            Value::String(_) => JsonType::String,
            Value::Array(_) => JsonType::Array,
            Value::Object(_) => JsonType::Object,
        }
    }

    fn view(&self) -> JsonRef<'_, Self> {
        match self {
            Value::Null => JsonRef::Null,
            Value::Bool(value) => JsonRef::Bool(*value),
            Value::Number(number) => JsonRef::Number(Cow::Owned(decimal_from_number(number))),
            Value::String(value) => JsonRef::String(value),
            Value::Array(items) => JsonRef::Array(items),
            Value::Object(object) => JsonRef::Object(object),
        }
    }

    fn map_bool(self, f: impl FnOnce(bool) -> bool) -> Self {
        match self {
            Value::Bool(value) => Value::Bool(f(value)),
            other => other,
        }
    }
    fn map_number(self, f: impl FnOnce(BigDecimal) -> BigDecimal) -> Self {
        match self {
            Value::Number(number) => Self::from_number(f(decimal_from_number(&number))),
            other => other,
        }
    }
    fn map_string(self, f: impl FnOnce(String) -> String) -> Self {
        match self {
            Value::String(value) => Value::String(f(value)),
            other => other,
        }
    }
    fn map_array(self, f: impl FnOnce(Vec<Self>) -> Vec<Self>) -> Self {
        match self {
            Value::Array(items) => Value::Array(f(items)),
            other => other,
        }
    }
    fn map_object(self, f: impl FnOnce(Map<String, Value>) -> Map<String, Value>) -> Self {
        match self {
            Value::Object(object) => Value::Object(f(object)),
            other => other,
        }
    }
}

fn decimal_from_number(number: &Number) -> BigDecimal {
    if let Some(value) = number.as_u64() {
        BigDecimal::from(value)
    } else if let Some(value) = number.as_i64() {
        BigDecimal::from(value)
    } else {
        number
            .to_string()
            .parse()
            .expect("JSON numbers are valid decimal literals")
    }
}

fn number_from_decimal(value: &BigDecimal) -> Option<Number> {
    if value.is_integer() {
        if let Some(int) = value.to_i64() {
            return Some(int.into());
        }
        if let Some(int) = value.to_u64() {
            return Some(int.into());
        }
    }
    value.normalized().to_string().parse().ok()
}

impl From<Value> for JsonValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => JsonValue::Null,
            Value::Bool(b) => JsonValue::Bool(b),
            Value::Number(number) => JsonValue::Number(decimal_from_number(&number)),
            Value::String(s) => JsonValue::String(s),
            Value::Array(old) => JsonValue::Array(old.into_iter().map(JsonValue::from).collect()),
            Value::Object(old) => JsonValue::Object(
                old.into_iter()
                    .map(|(k, v)| (k, JsonValue::from(v)))
                    .collect(),
            ),
        }
    }
}

impl PartialEq<Value> for JsonValue {
    fn eq(&self, other: &Value) -> bool {
        eq(other, self)
    }
}

impl PartialEq<JsonValue> for Value {
    fn eq(&self, other: &JsonValue) -> bool {
        eq(self, other)
    }
}

fn eq(lhs: &Value, rhs: &JsonValue) -> bool {
    match (lhs, rhs) {
        (Value::Null, JsonValue::Null) => true,
        (Value::Bool(l), JsonValue::Bool(r)) => l == r,
        (Value::Number(l), JsonValue::Number(r)) => decimal_from_number(l) == *r,
        (Value::String(l), JsonValue::String(r)) => l == r,
        (Value::Array(l), JsonValue::Array(r)) => {
            l.len() == r.len() && l.iter().zip(r.iter()).all(|(l, r)| eq(l, r))
        }
        (Value::Object(l), JsonValue::Object(r)) => {
            if l.len() != r.len() {
                return false;
            }
            for (key, lv) in l {
                match r.get(key) {
                    Some(rv) if eq(lv, rv) => continue,
                    _ => return false,
                }
            }
            true
        }
        _ => false,
    }
}
