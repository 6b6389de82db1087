use std::borrow::Cow;

use ahash::AHashMap;
use bigdecimal::BigDecimal;

use crate::{Json, JsonRef, JsonType};

/// An immutable in-memory JSON tree with exact decimal numbers.
///
/// Equality is structural: numbers compare by value (`1.0 == 1`) and objects ignore key order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JsonValue {
    Null,
    Bool(bool),
    Number(BigDecimal),
    String(String),
    Array(Vec<JsonValue>),
    Object(AHashMap<String, JsonValue>),
}

impl Json for JsonValue {
    type Object = AHashMap<String, JsonValue>;

    #[inline]
    fn null() -> Self {
        JsonValue::Null
    }
    #[inline]
    fn from_bool(value: bool) -> Self {
        JsonValue::Bool(value)
    }
    #[inline]
    fn from_number(value: BigDecimal) -> Self {
        JsonValue::Number(value)
    }
    #[inline]
    fn from_string(value: impl Into<String>) -> Self {
        JsonValue::String(value.into())
    }
    fn array_of<I>(items: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        JsonValue::Array(items.into_iter().collect())
    }
    fn object_of<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Self)>,
    {
        JsonValue::Object(
            entries
                .into_iter()
                .map(|(key, value)| (key.into(), value))
                .collect(),
        )
    }
    #[inline]
    fn from_object(object: AHashMap<String, JsonValue>) -> Self {
        JsonValue::Object(object)
    }

    fn json_type(&self) -> JsonType {
        match self {
            JsonValue::Null => JsonType::Null,
            JsonValue::Bool(_) => JsonType::Boolean,
            JsonValue::Number(_) => JsonType::Number,
            JsonValue::String(_) => JsonType::String,
            JsonValue::Array(_) => JsonType::Array,
            JsonValue::Object(_) => JsonType::Object,
        }
    }

    fn view(&self) -> JsonRef<'_, Self> {
        match self {
            JsonValue::Null => JsonRef::Null,
            JsonValue::Bool(value) => JsonRef::Bool(*value),
            JsonValue::Number(value) => JsonRef::Number(Cow::Borrowed(value)),
            JsonValue::String(value) => JsonRef::String(value),
            JsonValue::Array(items) => JsonRef::Array(items),
            JsonValue::Object(object) => JsonRef::Object(object),
        }
    }

    fn map_bool(self, f: impl FnOnce(bool) -> bool) -> Self {
        match self {
            JsonValue::Bool(value) => JsonValue::Bool(f(value)),
            other => other,
        }
    }
    fn map_number(self, f: impl FnOnce(BigDecimal) -> BigDecimal) -> Self {
        match self {
            JsonValue::Number(value) => JsonValue::Number(f(value)),
            other => other,
        }
    }
    fn map_string(self, f: impl FnOnce(String) -> String) -> Self {
        match self {
            JsonValue::String(value) => JsonValue::String(f(value)),
            other => other,
        }
    }
    fn map_array(self, f: impl FnOnce(Vec<Self>) -> Vec<Self>) -> Self {
        match self {
            JsonValue::Array(items) => JsonValue::Array(f(items)),
            other => other,
        }
    }
    fn map_object(
        self,
        f: impl FnOnce(AHashMap<String, JsonValue>) -> AHashMap<String, JsonValue>,
    ) -> Self {
        match self {
            JsonValue::Object(object) => JsonValue::Object(f(object)),
            other => other,
        }
    }
}

impl From<bool> for JsonValue {
    fn from(value: bool) -> Self {
        JsonValue::Bool(value)
    }
}

impl From<i64> for JsonValue {
    fn from(value: i64) -> Self {
        JsonValue::Number(BigDecimal::from(value))
    }
}

impl From<BigDecimal> for JsonValue {
    fn from(value: BigDecimal) -> Self {
        JsonValue::Number(value)
    }
}

impl From<&str> for JsonValue {
    fn from(value: &str) -> Self {
        JsonValue::String(value.to_owned())
    }
}

impl From<String> for JsonValue {
    fn from(value: String) -> Self {
        JsonValue::String(value)
    }
}

impl From<Vec<JsonValue>> for JsonValue {
    fn from(value: Vec<JsonValue>) -> Self {
        JsonValue::Array(value)
    }
}
