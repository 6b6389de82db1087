use std::borrow::Cow;

use bigdecimal::BigDecimal;
use num_bigint::BigInt;

use crate::JsonType;

/// A borrowed view into a JSON value.
///
/// Matching on a view is exhaustive over the six JSON shapes.
pub enum JsonRef<'a, J: Json> {
    Null,
    Bool(bool),
    /// Backends that store numbers as decimals lend them out, others convert on the fly.
    Number(Cow<'a, BigDecimal>),
    String(&'a str),
    Array(&'a [J]),
    Object(&'a J::Object),
}

impl<J: Json> JsonRef<'_, J> {
    #[must_use]
    pub fn json_type(&self) -> JsonType {
        match self {
            JsonRef::Null => JsonType::Null,
            JsonRef::Bool(_) => JsonType::Boolean,
            JsonRef::Number(_) => JsonType::Number,
            JsonRef::String(_) => JsonType::String,
            JsonRef::Array(_) => JsonType::Array,
            JsonRef::Object(_) => JsonType::Object,
        }
    }
}

/// Capabilities a JSON value representation provides to generic code.
///
/// Implementors supply construction, classification via [`Json::json_type`] and a borrowed
/// [`Json::view`]; everything else has a default built on top of those and may be overridden
/// when the backend can do better (e.g. moving out of `self` in the `map_*` family).
///
/// Values are treated as immutable. The `map_*` methods return a new value of the same shape,
/// or `self` unchanged when the shape does not match.
pub trait Json: Clone + Sized {
    /// The backend's native mapping from keys to values.
    type Object: Clone;

    /// The `null` value.
    fn null() -> Self;
    fn from_bool(value: bool) -> Self;
    fn from_number(value: BigDecimal) -> Self;
    fn from_string(value: impl Into<String>) -> Self;
    fn array_of<I>(items: I) -> Self
    where
        I: IntoIterator<Item = Self>;
    /// Build an object from key-value pairs. Later duplicates replace earlier ones.
    fn object_of<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Self)>;
    fn from_object(object: Self::Object) -> Self;

    fn json_type(&self) -> JsonType;
    fn view(&self) -> JsonRef<'_, Self>;

    #[inline]
    fn from_i32(value: i32) -> Self {
        Self::from_number(BigDecimal::from(value))
    }
    #[inline]
    fn from_i64(value: i64) -> Self {
        Self::from_number(BigDecimal::from(value))
    }
    #[inline]
    fn from_u64(value: u64) -> Self {
        Self::from_number(BigDecimal::from(value))
    }
    #[inline]
    fn from_big_int(value: BigInt) -> Self {
        Self::from_number(BigDecimal::new(value, 0))
    }
    /// Returns `None` if `value` has no decimal representation, i.e. it is NaN or infinite.
    fn from_f64(value: f64) -> Option<Self> {
        if !value.is_finite() {
            return None;
        }
        // Shortest round-trip text, so `0.1` stays `0.1`
        value
            .to_string()
            .parse::<BigDecimal>()
            .ok()
            .map(Self::from_number)
    }
    /// Returns `None` if `value` has no decimal representation, i.e. it is NaN or infinite.
    fn from_f32(value: f32) -> Option<Self> {
        if !value.is_finite() {
            return None;
        }
        value
            .to_string()
            .parse::<BigDecimal>()
            .ok()
            .map(Self::from_number)
    }

    #[inline]
    fn is_null(&self) -> bool {
        self.json_type() == JsonType::Null
    }
    #[inline]
    fn is_bool(&self) -> bool {
        self.json_type() == JsonType::Boolean
    }
    #[inline]
    fn is_number(&self) -> bool {
        self.json_type() == JsonType::Number
    }
    #[inline]
    fn is_string(&self) -> bool {
        self.json_type() == JsonType::String
    }
    #[inline]
    fn is_array(&self) -> bool {
        self.json_type() == JsonType::Array
    }
    #[inline]
    fn is_object(&self) -> bool {
        self.json_type() == JsonType::Object
    }
    /// Neither an array nor an object.
    #[inline]
    fn is_atomic(&self) -> bool {
        self.json_type().is_atomic()
    }
    /// Either an array or an object.
    #[inline]
    fn is_associative(&self) -> bool {
        !self.is_atomic()
    }

    fn as_null(&self) -> Option<()> {
        self.is_null().then_some(())
    }
    fn as_bool(&self) -> Option<bool> {
        match self.view() {
            JsonRef::Bool(value) => Some(value),
            _ => None,
        }
    }
    fn as_number(&self) -> Option<BigDecimal> {
        match self.view() {
            JsonRef::Number(value) => Some(value.into_owned()),
            _ => None,
        }
    }
    fn as_str(&self) -> Option<&str> {
        match self.view() {
            JsonRef::String(value) => Some(value),
            _ => None,
        }
    }
    fn as_array(&self) -> Option<&[Self]> {
        match self.view() {
            JsonRef::Array(items) => Some(items),
            _ => None,
        }
    }
    fn as_object(&self) -> Option<&Self::Object> {
        match self.view() {
            JsonRef::Object(object) => Some(object),
            _ => None,
        }
    }

    #[must_use]
    fn map_bool(self, f: impl FnOnce(bool) -> bool) -> Self {
        match self.as_bool() {
            Some(value) => Self::from_bool(f(value)),
            None => self,
        }
    }
    #[must_use]
    fn map_number(self, f: impl FnOnce(BigDecimal) -> BigDecimal) -> Self {
        match self.as_number() {
            Some(value) => Self::from_number(f(value)),
            None => self,
        }
    }
    #[must_use]
    fn map_string(self, f: impl FnOnce(String) -> String) -> Self {
        let mapped = self.as_str().map(|value| f(value.to_owned()));
        match mapped {
            Some(value) => Self::from_string(value),
            None => self,
        }
    }
    #[must_use]
    fn map_array(self, f: impl FnOnce(Vec<Self>) -> Vec<Self>) -> Self {
        let mapped = self.as_array().map(|items| f(items.to_vec()));
        match mapped {
            Some(items) => Self::array_of(items),
            None => self,
        }
    }
    #[must_use]
    fn map_object(self, f: impl FnOnce(Self::Object) -> Self::Object) -> Self {
        let mapped = self.as_object().map(|object| f(object.clone()));
        match mapped {
            Some(object) => Self::from_object(object),
            None => self,
        }
    }

    /// Reduce the value with exactly one of the given functions, chosen by its shape.
    fn fold<B>(
        &self,
        on_null: impl FnOnce() -> B,
        on_bool: impl FnOnce(bool) -> B,
        on_number: impl FnOnce(BigDecimal) -> B,
        on_string: impl FnOnce(&str) -> B,
        on_array: impl FnOnce(&[Self]) -> B,
        on_object: impl FnOnce(&Self::Object) -> B,
    ) -> B {
        match self.view() {
            JsonRef::Null => on_null(),
            JsonRef::Bool(value) => on_bool(value),
            JsonRef::Number(value) => on_number(value.into_owned()),
            JsonRef::String(value) => on_string(value),
            JsonRef::Array(items) => on_array(items),
            JsonRef::Object(object) => on_object(object),
        }
    }

    /// Like [`Json::fold`], with every atomic shape collapsed into `or_else`.
    fn array_or_object<B>(
        &self,
        or_else: B,
        on_array: impl FnOnce(&[Self]) -> B,
        on_object: impl FnOnce(&Self::Object) -> B,
    ) -> B {
        match self.view() {
            JsonRef::Array(items) => on_array(items),
            JsonRef::Object(object) => on_object(object),
            JsonRef::Null
            | JsonRef::Bool(_)
            | JsonRef::Number(_)
            | JsonRef::String(_) => or_else,
        }
    }
}
