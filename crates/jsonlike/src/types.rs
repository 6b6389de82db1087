use core::fmt;

/// The six shapes a JSON value can take.
#[derive(Clone, Copy, Eq, PartialEq, Hash)]
pub enum JsonType {
    Null,
    Boolean,
    Number,
    String,
    Array,
    Object,
}

impl JsonType {
    /// Whether values of this type contain no other values.
    #[inline]
    #[must_use]
    pub const fn is_atomic(self) -> bool {
        !matches!(self, JsonType::Array | JsonType::Object)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            JsonType::Null => "null",
            JsonType::Boolean => "boolean",
            JsonType::Number => "number",
            JsonType::String => "string",
            JsonType::Array => "array",
            JsonType::Object => "object",
        }
    }
}

impl fmt::Debug for JsonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for JsonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::JsonType;
    use test_case::test_case;

    #[test_case(JsonType::Null, "null", true)]
    #[test_case(JsonType::Boolean, "boolean", true)]
    #[test_case(JsonType::Number, "number", true)]
    #[test_case(JsonType::String, "string", true)]
    #[test_case(JsonType::Array, "array", false)]
    #[test_case(JsonType::Object, "object", false)]
    fn names_and_atomicity(ty: JsonType, name: &str, atomic: bool) {
        assert_eq!(ty.to_string(), name);
        assert_eq!(format!("{ty:?}"), name);
        assert_eq!(ty.is_atomic(), atomic);
    }
}
