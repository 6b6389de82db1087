#[cfg(any(test, feature = "serde_json"))]
mod serde_json;
