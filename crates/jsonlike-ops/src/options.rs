use std::{borrow::Cow, cmp::Ordering};

use bigdecimal::BigDecimal;
use jsonlike::Json;

use crate::{
    arithmetic::{self, Operation},
    budget::Limited,
    coerce,
    compare::{self, Predicate},
    equality, Error,
};

/// Nesting depth an [`Engine`] accepts unless configured otherwise.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Configuration for an [`Engine`].
#[derive(Debug, Clone)]
pub struct EngineOptions {
    max_depth: usize,
}

impl Default for EngineOptions {
    fn default() -> Self {
        EngineOptions {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl EngineOptions {
    /// Set how many levels of nested arrays operations may descend into.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
    #[must_use]
    pub fn build(&self) -> Engine {
        Engine {
            max_depth: self.max_depth,
        }
    }
}

/// The operators of this crate with a bound on recursion.
///
/// Converting arrays recurses into their elements. The free functions leave it to the caller to
/// pass reasonably shallow values; an `Engine` returns [`Error::RecursionLimitExceeded`] instead.
///
/// ```rust
/// use jsonlike::{Json, JsonValue};
///
/// let engine = jsonlike_ops::options().with_max_depth(1).build();
///
/// let shallow = JsonValue::array_of([JsonValue::from_i32(1)]);
/// assert_eq!(engine.coerce_to_string(&shallow), Ok("1".to_string()));
///
/// let deep = JsonValue::array_of([shallow]);
/// assert!(engine.coerce_to_string(&deep).is_err());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Engine {
    max_depth: usize,
}

impl Default for Engine {
    fn default() -> Self {
        EngineOptions::default().build()
    }
}

impl Engine {
    #[must_use]
    pub fn new() -> Engine {
        Engine::default()
    }
    #[must_use]
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }
    fn budget(&self) -> Limited {
        Limited::new(self.max_depth)
    }

    /// See [`coerce_to_number`](crate::coerce_to_number).
    ///
    /// # Errors
    ///
    /// If `value` nests arrays deeper than the configured limit.
    pub fn coerce_to_number<J: Json>(&self, value: &J) -> Result<Option<BigDecimal>, Error> {
        coerce::to_number(value, self.budget())
    }
    /// See [`coerce_to_string`](crate::coerce_to_string).
    ///
    /// # Errors
    ///
    /// If `value` nests arrays deeper than the configured limit.
    pub fn coerce_to_string<J: Json>(&self, value: &J) -> Result<String, Error> {
        coerce::to_string(value, self.budget())
    }
    /// See [`coerce_to_primitive`](crate::coerce_to_primitive).
    ///
    /// # Errors
    ///
    /// If `value` nests arrays deeper than the configured limit.
    pub fn coerce_to_primitive<'a, J: Json>(&self, value: &'a J) -> Result<Cow<'a, J>, Error> {
        coerce::to_primitive(value, self.budget())
    }
    /// See [`convert_types`](crate::convert_types).
    ///
    /// # Errors
    ///
    /// If an operand nests arrays deeper than the configured limit.
    pub fn convert_types<'a, J: Json>(
        &self,
        left: &'a J,
        right: &'a J,
    ) -> Result<Option<(Cow<'a, J>, Cow<'a, J>)>, Error> {
        equality::convert(left, right, self.budget())
    }
    /// See [`loose_equality`](crate::loose_equality).
    ///
    /// # Errors
    ///
    /// If an operand nests arrays deeper than the configured limit.
    pub fn loose_equality<J: Json>(&self, left: &J, right: &J) -> Result<bool, Error> {
        equality::loosely_equal(left, right, self.budget())
    }
    /// See [`equal`](crate::equal).
    ///
    /// # Errors
    ///
    /// If an operand nests arrays deeper than the configured limit.
    pub fn equal<J: Json>(&self, left: &J, right: &J) -> Result<J, Error> {
        self.loose_equality(left, right).map(J::from_bool)
    }
    /// See [`not_equal`](crate::not_equal).
    ///
    /// # Errors
    ///
    /// If an operand nests arrays deeper than the configured limit.
    pub fn not_equal<J: Json>(&self, left: &J, right: &J) -> Result<J, Error> {
        self.loose_equality(left, right).map(|equal| J::from_bool(!equal))
    }
    /// See [`less_than`](crate::less_than).
    ///
    /// # Errors
    ///
    /// If an operand nests arrays deeper than the configured limit.
    pub fn less_than<J: Json>(&self, left: &J, right: &J) -> Result<J, Error> {
        self.compare(left, right, Ordering::is_lt)
    }
    /// See [`less_than_or_equal`](crate::less_than_or_equal).
    ///
    /// # Errors
    ///
    /// If an operand nests arrays deeper than the configured limit.
    pub fn less_than_or_equal<J: Json>(&self, left: &J, right: &J) -> Result<J, Error> {
        self.compare(left, right, Ordering::is_le)
    }
    /// See [`greater_than`](crate::greater_than).
    ///
    /// # Errors
    ///
    /// If an operand nests arrays deeper than the configured limit.
    pub fn greater_than<J: Json>(&self, left: &J, right: &J) -> Result<J, Error> {
        self.compare(left, right, Ordering::is_gt)
    }
    /// See [`greater_than_or_equal`](crate::greater_than_or_equal).
    ///
    /// # Errors
    ///
    /// If an operand nests arrays deeper than the configured limit.
    pub fn greater_than_or_equal<J: Json>(&self, left: &J, right: &J) -> Result<J, Error> {
        self.compare(left, right, Ordering::is_ge)
    }
    /// See [`plus`](crate::plus).
    ///
    /// # Errors
    ///
    /// If an operand nests arrays deeper than the configured limit.
    pub fn plus<J: Json>(&self, left: &J, right: &J) -> Result<J, Error> {
        arithmetic::add(left, right, self.budget())
    }
    /// See [`minus`](crate::minus).
    ///
    /// # Errors
    ///
    /// If an operand nests arrays deeper than the configured limit.
    pub fn minus<J: Json>(&self, left: &J, right: &J) -> Result<J, Error> {
        self.arithmetic(left, right, "-", arithmetic::subtract)
    }
    /// See [`multiply`](crate::multiply).
    ///
    /// # Errors
    ///
    /// If an operand nests arrays deeper than the configured limit.
    pub fn multiply<J: Json>(&self, left: &J, right: &J) -> Result<J, Error> {
        self.arithmetic(left, right, "*", arithmetic::product)
    }
    /// See [`divide`](crate::divide).
    ///
    /// # Errors
    ///
    /// If an operand nests arrays deeper than the configured limit.
    pub fn divide<J: Json>(&self, left: &J, right: &J) -> Result<J, Error> {
        self.arithmetic(left, right, "/", arithmetic::quotient)
    }

    fn compare<J: Json>(&self, left: &J, right: &J, predicate: Predicate) -> Result<J, Error> {
        compare::compare(left, right, self.budget(), predicate).map(J::from_bool)
    }
    fn arithmetic<J: Json>(
        &self,
        left: &J,
        right: &J,
        operator: &'static str,
        operation: Operation,
    ) -> Result<J, Error> {
        arithmetic::arithmetic(left, right, self.budget(), operator, operation)
    }
}
