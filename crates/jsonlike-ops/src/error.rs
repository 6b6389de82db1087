use core::fmt;

/// Errors raised by a depth-limited [`Engine`](crate::Engine).
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// The input nests arrays deeper than the configured limit.
    RecursionLimitExceeded { limit: usize },
}

impl Error {
    pub(crate) fn recursion_limit(limit: usize) -> Error {
        Error::RecursionLimitExceeded { limit }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::RecursionLimitExceeded { limit } => {
                write!(f, "Nesting exceeds the recursion limit of {limit}")
            }
        }
    }
}

impl std::error::Error for Error {}
