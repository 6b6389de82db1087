use std::convert::Infallible;

use crate::Error;

/// How many more nested arrays an operation may descend into.
pub(crate) trait Budget: Copy {
    type Error;

    fn descend(self) -> Result<Self, Self::Error>;
}

/// No limit. Depth is the caller's concern.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Unbounded;

impl Budget for Unbounded {
    type Error = Infallible;

    #[inline]
    fn descend(self) -> Result<Self, Infallible> {
        Ok(self)
    }
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct Limited {
    remaining: usize,
    limit: usize,
}

impl Limited {
    pub(crate) fn new(limit: usize) -> Limited {
        Limited {
            remaining: limit,
            limit,
        }
    }
}

impl Budget for Limited {
    type Error = Error;

    #[inline]
    fn descend(self) -> Result<Self, Error> {
        if let Some(remaining) = self.remaining.checked_sub(1) {
            Ok(Limited { remaining, ..self })
        } else {
            tracing::debug!(limit = self.limit, "recursion limit exceeded");
            Err(Error::recursion_limit(self.limit))
        }
    }
}

#[inline]
pub(crate) fn unwrap_infallible<T>(result: Result<T, Infallible>) -> T {
    match result {
        Ok(value) => value,
        Err(never) => match never {},
    }
}
