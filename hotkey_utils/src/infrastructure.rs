use std::fmt::{Debug, Display};

/// Panics with a lazily built context message when a setup step that must succeed fails
pub trait WithExpect<T> {
    fn with_expect<C: Display>(self, context: impl FnOnce() -> C) -> T;
}

impl<T, E: Debug> WithExpect<T> for Result<T, E> {
    fn with_expect<C: Display>(self, context: impl FnOnce() -> C) -> T {
        self.unwrap_or_else(|error| panic!("{}: {error:?}", context()))
    }
}
