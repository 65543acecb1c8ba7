use std::error::Error;
use std::fmt::{self, Display, Formatter};

/// Returned by operations that require at least one element
/// (`first`, `last`, `pop_first`) when the list holds none.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyError;

impl Display for EmptyError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "empty container")
    }
}

impl Error for EmptyError {}
