// nexus-pqueue/src/error.rs

//! Error types for the checked queue operations.

use core::fmt;

use crate::Priority;

/// Priority rejected on insert because it is not strictly positive.
///
/// Carries the rejected item so the caller can recover it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidPriority<T> {
    /// The item that could not be inserted.
    pub item: T,
    /// The offending priority.
    pub priority: Priority,
}

impl<T> InvalidPriority<T> {
    /// Returns the item that could not be inserted.
    pub fn into_inner(self) -> T {
        self.item
    }
}

impl<T> fmt::Display for InvalidPriority<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "priority {} must be > 0", self.priority)
    }
}

impl<T: fmt::Debug> std::error::Error for InvalidPriority<T> {}

/// Queue had no entries to extract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Empty;

impl fmt::Display for Empty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "queue is empty")
    }
}

impl std::error::Error for Empty {}
