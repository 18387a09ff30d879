//! Heap entries.

use core::fmt;

/// Priority of an entry. Lower values are extracted first.
///
/// Must be strictly positive when inserted.
pub type Priority = i32;

/// An item paired with its priority.
///
/// Entries are stored by value in the queue's backing array and handed
/// back whole by [`PQueue::pop`](crate::PQueue::pop).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Entry<T> {
    priority: Priority,
    item: T,
}

impl<T> Entry<T> {
    #[inline]
    pub(crate) const fn new(item: T, priority: Priority) -> Self {
        Self { priority, item }
    }

    /// Returns the entry's priority.
    #[inline]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns a reference to the item.
    #[inline]
    pub const fn item(&self) -> &T {
        &self.item
    }

    /// Consumes the entry, returning the item.
    #[inline]
    pub fn into_item(self) -> T {
        self.item
    }

    /// Consumes the entry, returning `(item, priority)`.
    #[inline]
    pub fn into_parts(self) -> (T, Priority) {
        (self.item, self.priority)
    }
}

/// Renders as `(item,priority)`.
impl<T: fmt::Display> fmt::Display for Entry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.item, self.priority)
    }
}
