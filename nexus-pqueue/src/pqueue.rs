//! PQueue - a binary min-heap over one contiguous array.
//!
//! Entries live by value in a `Vec` laid out as an implicit binary tree:
//! the children of slot `i` are `2i + 1` and `2i + 2`, its parent is
//! `(i - 1) / 2`. Every parent's priority is `<=` both of its children's,
//! so the minimum is always at slot 0.

use core::fmt;
use core::iter::FusedIterator;
use core::slice;

use log::{debug, trace};

use crate::{Empty, Entry, InvalidPriority, Priority};

/// A min-priority queue backed by a binary heap.
///
/// Items are inserted with a strictly positive [`Priority`] and extracted
/// smallest priority first. Entries with equal priority come out in no
/// particular order.
///
/// Capacity starts at 1 and doubles whenever an insert would exceed it, so
/// inserts are amortized O(1) plus the O(log n) sift. Removal never shrinks
/// the allocation.
///
/// # Example
///
/// ```
/// use nexus_pqueue::PQueue;
///
/// let mut pq: PQueue = PQueue::new();
///
/// pq.push(5, 3);
/// pq.push(7, 1);
/// pq.push(9, 2);
///
/// assert_eq!(pq.len(), 3);
/// assert_eq!(*pq.peek_item(), 7);
/// assert_eq!(pq.peek_priority(), 1);
///
/// assert_eq!(pq.extract_min(), 7);
/// assert_eq!(pq.extract_min(), 9);
/// assert_eq!(pq.extract_min(), 5);
/// assert!(pq.is_empty());
/// ```
///
/// # Contract violations
///
/// Inserting a priority `<= 0`, or extracting/peeking an empty queue,
/// panics. Use [`try_push`](Self::try_push), [`try_extract_min`](Self::try_extract_min),
/// [`pop`](Self::pop) or [`peek`](Self::peek) to handle these cases without
/// panicking.
#[derive(Debug)]
pub struct PQueue<T = i32> {
    /// Heap-ordered entries.
    entries: Vec<Entry<T>>,
    /// Logical slot count. Always `>= entries.len()`, grows by doubling.
    capacity: usize,
}

impl<T: Clone> Clone for PQueue<T> {
    fn clone(&self) -> Self {
        let mut entries = Vec::with_capacity(self.capacity);
        entries.extend_from_slice(&self.entries);
        Self {
            entries,
            capacity: self.capacity,
        }
    }
}

impl<T> Default for PQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> PQueue<T> {
    /// Creates an empty queue with capacity 1.
    #[inline]
    pub fn new() -> Self {
        Self::with_capacity(1)
    }

    /// Creates an empty queue with room for `capacity` entries.
    ///
    /// A capacity of 0 is raised to 1.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Returns the number of entries in the queue.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the queue is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of slots available before the next doubling.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    // ========================================================================
    // Insert operations
    // ========================================================================

    /// Inserts `item` with the given priority.
    ///
    /// # Panics
    ///
    /// Panics if `priority <= 0`.
    #[inline]
    pub fn push(&mut self, item: T, priority: Priority) {
        assert!(priority > 0, "priority {priority} must be > 0");
        self.insert(item, priority);
    }

    /// Inserts `item` with the given priority.
    ///
    /// # Errors
    ///
    /// Returns `Err(InvalidPriority { item, priority })` if `priority <= 0`.
    /// The queue is left untouched.
    pub fn try_push(&mut self, item: T, priority: Priority) -> Result<(), InvalidPriority<T>> {
        if priority <= 0 {
            debug!("rejected insert with priority {priority}");
            return Err(InvalidPriority { item, priority });
        }
        self.insert(item, priority);
        Ok(())
    }

    fn insert(&mut self, item: T, priority: Priority) {
        if self.entries.len() == self.capacity {
            self.grow();
        }

        let pos = self.entries.len();
        self.entries.push(Entry::new(item, priority));
        self.sift_up(pos);
    }

    #[cold]
    fn grow(&mut self) {
        let old = self.capacity;
        let new = old.saturating_mul(2);
        self.entries.reserve_exact(new - self.entries.len());
        self.capacity = new;
        trace!("pqueue capacity {old} -> {new}");
    }

    // ========================================================================
    // Remove operations
    // ========================================================================

    /// Removes and returns the item with the smallest priority.
    ///
    /// # Panics
    ///
    /// Panics if the queue is empty.
    #[inline]
    pub fn extract_min(&mut self) -> T {
        match self.pop() {
            Some(entry) => entry.into_item(),
            None => panic!("extract_min on empty queue"),
        }
    }

    /// Removes and returns the item with the smallest priority.
    ///
    /// # Errors
    ///
    /// Returns `Err(Empty)` if the queue is empty.
    pub fn try_extract_min(&mut self) -> Result<T, Empty> {
        match self.pop() {
            Some(entry) => Ok(entry.into_item()),
            None => {
                debug!("rejected extract_min on empty queue");
                Err(Empty)
            }
        }
    }

    /// Removes and returns the minimum entry, item and priority together.
    ///
    /// Returns `None` if the queue is empty.
    pub fn pop(&mut self) -> Option<Entry<T>> {
        if self.entries.is_empty() {
            return None;
        }

        // Last entry moves into the root.
        let min = self.entries.swap_remove(0);
        self.sift_down(0);
        Some(min)
    }

    /// Removes all entries. Capacity is kept.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Removes minimum entries while the predicate returns `true`.
    ///
    /// The predicate receives the current minimum. Entries are yielded in
    /// priority order; draining stops at the first entry the predicate
    /// rejects, which stays in the queue.
    ///
    /// # Example
    ///
    /// ```
    /// use nexus_pqueue::PQueue;
    ///
    /// let mut pq: PQueue<&str> = PQueue::new();
    /// pq.push("a", 1);
    /// pq.push("e", 5);
    /// pq.push("c", 3);
    /// pq.push("g", 7);
    ///
    /// let due: Vec<_> = pq
    ///     .drain_while(|e| e.priority() < 4)
    ///     .map(|e| e.into_item())
    ///     .collect();
    /// assert_eq!(due, vec!["a", "c"]);
    /// assert_eq!(pq.peek_priority(), 5);
    /// ```
    #[inline]
    pub fn drain_while<F>(&mut self, pred: F) -> DrainWhile<'_, T, F>
    where
        F: FnMut(&Entry<T>) -> bool,
    {
        DrainWhile { queue: self, pred }
    }

    /// Consumes the queue, returning its entries in extraction order.
    pub fn into_sorted_vec(mut self) -> Vec<Entry<T>> {
        let mut sorted = Vec::with_capacity(self.len());
        while let Some(entry) = self.pop() {
            sorted.push(entry);
        }
        sorted
    }

    // ========================================================================
    // Access
    // ========================================================================

    /// Returns the minimum entry without removing it.
    ///
    /// Returns `None` if the queue is empty.
    #[inline]
    pub fn peek(&self) -> Option<&Entry<T>> {
        self.entries.first()
    }

    /// Returns the smallest priority in the queue.
    ///
    /// # Panics
    ///
    /// Panics if the queue is empty.
    #[inline]
    pub fn peek_priority(&self) -> Priority {
        self.root("peek_priority").priority()
    }

    /// Returns the item with the smallest priority.
    ///
    /// # Panics
    ///
    /// Panics if the queue is empty.
    #[inline]
    pub fn peek_item(&self) -> &T {
        self.root("peek_item").item()
    }

    #[inline]
    fn root(&self, op: &str) -> &Entry<T> {
        match self.entries.first() {
            Some(entry) => entry,
            None => panic!("{op} on empty queue"),
        }
    }

    /// Returns the entries in heap array order.
    ///
    /// Slot 0 is the minimum; the rest follow the implicit tree layout,
    /// not sorted order.
    #[inline]
    pub fn as_slice(&self) -> &[Entry<T>] {
        &self.entries
    }

    /// Iterates over the entries in heap array order.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.entries.iter(),
        }
    }

    // ========================================================================
    // Heap maintenance
    // ========================================================================

    /// Moves the entry at `pos` up until its parent is no larger or it
    /// reaches the root.
    fn sift_up(&mut self, mut pos: usize) {
        while pos > 0 {
            let parent = (pos - 1) / 2;
            if self.entries[pos].priority() < self.entries[parent].priority() {
                self.entries.swap(pos, parent);
                pos = parent;
            } else {
                break;
            }
        }
    }

    /// Moves the entry at `pos` down, swapping with the smaller child, until
    /// neither child is smaller or it reaches a leaf.
    fn sift_down(&mut self, mut pos: usize) {
        let len = self.entries.len();

        loop {
            let left = 2 * pos + 1;
            if left >= len {
                break;
            }

            let right = left + 1;
            let smaller = if right < len
                && self.entries[right].priority() < self.entries[left].priority()
            {
                right
            } else {
                left
            };

            if self.entries[pos].priority() > self.entries[smaller].priority() {
                self.entries.swap(pos, smaller);
                pos = smaller;
            } else {
                break;
            }
        }
    }
}

impl<T: fmt::Display> PQueue<T> {
    /// Writes the array-order rendering to stdout, followed by a newline.
    pub fn print(&self) {
        println!("{self}");
    }
}

/// Renders every entry in heap array order as `[(item,priority),...]`.
///
/// This is a debugging aid, not a stable format.
impl<T: fmt::Display> fmt::Display for PQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{entry}")?;
        }
        f.write_str("]")
    }
}

/// Pushes every `(item, priority)` pair.
///
/// # Panics
///
/// Panics on the first priority `<= 0`; pairs before it stay inserted.
impl<T> Extend<(T, Priority)> for PQueue<T> {
    fn extend<I: IntoIterator<Item = (T, Priority)>>(&mut self, iter: I) {
        for (item, priority) in iter {
            self.push(item, priority);
        }
    }
}

impl<T> FromIterator<(T, Priority)> for PQueue<T> {
    fn from_iter<I: IntoIterator<Item = (T, Priority)>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}

impl<'a, T> IntoIterator for &'a PQueue<T> {
    type Item = &'a Entry<T>;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

/// Iterator over entries in heap array order.
///
/// Created by [`PQueue::iter`].
#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
    inner: slice::Iter<'a, Entry<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a Entry<T>;

    #[inline]
    fn next(&mut self) -> Option<&'a Entry<T>> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// An iterator that pops minimum entries while a predicate holds.
///
/// Created by [`PQueue::drain_while`].
pub struct DrainWhile<'a, T, F>
where
    F: FnMut(&Entry<T>) -> bool,
{
    queue: &'a mut PQueue<T>,
    pred: F,
}

impl<T: fmt::Debug, F> fmt::Debug for DrainWhile<'_, T, F>
where
    F: FnMut(&Entry<T>) -> bool,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DrainWhile")
            .field("queue", &self.queue)
            .finish_non_exhaustive()
    }
}

impl<T, F> Iterator for DrainWhile<'_, T, F>
where
    F: FnMut(&Entry<T>) -> bool,
{
    type Item = Entry<T>;

    fn next(&mut self) -> Option<Entry<T>> {
        let min = self.queue.peek()?;
        if (self.pred)(min) {
            self.queue.pop()
        } else {
            None
        }
    }
}
