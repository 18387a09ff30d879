//! Binary min-heap priority queue over a single contiguous array.
//!
//! [`PQueue`] stores `(item, priority)` entries by value in one `Vec`,
//! arranged as an implicit binary tree. The smallest priority is always at
//! the front.
//!
//! ```text
//! slot:      0     1     2     3     4
//!          [p=1] [p=3] [p=2] [p=7] [p=4]
//!
//!                  1
//!                /   \
//!               3     2
//!              / \
//!             7   4
//! ```
//!
//! - Children of slot `i` are `2i + 1` and `2i + 2`
//! - Parent of slot `i` is `(i - 1) / 2`
//! - Every parent's priority is `<=` its children's
//!
//! # Quick Start
//!
//! ```
//! use nexus_pqueue::PQueue;
//!
//! let mut pq: PQueue = PQueue::new();
//!
//! pq.push(5, 3);
//! pq.push(7, 1);
//! pq.push(9, 2);
//!
//! // Array order, not sorted order
//! assert_eq!(pq.to_string(), "[(7,1),(5,3),(9,2)]");
//!
//! assert_eq!(pq.extract_min(), 7);
//! assert_eq!(pq.extract_min(), 9);
//! assert_eq!(pq.extract_min(), 5);
//! ```
//!
//! # Priorities
//!
//! Priorities are [`i32`] and must be strictly positive. A non-positive
//! priority is a contract violation:
//!
//! | Operation | On violation |
//! |-----------|--------------|
//! | [`PQueue::push`] | panics |
//! | [`PQueue::try_push`] | `Err(InvalidPriority)`, item handed back |
//! | [`PQueue::extract_min`] on empty | panics |
//! | [`PQueue::try_extract_min`] on empty | `Err(Empty)` |
//! | [`PQueue::pop`] on empty | `None` |
//!
//! Equal priorities are not ordered among themselves. The queue is not
//! stable.
//!
//! # Growth
//!
//! Capacity starts at 1 and doubles when an insert would exceed it. Removal
//! never releases memory; use [`PQueue::clear`] to reuse the allocation.
//!
//! # Threading
//!
//! No internal synchronization. Wrap the queue in a `Mutex` to share it.
//!
//! # Logging
//!
//! Capacity growth is reported through the [`log`] facade at `trace`
//! level, rejected checked operations at `debug` level. Install any
//! `log` backend to see them.

#![warn(missing_docs)]

pub mod entry;
pub mod error;
pub mod pqueue;

pub use entry::{Entry, Priority};
pub use error::{Empty, InvalidPriority};
pub use pqueue::{DrainWhile, Iter, PQueue};
