//! Sequential containers.
//!
//! Plain linear-storage collections, independent of the set module (and of
//! each other): position is meaningful, duplicates are allowed, and every
//! operation is simple index or link bookkeeping.
//!
//! - [`ArrayList`]: growable array with positional insert/remove
//! - [`ArrayDeque`]: double-ended queue over a circular buffer
//! - [`LinkedDeque`]: double-ended queue over doubly-linked slot storage
//!
//! All three iterate front to back and render as a bracketed,
//! comma-separated listing. Positional operations come in fallible `try_`
//! forms returning [`Error::OutOfBounds`](crate::error::Error::OutOfBounds)
//! and convenience forms that panic; absence on value-based operations is a
//! boolean or `None`, never an error.
//!
//! # Examples
//!
//! ```rust
//! use unica::seq::ArrayDeque;
//!
//! let mut deque = ArrayDeque::new();
//! deque.push_back(2);
//! deque.push_back(3);
//! deque.push_front(1);
//! assert_eq!(deque.to_string(), "[1, 2, 3]");
//! assert_eq!(deque.pop_front(), Some(1));
//! ```

pub mod array_deque;
pub mod array_list;
pub mod linked_deque;

pub use array_deque::ArrayDeque;
pub use array_list::ArrayList;
pub use linked_deque::LinkedDeque;

/// Initial capacity of the array-backed sequential containers.
pub(crate) const DEFAULT_CAPACITY: usize = 10;
