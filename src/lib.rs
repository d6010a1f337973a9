//! # unica
//!
//! In-place unique-element collections for Rust: chained hash sets,
//! insertion-ordered sets, and sorted-vector sets.
//!
//! ## Overview
//!
//! This library provides mutable, exclusively owned collections with
//! explicit storage strategies. The core is a single [`Set`](set::Set)
//! contract implemented three ways:
//!
//! - [`ChainedHashSet`](set::ChainedHashSet): bucket table with separately
//!   chained entries; no exposed order.
//! - [`InsertionOrderedSet`](set::InsertionOrderedSet): bucket table plus a
//!   doubly-linked insertion-order chain threaded through the same entries.
//! - [`SortedVecSet`](set::SortedVecSet): one sorted growable buffer;
//!   iteration is always ascending.
//!
//! A second module supplies plain sequential containers built on the same
//! storage techniques: [`ArrayList`](seq::ArrayList),
//! [`ArrayDeque`](seq::ArrayDeque), and [`LinkedDeque`](seq::LinkedDeque).
//!
//! All structures are single-threaded: the caller alone mutates them, and
//! there is no built-in synchronization. They are `Send`/`Sync` exactly when
//! their element type is.
//!
//! ## Feature Flags
//!
//! - `set`: the set implementations and the shared [`Set`](set::Set) contract
//! - `seq`: the sequential containers
//! - `fxhash`: hash elements with `rustc-hash`'s `FxHasher`
//! - `ahash`: hash elements with `ahash`'s `AHasher`
//! - `full`: enable all collection modules
//!
//! ## Example
//!
//! ```rust
//! use unica::prelude::*;
//!
//! let mut set = SortedVecSet::new();
//! set.insert(5);
//! set.insert(2);
//! set.insert(8);
//! assert!(!set.insert(2));
//!
//! let ascending: Vec<i32> = set.iter().copied().collect();
//! assert_eq!(ascending, vec![2, 5, 8]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use unica::prelude::*;
/// ```
pub mod prelude {

    pub use crate::error::{Error, Result};

    #[cfg(feature = "set")]
    pub use crate::set::*;

    #[cfg(feature = "seq")]
    pub use crate::seq::*;
}

pub mod error;

#[cfg(feature = "set")]
pub mod set;

#[cfg(feature = "seq")]
pub mod seq;
