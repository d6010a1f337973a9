//! Uniqueness-preserving set collections.
//!
//! This module provides three implementations of one shared contract, the
//! [`Set`] trait. Each implementation owns its entire storage and differs
//! only in storage strategy and in the order its iteration exposes:
//!
//! | Type | Storage | Iteration order |
//! |------|---------|-----------------|
//! | [`ChainedHashSet`] | bucket table, separately chained entries | unspecified |
//! | [`InsertionOrderedSet`] | bucket table + insertion-order chain | insertion order |
//! | [`SortedVecSet`] | one sorted growable buffer | ascending |
//!
//! The bulk operations ([`Set::contains_all`], [`Set::insert_all`],
//! [`Set::remove_all`], [`Set::retain_all`]) are defined once, as provided
//! methods written against the primitives, so they behave identically across
//! all three implementations.
//!
//! # Examples
//!
//! ```rust
//! use unica::set::{InsertionOrderedSet, Set};
//!
//! let mut set = InsertionOrderedSet::new();
//! set.insert("Apple");
//! set.insert("Banana");
//! set.insert("Orange");
//! assert!(!set.insert("Apple")); // duplicates are rejected
//!
//! let in_order: Vec<&str> = set.iter().copied().collect();
//! assert_eq!(in_order, vec!["Apple", "Banana", "Orange"]);
//! ```
//!
//! # Choosing a hash function
//!
//! The two hash-based sets compute 64-bit element hashes through a hasher
//! selected at compile time: the standard library's `DefaultHasher` by
//! default, `FxHasher` under the `fxhash` feature, or `AHasher` under the
//! `ahash` feature.

use std::hash::{Hash, Hasher};

use crate::error::Result;

pub mod chained;
pub mod ordered;
pub mod sorted;

pub use chained::ChainedHashSet;
pub use ordered::InsertionOrderedSet;
pub use sorted::SortedVecSet;

// =============================================================================
// Constants
// =============================================================================

/// Initial bucket count of the hash-based sets. Must be a power of two so
/// that masking produces a valid index for any hash value.
pub(crate) const DEFAULT_BUCKET_COUNT: usize = 16;

/// Load factor threshold, expressed as a fraction: the bucket table grows
/// once `len * DEN > capacity * NUM` would be violated by an insertion.
pub(crate) const MAX_LOAD_NUMERATOR: usize = 3;
/// Denominator of the load factor threshold.
pub(crate) const MAX_LOAD_DENOMINATOR: usize = 4;

static_assertions::const_assert!(DEFAULT_BUCKET_COUNT.is_power_of_two());

// =============================================================================
// Hash computation
// =============================================================================

#[cfg(feature = "fxhash")]
type SelectedHasher = rustc_hash::FxHasher;

#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
type SelectedHasher = ahash::AHasher;

#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
type SelectedHasher = std::collections::hash_map::DefaultHasher;

/// Computes the 64-bit hash of an element with the selected hasher.
pub(crate) fn hash_element<E: Hash + ?Sized>(element: &E) -> u64 {
    let mut hasher = SelectedHasher::default();
    element.hash(&mut hasher);
    hasher.finish()
}

/// Folds the high bits of a hash into the low bits used for indexing, so
/// that tables of modest capacity still see the whole hash.
pub(crate) const fn spread(hash: u64) -> u64 {
    hash ^ (hash >> 16)
}

/// Maps a hash to a bucket index. `capacity` must be a power of two.
#[allow(clippy::cast_possible_truncation)]
pub(crate) const fn bucket_index(hash: u64, capacity: usize) -> usize {
    (spread(hash) & (capacity as u64 - 1)) as usize
}

// =============================================================================
// The shared contract
// =============================================================================

/// A mutable collection of unique elements.
///
/// All implementations guarantee that no two contained elements compare
/// equal, that `len` is maintained in O(1), and that a failed operation
/// leaves the set unmodified. Which *order* iteration exposes — none,
/// insertion order, or ascending order — is part of each implementation's
/// own contract.
///
/// The insertion primitive is fallible because [`SortedVecSet`] can fail on
/// elements that do not order against the stored ones; the hash-based
/// implementations never return an error.
///
/// # Examples
///
/// ```rust
/// use unica::set::{ChainedHashSet, Set};
///
/// fn census<E: PartialEq, S: Set<E>>(set: &S) -> (usize, bool) {
///     (set.len(), set.is_empty())
/// }
///
/// let mut set = ChainedHashSet::new();
/// set.insert(1);
/// assert_eq!(census(&set), (1, false));
/// ```
pub trait Set<E: PartialEq> {
    /// Borrowing iterator over the set, yielding elements in the
    /// implementation's defined order.
    type Iter<'a>: Iterator<Item = &'a E>
    where
        Self: 'a,
        E: 'a;

    /// Inserts an element, rejecting duplicates.
    ///
    /// Returns `Ok(true)` if the set changed, `Ok(false)` if an equal
    /// element was already present. An `Err` leaves the set unmodified.
    fn try_insert(&mut self, element: E) -> Result<bool>;

    /// Removes the element equal to `element`, if present.
    ///
    /// Returns whether an element was removed. Absence is a normal outcome,
    /// never an error.
    fn remove(&mut self, element: &E) -> bool;

    /// Returns whether an element equal to `element` is present.
    fn contains(&self, element: &E) -> bool;

    /// Returns the number of contained elements.
    fn len(&self) -> usize;

    /// Removes every element, keeping the collection usable.
    fn clear(&mut self);

    /// Keeps only the elements for which `keep` returns `true`.
    ///
    /// Traversal visits every element exactly once, even while elements are
    /// being unlinked, so the predicate sees neither skipped nor repeated
    /// elements.
    fn retain<F>(&mut self, keep: F)
    where
        F: FnMut(&E) -> bool,
        Self: Sized;

    /// Returns a borrowing iterator in the implementation's defined order.
    fn iter(&self) -> Self::Iter<'_>;

    /// Returns `true` if the set contains no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` iff every element of the sequence is present.
    ///
    /// Short-circuits on the first miss. Duplicates in the input are probed
    /// again and change nothing.
    fn contains_all<'a, I>(&self, elements: I) -> bool
    where
        E: 'a,
        I: IntoIterator<Item = &'a E>,
        Self: Sized,
    {
        elements.into_iter().all(|element| self.contains(element))
    }

    /// Inserts every element of the sequence, in iteration order.
    ///
    /// Returns `Ok(true)` iff at least one insertion changed the set. Each
    /// element is inserted by its own [`try_insert`](Self::try_insert) call;
    /// if one of them fails, elements already inserted stay in place and the
    /// failing element is not.
    fn insert_all<I>(&mut self, elements: I) -> Result<bool>
    where
        I: IntoIterator<Item = E>,
        Self: Sized,
    {
        let mut changed = false;
        for element in elements {
            changed |= self.try_insert(element)?;
        }
        Ok(changed)
    }

    /// Removes every element of the set that appears in the sequence.
    ///
    /// Equivalent to probing the set once per input element; the set's own
    /// storage is never traversed while it is being mutated. Returns whether
    /// anything was removed.
    fn remove_all<'a, I>(&mut self, elements: I) -> bool
    where
        E: 'a,
        I: IntoIterator<Item = &'a E>,
        Self: Sized,
    {
        let mut changed = false;
        for element in elements {
            changed |= self.remove(element);
        }
        changed
    }

    /// Removes every element of the set that is absent from the sequence.
    ///
    /// The input must be restartable (a `Clone`-able iterator): membership of
    /// each retained candidate is decided by rescanning it. Returns whether
    /// anything was removed.
    fn retain_all<'a, I>(&mut self, elements: I) -> bool
    where
        E: 'a,
        I: IntoIterator<Item = &'a E>,
        I::IntoIter: Clone,
        Self: Sized,
    {
        let kept = elements.into_iter();
        let before = self.len();
        self.retain(|element| kept.clone().any(|candidate| candidate == element));
        before != self.len()
    }
}
