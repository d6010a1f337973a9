//! Error types shared by all collections in this library.
//!
//! Failures are local to a single call: an operation that returns an
//! [`Error`] leaves its receiver unmodified, and the collection stays fully
//! usable afterwards. Absence of an element (a miss on `remove` or
//! `contains`) is an ordinary boolean outcome, never an error.
//!
//! Fallible operations come in two versions where both make sense:
//!
//! - A fallible `try_xxx` version, which returns a [`Result`].
//! - A convenience `xxx` version, which panics on error (or is only provided
//!   under bounds that rule the error out statically).

use std::fmt;

/// Universal error type of this library.
///
/// # Examples
///
/// ```rust
/// use unica::error::Error;
///
/// let error = Error::OutOfBounds { index: 9, len: 3 };
/// assert_eq!(format!("{error}"), "index 9 out of bounds for length 3");
/// ```
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum Error {
    /// Two elements could not be ordered relative to each other.
    ///
    /// Raised by [`SortedVecSet`](crate::set::SortedVecSet) when
    /// `partial_cmp` returns `None` during a search, e.g. when a probe
    /// involves a floating-point NaN. The receiving set is left unmodified.
    Incomparable,
    /// A positional operation received an index past the valid range.
    OutOfBounds {
        /// The offending index.
        index: usize,
        /// The length of the receiving collection at the time of the call.
        len: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Incomparable => {
                write!(formatter, "elements have no defined order relative to each other")
            }
            Self::OutOfBounds { index, len } => {
                write!(formatter, "index {index} out of bounds for length {len}")
            }
        }
    }
}

impl std::error::Error for Error {}

/// Universal `Result` type of this library.
pub type Result<T> = std::result::Result<T, Error>;
