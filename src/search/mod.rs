//! Occurrence finders for pattern subsequences.
//!
//! This module locates the first or last contiguous run of source elements
//! that is pairwise equivalent to a pattern sequence:
//!
//! - [`first_occurrence_of`] / [`first_occurrence_of_by`] /
//!   [`first_occurrence_of_in_by`]: leftmost match, optionally restricted
//!   to a search range
//! - [`last_occurrence_of`] / [`last_occurrence_of_by`]: rightmost match
//! - `try_` variants accept a failable equivalence predicate
//!
//! # Empty-Pattern Convention
//!
//! An empty pattern matches as a zero-width range: at the search range's
//! lower bound for the first-occurrence family, and at the end of the
//! source for the last-occurrence family. An empty source never contains a
//! non-empty pattern.
//!
//! # Examples
//!
//! ```rust
//! use seqsplice::search::{first_occurrence_of, last_occurrence_of};
//!
//! let source = [0, 1, 2, 1, 2, 1, 2, 3];
//!
//! assert_eq!(first_occurrence_of(&source, &[1, 2]), Some(1..3));
//! assert_eq!(last_occurrence_of(&source, &[1, 2]), Some(5..7));
//! assert_eq!(first_occurrence_of(&source, &[0, 1, 2, 3]), None);
//! ```
//!
//! Equivalence can bridge different element types:
//!
//! ```rust
//! use seqsplice::search::first_occurrence_of_by;
//!
//! let words = ["foo", "Bar", "baz"];
//! let found = first_occurrence_of_by(&words, &["bar", "baz"], |word, pattern| {
//!     word.eq_ignore_ascii_case(pattern)
//! });
//! assert_eq!(found, Some(1..3));
//! ```

mod occurrence;

pub use occurrence::first_occurrence_of;
pub use occurrence::first_occurrence_of_by;
pub use occurrence::first_occurrence_of_in_by;
pub use occurrence::last_occurrence_of;
pub use occurrence::last_occurrence_of_by;
pub use occurrence::try_first_occurrence_of_by;
pub use occurrence::try_first_occurrence_of_in_by;
pub use occurrence::try_last_occurrence_of_by;
