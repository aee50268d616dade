//! Splitting on subsequence separators.
//!
//! This module cuts a slice into borrowed pieces at each non-overlapping
//! occurrence of a separator sequence, generalizing [`str::split`] to
//! arbitrary element types, multi-element separators, and caller-supplied
//! equivalence:
//!
//! - [`SplitOccurrences::split_on`]: unbounded split, empty pieces omitted
//! - [`SplitOccurrences::split_on_with`]: explicit split limit and
//!   empty-piece policy
//! - `_by` / `try_` variants: custom or failable equivalence
//!
//! # Examples
//!
//! ```rust
//! use seqsplice::split::SplitOccurrences;
//!
//! let pieces = b"a,b,,c".split_on(b",");
//! assert_eq!(pieces, [b"a".as_slice(), b"b", b"c"]);
//!
//! let pieces = b"a,b,,c".split_on_with(b",", usize::MAX, false);
//! assert_eq!(pieces, [b"a".as_slice(), b"b", b"", b"c"]);
//!
//! let pieces = b"a,b,c".split_on_with(b",", 1, true);
//! assert_eq!(pieces, [b"a".as_slice(), b"b,c"]);
//! ```

mod occurrences;

pub use occurrences::SplitOccurrences;
