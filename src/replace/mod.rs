//! Non-overlapping occurrence replacement.
//!
//! This module rebuilds a sequence with every non-overlapping occurrence of
//! a target pattern substituted by a replacement sequence:
//!
//! - [`ReplaceOccurrences`]: non-mutating replacement over `[E]`, returning
//!   a fresh `Vec<E>`; variants scope the scan to a sub-range, take a custom
//!   equivalence predicate, or accept a failable predicate
//! - [`ReplaceOccurrencesInPlace`]: mutating counterpart for `Vec<E>` with
//!   copy-and-swap semantics
//!
//! Matches are found greedily left to right and never overlap; replacement
//! content is never re-scanned.
//!
//! # Examples
//!
//! ```rust
//! use seqsplice::replace::ReplaceOccurrences;
//!
//! let replaced = b"hello world".replacing_occurrences(b"o", b"0");
//! assert_eq!(replaced, b"hell0 w0rld");
//!
//! // Non-overlap: the first "aa" is consumed, the trailing "a" is not a match
//! let replaced = b"aaa".replacing_occurrences(b"aa", b"b");
//! assert_eq!(replaced, b"ba");
//! ```
//!
//! ## In-Place Replacement
//!
//! ```rust
//! use seqsplice::replace::ReplaceOccurrencesInPlace;
//!
//! let mut sequence = vec![1, 2, 1, 2, 3];
//! sequence.replace_occurrences(&[1, 2], &[9]);
//! assert_eq!(sequence, [9, 9, 3]);
//! ```

mod occurrences;

pub use occurrences::ReplaceOccurrences;
pub use occurrences::ReplaceOccurrencesInPlace;
