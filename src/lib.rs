//! # seqsplice
//!
//! Generic occurrence replacement and subsequence splitting over slices.
//!
//! ## Overview
//!
//! This library generalizes textbook string `replace` and `split` to
//! arbitrary element types and arbitrary, caller-supplied equivalence.
//! It provides:
//!
//! - **Search**: find the first or last occurrence of a pattern
//!   subsequence, optionally restricted to a sub-range of the source
//! - **Replace**: rebuild a sequence with every non-overlapping pattern
//!   occurrence substituted by a replacement sequence
//! - **Split**: cut a sequence into borrowed pieces at each non-overlapping
//!   separator occurrence, honoring a split limit and an empty-piece policy
//!
//! All three scan strictly left to right and never consume overlapping
//! matches. The pattern's element type may differ from the source's; an
//! equivalence predicate bridges the two, and every operation has a `try_`
//! form whose predicate may fail, aborting the whole call with the caller's
//! error.
//!
//! ## Feature Flags
//!
//! - `search`: occurrence finders (`first_occurrence_of`, `last_occurrence_of`)
//! - `replace`: the [`ReplaceOccurrences`](replace::ReplaceOccurrences) and
//!   [`ReplaceOccurrencesInPlace`](replace::ReplaceOccurrencesInPlace) traits
//! - `split`: the [`SplitOccurrences`](split::SplitOccurrences) trait
//! - `full`: enable all features
//!
//! ## Example
//!
//! ```rust
//! use seqsplice::prelude::*;
//!
//! let replaced = b"hello world".replacing_occurrences(b"o", b"0");
//! assert_eq!(replaced, b"hell0 w0rld");
//!
//! let pieces = b"a,b,,c".split_on(b",");
//! assert_eq!(pieces, [b"a".as_slice(), b"b", b"c"]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the search functions and the replace/split extension traits.
///
/// # Usage
///
/// ```rust
/// use seqsplice::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "search")]
    pub use crate::search::*;

    #[cfg(feature = "replace")]
    pub use crate::replace::*;

    #[cfg(feature = "split")]
    pub use crate::split::*;
}

#[cfg(feature = "search")]
pub mod search;

#[cfg(feature = "replace")]
pub mod replace;

#[cfg(feature = "split")]
pub mod split;
