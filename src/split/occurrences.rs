//! Cursor-driven splitting scan.
//!
//! Shares the Replacer's control flow: a cursor advances through the source
//! as the finder yields separator matches, but each match closes off the
//! piece between the cursor and the match start instead of emitting
//! replacement content. The split limit is checked before each search, so
//! once it is reached the remainder becomes the final piece verbatim.

use std::convert::Infallible;

use crate::search::try_first_occurrence_of_in_by;

// =============================================================================
// SplitOccurrences
// =============================================================================

/// Splitting a slice at every non-overlapping occurrence of a separator
/// sequence, implemented for `[E]`.
///
/// Pieces borrow from the source slice. The separator's element type may
/// differ from the source's; the `_by` variants bridge the two with an
/// equivalence predicate, and the failable
/// [`try_split_on_with_by`](Self::try_split_on_with_by) accepts a predicate
/// that may return an error, aborting the whole call. All methods delegate
/// to `try_split_on_with_by`, which holds the single scanning loop.
pub trait SplitOccurrences<E> {
    /// Splits at every occurrence of `separator`, comparing elements with
    /// `==`. Unbounded, with empty pieces omitted.
    ///
    /// # Panics
    ///
    /// Panics if `separator` is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqsplice::split::SplitOccurrences;
    ///
    /// let pieces = b"a,b,,c".split_on(b",");
    /// assert_eq!(pieces, [b"a".as_slice(), b"b", b"c"]);
    ///
    /// // A multi-element separator
    /// let pieces = [1, 2, 0, 0, 3, 4].split_on(&[0, 0]);
    /// assert_eq!(pieces, [[1, 2].as_slice(), &[3, 4]]);
    /// ```
    fn split_on<P>(&self, separator: &[P]) -> Vec<&[E]>
    where
        E: PartialEq<P>;

    /// Splits at every occurrence of `separator`, comparing elements with
    /// `==`, producing at most `max_splits + 1` pieces and keeping or
    /// omitting empty pieces per `omit_empty`.
    ///
    /// Once `max_splits` pieces have been emitted, no further separator
    /// search happens and the remainder becomes the final piece verbatim.
    /// `max_splits == 0` yields the whole slice as a single piece.
    ///
    /// # Panics
    ///
    /// Panics if `separator` is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqsplice::split::SplitOccurrences;
    ///
    /// let pieces = b"a,b,,c".split_on_with(b",", usize::MAX, false);
    /// assert_eq!(pieces, [b"a".as_slice(), b"b", b"", b"c"]);
    ///
    /// let pieces = b"a,b,c".split_on_with(b",", 1, true);
    /// assert_eq!(pieces, [b"a".as_slice(), b"b,c"]);
    /// ```
    fn split_on_with<P>(&self, separator: &[P], max_splits: usize, omit_empty: bool) -> Vec<&[E]>
    where
        E: PartialEq<P>;

    /// Splits at every occurrence of `separator` under the given
    /// equivalence predicate. Unbounded, with empty pieces omitted.
    ///
    /// # Panics
    ///
    /// Panics if `separator` is empty.
    fn split_on_by<P, F>(&self, separator: &[P], are_equivalent: F) -> Vec<&[E]>
    where
        F: FnMut(&E, &P) -> bool;

    /// Splits at every occurrence of `separator` under the given
    /// equivalence predicate, with an explicit split limit and empty-piece
    /// policy.
    ///
    /// # Panics
    ///
    /// Panics if `separator` is empty.
    fn split_on_with_by<P, F>(
        &self,
        separator: &[P],
        max_splits: usize,
        omit_empty: bool,
        are_equivalent: F,
    ) -> Vec<&[E]>
    where
        F: FnMut(&E, &P) -> bool;

    /// Failable form of [`split_on_with_by`](Self::split_on_with_by): the
    /// predicate may return an error, which aborts the whole call with no
    /// partial list.
    ///
    /// # Panics
    ///
    /// Panics if `separator` is empty.
    fn try_split_on_with_by<P, Err, F>(
        &self,
        separator: &[P],
        max_splits: usize,
        omit_empty: bool,
        are_equivalent: F,
    ) -> Result<Vec<&[E]>, Err>
    where
        F: FnMut(&E, &P) -> Result<bool, Err>;
}

impl<E> SplitOccurrences<E> for [E] {
    #[inline]
    fn split_on<P>(&self, separator: &[P]) -> Vec<&[E]>
    where
        E: PartialEq<P>,
    {
        self.split_on_with(separator, usize::MAX, true)
    }

    #[inline]
    fn split_on_with<P>(&self, separator: &[P], max_splits: usize, omit_empty: bool) -> Vec<&[E]>
    where
        E: PartialEq<P>,
    {
        self.split_on_with_by(separator, max_splits, omit_empty, PartialEq::eq)
    }

    #[inline]
    fn split_on_by<P, F>(&self, separator: &[P], are_equivalent: F) -> Vec<&[E]>
    where
        F: FnMut(&E, &P) -> bool,
    {
        self.split_on_with_by(separator, usize::MAX, true, are_equivalent)
    }

    fn split_on_with_by<P, F>(
        &self,
        separator: &[P],
        max_splits: usize,
        omit_empty: bool,
        mut are_equivalent: F,
    ) -> Vec<&[E]>
    where
        F: FnMut(&E, &P) -> bool,
    {
        let split = self.try_split_on_with_by(separator, max_splits, omit_empty, |element, pattern| {
            Ok::<_, Infallible>(are_equivalent(element, pattern))
        });
        match split {
            Ok(pieces) => pieces,
            Err(never) => match never {},
        }
    }

    fn try_split_on_with_by<P, Err, F>(
        &self,
        separator: &[P],
        max_splits: usize,
        omit_empty: bool,
        mut are_equivalent: F,
    ) -> Result<Vec<&[E]>, Err>
    where
        F: FnMut(&E, &P) -> Result<bool, Err>,
    {
        assert!(!separator.is_empty(), "separator must not be empty");

        let mut cursor = 0;
        let mut pieces: Vec<&[E]> = Vec::new();

        // The limit counts emitted pieces, so omitted empties do not use it up
        while pieces.len() != max_splits {
            let found = try_first_occurrence_of_in_by(
                self,
                separator,
                cursor..self.len(),
                &mut are_equivalent,
            )?;
            let Some(found) = found else { break };
            append_piece(&mut pieces, &self[cursor..found.start], omit_empty);
            cursor = found.end;
        }

        append_piece(&mut pieces, &self[cursor..], omit_empty);
        Ok(pieces)
    }
}

/// Pushes `piece` unless the empty-piece policy suppresses it.
fn append_piece<'a, E>(pieces: &mut Vec<&'a [E]>, piece: &'a [E], omit_empty: bool) {
    if !omit_empty || !piece.is_empty() {
        pieces.push(piece);
    }
}

// =============================================================================
// Tests
// =============================================================================
