//! Cursor-driven replacement scan.
//!
//! The scan keeps a cursor into the source and repeatedly asks the finder
//! for the next match inside the shrinking `[cursor, subrange.end)` window,
//! copying the unmatched gap and the replacement into the accumulator and
//! jumping the cursor past the match. The cursor never moves backwards, so
//! consumed matches cannot overlap.

use std::convert::Infallible;
use std::ops::Range;

use crate::search::try_first_occurrence_of_in_by;

// =============================================================================
// ReplaceOccurrences
// =============================================================================

/// Non-mutating replacement of every non-overlapping occurrence of a target
/// pattern, implemented for `[E]`.
///
/// The target's element type may differ from the source's; the `_by`
/// variants bridge the two with an equivalence predicate, and the `try_`
/// variants accept a predicate that may fail, aborting the whole call.
///
/// All methods delegate to
/// [`try_replacing_occurrences_in_by`](Self::try_replacing_occurrences_in_by),
/// which holds the single scanning loop.
pub trait ReplaceOccurrences<E> {
    /// Returns a new vector with every non-overlapping occurrence of
    /// `target` replaced by `replacement`, comparing elements with `==`.
    ///
    /// # Panics
    ///
    /// Panics if `target` is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqsplice::replace::ReplaceOccurrences;
    ///
    /// let replaced = b"hello world".replacing_occurrences(b"o", b"0");
    /// assert_eq!(replaced, b"hell0 w0rld");
    ///
    /// // An empty replacement deletes each occurrence
    /// let deleted = b"a-b-c".replacing_occurrences(b"-", b"");
    /// assert_eq!(deleted, b"abc");
    /// ```
    fn replacing_occurrences<P>(&self, target: &[P], replacement: &[E]) -> Vec<E>
    where
        E: Clone + PartialEq<P>;

    /// Returns a new vector with every non-overlapping occurrence of
    /// `target` within `subrange` replaced by `replacement`, comparing
    /// elements with `==`.
    ///
    /// Content outside `subrange` is copied through unchanged, including a
    /// match that would straddle `subrange.end`.
    ///
    /// # Panics
    ///
    /// Panics if `target` is empty, or if `subrange` is decreasing or out
    /// of bounds for `self`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqsplice::replace::ReplaceOccurrences;
    ///
    /// // Only the first "o" falls inside the scanned sub-range
    /// let replaced = b"hello world".replacing_occurrences_in(b"o", b"0", 2..6);
    /// assert_eq!(replaced, b"hell0 world");
    /// ```
    fn replacing_occurrences_in<P>(
        &self,
        target: &[P],
        replacement: &[E],
        subrange: Range<usize>,
    ) -> Vec<E>
    where
        E: Clone + PartialEq<P>;

    /// Returns a new vector with every non-overlapping occurrence of
    /// `target` replaced by `replacement`, under the given equivalence
    /// predicate.
    ///
    /// # Panics
    ///
    /// Panics if `target` is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqsplice::replace::ReplaceOccurrences;
    ///
    /// let replaced = b"Tick tock".replacing_occurrences_by(b"t", b"?", u8::eq_ignore_ascii_case);
    /// assert_eq!(replaced, b"?ick ?ock");
    /// ```
    fn replacing_occurrences_by<P, F>(
        &self,
        target: &[P],
        replacement: &[E],
        are_equivalent: F,
    ) -> Vec<E>
    where
        E: Clone,
        F: FnMut(&E, &P) -> bool;

    /// Returns a new vector with every non-overlapping occurrence of
    /// `target` within `subrange` replaced by `replacement`, under the
    /// given equivalence predicate.
    ///
    /// # Panics
    ///
    /// Panics if `target` is empty, or if `subrange` is decreasing or out
    /// of bounds for `self`.
    fn replacing_occurrences_in_by<P, F>(
        &self,
        target: &[P],
        replacement: &[E],
        subrange: Range<usize>,
        are_equivalent: F,
    ) -> Vec<E>
    where
        E: Clone,
        F: FnMut(&E, &P) -> bool;

    /// Failable form of [`replacing_occurrences_by`](Self::replacing_occurrences_by):
    /// the predicate may return an error, which aborts the whole call with
    /// no partial result.
    ///
    /// # Panics
    ///
    /// Panics if `target` is empty.
    fn try_replacing_occurrences_by<P, Err, F>(
        &self,
        target: &[P],
        replacement: &[E],
        are_equivalent: F,
    ) -> Result<Vec<E>, Err>
    where
        E: Clone,
        F: FnMut(&E, &P) -> Result<bool, Err>;

    /// Failable form of [`replacing_occurrences_in_by`](Self::replacing_occurrences_in_by):
    /// the predicate may return an error, which aborts the whole call with
    /// no partial result.
    ///
    /// The result's length is always
    /// `self.len() - matches * target.len() + matches * replacement.len()`.
    ///
    /// # Panics
    ///
    /// Panics if `target` is empty, or if `subrange` is decreasing or out
    /// of bounds for `self`.
    fn try_replacing_occurrences_in_by<P, Err, F>(
        &self,
        target: &[P],
        replacement: &[E],
        subrange: Range<usize>,
        are_equivalent: F,
    ) -> Result<Vec<E>, Err>
    where
        E: Clone,
        F: FnMut(&E, &P) -> Result<bool, Err>;
}

impl<E> ReplaceOccurrences<E> for [E] {
    #[inline]
    fn replacing_occurrences<P>(&self, target: &[P], replacement: &[E]) -> Vec<E>
    where
        E: Clone + PartialEq<P>,
    {
        self.replacing_occurrences_in(target, replacement, 0..self.len())
    }

    #[inline]
    fn replacing_occurrences_in<P>(
        &self,
        target: &[P],
        replacement: &[E],
        subrange: Range<usize>,
    ) -> Vec<E>
    where
        E: Clone + PartialEq<P>,
    {
        self.replacing_occurrences_in_by(target, replacement, subrange, PartialEq::eq)
    }

    #[inline]
    fn replacing_occurrences_by<P, F>(
        &self,
        target: &[P],
        replacement: &[E],
        are_equivalent: F,
    ) -> Vec<E>
    where
        E: Clone,
        F: FnMut(&E, &P) -> bool,
    {
        self.replacing_occurrences_in_by(target, replacement, 0..self.len(), are_equivalent)
    }

    fn replacing_occurrences_in_by<P, F>(
        &self,
        target: &[P],
        replacement: &[E],
        subrange: Range<usize>,
        mut are_equivalent: F,
    ) -> Vec<E>
    where
        E: Clone,
        F: FnMut(&E, &P) -> bool,
    {
        let replaced = self.try_replacing_occurrences_in_by(
            target,
            replacement,
            subrange,
            |element, pattern| Ok::<_, Infallible>(are_equivalent(element, pattern)),
        );
        match replaced {
            Ok(result) => result,
            Err(never) => match never {},
        }
    }

    #[inline]
    fn try_replacing_occurrences_by<P, Err, F>(
        &self,
        target: &[P],
        replacement: &[E],
        are_equivalent: F,
    ) -> Result<Vec<E>, Err>
    where
        E: Clone,
        F: FnMut(&E, &P) -> Result<bool, Err>,
    {
        self.try_replacing_occurrences_in_by(target, replacement, 0..self.len(), are_equivalent)
    }

    fn try_replacing_occurrences_in_by<P, Err, F>(
        &self,
        target: &[P],
        replacement: &[E],
        subrange: Range<usize>,
        mut are_equivalent: F,
    ) -> Result<Vec<E>, Err>
    where
        E: Clone,
        F: FnMut(&E, &P) -> Result<bool, Err>,
    {
        assert!(!target.is_empty(), "replacement target must not be empty");

        let mut cursor = subrange.start;
        let mut result = Vec::with_capacity(self.len());
        result.extend_from_slice(&self[..cursor]);

        // target is non-empty, so every match advances the cursor
        while let Some(found) =
            try_first_occurrence_of_in_by(self, target, cursor..subrange.end, &mut are_equivalent)?
        {
            result.extend_from_slice(&self[cursor..found.start]);
            result.extend_from_slice(replacement);
            cursor = found.end;
        }

        result.extend_from_slice(&self[cursor..]);
        Ok(result)
    }
}

// =============================================================================
// ReplaceOccurrencesInPlace
// =============================================================================

/// Mutating counterpart of [`ReplaceOccurrences`] for `Vec<E>`.
///
/// The vector is assigned the non-mutating result wholesale (copy-and-swap),
/// so the observable outcome matches the non-mutating form exactly but a
/// reallocation always happens. On a predicate error the vector is left
/// unchanged.
pub trait ReplaceOccurrencesInPlace<E> {
    /// Replaces every non-overlapping occurrence of `target` with
    /// `replacement`, comparing elements with `==`.
    ///
    /// # Panics
    ///
    /// Panics if `target` is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqsplice::replace::ReplaceOccurrencesInPlace;
    ///
    /// let mut sequence = vec![1, 2, 1, 2, 3];
    /// sequence.replace_occurrences(&[1, 2], &[9]);
    /// assert_eq!(sequence, [9, 9, 3]);
    /// ```
    fn replace_occurrences<P>(&mut self, target: &[P], replacement: &[E])
    where
        E: Clone + PartialEq<P>;

    /// Replaces every non-overlapping occurrence of `target` with
    /// `replacement`, under the given equivalence predicate.
    ///
    /// # Panics
    ///
    /// Panics if `target` is empty.
    fn replace_occurrences_by<P, F>(&mut self, target: &[P], replacement: &[E], are_equivalent: F)
    where
        E: Clone,
        F: FnMut(&E, &P) -> bool;

    /// Failable form of [`replace_occurrences_by`](Self::replace_occurrences_by):
    /// on a predicate error the vector is left unchanged.
    ///
    /// # Panics
    ///
    /// Panics if `target` is empty.
    fn try_replace_occurrences_by<P, Err, F>(
        &mut self,
        target: &[P],
        replacement: &[E],
        are_equivalent: F,
    ) -> Result<(), Err>
    where
        E: Clone,
        F: FnMut(&E, &P) -> Result<bool, Err>;
}

impl<E> ReplaceOccurrencesInPlace<E> for Vec<E> {
    #[inline]
    fn replace_occurrences<P>(&mut self, target: &[P], replacement: &[E])
    where
        E: Clone + PartialEq<P>,
    {
        self.replace_occurrences_by(target, replacement, PartialEq::eq);
    }

    #[inline]
    fn replace_occurrences_by<P, F>(&mut self, target: &[P], replacement: &[E], are_equivalent: F)
    where
        E: Clone,
        F: FnMut(&E, &P) -> bool,
    {
        *self = self.replacing_occurrences_by(target, replacement, are_equivalent);
    }

    #[inline]
    fn try_replace_occurrences_by<P, Err, F>(
        &mut self,
        target: &[P],
        replacement: &[E],
        are_equivalent: F,
    ) -> Result<(), Err>
    where
        E: Clone,
        F: FnMut(&E, &P) -> Result<bool, Err>,
    {
        *self = self.try_replacing_occurrences_by(target, replacement, are_equivalent)?;
        Ok(())
    }
}

// =============================================================================
// Tests
// =============================================================================
