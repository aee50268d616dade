//! Naive left-to-right (and right-to-left) subsequence scanning.
//!
//! Candidate start positions are visited in order; at each candidate the
//! predicate is applied pairwise and short-circuits on the first mismatch.
//! All entry points funnel into the failable cores so that the scanning
//! control flow exists exactly once per direction.

use std::convert::Infallible;
use std::ops::Range;

// =============================================================================
// First Occurrence
// =============================================================================

/// Returns the leftmost range where `needle` occurs in `haystack`,
/// comparing elements with `==`.
///
/// An empty `needle` matches as the zero-width range `0..0`.
///
/// # Examples
///
/// ```rust
/// use seqsplice::search::first_occurrence_of;
///
/// let source = [0, 1, 2, 1, 2, 1, 2, 3];
/// assert_eq!(first_occurrence_of(&source, &[0, 1, 2]), Some(0..3));
/// assert_eq!(first_occurrence_of(&source, &[1, 2, 3]), Some(5..8));
/// assert_eq!(first_occurrence_of(&source, &[0, 1, 2, 3]), None);
/// ```
#[inline]
pub fn first_occurrence_of<E, P>(haystack: &[E], needle: &[P]) -> Option<Range<usize>>
where
    E: PartialEq<P>,
{
    first_occurrence_of_by(haystack, needle, PartialEq::eq)
}

/// Returns the leftmost range where `needle` occurs in `haystack` under the
/// given equivalence predicate.
///
/// # Examples
///
/// ```rust
/// use seqsplice::search::first_occurrence_of_by;
///
/// let source = b"Hello World";
/// let found = first_occurrence_of_by(source, b"world", u8::eq_ignore_ascii_case);
/// assert_eq!(found, Some(6..11));
/// ```
#[inline]
pub fn first_occurrence_of_by<E, P>(
    haystack: &[E],
    needle: &[P],
    are_equivalent: impl FnMut(&E, &P) -> bool,
) -> Option<Range<usize>> {
    first_occurrence_of_in_by(haystack, needle, 0..haystack.len(), are_equivalent)
}

/// Returns the leftmost range where `needle` occurs within `search_range`
/// of `haystack` under the given equivalence predicate.
///
/// The returned range is expressed in `haystack` coordinates, not relative
/// to `search_range`. An empty `needle` matches as the zero-width range at
/// `search_range.start`.
///
/// # Panics
///
/// Panics if `search_range` is decreasing or out of bounds for `haystack`.
///
/// # Examples
///
/// ```rust
/// use seqsplice::search::first_occurrence_of_in_by;
///
/// let source = [0, 1, 2, 1, 2, 1, 2, 3];
/// let found = first_occurrence_of_in_by(&source, &[1, 2], 2..source.len(), i32::eq);
/// assert_eq!(found, Some(3..5));
/// ```
#[inline]
pub fn first_occurrence_of_in_by<E, P>(
    haystack: &[E],
    needle: &[P],
    search_range: Range<usize>,
    mut are_equivalent: impl FnMut(&E, &P) -> bool,
) -> Option<Range<usize>> {
    let scanned = try_first_occurrence_of_in_by(haystack, needle, search_range, |element, pattern| {
        Ok::<_, Infallible>(are_equivalent(element, pattern))
    });
    match scanned {
        Ok(found) => found,
        Err(never) => match never {},
    }
}

/// Failable form of [`first_occurrence_of_by`]: the predicate may return an
/// error, which aborts the scan immediately.
#[inline]
pub fn try_first_occurrence_of_by<E, P, Err>(
    haystack: &[E],
    needle: &[P],
    are_equivalent: impl FnMut(&E, &P) -> Result<bool, Err>,
) -> Result<Option<Range<usize>>, Err> {
    try_first_occurrence_of_in_by(haystack, needle, 0..haystack.len(), are_equivalent)
}

/// Failable form of [`first_occurrence_of_in_by`]: the predicate may return
/// an error, which aborts the scan immediately.
///
/// The predicate is invoked in strictly left-to-right candidate order and
/// short-circuits within each candidate, so on error no element past the
/// failing comparison has been inspected.
///
/// # Panics
///
/// Panics if `search_range` is decreasing or out of bounds for `haystack`.
pub fn try_first_occurrence_of_in_by<E, P, Err>(
    haystack: &[E],
    needle: &[P],
    search_range: Range<usize>,
    mut are_equivalent: impl FnMut(&E, &P) -> Result<bool, Err>,
) -> Result<Option<Range<usize>>, Err> {
    let window = &haystack[search_range.clone()];
    if needle.is_empty() {
        return Ok(Some(search_range.start..search_range.start));
    }
    if needle.len() > window.len() {
        return Ok(None);
    }
    for start in 0..=(window.len() - needle.len()) {
        if try_matches_at(window, needle, start, &mut are_equivalent)? {
            let lower = search_range.start + start;
            return Ok(Some(lower..lower + needle.len()));
        }
    }
    Ok(None)
}

// =============================================================================
// Last Occurrence
// =============================================================================

/// Returns the rightmost range where `needle` occurs in `haystack`,
/// comparing elements with `==`.
///
/// An empty `needle` matches as the zero-width range at the end of
/// `haystack`.
///
/// # Examples
///
/// ```rust
/// use seqsplice::search::last_occurrence_of;
///
/// let source = [0, 1, 2, 1, 2, 1, 2, 3];
/// assert_eq!(last_occurrence_of(&source, &[1, 2]), Some(5..7));
/// assert_eq!(last_occurrence_of(&source, &[0, 1, 2]), Some(0..3));
/// ```
#[inline]
pub fn last_occurrence_of<E, P>(haystack: &[E], needle: &[P]) -> Option<Range<usize>>
where
    E: PartialEq<P>,
{
    last_occurrence_of_by(haystack, needle, PartialEq::eq)
}

/// Returns the rightmost range where `needle` occurs in `haystack` under
/// the given equivalence predicate.
#[inline]
pub fn last_occurrence_of_by<E, P>(
    haystack: &[E],
    needle: &[P],
    mut are_equivalent: impl FnMut(&E, &P) -> bool,
) -> Option<Range<usize>> {
    let scanned = try_last_occurrence_of_by(haystack, needle, |element, pattern| {
        Ok::<_, Infallible>(are_equivalent(element, pattern))
    });
    match scanned {
        Ok(found) => found,
        Err(never) => match never {},
    }
}

/// Failable form of [`last_occurrence_of_by`]: the predicate may return an
/// error, which aborts the scan immediately.
///
/// Candidates are visited in strictly right-to-left order.
pub fn try_last_occurrence_of_by<E, P, Err>(
    haystack: &[E],
    needle: &[P],
    mut are_equivalent: impl FnMut(&E, &P) -> Result<bool, Err>,
) -> Result<Option<Range<usize>>, Err> {
    if needle.is_empty() {
        return Ok(Some(haystack.len()..haystack.len()));
    }
    if needle.len() > haystack.len() {
        return Ok(None);
    }
    for start in (0..=(haystack.len() - needle.len())).rev() {
        if try_matches_at(haystack, needle, start, &mut are_equivalent)? {
            return Ok(Some(start..start + needle.len()));
        }
    }
    Ok(None)
}

// =============================================================================
// Candidate Comparison
// =============================================================================

/// Compares `needle` against the elements of `haystack` starting at
/// `start`, short-circuiting on the first mismatch or predicate error.
///
/// Caller guarantees `start + needle.len() <= haystack.len()`.
fn try_matches_at<E, P, Err>(
    haystack: &[E],
    needle: &[P],
    start: usize,
    are_equivalent: &mut impl FnMut(&E, &P) -> Result<bool, Err>,
) -> Result<bool, Err> {
    let candidate = &haystack[start..start + needle.len()];
    for (element, pattern_element) in candidate.iter().zip(needle) {
        if !are_equivalent(element, pattern_element)? {
            return Ok(false);
        }
    }
    Ok(true)
}

// =============================================================================
// Tests
// =============================================================================
