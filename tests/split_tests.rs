#![cfg(feature = "split")]
//! Unit tests for subsequence splitting.
//!
//! Covers the literal scenarios, the empty-piece policy matrix, the split
//! limit, preconditions, and predicate failure propagation.

use seqsplice::split::SplitOccurrences;

use rstest::rstest;

// =============================================================================
// Default split (unbounded, empty pieces omitted)
// =============================================================================

#[rstest]
fn test_split_omits_empty_pieces_by_default() {
    let pieces = b"a,b,,c".split_on(b",");
    assert_eq!(pieces, [b"a".as_slice(), b"b", b"c"]);
}

#[rstest]
fn test_split_on_multi_element_separator() {
    let pieces = b"one::two::three".split_on(b"::");
    assert_eq!(pieces, [b"one".as_slice(), b"two", b"three"]);
}

#[rstest]
fn test_absent_separator_yields_single_piece() {
    let pieces = b"abc".split_on(b",");
    assert_eq!(pieces, [b"abc".as_slice()]);
}

#[rstest]
fn test_source_equal_to_separator_yields_nothing() {
    let pieces = b",".split_on(b",");
    assert!(pieces.is_empty());
}

#[rstest]
fn test_leading_and_trailing_separators_are_dropped() {
    let pieces = b",a,b,".split_on(b",");
    assert_eq!(pieces, [b"a".as_slice(), b"b"]);
}

#[rstest]
fn test_split_over_non_byte_elements() {
    let pieces = [1, 2, 0, 0, 3, 4].split_on(&[0, 0]);
    assert_eq!(pieces, [[1, 2].as_slice(), &[3, 4]]);
}

#[rstest]
fn test_pieces_borrow_from_the_source() {
    let source = b"a,b".to_vec();
    let pieces = source.split_on(b",");
    assert!(std::ptr::eq(pieces[0].as_ptr(), source.as_ptr()));
}

// =============================================================================
// Empty-piece policy
// =============================================================================

#[rstest]
fn test_kept_empty_pieces() {
    let pieces = b"a,b,,c".split_on_with(b",", usize::MAX, false);
    assert_eq!(pieces, [b"a".as_slice(), b"b", b"", b"c"]);
}

#[rstest]
fn test_kept_leading_and_trailing_empty_pieces() {
    let pieces = b",a,".split_on_with(b",", usize::MAX, false);
    assert_eq!(pieces, [b"".as_slice(), b"a", b""]);
}

#[rstest]
fn test_empty_source_policy_matrix() {
    let empty = b"";
    assert!(empty.split_on(b",").is_empty());
    assert_eq!(empty.split_on_with(b",", usize::MAX, false), [b"".as_slice()]);
}

#[rstest]
fn test_separator_only_source_kept_pieces() {
    // Two separators produce three empty pieces when kept
    let pieces = b",,".split_on_with(b",", usize::MAX, false);
    assert_eq!(pieces, [b"".as_slice(), b"", b""]);
}

// =============================================================================
// Split limit
// =============================================================================

#[rstest]
fn test_limit_leaves_remainder_verbatim() {
    let pieces = b"a,b,c".split_on_with(b",", 1, true);
    assert_eq!(pieces, [b"a".as_slice(), b"b,c"]);
}

#[rstest]
fn test_zero_limit_yields_whole_source() {
    let pieces = b"a,b,c".split_on_with(b",", 0, true);
    assert_eq!(pieces, [b"a,b,c".as_slice()]);
}

#[rstest]
fn test_limit_equal_to_match_count_consumes_all_separators() {
    let pieces = b"a,b,c".split_on_with(b",", 2, true);
    assert_eq!(pieces, [b"a".as_slice(), b"b", b"c"]);
}

#[rstest]
fn test_limit_bounds_piece_count() {
    for max_splits in 0..6 {
        let pieces = b"a,b,c,d,e".split_on_with(b",", max_splits, false);
        assert!(pieces.len() <= max_splits + 1);
    }
}

#[rstest]
fn test_omitted_empty_pieces_do_not_consume_the_limit() {
    let pieces = b",,a,b,c".split_on_with(b",", 1, true);
    assert_eq!(pieces, [b"a".as_slice(), b"b,c"]);
}

// =============================================================================
// Custom and failable equivalence
// =============================================================================

#[rstest]
fn test_case_insensitive_separator() {
    let pieces = b"oneXtwoxthree".split_on_by(b"x", u8::eq_ignore_ascii_case);
    assert_eq!(pieces, [b"one".as_slice(), b"two", b"three"]);
}

#[rstest]
fn test_equivalence_bridges_element_types() {
    let records = ["alpha", "SEP", "beta", "SEP", "gamma"];
    let pieces = records.split_on_by(&["sep"], |record, pattern| {
        record.eq_ignore_ascii_case(pattern)
    });
    assert_eq!(
        pieces,
        [["alpha"].as_slice(), &["beta"], &["gamma"]]
    );
}

#[rstest]
fn test_predicate_error_propagates_with_no_partial_list() {
    let result = b"a,b,c".try_split_on_with_by(b",", usize::MAX, true, |element: &u8, _: &u8| {
        if *element == b'b' {
            Err("boom")
        } else {
            Ok(*element == b',')
        }
    });
    assert_eq!(result, Err("boom"));
}

#[rstest]
fn test_try_variant_succeeds_when_predicate_never_fails() {
    let result = b"a,b".try_split_on_with_by(b",", usize::MAX, true, |element: &u8, pattern: &u8| {
        Ok::<_, &str>(element == pattern)
    });
    assert_eq!(result, Ok(vec![b"a".as_slice(), b"b"]));
}

// =============================================================================
// Reconstruction
// =============================================================================

#[rstest]
fn test_kept_pieces_rejoin_to_the_source() {
    let source = b",one,,two,";
    let pieces = source.split_on_with(b",", usize::MAX, false);
    assert_eq!(pieces.join(&b","[..]), source);
}

// =============================================================================
// Preconditions
// =============================================================================

#[rstest]
#[should_panic(expected = "separator must not be empty")]
fn test_empty_separator_is_a_precondition_violation() {
    let _ = b"abc".split_on(b"");
}
