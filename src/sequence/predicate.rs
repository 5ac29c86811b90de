//! Short-circuiting predicate checks: `some`, `every` and `find`.
//!
//! Predicates return a strict `bool`. Each check stops visiting elements as
//! soon as its answer is known.

/// Returns `true` as soon as `predicate` holds for an element.
///
/// Returns `false` after scanning the whole sequence without a match, which
/// includes the empty sequence.
///
/// # Examples
///
/// ```rust
/// use seqops::sequence::some;
///
/// assert!(!some(&[1, 3, 5], |element, _, _| element % 2 == 0));
/// assert!(some(&[1, 2, 3], |element, _, _| element % 2 == 0));
/// assert!(!some(&Vec::<i32>::new(), |_, _, _| true));
/// ```
pub fn some<T, F>(sequence: &[T], mut predicate: F) -> bool
where
    F: FnMut(&T, usize, &[T]) -> bool,
{
    for (index, element) in sequence.iter().enumerate() {
        if predicate(element, index, sequence) {
            return true;
        }
    }
    false
}

/// Returns `false` as soon as `predicate` fails for an element.
///
/// Returns `true` after scanning the whole sequence without a failure, which
/// includes the empty sequence.
///
/// # Examples
///
/// ```rust
/// use seqops::sequence::every;
///
/// assert!(every(&[2, 4, 6], |element, _, _| element % 2 == 0));
/// assert!(!every(&[2, 3, 6], |element, _, _| element % 2 == 0));
/// assert!(every(&Vec::<i32>::new(), |_, _, _| false));
/// ```
pub fn every<T, F>(sequence: &[T], mut predicate: F) -> bool
where
    F: FnMut(&T, usize, &[T]) -> bool,
{
    for (index, element) in sequence.iter().enumerate() {
        if !predicate(element, index, sequence) {
            return false;
        }
    }
    true
}

/// Returns the first element for which `predicate` holds.
///
/// `None` means no element matched. Because the marker lives outside the
/// element type, sequences of `Option`s (or any other type with its own
/// "nothing" value) stay unambiguous.
///
/// # Examples
///
/// ```rust
/// use seqops::sequence::find;
///
/// assert_eq!(find(&[1, 2, 3, 4], |element, _, _| *element > 2), Some(&3));
/// assert_eq!(find(&[1, 2], |element, _, _| *element > 5), None);
///
/// let optionals = [Some(1), None, Some(3)];
/// assert_eq!(find(&optionals, |element, _, _| element.is_none()), Some(&None));
/// ```
pub fn find<T, F>(sequence: &[T], mut predicate: F) -> Option<&T>
where
    F: FnMut(&T, usize, &[T]) -> bool,
{
    for (index, element) in sequence.iter().enumerate() {
        if predicate(element, index, sequence) {
            return Some(element);
        }
    }
    None
}
