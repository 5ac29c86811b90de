//! Element-wise traversal: `for_each`, `map` and `filter`.

/// Invokes `callback` once per element, in ascending index order.
///
/// The callback receives the element, its index and the whole sequence.
/// A panic raised by the callback propagates to the caller and stops the
/// iteration.
///
/// # Examples
///
/// ```rust
/// use seqops::sequence::for_each;
///
/// let mut visited = Vec::new();
/// for_each(&["a", "b", "c"], |element, index, _| visited.push((index, *element)));
/// assert_eq!(visited, vec![(0, "a"), (1, "b"), (2, "c")]);
/// ```
pub fn for_each<T, F>(sequence: &[T], mut callback: F)
where
    F: FnMut(&T, usize, &[T]),
{
    for (index, element) in sequence.iter().enumerate() {
        callback(element, index, sequence);
    }
}

/// Builds a new `Vec` holding the callback's result for each element.
///
/// The result always has the same length as `sequence`, and position `i`
/// holds the result for element `i`.
///
/// # Examples
///
/// ```rust
/// use seqops::sequence::map;
///
/// let numbers = [1, 2, 3, 4, 5];
/// assert_eq!(map(&numbers, |element, _, _| element * 2), vec![2, 4, 6, 8, 10]);
///
/// // The index and the sequence itself are available too.
/// let offsets = map(&numbers, |element, index, all| element + index + all.len());
/// assert_eq!(offsets, vec![6, 8, 10, 12, 14]);
/// ```
pub fn map<T, U, F>(sequence: &[T], mut callback: F) -> Vec<U>
where
    F: FnMut(&T, usize, &[T]) -> U,
{
    let mut mapped = Vec::with_capacity(sequence.len());
    for (index, element) in sequence.iter().enumerate() {
        mapped.push(callback(element, index, sequence));
    }
    mapped
}

/// Builds a new `Vec` of the elements for which `predicate` returned `true`.
///
/// Kept elements are cloned, in their original relative order.
///
/// # Examples
///
/// ```rust
/// use seqops::sequence::filter;
///
/// let numbers = [1, 2, 3, 4, 5, 6];
/// assert_eq!(filter(&numbers, |element, _, _| element % 2 == 0), vec![2, 4, 6]);
///
/// // Keep every other position.
/// assert_eq!(filter(&numbers, |_, index, _| index % 2 == 0), vec![1, 3, 5]);
/// ```
pub fn filter<T, F>(sequence: &[T], mut predicate: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, usize, &[T]) -> bool,
{
    let mut kept = Vec::new();
    for (index, element) in sequence.iter().enumerate() {
        if predicate(element, index, sequence) {
            kept.push(element.clone());
        }
    }
    kept
}
