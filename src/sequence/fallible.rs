//! Fallible counterparts of the traversal and folding operations.
//!
//! A callback that returns `Err(error)` stops the pass immediately and the
//! operation returns that same `error` untouched. No element after the
//! failing one is visited.
//!
//! # Examples
//!
//! ```rust
//! use seqops::sequence::try_map;
//!
//! let inputs = ["1", "2", "x", "4"];
//! let parsed = try_map(&inputs, |text, _, _| text.parse::<i32>());
//! assert!(parsed.is_err());
//!
//! let parsed = try_map(&inputs[..2], |text, _, _| text.parse::<i32>());
//! assert_eq!(parsed, Ok(vec![1, 2]));
//! ```

/// Like [`for_each`](super::for_each), stopping at the first `Err`.
///
/// # Errors
///
/// Returns the first error produced by `callback`.
///
/// # Examples
///
/// ```rust
/// use seqops::sequence::try_for_each;
///
/// let mut seen = Vec::new();
/// let result = try_for_each(&[1, 2, 3], |element, _, _| {
///     if *element == 2 {
///         return Err("two");
///     }
///     seen.push(*element);
///     Ok(())
/// });
/// assert_eq!(result, Err("two"));
/// assert_eq!(seen, vec![1]);
/// ```
pub fn try_for_each<T, E, F>(sequence: &[T], mut callback: F) -> Result<(), E>
where
    F: FnMut(&T, usize, &[T]) -> Result<(), E>,
{
    for (index, element) in sequence.iter().enumerate() {
        callback(element, index, sequence)
            .inspect_err(|_| log_failure("try_for_each", index))?;
    }
    Ok(())
}

/// Like [`map`](super::map), stopping at the first `Err`.
///
/// # Errors
///
/// Returns the first error produced by `callback`.
pub fn try_map<T, U, E, F>(sequence: &[T], mut callback: F) -> Result<Vec<U>, E>
where
    F: FnMut(&T, usize, &[T]) -> Result<U, E>,
{
    let mut mapped = Vec::with_capacity(sequence.len());
    for (index, element) in sequence.iter().enumerate() {
        let value =
            callback(element, index, sequence).inspect_err(|_| log_failure("try_map", index))?;
        mapped.push(value);
    }
    Ok(mapped)
}

/// Like [`filter`](super::filter), stopping at the first `Err`.
///
/// # Errors
///
/// Returns the first error produced by `predicate`.
///
/// # Examples
///
/// ```rust
/// use seqops::sequence::try_filter;
///
/// let limits = [3, 8, 1];
/// let small = try_filter(&limits, |limit, _, _| {
///     if *limit > 10 { Err(format!("limit {limit} too large")) } else { Ok(*limit < 5) }
/// });
/// assert_eq!(small, Ok(vec![3, 1]));
/// ```
pub fn try_filter<T, E, F>(sequence: &[T], mut predicate: F) -> Result<Vec<T>, E>
where
    T: Clone,
    F: FnMut(&T, usize, &[T]) -> Result<bool, E>,
{
    let mut kept = Vec::new();
    for (index, element) in sequence.iter().enumerate() {
        let keep = predicate(element, index, sequence)
            .inspect_err(|_| log_failure("try_filter", index))?;
        if keep {
            kept.push(element.clone());
        }
    }
    Ok(kept)
}

/// Like [`fold`](super::fold), stopping at the first `Err`.
///
/// # Errors
///
/// Returns the first error produced by `callback`.
///
/// # Examples
///
/// ```rust
/// use seqops::sequence::try_fold;
///
/// let total = try_fold(&[200_u8, 50, 10], 0_u8, |accumulator, element, _, _| {
///     accumulator.checked_add(*element).ok_or("overflow")
/// });
/// assert_eq!(total, Err("overflow"));
/// ```
pub fn try_fold<T, A, E, F>(sequence: &[T], initial_value: A, mut callback: F) -> Result<A, E>
where
    F: FnMut(A, &T, usize, &[T]) -> Result<A, E>,
{
    let mut accumulator = initial_value;
    for (index, element) in sequence.iter().enumerate() {
        accumulator = callback(accumulator, element, index, sequence)
            .inspect_err(|_| log_failure("try_fold", index))?;
    }
    Ok(accumulator)
}

#[cfg(feature = "tracing")]
fn log_failure(operation: &'static str, index: usize) {
    tracing::debug!(operation, index, "callback returned an error");
}

#[cfg(not(feature = "tracing"))]
#[inline]
const fn log_failure(_operation: &'static str, _index: usize) {}
