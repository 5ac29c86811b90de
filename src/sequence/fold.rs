//! Folding a sequence into a single value.
//!
//! Two entry points are provided:
//!
//! - [`reduce`] takes an optional seed. Without one the first element seeds
//!   the accumulator, which forces the accumulator to share the element
//!   type and makes the empty sequence an error.
//! - [`fold`] always takes a seed, so the accumulator may be any type and
//!   the empty sequence simply yields the seed.
//!
//! # Seed presence
//!
//! Whether a seed was supplied is stated by the `Option` itself, never by
//! inspecting its value. `Some(0)`, `Some(String::new())` and every other
//! "empty looking" seed are real seeds.
//!
//! ```rust
//! use seqops::sequence::reduce;
//!
//! let numbers = [1, 2, 3, 4];
//! let multiply = |accumulator: i32, element: &i32, _: usize, _: &[i32]| accumulator * element;
//!
//! assert_eq!(reduce(&numbers, multiply, Some(0)), Ok(0));
//! assert_eq!(reduce(&numbers, multiply, None), Ok(24));
//! ```

use super::error::ReduceError;

/// Folds `sequence` into one value of the element type.
///
/// The callback receives the accumulator, the current element, its index and
/// the whole sequence, and returns the next accumulator.
///
/// - With `Some(seed)`, folding starts at index 0 from `seed`.
/// - With `None`, a clone of the first element seeds the accumulator and
///   folding starts at index 1.
///
/// # Errors
///
/// Returns [`ReduceError::EmptySequence`] when `sequence` is empty and
/// `initial_value` is `None`.
///
/// # Examples
///
/// ```rust
/// use seqops::sequence::{ReduceError, reduce};
///
/// let add = |accumulator: i32, element: &i32, _: usize, _: &[i32]| accumulator + element;
///
/// assert_eq!(reduce(&[1, 2, 3, 4], add, None), Ok(10));
/// assert_eq!(reduce(&[1, 2, 3, 4], add, Some(10)), Ok(20));
/// assert_eq!(reduce(&[], add, Some(5)), Ok(5));
/// assert_eq!(reduce(&[], add, None), Err(ReduceError::EmptySequence));
/// ```
pub fn reduce<T, F>(
    sequence: &[T],
    mut callback: F,
    initial_value: Option<T>,
) -> Result<T, ReduceError>
where
    T: Clone,
    F: FnMut(T, &T, usize, &[T]) -> T,
{
    let mut elements = sequence.iter().enumerate();
    let mut accumulator = match initial_value {
        Some(seed) => seed,
        None => match elements.next() {
            Some((_, first)) => first.clone(),
            None => {
                #[cfg(feature = "tracing")]
                tracing::debug!("reduce called on an empty sequence without an initial value");
                return Err(ReduceError::EmptySequence);
            }
        },
    };
    for (index, element) in elements {
        accumulator = callback(accumulator, element, index, sequence);
    }
    Ok(accumulator)
}

/// Folds `sequence` from left to right, starting from `initial_value`.
///
/// Unlike [`reduce`] the accumulator type `A` is independent of the element
/// type, and an empty sequence returns `initial_value` unchanged.
///
/// # Examples
///
/// ```rust
/// use seqops::sequence::fold;
///
/// let words = ["fold", "over", "words"];
/// let total_length = fold(&words, 0, |accumulator, word, _, _| accumulator + word.len());
/// assert_eq!(total_length, 13);
///
/// let joined = fold(&words, String::new(), |mut accumulator, word, index, _| {
///     if index > 0 {
///         accumulator.push(' ');
///     }
///     accumulator.push_str(word);
///     accumulator
/// });
/// assert_eq!(joined, "fold over words");
/// ```
pub fn fold<T, A, F>(sequence: &[T], initial_value: A, mut callback: F) -> A
where
    F: FnMut(A, &T, usize, &[T]) -> A,
{
    let mut accumulator = initial_value;
    for (index, element) in sequence.iter().enumerate() {
        accumulator = callback(accumulator, element, index, sequence);
    }
    accumulator
}
