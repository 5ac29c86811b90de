//! Method-call syntax for the sequence operations.
//!
//! [`Sequence`] is implemented for every slice, so `Vec<T>`, arrays behind a
//! reference and boxed slices all pick it up through deref. [`Flatten`] adds
//! `flat` to slices of [`Nested`] values.
//!
//! Arrays have an inherent `map` that takes precedence over
//! [`Sequence::map`]; borrow the array as a slice (`array[..].map(...)`) to
//! reach the trait method.
//!
//! # Examples
//!
//! ```rust
//! use seqops::sequence::Sequence;
//!
//! let numbers = vec![1, 2, 3, 4];
//! let evens = numbers.filter(|element, _, _| element % 2 == 0);
//! let squares = evens.map(|element, _, _| element * element);
//! assert_eq!(squares.fold(0, |accumulator, element, _, _| accumulator + element), 20);
//! ```

use super::error::ReduceError;
use super::flatten::{Depth, Nested};
use super::{flatten, fold, predicate, traverse};

/// Extension trait exposing the sequence operations as methods.
///
/// Every method delegates to the free function of the same name in
/// [`crate::sequence`].
pub trait Sequence {
    /// The element type of the sequence.
    type Element;

    /// See [`for_each`](crate::sequence::for_each).
    fn for_each<F>(&self, callback: F)
    where
        F: FnMut(&Self::Element, usize, &[Self::Element]);

    /// See [`map`](crate::sequence::map).
    fn map<U, F>(&self, callback: F) -> Vec<U>
    where
        F: FnMut(&Self::Element, usize, &[Self::Element]) -> U;

    /// See [`filter`](crate::sequence::filter).
    fn filter<F>(&self, predicate: F) -> Vec<Self::Element>
    where
        Self::Element: Clone,
        F: FnMut(&Self::Element, usize, &[Self::Element]) -> bool;

    /// See [`reduce`](crate::sequence::reduce).
    ///
    /// # Errors
    ///
    /// Returns [`ReduceError::EmptySequence`] when the sequence is empty and
    /// `initial_value` is `None`.
    fn reduce<F>(
        &self,
        callback: F,
        initial_value: Option<Self::Element>,
    ) -> Result<Self::Element, ReduceError>
    where
        Self::Element: Clone,
        F: FnMut(Self::Element, &Self::Element, usize, &[Self::Element]) -> Self::Element;

    /// See [`fold`](crate::sequence::fold).
    fn fold<A, F>(&self, initial_value: A, callback: F) -> A
    where
        F: FnMut(A, &Self::Element, usize, &[Self::Element]) -> A;

    /// See [`some`](crate::sequence::some).
    fn some<F>(&self, predicate: F) -> bool
    where
        F: FnMut(&Self::Element, usize, &[Self::Element]) -> bool;

    /// See [`every`](crate::sequence::every).
    fn every<F>(&self, predicate: F) -> bool
    where
        F: FnMut(&Self::Element, usize, &[Self::Element]) -> bool;

    /// See [`find`](crate::sequence::find).
    fn find<F>(&self, predicate: F) -> Option<&Self::Element>
    where
        F: FnMut(&Self::Element, usize, &[Self::Element]) -> bool;
}

impl<T> Sequence for [T] {
    type Element = T;

    #[inline]
    fn for_each<F>(&self, callback: F)
    where
        F: FnMut(&T, usize, &[T]),
    {
        traverse::for_each(self, callback);
    }

    #[inline]
    fn map<U, F>(&self, callback: F) -> Vec<U>
    where
        F: FnMut(&T, usize, &[T]) -> U,
    {
        traverse::map(self, callback)
    }

    #[inline]
    fn filter<F>(&self, predicate: F) -> Vec<T>
    where
        T: Clone,
        F: FnMut(&T, usize, &[T]) -> bool,
    {
        traverse::filter(self, predicate)
    }

    #[inline]
    fn reduce<F>(&self, callback: F, initial_value: Option<T>) -> Result<T, ReduceError>
    where
        T: Clone,
        F: FnMut(T, &T, usize, &[T]) -> T,
    {
        fold::reduce(self, callback, initial_value)
    }

    #[inline]
    fn fold<A, F>(&self, initial_value: A, callback: F) -> A
    where
        F: FnMut(A, &T, usize, &[T]) -> A,
    {
        fold::fold(self, initial_value, callback)
    }

    #[inline]
    fn some<F>(&self, predicate: F) -> bool
    where
        F: FnMut(&T, usize, &[T]) -> bool,
    {
        predicate::some(self, predicate)
    }

    #[inline]
    fn every<F>(&self, predicate: F) -> bool
    where
        F: FnMut(&T, usize, &[T]) -> bool,
    {
        predicate::every(self, predicate)
    }

    #[inline]
    fn find<F>(&self, predicate: F) -> Option<&T>
    where
        F: FnMut(&T, usize, &[T]) -> bool,
    {
        predicate::find(self, predicate)
    }
}

/// Extension trait adding [`flat`](crate::sequence::flat) to slices of
/// [`Nested`] values.
///
/// # Examples
///
/// ```rust
/// use seqops::nested;
/// use seqops::sequence::{Depth, Flatten};
///
/// let tree = nested![1, [2, [3]]];
/// assert_eq!(tree.flat(Depth::Unbounded), nested![1, 2, 3]);
/// ```
pub trait Flatten<T> {
    /// See [`flat`](crate::sequence::flat).
    fn flat(&self, depth: Depth) -> Vec<Nested<T>>;
}

impl<T> Flatten<T> for [Nested<T>]
where
    T: Clone,
{
    #[inline]
    fn flat(&self, depth: Depth) -> Vec<Nested<T>> {
        flatten::flat(self, depth)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_methods_match_free_functions() {
        let numbers = vec![1, 2, 3, 4];

        assert_eq!(
            numbers.map(|element, _, _| element + 1),
            traverse::map(&numbers, |element, _, _| element + 1)
        );
        assert_eq!(numbers.filter(|element, _, _| *element > 2), vec![3, 4]);
        assert_eq!(
            numbers.reduce(|accumulator, element, _, _| accumulator + element, None),
            Ok(10)
        );
        assert_eq!(
            numbers.fold(String::new(), |accumulator, element, _, _| accumulator
                + &element.to_string()),
            "1234"
        );
        assert!(numbers.some(|element, _, _| *element == 4));
        assert!(numbers.every(|element, _, _| *element > 0));
        assert_eq!(numbers.find(|element, _, _| *element > 1), Some(&2));
    }

    #[rstest]
    fn test_for_each_method_counts_calls() {
        let mut calls = 0;
        ["a", "b"].as_slice().for_each(|_, _, _| calls += 1);
        assert_eq!(calls, 2);
    }

    #[rstest]
    fn test_array_slice_map() {
        let array = [1_usize, 2, 3];
        assert_eq!(array[..].map(|element, index, _| element * index), vec![0, 2, 6]);
    }

    #[rstest]
    fn test_flatten_method() {
        let tree = crate::nested![[1], [[2]]];
        assert_eq!(tree.flat(Depth::Levels(1)), crate::nested![1, [2]]);
    }
}
