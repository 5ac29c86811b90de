//! Higher-order operations over ordered sequences.
//!
//! All operations share one shape: a single index-ascending pass over a
//! borrowed slice, invoking a callback with the current element, its index
//! and the whole sequence. They differ only in what they do with the
//! callback's result:
//!
//! - [`for_each`]: Run the callback for its side effects
//! - [`map`]: Collect every callback result into a new `Vec`
//! - [`filter`]: Keep the elements whose predicate returned `true`
//! - [`reduce`] / [`fold`]: Thread an accumulator through the sequence
//! - [`some`] / [`every`]: Existential and universal checks, short-circuiting
//! - [`find`]: The first element whose predicate returned `true`
//! - [`flat`]: Splice nested sequences into their parent up to a [`Depth`]
//!
//! The same operations are available as methods through the [`Sequence`]
//! and [`Flatten`] extension traits.
//!
//! # Examples
//!
//! ```rust
//! use seqops::nested;
//! use seqops::sequence::{Depth, Nested, every, filter, flat, some};
//!
//! let numbers = [1, 2, 3, 4, 5, 6];
//! assert_eq!(filter(&numbers, |element, _, _| element % 2 == 0), vec![2, 4, 6]);
//! assert!(some(&numbers, |element, _, _| *element > 5));
//! assert!(!every(&numbers, |element, _, _| *element > 5));
//!
//! let tree: Vec<Nested<i32>> = nested![1, [2, [3]]];
//! assert_eq!(flat(&tree, Depth::Unbounded), nested![1, 2, 3]);
//! ```

mod error;
mod extension;
mod fallible;
mod flatten;
mod fold;
mod predicate;
mod traverse;

pub use error::ReduceError;
pub use extension::{Flatten, Sequence};
pub use fallible::{try_filter, try_fold, try_for_each, try_map};
pub use flatten::{Depth, Nested, flat};
pub use fold::{fold, reduce};
pub use predicate::{every, find, some};
pub use traverse::{filter, for_each, map};

// Distinct inputs may be processed from many threads at once.
static_assertions::assert_impl_all!(Nested<i32>: Send, Sync);
static_assertions::assert_impl_all!(Nested<String>: Send, Sync);
static_assertions::assert_impl_all!(Depth: Send, Sync, Copy);
static_assertions::assert_impl_all!(ReduceError: Send, Sync, std::error::Error);
