//! # seqops
//!
//! Higher-order operations over ordered sequences, expressed as plain
//! functions on borrowed slices.
//!
//! ## Overview
//!
//! Every operation makes a single index-ascending pass over its input and
//! invokes a caller-supplied callback with `(element, index, sequence)`.
//! Inputs are borrowed immutably, so no operation can mutate the sequence it
//! walks.
//!
//! - **Traversal**: [`for_each`](sequence::for_each), [`map`](sequence::map),
//!   [`filter`](sequence::filter)
//! - **Folding**: [`reduce`](sequence::reduce), [`fold`](sequence::fold)
//! - **Predicates**: [`some`](sequence::some), [`every`](sequence::every),
//!   [`find`](sequence::find)
//! - **Flattening**: [`flat`](sequence::flat) over [`Nested`](sequence::Nested)
//!   sequences
//!
//! ## Feature Flags
//!
//! - `serde`: Serialize and deserialize `Nested` and `Depth`
//! - `tracing`: Emit `tracing` events from `reduce`, `flat` and the `try_*`
//!   operations
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use seqops::prelude::*;
//!
//! let numbers = vec![1, 2, 3, 4];
//! let doubled = map(&numbers, |element, _, _| element * 2);
//! assert_eq!(doubled, vec![2, 4, 6, 8]);
//!
//! let total = reduce(&numbers, |accumulator, element, _, _| accumulator + element, None);
//! assert_eq!(total, Ok(10));
//!
//! assert_eq!(numbers.find(|element, _, _| *element > 2), Some(&3));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the sequence operations, their support types and the
/// extension traits.
///
/// # Usage
///
/// ```rust
/// use seqops::prelude::*;
/// ```
pub mod prelude {
    pub use crate::nested;
    pub use crate::sequence::*;
}

pub mod sequence;
