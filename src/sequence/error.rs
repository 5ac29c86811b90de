//! Error types for sequence operations.
//!
//! Callbacks surface their own failures unmodified, so the only error the
//! operations define themselves is the unseeded fold over nothing.

/// Represents an error returned by [`reduce`](super::reduce).
///
/// # Examples
///
/// ```rust
/// use seqops::sequence::{ReduceError, reduce};
///
/// let empty: Vec<i32> = Vec::new();
/// let result = reduce(&empty, |accumulator, element, _, _| accumulator + element, None);
/// assert_eq!(result, Err(ReduceError::EmptySequence));
/// assert_eq!(
///     format!("{}", ReduceError::EmptySequence),
///     "cannot reduce an empty sequence without an initial value"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReduceError {
    /// The sequence had no elements and no initial value was supplied, so
    /// there was nothing to seed the accumulator with.
    EmptySequence,
}

impl std::fmt::Display for ReduceError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptySequence => write!(
                formatter,
                "cannot reduce an empty sequence without an initial value"
            ),
        }
    }
}

impl std::error::Error for ReduceError {}
