//! Flattening nested sequences.
//!
//! A Rust slice is homogeneous, so a sequence that mixes plain elements with
//! sub-sequences is modelled explicitly by [`Nested`]. [`flat`] splices
//! sub-sequences into their parent, recursing at most [`Depth`] levels.
//!
//! # Examples
//!
//! ```rust
//! use seqops::nested;
//! use seqops::sequence::{Depth, flat};
//!
//! let tree = nested![1, [2, [3, [4]], 5]];
//!
//! assert_eq!(flat(&tree, Depth::Levels(2)), nested![1, 2, 3, [4], 5]);
//! assert_eq!(flat(&tree, Depth::Levels(0)), tree);
//! assert_eq!(flat(&tree, Depth::Unbounded), nested![1, 2, 3, 4, 5]);
//! ```

/// An element of a nested sequence: either a plain value or a sub-sequence.
///
/// With the `serde` feature, `Nested` serializes untagged: plain values as
/// themselves and sub-sequences as arrays. Deserialization tries the array
/// form first, so element types that are themselves arrays always read back
/// as sub-sequences.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Nested<T> {
    /// A sub-sequence, itself made of nested elements.
    Sequence(Vec<Nested<T>>),
    /// A plain value.
    Element(T),
}

impl<T> Nested<T> {
    /// Wraps a plain value.
    #[inline]
    pub const fn element(value: T) -> Self {
        Self::Element(value)
    }

    /// Builds a sub-sequence from any iterator of nested elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqops::sequence::Nested;
    ///
    /// let pair = Nested::sequence([Nested::element(1), Nested::element(2)]);
    /// assert!(pair.is_sequence());
    /// ```
    pub fn sequence<I>(elements: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        Self::Sequence(elements.into_iter().collect())
    }

    /// Returns `true` if this is a sub-sequence.
    #[inline]
    pub const fn is_sequence(&self) -> bool {
        matches!(self, Self::Sequence(_))
    }

    /// Returns a reference to the plain value, or `None` for a sub-sequence.
    #[inline]
    pub const fn as_element(&self) -> Option<&T> {
        match self {
            Self::Element(value) => Some(value),
            Self::Sequence(_) => None,
        }
    }

    /// Unwraps the plain value, or returns `None` for a sub-sequence.
    #[inline]
    pub fn into_element(self) -> Option<T> {
        match self {
            Self::Element(value) => Some(value),
            Self::Sequence(_) => None,
        }
    }
}

impl<T> From<Vec<Self>> for Nested<T> {
    fn from(elements: Vec<Self>) -> Self {
        Self::Sequence(elements)
    }
}

/// How many levels of nesting [`flat`] removes.
///
/// `Depth::default()` is one level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Depth {
    /// Remove at most this many levels. `Levels(0)` copies the input as is.
    Levels(usize),
    /// Remove every level of nesting.
    Unbounded,
}

impl Depth {
    /// Converts a signed depth, treating any negative value as `Levels(0)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqops::sequence::Depth;
    ///
    /// assert_eq!(Depth::from_signed(3), Depth::Levels(3));
    /// assert_eq!(Depth::from_signed(-1), Depth::Levels(0));
    /// ```
    #[inline]
    pub const fn from_signed(depth: isize) -> Self {
        if depth > 0 {
            Self::Levels(depth.unsigned_abs())
        } else {
            Self::Levels(0)
        }
    }

    /// Returns `true` if no further level may be flattened.
    #[inline]
    pub const fn is_exhausted(self) -> bool {
        matches!(self, Self::Levels(0))
    }

    /// The depth left after descending one level.
    #[inline]
    const fn descend(self) -> Self {
        match self {
            Self::Levels(levels) => Self::Levels(levels.saturating_sub(1)),
            Self::Unbounded => Self::Unbounded,
        }
    }
}

impl Default for Depth {
    fn default() -> Self {
        Self::Levels(1)
    }
}

impl From<usize> for Depth {
    fn from(levels: usize) -> Self {
        Self::Levels(levels)
    }
}

/// Flattens `sequence` into a new `Vec`, splicing sub-sequences in place.
///
/// A sub-sequence met while `depth` is not exhausted is flattened
/// recursively with one level less and its results are spliced into the
/// output in order. Everything else, including sub-sequences past the depth
/// limit, is cloned into the output unchanged.
///
/// # Examples
///
/// ```rust
/// use seqops::nested;
/// use seqops::sequence::{Depth, flat};
///
/// assert_eq!(flat(&nested![1, [2, 3]], Depth::default()), nested![1, 2, 3]);
/// assert_eq!(flat(&nested![1, [2, 3]], Depth::Levels(0)), nested![1, [2, 3]]);
/// assert_eq!(flat(&nested![[[1]], []], Depth::Levels(1)), nested![[1]]);
/// ```
pub fn flat<T>(sequence: &[Nested<T>], depth: Depth) -> Vec<Nested<T>>
where
    T: Clone,
{
    #[cfg(feature = "tracing")]
    tracing::trace!(length = sequence.len(), ?depth, "flattening sequence");

    let mut flattened = Vec::with_capacity(sequence.len());
    flatten_into(sequence, depth, &mut flattened);
    flattened
}

fn flatten_into<T>(sequence: &[Nested<T>], depth: Depth, output: &mut Vec<Nested<T>>)
where
    T: Clone,
{
    for element in sequence {
        match element {
            Nested::Sequence(inner) if !depth.is_exhausted() => {
                flatten_into(inner, depth.descend(), output);
            }
            other => output.push(other.clone()),
        }
    }
}

/// Builds a `Vec<Nested<T>>` from a bracketed literal.
///
/// Each item is either a bracketed group, which becomes a
/// [`Nested::Sequence`](crate::sequence::Nested::Sequence), or a literal
/// (signed literals included), an identifier or a parenthesized expression,
/// which becomes a [`Nested::Element`](crate::sequence::Nested::Element).
///
/// # Examples
///
/// ```rust
/// use seqops::nested;
/// use seqops::sequence::Nested;
///
/// let offset = 10;
/// let tree = nested![1, [-2, (offset + 3)]];
/// assert_eq!(
///     tree,
///     vec![
///         Nested::Element(1),
///         Nested::Sequence(vec![Nested::Element(-2), Nested::Element(13)]),
///     ]
/// );
/// ```
#[macro_export]
macro_rules! nested {
    (@collect [$($output:expr),*]) => {
        ::std::vec![$($output),*]
    };
    (@collect [$($output:expr),*] [$($inner:tt)*] $(, $($rest:tt)*)?) => {
        $crate::nested!(
            @collect [$($output,)* $crate::sequence::Nested::Sequence($crate::nested![$($inner)*])]
            $($($rest)*)?
        )
    };
    (@collect [$($output:expr),*] $element:literal $(, $($rest:tt)*)?) => {
        $crate::nested!(
            @collect [$($output,)* $crate::sequence::Nested::Element($element)]
            $($($rest)*)?
        )
    };
    (@collect [$($output:expr),*] $element:tt $(, $($rest:tt)*)?) => {
        $crate::nested!(
            @collect [$($output,)* $crate::sequence::Nested::Element($element)]
            $($($rest)*)?
        )
    };
    ($($items:tt)*) => {
        $crate::nested!(@collect [] $($items)*)
    };
}
