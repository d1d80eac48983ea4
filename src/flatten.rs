//! Depth-limited flattening of nested sequences.
//!
//! A [`Nested<T>`] is either a plain item or a list of further nested
//! values, which lets one slice mix scalars and sub-sequences at any depth.
//! [`flat`] splices sub-lists into their parent up to a [`Depth`] limit.
//!
//! # Examples
//! ```
//! use u_seqops::{flat, nested, Depth};
//! let data = nested![1, [2, 3], [4, [5, 6, [7, 8]]]];
//!
//! assert_eq!(flat(&data, None), nested![1, 2, 3, 4, [5, 6, [7, 8]]]);
//! assert_eq!(flat(&data, Some(Depth::Levels(2))), nested![1, 2, 3, 4, 5, 6, [7, 8]]);
//! assert_eq!(flat(&data, Some(Depth::Unbounded)), nested![1, 2, 3, 4, 5, 6, 7, 8]);
//! ```

use tracing::trace;

/// A value that is either a single item or a list of nested values.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Nested<T> {
    /// A leaf element.
    Item(T),
    /// A sub-sequence.
    List(Vec<Nested<T>>),
}

impl<T> Nested<T> {
    /// Returns `true` if this is a [`Nested::List`].
    pub fn is_list(&self) -> bool {
        matches!(self, Nested::List(_))
    }

    /// Number of list levels enclosing the deepest item.
    ///
    /// An item has depth 0. A list has depth one more than its deepest
    /// element, and an empty list has depth 1.
    ///
    /// # Examples
    /// ```
    /// use u_seqops::{nested, Nested};
    /// assert_eq!(Nested::Item(1).depth(), 0);
    /// assert_eq!(Nested::List(nested![1, [2, [3]]]).depth(), 3);
    /// ```
    pub fn depth(&self) -> usize {
        match self {
            Nested::Item(_) => 0,
            Nested::List(items) => 1 + items.iter().map(Nested::depth).max().unwrap_or(0),
        }
    }
}

impl<T> From<T> for Nested<T> {
    fn from(item: T) -> Self {
        Nested::Item(item)
    }
}

/// How many levels of nesting [`flat`] removes.
///
/// Defaults to `Levels(1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Depth {
    /// Remove at most this many levels. `Levels(0)` leaves the input as is.
    Levels(usize),
    /// Remove every level.
    Unbounded,
}

impl Depth {
    /// Returns `true` once no further levels may be removed.
    pub fn is_exhausted(self) -> bool {
        matches!(self, Depth::Levels(0))
    }

    /// The depth remaining one level further down.
    pub fn descend(self) -> Self {
        match self {
            Depth::Levels(n) => Depth::Levels(n.saturating_sub(1)),
            Depth::Unbounded => Depth::Unbounded,
        }
    }
}

impl Default for Depth {
    fn default() -> Self {
        Depth::Levels(1)
    }
}

impl From<usize> for Depth {
    fn from(levels: usize) -> Self {
        Depth::Levels(levels)
    }
}

/// Flattens `seq` by up to `depth` levels, defaulting to one.
///
/// Each [`Nested::List`] within reach is replaced by its elements, in
/// order. Items pass through unchanged. Lists beyond the depth limit are
/// kept whole.
///
/// # Complexity
/// Time: O(total elements visited), Space: O(output + recursion depth)
///
/// # Examples
/// ```
/// use u_seqops::{flat, nested, Depth};
/// let data = nested![[1, [2]], 3];
/// assert_eq!(flat(&data, Some(Depth::Levels(0))), data);
/// assert_eq!(flat(&data, Some(Depth::from(5))), nested![1, 2, 3]);
/// ```
pub fn flat<T: Clone>(seq: &[Nested<T>], depth: Option<Depth>) -> Vec<Nested<T>> {
    let depth = depth.unwrap_or_default();
    trace!(?depth, len = seq.len(), "flattening sequence");
    let mut out = Vec::with_capacity(seq.len());
    flatten_into(seq, depth, &mut out);
    out
}

fn flatten_into<T: Clone>(seq: &[Nested<T>], depth: Depth, out: &mut Vec<Nested<T>>) {
    if depth.is_exhausted() {
        out.extend_from_slice(seq);
        return;
    }
    for elem in seq {
        match elem {
            Nested::List(inner) => {
                trace!(len = inner.len(), "splicing sub-sequence");
                flatten_into(inner, depth.descend(), out);
            }
            Nested::Item(_) => out.push(elem.clone()),
        }
    }
}

/// Builds a `Vec<Nested<_>>` from a bracketed literal.
///
/// Bracket groups become [`Nested::List`], and every other comma-separated
/// token becomes a [`Nested::Item`]. Items must be single tokens, so wrap
/// negative numbers or other compound expressions in parentheses.
///
/// # Examples
/// ```
/// use u_seqops::{nested, Nested};
/// let v = nested![1, [2, (-3)]];
/// assert_eq!(
///     v,
///     vec![
///         Nested::Item(1),
///         Nested::List(vec![Nested::Item(2), Nested::Item(-3)]),
///     ]
/// );
/// ```
#[macro_export]
macro_rules! nested {
    (@elem [$($inner:tt)*]) => {
        $crate::Nested::List($crate::nested![$($inner)*])
    };
    (@elem $item:expr) => {
        $crate::Nested::Item($item)
    };
    ($($elem:tt),* $(,)?) => {
        vec![$($crate::nested!(@elem $elem)),*]
    };
}
