//! Whole-sequence traversals: visit, transform, select and fold.
//!
//! Every callback receives `(element, index, sequence)`, with the
//! accumulator prepended for folds. Elements are visited exactly once in
//! ascending index order, and the input slice is only ever borrowed.
//!
//! # Operations
//!
//! | Function | Output | Calls |
//! |---|---|---|
//! | [`for_each`] | `()` | `n` |
//! | [`map`] | `Vec<U>` of length `n` | `n` |
//! | [`filter`] | `Vec<T>` of passing elements | `n` |
//! | [`reduce`] | `Result<T>` | `n` with a seed, `n − 1` without |
//! | [`reduce_with`] | `A` | `n` |

use tracing::debug;

use crate::error::{Result, SeqError};
use crate::truthy::Truthy;

/// Invokes `cb(element, index, seq)` once per element, in index order.
///
/// There is no early exit; use [`some`](crate::search::some) or
/// [`every`](crate::search::every) to stop part-way.
///
/// # Examples
/// ```
/// use u_seqops::for_each;
/// let mut seen = Vec::new();
/// for_each(&["a", "b"], |x, i, _| seen.push(format!("{i}:{x}")));
/// assert_eq!(seen, ["0:a", "1:b"]);
/// ```
pub fn for_each<T, F>(seq: &[T], mut cb: F)
where
    F: FnMut(&T, usize, &[T]),
{
    for (i, elem) in seq.iter().enumerate() {
        cb(elem, i, seq);
    }
}

/// Builds a new vector whose `i`-th element is `cb(seq[i], i, seq)`.
///
/// The output always has the same length as `seq`.
///
/// # Complexity
/// Time: O(n), Space: O(n)
///
/// # Examples
/// ```
/// use u_seqops::map;
/// assert_eq!(map(&["a", "b", "c"], |_, i, _| i * 2), vec![0, 2, 4]);
/// ```
pub fn map<T, U, F>(seq: &[T], mut cb: F) -> Vec<U>
where
    F: FnMut(&T, usize, &[T]) -> U,
{
    let mut out = Vec::with_capacity(seq.len());
    for (i, elem) in seq.iter().enumerate() {
        out.push(cb(elem, i, seq));
    }
    out
}

/// Returns clones of the elements for which `cb` is truthy, in their
/// original relative order.
///
/// # Examples
/// ```
/// use u_seqops::filter;
/// let kept = filter(&["a", "b", "c"], |x, i, _| *x == "a" || i == 2);
/// assert_eq!(kept, vec!["a", "c"]);
/// ```
pub fn filter<T, R, F>(seq: &[T], mut cb: F) -> Vec<T>
where
    T: Clone,
    R: Truthy,
    F: FnMut(&T, usize, &[T]) -> R,
{
    let mut out = Vec::new();
    for (i, elem) in seq.iter().enumerate() {
        if cb(elem, i, seq).is_truthy() {
            out.push(elem.clone());
        }
    }
    out
}

/// Folds `seq` into a single value of the element type.
///
/// When `initial` is `Some(v)`, the accumulator starts at `v` and the
/// first call is `cb(v, &seq[0], 0, seq)`. When it is `None`, the
/// accumulator starts at a clone of `seq[0]` and the first call is
/// `cb(seq[0], &seq[1], 1, seq)`.
///
/// Only `None` means "no seed". `Some` of a nullish value, such as
/// `Some(None)` for an `Option` element type, is a real seed.
///
/// # Errors
/// Returns [`SeqError::EmptySequence`] if `seq` is empty and `initial` is
/// `None`. An empty `seq` with a seed returns the seed unchanged.
///
/// # Examples
/// ```
/// use u_seqops::reduce;
/// let v = [5, 3, 7];
/// assert_eq!(reduce(&v, |acc, x, _, _| acc + x, Some(4)), Ok(19));
/// assert_eq!(reduce(&v, |acc, x, _, _| acc + x, None), Ok(15));
/// assert!(reduce(&[] as &[i32], |acc, x, _, _| acc + x, None).is_err());
/// ```
pub fn reduce<T, F>(seq: &[T], mut cb: F, initial: Option<T>) -> Result<T>
where
    T: Clone,
    F: FnMut(T, &T, usize, &[T]) -> T,
{
    let (mut acc, start) = match initial {
        Some(seed) => (seed, 0),
        None => match seq.first() {
            Some(first) => (first.clone(), 1),
            None => {
                debug!("reduce called on empty sequence without initial value");
                return Err(SeqError::EmptySequence);
            }
        },
    };
    for (i, elem) in seq.iter().enumerate().skip(start) {
        acc = cb(acc, elem, i, seq);
    }
    Ok(acc)
}

/// Folds `seq` into an accumulator of a different type `A`.
///
/// Always seeded, so every element is visited and the call cannot fail.
///
/// # Examples
/// ```
/// use u_seqops::reduce_with;
/// let words = ["ab", "cde", "f"];
/// let total = reduce_with(&words, |acc, w, _, _| acc + w.len(), 0_usize);
/// assert_eq!(total, 6);
/// ```
pub fn reduce_with<T, A, F>(seq: &[T], mut cb: F, initial: A) -> A
where
    F: FnMut(A, &T, usize, &[T]) -> A,
{
    let mut acc = initial;
    for (i, elem) in seq.iter().enumerate() {
        acc = cb(acc, elem, i, seq);
    }
    acc
}
