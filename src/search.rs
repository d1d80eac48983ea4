//! Short-circuiting queries over a sequence.
//!
//! Each function stops invoking its callback as soon as the answer is
//! known. When no element decides the outcome, the callback has been
//! invoked exactly once per element.

use crate::truthy::Truthy;

/// Returns `true` as soon as `cb(element, index, seq)` is truthy.
///
/// Returns `false` for an empty sequence.
///
/// # Examples
/// ```
/// use u_seqops::some;
/// assert!(some(&[-4, 3, 6], |x, _, _| *x > 0));
/// assert!(!some(&[-4, -3, -6], |x, _, _| *x > 0));
/// ```
pub fn some<T, R, F>(seq: &[T], mut cb: F) -> bool
where
    R: Truthy,
    F: FnMut(&T, usize, &[T]) -> R,
{
    seq.iter()
        .enumerate()
        .any(|(i, elem)| cb(elem, i, seq).is_truthy())
}

/// Returns `false` as soon as `cb(element, index, seq)` is falsy.
///
/// Returns `true` for an empty sequence.
///
/// # Examples
/// ```
/// use u_seqops::every;
/// assert!(every(&[-4, -3, -6], |x, _, _| *x < 0));
/// assert!(!every(&[-4, 3, 6], |x, _, _| *x < 0));
/// ```
pub fn every<T, R, F>(seq: &[T], mut cb: F) -> bool
where
    R: Truthy,
    F: FnMut(&T, usize, &[T]) -> R,
{
    seq.iter()
        .enumerate()
        .all(|(i, elem)| cb(elem, i, seq).is_truthy())
}

/// Returns the first element for which `cb(element, index, seq)` is
/// truthy, or `None` if there is none.
///
/// # Examples
/// ```
/// use u_seqops::find;
/// assert_eq!(find(&[1, 2, 3], |x, _, _| *x == 2), Some(&2));
/// assert_eq!(find(&[1, 2, 3], |x, _, _| *x == 5), None);
/// ```
pub fn find<'a, T, R, F>(seq: &'a [T], mut cb: F) -> Option<&'a T>
where
    R: Truthy,
    F: FnMut(&T, usize, &[T]) -> R,
{
    seq.iter()
        .enumerate()
        .find(|&(i, elem)| cb(elem, i, seq).is_truthy())
        .map(|(_, elem)| elem)
}

/// Returns `true` if any element equals `target`.
///
/// Comparison is `PartialEq` with no conversion between types, so a float
/// NaN never matches, not even itself.
///
/// # Examples
/// ```
/// use u_seqops::includes;
/// assert!(includes(&[1, 2, 3], &2));
/// assert!(!includes(&[1, 2, 3], &4));
/// assert!(!includes(&[f64::NAN], &f64::NAN));
/// ```
pub fn includes<T: PartialEq>(seq: &[T], target: &T) -> bool {
    seq.iter().any(|elem| elem == target)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(300))]

        #[test]
        fn some_call_count_matches_first_hit(
            data in proptest::collection::vec(0_i32..10, 0..64),
            target in 0_i32..10,
        ) {
            let mut calls = 0;
            let hit = some(&data, |x, _, _| { calls += 1; *x == target });
            let expected = data.iter().position(|x| *x == target);
            prop_assert_eq!(hit, expected.is_some());
            prop_assert_eq!(calls, expected.map_or(data.len(), |p| p + 1));
        }

        #[test]
        fn every_call_count_matches_first_miss(
            data in proptest::collection::vec(0_i32..10, 0..64),
            bound in 0_i32..10,
        ) {
            let mut calls = 0;
            let all = every(&data, |x, _, _| { calls += 1; *x < bound });
            let expected = data.iter().position(|x| *x >= bound);
            prop_assert_eq!(all, expected.is_none());
            prop_assert_eq!(calls, expected.map_or(data.len(), |p| p + 1));
        }

        #[test]
        fn find_agrees_with_iterator_find(
            data in proptest::collection::vec(0_i32..10, 0..64),
            target in 0_i32..10,
        ) {
            let expected = data.iter().find(|x| **x == target);
            prop_assert_eq!(find(&data, |x, _, _| *x == target), expected);
        }

        #[test]
        fn includes_agrees_with_contains(
            data in proptest::collection::vec(0_i32..10, 0..64),
            target in 0_i32..10,
        ) {
            prop_assert_eq!(includes(&data, &target), data.contains(&target));
        }

        #[test]
        fn some_is_dual_of_every(data in proptest::collection::vec(0_i32..10, 0..64)) {
            let any_even = some(&data, |x, _, _| x % 2 == 0);
            let all_odd = every(&data, |x, _, _| x % 2 != 0);
            prop_assert_eq!(any_even, !all_odd);
        }
    }
}
