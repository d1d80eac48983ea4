//! String concatenation of sequence elements.
//!
//! Elements are rendered with their `Display` form and separated by a
//! separator string, [`DEFAULT_SEPARATOR`] unless one is given.
//!
//! For sequences of optional values, [`join_nullable`] treats a missing
//! *first* element as the empty string. Missing elements anywhere else
//! render as [`NULL_LITERAL`].

use std::fmt::Display;

/// Separator used when none is passed.
pub const DEFAULT_SEPARATOR: &str = ",";

/// Rendering of an absent element after the first position.
pub const NULL_LITERAL: &str = "null";

/// Concatenates the `Display` form of each element, separated by
/// `separator` (default `","`).
///
/// An empty sequence yields an empty string.
///
/// # Examples
/// ```
/// use u_seqops::join;
/// assert_eq!(join(&[1, 2, 3], None), "1,2,3");
/// assert_eq!(join(&[1, 2, 3], Some(" ")), "1 2 3");
/// assert_eq!(join::<i32>(&[], None), "");
/// ```
pub fn join<T: Display>(seq: &[T], separator: Option<&str>) -> String {
    join_parts(seq.iter().map(Some), separator)
}

/// Like [`join`], for sequences whose elements may be absent.
///
/// A `None` at index 0 contributes nothing. A `None` at any later index
/// renders as [`NULL_LITERAL`].
///
/// # Examples
/// ```
/// use u_seqops::join_nullable;
/// assert_eq!(join_nullable(&[None, Some(2), Some(3)], None), ",2,3");
/// assert_eq!(join_nullable(&[Some(1), None, Some(3)], None), "1,null,3");
/// ```
pub fn join_nullable<T: Display>(seq: &[Option<T>], separator: Option<&str>) -> String {
    join_parts(seq.iter().map(Option::as_ref), separator)
}

fn join_parts<I, D>(parts: I, separator: Option<&str>) -> String
where
    I: IntoIterator<Item = Option<D>>,
    D: Display,
{
    let separator = separator.unwrap_or(DEFAULT_SEPARATOR);
    let mut out = String::new();
    for (i, part) in parts.into_iter().enumerate() {
        if i > 0 {
            out.push_str(separator);
        }
        match part {
            Some(value) => out.push_str(&value.to_string()),
            None if i == 0 => {}
            None => out.push_str(NULL_LITERAL),
        }
    }
    out
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(300))]

        #[test]
        fn join_matches_std_join(data in proptest::collection::vec(any::<i32>(), 0..32)) {
            let rendered: Vec<String> = data.iter().map(ToString::to_string).collect();
            prop_assert_eq!(join(&data, None), rendered.join(DEFAULT_SEPARATOR));
        }

        #[test]
        fn separator_count(data in proptest::collection::vec(any::<u8>(), 0..32)) {
            let joined = join(&data, Some("|"));
            prop_assert_eq!(joined.matches('|').count(), data.len().saturating_sub(1));
        }
    }
}
