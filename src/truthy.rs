//! Truthiness of predicate results.
//!
//! [`filter`](crate::traverse::filter), [`some`](crate::search::some),
//! [`every`](crate::search::every) and [`find`](crate::search::find) accept
//! callbacks returning any [`Truthy`] value, not only `bool`.
//!
//! | Type | Falsy when |
//! |---|---|
//! | `bool` | `false` |
//! | `Option<T>` | `None` |
//! | integers | `0` |
//! | `f32`, `f64` | `0.0`, `-0.0` or NaN |
//! | `&str`, `String` | empty |
//! | `()` | always |

/// A value that can be read as a boolean condition.
///
/// # Examples
/// ```
/// use u_seqops::Truthy;
/// assert!(1_u8.is_truthy());
/// assert!(!0_i64.is_truthy());
/// assert!(!f64::NAN.is_truthy());
/// assert!(Some(0).is_truthy());
/// assert!(!"".is_truthy());
/// ```
pub trait Truthy {
    /// Returns `true` if `self` counts as a passing condition.
    fn is_truthy(&self) -> bool;
}

impl Truthy for bool {
    #[inline]
    fn is_truthy(&self) -> bool {
        *self
    }
}

impl<T> Truthy for Option<T> {
    #[inline]
    fn is_truthy(&self) -> bool {
        self.is_some()
    }
}

impl Truthy for () {
    #[inline]
    fn is_truthy(&self) -> bool {
        false
    }
}

impl Truthy for &str {
    #[inline]
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for String {
    #[inline]
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

macro_rules! impl_truthy_int {
    ($($t:ty),*) => {
        $(
            impl Truthy for $t {
                #[inline]
                fn is_truthy(&self) -> bool {
                    *self != 0
                }
            }
        )*
    };
}

impl_truthy_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! impl_truthy_float {
    ($($t:ty),*) => {
        $(
            impl Truthy for $t {
                #[inline]
                fn is_truthy(&self) -> bool {
                    // NaN != 0.0 holds, so NaN is excluded explicitly.
                    *self != 0.0 && !self.is_nan()
                }
            }
        )*
    };
}

impl_truthy_float!(f32, f64);
