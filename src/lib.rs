//! # u-seqops
//!
//! Index-aware sequence primitives for the U-Engine ecosystem.
//!
//! This crate provides the classic array iteration operations as free
//! functions over slices. Every callback receives the element, its index,
//! and the whole sequence. Inputs are only ever borrowed, and each call is
//! a single synchronous pass.
//!
//! ## Modules
//!
//! - [`traverse`] — [`for_each`], [`map`], [`filter`], [`reduce`], [`reduce_with`]
//! - [`search`] — short-circuiting [`some`], [`every`], [`find`], [`includes`]
//! - [`flatten`] — [`Nested`] values and depth-limited [`flat`]
//! - [`join`](mod@join) — [`join()`] and [`join_nullable`]
//! - [`truthy`] — the [`Truthy`] trait accepted from predicate callbacks
//! - [`error`] — [`SeqError`]
//!
//! ## Design Philosophy
//!
//! - **Optional means `Option`**: defaulted parameters are `Option<_>`, so an
//!   omitted argument is never confused with a falsy one
//! - **Absence is not an error**: "not found" is `None`; only an unseedable
//!   fold returns `Err`
//! - **Property-based testing**: traversal invariants verified via proptest
//!
//! ## Example
//! ```
//! use u_seqops::{filter, map, reduce};
//! let v = [5, 3, 7];
//! let doubled = map(&v, |x, _, _| x * 2);
//! let big = filter(&doubled, |x, _, _| *x > 6);
//! assert_eq!(big, vec![10, 14]);
//! assert_eq!(reduce(&big, |acc, x, _, _| acc + x, None), Ok(24));
//! ```

pub mod error;
pub mod flatten;
pub mod join;
pub mod search;
pub mod traverse;
pub mod truthy;

pub use error::{Result, SeqError};
pub use flatten::{flat, Depth, Nested};
pub use join::{join, join_nullable, DEFAULT_SEPARATOR, NULL_LITERAL};
pub use search::{every, find, includes, some};
pub use traverse::{filter, for_each, map, reduce, reduce_with};
pub use truthy::Truthy;
