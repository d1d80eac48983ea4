//! Error type for sequence operations.
//!
//! Nearly every operation in this crate is total: "not found" and similar
//! outcomes are reported through `Option`. The only fault the library
//! raises itself is folding an empty sequence without a seed value.
//! Panics raised inside caller-supplied callbacks are never caught.

use thiserror::Error;

/// Error type for sequence operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SeqError {
    /// [`reduce`](crate::traverse::reduce) was called on an empty sequence
    /// with no initial value, so there is nothing to seed the accumulator.
    #[error("cannot reduce empty sequence without initial value")]
    EmptySequence,
}

/// Result alias for fallible sequence operations.
pub type Result<T> = std::result::Result<T, SeqError>;
