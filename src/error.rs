//! Error types returned by fallible interval and interval-set operations.

/// The error type shared by every fallible operation in this crate.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A value's domain does not match the domain an interval or interval
    /// set was constructed over, so the two cannot be compared or combined.
    #[error(transparent)]
    TypeMismatch(#[from] TypeMismatchError),

    /// An internal invariant was violated, e.g. an unchecked constructor
    /// was called with bounds it requires the caller to have already
    /// validated.
    #[error(transparent)]
    InvariantViolation(#[from] InvariantViolationError),
}

/// A value's domain could not be reconciled with the domain of the
/// interval or set it was compared against.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, thiserror::Error)]
#[error("type mismatch: {msg}")]
pub struct TypeMismatchError {
    msg: &'static str,
}

impl TypeMismatchError {
    /// Creates a new `TypeMismatchError` with a static message.
    pub const fn new(msg: &'static str) -> Self {
        Self { msg }
    }
}

/// A structural invariant of an interval or interval set was violated.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, thiserror::Error)]
#[error("invariant violated: {msg}")]
pub struct InvariantViolationError {
    msg: &'static str,
}

impl InvariantViolationError {
    /// Creates a new `InvariantViolationError` with a static message.
    pub const fn new(msg: &'static str) -> Self {
        Self { msg }
    }
}

/// Convenience alias for operations in this crate that can fail.
pub type Result<T> = core::result::Result<T, Error>;
