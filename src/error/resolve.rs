use thiserror::Error;

/// Domain errors raised by identity resolution.
///
/// A lookup miss is a legitimate terminal outcome, not a transient fault;
/// callers map it to "no such entity" and never retry.
#[derive(Error, Debug)]
pub enum ResolveError {
    /// Neither the redirect table nor the canonical table matched the input.
    #[error("No entity found for name {0:?}")]
    EntityNotFound(String),
}
