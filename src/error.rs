//! Contract-violation errors
//!
//! Every failure a container can report is a programmer error: a constructor
//! invariant was violated or an unwrap targeted the wrong variant. The
//! library raises these at the failing call site and never catches them
//! internally. Closures supplied to combinators are never wrapped either;
//! whatever they raise propagates to the caller unmodified.
//!
//! We use `thiserror` for the `Display` and `Error` trait implementations.

use thiserror::Error;

/// Result type alias for the fallible container operations
pub type Result<T> = std::result::Result<T, Error>;

/// Contract violations raised by constructors and the unwrap family
///
/// Each variant carries a human-readable detail: either the default message
/// for that violation or the context message supplied by the caller
/// (`expect`, `force_expect`).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
    /// A constructor was given an argument that violates the variant's
    /// invariant (e.g. `try_some` with an absent value)
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// `unwrap` was called before the variant was inspected with
    /// `is_some`/`is_none` (or `is_ok`/`is_err`)
    #[error("unchecked unwrap: {0}")]
    UncheckedUnwrap(String),

    /// `unwrap` targeted an `Optional` holding nothing
    #[error("unwrap on None: {0}")]
    UnwrapOnNone(String),

    /// `unwrap` targeted an `Outcome` holding an error
    #[error("unwrap on Err: {0}")]
    UnwrapOnErr(String),

    /// `unwrap_err` targeted an `Outcome` holding a success value
    #[error("unwrap on Ok: {0}")]
    UnwrapOnOk(String),

    /// `force_unwrap` targeted an `Optional` holding nothing
    #[error("force unwrap on None: {0}")]
    ForceUnwrapOnNone(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_invalid_argument() {
        let err = Error::InvalidArgument("some requires a present value".to_string());
        let msg = err.to_string();
        assert!(msg.contains("invalid argument"));
        assert!(msg.contains("some requires a present value"));
    }

    #[test]
    fn test_error_display_unchecked_unwrap() {
        let err = Error::UncheckedUnwrap("call is_some or is_none first".to_string());
        assert!(err.to_string().contains("unchecked unwrap"));
    }

    #[test]
    fn test_error_display_unwrap_on_none() {
        let err = Error::UnwrapOnNone("expected a port number".to_string());
        let msg = err.to_string();
        assert!(msg.contains("unwrap on None"));
        assert!(msg.contains("expected a port number"));
    }

    #[test]
    fn test_error_display_unwrap_on_err_and_ok() {
        assert!(Error::UnwrapOnErr("x".to_string())
            .to_string()
            .contains("unwrap on Err"));
        assert!(Error::UnwrapOnOk("x".to_string())
            .to_string()
            .contains("unwrap on Ok"));
    }

    #[test]
    fn test_error_display_force_unwrap_on_none() {
        let err = Error::ForceUnwrapOnNone("force_unwrap called on None".to_string());
        assert!(err.to_string().contains("force unwrap on None"));
    }

    #[test]
    fn test_errors_are_comparable() {
        assert_eq!(
            Error::UnwrapOnNone("a".to_string()),
            Error::UnwrapOnNone("a".to_string())
        );
        assert_ne!(
            Error::UnwrapOnNone("a".to_string()),
            Error::ForceUnwrapOnNone("a".to_string())
        );
    }
}
