//! Error-accumulating container
//!
//! [`Validation<T, E>`] holds either a validated value (`Success`) or a
//! non-empty ordered list of failures (`Failure`). Unlike [`Outcome`],
//! which short-circuits, [`Validation::assert`] collects the failures of
//! every check in a chain: `a.assert(b).assert(c)` reports the failures of
//! `a`, `b`, and `c` in that order, never stopping early.
//!
//! Validation is built on top of [`Optional`] only — its bridges
//! ([`Validation::get_success`]/[`Validation::get_failure`]) produce
//! `Optional`s, and it carries no unwrap family of its own.
//!
//! [`Outcome`]: crate::Outcome

use std::fmt;

use crate::error::{Error, Result};
use crate::optional::Optional;

#[derive(Debug, Clone, PartialEq, Eq)]
enum State<T, E> {
    Success(T),
    Failure(Vec<E>),
}

/// Container for a check that either produced a value or accumulated errors
///
/// ## Invariants
///
/// - A `Failure` always holds at least one error, even when constructed
///   from a single one
/// - Accumulation order is left before right: in `a.assert(b)`, `a`'s
///   errors precede `b`'s
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validation<T, E> {
    state: State<T, E>,
}

impl<T, E> Validation<T, E> {
    /// Construct a successful validation
    pub fn success(value: T) -> Self {
        Validation {
            state: State::Success(value),
        }
    }

    /// Construct a failed validation from a single error
    ///
    /// The error is wrapped into a one-element list.
    pub fn failure(error: E) -> Self {
        Validation {
            state: State::Failure(vec![error]),
        }
    }

    /// Construct a failed validation from an already-collected error list
    ///
    /// Fails with [`Error::InvalidArgument`] when the list is empty, which
    /// would violate the non-empty `Failure` invariant.
    pub fn failures(errors: Vec<E>) -> Result<Self> {
        if errors.is_empty() {
            return Err(Error::InvalidArgument(
                "failures requires at least one error".to_string(),
            ));
        }
        Ok(Validation {
            state: State::Failure(errors),
        })
    }

    /// True when this is a `Success`
    pub fn is_success(&self) -> bool {
        matches!(self.state, State::Success(_))
    }

    /// True when this is a `Failure`
    pub fn is_failure(&self) -> bool {
        matches!(self.state, State::Failure(_))
    }

    /// Convert the success side into an [`Optional`]
    pub fn get_success(self) -> Optional<T> {
        match self.state {
            State::Success(v) => Optional::some(v),
            State::Failure(_) => Optional::none(),
        }
    }

    /// Convert the failure side into an [`Optional`] of the error list
    pub fn get_failure(self) -> Optional<Vec<E>> {
        match self.state {
            State::Success(_) => Optional::none(),
            State::Failure(errors) => Optional::some(errors),
        }
    }

    /// Combine two independent checks, accumulating every failure
    ///
    /// - `Success.assert(other)` returns `other`: only the rightmost
    ///   success value survives a chain
    /// - `Failure.assert(Failure)` concatenates the error lists, left
    ///   errors first
    /// - `Failure.assert(Success)` keeps the existing errors; the success
    ///   contributes nothing
    pub fn assert(self, other: Self) -> Self {
        match (self.state, other.state) {
            (State::Success(_), state) => Validation { state },
            (State::Failure(mut errors), State::Failure(right)) => {
                errors.extend(right);
                Validation {
                    state: State::Failure(errors),
                }
            }
            (State::Failure(errors), State::Success(_)) => Validation {
                state: State::Failure(errors),
            },
        }
    }

    /// Chain a computation that needs the validated value
    ///
    /// Fail-fast, unlike [`Validation::assert`]: a `Failure` passes through
    /// with its errors unchanged and the closure never runs, because the
    /// downstream computation depends on a value that does not exist.
    pub fn flat_map<U, F>(self, f: F) -> Validation<U, E>
    where
        F: FnOnce(T) -> Validation<U, E>,
    {
        match self.state {
            State::Success(v) => f(v),
            State::Failure(errors) => Validation {
                state: State::Failure(errors),
            },
        }
    }

    /// Return this when it is a `Success`, `other` otherwise
    pub fn or(self, other: Self) -> Self {
        if self.is_success() {
            self
        } else {
            other
        }
    }

    /// Return this when it is a `Success`; otherwise hand the accumulated
    /// errors to the thunk and return its result
    ///
    /// The thunk is never invoked on a `Success`.
    pub fn or_else<F>(self, f: F) -> Self
    where
        F: FnOnce(Vec<E>) -> Self,
    {
        match self.state {
            State::Success(v) => Validation::success(v),
            State::Failure(errors) => f(errors),
        }
    }

    /// Transform the success value; a `Failure` passes through untouched
    pub fn map_success<U, F>(self, f: F) -> Validation<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self.state {
            State::Success(v) => Validation::success(f(v)),
            State::Failure(errors) => Validation {
                state: State::Failure(errors),
            },
        }
    }

    /// Transform every accumulated error; a `Success` passes through
    /// untouched
    pub fn map_failure<F2, F>(self, f: F) -> Validation<T, F2>
    where
        F: FnMut(E) -> F2,
    {
        match self.state {
            State::Success(v) => Validation::success(v),
            State::Failure(errors) => Validation {
                state: State::Failure(errors.into_iter().map(f).collect()),
            },
        }
    }

    /// Dispatch on the variant, running exactly one of the two closures
    ///
    /// The failure branch receives the full accumulated error list.
    pub fn fold<R, S, F>(self, on_success: S, on_failure: F) -> R
    where
        S: FnOnce(T) -> R,
        F: FnOnce(Vec<E>) -> R,
    {
        match self.state {
            State::Success(v) => on_success(v),
            State::Failure(errors) => on_failure(errors),
        }
    }
}

impl<T: fmt::Display, E: fmt::Display> fmt::Display for Validation<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.state {
            State::Success(v) => write!(f, "Success( {} )", v),
            State::Failure(errors) => {
                write!(f, "Failure( [")?;
                for (i, e) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", e)?;
                }
                write!(f, "] )")
            }
        }
    }
}
