//! Success/failure container
//!
//! [`Outcome<T, E>`] holds either a success value (`Ok`) or a failure
//! payload (`Err`), fixed permanently at construction. It follows the same
//! closed-union and inspection-discipline rules as [`Optional`]; see the
//! module docs of [`crate::optional`].
//!
//! The designed bridge between the two families is
//! [`Outcome::get_ok`]/[`Outcome::get_err`], which convert either payload
//! into an [`Optional`].

use std::cell::Cell;
use std::fmt;

use crate::error::{Error, Result};
use crate::optional::Optional;

/// Container for a computation that either succeeded or failed
///
/// Exactly one of the success value and the failure payload is populated,
/// determined at construction. `unwrap`/`expect` (and their `_err` mirrors)
/// require a prior [`Outcome::is_ok`]/[`Outcome::is_err`] call on the same
/// instance; the tracking `Cell` makes `Outcome` `!Sync`, consistent with
/// the single-threaded contract.
#[derive(Debug)]
pub struct Outcome<T, E> {
    inner: std::result::Result<T, E>,
    inspected: Cell<bool>,
}

impl<T, E> Outcome<T, E> {
    fn wrap(inner: std::result::Result<T, E>) -> Self {
        Outcome {
            inner,
            inspected: Cell::new(false),
        }
    }

    /// Construct a successful outcome
    pub fn ok(value: T) -> Self {
        Self::wrap(Ok(value))
    }

    /// Construct a failed outcome
    pub fn err(error: E) -> Self {
        Self::wrap(Err(error))
    }

    /// True when this is an `Ok`; marks the instance as inspected
    pub fn is_ok(&self) -> bool {
        self.inspected.set(true);
        self.inner.is_ok()
    }

    /// True when this is an `Err`; marks the instance as inspected
    pub fn is_err(&self) -> bool {
        self.inspected.set(true);
        self.inner.is_err()
    }

    /// Convert the success side into an [`Optional`]
    ///
    /// `Some(value)` for an `Ok`, `None` for an `Err`.
    pub fn get_ok(self) -> Optional<T> {
        Optional::of(self.inner.ok())
    }

    /// Convert the failure side into an [`Optional`]
    ///
    /// `Some(error)` for an `Err`, `None` for an `Ok`.
    pub fn get_err(self) -> Optional<E> {
        Optional::of(self.inner.err())
    }

    fn guard_inspected(&self) -> Result<()> {
        if self.inspected.get() {
            Ok(())
        } else {
            Err(Error::UncheckedUnwrap(
                "variant not inspected; call is_ok or is_err first".to_string(),
            ))
        }
    }

    /// Extract the success value
    ///
    /// Fails with [`Error::UncheckedUnwrap`] when the instance was never
    /// inspected, and with [`Error::UnwrapOnErr`] on an `Err`.
    pub fn unwrap(self) -> Result<T> {
        self.guard_inspected()?;
        self.inner
            .map_err(|_| Error::UnwrapOnErr("unwrap called on Err".to_string()))
    }

    /// [`Outcome::unwrap`] with a caller-supplied failure detail
    pub fn expect(self, message: &str) -> Result<T> {
        self.guard_inspected()?;
        self.inner
            .map_err(|_| Error::UnwrapOnErr(message.to_string()))
    }

    /// Extract the failure payload
    ///
    /// Fails with [`Error::UncheckedUnwrap`] when the instance was never
    /// inspected, and with [`Error::UnwrapOnOk`] on an `Ok`.
    pub fn unwrap_err(self) -> Result<E> {
        self.guard_inspected()?;
        match self.inner {
            Ok(_) => Err(Error::UnwrapOnOk("unwrap_err called on Ok".to_string())),
            Err(e) => Ok(e),
        }
    }

    /// [`Outcome::unwrap_err`] with a caller-supplied failure detail
    pub fn expect_err(self, message: &str) -> Result<E> {
        self.guard_inspected()?;
        match self.inner {
            Ok(_) => Err(Error::UnwrapOnOk(message.to_string())),
            Err(e) => Ok(e),
        }
    }

    /// Extract the success value, or return `default` on an `Err`
    pub fn unwrap_or(self, default: T) -> T {
        self.inner.unwrap_or(default)
    }

    /// Extract the success value, or compute a fallback from the error
    ///
    /// The thunk receives the failure payload and is never invoked on an
    /// `Ok`.
    pub fn unwrap_or_else<F>(self, f: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        self.inner.unwrap_or_else(f)
    }

    /// Transform the success value; an `Err` passes through untouched
    pub fn map<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        Outcome::wrap(self.inner.map(f))
    }

    /// Transform the failure payload; an `Ok` passes through untouched
    pub fn map_err<F2, F>(self, f: F) -> Outcome<T, F2>
    where
        F: FnOnce(E) -> F2,
    {
        Outcome::wrap(self.inner.map_err(f))
    }

    /// Chain a computation that itself produces an `Outcome`
    ///
    /// Runs only on an `Ok`; an `Err` passes through unchanged.
    pub fn flat_map<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        match self.inner {
            Ok(v) => f(v),
            Err(e) => Outcome::err(e),
        }
    }

    /// Chain a recovery computation on the failure side
    ///
    /// Runs only on an `Err`, receiving the failure payload; an `Ok` takes
    /// precedence and passes through unchanged.
    pub fn or_else<F2, F>(self, f: F) -> Outcome<T, F2>
    where
        F: FnOnce(E) -> Outcome<T, F2>,
    {
        match self.inner {
            Ok(v) => Outcome::ok(v),
            Err(e) => f(e),
        }
    }

    /// Dispatch on the variant, running exactly one of the two closures
    pub fn fold<R, S, F>(self, on_ok: S, on_err: F) -> R
    where
        S: FnOnce(T) -> R,
        F: FnOnce(E) -> R,
    {
        match self.inner {
            Ok(v) => on_ok(v),
            Err(e) => on_err(e),
        }
    }

    /// True when this is an `Ok` whose value equals `expected`
    pub fn has_value(&self, expected: &T) -> bool
    where
        T: PartialEq,
    {
        matches!(&self.inner, Ok(v) if v == expected)
    }

    /// True when this is an `Err` whose payload equals `expected`
    pub fn has_err(&self, expected: &E) -> bool
    where
        E: PartialEq,
    {
        matches!(&self.inner, Err(e) if e == expected)
    }

    /// Apply a predicate to the success value; always false on an `Err`
    pub fn contains<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&T) -> bool,
    {
        match &self.inner {
            Ok(v) => predicate(v),
            Err(_) => false,
        }
    }

    /// Apply a predicate to the failure payload; always false on an `Ok`
    pub fn contains_err<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&E) -> bool,
    {
        match &self.inner {
            Ok(_) => false,
            Err(e) => predicate(e),
        }
    }

    /// Unwrap into the standard library's `Result`
    #[inline]
    pub fn into_result(self) -> std::result::Result<T, E> {
        self.inner
    }
}

/// Shallow copy with the same variant and payload
///
/// Like [`Optional`], the clone is a fresh instance: it must be inspected
/// on its own before `unwrap`.
impl<T: Clone, E: Clone> Clone for Outcome<T, E> {
    fn clone(&self) -> Self {
        Outcome::wrap(self.inner.clone())
    }
}

/// Equality on variant and payload; the inspection flag is ignored
impl<T: PartialEq, E: PartialEq> PartialEq for Outcome<T, E> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<T: Eq, E: Eq> Eq for Outcome<T, E> {}

impl<T, E> From<std::result::Result<T, E>> for Outcome<T, E> {
    fn from(inner: std::result::Result<T, E>) -> Self {
        Outcome::wrap(inner)
    }
}

impl<T, E> From<Outcome<T, E>> for std::result::Result<T, E> {
    fn from(outcome: Outcome<T, E>) -> Self {
        outcome.into_result()
    }
}

impl<T: fmt::Display, E: fmt::Display> fmt::Display for Outcome<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.inner {
            Ok(v) => write!(f, "Ok( {} )", v),
            Err(e) => write!(f, "Err( {} )", e),
        }
    }
}
