//! Presence/absence container
//!
//! [`Optional<T>`] holds either a value (`Some`) or nothing (`None`). The
//! variant is fixed at construction and the payload is never mutated; every
//! combinator returns a plain value or a fresh container.
//!
//! ## Closed union
//!
//! The variants are not exposed as a public enum. Callers go through the
//! combinator protocol (`map`, `flat_map`, `fold`, ...) instead of pattern
//! matching, and no third variant can ever be added from outside.
//!
//! ## Inspection discipline
//!
//! `unwrap`/`expect` only succeed after the variant has been inspected with
//! [`Optional::is_some`] or [`Optional::is_none`] on that exact instance;
//! otherwise they fail with [`Error::UncheckedUnwrap`]. The discipline is
//! tracked by a private `Cell<bool>` — the one deviation from pure
//! immutability, scoped to a single instance and observable only through
//! the unwrap-safety check. The `Cell` makes `Optional` `!Sync`, which is
//! consistent with the single-threaded contract of these types.
//!
//! [`Optional::force_unwrap`] bypasses the discipline; as a deterrent it
//! always emits one warning through a [`DiagnosticSink`].

use std::cell::Cell;
use std::fmt;

use crate::diag::{DiagnosticSink, TracingSink};
use crate::error::{Error, Result};

/// Container for a value that may be absent
///
/// Absent inputs are expressed as `Option<T>` at the boundary: the checked
/// constructors (`try_some`, `try_none`) validate presence and report
/// [`Error::InvalidArgument`] on a violation, while `of`/`from_nullable`
/// are total and pick the variant from the input.
///
/// ## Invariants
///
/// - A `Some` always holds a value; a `None` never does
/// - The variant never changes after construction
/// - Combinators never invoke their closure on the variant that makes the
///   invocation meaningless (`map` on `None`, `or_else` on `Some`, ...)
#[derive(Debug)]
pub struct Optional<T> {
    value: Option<T>,
    inspected: Cell<bool>,
}

impl<T> Optional<T> {
    /// Wrap a possibly-absent value: `Some` when present, `None` otherwise
    ///
    /// Total — never fails.
    pub fn of(value: Option<T>) -> Self {
        Optional {
            value,
            inspected: Cell::new(false),
        }
    }

    /// Alias of [`Optional::of`]
    pub fn from_nullable(value: Option<T>) -> Self {
        Self::of(value)
    }

    /// Construct a `Some` holding `value`
    pub fn some(value: T) -> Self {
        Self::of(Some(value))
    }

    /// Checked `Some` constructor for possibly-absent input
    ///
    /// Fails with [`Error::InvalidArgument`] when the input is absent,
    /// enforcing the invariant that a `Some` always holds a value.
    pub fn try_some(value: Option<T>) -> Result<Self> {
        match value {
            Some(v) => Ok(Self::some(v)),
            None => Err(Error::InvalidArgument(
                "some requires a present value".to_string(),
            )),
        }
    }

    /// Construct a `None`
    pub fn none() -> Self {
        Self::of(None)
    }

    /// Checked `None` constructor for possibly-absent input
    ///
    /// Defensive guard against misuse: fails with [`Error::InvalidArgument`]
    /// when the input is actually present.
    pub fn try_none(value: Option<T>) -> Result<Self> {
        match value {
            None => Ok(Self::none()),
            Some(_) => Err(Error::InvalidArgument(
                "none must not be given a value".to_string(),
            )),
        }
    }

    /// True when this is a `Some`; marks the instance as inspected
    pub fn is_some(&self) -> bool {
        self.inspected.set(true);
        self.value.is_some()
    }

    /// True when this is a `None`; marks the instance as inspected
    pub fn is_none(&self) -> bool {
        self.inspected.set(true);
        self.value.is_none()
    }

    fn checked_take(self, detail: &str) -> Result<T> {
        if !self.inspected.get() {
            return Err(Error::UncheckedUnwrap(
                "variant not inspected; call is_some or is_none first".to_string(),
            ));
        }
        self.value.ok_or_else(|| Error::UnwrapOnNone(detail.to_string()))
    }

    fn forced_take(self, sink: &dyn DiagnosticSink, detail: &str) -> Result<T> {
        sink.warn("force_unwrap extracts without inspecting the variant; prefer unwrap after is_some");
        self.value
            .ok_or_else(|| Error::ForceUnwrapOnNone(detail.to_string()))
    }

    /// Extract the value of a `Some`
    ///
    /// Fails with [`Error::UncheckedUnwrap`] when the instance was never
    /// inspected, and with [`Error::UnwrapOnNone`] on a `None`.
    pub fn unwrap(self) -> Result<T> {
        self.checked_take("unwrap called on None")
    }

    /// [`Optional::unwrap`] with a caller-supplied failure detail
    pub fn expect(self, message: &str) -> Result<T> {
        self.checked_take(message)
    }

    /// Extract without the inspection requirement, warning through the
    /// default [`TracingSink`]
    ///
    /// Still fails with [`Error::ForceUnwrapOnNone`] on a `None`.
    pub fn force_unwrap(self) -> Result<T> {
        self.forced_take(&TracingSink, "force_unwrap called on None")
    }

    /// [`Optional::force_unwrap`] with a caller-supplied failure detail
    pub fn force_expect(self, message: &str) -> Result<T> {
        self.forced_take(&TracingSink, message)
    }

    /// [`Optional::force_unwrap`] writing its warning to `sink`
    pub fn force_unwrap_with(self, sink: &dyn DiagnosticSink) -> Result<T> {
        self.forced_take(sink, "force_unwrap called on None")
    }

    /// Extract the value of a `Some`, or return `default` on a `None`
    ///
    /// `default` is a plain value; for a lazily computed fallback use
    /// [`Optional::unwrap_or_else`].
    pub fn unwrap_or(self, default: T) -> T {
        self.value.unwrap_or(default)
    }

    /// Extract the value of a `Some`, or compute a fallback on a `None`
    ///
    /// The thunk is never invoked on a `Some`; its laziness is part of the
    /// contract, not an optimization.
    pub fn unwrap_or_else<F>(self, f: F) -> T
    where
        F: FnOnce() -> T,
    {
        self.value.unwrap_or_else(f)
    }

    /// Transform the value of a `Some`; a `None` passes through
    ///
    /// The mapper is never invoked on a `None`.
    pub fn map<U, F>(self, f: F) -> Optional<U>
    where
        F: FnOnce(T) -> U,
    {
        Optional::of(self.value.map(f))
    }

    /// Transform with a mapper that may itself produce nothing
    ///
    /// Re-wraps through [`Optional::of`]: a mapper returning `None`
    /// collapses the result to a `None`.
    pub fn filter_map<U, F>(self, f: F) -> Optional<U>
    where
        F: FnOnce(T) -> Option<U>,
    {
        Optional::of(self.value.and_then(f))
    }

    /// [`Optional::map`] unwrapping immediately, with `default` on a `None`
    pub fn map_or<U, F>(self, default: U, f: F) -> U
    where
        F: FnOnce(T) -> U,
    {
        self.value.map_or(default, f)
    }

    /// [`Optional::map_or`] with a lazily computed default
    pub fn map_or_else<U, D, F>(self, default: D, f: F) -> U
    where
        D: FnOnce() -> U,
        F: FnOnce(T) -> U,
    {
        self.value.map_or_else(default, f)
    }

    /// Return `other` when this is a `Some`, a `None` otherwise
    ///
    /// `other` is eagerly provided; for a lazily produced continuation use
    /// [`Optional::flat_map`].
    pub fn and<U>(self, other: Optional<U>) -> Optional<U> {
        match self.value {
            Some(_) => other,
            None => Optional::none(),
        }
    }

    /// Chain a computation that itself produces an `Optional`
    ///
    /// No re-wrapping: `f`'s result is returned directly. `f` is never
    /// invoked on a `None`.
    pub fn flat_map<U, F>(self, f: F) -> Optional<U>
    where
        F: FnOnce(T) -> Optional<U>,
    {
        match self.value {
            Some(v) => f(v),
            None => Optional::none(),
        }
    }

    /// Return this when it is a `Some`, `other` otherwise
    pub fn or(self, other: Self) -> Self {
        if self.value.is_some() {
            self
        } else {
            other
        }
    }

    /// Return this when it is a `Some`, the thunk's result otherwise
    ///
    /// The thunk is never invoked on a `Some`.
    pub fn or_else<F>(self, f: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        if self.value.is_some() {
            self
        } else {
            f()
        }
    }

    /// Applicative apply: run a wrapped function over a wrapped value
    ///
    /// `Some` applied to `Some` yields `Some`; a `None` on either side
    /// yields `None`.
    pub fn ap<U, F>(self, f: Optional<F>) -> Optional<U>
    where
        F: FnOnce(T) -> U,
    {
        match (self.value, f.value) {
            (Some(v), Some(func)) => Optional::some(func(v)),
            _ => Optional::none(),
        }
    }

    /// Dispatch on the variant, running exactly one of the two closures
    pub fn fold<R, S, N>(self, on_some: S, on_none: N) -> R
    where
        S: FnOnce(T) -> R,
        N: FnOnce() -> R,
    {
        match self.value {
            Some(v) => on_some(v),
            None => on_none(),
        }
    }

    /// Keep a `Some` whose value satisfies the predicate
    ///
    /// When the predicate holds the very same instance is returned, not a
    /// copy; otherwise the result is a `None`. A `None` stays a `None` and
    /// the predicate is not consulted.
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        let keep = match &self.value {
            Some(v) => predicate(v),
            None => true,
        };
        if keep {
            self
        } else {
            Optional::none()
        }
    }

    /// Run a side effect on the value of a `Some`; no-op on a `None`
    pub fn for_each<F>(&self, f: F)
    where
        F: FnOnce(&T),
    {
        if let Some(v) = &self.value {
            f(v);
        }
    }

    /// True when this is a `Some` whose value equals `expected`
    pub fn has_value(&self, expected: &T) -> bool
    where
        T: PartialEq,
    {
        self.value.as_ref() == Some(expected)
    }

    /// Apply a predicate to the value of a `Some`; always false on a `None`
    pub fn contains<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&T) -> bool,
    {
        match &self.value {
            Some(v) => predicate(v),
            None => false,
        }
    }

    /// Empty vector for a `None`, single-element vector for a `Some`
    pub fn to_vec(self) -> Vec<T> {
        self.value.into_iter().collect()
    }

    /// Unwrap into the standard library's `Option`
    #[inline]
    pub fn into_option(self) -> Option<T> {
        self.value
    }
}

/// Shallow copy with the same variant and value
///
/// The clone is a new, independent instance: the inspection flag does not
/// carry over, so the clone must be inspected before `unwrap`.
impl<T: Clone> Clone for Optional<T> {
    fn clone(&self) -> Self {
        Optional::of(self.value.clone())
    }
}

/// Equality on variant and payload; the inspection flag is ignored
impl<T: PartialEq> PartialEq for Optional<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: Eq> Eq for Optional<T> {}

impl<T> From<Option<T>> for Optional<T> {
    fn from(value: Option<T>) -> Self {
        Optional::of(value)
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(value: Optional<T>) -> Self {
        value.into_option()
    }
}

impl<T: fmt::Display> fmt::Display for Optional<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(v) => write!(f, "Some( {} )", v),
            None => write!(f, "None()"),
        }
    }
}
