//! Algebraic container types
//!
//! This crate provides a small family of chainable value wrappers so that
//! callers never branch on absence or failure by hand:
//!
//! - [`Optional<T>`]: presence or absence of a value (`Some` / `None`)
//! - [`Outcome<T, E>`]: success or failure of a computation (`Ok` / `Err`)
//! - [`Validation<T, E>`]: error accumulation across independent checks
//!   (`Success` / `Failure`), built on top of [`Optional`]
//!
//! Every instance is an immutable value produced by a factory function.
//! All further operations are combinators that either return a plain value,
//! return a new container, or report a contract violation as an [`Error`].
//!
//! # Quick start
//!
//! ```
//! use optionals::{Optional, Outcome};
//!
//! let doubled = Outcome::<i32, String>::ok(5).map(|x| x * 2);
//! assert!(doubled.is_ok());
//! assert_eq!(doubled.unwrap(), Ok(10));
//!
//! let port = Optional::of(None::<u16>).unwrap_or(8080);
//! assert_eq!(port, 8080);
//! ```
//!
//! # Inspection discipline
//!
//! [`Optional::unwrap`] and [`Outcome::unwrap`] require the caller to have
//! inspected the variant first (`is_some`/`is_none`/`is_ok`/`is_err`);
//! extracting without looking fails with [`Error::UncheckedUnwrap`].
//! `force_unwrap` bypasses the discipline and emits a warning through a
//! [`DiagnosticSink`] instead. See the type-level docs for the details.
//!
//! # Threading
//!
//! The wrappers are synchronous, single-threaded values. No combinator
//! blocks, schedules, or defers the closures it is given; thunk arguments
//! (`unwrap_or_else`, `or_else`) run only when the variant requires them.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod diag;
pub mod error;
pub mod optional;
pub mod outcome;
pub mod validation;

pub use diag::{DiagnosticSink, TracingSink};
pub use error::{Error, Result};
pub use optional::Optional;
pub use outcome::Outcome;
pub use validation::Validation;
