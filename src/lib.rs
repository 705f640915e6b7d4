//! A two-variant success/failure type and a small algebra for composing it.
//!
//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `outcome_rail::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## Composing Outcomes
//!
//! ```
//! use outcome_rail::Outcome;
//!
//! fn parse_port(raw: &str) -> Outcome<u16, String> {
//!     Outcome::from(raw.parse::<u16>()).map_failure(|e| format!("invalid port {:?}: {}", raw, e))
//! }
//!
//! let port = parse_port("8080").map(|p| p + 1).recover(|_| 80);
//! assert_eq!(port, 8081);
//!
//! let port = parse_port("http").map(|p| p + 1).recover(|_| 80);
//! assert_eq!(port, 80);
//! ```
//!
//! ## Collecting Outcomes
//!
//! ```
//! use outcome_rail::{all_values, partition, Outcome};
//!
//! let outcomes = vec![Outcome::Success(1), Outcome::Failure("bad"), Outcome::Success(3)];
//! assert_eq!(all_values(outcomes.clone()), Outcome::Failure("bad"));
//! assert_eq!(partition(outcomes), (vec![1, 3], vec!["bad"]));
//! ```
//!
//! ## Optional Values
//!
//! ```
//! use outcome_rail::traits::OptionExt;
//! use outcome_rail::Outcome;
//!
//! let env: Option<&str> = None;
//! assert_eq!(env.as_outcome_or(|| "HOME is not set"), Outcome::Failure("HOME is not set"));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Aggregate operations over sequences of outcomes
pub mod collect;
/// Conversions between Outcome, Option, and Result
pub mod convert;
/// Control-flow macros
pub mod macros;
/// The Outcome type and its combinators
pub mod outcome;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Extension traits on std types
pub mod traits;
/// Shared type aliases
pub mod types;

/// Panic capture as Outcome failures (requires `std` feature)
#[cfg(feature = "std")]
pub mod fault;

/// Async extensions (requires `async` feature)
#[cfg(feature = "async")]
pub mod async_ext;

/// Async prelude - all async utilities in one import (requires `async` feature)
#[cfg(feature = "async")]
pub mod prelude_async;

pub use collect::{all_values, any_values, partition};
pub use convert::*;
pub use outcome::Outcome;
pub use traits::*;

#[cfg(feature = "std")]
pub use fault::{outcome_from, try_outcome_from, Fault};
