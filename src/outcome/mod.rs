//! The [`Outcome`] type and its combinators.
//!
//! An [`Outcome`] is either a `Success` carrying a value or a `Failure`
//! carrying a reason. Failures are ordinary values: they are returned, never
//! raised, and every combinator propagates them unchanged unless it explicitly
//! works on the failure channel.
//!
//! # Key Components
//!
//! - [`Outcome`] - The two-variant type with its inspection helpers
//! - Combinators over both channels (`map`, `flat_map`, `map_failure`, ...)
//! - Iterator adapters yielding the success value zero or one times
//!
//! # Examples
//!
//! ```
//! use outcome_rail::Outcome;
//!
//! let parsed: Outcome<i32, String> = Outcome::Success(20);
//! let total = parsed
//!     .map(|n| n + 1)
//!     .flat_map(|n| if n > 0 { Outcome::Success(n * 2) } else { Outcome::Failure("negative".into()) })
//!     .recover(|_| 0);
//! assert_eq!(total, 42);
//! ```
pub mod combinators;
pub mod core;
pub mod iter;

pub use self::core::*;
pub use self::iter::*;
