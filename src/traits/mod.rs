//! Extension traits connecting [`Outcome`](crate::Outcome) to std types.
//!
//! - [`OptionExt`]: `Option<T>` → `Outcome<T, E>` with a lazy failure reason
//! - [`ResultExt`]: `Result<T, E>` → `Outcome<T, E>`
//! - [`OutcomeIterExt`]: collection operations on iterators of outcomes
//! - `OutcomeTraceExt`: opt-in `tracing` taps (requires the `tracing` feature)
//!
//! # Examples
//!
//! ```
//! use outcome_rail::traits::{OptionExt, OutcomeIterExt};
//! use outcome_rail::Outcome;
//!
//! let lookups = vec![Some(1), None, Some(3)];
//! let all = lookups
//!     .into_iter()
//!     .map(|v| v.as_outcome_or(|| "missing"))
//!     .all_values();
//! assert_eq!(all, Outcome::Failure("missing"));
//! ```

pub mod iter_ext;
pub mod option_ext;
pub mod result_ext;
#[cfg(feature = "tracing")]
pub mod trace_ext;

pub use iter_ext::OutcomeIterExt;
pub use option_ext::OptionExt;
pub use result_ext::ResultExt;
#[cfg(feature = "tracing")]
pub use trace_ext::OutcomeTraceExt;
