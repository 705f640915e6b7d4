//! Convenience re-exports for common usage patterns.
//!
//! Import everything with:
//!
//! ```
//! use outcome_rail::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`on_failure!`]
//! - **Types**: [`Outcome`], and [`Fault`] with the `std` feature
//! - **Traits**: [`OptionExt`], [`ResultExt`], [`OutcomeIterExt`]
//! - **Functions**: [`all_values`], [`any_values`], [`partition`], and
//!   [`outcome_from`] with the `std` feature
//!
//! # Examples
//!
//! ```
//! use outcome_rail::prelude::*;
//!
//! fn lookup(id: u32) -> Outcome<&'static str, String> {
//!     [(1, "ada"), (2, "grace")]
//!         .iter()
//!         .find(|(key, _)| *key == id)
//!         .map(|(_, name)| *name)
//!         .as_outcome_or(|| format!("no user {}", id))
//! }
//!
//! let (found, missing) = [1, 3, 2].iter().map(|id| lookup(*id)).partition_outcomes();
//! assert_eq!(found, vec!["ada", "grace"]);
//! assert_eq!(missing, vec!["no user 3".to_string()]);
//! ```

// Macros
pub use crate::on_failure;

// Core types
pub use crate::outcome::Outcome;

#[cfg(feature = "std")]
pub use crate::fault::{outcome_from, Fault};

// Traits
pub use crate::traits::{OptionExt, OutcomeIterExt, ResultExt};

// Collection operations
pub use crate::collect::{all_values, any_values, partition};
