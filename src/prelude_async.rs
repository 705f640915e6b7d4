//! Async prelude - all async utilities in one import.
//!
//! ```
//! use outcome_rail::prelude_async::*;
//! ```
//!
//! # What's Included
//!
//! ## From Sync Prelude
//!
//! - **Macros**: [`on_failure!`]
//! - **Types**: [`Outcome`], [`Fault`]
//! - **Traits**: [`OptionExt`], [`ResultExt`], [`OutcomeIterExt`]
//!
//! ## Async-Specific
//!
//! - **Traits**: [`OutcomeFutureExt`](crate::async_ext::OutcomeFutureExt) - `.catch_fault()` for futures,
//!   [`FutureResultExt`](crate::async_ext::FutureResultExt) - `.into_outcome()` for futures
//! - **Types**: [`CatchFaultFuture`](crate::async_ext::CatchFaultFuture), [`IntoOutcomeFuture`](crate::async_ext::IntoOutcomeFuture)

// Re-export everything from sync prelude
pub use crate::prelude::*;

// Async-specific exports
pub use crate::async_ext::{CatchFaultFuture, FutureResultExt, IntoOutcomeFuture, OutcomeFutureExt};

pub use std::panic::AssertUnwindSafe;
