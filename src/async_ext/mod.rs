//! Async extensions for outcome-rail.
//!
//! This module brings the panic bridge and the `Result` bridge to futures,
//! keeping the same semantics as their sync counterparts.
//!
//! # Feature Flag
//!
//! Requires the `async` feature to be enabled:
//!
//! ```toml
//! [dependencies]
//! outcome-rail = { version = "0.1", features = ["async"] }
//! ```
//!
//! # Examples
//!
//! ```ignore
//! use outcome_rail::prelude_async::*;
//!
//! async fn load(id: u64) -> Outcome<Profile, Fault> {
//!     AssertUnwindSafe(fetch_profile(id)).catch_fault().await
//! }
//! ```

mod catch_fault_future;
mod future_ext;

pub use catch_fault_future::{CatchFaultFuture, IntoOutcomeFuture};
pub use future_ext::{FutureResultExt, OutcomeFutureExt};
