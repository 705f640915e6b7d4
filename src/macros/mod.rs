//! Control-flow macros for [`Outcome`](crate::Outcome).
//!
//! - [`macro@crate::on_failure`] - Unwraps a success value or runs a block that
//!   must leave the enclosing function or loop (`return`, `break`,
//!   `continue`, a panic).
//!
//! # Examples
//!
//! ```
//! use outcome_rail::{on_failure, Outcome};
//!
//! fn total(outcomes: &[Outcome<i32, &'static str>]) -> Result<i32, String> {
//!     let mut sum = 0;
//!     for o in outcomes {
//!         let n = on_failure!(*o, reason => return Err(format!("stopped: {}", reason)));
//!         sum += n;
//!     }
//!     Ok(sum)
//! }
//!
//! assert_eq!(total(&[Outcome::Success(1), Outcome::Success(2)]), Ok(3));
//! assert_eq!(
//!     total(&[Outcome::Success(1), Outcome::Failure("bad")]),
//!     Err("stopped: bad".to_string())
//! );
//! ```

/// Unwraps an [`Outcome`](crate::Outcome), or binds the failure reason and
/// runs a block that must not complete normally.
///
/// The block is type-checked as diverging: it has to `return`, `break`,
/// `continue`, or panic. A block that evaluates to a value is a compile error,
/// so the macro can never fall through with a missing value.
///
/// # Syntax
///
/// - `on_failure!(expr, reason => diverging_expr)`
/// - `on_failure!(expr, _ => diverging_expr)` to ignore the reason
///
/// # Examples
///
/// ```rust
/// use outcome_rail::{on_failure, Outcome};
///
/// let mut kept = Vec::new();
/// for o in [Outcome::Success(1), Outcome::Failure("skip"), Outcome::Success(3)] {
///     let value = on_failure!(o, _ => continue);
///     kept.push(value);
/// }
/// assert_eq!(kept, vec![1, 3]);
/// ```
///
/// ```rust,compile_fail
/// use outcome_rail::{on_failure, Outcome};
///
/// // A block that produces a value instead of leaving is rejected.
/// let o: Outcome<i32, &str> = Outcome::Failure("bad");
/// let value = on_failure!(o, _ => 0);
/// ```
#[macro_export]
macro_rules! on_failure {
    ($outcome:expr, $reason:pat => $diverge:expr $(,)?) => {{
        #[allow(unreachable_code)]
        let value = match $outcome {
            $crate::Outcome::Success(value) => value,
            $crate::Outcome::Failure($reason) => {
                let diverged: ::core::convert::Infallible = $diverge;
                match diverged {}
            }
        };
        value
    }};
}
