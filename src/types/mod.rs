//! Shared type aliases.
//!
//! [`alloc_type`] resolves collection types to `std` or `alloc` depending on
//! the `std` feature, so the rest of the crate can stay `no_std` agnostic.

pub mod alloc_type;
