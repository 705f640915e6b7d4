pub mod convert;
pub mod macros;
