// numconv/src/lib.rs

//! numconv
//!
//! Decimal to fixed-width two's-complement binary and hexadecimal
//! conversion, built from digit-level primitives: a ripple-carry adder,
//! invert-and-add-one negation and nibble folding.
#![warn(missing_docs)]

pub mod constants;
pub mod encoding;
pub mod error;
pub mod io;
pub mod pipeline;
pub mod prelude;
pub mod test_support;
pub mod types;
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the newtypes in `types` are available for consumers and for
// convenient `prelude` re-exports.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
