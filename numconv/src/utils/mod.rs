//! Utilities for numconv: small helpers shared by the report writer and the
//! binary.

pub mod timing;

pub use timing::*;
