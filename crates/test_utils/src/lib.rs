//! Testing utilities for Rook crates

#![warn(missing_docs)]

mod call_helpers;
mod type_helpers;

pub use call_helpers::*;
pub use type_helpers::*;
