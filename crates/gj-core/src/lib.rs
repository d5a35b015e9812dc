//! # gj-core
//!
//! Core error definitions shared across the gajian workspace.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error types and the `ensure!` / `fail!` macros.
pub mod errors;

/// Integer type used for day counts.
pub type Integer = i32;

pub use errors::{Error, Result};
