//! Common value types shared by the gatekit combinational blocks.
//!
//! This crate provides the fixed-width bit vectors, selectors, display and
//! decimal encodings, evaluation configuration and the error type used across
//! the gatekit workspace.

mod bits;
mod config;
mod digits;
mod error;
mod segment;
mod selector;

pub use crate::bits::*;
pub use crate::config::*;
pub use crate::digits::*;
pub use crate::error::*;
pub use crate::segment::*;
pub use crate::selector::*;
