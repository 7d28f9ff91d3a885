// Common utilities shared between internal and user-facing macros
//
// This module contains:
// - parse_utils: Common parsing helpers
// - rewrite: `Self` to context rewriting
// - diagnostic: Wiring error messages

mod parse_utils;
mod rewrite;
pub mod diagnostic;

pub use parse_utils::*;
pub use rewrite::*;
pub use diagnostic::{compact, WiringError};
