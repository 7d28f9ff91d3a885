//! # Layer 0: Primitives
//!
//! Basic building blocks shared by the wiring layers:
//! - `symbol.rs`: type-level field names (`Char`, `Cons`, `Nil`) and
//!   positional tags (`Index`).

pub mod symbol;

// Re-export key types at this level
pub use symbol::{Char, Cons, Index, Nil, StaticSymbol};
#[cfg(feature = "alloc")]
pub use symbol::symbol_name;
