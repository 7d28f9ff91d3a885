//! # Layer 2: Structural Accessors
//!
//! Logic never names a context's fields directly. It asks for a getter
//! capability, and the getter is resolved either from a field
//! (`HasField` + `UseFields`/`UseField`) or from a hand-written provider
//! that computes or forwards the value.

pub mod has_field;
pub mod use_field;

pub use has_field::{HasField, HasFieldMut};
pub use use_field::{UseField, UseFields};
