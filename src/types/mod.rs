//! # Layer 2: Type Slots
//!
//! A type slot is an associated type on a capability trait declared with
//! `#[cgp_type]`. Each context binds it through its wiring table:
//!
//! ```ignore
//! #[cgp_type]
//! pub trait HasScalarType {
//!     type Scalar: Copy + core::ops::Mul<Output = Self::Scalar>;
//! }
//!
//! delegate_components! {
//!     new PlotComponents {
//!         ScalarTypeProviderComponent: UseType<f32>,
//!     }
//! }
//! ```
//!
//! For a trait with several slots (a type collection) `UseType` takes a
//! tuple, bound in declaration order: `UseType<(f64, u32)>`.

use core::marker::PhantomData;

/// Binds a type slot (or a tuple of slots) to concrete types.
pub struct UseType<T: ?Sized>(pub PhantomData<T>);

impl<T: ?Sized> Default for UseType<T> {
    fn default() -> Self {
        UseType(PhantomData)
    }
}
