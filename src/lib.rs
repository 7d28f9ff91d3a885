#![cfg_attr(not(feature = "std"), no_std)]

// Feature flags handled:
// - std: default, enables std library
// - alloc: enables alloc types in no_std (symbol rendering)

//! # tola-cgp
//!
//! Context-generic capability wiring resolved entirely at compile time.
//!
//! One piece of logic is written once against abstract capabilities, and
//! every concrete *context* type picks, per capability, which *provider*
//! implements it. Selection happens in the trait solver: there is no
//! registry object, no `dyn`, and nothing left to look up at runtime.
//!
//! ## Architecture
//!
//! ```text
//! ctx.area()
//!   |  consumer trait HasArea (blanket impl, "dispatch facade")
//!   v
//! <Ctx as HasProvider>::Components            wiring table of the context
//!   |  DelegateComponent<AreaCalculatorComponent>
//!   v
//! RectangleArea: AreaCalculator<Ctx>           provider selected by wiring
//!   |  where Ctx: HasWidth + HasHeight
//!   v
//! accessors / type slots / prerequisite capabilities of Ctx
//! ```
//!
//! ```text
//! +-------------------------------------------------------------------+
//! |  Layer 0: Primitives                                              |
//! |  - Char, Cons, Nil (field symbols), Index (tuple fields)          |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 1: Wiring Core                                             |
//! |  - HasProvider, DelegateComponent, IsProviderFor, CanUseComponent |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 2: Accessors & Type Slots                                  |
//! |  - HasField, UseField, UseFields, UseType                         |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 3: User API (macros)                                       |
//! |  - cgp_component, cgp_provider, delegate_components!, cgp_getter, |
//! |    cgp_type, check_components!, derive(HasField), cgp_blanket     |
//! +-------------------------------------------------------------------+
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use tola_cgp::prelude::*;
//!
//! #[cgp_component(AreaCalculator)]
//! pub trait HasArea {
//!     fn area(&self) -> f64;
//! }
//!
//! #[cgp_auto_getter]
//! pub trait HasSide {
//!     fn side(&self) -> f64;
//! }
//!
//! #[cgp_new_provider]
//! impl<Context: HasSide> AreaCalculator<Context> for SquareArea {
//!     fn area(context: &Context) -> f64 {
//!         context.side() * context.side()
//!     }
//! }
//!
//! #[cgp_context]
//! #[derive(HasField)]
//! pub struct Square {
//!     pub side: f64,
//! }
//!
//! delegate_components! {
//!     SquareComponents {
//!         AreaCalculatorComponent: SquareArea,
//!     }
//! }
//!
//! assert_eq!(Square { side: 3.0 }.area(), 9.0);
//! ```
//!
//! ## Fail-closed wiring
//!
//! A context that never wired a capability cannot call it. At the call
//! site the compiler only sees the dispatch impl's unmet bounds and reports
//! a generic E0599:
//!
//! ```compile_fail,E0599
//! use tola_cgp::prelude::*;
//!
//! #[cgp_component(AreaCalculator)]
//! pub trait HasArea {
//!     fn area(&self) -> f64;
//! }
//!
//! #[cgp_context]
//! pub struct Blank;
//!
//! delegate_components! {
//!     BlankComponents {}
//! }
//!
//! let _ = Blank.area();
//! ```
//!
//! `check_components!` is the way to get the named obligation. For the
//! same context it fails with `UnwiredCapability`, naming the table
//! `BlankComponents` and the missing `AreaCalculatorComponent` entry:
//!
//! ```compile_fail,E0277
//! use tola_cgp::prelude::*;
//!
//! #[cgp_component(AreaCalculator)]
//! pub trait HasArea {
//!     fn area(&self) -> f64;
//! }
//!
//! #[cgp_context]
//! pub struct Blank;
//!
//! delegate_components! {
//!     BlankComponents {}
//! }
//!
//! check_components! {
//!     CanUseBlank for Blank {
//!         AreaCalculatorComponent,
//!     }
//! }
//! ```
//!
//! A provider whose requirements the context does not meet is rejected,
//! here because `Disc` has no `side` field. The error is
//! `ProviderRequirementUnmet` for `AreaCalculatorComponent`, with the missing
//! `HasField<Cons<Char<'s'>, ..>>` in its notes:
//!
//! ```compile_fail,E0277
//! use tola_cgp::prelude::*;
//!
//! #[cgp_component(AreaCalculator)]
//! pub trait HasArea {
//!     fn area(&self) -> f64;
//! }
//!
//! #[cgp_auto_getter]
//! pub trait HasSide {
//!     fn side(&self) -> f64;
//! }
//!
//! #[cgp_new_provider]
//! impl<Context: HasSide> AreaCalculator<Context> for SquareArea {
//!     fn area(context: &Context) -> f64 {
//!         context.side() * context.side()
//!     }
//! }
//!
//! #[cgp_context]
//! #[derive(HasField)]
//! pub struct Disc {
//!     pub radius: f64,
//! }
//!
//! delegate_components! {
//!     DiscComponents {
//!         AreaCalculatorComponent: SquareArea,
//!     }
//! }
//!
//! check_components! {
//!     CanUseDisc for Disc {
//!         AreaCalculatorComponent,
//!     }
//! }
//! ```
//!
//! Wiring the same component twice is ambiguous and rejected, with no
//! priority rule to pick a winner. The macro reports `AmbiguousWiring`
//! through `compile_error!`, which carries no error code:
//!
//! ```compile_fail
//! use tola_cgp::prelude::*;
//!
//! #[cgp_component(AreaCalculator)]
//! pub trait HasArea {
//!     fn area(&self) -> f64;
//! }
//!
//! #[cgp_new_provider]
//! impl<Context> AreaCalculator<Context> for UnitArea {
//!     fn area(_context: &Context) -> f64 {
//!         1.0
//!     }
//! }
//!
//! #[cgp_new_provider]
//! impl<Context> AreaCalculator<Context> for ZeroArea {
//!     fn area(_context: &Context) -> f64 {
//!         0.0
//!     }
//! }
//!
//! #[cgp_context]
//! pub struct Tile;
//!
//! delegate_components! {
//!     TileComponents {
//!         AreaCalculatorComponent: UnitArea,
//!         AreaCalculatorComponent: ZeroArea,
//!     }
//! }
//! ```
//!
//! A type slot bound to a type that breaks the slot's bounds is rejected.
//! This unsatisfied slot binding is reported on `UseType<String>` through
//! `IsProviderFor`, whose notes name the unmet `String: Copy`:
//!
//! ```compile_fail,E0277
//! use tola_cgp::prelude::*;
//!
//! #[cgp_type]
//! pub trait HasScalarType {
//!     type Scalar: Copy;
//! }
//!
//! #[cgp_context]
//! pub struct Plot;
//!
//! delegate_components! {
//!     PlotComponents {
//!         ScalarTypeProviderComponent: UseType<String>,
//!     }
//! }
//!
//! check_components! {
//!     CanUsePlot for Plot {
//!         ScalarTypeProviderComponent,
//!     }
//! }
//! ```

// Allow `::tola_cgp` to work inside the crate itself
extern crate self as tola_cgp;

#[cfg(feature = "alloc")]
extern crate alloc;

// Re-export paste for define_type_slot! macro
pub use paste;

// =============================================================================
// Layer 0: Primitives (no dependencies)
// =============================================================================
pub mod primitives;

// =============================================================================
// Layer 1: Wiring Core
// =============================================================================
pub mod component;

// =============================================================================
// Layer 2: Accessors & Type Slots
// =============================================================================
pub mod field;
pub mod types;

// =============================================================================
// Layer 3: Declarative sugar (define_type_slot!)
// =============================================================================
pub mod syntax_macros;

// =============================================================================
// Re-exports at Crate Root
// =============================================================================

pub use primitives::{Char, Cons, Index, Nil, StaticSymbol};
#[cfg(feature = "alloc")]
pub use primitives::symbol_name;
pub use component::{CanUseComponent, DelegateComponent, HasProvider, IsProviderFor};
pub use field::{HasField, HasFieldMut, UseField, UseFields};
pub use types::UseType;

// Re-export proc-macros
pub use macros::{
    cgp_auto_getter, cgp_blanket, cgp_component, cgp_context, cgp_getter, cgp_new_provider,
    cgp_provider, cgp_type, check_components, delegate_components, symbol, HasField,
};

#[doc(hidden)]
pub mod __private {
    #[cfg(feature = "alloc")]
    pub use alloc::string::String;
}

/// Common items for declaring capabilities, providers and contexts.
pub mod prelude {
    pub use crate::component::{CanUseComponent, DelegateComponent, HasProvider, IsProviderFor};
    pub use crate::field::{HasField, HasFieldMut, UseField, UseFields};
    pub use crate::types::UseType;
    pub use crate::primitives::Index;
    pub use macros::{
        cgp_auto_getter, cgp_blanket, cgp_component, cgp_context, cgp_getter, cgp_new_provider,
        cgp_provider, cgp_type, check_components, delegate_components, symbol, HasField,
    };
    // define_type_slot! is #[macro_export], so it lives at crate root
}
