//! # Layer 1: Wiring Core
//!
//! - **Traits**: `HasProvider` (context → table), `DelegateComponent`
//!   (table → provider), `IsProviderFor` (provider requirement bookkeeping).
//! - **Checks**: `CanUseComponent`, the target of `check_components!`.
//!
//! Consumer and provider traits themselves are generated per capability by
//! `#[cgp_component]`.

pub mod traits;
pub mod check;

pub use traits::{DelegateComponent, HasProvider, IsProviderFor};
pub use check::CanUseComponent;
