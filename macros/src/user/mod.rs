//! User-facing macro implementations
//!
//! | Macro | Usage | Purpose |
//! |-------|-------|---------|
//! | `#[cgp_component]` | on trait | Declare a capability |
//! | `#[cgp_provider]` / `#[cgp_new_provider]` | on impl | Register a provider |
//! | `delegate_components!` | function macro | Fill a wiring table |
//! | `#[cgp_context]` | on struct/enum | Declare a context and its table |
//! | `#[cgp_getter]` / `#[cgp_auto_getter]` | on trait | Field accessors |
//! | `#[cgp_type]` | on trait | Abstract type slots |
//! | `#[cgp_blanket]` | on trait | Single shared implementation |
//! | `check_components!` | function macro | Definition-site wiring checks |
//! | `#[derive(HasField)]` | on struct | Structural field access |

mod blanket;
mod check;
pub mod component;
mod context;
mod delegate;
mod getter;
mod has_field;
mod provider;
mod type_slot;

pub use blanket::expand_cgp_blanket;
pub use check::{expand_check_components, CheckInput};
pub use component::{expand_cgp_component, ComponentSpec};
pub use context::{expand_cgp_context, ContextArgs};
pub use delegate::{expand_delegate_components, DelegateInput};
pub use getter::{expand_cgp_auto_getter, expand_cgp_getter};
pub use has_field::expand_derive_has_field;
pub use provider::{expand_cgp_new_provider, expand_cgp_provider, ProviderArgs};
pub use type_slot::expand_cgp_type;
