//! Static wiring checks.
//!
//! Calling `ctx.area()` already proves that the context is wired for the
//! area component, but only where the call happens, and a missing entry
//! there surfaces as a generic "no method" error. `CanUseComponent` lets a
//! context's definition site prove it up front with named obligations;
//! `check_components!` generates one impl per (context, component) pair.
//!
//! The wiring entry is required separately from the provider check so that
//! an absent entry reports `UnwiredCapability` on `DelegateComponent`, and
//! only a present entry with a failing provider reports
//! `ProviderRequirementUnmet`.

use super::traits::{DelegateComponent, HasProvider, IsProviderFor};

/// `Self` resolves `Component` through its wiring table.
#[diagnostic::on_unimplemented(
    message = "context `{Self}` cannot use component `{Component}`",
    label = "wiring for `{Component}` is missing or its provider requirements are unmet",
    note = "see the `required for` notes for the unmet obligation; field tags print as `Cons<Char<'x'>, ..>` character lists"
)]
pub trait CanUseComponent<Component, Params = ()> {}

impl<Context, Component, Params> CanUseComponent<Component, Params> for Context
where
    Context: HasProvider,
    Context::Components: DelegateComponent<Component>,
    Context::Components: IsProviderFor<Component, Context, Params>,
{
}
