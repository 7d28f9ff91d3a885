//! Core wiring traits.
//!
//! Every capability is expressed as three items:
//! - a *consumer* trait, called on the context (`ctx.area()`);
//! - a *component* marker struct naming the capability (`AreaCalculatorComponent`);
//! - a *provider* trait, implemented by provider types for a context
//!   (`AreaCalculator<Context>`).
//!
//! The traits below glue a context to its wiring table and the table to the
//! selected provider.

/// A context that owns a wiring table.
///
/// `Components` is a type whose [`DelegateComponent`] impls select one
/// provider per component. Usually declared with `#[cgp_context]`.
#[diagnostic::on_unimplemented(
    message = "UnwiredCapability: context `{Self}` has no wiring table",
    label = "`{Self}` does not implement `HasProvider`",
    note = "add `#[cgp_context]` to `{Self}` or implement `HasProvider` for it"
)]
pub trait HasProvider {
    /// Wiring table resolving this context's components.
    type Components;
}

/// One wiring entry: `Self` (a table) maps component `Name` to `Delegate`.
///
/// Rust coherence allows a single impl per (table, component), which is
/// exactly the "one provider per context and capability" rule.
#[diagnostic::on_unimplemented(
    message = "UnwiredCapability: wiring table `{Self}` has no entry for `{Name}`",
    label = "no provider is wired for `{Name}`",
    note = "add `{Name}: <Provider>` to the `delegate_components!` block of `{Self}`"
)]
pub trait DelegateComponent<Name: ?Sized> {
    type Delegate;
}

/// Records that `Self` can provide `Component` for `Context`.
///
/// Generated alongside each provider impl with the same where-clause, so
/// that a failed check reports the provider requirement the context misses
/// instead of a bare "trait not implemented" on the provider trait.
/// `Params` is the tuple of the consumer trait's generic parameters, `()`
/// for non-generic capabilities.
#[diagnostic::on_unimplemented(
    message = "ProviderRequirementUnmet: `{Self}` cannot provide `{Component}` for context `{Context}`",
    label = "provider requirements not satisfied",
    note = "the unmet requirement of the provider is listed in the `required for` notes below",
    note = "a missing field shows as `HasField<Cons<Char<'x'>, ..>>`; `symbol_name::<symbol!(\"x\")>()` renders a tag back to text"
)]
pub trait IsProviderFor<Component, Context, Params = ()> {}
