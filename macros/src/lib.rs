//! Procedural macros for the tola-cgp capability wiring system
//!
//! # Macro API
//!
//! | Macro | Target | Purpose |
//! |-------|--------|---------|
//! | `#[cgp_component(Provider)]` | trait | Declare a capability interface |
//! | `#[cgp_provider]` | impl | Register a provider impl |
//! | `#[cgp_new_provider]` | impl | Same, and declare the provider struct |
//! | `delegate_components!{}` | - | Wire components to providers |
//! | `#[cgp_context]` | struct/enum | Declare a context and its wiring table |
//! | `#[cgp_getter(Provider)]` | trait | Wired field accessor |
//! | `#[cgp_auto_getter]` | trait | Unwired field accessor |
//! | `#[cgp_type]` | trait | Abstract type slots bound with `UseType<T>` |
//! | `#[cgp_blanket]` | trait | One implementation for every context |
//! | `check_components!{}` | - | Verify wiring where it is written |
//! | `symbol!("name")` | - | Type-level field name |
//! | `#[derive(HasField)]` | struct | Structural field access |
//!
//! ## Example
//!
//! ```ignore
//! #[cgp_component(AreaCalculator)]
//! pub trait HasArea {
//!     fn area(&self) -> f64;
//! }
//!
//! #[cgp_new_provider]
//! impl<Context: HasDimensions> AreaCalculator<Context> for RectangleArea {
//!     fn area(context: &Context) -> f64 {
//!         context.width() * context.height()
//!     }
//! }
//!
//! #[cgp_context]
//! #[derive(HasField)]
//! pub struct Rectangle { pub width: f64, pub height: f64 }
//!
//! delegate_components! {
//!     RectangleComponents {
//!         AreaCalculatorComponent: RectangleArea,
//!     }
//! }
//! ```

use proc_macro::TokenStream;
use syn::parse_macro_input;

// =============================================================================
// Modules
// =============================================================================

mod inner;
mod common;
mod user;

// =============================================================================
// Capability Declaration
// =============================================================================

/// Declare a capability interface.
///
/// The annotated trait is the consumer trait, called on contexts. The
/// attribute generates the component marker, the provider trait, the
/// dispatch impl of the consumer trait for every `HasProvider` context, and
/// the delegation impl that lets wiring tables act as providers.
///
/// # Usage
/// ```ignore
/// #[cgp_component(AreaCalculator)]
/// pub trait HasArea: HasScalarType {
///     fn area(&self) -> Self::Scalar;
/// }
///
/// // Keyed form
/// #[cgp_component { name: AreaKey, provider: AreaCalculator, context: Ctx }]
/// pub trait HasArea { fn area(&self) -> f64; }
/// ```
#[proc_macro_attribute]
pub fn cgp_component(attr: TokenStream, item: TokenStream) -> TokenStream {
    let spec = parse_macro_input!(attr as user::ComponentSpec);
    let consumer = parse_macro_input!(item as syn::ItemTrait);
    user::expand_cgp_component(spec, consumer)
        .unwrap_or_else(|err| err.to_compile_error())
        .into()
}

/// Declare abstract type slots.
///
/// Provider name defaults to the trait name without `Has`, plus `Provider`
/// (`HasScalarType` -> `ScalarTypeProvider`). Bind with `UseType<T>`, or
/// `UseType<(T0, T1)>` when the trait declares several slots.
#[proc_macro_attribute]
pub fn cgp_type(attr: TokenStream, item: TokenStream) -> TokenStream {
    let spec = parse_macro_input!(attr as user::ComponentSpec);
    let consumer = parse_macro_input!(item as syn::ItemTrait);
    user::expand_cgp_type(spec, consumer)
        .unwrap_or_else(|err| err.to_compile_error())
        .into()
}

/// Give a capability one implementation shared by every context.
///
/// Every method needs a default body. The blanket impl requires the
/// trait's supertraits and where-clause, so call sites look exactly like
/// wired capabilities.
#[proc_macro_attribute]
pub fn cgp_blanket(attr: TokenStream, item: TokenStream) -> TokenStream {
    if !attr.is_empty() {
        return syn::Error::new(
            proc_macro2::Span::call_site(),
            "#[cgp_blanket] takes no arguments",
        )
        .to_compile_error()
        .into();
    }
    let consumer = parse_macro_input!(item as syn::ItemTrait);
    user::expand_cgp_blanket(consumer)
        .unwrap_or_else(|err| err.to_compile_error())
        .into()
}

// =============================================================================
// Providers & Wiring
// =============================================================================

/// Register a provider impl.
///
/// Re-emits the impl and adds the matching `IsProviderFor` impl, carrying
/// the same where-clause, so wiring checks report the provider's unmet
/// requirements. The component defaults to `<ProviderTrait>Component`.
///
/// # Usage
/// ```ignore
/// #[cgp_provider]
/// impl<Context, Inner> AreaCalculator<Context> for ScaledArea<Inner>
/// where
///     Context: HasScaleFactor,
///     Inner: AreaCalculator<Context>,
/// {
///     fn area(context: &Context) -> f64 {
///         Inner::area(context) * context.scale_factor()
///     }
/// }
/// ```
#[proc_macro_attribute]
pub fn cgp_provider(attr: TokenStream, item: TokenStream) -> TokenStream {
    let args = parse_macro_input!(attr as user::ProviderArgs);
    let item = parse_macro_input!(item as syn::ItemImpl);
    user::expand_cgp_provider(args, item)
        .unwrap_or_else(|err| err.to_compile_error())
        .into()
}

/// Register a provider impl and declare the provider as a unit struct.
#[proc_macro_attribute]
pub fn cgp_new_provider(attr: TokenStream, item: TokenStream) -> TokenStream {
    let args = parse_macro_input!(attr as user::ProviderArgs);
    let item = parse_macro_input!(item as syn::ItemImpl);
    user::expand_cgp_new_provider(args, item)
        .unwrap_or_else(|err| err.to_compile_error())
        .into()
}

/// Wire components to providers in a table.
///
/// A component may appear once per table; a second entry is rejected as
/// `AmbiguousWiring`.
///
/// # Usage
/// ```ignore
/// delegate_components! {
///     RectangleComponents {
///         ScalarTypeProviderComponent: UseType<f64>,
///         AreaCalculatorComponent: RectangleArea,
///         [WidthGetterComponent, HeightGetterComponent]: UseFields,
///     }
/// }
///
/// // Declare the table struct too
/// delegate_components! {
///     new pub SharedComponents { .. }
/// }
/// ```
#[proc_macro]
pub fn delegate_components(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as user::DelegateInput);
    user::expand_delegate_components(input)
        .unwrap_or_else(|err| err.to_compile_error())
        .into()
}

/// Declare a context and its wiring table.
///
/// ```ignore
/// #[cgp_context]                   // table: RectangleComponents
/// pub struct Rectangle { .. }
///
/// #[cgp_context(ShapeComponents)]  // explicit table name
/// pub struct Square { .. }
/// ```
#[proc_macro_attribute]
pub fn cgp_context(attr: TokenStream, item: TokenStream) -> TokenStream {
    let args = parse_macro_input!(attr as user::ContextArgs);
    let item = parse_macro_input!(item as syn::Item);
    user::expand_cgp_context(args, item)
        .unwrap_or_else(|err| err.to_compile_error())
        .into()
}

/// Verify at the definition site that a context can use components.
///
/// ```ignore
/// check_components! {
///     CanUseRectangle for Rectangle {
///         AreaCalculatorComponent,
///         [WidthGetterComponent, HeightGetterComponent],
///         ConverterComponent: (Celsius,),
///     }
/// }
/// ```
#[proc_macro]
pub fn check_components(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as user::CheckInput);
    user::expand_check_components(input)
        .unwrap_or_else(|err| err.to_compile_error())
        .into()
}

// =============================================================================
// Structural Access
// =============================================================================

/// Accessor capability resolved through wiring.
///
/// Besides the usual component items, implements the stock providers
/// `UseFields` (read the field named after each method) and, for
/// single-method traits, `UseField<Tag>` (read the field tagged `Tag`).
#[proc_macro_attribute]
pub fn cgp_getter(attr: TokenStream, item: TokenStream) -> TokenStream {
    let spec = parse_macro_input!(attr as user::ComponentSpec);
    let consumer = parse_macro_input!(item as syn::ItemTrait);
    user::expand_cgp_getter(spec, consumer)
        .unwrap_or_else(|err| err.to_compile_error())
        .into()
}

/// Accessor implemented for every context with matching fields.
#[proc_macro_attribute]
pub fn cgp_auto_getter(attr: TokenStream, item: TokenStream) -> TokenStream {
    if !attr.is_empty() {
        return syn::Error::new(
            proc_macro2::Span::call_site(),
            "#[cgp_auto_getter] takes no arguments; use #[cgp_getter(Provider)] for a wired accessor",
        )
        .to_compile_error()
        .into();
    }
    let consumer = parse_macro_input!(item as syn::ItemTrait);
    user::expand_cgp_auto_getter(consumer)
        .unwrap_or_else(|err| err.to_compile_error())
        .into()
}

/// Type-level field name.
///
/// ```ignore
/// type Width = symbol!("width");
/// type Height = symbol!(height);
/// ```
#[proc_macro]
pub fn symbol(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as inner::symbol::SymbolInput);
    inner::symbol::expand_symbol(input).into()
}

/// Implement `HasField` and `HasFieldMut` for every field of a struct.
#[proc_macro_derive(HasField)]
pub fn derive_has_field(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as syn::DeriveInput);
    user::expand_derive_has_field(input)
        .unwrap_or_else(|err| err.to_compile_error())
        .into()
}
