//! Declarative shorthands over the attribute macros.

// =============================================================================
// define_type_slot! - Declare a single type slot capability
// =============================================================================

/// Declare a capability with a single type slot.
///
/// `define_type_slot!(pub Scalar: Copy)` expands to
///
/// ```ignore
/// #[cgp_type]
/// pub trait HasScalarType {
///     type Scalar: Copy;
/// }
/// ```
///
/// which in turn generates `ScalarTypeProvider`,
/// `ScalarTypeProviderComponent` and the `UseType<T>` provider.
///
/// # Example
///
/// ```
/// use tola_cgp::prelude::*;
/// use tola_cgp::define_type_slot;
///
/// define_type_slot!(pub Label: Clone + core::fmt::Display);
///
/// #[cgp_context]
/// pub struct Report;
///
/// delegate_components! {
///     ReportComponents {
///         LabelTypeProviderComponent: UseType<&'static str>,
///     }
/// }
///
/// fn label_len<C: HasLabelType>(label: C::Label) -> usize {
///     label.to_string().len()
/// }
///
/// assert_eq!(label_len::<Report>("total"), 5);
/// ```
#[macro_export]
macro_rules! define_type_slot {
    ($vis:vis $Name:ident $(: $($bound:tt)+)?) => {
        $crate::paste::paste! {
            #[doc = concat!("Type slot `", stringify!($Name), "`.")]
            #[$crate::cgp_type]
            $vis trait [<Has $Name Type>] {
                type $Name $(: $($bound)+)?;
            }
        }
    };
}
