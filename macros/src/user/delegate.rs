//! `delegate_components!` - wiring tables
//!
//! ```ignore
//! delegate_components! {
//!     new RectangleComponents {
//!         AreaCalculatorComponent: RectangleArea,
//!         [WidthGetterComponent, HeightGetterComponent]: UseFields,
//!     }
//! }
//! ```
//!
//! Each entry becomes a `DelegateComponent` impl (the selection) and an
//! `IsProviderFor` impl forwarding to the selected provider (the
//! requirement bookkeeping). `new` also declares the table struct.

use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{
    braced,
    parse::{Parse, ParseStream},
    Token, Type, Visibility,
};

use crate::common::{compact, parse_comma_separated, parse_component_keys, try_parse_keyword, WiringError};

// =============================================================================
// Input Parser
// =============================================================================

/// `[CompA, CompB]: Provider`
pub struct WiringEntry {
    pub components: Vec<Type>,
    pub provider: Type,
}

impl Parse for WiringEntry {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let components = parse_component_keys(input)?;
        input.parse::<Token![:]>()?;
        let provider: Type = input.parse()?;
        Ok(WiringEntry { components, provider })
    }
}

pub struct DelegateInput {
    /// Declare the table struct with this visibility.
    pub new_table: Option<Visibility>,
    pub table: Type,
    pub entries: Vec<WiringEntry>,
}

impl Parse for DelegateInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let new_table = if try_parse_keyword(input, "new")? {
            Some(input.parse::<Visibility>()?)
        } else {
            None
        };
        let table: Type = input.parse()?;

        let content;
        braced!(content in input);
        let entries = parse_comma_separated(&content)?;

        Ok(DelegateInput { new_table, table, entries })
    }
}

// =============================================================================
// Validation
// =============================================================================

/// Reject a component wired more than once in the same table.
pub fn check_ambiguous_wiring(table: &Type, entries: &[WiringEntry]) -> syn::Result<()> {
    use std::collections::HashSet;

    let mut seen = HashSet::new();
    for component in entries.iter().flat_map(|entry| &entry.components) {
        let key = compact(component);
        if !seen.insert(key.clone()) {
            return Err(WiringError::AmbiguousWiring {
                table: compact(table),
                component: key,
            }
            .spanned(component));
        }
    }
    Ok(())
}

// =============================================================================
// Expansion
// =============================================================================

pub fn expand_delegate_components(input: DelegateInput) -> syn::Result<TokenStream2> {
    let DelegateInput { new_table, table, entries } = input;

    check_ambiguous_wiring(&table, &entries)?;

    let table_struct = match &new_table {
        Some(vis) => {
            let doc = format!("Wiring table `{}`.", compact(&table));
            quote! {
                #[doc = #doc]
                #vis struct #table;
            }
        }
        None => quote! {},
    };

    let impls = entries.iter().flat_map(|entry| {
        let provider = &entry.provider;
        let table = &table;
        entry.components.iter().map(move |component| {
            quote! {
                impl ::tola_cgp::DelegateComponent<#component> for #table {
                    type Delegate = #provider;
                }

                impl<__Context__, __Params__> ::tola_cgp::IsProviderFor<#component, __Context__, __Params__>
                    for #table
                where
                    #provider: ::tola_cgp::IsProviderFor<#component, __Context__, __Params__>,
                {
                }
            }
        })
    });

    Ok(quote! {
        #table_struct
        #(#impls)*
    })
}
