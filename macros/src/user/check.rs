//! `check_components!` - definition-site wiring checks
//!
//! ```ignore
//! check_components! {
//!     CanUseRectangle for Rectangle {
//!         AreaCalculatorComponent,
//!         [WidthGetterComponent, HeightGetterComponent],
//!         ConverterComponent: (Celsius,),
//!     }
//! }
//! ```
//!
//! Expands to a local trait bounded by `CanUseComponent` and one impl per
//! entry. Each impl is spanned on its component so the compiler error points
//! at the entry whose wiring or provider requirements are broken.

use proc_macro2::TokenStream as TokenStream2;
use quote::{quote, quote_spanned};
use syn::{
    braced,
    parse::{Parse, ParseStream},
    spanned::Spanned,
    Ident, Token, Type,
};

use crate::common::{compact, parse_comma_separated, parse_component_keys, WiringError};

// =============================================================================
// Input Parser
// =============================================================================

/// `Comp`, `[CompA, CompB]`, or either followed by `: (Params,)`
pub struct CheckEntry {
    pub components: Vec<Type>,
    pub params: Option<Type>,
}

impl Parse for CheckEntry {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let components = parse_component_keys(input)?;
        let params = if input.peek(Token![:]) {
            input.parse::<Token![:]>()?;
            Some(input.parse()?)
        } else {
            None
        };
        Ok(CheckEntry { components, params })
    }
}

/// `CanUseRectangle for Rectangle { ... }`
pub struct CheckBlock {
    pub trait_name: Ident,
    pub context: Type,
    pub entries: Vec<CheckEntry>,
}

impl Parse for CheckBlock {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let trait_name: Ident = input.parse()?;
        input.parse::<Token![for]>()?;
        let context: Type = input.parse()?;

        let content;
        braced!(content in input);
        let entries = parse_comma_separated(&content)?;

        Ok(CheckBlock { trait_name, context, entries })
    }
}

pub struct CheckInput {
    pub blocks: Vec<CheckBlock>,
}

impl Parse for CheckInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut blocks = Vec::new();
        while !input.is_empty() {
            blocks.push(input.parse()?);
        }
        Ok(CheckInput { blocks })
    }
}

// =============================================================================
// Expansion
// =============================================================================

fn expand_block(block: &CheckBlock) -> syn::Result<TokenStream2> {
    use std::collections::HashSet;

    let trait_name = &block.trait_name;
    let context = &block.context;
    let mut seen = HashSet::new();
    let mut impls = Vec::new();

    for entry in &block.entries {
        let params = match &entry.params {
            Some(params) => quote! { #params },
            None => quote! { () },
        };
        for component in &entry.components {
            let key = format!("{}:{}", compact(component), compact(&params));
            if !seen.insert(key) {
                return Err(WiringError::DuplicateCheck {
                    context: compact(context),
                    component: compact(component),
                }
                .spanned(component));
            }
            impls.push(quote_spanned! { component.span()=>
                impl #trait_name<#component, #params> for #context {}
            });
        }
    }

    let doc = format!("Wiring checks for `{}`.", compact(context));

    Ok(quote! {
        #[doc = #doc]
        #[allow(dead_code)]
        trait #trait_name<__Component__, __Params__>:
            ::tola_cgp::CanUseComponent<__Component__, __Params__>
        {
        }

        #(#impls)*
    })
}

pub fn expand_check_components(input: CheckInput) -> syn::Result<TokenStream2> {
    let mut out = TokenStream2::new();
    for block in &input.blocks {
        out.extend(expand_block(block)?);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_multiple_blocks() {
        let input: CheckInput = syn::parse_str(
            "CanUseRectangle for Rectangle {
                AreaCalculatorComponent,
                [WidthGetterComponent, HeightGetterComponent],
            }
            CanUseThermometer for Thermometer {
                ConverterComponent: (Celsius,),
            }",
        )
        .unwrap();
        assert_eq!(input.blocks.len(), 2);
        assert_eq!(input.blocks[0].entries.len(), 2);
        assert!(input.blocks[1].entries[0].params.is_some());
    }

    #[test]
    fn test_one_impl_per_component() {
        let input: CheckInput =
            syn::parse_str("CanUseRectangle for Rectangle { A, [B, C], D: (u8,) }").unwrap();
        let out = expand_check_components(input).unwrap().to_string();
        assert_eq!(out.matches("for Rectangle").count(), 4);
    }

    #[test]
    fn test_same_component_with_other_params_is_allowed() {
        let input: CheckInput =
            syn::parse_str("CanUse for Ctx { Conv: (u8,), Conv: (u16,) }").unwrap();
        assert!(expand_check_components(input).is_ok());
    }

    #[test]
    fn test_duplicate_check_is_rejected() {
        let input: CheckInput = syn::parse_str("CanUse for Ctx { A, [B, A] }").unwrap();
        assert!(expand_check_components(input).is_err());
    }
}
