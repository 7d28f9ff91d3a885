//! Type-level symbol generation.
//!
//! `symbol!("width")` and `#[derive(HasField)]` both turn a field name into
//! `Cons<Char<'w'>, Cons<Char<'i'>, ... Nil>>`.

use proc_macro2::TokenStream;
use quote::quote;
use syn::parse::{Parse, ParseStream};
use syn::ext::IdentExt;
use syn::Ident;

pub struct SymbolInput {
    pub name: String,
}

impl Parse for SymbolInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let name = if input.peek(syn::LitStr) {
            input.parse::<syn::LitStr>()?.value()
        } else {
            // Bare identifier: symbol!(width)
            input.call(Ident::parse_any)?.unraw().to_string()
        };
        Ok(SymbolInput { name })
    }
}

pub fn expand_symbol(input: SymbolInput) -> TokenStream {
    symbol_type(&input.name)
}

/// Build the symbol type for `name`, right to left.
pub fn symbol_type(name: &str) -> TokenStream {
    let mut symbol = quote! { ::tola_cgp::Nil };
    for ch in name.chars().rev() {
        symbol = quote! {
            ::tola_cgp::Cons<::tola_cgp::Char<#ch>, #symbol>
        };
    }
    symbol
}

/// Positional tag for tuple fields.
pub fn index_type(index: usize) -> TokenStream {
    let lit = proc_macro2::Literal::usize_unsuffixed(index);
    quote! { ::tola_cgp::Index<#lit> }
}
