//! `#[cgp_context]` - context declaration
//!
//! Declares the context's wiring table (`<Name>Components` unless named) and
//! points `HasProvider::Components` at it. Entries are added separately with
//! `delegate_components!`.

use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{
    parse::{Parse, ParseStream},
    Generics, Ident, Item, Visibility,
};

use crate::common::WiringError;

/// Optional table name: `#[cgp_context(ShapeComponents)]`
pub struct ContextArgs {
    pub table: Option<Ident>,
}

impl Parse for ContextArgs {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        if input.is_empty() {
            return Ok(ContextArgs { table: None });
        }
        Ok(ContextArgs { table: Some(input.parse()?) })
    }
}

pub fn expand_cgp_context(args: ContextArgs, item: Item) -> syn::Result<TokenStream2> {
    let (vis, ident, generics): (&Visibility, &Ident, &Generics) = match &item {
        Item::Struct(item) => (&item.vis, &item.ident, &item.generics),
        Item::Enum(item) => (&item.vis, &item.ident, &item.generics),
        other => {
            return Err(WiringError::UnsupportedTarget {
                attribute: "#[cgp_context]",
                expected: "structs and enums",
            }
            .spanned(other));
        }
    };

    let table = args
        .table
        .unwrap_or_else(|| format_ident!("{}Components", ident));
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();
    let doc = format!("Wiring table of [`{}`].", ident);

    Ok(quote! {
        #item

        #[doc = #doc]
        #vis struct #table;

        impl #impl_generics ::tola_cgp::HasProvider for #ident #ty_generics #where_clause {
            type Components = #table;
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expand(attr: &str, item: &str) -> syn::Result<String> {
        let args: ContextArgs = syn::parse_str(attr)?;
        let item: Item = syn::parse_str(item)?;
        Ok(expand_cgp_context(args, item)?.to_string().replace(' ', ""))
    }

    #[test]
    fn test_default_table_name() {
        let out = expand("", "pub struct Rectangle { width: f64 }").unwrap();
        assert!(out.contains("pubstructRectangleComponents;"));
        assert!(out.contains("typeComponents=RectangleComponents;"));
    }

    #[test]
    fn test_named_table_and_generics() {
        let out = expand("ShapeComponents", "pub struct Canvas<T: Copy> { scale: T }").unwrap();
        assert!(out.contains("impl<T:Copy>::tola_cgp::HasProviderforCanvas<T>"));
        assert!(out.contains("typeComponents=ShapeComponents;"));
    }

    #[test]
    fn test_function_is_rejected() {
        assert!(expand("", "fn area() {}").is_err());
    }
}
