//! `#[derive(HasField)]` - structural field access
//!
//! Named fields are tagged with `symbol!("name")`, tuple fields with
//! `Index<N>`. Both `HasField` and `HasFieldMut` are implemented.

use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{ext::IdentExt, Data, DeriveInput, Fields, Member};

use crate::common::WiringError;
use crate::inner::symbol::{index_type, symbol_type};

pub fn expand_derive_has_field(input: DeriveInput) -> syn::Result<TokenStream2> {
    let Data::Struct(data) = &input.data else {
        return Err(WiringError::UnsupportedTarget {
            attribute: "#[derive(HasField)]",
            expected: "structs",
        }
        .spanned(&input.ident));
    };

    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let fields: Vec<(TokenStream2, Member, &syn::Type)> = match &data.fields {
        Fields::Named(named) => named
            .named
            .iter()
            .filter_map(|field| {
                let ident = field.ident.as_ref()?;
                let tag = symbol_type(&ident.unraw().to_string());
                Some((tag, Member::Named(ident.clone()), &field.ty))
            })
            .collect(),
        Fields::Unnamed(unnamed) => unnamed
            .unnamed
            .iter()
            .enumerate()
            .map(|(i, field)| (index_type(i), Member::Unnamed(i.into()), &field.ty))
            .collect(),
        Fields::Unit => Vec::new(),
    };

    let impls = fields.iter().map(|(tag, member, ty)| {
        quote! {
            impl #impl_generics ::tola_cgp::HasField<#tag> for #name #ty_generics #where_clause {
                type Value = #ty;

                #[inline]
                fn get_field(&self, _tag: ::core::marker::PhantomData<#tag>) -> &Self::Value {
                    &self.#member
                }
            }

            impl #impl_generics ::tola_cgp::HasFieldMut<#tag> for #name #ty_generics #where_clause {
                #[inline]
                fn get_field_mut(&mut self, _tag: ::core::marker::PhantomData<#tag>) -> &mut Self::Value {
                    &mut self.#member
                }
            }
        }
    });

    Ok(quote! {
        #(#impls)*
    })
}
