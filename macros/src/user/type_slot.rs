//! `#[cgp_type]` - abstract type slots
//!
//! A trait made only of associated types becomes a capability like any
//! other, plus the stock provider `UseType<T>`:
//!
//! ```ignore
//! #[cgp_type]
//! pub trait HasScalarType {
//!     type Scalar: Copy + Into<f64>;
//! }
//!
//! // ScalarTypeProviderComponent: UseType<f32>
//! ```
//!
//! With several slots (a type collection) `UseType<(T0, T1, ..)>` binds them
//! in declaration order.

use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote, ToTokens};
use syn::{Ident, ItemTrait, TraitItem};

use crate::common::{rewrite_self, WiringError};
use crate::user::component::{ComponentModel, ComponentSpec};

/// `HasScalarType` -> `ScalarTypeProvider`
fn default_provider(consumer: &Ident) -> Ident {
    let name = consumer.to_string();
    let stem = match name.strip_prefix("Has") {
        Some(stem) if !stem.is_empty() => stem,
        _ => name.as_str(),
    };
    format_ident!("{}Provider", stem, span = consumer.span())
}

pub fn expand_cgp_type(spec: ComponentSpec, consumer: ItemTrait) -> syn::Result<TokenStream2> {
    for item in &consumer.items {
        if !matches!(item, TraitItem::Type(_)) {
            return Err(WiringError::UnsupportedItem {
                item: consumer.ident.to_string(),
                reason: "type slot traits may only declare associated types",
            }
            .spanned(item));
        }
    }

    let default = default_provider(&consumer.ident);
    let model = ComponentModel::new(spec, consumer, "cgp_type", Some(default))?;

    let component_items = model.expand();
    let use_type = use_type_impl(&model);

    Ok(quote! {
        #component_items
        #use_type
    })
}

fn use_type_impl(model: &ComponentModel) -> TokenStream2 {
    if model.slots.is_empty() {
        return quote! {};
    }

    let context = &model.context;
    let params = &model.params;
    let provider_ref = model.provider_trait_ref();
    let bounds = &model.context_bounds;

    let type_params: Vec<Ident> = (0..model.slots.len())
        .map(|i| format_ident!("__Type{}__", i))
        .collect();

    // Own slots resolve to the bound types, anything else on Self to the context.
    let assoc: Vec<(Ident, TokenStream2)> = model
        .slots
        .iter()
        .zip(&type_params)
        .map(|(slot, ty)| (slot.ident.clone(), ty.to_token_stream()))
        .collect();

    let mut slot_bounds = Vec::new();
    let mut slot_defs = Vec::new();
    for (slot, ty) in model.slots.iter().zip(&type_params) {
        if !slot.bounds.is_empty() {
            let slot_bound = &slot.bounds;
            slot_bounds.push(rewrite_self(
                quote! { #ty: #slot_bound },
                &context.to_token_stream(),
                &assoc,
            ));
        }
        let ident = &slot.ident;
        slot_defs.push(quote! { type #ident = #ty; });
    }

    let bound_type = match type_params.as_slice() {
        [single] => quote! { #single },
        many => quote! { (#(#many,)*) },
    };
    let self_ty = quote! { ::tola_cgp::UseType<#bound_type> };
    let extra_generics: Vec<TokenStream2> = type_params.iter().map(ToTokens::to_token_stream).collect();
    let is_provider = model.is_provider_impl(&extra_generics, &self_ty, &slot_bounds);

    quote! {
        impl<#context #(, #params)* #(, #type_params)*> #provider_ref for #self_ty
        where
            #(#bounds,)*
            #(#slot_bounds,)*
        {
            #(#slot_defs)*
        }

        #is_provider
    }
}
