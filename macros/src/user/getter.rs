//! Accessor capabilities
//!
//! - `#[cgp_getter(Provider)]`: the accessor is a component. Contexts wire it
//!   to `UseFields`, `UseField<Tag>`, or a hand-written provider that
//!   computes or forwards the value.
//! - `#[cgp_auto_getter]`: the accessor is implemented once for every
//!   context that has the field. No wiring.
//!
//! Getter methods take `&self` and nothing else. The return type decides
//! how the field is read:
//!
//! | Return | Field type | Body |
//! |--------|------------|------|
//! | `&T` | `T` | borrow |
//! | `&str` | `String` | `as_str()` |
//! | `T` | `T` (requires `Clone`) | `clone()` |

use proc_macro2::TokenStream as TokenStream2;
use quote::{quote, ToTokens};
use syn::{FnArg, ItemTrait, ReturnType, TraitItem, TraitItemFn, Type};

use crate::common::{rewrite_self, WiringError};
use crate::inner::symbol::symbol_type;
use crate::user::component::{ComponentModel, ComponentSpec};

// =============================================================================
// Getter Model
// =============================================================================

enum ReadMode {
    Borrow,
    AsStr,
    Clone,
}

struct GetterMethod {
    method: TraitItemFn,
    /// Field name symbol type.
    tag: TokenStream2,
    /// Field type, still written from the consumer's point of view.
    value: TokenStream2,
    mode: ReadMode,
}

impl GetterMethod {
    fn parse(method: &TraitItemFn) -> syn::Result<Self> {
        let sig = &method.sig;
        let name = sig.ident.to_string();
        let malformed = |reason: &'static str| {
            WiringError::MalformedGetter { method: name.clone(), reason }.spanned(sig)
        };

        if sig.asyncness.is_some() || sig.unsafety.is_some() || !sig.generics.params.is_empty() {
            return Err(malformed("getters cannot be async, unsafe or generic"));
        }
        match sig.inputs.first() {
            Some(FnArg::Receiver(receiver))
                if receiver.reference.is_some() && receiver.mutability.is_none() => {}
            _ => return Err(malformed("the receiver must be `&self`")),
        }
        if sig.inputs.len() != 1 {
            return Err(malformed("getters take no arguments besides `&self`"));
        }

        let ReturnType::Type(_, ret) = &sig.output else {
            return Err(malformed("getters must return a value"));
        };

        let (value, mode) = match ret.as_ref() {
            Type::Reference(reference) if reference.mutability.is_none() => {
                let elem = &reference.elem;
                if is_str(elem) {
                    (quote! { ::tola_cgp::__private::String }, ReadMode::AsStr)
                } else {
                    (elem.to_token_stream(), ReadMode::Borrow)
                }
            }
            Type::Reference(_) => return Err(malformed("`&mut` getters are not supported")),
            other => (other.to_token_stream(), ReadMode::Clone),
        };

        Ok(GetterMethod {
            method: method.clone(),
            tag: symbol_type(&sig.ident.to_string()),
            value,
            mode,
        })
    }

    /// `field` read through `HasField<tag>`, adapted to the return type.
    fn read(&self, context_ty: &TokenStream2, context_expr: &TokenStream2, tag: &TokenStream2) -> TokenStream2 {
        let field = quote! {
            <#context_ty as ::tola_cgp::HasField<#tag>>::get_field(
                #context_expr,
                ::core::marker::PhantomData,
            )
        };
        match self.mode {
            ReadMode::Borrow => field,
            ReadMode::AsStr => quote! { #field.as_str() },
            ReadMode::Clone => quote! { ::core::clone::Clone::clone(#field) },
        }
    }

    /// Extra requirement on the field value.
    fn value_bound(&self, value: &TokenStream2) -> Option<TokenStream2> {
        match self.mode {
            ReadMode::Clone => Some(quote! { #value: ::core::clone::Clone }),
            ReadMode::Borrow | ReadMode::AsStr => None,
        }
    }
}

fn is_str(ty: &Type) -> bool {
    matches!(ty, Type::Path(path) if path.qself.is_none() && path.path.is_ident("str"))
}

fn parse_getters(consumer: &ItemTrait) -> syn::Result<Vec<GetterMethod>> {
    let mut getters = Vec::new();
    for item in &consumer.items {
        match item {
            TraitItem::Fn(method) => getters.push(GetterMethod::parse(method)?),
            other => {
                return Err(WiringError::UnsupportedItem {
                    item: consumer.ident.to_string(),
                    reason: "accessor traits may only declare getter methods",
                }
                .spanned(other));
            }
        }
    }
    Ok(getters)
}

// =============================================================================
// #[cgp_getter]
// =============================================================================

pub fn expand_cgp_getter(spec: ComponentSpec, consumer: ItemTrait) -> syn::Result<TokenStream2> {
    let getters = parse_getters(&consumer)?;
    let model = ComponentModel::new(spec, consumer, "cgp_getter", None)?;

    let component_items = model.expand();
    let use_fields = use_fields_impl(&model, &getters);
    let use_field = match getters.as_slice() {
        [single] => use_field_impl(&model, single),
        _ => quote! {},
    };

    Ok(quote! {
        #component_items
        #use_fields
        #use_field
    })
}

/// `UseFields`: each method reads the field named after it.
fn use_fields_impl(model: &ComponentModel, getters: &[GetterMethod]) -> TokenStream2 {
    let context = &model.context;
    let context_ty = context.to_token_stream();
    let params = &model.params;
    let provider_ref = model.provider_trait_ref();
    let bounds = &model.context_bounds;

    let mut field_bounds = Vec::new();
    let mut methods = Vec::new();
    for getter in getters {
        let tag = &getter.tag;
        let value = model.rewrite_for_context(getter.value.clone());
        field_bounds.push(quote! { #context: ::tola_cgp::HasField<#tag, Value = #value> });
        if let Some(bound) = getter.value_bound(&value) {
            field_bounds.push(bound);
        }

        let (signature, _) = model.provider_signature(&getter.method);
        let body = getter.read(&context_ty, &quote! { context }, tag);
        methods.push(quote! {
            #[inline]
            #signature {
                #body
            }
        });
    }

    let is_provider = model.is_provider_impl(&[], &quote! { ::tola_cgp::UseFields }, &field_bounds);

    quote! {
        impl<#context #(, #params)*> #provider_ref for ::tola_cgp::UseFields
        where
            #(#bounds,)*
            #(#field_bounds,)*
        {
            #(#methods)*
        }

        #is_provider
    }
}

/// `UseField<Tag>`: the single method reads the field tagged `Tag`.
fn use_field_impl(model: &ComponentModel, getter: &GetterMethod) -> TokenStream2 {
    let context = &model.context;
    let context_ty = context.to_token_stream();
    let params = &model.params;
    let provider_ref = model.provider_trait_ref();
    let bounds = &model.context_bounds;
    let tag = quote! { __Tag__ };
    let value = model.rewrite_for_context(getter.value.clone());

    let mut field_bounds = vec![quote! { #context: ::tola_cgp::HasField<#tag, Value = #value> }];
    if let Some(bound) = getter.value_bound(&value) {
        field_bounds.push(bound);
    }

    let (signature, _) = model.provider_signature(&getter.method);
    let body = getter.read(&context_ty, &quote! { context }, &tag);
    let self_ty = quote! { ::tola_cgp::UseField<#tag> };
    let is_provider = model.is_provider_impl(&[tag.clone()], &self_ty, &field_bounds);

    quote! {
        impl<#context #(, #params)*, #tag> #provider_ref for #self_ty
        where
            #(#bounds,)*
            #(#field_bounds,)*
        {
            #[inline]
            #signature {
                #body
            }
        }

        #is_provider
    }
}

// =============================================================================
// #[cgp_auto_getter]
// =============================================================================

pub fn expand_cgp_auto_getter(consumer: ItemTrait) -> syn::Result<TokenStream2> {
    let getters = parse_getters(&consumer)?;

    let mut params = Vec::new();
    for param in &consumer.generics.params {
        match param {
            syn::GenericParam::Type(tp) => {
                let mut tp = tp.clone();
                tp.eq_token = None;
                tp.default = None;
                params.push(tp);
            }
            other => {
                return Err(WiringError::UnsupportedGeneric {
                    item: consumer.ident.to_string(),
                    param: crate::common::compact(other),
                }
                .spanned(other));
            }
        }
    }
    let param_idents: Vec<_> = params.iter().map(|tp| &tp.ident).collect();

    let context = quote! { __Context__ };
    let mut bounds = Vec::new();
    let supertraits = &consumer.supertraits;
    if !supertraits.is_empty() {
        bounds.push(rewrite_self(quote! { #context: #supertraits }, &context, &[]));
    }
    if let Some(where_clause) = &consumer.generics.where_clause {
        for predicate in &where_clause.predicates {
            bounds.push(rewrite_self(predicate.to_token_stream(), &context, &[]));
        }
    }

    let mut methods = Vec::new();
    for getter in &getters {
        let tag = &getter.tag;
        let value = rewrite_self(getter.value.clone(), &context, &[]);
        bounds.push(quote! { #context: ::tola_cgp::HasField<#tag, Value = #value> });
        if let Some(bound) = getter.value_bound(&value) {
            bounds.push(bound);
        }

        let sig = &getter.method.sig;
        let body = getter.read(&quote! { Self }, &quote! { self }, tag);
        methods.push(quote! {
            #[inline]
            #sig {
                #body
            }
        });
    }

    let ident = &consumer.ident;
    let consumer_ref = if param_idents.is_empty() {
        quote! { #ident }
    } else {
        quote! { #ident<#(#param_idents),*> }
    };

    Ok(quote! {
        #consumer

        impl<#context #(, #params)*> #consumer_ref for #context
        where
            #(#bounds,)*
        {
            #(#methods)*
        }
    })
}
