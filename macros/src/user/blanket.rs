//! `#[cgp_blanket]` - capabilities with a single implementation
//!
//! When every context computes a capability the same way from its
//! prerequisites, wiring is noise. The trait keeps its default bodies and
//! gets one blanket impl for every type meeting its supertraits and
//! where-clause:
//!
//! ```ignore
//! #[cgp_blanket]
//! pub trait CanDescribeArea: HasArea {
//!     fn describe_area(&self) -> String {
//!         format!("area = {}", self.area())
//!     }
//! }
//! ```

use proc_macro2::TokenStream as TokenStream2;
use quote::{quote, ToTokens};
use syn::{GenericParam, ItemTrait, TraitItem};

use crate::common::{compact, rewrite_self, WiringError};

pub fn expand_cgp_blanket(consumer: ItemTrait) -> syn::Result<TokenStream2> {
    let capability = consumer.ident.to_string();

    for item in &consumer.items {
        match item {
            TraitItem::Fn(method) if method.default.is_none() => {
                return Err(WiringError::MissingDefaultBody {
                    capability,
                    method: method.sig.ident.to_string(),
                }
                .spanned(&method.sig));
            }
            TraitItem::Const(constant) if constant.default.is_none() => {
                return Err(WiringError::MissingDefaultBody {
                    capability,
                    method: constant.ident.to_string(),
                }
                .spanned(constant));
            }
            TraitItem::Fn(_) | TraitItem::Const(_) => {}
            other => {
                return Err(WiringError::UnsupportedItem {
                    item: capability,
                    reason: "blanket capabilities cannot declare associated types; use #[cgp_type] and wire them",
                }
                .spanned(other));
            }
        }
    }

    let mut params = Vec::new();
    let mut args = Vec::new();
    for param in &consumer.generics.params {
        match param {
            GenericParam::Type(tp) => {
                let mut tp = tp.clone();
                tp.eq_token = None;
                tp.default = None;
                args.push(tp.ident.to_token_stream());
                params.push(tp.to_token_stream());
            }
            GenericParam::Lifetime(lt) => {
                args.push(lt.lifetime.to_token_stream());
                params.push(lt.to_token_stream());
            }
            other => {
                return Err(WiringError::UnsupportedGeneric {
                    item: capability,
                    param: compact(other),
                }
                .spanned(other));
            }
        }
    }

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

    let ident = &consumer.ident;
    let consumer_ref = if args.is_empty() {
        quote! { #ident }
    } else {
        quote! { #ident<#(#args),*> }
    };

    // Lifetimes have to come first in the impl's parameter list.
    params.sort_by_key(|param| !param.to_string().starts_with('\''));

    Ok(quote! {
        #consumer

        impl<#(#params,)* #context> #consumer_ref for #context
        where
            #(#bounds,)*
        {
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expand(item: &str) -> syn::Result<String> {
        let consumer: ItemTrait = syn::parse_str(item)?;
        Ok(expand_cgp_blanket(consumer)?.to_string().replace(' ', ""))
    }

    #[test]
    fn test_supertraits_become_bounds() {
        let out = expand(
            "pub trait CanDescribeArea: HasArea + HasName { fn describe(&self) -> String { String::new() } }",
        )
        .unwrap();
        assert!(out.contains("impl<__Context__>CanDescribeAreafor__Context__where__Context__:HasArea+HasName,{}"));
    }

    #[test]
    fn test_generic_trait() {
        let out = expand("pub trait CanScale<T: Copy> { fn scale(&self, by: T) -> T { by } }").unwrap();
        assert!(out.contains("impl<T:Copy,__Context__>CanScale<T>for__Context__"));
    }

    #[test]
    fn test_method_without_body_is_rejected() {
        let err = expand("pub trait CanDescribe { fn describe(&self) -> String; }")
            .err()
            .unwrap();
        assert!(err.to_string().contains("needs a default body"));
    }

    #[test]
    fn test_associated_type_is_rejected() {
        assert!(expand("pub trait HasOutput { type Output; }").is_err());
    }
}
