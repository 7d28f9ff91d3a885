//! `#[cgp_component]` - capability declaration
//!
//! From one consumer trait:
//!
//! ```ignore
//! #[cgp_component(AreaCalculator)]
//! pub trait HasArea: HasScalarType {
//!     fn area(&self) -> Self::Scalar;
//! }
//! ```
//!
//! generates
//!
//! | Item | Role |
//! |------|------|
//! | `AreaCalculatorComponent` | component marker, key of wiring tables |
//! | `trait AreaCalculator<Context>` | provider trait, `self` becomes `context: &Context` |
//! | `impl<Context> HasArea for Context` | dispatch to `Context::Components` |
//! | `impl<Component, Context> AreaCalculator<Context> for Component` | table delegation |
//!
//! Supertraits of the consumer become `Context: ...` requirements of the
//! provider trait, so prerequisite capabilities are checked transitively.

use proc_macro2::{Span, TokenStream as TokenStream2};
use quote::{format_ident, quote, ToTokens};
use syn::{
    parse::{Parse, ParseStream},
    FnArg, GenericParam, Ident, ItemTrait, TraitItem, TraitItemFn, TraitItemType, TypeParam,
};

use crate::common::{compact, parse_comma_separated, peek_key_value, rewrite_self, KeyValue, WiringError};

// =============================================================================
// Attribute Arguments
// =============================================================================

/// `#[cgp_component(Provider)]` or `#[cgp_component { name: .., provider: .., context: .. }]`
#[derive(Default)]
pub struct ComponentSpec {
    pub name: Option<Ident>,
    pub provider: Option<Ident>,
    pub context: Option<Ident>,
}

impl Parse for ComponentSpec {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut spec = ComponentSpec::default();
        if input.is_empty() {
            return Ok(spec);
        }

        if !peek_key_value(input) {
            spec.provider = Some(input.parse()?);
            if !input.is_empty() {
                return Err(input.error("expected `ProviderName` or `{ provider: ProviderName, .. }`"));
            }
            return Ok(spec);
        }

        for KeyValue { key, value } in parse_comma_separated::<KeyValue>(input)? {
            let slot = match key.to_string().as_str() {
                "name" => &mut spec.name,
                "provider" => &mut spec.provider,
                "context" => &mut spec.context,
                other => {
                    return Err(syn::Error::new_spanned(
                        &key,
                        format!("unknown key `{}`, expected `name`, `provider` or `context`", other),
                    ));
                }
            };
            if slot.replace(value).is_some() {
                return Err(syn::Error::new_spanned(&key, format!("key `{}` given twice", key)));
            }
        }
        Ok(spec)
    }
}

// =============================================================================
// Component Model
// =============================================================================

/// Everything the generators need to know about one capability.
pub struct ComponentModel {
    pub consumer: ItemTrait,
    pub component: Ident,
    pub provider: Ident,
    pub context: Ident,
    /// Type parameters of the consumer trait, defaults stripped.
    pub params: Vec<TypeParam>,
    /// Supertraits and where-clause of the consumer, as `Context: ...` predicates.
    pub context_bounds: Vec<TokenStream2>,
    /// Associated types declared by the consumer (type slots).
    pub slots: Vec<TraitItemType>,
    pub methods: Vec<TraitItemFn>,
}

impl ComponentModel {
    pub fn new(
        spec: ComponentSpec,
        consumer: ItemTrait,
        attribute: &'static str,
        default_provider: Option<Ident>,
    ) -> syn::Result<Self> {
        let capability = consumer.ident.to_string();

        let provider = match spec.provider.or(default_provider) {
            Some(provider) => provider,
            None => {
                return Err(WiringError::MissingProviderName { capability, attribute }
                    .spanned(&consumer.ident));
            }
        };
        let component = spec
            .name
            .unwrap_or_else(|| format_ident!("{}Component", provider));
        let context = spec
            .context
            .unwrap_or_else(|| Ident::new("Context", Span::call_site()));

        let mut params = Vec::new();
        for param in &consumer.generics.params {
            match param {
                GenericParam::Type(tp) => {
                    let mut tp = tp.clone();
                    tp.eq_token = None;
                    tp.default = None;
                    params.push(tp);
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

        let mut slots = Vec::new();
        let mut methods = Vec::new();
        for item in &consumer.items {
            match item {
                TraitItem::Fn(method) => methods.push(method.clone()),
                TraitItem::Type(slot) => {
                    if !slot.generics.params.is_empty() || slot.generics.where_clause.is_some() {
                        return Err(WiringError::UnsupportedItem {
                            item: format!("{}::{}", capability, slot.ident),
                            reason: "generic associated types cannot be bound per context",
                        }
                        .spanned(slot));
                    }
                    slots.push(slot.clone());
                }
                other => {
                    return Err(WiringError::UnsupportedItem {
                        item: capability,
                        reason: "capability traits may only declare methods and associated types",
                    }
                    .spanned(other));
                }
            }
        }

        let mut model = ComponentModel {
            consumer,
            component,
            provider,
            context,
            params,
            context_bounds: Vec::new(),
            slots,
            methods,
        };
        model.context_bounds = model.collect_context_bounds();
        Ok(model)
    }

    fn collect_context_bounds(&self) -> Vec<TokenStream2> {
        let context = &self.context;
        let context_tokens = context.to_token_stream();
        let mut bounds = Vec::new();

        let supertraits = &self.consumer.supertraits;
        if !supertraits.is_empty() {
            bounds.push(rewrite_self(quote! { #context: #supertraits }, &context_tokens, &[]));
        }
        if let Some(where_clause) = &self.consumer.generics.where_clause {
            for predicate in &where_clause.predicates {
                bounds.push(rewrite_self(predicate.to_token_stream(), &context_tokens, &[]));
            }
        }
        bounds
    }

    // -------------------------------------------------------------------------
    // Token helpers
    // -------------------------------------------------------------------------

    pub fn param_idents(&self) -> Vec<&Ident> {
        self.params.iter().map(|tp| &tp.ident).collect()
    }

    /// `(P0, P1,)`, the `Params` argument of `IsProviderFor`.
    pub fn params_tuple(&self) -> TokenStream2 {
        let idents = self.param_idents();
        quote! { (#(#idents,)*) }
    }

    /// `Provider<Context, P0, P1>`
    pub fn provider_trait_ref(&self) -> TokenStream2 {
        let provider = &self.provider;
        let context = &self.context;
        let idents = self.param_idents();
        quote! { #provider<#context #(, #idents)*> }
    }

    /// `Consumer<P0, P1>` (no angle brackets when not generic)
    pub fn consumer_trait_ref(&self) -> TokenStream2 {
        let consumer = &self.consumer.ident;
        let idents = self.param_idents();
        if idents.is_empty() {
            quote! { #consumer }
        } else {
            quote! { #consumer<#(#idents),*> }
        }
    }

    /// `::tola_cgp::IsProviderFor<Component, Context, (P0,)>`
    pub fn is_provider_ref(&self) -> TokenStream2 {
        let component = &self.component;
        let context = &self.context;
        let params = self.params_tuple();
        quote! { ::tola_cgp::IsProviderFor<#component, #context, #params> }
    }

    /// Rewrite from the provider's point of view, keeping own slots as `Self::Slot`.
    pub fn rewrite_for_provider(&self, tokens: TokenStream2) -> TokenStream2 {
        let assoc: Vec<_> = self
            .slots
            .iter()
            .map(|slot| {
                let ident = &slot.ident;
                (ident.clone(), quote! { Self::#ident })
            })
            .collect();
        rewrite_self(tokens, &self.context.to_token_stream(), &assoc)
    }

    /// Rewrite with every `Self` pointing at the context.
    pub fn rewrite_for_context(&self, tokens: TokenStream2) -> TokenStream2 {
        rewrite_self(tokens, &self.context.to_token_stream(), &[])
    }

    /// Provider-side signature of `method`, plus the argument list to forward it.
    pub fn provider_signature(&self, method: &TraitItemFn) -> (TokenStream2, Vec<TokenStream2>) {
        let sig = &method.sig;
        let mut args = Vec::new();
        let mut forward = Vec::new();

        for (i, input) in sig.inputs.iter().enumerate() {
            match input {
                FnArg::Receiver(receiver) => {
                    let ty = self.rewrite_for_provider(receiver.ty.to_token_stream());
                    args.push(quote! { context: #ty });
                    forward.push(quote! { context });
                }
                FnArg::Typed(arg) => {
                    let name = format_ident!("__arg{}", i);
                    let ty = self.rewrite_for_provider(arg.ty.to_token_stream());
                    args.push(quote! { #name: #ty });
                    forward.push(quote! { #name });
                }
            }
        }

        let asyncness = &sig.asyncness;
        let unsafety = &sig.unsafety;
        let ident = &sig.ident;
        let generics = self.rewrite_for_provider(generic_params(sig));
        let output = self.rewrite_for_provider(sig.output.to_token_stream());
        let where_clause = self.rewrite_for_provider(sig.generics.where_clause.to_token_stream());

        (
            quote! { #asyncness #unsafety fn #ident #generics (#(#args),*) #output #where_clause },
            forward,
        )
    }

    /// Consumer-side signature with renamed arguments, plus the forwarded argument list.
    pub fn consumer_signature(&self, method: &TraitItemFn) -> (TokenStream2, Vec<TokenStream2>) {
        let sig = &method.sig;
        let mut args = Vec::new();
        let mut forward = Vec::new();

        for (i, input) in sig.inputs.iter().enumerate() {
            match input {
                FnArg::Receiver(receiver) => {
                    let mut receiver = receiver.clone();
                    receiver.attrs.clear();
                    args.push(receiver.to_token_stream());
                    forward.push(quote! { self });
                }
                FnArg::Typed(arg) => {
                    let name = format_ident!("__arg{}", i);
                    let ty = &arg.ty;
                    args.push(quote! { #name: #ty });
                    forward.push(quote! { #name });
                }
            }
        }

        let asyncness = &sig.asyncness;
        let unsafety = &sig.unsafety;
        let ident = &sig.ident;
        let generics = generic_params(sig);
        let output = &sig.output;
        let where_clause = &sig.generics.where_clause;

        (
            quote! { #asyncness #unsafety fn #ident #generics (#(#args),*) #output #where_clause },
            forward,
        )
    }

    // -------------------------------------------------------------------------
    // Generators
    // -------------------------------------------------------------------------

    fn component_struct(&self) -> TokenStream2 {
        let vis = &self.consumer.vis;
        let component = &self.component;
        let doc = format!("Component marker for [`{}`].", self.consumer.ident);
        quote! {
            #[doc = #doc]
            #vis struct #component;
        }
    }

    fn provider_trait(&self) -> TokenStream2 {
        let vis = &self.consumer.vis;
        let provider = &self.provider;
        let context = &self.context;
        let params = &self.params;
        let is_provider = self.is_provider_ref();
        let bounds = &self.context_bounds;
        let doc = format!(
            "Provider trait for [`{}`], keyed by `{}` in wiring tables.",
            self.consumer.ident, self.component
        );

        let slots = self.slots.iter().map(|slot| {
            let attrs = &slot.attrs;
            let ident = &slot.ident;
            let colon = &slot.colon_token;
            let slot_bounds = self.rewrite_for_provider(slot.bounds.to_token_stream());
            quote! { #(#attrs)* type #ident #colon #slot_bounds; }
        });

        let methods = self.methods.iter().map(|method| {
            let attrs = &method.attrs;
            let (signature, _) = self.provider_signature(method);
            quote! { #(#attrs)* #signature; }
        });

        quote! {
            #[doc = #doc]
            #vis trait #provider<#context #(, #params)*>: #is_provider
            where
                #(#bounds,)*
            {
                #(#slots)*
                #(#methods)*
            }
        }
    }

    /// Dispatch facade: the consumer trait for every wired context.
    fn consumer_impl(&self) -> TokenStream2 {
        let context = &self.context;
        let params = &self.params;
        let consumer_ref = self.consumer_trait_ref();
        let provider_ref = self.provider_trait_ref();
        let bounds = &self.context_bounds;
        let components = quote! { <#context as ::tola_cgp::HasProvider>::Components };

        let slots = self.slots.iter().map(|slot| {
            let ident = &slot.ident;
            quote! { type #ident = <#components as #provider_ref>::#ident; }
        });

        let methods = self.methods.iter().map(|method| {
            let (signature, forward) = self.consumer_signature(method);
            let call = forward_call(
                quote! { <#components as #provider_ref> },
                method,
                &forward,
            );
            quote! {
                #[inline]
                #signature {
                    #call
                }
            }
        });

        quote! {
            impl<#context #(, #params)*> #consumer_ref for #context
            where
                #context: ::tola_cgp::HasProvider,
                #(#bounds,)*
                #components: #provider_ref,
            {
                #(#slots)*
                #(#methods)*
            }
        }
    }

    /// Table delegation: a wiring table provides whatever its entry provides.
    fn delegation_impl(&self) -> TokenStream2 {
        let context = &self.context;
        let params = &self.params;
        let component = &self.component;
        let provider_ref = self.provider_trait_ref();
        let params_tuple = self.params_tuple();
        let bounds = &self.context_bounds;
        let delegate = quote! {
            <__Component__ as ::tola_cgp::DelegateComponent<#component>>::Delegate
        };

        let slots = self.slots.iter().map(|slot| {
            let ident = &slot.ident;
            quote! { type #ident = <#delegate as #provider_ref>::#ident; }
        });

        let methods = self.methods.iter().map(|method| {
            let (signature, forward) = self.provider_signature(method);
            let call = forward_call(quote! { <#delegate as #provider_ref> }, method, &forward);
            quote! {
                #[inline]
                #signature {
                    #call
                }
            }
        });

        quote! {
            impl<__Component__, #context #(, #params)*> #provider_ref for __Component__
            where
                #(#bounds,)*
                __Component__: ::tola_cgp::DelegateComponent<#component>
                    + ::tola_cgp::IsProviderFor<#component, #context, #params_tuple>,
                #delegate: #provider_ref,
            {
                #(#slots)*
                #(#methods)*
            }
        }
    }

    /// `IsProviderFor` impl mirroring a stock provider impl header.
    pub fn is_provider_impl(
        &self,
        extra_generics: &[TokenStream2],
        self_ty: &TokenStream2,
        extra_bounds: &[TokenStream2],
    ) -> TokenStream2 {
        let context = &self.context;
        let params = &self.params;
        let is_provider = self.is_provider_ref();
        let bounds = &self.context_bounds;
        quote! {
            impl<#context #(, #params)* #(, #extra_generics)*> #is_provider for #self_ty
            where
                #(#bounds,)*
                #(#extra_bounds,)*
            {
            }
        }
    }

    /// Consumer trait and every generated item.
    pub fn expand(&self) -> TokenStream2 {
        let consumer = &self.consumer;
        let component_struct = self.component_struct();
        let provider_trait = self.provider_trait();
        let consumer_impl = self.consumer_impl();
        let delegation_impl = self.delegation_impl();

        quote! {
            #consumer
            #component_struct
            #provider_trait
            #consumer_impl
            #delegation_impl
        }
    }
}

/// `<..>` part of a method's generics, without the where-clause.
fn generic_params(sig: &syn::Signature) -> TokenStream2 {
    let params = &sig.generics.params;
    if params.is_empty() {
        quote! {}
    } else {
        quote! { <#params> }
    }
}

/// `path::method(args)`, awaited or wrapped in `unsafe` to match the method.
pub fn forward_call(path: TokenStream2, method: &TraitItemFn, forward: &[TokenStream2]) -> TokenStream2 {
    let ident = &method.sig.ident;
    let mut call = quote! { #path::#ident(#(#forward),*) };
    if method.sig.unsafety.is_some() {
        call = quote! { unsafe { #call } };
    }
    if method.sig.asyncness.is_some() {
        call = quote! { #call.await };
    }
    call
}

// =============================================================================
// Entry Point
// =============================================================================

pub fn expand_cgp_component(spec: ComponentSpec, consumer: ItemTrait) -> syn::Result<TokenStream2> {
    let model = ComponentModel::new(spec, consumer, "cgp_component", None)?;
    Ok(model.expand())
}
