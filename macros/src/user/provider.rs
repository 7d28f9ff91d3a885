//! `#[cgp_provider]` / `#[cgp_new_provider]` - provider registration
//!
//! A provider is identified by its own type, not by the context it serves,
//! so any number of providers may implement the same provider trait. They
//! only take effect once a wiring table selects them.
//!
//! The attribute re-emits the impl and adds an `IsProviderFor` impl with the
//! same generics and where-clause. Checks then see the provider's actual
//! requirements.

use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{
    parse::{Parse, ParseStream},
    GenericArgument, ItemImpl, Path, PathArguments, Type,
};

use crate::common::{compact, WiringError};

/// Optional component path: `#[cgp_provider(AreaCalculatorComponent)]`
pub struct ProviderArgs {
    pub component: Option<Path>,
}

impl Parse for ProviderArgs {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        if input.is_empty() {
            return Ok(ProviderArgs { component: None });
        }
        let component: Path = input.parse()?;
        Ok(ProviderArgs { component: Some(component) })
    }
}

/// Provider trait reference split into its parts.
struct ProviderTraitRef {
    component: Path,
    context: Type,
    params: Vec<Type>,
}

fn split_provider_trait(args: &ProviderArgs, item: &ItemImpl) -> syn::Result<ProviderTraitRef> {
    let Some((None, trait_path, _)) = &item.trait_ else {
        return Err(WiringError::UnsupportedTarget {
            attribute: "#[cgp_provider]",
            expected: "`impl ProviderTrait<Context> for Provider` blocks",
        }
        .spanned(&item.self_ty));
    };

    let Some(last) = trait_path.segments.last() else {
        return Err(syn::Error::new_spanned(trait_path, "empty provider trait path"));
    };

    let mut types = Vec::new();
    if let PathArguments::AngleBracketed(generic_args) = &last.arguments {
        for arg in &generic_args.args {
            match arg {
                GenericArgument::Type(ty) => types.push(ty.clone()),
                other => {
                    return Err(syn::Error::new_spanned(
                        other,
                        "provider traits take the context and type parameters only",
                    ));
                }
            }
        }
    }
    if types.is_empty() {
        return Err(syn::Error::new_spanned(
            trait_path,
            format!("`{}` is missing its context parameter", compact(trait_path)),
        ));
    }
    let context = types.remove(0);

    // Default component: same path, last segment `<Trait>Component`.
    let component = match &args.component {
        Some(component) => component.clone(),
        None => {
            let mut component = trait_path.clone();
            if let Some(segment) = component.segments.last_mut() {
                segment.ident = format_ident!("{}Component", segment.ident);
                segment.arguments = PathArguments::None;
            }
            component
        }
    };

    Ok(ProviderTraitRef { component, context, params: types })
}

fn expand_provider_impl(args: &ProviderArgs, item: &ItemImpl) -> syn::Result<TokenStream2> {
    let ProviderTraitRef { component, context, params } = split_provider_trait(args, item)?;

    let (impl_generics, _, where_clause) = item.generics.split_for_impl();
    let self_ty = &item.self_ty;

    Ok(quote! {
        #item

        impl #impl_generics ::tola_cgp::IsProviderFor<#component, #context, (#(#params,)*)>
            for #self_ty
        #where_clause
        {
        }
    })
}

pub fn expand_cgp_provider(args: ProviderArgs, item: ItemImpl) -> syn::Result<TokenStream2> {
    expand_provider_impl(&args, &item)
}

/// Same as `#[cgp_provider]`, and also declares the provider as a unit struct.
pub fn expand_cgp_new_provider(args: ProviderArgs, item: ItemImpl) -> syn::Result<TokenStream2> {
    let provider = match item.self_ty.as_ref() {
        Type::Path(type_path)
            if type_path.qself.is_none()
                && type_path.path.segments.len() == 1
                && type_path.path.segments[0].arguments.is_empty() =>
        {
            type_path.path.segments[0].ident.clone()
        }
        other => {
            return Err(WiringError::UnsupportedTarget {
                attribute: "#[cgp_new_provider]",
                expected: "impls for a plain provider name; declare generic providers yourself and use #[cgp_provider]",
            }
            .spanned(other));
        }
    };

    let expanded = expand_provider_impl(&args, &item)?;
    let doc = format!("Provider `{}`.", provider);

    Ok(quote! {
        #[doc = #doc]
        #[derive(Debug, Clone, Copy, Default)]
        pub struct #provider;

        #expanded
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalize(tokens: TokenStream2) -> String {
        tokens.to_string().replace(' ', "")
    }

    #[test]
    fn test_default_component_name() {
        let item: ItemImpl = syn::parse_str(
            "impl<Context: HasWidth> geometry::AreaCalculator<Context> for RectangleArea { }",
        )
        .unwrap();
        let args = ProviderArgs { component: None };
        let parts = split_provider_trait(&args, &item).unwrap();
        assert_eq!(compact(&parts.component), "geometry::AreaCalculatorComponent");
        assert_eq!(compact(&parts.context), "Context");
        assert!(parts.params.is_empty());
    }

    #[test]
    fn test_generic_params_are_forwarded() {
        let item: ItemImpl = syn::parse_str(
            "impl<Context> Converter<Context, Celsius> for ToCelsius where Context: HasKelvin { }",
        )
        .unwrap();
        let out = expand_cgp_provider(ProviderArgs { component: None }, item).unwrap();
        let out = normalize(out);
        assert!(out.contains(
            "impl<Context>::tola_cgp::IsProviderFor<ConverterComponent,Context,(Celsius,)>forToCelsiuswhereContext:HasKelvin{}"
        ));
    }

    #[test]
    fn test_inherent_impl_is_rejected() {
        let item: ItemImpl = syn::parse_str("impl RectangleArea { }").unwrap();
        assert!(expand_cgp_provider(ProviderArgs { component: None }, item).is_err());
    }

    #[test]
    fn test_new_provider_needs_plain_name() {
        let item: ItemImpl = syn::parse_str(
            "impl<Context, Inner> AreaCalculator<Context> for ScaledArea<Inner> { }",
        )
        .unwrap();
        assert!(expand_cgp_new_provider(ProviderArgs { component: None }, item).is_err());
    }
}
