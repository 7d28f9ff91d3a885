//! Common parsing utilities
//!
//! Shared parsing helpers for consistent syntax across macros.

use syn::{
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    token, Ident, Token, Type,
};

// =============================================================================
// Keyed Arguments: `key: Value`
// =============================================================================

/// A single keyed argument: `provider: AreaCalculator`
///
/// Used in:
/// - `#[cgp_component { name: FooComponent, provider: Foo }]`
/// - `#[cgp_type { provider: ScalarTypeProvider }]`
#[derive(Clone)]
pub struct KeyValue {
    pub key: Ident,
    pub value: Ident,
}

impl Parse for KeyValue {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let key: Ident = input.parse()?;
        input.parse::<Token![:]>()?;
        let value: Ident = input.parse()?;
        Ok(KeyValue { key, value })
    }
}

/// Check if next tokens look like `key: ...`
pub fn peek_key_value(input: ParseStream) -> bool {
    input.peek(Ident) && input.peek2(Token![:]) && !input.peek2(Token![::])
}

// =============================================================================
// Comma-separated List Parsing
// =============================================================================

/// Parse a comma-separated list of items
pub fn parse_comma_separated<T: Parse>(input: ParseStream) -> syn::Result<Vec<T>> {
    let items = Punctuated::<T, Token![,]>::parse_terminated(input)?;
    Ok(items.into_iter().collect())
}

// =============================================================================
// Component Keys: `Comp` or `[CompA, CompB]`
// =============================================================================

/// Left-hand side of a wiring or check entry.
pub fn parse_component_keys(input: ParseStream) -> syn::Result<Vec<Type>> {
    if input.peek(token::Bracket) {
        let content;
        syn::bracketed!(content in input);
        parse_comma_separated(&content)
    } else {
        Ok(vec![input.parse()?])
    }
}

// =============================================================================
// Keyword Detection
// =============================================================================

/// Check if the next identifier is a specific keyword
pub fn peek_keyword(input: ParseStream, keyword: &str) -> bool {
    if input.peek(Ident) {
        let fork = input.fork();
        if let Ok(ident) = fork.parse::<Ident>() {
            return ident == keyword;
        }
    }
    false
}

/// Consume an identifier if it matches the keyword
pub fn try_parse_keyword(input: ParseStream, keyword: &str) -> syn::Result<bool> {
    if peek_keyword(input, keyword) {
        let _: Ident = input.parse()?;
        Ok(true)
    } else {
        Ok(false)
    }
}
