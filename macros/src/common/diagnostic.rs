//! Macro-time wiring diagnostics.
//!
//! Each variant renders one message that names the broken obligation and
//! the item it concerns. Solver-time failures (missing wiring, missing
//! field, unmet provider requirement) are reported through the
//! `#[diagnostic::on_unimplemented]` attributes of the runtime crate
//! instead.

use core::fmt;

use quote::ToTokens;

pub enum WiringError {
    /// Same component listed twice in one wiring table.
    AmbiguousWiring { table: String, component: String },
    /// Same (context, component, params) listed twice in one check block.
    DuplicateCheck { context: String, component: String },
    /// Capability declared without a provider trait name.
    MissingProviderName { capability: String, attribute: &'static str },
    /// Generic parameter kind the capability macros cannot forward.
    UnsupportedGeneric { item: String, param: String },
    /// Trait item kind the capability macros cannot forward.
    UnsupportedItem { item: String, reason: &'static str },
    /// Getter method shape that cannot be read from a field.
    MalformedGetter { method: String, reason: &'static str },
    /// `#[cgp_blanket]` method without a body.
    MissingDefaultBody { capability: String, method: String },
    /// Declaration kind the macro does not accept.
    UnsupportedTarget { attribute: &'static str, expected: &'static str },
}

impl fmt::Display for WiringError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WiringError::AmbiguousWiring { table, component } => write!(
                f,
                "AmbiguousWiring: component `{}` is wired more than once in `{}`\n\
                 \n\
                 Each (context, capability) pair resolves to exactly one provider.\n\
                 Remove all but one entry; there is no priority rule between entries.",
                component, table
            ),
            WiringError::DuplicateCheck { context, component } => write!(
                f,
                "component `{}` is checked more than once for `{}`",
                component, context
            ),
            WiringError::MissingProviderName { capability, attribute } => write!(
                f,
                "capability `{}` needs a provider trait name\n\
                 \n\
                 Write `#[{}(ProviderName)]` or `#[{} {{ provider: ProviderName }}]`.",
                capability, attribute, attribute
            ),
            WiringError::UnsupportedGeneric { item, param } => write!(
                f,
                "`{}`: generic parameter `{}` is not supported, only type parameters are forwarded to providers",
                item, param
            ),
            WiringError::UnsupportedItem { item, reason } => write!(f, "`{}`: {}", item, reason),
            WiringError::MalformedGetter { method, reason } => {
                write!(f, "getter `{}` cannot be read from a field: {}", method, reason)
            }
            WiringError::MissingDefaultBody { capability, method } => write!(
                f,
                "`#[cgp_blanket]` on `{}`: method `{}` needs a default body\n\
                 \n\
                 A blanket capability has a single implementation shared by every context.",
                capability, method
            ),
            WiringError::UnsupportedTarget { attribute, expected } => {
                write!(f, "`{}` can only be applied to {}", attribute, expected)
            }
        }
    }
}

impl WiringError {
    /// Attach the message to the tokens of the offending item.
    pub fn spanned<T: ToTokens>(self, tokens: T) -> syn::Error {
        syn::Error::new_spanned(tokens, self.to_string())
    }
}

/// Render tokens without the spaces `to_string` inserts, for messages and keys.
pub fn compact(tokens: impl ToTokens) -> String {
    tokens.to_token_stream().to_string().replace(' ', "")
}

