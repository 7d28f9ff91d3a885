//! `Self` rewriting.
//!
//! A consumer trait is written from the context's point of view (`Self` is
//! the context). The provider trait and the stock provider impls are
//! written from the provider's point of view, so every `Self` has to become
//! the context parameter, except projections onto associated types the
//! generated item owns itself (`Self::Scalar` inside the provider trait).

use proc_macro2::{Group, Ident, TokenStream, TokenTree};

/// Replace `Self` by `context`.
///
/// `Self::Name` with `Name` listed in `assoc` is replaced by the paired
/// tokens instead, which lets callers keep (`Self::Name`) or substitute
/// (`__Type0__`) the generated item's own associated types.
pub fn rewrite_self(
    tokens: TokenStream,
    context: &TokenStream,
    assoc: &[(Ident, TokenStream)],
) -> TokenStream {
    let trees: Vec<TokenTree> = tokens.into_iter().collect();
    let mut out = TokenStream::new();
    let mut i = 0;

    while i < trees.len() {
        match &trees[i] {
            TokenTree::Ident(ident) if ident == "Self" => {
                if let Some((replacement, consumed)) = match_assoc(&trees[i + 1..], assoc) {
                    out.extend(replacement.clone());
                    i += 1 + consumed;
                    continue;
                }
                out.extend(context.clone());
            }
            TokenTree::Group(group) => {
                let inner = rewrite_self(group.stream(), context, assoc);
                let mut rewritten = Group::new(group.delimiter(), inner);
                rewritten.set_span(group.span());
                out.extend([TokenTree::Group(rewritten)]);
            }
            other => out.extend([other.clone()]),
        }
        i += 1;
    }

    out
}

/// Match `:: Name` right after a `Self` token.
fn match_assoc<'a>(
    rest: &[TokenTree],
    assoc: &'a [(Ident, TokenStream)],
) -> Option<(&'a TokenStream, usize)> {
    match rest {
        [TokenTree::Punct(a), TokenTree::Punct(b), TokenTree::Ident(name), ..]
            if a.as_char() == ':' && b.as_char() == ':' =>
        {
            assoc
                .iter()
                .find(|(assoc_name, _)| assoc_name == name)
                .map(|(_, replacement)| (replacement, 3))
        }
        _ => None,
    }
}
