//! Type-level field names.
//!
//! A field name is encoded as a character list so that two contexts with a
//! field called `width` share the exact same tag type:
//!
//! ```text
//! symbol!("abc") -> Cons<Char<'a'>, Cons<Char<'b'>, Cons<Char<'c'>, Nil>>>
//! ```
//!
//! Tuple-struct fields use `Index<N>` instead.

use core::fmt;
use core::marker::PhantomData;

/// Single character of a symbol.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Char<const CHAR: char>;

/// Symbol node: head character + remaining symbol.
pub struct Cons<Head, Tail>(PhantomData<(Head, Tail)>);

/// Symbol terminator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Nil;

/// Positional tag for tuple-struct fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Index<const I: usize>;

// Manual impls: derives would put bounds on Head/Tail.
impl<Head, Tail> Default for Cons<Head, Tail> {
    fn default() -> Self {
        Cons(PhantomData)
    }
}

impl<Head, Tail> Clone for Cons<Head, Tail> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<Head, Tail> Copy for Cons<Head, Tail> {}

impl<Head, Tail> fmt::Debug for Cons<Head, Tail>
where
    Self: StaticSymbol,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("symbol!(\"")?;
        <Self as StaticSymbol>::write_to(f)?;
        f.write_str("\")")
    }
}

/// Symbols that can be rendered back to text.
///
/// Used for diagnostics and by tests; it has no role in dispatch.
pub trait StaticSymbol {
    /// Number of characters in the symbol.
    const LEN: usize;

    /// Writes the symbol text to `out`.
    fn write_to<W: fmt::Write + ?Sized>(out: &mut W) -> fmt::Result;
}

impl StaticSymbol for Nil {
    const LEN: usize = 0;

    #[inline]
    fn write_to<W: fmt::Write + ?Sized>(_out: &mut W) -> fmt::Result {
        Ok(())
    }
}

impl<const CHAR: char, Tail: StaticSymbol> StaticSymbol for Cons<Char<CHAR>, Tail> {
    const LEN: usize = 1 + Tail::LEN;

    fn write_to<W: fmt::Write + ?Sized>(out: &mut W) -> fmt::Result {
        out.write_char(CHAR)?;
        Tail::write_to(out)
    }
}

impl<const I: usize> StaticSymbol for Index<I> {
    // Decimal digits of I.
    const LEN: usize = {
        let mut n = I;
        let mut len = 1;
        while n >= 10 {
            n /= 10;
            len += 1;
        }
        len
    };

    fn write_to<W: fmt::Write + ?Sized>(out: &mut W) -> fmt::Result {
        write!(out, "{}", I)
    }
}

/// Renders a symbol type as an owned string.
///
/// ```
/// use tola_cgp::{symbol, symbol_name};
///
/// assert_eq!(symbol_name::<symbol!("width")>(), "width");
/// ```
#[cfg(feature = "alloc")]
pub fn symbol_name<S: StaticSymbol + ?Sized>() -> alloc::string::String {
    let mut out = alloc::string::String::with_capacity(S::LEN);
    // Writing into a String cannot fail.
    let _ = S::write_to(&mut out);
    out
}
