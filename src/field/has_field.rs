//! Structural field access.

use core::marker::PhantomData;

/// `Self` has a field tagged `Tag` holding a `Value`.
///
/// `Tag` is `symbol!("name")` for named fields and `Index<N>` for tuple
/// fields. Implemented by `#[derive(HasField)]`.
///
/// When an accessor bound fails inside a provider's where-clause, the
/// compiler reports the unmet `HasField` as a `required for` note on the
/// provider, with the tag spelled out as a character list:
///
/// ```text
/// the trait `HasField<Cons<Char<'s'>, Cons<Char<'i'>, Cons<_, ...>>>>` is not implemented for `Disc`
/// ```
///
/// Read the characters in order (`s`, `i`, ...) or render a full tag with
/// [`symbol_name`](crate::symbol_name) and `{:?}`.
#[diagnostic::on_unimplemented(
    message = "UnsatisfiedAccessor: `{Self}` has no field `{Tag}` of the required type",
    label = "missing field for accessor",
    note = "add the field and `#[derive(HasField)]`, or wire the accessor component to a hand-written provider"
)]
pub trait HasField<Tag> {
    type Value;

    fn get_field(&self, tag: PhantomData<Tag>) -> &Self::Value;
}

/// Mutable counterpart of [`HasField`].
pub trait HasFieldMut<Tag>: HasField<Tag> {
    fn get_field_mut(&mut self, tag: PhantomData<Tag>) -> &mut Self::Value;
}

// References forward to the referent so accessors work through `&Context`.
impl<Context, Tag> HasField<Tag> for &Context
where
    Context: HasField<Tag> + ?Sized,
{
    type Value = Context::Value;

    #[inline]
    fn get_field(&self, tag: PhantomData<Tag>) -> &Self::Value {
        Context::get_field(*self, tag)
    }
}
