//! Structural accessors: derived fields, wired getters, computed values

use core::marker::PhantomData;

use tola_cgp::prelude::*;

// =============================================================================
// Derived HasField
// =============================================================================

#[derive(HasField)]
pub struct Panel {
    pub width: f64,
    pub height: f64,
    pub r#type: u8,
}

#[derive(HasField)]
pub struct Pair(pub u32, pub String);

#[derive(HasField)]
pub struct Labelled<T> {
    pub label: String,
    pub value: T,
}

#[test]
fn test_named_field_access() {
    let panel = Panel { width: 2.0, height: 3.0, r#type: 7 };
    assert_eq!(*panel.get_field(PhantomData::<symbol!("width")>), 2.0);
    assert_eq!(*panel.get_field(PhantomData::<symbol!(height)>), 3.0);
    // raw identifiers are tagged without the prefix
    assert_eq!(*panel.get_field(PhantomData::<symbol!("type")>), 7);
}

#[test]
fn test_tuple_field_access() {
    let pair = Pair(5, "five".to_string());
    assert_eq!(*pair.get_field(PhantomData::<Index<0>>), 5);
    assert_eq!(pair.get_field(PhantomData::<Index<1>>), "five");
}

#[test]
fn test_field_access_through_reference() {
    let panel = Panel { width: 2.0, height: 3.0, r#type: 0 };
    let by_ref = &panel;
    assert_eq!(*<&Panel as HasField<symbol!("height")>>::get_field(&by_ref, PhantomData), 3.0);
}

#[test]
fn test_mutable_field_access() {
    let mut panel = Panel { width: 2.0, height: 3.0, r#type: 0 };
    *panel.get_field_mut(PhantomData::<symbol!("width")>) = 10.0;
    assert_eq!(panel.width, 10.0);
}

#[test]
fn test_generic_struct_fields() {
    let labelled = Labelled { label: "count".to_string(), value: 3u8 };
    assert_eq!(*labelled.get_field(PhantomData::<symbol!("value")>), 3u8);
}

#[test]
fn test_symbol_name_round_trips() {
    assert_eq!(tola_cgp::symbol_name::<symbol!("scale_factor")>(), "scale_factor");
    assert_eq!(tola_cgp::symbol_name::<symbol!("")>(), "");
}

// =============================================================================
// Wired getters
// =============================================================================

#[cgp_getter(WidthGetter)]
pub trait HasWidth {
    fn width(&self) -> f64;
}

#[cgp_getter(NameGetter)]
pub trait HasName {
    fn name(&self) -> &str;
}

#[cgp_getter(DimensionsGetter)]
pub trait HasDimensions {
    fn height(&self) -> &f64;
    fn depth(&self) -> &f64;
}

/// Stored in millimetres, exposed in metres.
#[cgp_new_provider]
impl<Context> WidthGetter<Context> for MillimetresToMetres
where
    Context: HasField<symbol!("width_mm"), Value = u32>,
{
    fn width(context: &Context) -> f64 {
        f64::from(*context.get_field(PhantomData)) / 1000.0
    }
}

#[cgp_context]
#[derive(HasField)]
pub struct Sheet {
    pub width: f64,
    pub height: f64,
    pub depth: f64,
    pub name: String,
}

delegate_components! {
    SheetComponents {
        [WidthGetterComponent, NameGetterComponent, DimensionsGetterComponent]: UseFields,
    }
}

#[cgp_context]
#[derive(HasField)]
pub struct Blueprint {
    pub width_mm: u32,
    pub title: String,
}

delegate_components! {
    BlueprintComponents {
        WidthGetterComponent: MillimetresToMetres,
        NameGetterComponent: UseField<symbol!("title")>,
    }
}

check_components! {
    CanUseSheet for Sheet {
        [WidthGetterComponent, NameGetterComponent, DimensionsGetterComponent],
    }
    CanUseBlueprint for Blueprint {
        [WidthGetterComponent, NameGetterComponent],
    }
}

#[test]
fn test_use_fields_reads_same_named_field() {
    let sheet = Sheet { width: 0.21, height: 0.297, depth: 0.0001, name: "A4".to_string() };
    assert_eq!(sheet.width(), 0.21);
    assert_eq!(sheet.name(), "A4");
    assert_eq!(*sheet.height(), 0.297);
    assert_eq!(*sheet.depth(), 0.0001);
}

#[test]
fn test_computed_accessor() {
    let blueprint = Blueprint { width_mm: 1500, title: "shed".to_string() };
    assert_eq!(blueprint.width(), 1.5);
}

#[test]
fn test_use_field_reads_other_field() {
    let blueprint = Blueprint { width_mm: 0, title: "shed".to_string() };
    assert_eq!(blueprint.name(), "shed");
}

// =============================================================================
// Nested delegation: a table delegating to another table
// =============================================================================

pub struct SharedGetters;

delegate_components! {
    SharedGetters {
        [WidthGetterComponent, NameGetterComponent]: UseFields,
    }
}

#[cgp_context]
#[derive(HasField)]
pub struct Poster {
    pub width: f64,
    pub name: String,
}

delegate_components! {
    PosterComponents {
        [WidthGetterComponent, NameGetterComponent]: SharedGetters,
    }
}

#[test]
fn test_nested_table() {
    let poster = Poster { width: 0.6, name: "gig".to_string() };
    assert_eq!(poster.width(), 0.6);
    assert_eq!(poster.name(), "gig");
}

// =============================================================================
// Auto getters: no wiring
// =============================================================================

#[cgp_auto_getter]
pub trait HasPair {
    fn first(&self) -> &u32;
    fn second(&self) -> &str;
}

#[derive(HasField)]
pub struct Named {
    pub first: u32,
    pub second: String,
}

#[test]
fn test_auto_getter_without_context_wiring() {
    let named = Named { first: 1, second: "two".to_string() };
    assert_eq!(*named.first(), 1);
    assert_eq!(named.second(), "two");
}
