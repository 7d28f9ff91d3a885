//! Type slots: per-context binding of abstract types

use core::ops::{Add, Mul};

use tola_cgp::define_type_slot;
use tola_cgp::prelude::*;

// =============================================================================
// Scalar slot, bound to f32 in one context and f64 in another
// =============================================================================

#[cgp_type]
pub trait HasScalarType {
    type Scalar: Copy + Add<Output = Self::Scalar> + Mul<Output = Self::Scalar> + PartialEq + core::fmt::Debug;
}

#[cgp_component(AreaCalculator)]
pub trait HasArea: HasScalarType {
    fn area(&self) -> Self::Scalar;
}

#[cgp_auto_getter]
pub trait HasSide: HasScalarType {
    fn side(&self) -> Self::Scalar;
}

#[cgp_new_provider]
impl<Context> AreaCalculator<Context> for SquareArea
where
    Context: HasSide,
{
    fn area(context: &Context) -> Context::Scalar {
        context.side() * context.side()
    }
}

#[cgp_context]
#[derive(HasField)]
pub struct CompactSquare {
    pub side: f32,
}

delegate_components! {
    CompactSquareComponents {
        ScalarTypeProviderComponent: UseType<f32>,
        AreaCalculatorComponent: SquareArea,
    }
}

#[cgp_context]
#[derive(HasField)]
pub struct PreciseSquare {
    pub side: f64,
}

delegate_components! {
    PreciseSquareComponents {
        ScalarTypeProviderComponent: UseType<f64>,
        AreaCalculatorComponent: SquareArea,
    }
}

#[test]
fn test_same_provider_two_scalar_types() {
    let compact: f32 = CompactSquare { side: 1.5 }.area();
    let precise: f64 = PreciseSquare { side: 1.5 }.area();
    assert_eq!(compact, 2.25f32);
    assert_eq!(precise, 2.25f64);
}

#[test]
fn test_slot_resolves_to_bound_type() {
    fn size_of_scalar<Context: HasScalarType>() -> usize {
        core::mem::size_of::<Context::Scalar>()
    }

    assert_eq!(size_of_scalar::<CompactSquare>(), 4);
    assert_eq!(size_of_scalar::<PreciseSquare>(), 8);
    assert_eq!(
        core::any::type_name::<<CompactSquare as HasScalarType>::Scalar>(),
        "f32"
    );
}

// =============================================================================
// Type collection: several slots bound together
// =============================================================================

#[cgp_type]
pub trait HasMeasureTypes {
    type Length: Copy + Into<f64>;
    type Count: Copy + Into<u64>;
}

#[cgp_component(DensityCalculator)]
pub trait CanComputeDensity: HasMeasureTypes {
    fn density(&self, length: Self::Length, count: Self::Count) -> f64;
}

#[cgp_new_provider]
impl<Context> DensityCalculator<Context> for CountPerLength
where
    Context: HasMeasureTypes,
{
    fn density(_context: &Context, length: Context::Length, count: Context::Count) -> f64 {
        let length: f64 = length.into();
        let count: u64 = count.into();
        count as f64 / length
    }
}

#[cgp_context]
pub struct Survey;

delegate_components! {
    SurveyComponents {
        MeasureTypesProviderComponent: UseType<(f32, u32)>,
        DensityCalculatorComponent: CountPerLength,
    }
}

check_components! {
    CanUseSurvey for Survey {
        [MeasureTypesProviderComponent, DensityCalculatorComponent],
    }
}

#[test]
fn test_type_collection_binds_in_order() {
    assert_eq!(core::any::type_name::<<Survey as HasMeasureTypes>::Length>(), "f32");
    assert_eq!(core::any::type_name::<<Survey as HasMeasureTypes>::Count>(), "u32");
    assert_eq!(Survey.density(4.0, 10), 2.5);
}

// =============================================================================
// Named provider and define_type_slot!
// =============================================================================

#[cgp_type(CurrencyTypeResolver)]
pub trait HasCurrencyType {
    type Currency: Clone + core::fmt::Display;
}

define_type_slot!(pub Amount: Copy + Into<f64>);

#[cgp_context]
pub struct Ledger;

delegate_components! {
    LedgerComponents {
        CurrencyTypeResolverComponent: UseType<&'static str>,
        AmountTypeProviderComponent: UseType<u32>,
    }
}

fn describe<Context>(currency: Context::Currency, amount: Context::Amount) -> String
where
    Context: HasCurrencyType + HasAmountType,
{
    let amount: f64 = amount.into();
    format!("{} {:.2}", currency, amount)
}

#[test]
fn test_named_type_provider() {
    assert_eq!(describe::<Ledger>("EUR", 12), "EUR 12.00");
}

#[test]
fn test_use_type_is_zero_sized() {
    assert_eq!(core::mem::size_of::<UseType<f64>>(), 0);
    let _ = UseType::<(f32, u32)>::default();
}
