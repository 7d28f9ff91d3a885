//! Geometry Wiring Demonstration
//!
//! One `HasArea` capability, one generic report, three shapes. Each shape
//! picks its area provider and its scalar type in its own wiring table.
//!
//! Run: `cargo run --example geometry`

use core::fmt::Display;
use core::marker::PhantomData;
use core::ops::Mul;

use tola_cgp::prelude::*;

// =============================================================================
// Capabilities
// =============================================================================

#[cgp_type]
pub trait HasScalarType {
    type Scalar: Copy + Mul<Output = Self::Scalar> + From<f32> + Display;
}

#[cgp_component(AreaCalculator)]
pub trait HasArea: HasScalarType {
    fn area(&self) -> Self::Scalar;
}

#[cgp_auto_getter]
pub trait HasRectangleDimensions: HasScalarType {
    fn width(&self) -> Self::Scalar;
    fn height(&self) -> Self::Scalar;
}

#[cgp_auto_getter]
pub trait HasRadius: HasScalarType {
    fn radius(&self) -> Self::Scalar;
}

#[cgp_getter(ScaleFactorGetter)]
pub trait HasScaleFactor: HasScalarType {
    fn scale_factor(&self) -> Self::Scalar;
}

#[cgp_auto_getter]
pub trait HasName {
    fn name(&self) -> &str;
}

#[cgp_blanket]
pub trait CanReport: HasArea + HasName {
    fn report(&self) -> String {
        format!("{:<10} area = {:.3}", self.name(), self.area())
    }
}

// =============================================================================
// Providers
// =============================================================================

#[cgp_new_provider]
impl<Context> AreaCalculator<Context> for RectangleArea
where
    Context: HasRectangleDimensions,
{
    fn area(context: &Context) -> Context::Scalar {
        context.width() * context.height()
    }
}

#[cgp_new_provider]
impl<Context> AreaCalculator<Context> for CircleArea
where
    Context: HasRadius,
{
    fn area(context: &Context) -> Context::Scalar {
        let pi = <Context::Scalar as From<f32>>::from(core::f32::consts::PI);
        pi * context.radius() * context.radius()
    }
}

pub struct ScaledArea<Inner>(PhantomData<Inner>);

#[cgp_provider]
impl<Context, Inner> AreaCalculator<Context> for ScaledArea<Inner>
where
    Context: HasScaleFactor,
    Inner: AreaCalculator<Context>,
{
    fn area(context: &Context) -> Context::Scalar {
        Inner::area(context) * context.scale_factor()
    }
}

// =============================================================================
// Contexts
// =============================================================================

#[cgp_context]
#[derive(HasField)]
pub struct Rectangle {
    pub name: String,
    pub width: f64,
    pub height: f64,
}

delegate_components! {
    RectangleComponents {
        ScalarTypeProviderComponent: UseType<f64>,
        AreaCalculatorComponent: RectangleArea,
    }
}

#[cgp_context]
#[derive(HasField)]
pub struct Circle {
    pub name: String,
    pub radius: f32,
}

delegate_components! {
    CircleComponents {
        ScalarTypeProviderComponent: UseType<f32>,
        AreaCalculatorComponent: CircleArea,
    }
}

#[cgp_context]
#[derive(HasField)]
pub struct Blueprint {
    pub name: String,
    pub width: f64,
    pub height: f64,
    pub zoom: f64,
}

delegate_components! {
    BlueprintComponents {
        ScalarTypeProviderComponent: UseType<f64>,
        ScaleFactorGetterComponent: UseField<symbol!("zoom")>,
        AreaCalculatorComponent: ScaledArea<RectangleArea>,
    }
}

check_components! {
    CanUseRectangle for Rectangle {
        [ScalarTypeProviderComponent, AreaCalculatorComponent],
    }
    CanUseCircle for Circle {
        [ScalarTypeProviderComponent, AreaCalculatorComponent],
    }
    CanUseBlueprint for Blueprint {
        [ScalarTypeProviderComponent, ScaleFactorGetterComponent, AreaCalculatorComponent],
    }
}

fn main() {
    println!("=== Geometry Wiring ===\n");

    let rectangle = Rectangle { name: "rectangle".into(), width: 3.0, height: 4.0 };
    let circle = Circle { name: "circle".into(), radius: 2.0 };
    let blueprint = Blueprint { name: "blueprint".into(), width: 3.0, height: 4.0, zoom: 2.0 };

    println!("{}", rectangle.report());
    println!("{}", circle.report());
    println!("{}", blueprint.report());

    println!("\nScalar types:");
    println!("  rectangle -> {}", core::any::type_name::<<Rectangle as HasScalarType>::Scalar>());
    println!("  circle    -> {}", core::any::type_name::<<Circle as HasScalarType>::Scalar>());
}
