//! Blanket capabilities: shared implementation, same call sites

use tola_cgp::prelude::*;

#[cgp_component(AreaCalculator)]
pub trait HasArea {
    fn area(&self) -> f64;
}

#[cgp_auto_getter]
pub trait HasName {
    fn name(&self) -> &str;
}

#[cgp_blanket]
pub trait CanDescribeArea: HasArea + HasName {
    const UNIT: &'static str = "m2";

    fn describe_area(&self) -> String {
        format!("{}: {:.1} {}", self.name(), self.area(), Self::UNIT)
    }
}

#[cgp_blanket]
pub trait CanCompareArea<Other: HasArea>: HasArea {
    fn larger_than(&self, other: &Other) -> bool {
        self.area() > other.area()
    }
}

#[cgp_new_provider]
impl<Context> AreaCalculator<Context> for FixedArea {
    fn area(_context: &Context) -> f64 {
        6.5
    }
}

#[cgp_new_provider]
impl<Context> AreaCalculator<Context> for NoArea {
    fn area(_context: &Context) -> f64 {
        0.0
    }
}

#[cgp_context]
#[derive(HasField)]
pub struct Room {
    pub name: String,
}

delegate_components! {
    RoomComponents {
        AreaCalculatorComponent: FixedArea,
    }
}

#[cgp_context]
#[derive(HasField)]
pub struct Hallway {
    pub name: String,
}

delegate_components! {
    HallwayComponents {
        AreaCalculatorComponent: NoArea,
    }
}

#[test]
fn test_blanket_method_on_wired_context() {
    let room = Room { name: "study".to_string() };
    assert_eq!(room.describe_area(), "study: 6.5 m2");
}

#[test]
fn test_blanket_sees_each_contexts_wiring() {
    let hallway = Hallway { name: "hall".to_string() };
    assert_eq!(hallway.describe_area(), "hall: 0.0 m2");
}

#[test]
fn test_generic_blanket() {
    let room = Room { name: "study".to_string() };
    let hallway = Hallway { name: "hall".to_string() };
    assert!(room.larger_than(&hallway));
    assert!(!hallway.larger_than(&room));
}

#[test]
fn test_blanket_in_generic_code() {
    fn describe_all<Context: CanDescribeArea>(contexts: &[Context]) -> Vec<String> {
        contexts.iter().map(CanDescribeArea::describe_area).collect()
    }

    let rooms = [Room { name: "a".to_string() }, Room { name: "b".to_string() }];
    assert_eq!(describe_all(&rooms), vec!["a: 6.5 m2", "b: 6.5 m2"]);
}
