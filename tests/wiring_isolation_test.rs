//! Per-context wiring: isolation, extensibility, generic capabilities

use std::cell::RefCell;
use std::collections::HashMap;

use tola_cgp::prelude::*;

// =============================================================================
// Live vs recorded provider for the same capability
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum QuoteError {
    UnknownSymbol(String),
}

#[cgp_component(QuoteFetcher)]
pub trait CanFetchQuote {
    fn fetch_quote(&self, symbol: &str) -> Result<f64, QuoteError>;
}

#[cgp_auto_getter]
pub trait HasMarket {
    fn market(&self) -> &HashMap<String, f64>;
}

#[cgp_auto_getter]
pub trait HasRequestLog {
    fn requests(&self) -> &RefCell<Vec<String>>;
}

/// Reads the current market.
#[cgp_new_provider]
impl<Context> QuoteFetcher<Context> for MarketQuotes
where
    Context: HasMarket,
{
    fn fetch_quote(context: &Context, symbol: &str) -> Result<f64, QuoteError> {
        context
            .market()
            .get(symbol)
            .copied()
            .ok_or_else(|| QuoteError::UnknownSymbol(symbol.to_string()))
    }
}

/// Answers every request with a fixed quote and remembers what was asked.
#[cgp_new_provider]
impl<Context> QuoteFetcher<Context> for RecordedQuotes
where
    Context: HasRequestLog,
{
    fn fetch_quote(context: &Context, symbol: &str) -> Result<f64, QuoteError> {
        context.requests().borrow_mut().push(symbol.to_string());
        Ok(100.0)
    }
}

#[cgp_context]
#[derive(HasField)]
pub struct LiveApp {
    pub market: HashMap<String, f64>,
}

delegate_components! {
    LiveAppComponents {
        QuoteFetcherComponent: MarketQuotes,
    }
}

#[cgp_context]
#[derive(HasField, Default)]
pub struct TestApp {
    pub requests: RefCell<Vec<String>>,
}

delegate_components! {
    TestAppComponents {
        QuoteFetcherComponent: RecordedQuotes,
    }
}

/// Business logic written once against the capability.
fn portfolio_value<Context: CanFetchQuote>(
    context: &Context,
    holdings: &[(&str, f64)],
) -> Result<f64, QuoteError> {
    holdings.iter().try_fold(0.0, |total, (symbol, units)| {
        Ok(total + context.fetch_quote(symbol)? * units)
    })
}

fn live_app() -> LiveApp {
    let mut market = HashMap::new();
    market.insert("ACME".to_string(), 12.5);
    market.insert("INIT".to_string(), 4.0);
    LiveApp { market }
}

#[test]
fn test_live_and_recorded_contexts_coexist() {
    let live = live_app();
    let test = TestApp::default();
    let holdings = [("ACME", 2.0), ("INIT", 10.0)];

    assert_eq!(portfolio_value(&live, &holdings), Ok(65.0));
    assert_eq!(portfolio_value(&test, &holdings), Ok(1200.0));

    // The live context never reached the recording provider.
    assert_eq!(*test.requests.borrow(), vec!["ACME".to_string(), "INIT".to_string()]);
}

#[test]
fn test_live_errors_propagate() {
    let live = live_app();
    assert_eq!(
        portfolio_value(&live, &[("NOPE", 1.0)]),
        Err(QuoteError::UnknownSymbol("NOPE".to_string()))
    );
}

#[test]
fn test_recorded_provider_directly() {
    let test = TestApp::default();
    assert_eq!(<RecordedQuotes as QuoteFetcher<TestApp>>::fetch_quote(&test, "X"), Ok(100.0));
    assert_eq!(test.requests.borrow().len(), 1);
}

// =============================================================================
// Extensibility: a new provider and context, nothing above changed
// =============================================================================

/// Prices every symbol by its length, for offline demos.
#[cgp_new_provider]
impl<Context> QuoteFetcher<Context> for SymbolLengthQuotes {
    fn fetch_quote(_context: &Context, symbol: &str) -> Result<f64, QuoteError> {
        Ok(symbol.len() as f64)
    }
}

#[cgp_context(OfflineWiring)]
pub struct OfflineApp;

delegate_components! {
    OfflineWiring {
        QuoteFetcherComponent: SymbolLengthQuotes,
    }
}

#[test]
fn test_added_provider_and_context() {
    assert_eq!(portfolio_value(&OfflineApp, &[("ACME", 1.0), ("AB", 3.0)]), Ok(10.0));
    assert_eq!(portfolio_value(&live_app(), &[("ACME", 1.0)]), Ok(12.5));
}

// =============================================================================
// Generic capabilities: one component, several parameter instantiations
// =============================================================================

#[derive(Debug, PartialEq)]
pub struct Celsius(pub f64);

#[derive(Debug, PartialEq)]
pub struct Fahrenheit(pub f64);

#[cgp_component(Converter)]
pub trait CanConvert<Target> {
    fn convert(&self) -> Target;
}

#[cgp_auto_getter]
pub trait HasKelvin {
    fn kelvin(&self) -> f64;
}

#[cgp_new_provider]
impl<Context> Converter<Context, Celsius> for FromKelvin
where
    Context: HasKelvin,
{
    fn convert(context: &Context) -> Celsius {
        Celsius(context.kelvin() - 273.15)
    }
}

#[cgp_provider]
impl<Context> Converter<Context, Fahrenheit> for FromKelvin
where
    Context: HasKelvin,
{
    fn convert(context: &Context) -> Fahrenheit {
        Fahrenheit((context.kelvin() - 273.15) * 9.0 / 5.0 + 32.0)
    }
}

#[cgp_context]
#[derive(HasField)]
pub struct Thermometer {
    pub kelvin: f64,
}

delegate_components! {
    ThermometerComponents {
        ConverterComponent: FromKelvin,
    }
}

check_components! {
    CanUseThermometer for Thermometer {
        ConverterComponent: (Celsius,),
        ConverterComponent: (Fahrenheit,),
    }
}

#[test]
fn test_generic_capability_instantiations() {
    let thermometer = Thermometer { kelvin: 373.15 };
    let celsius: Celsius = thermometer.convert();
    let fahrenheit: Fahrenheit = thermometer.convert();
    assert!((celsius.0 - 100.0).abs() < 1e-9);
    assert!((fahrenheit.0 - 212.0).abs() < 1e-9);
}

#[test]
fn test_generic_capability_bound() {
    fn convertible<Context: CanUseComponent<ConverterComponent, (Celsius,)>>() {}
    convertible::<Thermometer>();
}

// =============================================================================
// Hand-written HasProvider, table shared by two contexts
// =============================================================================

pub struct SharedWiring;

delegate_components! {
    SharedWiring {
        QuoteFetcherComponent: SymbolLengthQuotes,
    }
}

pub struct KioskA;
pub struct KioskB;

impl HasProvider for KioskA {
    type Components = SharedWiring;
}

impl HasProvider for KioskB {
    type Components = SharedWiring;
}

#[test]
fn test_shared_table() {
    assert_eq!(KioskA.fetch_quote("abc"), Ok(3.0));
    assert_eq!(KioskB.fetch_quote("abcd"), Ok(4.0));
}
