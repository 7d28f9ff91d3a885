//! Swappable Providers Demonstration
//!
//! The same pricing logic runs against a live quote table and a recorded
//! feed. Nothing but the wiring tables differs between the two contexts.
//!
//! Run: `cargo run --example pricing_feed`

use std::cell::RefCell;
use std::collections::BTreeMap;

use tola_cgp::prelude::*;

#[derive(Debug)]
pub enum FeedError {
    Missing(String),
}

#[cgp_component(QuoteFetcher)]
pub trait CanFetchQuote {
    fn fetch_quote(&self, symbol: &str) -> Result<f64, FeedError>;
}

#[cgp_component(FeeCalculator)]
pub trait CanComputeFee {
    fn fee(&self, gross: f64) -> f64;
}

#[cgp_auto_getter]
pub trait HasQuoteTable {
    fn quotes(&self) -> &BTreeMap<String, f64>;
}

#[cgp_auto_getter]
pub trait HasCallLog {
    fn calls(&self) -> &RefCell<Vec<String>>;
}

#[cgp_getter(FeeRateGetter)]
pub trait HasFeeRate {
    fn fee_rate(&self) -> f64;
}

#[cgp_new_provider]
impl<Context> QuoteFetcher<Context> for TableQuotes
where
    Context: HasQuoteTable,
{
    fn fetch_quote(context: &Context, symbol: &str) -> Result<f64, FeedError> {
        context
            .quotes()
            .get(symbol)
            .copied()
            .ok_or_else(|| FeedError::Missing(symbol.to_string()))
    }
}

#[cgp_new_provider]
impl<Context> QuoteFetcher<Context> for RecordedQuotes
where
    Context: HasCallLog,
{
    fn fetch_quote(context: &Context, symbol: &str) -> Result<f64, FeedError> {
        context.calls().borrow_mut().push(symbol.to_string());
        Ok(10.0)
    }
}

#[cgp_new_provider]
impl<Context> FeeCalculator<Context> for RateFee
where
    Context: HasFeeRate,
{
    fn fee(context: &Context, gross: f64) -> f64 {
        gross * context.fee_rate()
    }
}

#[cgp_new_provider]
impl<Context> FeeCalculator<Context> for NoFee {
    fn fee(_context: &Context, _gross: f64) -> f64 {
        0.0
    }
}

#[cgp_blanket]
pub trait CanPriceOrder: CanFetchQuote + CanComputeFee {
    fn order_total(&self, symbol: &str, units: f64) -> Result<f64, FeedError> {
        let gross = self.fetch_quote(symbol)? * units;
        Ok(gross + self.fee(gross))
    }
}

#[cgp_context]
#[derive(HasField)]
pub struct Exchange {
    pub quotes: BTreeMap<String, f64>,
    pub fee_rate: f64,
}

delegate_components! {
    ExchangeComponents {
        QuoteFetcherComponent: TableQuotes,
        FeeRateGetterComponent: UseFields,
        FeeCalculatorComponent: RateFee,
    }
}

#[cgp_context]
#[derive(HasField, Default)]
pub struct Replay {
    pub calls: RefCell<Vec<String>>,
}

delegate_components! {
    ReplayComponents {
        QuoteFetcherComponent: RecordedQuotes,
        FeeCalculatorComponent: NoFee,
    }
}

check_components! {
    CanUseExchange for Exchange {
        [QuoteFetcherComponent, FeeRateGetterComponent, FeeCalculatorComponent],
    }
    CanUseReplay for Replay {
        [QuoteFetcherComponent, FeeCalculatorComponent],
    }
}

fn main() {
    println!("=== Swappable Providers ===\n");

    let mut quotes = BTreeMap::new();
    quotes.insert("ACME".to_string(), 12.5);
    let exchange = Exchange { quotes, fee_rate: 0.01 };
    let replay = Replay::default();

    for symbol in ["ACME", "NOPE"] {
        match exchange.order_total(symbol, 4.0) {
            Ok(total) => println!("exchange {symbol}: {total:.2}"),
            Err(err) => println!("exchange {symbol}: {err:?}"),
        }
        match replay.order_total(symbol, 4.0) {
            Ok(total) => println!("replay   {symbol}: {total:.2}"),
            Err(err) => println!("replay   {symbol}: {err:?}"),
        }
    }

    println!("\nreplay saw: {:?}", replay.calls.borrow());
}
