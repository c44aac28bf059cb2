// src/data_source/mod.rs

//! Where the raw stock collection comes from.
//!
//! Every variant speaks the same `{ "stocks": [...] }` JSON shape, drops any
//! chart data it finds (charts are always re-synthesized) and validates the
//! universe before handing it out.

pub mod file;
pub mod fixture;

pub use file::JsonFileSource;
pub use fixture::FixtureSource;

use crate::error::LoadError;
use crate::stocks::{Stock, validate_universe};
use serde::{Deserialize, Serialize};

/// Wire shape of a stock data file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StockData {
    pub stocks: Vec<Stock>,
}

/// A pluggable supplier of raw stocks.
pub trait StockSource {
    /// Produces the raw collection, without chart data.
    fn load_stocks(&self) -> Result<Vec<Stock>, LoadError>;

    /// Reload. Sources with nothing to invalidate simply load again.
    fn refresh(&self) -> Result<Vec<Stock>, LoadError> {
        self.load_stocks()
    }

    /// Short label for logs.
    fn describe(&self) -> String;
}

impl<S: StockSource + ?Sized> StockSource for Box<S> {
    fn load_stocks(&self) -> Result<Vec<Stock>, LoadError> {
        (**self).load_stocks()
    }

    fn refresh(&self) -> Result<Vec<Stock>, LoadError> {
        (**self).refresh()
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

/// Parses and validates a `{ "stocks": [...] }` document.
pub fn parse_stock_data(json: &str) -> Result<Vec<Stock>, LoadError> {
    let data: StockData = serde_json::from_str(json)?;
    into_raw(data.stocks)
}

// Strips derived data and checks invariants.
fn into_raw(mut stocks: Vec<Stock>) -> Result<Vec<Stock>, LoadError> {
    for stock in &mut stocks {
        stock.chart_data.clear();
    }
    validate_universe(&stocks)?;
    Ok(stocks)
}

/// An in-memory collection handed in by the embedder.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    stocks: Vec<Stock>,
}

impl StaticSource {
    pub fn new(stocks: Vec<Stock>) -> Self {
        Self { stocks }
    }
}

impl StockSource for StaticSource {
    fn load_stocks(&self) -> Result<Vec<Stock>, LoadError> {
        into_raw(self.stocks.clone())
    }

    fn describe(&self) -> String {
        format!("static ({} stocks)", self.stocks.len())
    }
}
