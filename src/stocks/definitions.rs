// src/stocks/definitions.rs
//! Core stock records shown by the list and detail screens.
//
//! Raw records arrive from a `StockSource` without chart data; the portfolio
//! step attaches a synthesized series and never touches them afterwards.

pub type Symbol = String;

use crate::error::LoadError;
use crate::types::ChartPoint;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One tradable instrument, optionally held by the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stock {
    /// Ticker, unique within a collection (e.g. "AAPL").
    pub symbol: Symbol,
    /// Human-readable company name.
    pub name: String,
    /// Last price, never negative.
    pub price: f64,
    /// Signed percentage change since the previous close.
    pub daily_change: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub market_cap: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Shares traded; fractional and exponent forms are accepted.
    pub volume: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub open: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub high: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub low: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pe_ratio: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dividend_yield: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sector: Option<String>,
    /// Quantity held by the user. Absent means no position.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shares_owned: Option<f64>,
    /// Synthesized series; empty on raw records.
    #[serde(default, rename = "chartData")]
    pub chart_data: Vec<ChartPoint>,
}

impl Stock {
    /// Convenience factory so call-sites stay concise. Optional fields start empty.
    #[inline]
    pub fn new<T1: Into<String>, T2: Into<String>>(
        symbol: T1,
        name: T2,
        price: f64,
        daily_change: f64,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            name: name.into(),
            price,
            daily_change,
            market_cap: None,
            volume: None,
            open: None,
            high: None,
            low: None,
            pe_ratio: None,
            dividend_yield: None,
            sector: None,
            shares_owned: None,
            chart_data: Vec::new(),
        }
    }

    pub fn with_shares(mut self, shares: f64) -> Self {
        self.shares_owned = Some(shares);
        self
    }

    /// Shares held, zero when there is no position.
    #[inline]
    pub fn shares(&self) -> f64 {
        self.shares_owned.unwrap_or(0.0)
    }

    /// Market value of the position.
    #[inline]
    pub fn position_value(&self) -> f64 {
        self.price * self.shares()
    }

    /// Money gained or lost on the position today.
    #[inline]
    pub fn position_change_value(&self) -> f64 {
        self.price * self.daily_change / 100.0 * self.shares()
    }

    /// Checks the per-record invariants.
    pub fn validate(&self) -> Result<(), String> {
        if self.symbol.trim().is_empty() {
            return Err("stock with empty symbol".to_string());
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(format!("{} has invalid price {}", self.symbol, self.price));
        }
        if !self.daily_change.is_finite() {
            return Err(format!("{} has non-finite daily change", self.symbol));
        }
        if let Some(shares) = self.shares_owned {
            if !shares.is_finite() || shares < 0.0 {
                return Err(format!("{} has invalid holding {}", self.symbol, shares));
            }
        }
        Ok(())
    }
}

/// Validates a freshly loaded collection: every record is valid and no symbol repeats.
pub fn validate_universe(stocks: &[Stock]) -> Result<(), LoadError> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(stocks.len());
    for stock in stocks {
        stock.validate().map_err(LoadError::Invalid)?;
        if !seen.insert(stock.symbol.as_str()) {
            return Err(LoadError::Invalid(format!("duplicate symbol {}", stock.symbol)));
        }
    }
    Ok(())
}
