// src/data_source/fixture.rs

use super::{StockSource, parse_stock_data};
use crate::error::LoadError;
use crate::stocks::Stock;
use log::debug;
use once_cell::sync::OnceCell;

/// The stock list shipped with the application.
pub const BUNDLED_STOCKS_JSON: &str = include_str!("../../assets/stocks.json");

/// A JSON document compiled into the binary. Parsed on first load and reused after.
pub struct FixtureSource {
    json: &'static str,
    parsed: OnceCell<Vec<Stock>>,
}

impl FixtureSource {
    pub fn bundled() -> Self {
        Self::from_json(BUNDLED_STOCKS_JSON)
    }

    pub fn from_json(json: &'static str) -> Self {
        Self {
            json,
            parsed: OnceCell::new(),
        }
    }
}

impl Default for FixtureSource {
    fn default() -> Self {
        Self::bundled()
    }
}

impl StockSource for FixtureSource {
    fn load_stocks(&self) -> Result<Vec<Stock>, LoadError> {
        // A failed parse leaves the cell empty, so every load reports it again.
        self.parsed
            .get_or_try_init(|| {
                debug!("parsing bundled fixture ({} bytes)", self.json.len());
                parse_stock_data(self.json)
            })
            .cloned()
    }

    fn describe(&self) -> String {
        "bundled fixture".to_string()
    }
}
