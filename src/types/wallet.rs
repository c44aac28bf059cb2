// src/types/wallet.rs

use super::chart::ChartPoint;
use serde::{Deserialize, Serialize};

/// Aggregate valuation of the user's holdings. Derived, never persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WalletInfo {
    /// Sum of price * shares over all stocks.
    pub total_value: f64,
    /// Sum of price * daily_change/100 * shares over all stocks.
    pub daily_change_value: f64,
    /// Change relative to yesterday's value, in percent. Always finite.
    pub daily_change_percentage: f64,
    pub chart_data: Vec<ChartPoint>,
}
