// src/portfolio.rs

//! Turns a raw stock collection into display data: per-stock chart series and
//! the wallet totals shown in the header.

use crate::config::DEFAULT_CHART_POINTS;
use crate::shared_types::Trend;
use crate::simulators::ChartSynthesizer;
use crate::stocks::Stock;
use crate::types::WalletInfo;
use log::debug;

/// Copies the raw records and attaches a freshly synthesized series to each.
/// Any chart data already on the input is replaced.
pub fn attach_charts<C: ChartSynthesizer + ?Sized>(raw: &[Stock], charts: &mut C) -> Vec<Stock> {
    raw.iter()
        .map(|stock| {
            let chart_data = charts.stock_series(stock);
            Stock {
                chart_data,
                ..stock.clone()
            }
        })
        .collect()
}

/// Wallet totals over the whole collection. Stocks without a holding count as zero shares.
pub fn compute_wallet<C: ChartSynthesizer + ?Sized>(
    stocks: &[Stock],
    charts: &mut C,
) -> WalletInfo {
    let total_value: f64 = stocks.iter().map(Stock::position_value).sum();
    let daily_change_value: f64 = stocks.iter().map(Stock::position_change_value).sum();
    let daily_change_percentage = change_percentage(total_value, daily_change_value);

    let trend = if daily_change_value >= 0.0 {
        Trend::Up
    } else {
        Trend::Down
    };

    WalletInfo {
        total_value,
        daily_change_value,
        daily_change_percentage,
        chart_data: charts.trend_series(DEFAULT_CHART_POINTS, trend),
    }
}

/// `change / (total - change)` in percent, i.e. relative to yesterday's value.
///
/// An empty portfolio, or one whose previous value works out to exactly zero,
/// has no meaningful percentage and reports `0.0`.
pub fn change_percentage(total_value: f64, daily_change_value: f64) -> f64 {
    let previous_value = total_value - daily_change_value;
    if previous_value == 0.0 {
        debug!("wallet previous value is zero; reporting 0% change");
        return 0.0;
    }
    let percentage = daily_change_value / previous_value * 100.0;
    if percentage.is_finite() {
        percentage
    } else {
        debug!(
            "wallet change percentage is not finite (total {total_value}, change {daily_change_value}); reporting 0%"
        );
        0.0
    }
}

/// Everything the list screen derives from one raw snapshot.
#[derive(Debug, Clone, Default)]
pub struct Portfolio {
    pub stocks: Vec<Stock>,
    pub wallet: WalletInfo,
}

impl Portfolio {
    /// Chart attachment followed by wallet computation over the same collection.
    pub fn derive<C: ChartSynthesizer + ?Sized>(raw: &[Stock], charts: &mut C) -> Self {
        let stocks = attach_charts(raw, charts);
        let wallet = compute_wallet(&stocks, charts);
        Self { stocks, wallet }
    }
}
