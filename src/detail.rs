// src/detail.rs

//! The per-stock detail screen.
//!
//! It receives the selected stock as an opaque JSON payload and derives its
//! own period-scoped chart; nothing is shared with the list screen.

use crate::config::{DEFAULT_CHART_POINTS, HOUR_MS};
use crate::display::{format_optional_price, format_volume};
use crate::error::ParseError;
use crate::shared_types::ChartPeriod;
use crate::simulators::ChartSynthesizer;
use crate::stocks::Stock;
use crate::types::ChartPoint;
use crate::types::chart::values;
use statrs::statistics::Statistics;

/// Serializes a stock, chart data included, as a navigation parameter.
pub fn to_payload(stock: &Stock) -> Result<String, ParseError> {
    Ok(serde_json::to_string(stock)?)
}

/// Range statistics of a chart series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartSummary {
    pub low: f64,
    pub high: f64,
    pub mean: f64,
    /// Sample standard deviation of the values.
    pub std_dev: f64,
}

impl ChartSummary {
    /// None for an empty series.
    pub fn of(points: &[ChartPoint]) -> Option<Self> {
        if points.is_empty() {
            return None;
        }
        let data = values(points);
        let std_dev = if data.len() > 1 {
            Statistics::std_dev(&data)
        } else {
            0.0
        };
        Some(Self {
            low: Statistics::min(&data),
            high: Statistics::max(&data),
            mean: Statistics::mean(&data),
            std_dev,
        })
    }
}

/// The user's position in the stock, shown on the "My assets" card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Holding {
    pub shares: f64,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StockDetail {
    stock: Stock,
    period: ChartPeriod,
}

impl StockDetail {
    pub fn new(stock: Stock) -> Self {
        Self {
            stock,
            period: ChartPeriod::default(),
        }
    }

    /// Parses a navigation payload. Malformed JSON or an invalid stock is a typed error
    /// the caller can turn into a fallback screen.
    pub fn from_payload(payload: &str) -> Result<Self, ParseError> {
        let stock: Stock = serde_json::from_str(payload)?;
        stock.validate().map_err(ParseError::Invalid)?;
        Ok(Self::new(stock))
    }

    pub fn stock(&self) -> &Stock {
        &self.stock
    }

    pub fn period(&self) -> ChartPeriod {
        self.period
    }

    pub fn select_period(&mut self, period: ChartPeriod) {
        self.period = period;
    }

    /// A fresh series covering the selected period, ending now.
    pub fn chart<C: ChartSynthesizer + ?Sized>(&self, charts: &mut C) -> Vec<ChartPoint> {
        let points = DEFAULT_CHART_POINTS;
        let span_ms = self.period.span_hours() * HOUR_MS;
        let interval_ms = span_ms / (points as i64 - 1);
        charts.stock_series_spaced(&self.stock, points, interval_ms)
    }

    /// Label/value rows for the key statistics card. Missing fields render as `-`.
    pub fn key_statistics(&self) -> Vec<(&'static str, String)> {
        let stock = &self.stock;
        vec![
            ("Open", format_optional_price(stock.open)),
            ("High", format_optional_price(stock.high)),
            ("Low", format_optional_price(stock.low)),
            ("Vol", stock.volume.map_or_else(dash, format_volume)),
            (
                "P/E",
                stock.pe_ratio.map_or_else(dash, |pe| format!("{pe:.2}")),
            ),
            ("Mkt Cap", stock.market_cap.clone().unwrap_or_else(dash)),
        ]
    }

    /// Only present when the user holds a positive number of shares.
    pub fn holding(&self) -> Option<Holding> {
        match self.stock.shares_owned {
            Some(shares) if shares > 0.0 => Some(Holding {
                shares,
                value: self.stock.position_value(),
            }),
            _ => None,
        }
    }
}

fn dash() -> String {
    "-".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulators::SyntheticCharts;
    use crate::types::chart::is_time_ordered;

    fn tesla() -> Stock {
        let mut stock = Stock::new("TSLA", "Tesla, Inc.", 175.34, -3.47).with_shares(5.0);
        stock.open = Some(181.2);
        stock.volume = Some(98_760_000.0);
        stock.pe_ratio = Some(44.7);
        stock.market_cap = Some("558.4B".to_string());
        stock.chart_data = vec![
            ChartPoint::new(0, 180.0),
            ChartPoint::new(1, 176.0),
            ChartPoint::new(2, 178.0),
        ];
        stock
    }

    #[test]
    fn payload_round_trip_keeps_chart_data() {
        let payload = to_payload(&tesla()).unwrap();
        let detail = StockDetail::from_payload(&payload).unwrap();

        assert_eq!(detail.stock(), &tesla());
        assert_eq!(detail.period(), ChartPeriod::OneMonth, "Detail opens on 1M.");
    }

    #[test]
    fn malformed_payload_is_a_typed_error() {
        assert!(matches!(
            StockDetail::from_payload("{\"symbol\": \"TSLA\""),
            Err(ParseError::Json(_))
        ));
        assert!(matches!(
            StockDetail::from_payload("[]"),
            Err(ParseError::Json(_))
        ));
        let negative = r#"{"symbol":"X","name":"X","price":-5,"daily_change":0}"#;
        assert!(matches!(
            StockDetail::from_payload(negative),
            Err(ParseError::Invalid(_))
        ));
    }

    #[test]
    fn period_chart_spans_the_selected_window() {
        let mut detail = StockDetail::new(tesla());
        let mut charts = SyntheticCharts::seeded(8);

        detail.select_period(ChartPeriod::OneWeek);
        let week = detail.chart(&mut charts);

        assert_eq!(week.len(), DEFAULT_CHART_POINTS);
        assert!(is_time_ordered(&week));
        let span = week.last().unwrap().timestamp - week[0].timestamp;
        let expected = ChartPeriod::OneWeek.span_hours() * HOUR_MS;
        assert!(
            (expected - span).abs() < HOUR_MS,
            "A week chart should cover about a week, covered {span} ms"
        );
    }

    #[test]
    fn key_statistics_fill_missing_fields_with_dash() {
        let stats = StockDetail::new(tesla()).key_statistics();
        let lookup = |label: &str| {
            stats
                .iter()
                .find(|(l, _)| *l == label)
                .map(|(_, v)| v.clone())
                .unwrap()
        };

        assert_eq!(lookup("Open"), "$181.20");
        assert_eq!(lookup("High"), "-");
        assert_eq!(lookup("Vol"), "98.76M");
        assert_eq!(lookup("P/E"), "44.70");
        assert_eq!(lookup("Mkt Cap"), "558.4B");
        assert_eq!(stats.len(), 6);
    }

    #[test]
    fn holding_requires_positive_shares() {
        let held = StockDetail::new(tesla()).holding().unwrap();
        assert_eq!(held.shares, 5.0);
        assert!((held.value - 876.7).abs() < 1e-9);

        let none = StockDetail::new(tesla().with_shares(0.0));
        assert!(none.holding().is_none());
    }

    #[test]
    fn chart_summary_reports_range() {
        let summary = ChartSummary::of(&tesla().chart_data).unwrap();
        assert_eq!(summary.low, 176.0);
        assert_eq!(summary.high, 180.0);
        assert!((summary.mean - 178.0).abs() < 1e-9);
        assert!((summary.std_dev - 2.0).abs() < 1e-9);

        assert!(ChartSummary::of(&[]).is_none());
    }

    #[test]
    fn period_chart_summary_brackets_every_point() {
        let mut charts = SyntheticCharts::seeded(11);
        let chart = StockDetail::new(tesla()).chart(&mut charts);
        let summary = ChartSummary::of(&chart).unwrap();

        assert!(chart.iter().all(|p| summary.low <= p.value && p.value <= summary.high));
        assert!(summary.low <= summary.mean && summary.mean <= summary.high);
        assert!(summary.std_dev >= 0.0);
    }
}
