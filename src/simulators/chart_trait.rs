// src/simulators/chart_trait.rs

use crate::shared_types::Trend;
use crate::stocks::Stock;
use crate::types::ChartPoint;

/// Anything that can synthesize chart series.
/// Aggregation and the detail screen only see this trait, so tests can plug in a seeded source.
pub trait ChartSynthesizer {
    /// The default stock series: configured length and spacing, ending now.
    fn stock_series(&mut self, stock: &Stock) -> Vec<ChartPoint>;

    /// A stock series with explicit length and spacing.
    fn stock_series_spaced(
        &mut self,
        stock: &Stock,
        points: usize,
        interval_ms: i64,
    ) -> Vec<ChartPoint>;

    /// A random walk from 100 biased by `trend`.
    fn trend_series(&mut self, points: usize, trend: Trend) -> Vec<ChartPoint>;
}
