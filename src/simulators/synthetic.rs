// src/simulators/synthetic.rs

use super::chart_trait::ChartSynthesizer;
use crate::config::{
    ChartConfig, DOWN_DELTA_RANGE, HOUR_MS, RANDOM_SERIES_FLOOR, RANDOM_SERIES_START,
    STOCK_NOISE_FRACTION, UP_DELTA_RANGE, VOLATILE_DELTA_RANGE,
};
use crate::shared_types::Trend;
use crate::stocks::Stock;
use crate::types::ChartPoint;
use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Uniform};

// Sample `i` of `points`, the last one stamped exactly at `now_ms`.
fn timestamp_at(now_ms: i64, points: usize, i: usize, interval_ms: i64) -> i64 {
    now_ms - (points - 1 - i) as i64 * interval_ms
}

/// Random walk starting at 100 with one uniform step per point, floored at 1.
///
/// The first recorded value already includes a step. Not reproducible unless `rng` is seeded.
pub fn generate_random_chart_data<R: Rng + ?Sized>(
    points: usize,
    trend: Trend,
    now: DateTime<Utc>,
    rng: &mut R,
) -> Vec<ChartPoint> {
    let (low, high) = match trend {
        Trend::Up => UP_DELTA_RANGE,
        Trend::Down => DOWN_DELTA_RANGE,
        Trend::Volatile => VOLATILE_DELTA_RANGE,
    };
    let step = Uniform::new(low, high);
    let now_ms = now.timestamp_millis();

    let mut current = RANDOM_SERIES_START;
    (0..points)
        .map(|i| {
            current = (current + step.sample(rng)).max(RANDOM_SERIES_FLOOR);
            ChartPoint::new(timestamp_at(now_ms, points, i, HOUR_MS), current)
        })
        .collect()
}

/// Hourly series drifting linearly from the implied previous close to `stock.price`.
///
/// Every sample carries up to ±0.25% of price in noise, so the last point is
/// usually close to, but not exactly, the current price.
pub fn generate_stock_chart_data<R: Rng + ?Sized>(
    stock: &Stock,
    points: usize,
    now: DateTime<Utc>,
    rng: &mut R,
) -> Vec<ChartPoint> {
    let config = ChartConfig {
        points,
        interval_ms: HOUR_MS,
        noise_fraction: STOCK_NOISE_FRACTION,
    };
    generate_stock_chart_data_spaced(stock, &config, now, rng)
}

/// Same as [`generate_stock_chart_data`] with explicit spacing and noise.
pub fn generate_stock_chart_data_spaced<R: Rng + ?Sized>(
    stock: &Stock,
    config: &ChartConfig,
    now: DateTime<Utc>,
    rng: &mut R,
) -> Vec<ChartPoint> {
    let points = config.points;
    let interval_ms = config.interval_ms.max(1);
    let now_ms = now.timestamp_millis();
    let start_value = implied_start(stock.price, stock.daily_change);
    let amplitude = stock.price * config.noise_fraction;

    (0..points)
        .map(|i| {
            let progress = if points > 1 {
                i as f64 / (points - 1) as f64
            } else {
                1.0
            };
            let value = start_value + (stock.price - start_value) * progress;
            let noise = (rng.gen_range(0.0..1.0) - 0.5) * amplitude;
            ChartPoint::new(timestamp_at(now_ms, points, i, interval_ms), value + noise)
        })
        .collect()
}

// price / (1 + change%). A change of -100% or worse has no meaningful
// previous close, so the series stays flat at the current price.
fn implied_start(price: f64, daily_change: f64) -> f64 {
    let divisor = 1.0 + daily_change / 100.0;
    let start = price / divisor;
    if divisor <= 0.0 || !start.is_finite() {
        price
    } else {
        start
    }
}

/// Production chart source: an owned RNG, a series shape and an optional fixed clock.
pub struct SyntheticCharts<R: Rng> {
    rng: R,
    config: ChartConfig,
    anchor: Option<DateTime<Utc>>,
}

impl SyntheticCharts<StdRng> {
    /// Seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// Reproducible source for tests and benchmarks.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> SyntheticCharts<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            config: ChartConfig::default(),
            anchor: None,
        }
    }

    /// Pin "now" so timestamps are reproducible.
    pub fn with_anchor(mut self, anchor: DateTime<Utc>) -> Self {
        self.anchor = Some(anchor);
        self
    }

    fn now(&self) -> DateTime<Utc> {
        self.anchor.unwrap_or_else(Utc::now)
    }
}

impl<R: Rng> ChartSynthesizer for SyntheticCharts<R> {
    fn stock_series(&mut self, stock: &Stock) -> Vec<ChartPoint> {
        let now = self.now();
        generate_stock_chart_data_spaced(stock, &self.config, now, &mut self.rng)
    }

    fn stock_series_spaced(
        &mut self,
        stock: &Stock,
        points: usize,
        interval_ms: i64,
    ) -> Vec<ChartPoint> {
        let config = ChartConfig {
            points,
            interval_ms,
            ..self.config
        };
        let now = self.now();
        generate_stock_chart_data_spaced(stock, &config, now, &mut self.rng)
    }

    fn trend_series(&mut self, points: usize, trend: Trend) -> Vec<ChartPoint> {
        let now = self.now();
        generate_random_chart_data(points, trend, now, &mut self.rng)
    }
}
