// src/config.rs

//! A centralized place for the tuning knobs of chart synthesis and theming.

// --- Chart synthesis ---
pub const DEFAULT_CHART_POINTS: usize = 20;
pub const HOUR_MS: i64 = 3_600_000;
// Noise is (u - 0.5) * price * fraction, i.e. +/-0.25% of price.
pub const STOCK_NOISE_FRACTION: f64 = 0.005;

// --- Random (wallet) series ---
pub const RANDOM_SERIES_START: f64 = 100.0;
pub const RANDOM_SERIES_FLOOR: f64 = 1.0;
// Half-open delta ranges sampled per step.
pub const UP_DELTA_RANGE: (f64, f64) = (-1.0, 4.0);
pub const DOWN_DELTA_RANGE: (f64, f64) = (-4.0, 1.0);
pub const VOLATILE_DELTA_RANGE: (f64, f64) = (-3.0, 3.0);

// --- Theme ---
pub const THEME_KEY: &str = "theme";
pub const DEFAULT_THEME: &str = "dark";

// --- Binary environment ---
pub const DATA_PATH_ENV: &str = "STOCK_WALLET_DATA";
pub const SETTINGS_PATH_ENV: &str = "STOCK_WALLET_SETTINGS";
pub const DEFAULT_SETTINGS_PATH: &str = "stock_wallet_settings.json";

/// Shape of a synthesized stock series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartConfig {
    pub points: usize,
    pub interval_ms: i64,
    pub noise_fraction: f64,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            points: DEFAULT_CHART_POINTS,
            interval_ms: HOUR_MS,
            noise_fraction: STOCK_NOISE_FRACTION,
        }
    }
}
