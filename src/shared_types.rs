// src/shared_types.rs

use serde::{Deserialize, Serialize};

/// Qualitative bias applied to a random chart series.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    #[default]
    Volatile,
}

/// Sort key for the stock list.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortBy {
    Name,
    Price,
    #[default]
    DailyChange,
}

impl SortBy {
    pub const ALL: [SortBy; 3] = [SortBy::Name, SortBy::Price, SortBy::DailyChange];

    pub fn label(self) -> &'static str {
        match self {
            SortBy::Name => "name",
            SortBy::Price => "price",
            SortBy::DailyChange => "daily_change",
        }
    }
}

/// Time window selectable on the detail screen.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Default, Serialize, Deserialize)]
pub enum ChartPeriod {
    #[serde(rename = "1D")]
    OneDay,
    #[serde(rename = "1W")]
    OneWeek,
    #[default]
    #[serde(rename = "1M")]
    OneMonth,
    #[serde(rename = "3M")]
    ThreeMonths,
    #[serde(rename = "6M")]
    SixMonths,
    #[serde(rename = "1Y")]
    OneYear,
    #[serde(rename = "ALL")]
    All,
}

impl ChartPeriod {
    pub const ALL: [ChartPeriod; 7] = [
        ChartPeriod::OneDay,
        ChartPeriod::OneWeek,
        ChartPeriod::OneMonth,
        ChartPeriod::ThreeMonths,
        ChartPeriod::SixMonths,
        ChartPeriod::OneYear,
        ChartPeriod::All,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ChartPeriod::OneDay => "1D",
            ChartPeriod::OneWeek => "1W",
            ChartPeriod::OneMonth => "1M",
            ChartPeriod::ThreeMonths => "3M",
            ChartPeriod::SixMonths => "6M",
            ChartPeriod::OneYear => "1Y",
            ChartPeriod::All => "ALL",
        }
    }

    /// Length of the window in hours. `All` is treated as five years.
    pub fn span_hours(self) -> i64 {
        const DAY: i64 = 24;
        match self {
            ChartPeriod::OneDay => DAY,
            ChartPeriod::OneWeek => 7 * DAY,
            ChartPeriod::OneMonth => 30 * DAY,
            ChartPeriod::ThreeMonths => 90 * DAY,
            ChartPeriod::SixMonths => 182 * DAY,
            ChartPeriod::OneYear => 365 * DAY,
            ChartPeriod::All => 5 * 365 * DAY,
        }
    }
}
