// src/simulators/mod.rs

pub mod chart_trait;
pub mod synthetic;

pub use chart_trait::ChartSynthesizer;
pub use synthetic::{
    SyntheticCharts, generate_random_chart_data, generate_stock_chart_data,
    generate_stock_chart_data_spaced,
};
