// src/types/mod.rs

pub mod chart;
pub mod wallet;

pub use chart::ChartPoint;
pub use wallet::WalletInfo;
