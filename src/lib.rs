// src/lib.rs

// === 1. Declare all the top-level modules ===
pub mod config;
pub mod data_source;
pub mod detail;
pub mod display;
pub mod error;
pub mod portfolio;
pub mod screen;
pub mod shared_types;
pub mod simulators;
pub mod stocks;
pub mod theme;
pub mod types;
pub mod view;

// === 2. Re-export the public-facing components to create a clean API ===

// --- From `stocks` and `types` ---
pub use stocks::{Stock, Symbol};
pub use types::{ChartPoint, WalletInfo};

// --- From `display` ---
pub use display::{ChangeColor, format_percentage_change, format_price, get_change_color};

// --- From `simulators` ---
pub use simulators::{
    ChartSynthesizer, SyntheticCharts, generate_random_chart_data, generate_stock_chart_data,
};

// --- Derivation: aggregation and the list view-model ---
pub use portfolio::{Portfolio, attach_charts, compute_wallet};
pub use view::{ViewState, derive_view};

// --- Data sources ---
pub use data_source::{FixtureSource, JsonFileSource, StaticSource, StockSource};

// --- Screens ---
pub use detail::{StockDetail, to_payload};
pub use screen::{LoadState, LoadTicket, StockScreen};

// --- Theme ---
pub use theme::{ColorScheme, Palette, ThemeMode, ThemeSettings, ThemeStore};

// --- Errors and shared enums ---
pub use error::{LOAD_FAILURE_MESSAGE, LoadError, ParseError, StoreError};
pub use shared_types::{ChartPeriod, SortBy, Trend};
