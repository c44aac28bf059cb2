// src/display/mod.rs

pub mod color;
pub mod format;

pub use color::{ChangeColor, get_change_color};
pub use format::{
    PLACEHOLDER, format_optional_price, format_percentage_change, format_price, format_shares,
    format_volume,
};
