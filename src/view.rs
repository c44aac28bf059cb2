// src/view.rs

use crate::shared_types::SortBy;
use crate::stocks::Stock;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Search box and sort selector state. Owned by the presentation layer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    pub filter_text: String,
    pub sort_by: SortBy,
}

impl ViewState {
    pub fn apply<'a>(&self, stocks: &'a [Stock]) -> Vec<&'a Stock> {
        derive_view(stocks, &self.filter_text, self.sort_by)
    }
}

/// Filters by case-insensitive substring on symbol or name, then sorts stably.
pub fn derive_view<'a>(stocks: &'a [Stock], filter_text: &str, sort_by: SortBy) -> Vec<&'a Stock> {
    let needle = filter_text.to_lowercase();
    let mut visible: Vec<&Stock> = stocks
        .iter()
        .filter(|stock| matches_filter(stock, &needle))
        .collect();

    match sort_by {
        SortBy::Name => visible.sort_by(|a, b| collate(&a.name, &b.name)),
        SortBy::Price => visible.sort_by(|a, b| descending(a.price, b.price)),
        SortBy::DailyChange => visible.sort_by(|a, b| descending(a.daily_change, b.daily_change)),
    }
    visible
}

// Numerically equal keys (including `-0.0` and `0.0`) keep their input order.
fn descending(a: f64, b: f64) -> Ordering {
    b.partial_cmp(&a).unwrap_or(Ordering::Equal)
}

// `needle` is already lowercased.
fn matches_filter(stock: &Stock, needle: &str) -> bool {
    needle.is_empty()
        || stock.symbol.to_lowercase().contains(needle)
        || stock.name.to_lowercase().contains(needle)
}

/// Dictionary order: case-insensitive first, lowercase before uppercase on ties.
///
/// Letters compare by code point after lowercasing, so accented names are not
/// folded onto their base letter: `"Émile"` sorts after `"Fox"`.
pub fn collate(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| b.cmp(a))
}
