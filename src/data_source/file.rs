// src/data_source/file.rs

use super::{StockSource, parse_stock_data};
use crate::error::LoadError;
use crate::stocks::Stock;
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

/// Stock data cached on disk in the fixture format. Read fresh on every load.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StockSource for JsonFileSource {
    fn load_stocks(&self) -> Result<Vec<Stock>, LoadError> {
        let text = fs::read_to_string(&self.path)?;
        let stocks = parse_stock_data(&text)?;
        info!("Read {} stocks from {}", stocks.len(), self.path.display());
        Ok(stocks)
    }

    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }
}
