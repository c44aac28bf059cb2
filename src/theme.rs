// src/theme.rs

//! Theme preference and colours.
//!
//! The preference is a single string under the `"theme"` key of a key/value
//! store. `ThemeSettings` is passed explicitly to whatever renders.

use crate::config::{DEFAULT_THEME, THEME_KEY};
use crate::error::StoreError;
use log::warn;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    #[default]
    Dark,
    System,
}

impl ThemeMode {
    pub const ALL: [ThemeMode; 3] = [ThemeMode::Light, ThemeMode::Dark, ThemeMode::System];

    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
            ThemeMode::System => "system",
        }
    }
}

impl FromStr for ThemeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            "system" => Ok(ThemeMode::System),
            other => Err(format!("unknown theme mode {other:?}")),
        }
    }
}

/// Colour scheme reported by the host platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorScheme {
    Light,
    Dark,
}

/// A string key/value capability. Writes are last-write-wins.
pub trait ThemeStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Process-local store, mostly for tests and embedders without a disk.
#[derive(Debug, Default)]
pub struct MemoryThemeStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryThemeStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ThemeStore for MemoryThemeStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.read().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.write().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// A flat JSON object on disk. A missing file reads as empty.
#[derive(Debug, Clone)]
pub struct JsonFileThemeStore {
    path: PathBuf,
}

impl JsonFileThemeStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>, StoreError> {
        match fs::read_to_string(&self.path) {
            Ok(text) => Ok(serde_json::from_str(&text)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }
}

impl ThemeStore for JsonFileThemeStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.read_all()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut entries = self.read_all()?;
        entries.insert(key.to_string(), value.to_string());
        fs::write(&self.path, serde_json::to_string_pretty(&entries)?)?;
        Ok(())
    }
}

/// The resolved theme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ThemeSettings {
    mode: ThemeMode,
}

impl ThemeSettings {
    pub fn new(mode: ThemeMode) -> Self {
        Self { mode }
    }

    /// Reads the saved preference. Absent or unreadable values fall back to dark.
    pub fn load<T: ThemeStore + ?Sized>(store: &T) -> Self {
        let saved = match store.get(THEME_KEY) {
            Ok(saved) => saved,
            Err(e) => {
                warn!("Could not read theme preference: {}", e);
                None
            }
        };
        let raw = saved.as_deref().unwrap_or(DEFAULT_THEME);
        let mode = raw.parse::<ThemeMode>().unwrap_or_else(|e| {
            warn!("Ignoring saved theme: {}", e);
            ThemeMode::default()
        });
        Self { mode }
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    /// Updates the in-memory mode first, then persists it.
    pub fn set_mode<T: ThemeStore + ?Sized>(
        &mut self,
        store: &T,
        mode: ThemeMode,
    ) -> Result<(), StoreError> {
        self.mode = mode;
        store.set(THEME_KEY, mode.as_str())
    }

    /// `System` follows the host; an unknown host scheme counts as light.
    pub fn is_dark(&self, system: Option<ColorScheme>) -> bool {
        match self.mode {
            ThemeMode::Dark => true,
            ThemeMode::Light => false,
            ThemeMode::System => system == Some(ColorScheme::Dark),
        }
    }

    pub fn palette(&self, system: Option<ColorScheme>) -> Palette {
        Palette::for_dark(self.is_dark(system))
    }
}

/// Screen colours as `#RRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: &'static str,
    pub card: &'static str,
    pub text: &'static str,
    pub text_secondary: &'static str,
    pub selected: &'static str,
    pub error: &'static str,
}

impl Palette {
    pub const DARK: Palette = Palette {
        background: "#000000",
        card: "#1C1C1E",
        text: "#FFFFFF",
        text_secondary: "#8E8E93",
        selected: "#333333",
        error: "#FF3B30",
    };

    pub const LIGHT: Palette = Palette {
        background: "#F2F2F7",
        card: "#FFFFFF",
        text: "#000000",
        text_secondary: "#666666",
        selected: "#F2F2F7",
        error: "#FF3B30",
    };

    pub fn for_dark(is_dark: bool) -> Self {
        if is_dark { Self::DARK } else { Self::LIGHT }
    }
}

/// Parses `#RRGGBB`.
pub fn hex_to_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(digits.get(i..i + 2)?, 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::process;

    #[test]
    fn absent_key_defaults_to_dark() {
        let store = MemoryThemeStore::new();
        let settings = ThemeSettings::load(&store);
        assert_eq!(settings.mode(), ThemeMode::Dark);
        assert!(settings.is_dark(Some(ColorScheme::Light)));
    }

    #[test]
    fn saved_mode_is_restored() {
        let store = MemoryThemeStore::new();
        let mut settings = ThemeSettings::load(&store);
        settings.set_mode(&store, ThemeMode::Light).unwrap();

        assert_eq!(store.get(THEME_KEY).unwrap().as_deref(), Some("light"));
        assert_eq!(ThemeSettings::load(&store).mode(), ThemeMode::Light);
    }

    #[test]
    fn unknown_saved_value_falls_back_to_dark() {
        let store = MemoryThemeStore::new();
        store.set(THEME_KEY, "sepia").unwrap();
        assert_eq!(ThemeSettings::load(&store).mode(), ThemeMode::Dark);
    }

    #[test]
    fn last_write_wins() {
        let store = MemoryThemeStore::new();
        let mut a = ThemeSettings::default();
        let mut b = ThemeSettings::default();
        a.set_mode(&store, ThemeMode::Light).unwrap();
        b.set_mode(&store, ThemeMode::System).unwrap();
        assert_eq!(ThemeSettings::load(&store).mode(), ThemeMode::System);
    }

    #[test]
    fn system_mode_follows_host() {
        let settings = ThemeSettings::new(ThemeMode::System);
        assert!(settings.is_dark(Some(ColorScheme::Dark)));
        assert!(!settings.is_dark(Some(ColorScheme::Light)));
        assert!(!settings.is_dark(None), "Unknown host scheme renders light.");
        assert_eq!(settings.palette(Some(ColorScheme::Dark)), Palette::DARK);
    }

    #[test]
    fn file_store_persists_between_instances() {
        let path = std::env::temp_dir().join(format!("stock_wallet_theme_{}.json", process::id()));
        let _ = fs::remove_file(&path);

        let first = JsonFileThemeStore::new(&path);
        assert_eq!(first.get(THEME_KEY).unwrap(), None, "Missing file reads as empty.");
        first.set(THEME_KEY, "system").unwrap();

        let second = JsonFileThemeStore::new(&path);
        let mode = ThemeSettings::load(&second).mode();
        fs::remove_file(&path).unwrap();

        assert_eq!(mode, ThemeMode::System);
    }

    #[test]
    fn corrupt_file_falls_back_to_dark() {
        let path =
            std::env::temp_dir().join(format!("stock_wallet_theme_bad_{}.json", process::id()));
        fs::write(&path, "not json").unwrap();

        let store = JsonFileThemeStore::new(&path);
        assert!(matches!(store.get(THEME_KEY), Err(StoreError::Json(_))));
        assert_eq!(ThemeSettings::load(&store).mode(), ThemeMode::Dark);
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn hex_parsing() {
        assert_eq!(hex_to_rgb("#1C1C1E"), Some((0x1C, 0x1C, 0x1E)));
        assert_eq!(hex_to_rgb("1C1C1E"), None);
        assert_eq!(hex_to_rgb("#12"), None);
        assert_eq!(hex_to_rgb("#GGGGGG"), None);
    }

    #[test]
    fn mode_strings_round_trip() {
        for mode in ThemeMode::ALL {
            assert_eq!(mode.as_str().parse::<ThemeMode>().unwrap(), mode);
        }
    }
}
