// src/display/color.rs

use std::fmt;

/// Semantic colour of a change value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeColor {
    Positive,
    Negative,
    Neutral,
}

impl ChangeColor {
    pub fn hex(self) -> &'static str {
        match self {
            ChangeColor::Positive => "#4CAF50",
            ChangeColor::Negative => "#F44336",
            ChangeColor::Neutral => "#9E9E9E",
        }
    }

    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            ChangeColor::Positive => (0x4C, 0xAF, 0x50),
            ChangeColor::Negative => (0xF4, 0x43, 0x36),
            ChangeColor::Neutral => (0x9E, 0x9E, 0x9E),
        }
    }
}

impl fmt::Display for ChangeColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.hex())
    }
}

/// Green above zero, red below, grey at exactly zero.
/// NaN compares false both ways and lands on grey.
pub fn get_change_color(change: f64) -> ChangeColor {
    if change > 0.0 {
        ChangeColor::Positive
    } else if change < 0.0 {
        ChangeColor::Negative
    } else {
        ChangeColor::Neutral
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn returns_green_for_positive_changes() {
        assert_eq!(get_change_color(0.01).hex(), "#4CAF50");
        assert_eq!(get_change_color(5.5).hex(), "#4CAF50");
        assert_eq!(get_change_color(f64::MIN_POSITIVE), ChangeColor::Positive);
    }

    #[test]
    fn returns_red_for_negative_changes() {
        assert_eq!(get_change_color(-0.01).hex(), "#F44336");
        assert_eq!(get_change_color(-5.5).hex(), "#F44336");
        assert_eq!(get_change_color(f64::NEG_INFINITY), ChangeColor::Negative);
    }

    #[test]
    fn returns_grey_for_zero_and_nan() {
        assert_eq!(get_change_color(0.0).hex(), "#9E9E9E");
        assert_eq!(get_change_color(-0.0), ChangeColor::Neutral);
        assert_eq!(get_change_color(f64::NAN), ChangeColor::Neutral);
    }

    #[test]
    fn rgb_matches_hex() {
        for color in [ChangeColor::Positive, ChangeColor::Negative, ChangeColor::Neutral] {
            let (r, g, b) = color.rgb();
            assert_eq!(format!("#{r:02X}{g:02X}{b:02X}"), color.to_string());
        }
    }
}
