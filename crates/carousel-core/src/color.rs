//! RGBA colors for the page control, with interpolation and lookup

use serde::{Deserialize, Serialize};

use crate::scroll::timing::lerp;

/// An 8-bit RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Fallback for the active dot
    pub const DEFAULT_ACTIVE: Color = Color::rgb(0x8e, 0x8e, 0x93);
    /// Fallback for inactive dots
    pub const DEFAULT_INACTIVE: Color = Color::rgb(0x58, 0x56, 0xd6);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xff }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Linear interpolation per channel, `t` clamped to [0, 1]
    pub fn interpolate(from: Color, to: Color, t: f64) -> Color {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let channel = |a: u8, b: u8| lerp(a as f64, b as f64, t).round() as u8;
        Color {
            r: channel(from.r, to.r),
            g: channel(from.g, to.g),
            b: channel(from.b, to.b),
            a: channel(from.a, to.a),
        }
    }

    /// Parse a hex color string
    /// Accepts formats: "#RRGGBB", "RRGGBB", "#RGB", "RGB", "#RRGGBBAA"
    pub fn parse_hex(hex: &str) -> Option<Color> {
        let hex = hex.trim().trim_start_matches('#');
        if !hex.is_ascii() {
            return None;
        }

        match hex.len() {
            // Short form: RGB -> RRGGBB
            3 => {
                let r = u8::from_str_radix(&hex[0..1], 16).ok()? * 17;
                let g = u8::from_str_radix(&hex[1..2], 16).ok()? * 17;
                let b = u8::from_str_radix(&hex[2..3], 16).ok()? * 17;
                Some(Color::rgb(r, g, b))
            }
            6 | 8 => {
                let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
                let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
                let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
                let a = if hex.len() == 8 {
                    u8::from_str_radix(&hex[6..8], 16).ok()?
                } else {
                    0xff
                };
                Some(Color::rgba(r, g, b, a))
            }
            _ => None,
        }
    }

    /// Look up a named palette color
    pub fn named(name: &str) -> Option<Color> {
        let color = match name.trim().to_lowercase().as_str() {
            "gray" | "grey" => Color::rgb(0x8e, 0x8e, 0x93),
            "indigo" => Color::rgb(0x58, 0x56, 0xd6),
            "blue" => Color::rgb(0x00, 0x7a, 0xff),
            "green" => Color::rgb(0x34, 0xc7, 0x59),
            "orange" => Color::rgb(0xff, 0x95, 0x00),
            "pink" => Color::rgb(0xff, 0x2d, 0x55),
            "purple" => Color::rgb(0xaf, 0x52, 0xde),
            "red" => Color::rgb(0xff, 0x3b, 0x30),
            "teal" => Color::rgb(0x5a, 0xc8, 0xfa),
            "yellow" => Color::rgb(0xff, 0xcc, 0x00),
            "white" => Color::rgb(0xff, 0xff, 0xff),
            "black" => Color::rgb(0x00, 0x00, 0x00),
            _ => return None,
        };
        Some(color)
    }

    /// Resolve a configured color, falling back when it cannot be resolved
    pub fn resolve(value: &str, fallback: Color) -> Color {
        match Self::named(value).or_else(|| Self::parse_hex(value)) {
            Some(color) => color,
            None => {
                tracing::warn!(color = value, "Unknown color, using fallback");
                fallback
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_forms() {
        assert_eq!(Color::parse_hex("#ff0000"), Some(Color::rgb(255, 0, 0)));
        assert_eq!(Color::parse_hex("0f0"), Some(Color::rgb(0, 255, 0)));
        assert_eq!(
            Color::parse_hex("#00000080"),
            Some(Color::rgba(0, 0, 0, 0x80))
        );
        assert_eq!(Color::parse_hex("#12345"), None);
        assert_eq!(Color::parse_hex("zzzzzz"), None);
    }

    #[test]
    fn test_resolve_falls_back() {
        assert_eq!(
            Color::resolve("no-such-color", Color::DEFAULT_INACTIVE),
            Color::DEFAULT_INACTIVE
        );
        assert_eq!(
            Color::resolve("Indigo", Color::DEFAULT_ACTIVE),
            Color::rgb(0x58, 0x56, 0xd6)
        );
        assert_eq!(
            Color::resolve("#102030", Color::DEFAULT_ACTIVE),
            Color::rgb(0x10, 0x20, 0x30)
        );
    }

    #[test]
    fn test_interpolate_endpoints_and_midpoint() {
        let black = Color::rgb(0, 0, 0);
        let white = Color::rgb(255, 255, 255);
        assert_eq!(Color::interpolate(black, white, 0.0), black);
        assert_eq!(Color::interpolate(black, white, 1.0), white);
        assert_eq!(Color::interpolate(black, white, 0.5), Color::rgb(128, 128, 128));
        assert_eq!(Color::interpolate(black, white, 7.0), white);
    }
}
