//! Colors, parsed from the string forms figure code usually writes.

use serde::Deserialize;

use crate::plotting::element::escape_xml;

/// A paint color for lines, patches and text.
///
/// Strings convert through [`From<&str>`]: a number in `0..=1` is a gray
/// level, `#rrggbb`/`#rrggbbaa` is hex, a base or single-letter name maps to
/// its RGB value. Anything else passes through to SVG, escaped for use as an
/// attribute value.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "String")]
pub enum Color {
    Rgb(u8, u8, u8),
    /// Alpha in 0.0-1.0
    Rgba(u8, u8, u8, f64),
    /// A name SVG understands but this crate does not resolve, or "none"
    Named(String),
}

impl Color {
    pub const BLACK: Color = Color::Rgb(0, 0, 0);
    pub const WHITE: Color = Color::Rgb(255, 255, 255);
    pub const RED: Color = Color::Rgb(255, 0, 0);
    pub const BLUE: Color = Color::Rgb(0, 0, 255);
    pub const GRAY: Color = Color::Rgb(128, 128, 128);
    pub const LIGHT_GRAY: Color = Color::Rgb(211, 211, 211);

    /// Gray shade from 0.0 (black) to 1.0 (white).
    pub fn gray(level: f64) -> Self {
        let v = (level.clamp(0.0, 1.0) * 255.0).round() as u8;
        Color::Rgb(v, v, v)
    }

    fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#')?;
        if !hex.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
        match hex.len() {
            6 => Some(Color::Rgb(channel(0)?, channel(2)?, channel(4)?)),
            8 => Some(Color::Rgba(
                channel(0)?,
                channel(2)?,
                channel(4)?,
                f64::from(channel(6)?) / 255.0,
            )),
            _ => None,
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        let rgb = match name.to_ascii_lowercase().as_str() {
            "k" | "black" => (0, 0, 0),
            "w" | "white" => (255, 255, 255),
            "r" | "red" => (255, 0, 0),
            "g" | "green" => (0, 128, 0),
            "b" | "blue" => (0, 0, 255),
            "c" | "cyan" => (0, 191, 191),
            "m" | "magenta" => (191, 0, 191),
            "y" | "yellow" => (191, 191, 0),
            "gray" | "grey" => (128, 128, 128),
            "lightgray" | "lightgrey" => (211, 211, 211),
            _ => return None,
        };
        Some(Color::Rgb(rgb.0, rgb.1, rgb.2))
    }

    pub fn to_svg_string(&self) -> String {
        match self {
            Color::Rgb(r, g, b) => format!("rgb({},{},{})", r, g, b),
            Color::Rgba(r, g, b, a) => format!("rgba({},{},{},{})", r, g, b, a),
            Color::Named(name) => escape_xml(name),
        }
    }

    /// Whether this color paints nothing.
    pub fn is_none(&self) -> bool {
        match self {
            Color::Rgba(_, _, _, a) => *a == 0.0,
            Color::Named(name) => name.eq_ignore_ascii_case("none"),
            Color::Rgb(..) => false,
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::BLACK
    }
}

impl From<&str> for Color {
    fn from(s: &str) -> Self {
        let s = s.trim();
        if let Ok(level) = s.parse::<f64>() {
            if (0.0..=1.0).contains(&level) {
                return Color::gray(level);
            }
        }
        Color::from_hex(s)
            .or_else(|| Color::from_name(s))
            .unwrap_or_else(|| Color::Named(s.to_string()))
    }
}

impl From<String> for Color {
    fn from(s: String) -> Self {
        Color::from(s.as_str())
    }
}
