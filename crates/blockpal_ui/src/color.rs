//! Colour conversion utilities shared by categories and marker glyphs.
//!
//! Category colours arrive either as strict `#rrggbb` strings or as a hue on
//! the colour wheel; both resolve to a concrete [`Color`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Saturation applied when mapping a bare hue to a colour.
pub const HSV_SATURATION: f32 = 0.45;

/// Value (brightness) applied when mapping a bare hue to a colour.
pub const HSV_VALUE: f32 = 0.65;

/// An opaque 8-bit RGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color { r: 0, g: 0, b: 0 };
    pub const WHITE: Color = Color {
        r: 0xff,
        g: 0xff,
        b: 0xff,
    };
    pub const RED: Color = Color { r: 0xff, g: 0, b: 0 };

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a strict `#rrggbb` string. Shorthand and named colours are rejected.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#')?;
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
        Some(Self::rgb(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Format as lowercase `#rrggbb`.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Error returned when a string is not a `#rrggbb` colour.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid colour '{0}': expected #rrggbb")]
pub struct ColorError(pub String);

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::from_hex(s).ok_or_else(|| ColorError(s.to_string()))
    }
}

/// Convert HSV to RGB.
///
/// # Arguments
/// * `h` - Hue in degrees (0-360)
/// * `s` - Saturation (0.0-1.0)
/// * `v` - Value/brightness (0.0-1.0)
///
/// # Returns
/// RGB tuple with values in range 0.0-1.0
pub fn hsv_to_rgb(h: f32, s: f32, v: f32) -> (f32, f32, f32) {
    let c = v * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = v - c;

    let (r, g, b) = if h < 60.0 {
        (c, x, 0.0)
    } else if h < 120.0 {
        (x, c, 0.0)
    } else if h < 180.0 {
        (0.0, c, x)
    } else if h < 240.0 {
        (0.0, x, c)
    } else if h < 300.0 {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };

    (r + m, g + m, b + m)
}

/// Map a hue on the colour wheel to a palette colour.
///
/// Hues outside `[0, 360)` wrap around; non-finite hues map as hue 0.
pub fn hue_to_rgb(hue: f32) -> Color {
    let hue = if hue.is_finite() {
        hue.rem_euclid(360.0)
    } else {
        0.0
    };
    let (r, g, b) = hsv_to_rgb(hue, HSV_SATURATION, HSV_VALUE);
    let channel = |c: f32| (c * 255.0).floor().clamp(0.0, 255.0) as u8;
    Color::rgb(channel(r), channel(g), channel(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hsv_to_rgb_red() {
        let (r, g, b) = hsv_to_rgb(0.0, 1.0, 1.0);
        assert!((r - 1.0).abs() < 0.01);
        assert!(g.abs() < 0.01);
        assert!(b.abs() < 0.01);
    }

    #[test]
    fn test_hsv_to_rgb_blue() {
        let (r, g, b) = hsv_to_rgb(240.0, 1.0, 1.0);
        assert!(r.abs() < 0.01);
        assert!(g.abs() < 0.01);
        assert!((b - 1.0).abs() < 0.01);
    }

    #[test]
    fn test_hue_to_rgb_palette() {
        assert_eq!(hue_to_rgb(0.0).to_hex(), "#a55b5b");
        assert_eq!(hue_to_rgb(120.0).to_hex(), "#5ba55b");
        assert_eq!(hue_to_rgb(240.0).to_hex(), "#5b5ba5");
    }

    #[test]
    fn test_hue_to_rgb_wraps_out_of_range() {
        assert_eq!(hue_to_rgb(480.0), hue_to_rgb(120.0));
        assert_eq!(hue_to_rgb(-240.0), hue_to_rgb(120.0));
        assert_eq!(hue_to_rgb(f32::NAN), hue_to_rgb(0.0));
    }

    #[test]
    fn test_color_from_hex() {
        assert_eq!(Color::from_hex("#4C97FF"), Some(Color::rgb(0x4c, 0x97, 0xff)));
        assert_eq!(Color::from_hex("#000000"), Some(Color::BLACK));
        assert_eq!(Color::from_hex("4c97ff"), None);
        assert_eq!(Color::from_hex("#4c97f"), None);
        assert_eq!(Color::from_hex("#4c97fg"), None);
        assert_eq!(Color::from_hex("#4c97ff00"), None);
    }

    #[test]
    fn test_color_from_str_error() {
        let err = "teal".parse::<Color>().unwrap_err();
        assert_eq!(err, ColorError("teal".to_string()));
        assert_eq!("#ffffff".parse::<Color>(), Ok(Color::WHITE));
        assert_eq!(Color::RED.to_string(), "#ff0000");
    }
}
