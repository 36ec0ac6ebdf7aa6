//! RGBA color representation and the color vocabularies of the file format.
//!
//! Stroke and background colors are written as `#RRGGBB` / `#RRGGBBAA` hex
//! codes or as one of a small set of predefined names. Backgrounds
//! additionally accept a handful of "translated" names that map to pastel
//! variants rather than the stroke palette.

use phf::{Map, phf_map};
use std::fmt;

/// RGBA color.
///
/// # Examples
///
/// ```rust
/// use xopp_stream::Color;
///
/// let black = Color::from_hex("#000000ff").unwrap();
/// assert_eq!(black, Color::BLACK);
///
/// let translucent = Color::from_hex("#ff000080").unwrap();
/// assert_eq!(translucent.a, 0x80);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red component (0-255)
    pub r: u8,
    /// Green component (0-255)
    pub g: u8,
    /// Blue component (0-255)
    pub b: u8,
    /// Alpha component (0-255, 255 = opaque)
    pub a: u8,
}

/// Predefined stroke color names.
static PREDEFINED_COLORS: Map<&'static str, Color> = phf_map! {
    "black" => Color::rgb(0x00, 0x00, 0x00),
    "blue" => Color::rgb(0x33, 0x33, 0xcc),
    "red" => Color::rgb(0xff, 0x00, 0x00),
    "green" => Color::rgb(0x00, 0x80, 0x00),
    "gray" => Color::rgb(0x80, 0x80, 0x80),
    "lightblue" => Color::rgb(0x00, 0xc0, 0xff),
    "lightgreen" => Color::rgb(0x00, 0xff, 0x00),
    "magenta" => Color::rgb(0xff, 0x00, 0xff),
    "orange" => Color::rgb(0xff, 0x80, 0x00),
    "yellow" => Color::rgb(0xff, 0xff, 0x00),
    "white" => Color::rgb(0xff, 0xff, 0xff),
};

/// Background-specific color translations, consulted for background
/// colors after the hex form and the predefined names.
static BACKGROUND_COLORS: Map<&'static str, Color> = phf_map! {
    "blue" => Color::rgb(0xa0, 0xe8, 0xff),
    "pink" => Color::rgb(0xfa, 0xbe, 0xbe),
    "green" => Color::rgb(0x80, 0xff, 0xc0),
    "orange" => Color::rgb(0xff, 0xc0, 0x80),
    "yellow" => Color::rgb(0xff, 0xff, 0x80),
    "white" => Color::rgb(0xff, 0xff, 0xff),
};

impl Color {
    /// Opaque black.
    pub const BLACK: Color = Color::rgb(0x00, 0x00, 0x00);
    /// Opaque white.
    pub const WHITE: Color = Color::rgb(0xff, 0xff, 0xff);

    /// Create a new RGBA color.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque RGB color.
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xff }
    }

    /// Parse a `#RRGGBB` or `#RRGGBBAA` hex color code.
    ///
    /// Returns `None` unless the string starts with `#` and carries exactly
    /// six or eight hex digits. Six-digit codes are opaque.
    pub fn from_hex(code: &str) -> Option<Self> {
        let hex = code.strip_prefix('#')?;
        match hex.len() {
            6 => {
                let value = u32::from_str_radix(hex, 16).ok()?;
                Some(Self::rgb(
                    (value >> 16) as u8,
                    (value >> 8) as u8,
                    value as u8,
                ))
            }
            8 => {
                let value = u32::from_str_radix(hex, 16).ok()?;
                Some(Self::new(
                    (value >> 24) as u8,
                    (value >> 16) as u8,
                    (value >> 8) as u8,
                    value as u8,
                ))
            }
            _ => None,
        }
    }

    /// Look up a predefined stroke color name.
    pub fn from_name(name: &str) -> Option<Self> {
        PREDEFINED_COLORS.get(name).copied()
    }

    /// Look up a background color translation.
    pub fn from_background_name(name: &str) -> Option<Self> {
        BACKGROUND_COLORS.get(name).copied()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_codes() {
        assert_eq!(Color::from_hex("#ffffffff"), Some(Color::WHITE));
        assert_eq!(Color::from_hex("#000000ff"), Some(Color::BLACK));
        assert_eq!(
            Color::from_hex("#ff800040"),
            Some(Color::new(0xff, 0x80, 0x00, 0x40))
        );
        // Six digits means opaque
        assert_eq!(Color::from_hex("#3333cc"), Some(Color::rgb(0x33, 0x33, 0xcc)));
    }

    #[test]
    fn rejects_malformed_hex() {
        assert_eq!(Color::from_hex("ffffffff"), None);
        assert_eq!(Color::from_hex("#fff"), None);
        assert_eq!(Color::from_hex("#zzzzzz"), None);
        assert_eq!(Color::from_hex("#0000000"), None);
    }

    #[test]
    fn predefined_names() {
        assert_eq!(Color::from_name("black"), Some(Color::BLACK));
        assert_eq!(Color::from_name("lightblue"), Some(Color::rgb(0x00, 0xc0, 0xff)));
        assert_eq!(Color::from_name("chartreuse"), None);
    }

    #[test]
    fn background_translations_differ_from_stroke_palette() {
        let stroke_blue = Color::from_name("blue").unwrap();
        let bg_blue = Color::from_background_name("blue").unwrap();
        assert_ne!(stroke_blue, bg_blue);
        assert_eq!(bg_blue, Color::rgb(0xa0, 0xe8, 0xff));
    }

    #[test]
    fn display_round_trip() {
        let c = Color::new(0x12, 0x34, 0x56, 0x78);
        assert_eq!(Color::from_hex(&c.to_string()), Some(c));
    }
}
