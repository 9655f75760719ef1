//! Shared types and fixed tables used across FAVGEN.
//! Includes the `Background` fill specification and the constant
//! filename/size tables that define the output set.
use image::Rgba;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Application name written into `site.webmanifest`.
pub const APP_NAME: &str = "Gaurav Vijay Jadhav";
/// Short application name written into `site.webmanifest`.
pub const APP_SHORT_NAME: &str = "GVJ";

/// Fixed output filename -> pixel size mapping for the PNG set.
pub const PNG_SIZES: [(&str, u32); 6] = [
    ("favicon-16x16.png", 16),
    ("favicon-32x32.png", 32),
    ("apple-touch-icon.png", 180),
    ("android-chrome-192x192.png", 192),
    ("android-chrome-512x512.png", 512),
    ("mstile-150x150.png", 150),
];

/// Resolutions embedded in `favicon.ico`, ascending, smallest first.
pub const ICO_SIZES: [u32; 3] = [16, 32, 48];

/// Canvas padding fill: fully transparent, or a solid opaque color.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Background {
    Transparent,
    Solid(Rgba<u8>),
}

impl Background {
    /// Parse a user-supplied fill: `transparent` (case insensitive),
    /// `#RGB`, or `#RRGGBB`.
    pub fn parse(value: &str) -> Result<Self> {
        if value.eq_ignore_ascii_case("transparent") {
            Ok(Background::Transparent)
        } else {
            parse_hex_color(value).map(Background::Solid)
        }
    }

    /// The RGBA fill pixel for a fresh canvas.
    pub fn fill(&self) -> Rgba<u8> {
        match self {
            Background::Transparent => Rgba([0, 0, 0, 0]),
            Background::Solid(color) => *color,
        }
    }
}

impl std::fmt::Display for Background {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Background::Transparent => write!(f, "transparent"),
            Background::Solid(Rgba([r, g, b, _])) => write!(f, "#{r:02x}{g:02x}{b:02x}"),
        }
    }
}

impl From<Background> for String {
    fn from(bg: Background) -> String {
        bg.to_string()
    }
}

impl TryFrom<String> for Background {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Background::parse(&value)
    }
}

/// Parse `#RGB` or `#RRGGBB` into an opaque RGBA pixel.
fn parse_hex_color(value: &str) -> Result<Rgba<u8>> {
    let invalid = || Error::InvalidColor {
        value: value.to_string(),
    };

    let hex = value.strip_prefix('#').ok_or_else(invalid)?;
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    let (r, g, b) = match hex.len() {
        3 => {
            // Single-digit channels expand by repetition: #f80 -> #ff8800
            let channel =
                |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).map(|v| v * 0x11);
            (
                channel(0).map_err(|_| invalid())?,
                channel(1).map_err(|_| invalid())?,
                channel(2).map_err(|_| invalid())?,
            )
        }
        6 => {
            let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16);
            (
                channel(0).map_err(|_| invalid())?,
                channel(2).map_err(|_| invalid())?,
                channel(4).map_err(|_| invalid())?,
            )
        }
        _ => return Err(invalid()),
    };

    Ok(Rgba([r, g, b, 255]))
}
