//! Compact color encoding and interpolation.

use ratatui::style::Color;

/// An 8-bit RGB color. The compact encoding is the `#RRGGBB` hex string
/// used by the configuration file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    /// Create a color from raw channel values.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#RRGGBB` hex string.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#')?;
        if digits.len() != 6 {
            return None;
        }
        let packed = u32::from_str_radix(digits, 16).ok()?;
        Some(Self {
            r: ((packed >> 16) & 0xFF) as u8,
            g: ((packed >> 8) & 0xFF) as u8,
            b: (packed & 0xFF) as u8,
        })
    }

    /// Format as a `#RRGGBB` hex string.
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Linearly blend two colors. Exact at factor 0; at factor 1 the
    /// result equals `b` up to channel rounding.
    pub fn lerp(a: Rgb, b: Rgb, factor: f32) -> Rgb {
        let channel = |from: u8, to: u8| -> u8 {
            let v = from as f32 + factor * (to as f32 - from as f32);
            v.round().clamp(0.0, 255.0) as u8
        };
        Rgb {
            r: channel(a.r, b.r),
            g: channel(a.g, b.g),
            b: channel(a.b, b.b),
        }
    }

    /// Scale all channels toward black by `factor` in [0, 1].
    pub fn dim(self, factor: f32) -> Rgb {
        let factor = factor.clamp(0.0, 1.0);
        Rgb {
            r: (self.r as f32 * factor) as u8,
            g: (self.g as f32 * factor) as u8,
            b: (self.b as f32 * factor) as u8,
        }
    }

    /// Composite this color over a background with the given alpha.
    pub fn over(self, bg: Rgb, alpha: f32) -> Rgb {
        Rgb::lerp(bg, self, alpha.clamp(0.0, 1.0))
    }
}

impl From<Rgb> for Color {
    fn from(c: Rgb) -> Self {
        Color::Rgb(c.r, c.g, c.b)
    }
}
