//! Linear color scales for the choropleth fill.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("unsupported color `{0}` (expected #rgb, #rrggbb, #rrggbbaa, white or black)")]
    Unsupported(String),
}

/// An sRGB color with alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::opaque(255, 255, 255);
    pub const BLACK: Rgba = Rgba::opaque(0, 0, 0);

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    fn lerp(self, other: Rgba, t: f64) -> Rgba {
        let mix = |from: u8, to: u8| -> u8 {
            let value = from as f64 + (to as f64 - from as f64) * t;
            value.round().clamp(0.0, 255.0) as u8
        };
        Rgba {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
            a: mix(self.a, other.a),
        }
    }
}

impl FromStr for Rgba {
    type Err = ColorError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let trimmed = raw.trim();
        let unsupported = || ColorError::Unsupported(raw.to_string());

        match trimmed.to_ascii_lowercase().as_str() {
            "white" => return Ok(Rgba::WHITE),
            "black" => return Ok(Rgba::BLACK),
            _ => {}
        }

        let hex = trimmed.strip_prefix('#').ok_or_else(unsupported)?;
        if !hex.is_ascii() {
            return Err(unsupported());
        }
        let byte = |s: &str| u8::from_str_radix(s, 16).map_err(|_| unsupported());
        let nibble = |s: &str| byte(s).map(|v| v * 17);

        match hex.len() {
            3 => Ok(Rgba::opaque(
                nibble(&hex[0..1])?,
                nibble(&hex[1..2])?,
                nibble(&hex[2..3])?,
            )),
            6 | 8 => Ok(Rgba {
                r: byte(&hex[0..2])?,
                g: byte(&hex[2..4])?,
                b: byte(&hex[4..6])?,
                a: if hex.len() == 8 { byte(&hex[6..8])? } else { 255 },
            }),
            _ => Err(unsupported()),
        }
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            let alpha = self.a as f64 / 255.0;
            write!(f, "rgba({}, {}, {}, {alpha:.3})", self.r, self.g, self.b)
        }
    }
}

/// Maps `[0, domain_max]` linearly onto `[low, high]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorScale {
    domain_max: f64,
    low: Rgba,
    high: Rgba,
}

impl ColorScale {
    pub fn new(domain_max: f64, low: Rgba, high: Rgba) -> Self {
        Self {
            domain_max,
            low,
            high,
        }
    }

    pub fn parse(domain_max: f64, low: &str, high: &str) -> Result<Self, ColorError> {
        Ok(Self::new(domain_max, low.parse()?, high.parse()?))
    }

    /// Inputs outside the domain are clamped. An empty domain always yields `low`.
    pub fn color_at(&self, value: f64) -> Rgba {
        if !(self.domain_max > 0.0 && self.domain_max.is_finite()) || !value.is_finite() {
            return self.low;
        }
        let t = (value / self.domain_max).clamp(0.0, 1.0);
        self.low.lerp(self.high, t)
    }

    pub fn css_at(&self, value: f64) -> String {
        self.color_at(value).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_supported_notations() {
        assert_eq!("#fff".parse::<Rgba>().unwrap(), Rgba::WHITE);
        assert_eq!("#034a21".parse::<Rgba>().unwrap(), Rgba::opaque(3, 74, 33));
        assert_eq!(
            "#d0f1c9ff".parse::<Rgba>().unwrap(),
            Rgba::opaque(208, 241, 201)
        );
        assert_eq!(" Black ".parse::<Rgba>().unwrap(), Rgba::BLACK);
    }

    #[test]
    fn rejects_garbage() {
        for raw in ["", "#12", "red", "#gggggg", "034a21"] {
            assert!(raw.parse::<Rgba>().is_err(), "{raw} should not parse");
        }
    }

    #[test]
    fn white_to_black_endpoints_and_midpoint() {
        let scale = ColorScale::parse(100.0, "white", "black").unwrap();
        assert_eq!(scale.color_at(0.0), Rgba::WHITE);
        assert_eq!(scale.color_at(100.0), Rgba::BLACK);
        assert_eq!(scale.css_at(50.0), "#808080");
    }

    #[test]
    fn empty_domain_returns_low_color() {
        let scale = ColorScale::parse(0.0, "white", "black").unwrap();
        for value in [0.0, 1.0, -5.0, 1e9] {
            assert_eq!(scale.color_at(value), Rgba::WHITE);
        }
    }

    #[test]
    fn out_of_domain_values_clamp() {
        let scale = ColorScale::parse(10.0, "#000000", "#ffffff").unwrap();
        assert_eq!(scale.color_at(-1.0), Rgba::BLACK);
        assert_eq!(scale.color_at(25.0), Rgba::WHITE);
    }

    #[test]
    fn translucent_colors_render_as_rgba() {
        let color = Rgba {
            r: 1,
            g: 2,
            b: 3,
            a: 0,
        };
        assert_eq!(color.to_string(), "rgba(1, 2, 3, 0.000)");
    }
}
