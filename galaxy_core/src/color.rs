// galaxy_core/src/color.rs

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::GalaxyError;

/// An RGB color with `f32` components, nominally in [0, 1].
///
/// Components are taken straight from the hex bytes (`byte / 255`), with no
/// color-space conversion. Interpolation happens in that same space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb(pub Vector3<f32>);

impl Rgb {
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self(Vector3::new(r, g, b))
    }

    pub fn r(&self) -> f32 {
        self.0.x
    }

    pub fn g(&self) -> f32 {
        self.0.y
    }

    pub fn b(&self) -> f32 {
        self.0.z
    }

    pub fn to_array(&self) -> [f32; 3] {
        [self.0.x, self.0.y, self.0.z]
    }

    /// Parses `#rrggbb`, `rrggbb`, `#rgb` or `rgb`.
    pub fn from_hex(input: &str) -> Result<Self, GalaxyError> {
        let invalid = |reason| GalaxyError::InvalidColor {
            input: input.to_string(),
            reason,
        };

        let digits = input.trim().trim_start_matches('#');
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid("expected hexadecimal digits"));
        }

        let expanded: String = match digits.len() {
            6 => digits.to_string(),
            // Short form: each nibble is doubled, "f5a" -> "ff55aa".
            3 => digits.chars().flat_map(|c| [c, c]).collect(),
            _ => return Err(invalid("expected 3 or 6 hex digits")),
        };

        let value = u32::from_str_radix(&expanded, 16).map_err(|_| invalid("not a hex number"))?;
        let channel = |shift: u32| ((value >> shift) & 0xff) as f32 / 255.0;
        Ok(Self::new(channel(16), channel(8), channel(0)))
    }

    /// Formats as `#rrggbb`, rounding and clamping each channel to a byte.
    pub fn to_hex(&self) -> String {
        let byte = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!(
            "#{:02x}{:02x}{:02x}",
            byte(self.r()),
            byte(self.g()),
            byte(self.b())
        )
    }

    /// Linear interpolation towards `other`. `t` is not clamped, so values
    /// outside [0, 1] extrapolate past either endpoint.
    pub fn lerp(&self, other: &Rgb, t: f32) -> Rgb {
        Rgb(self.0 + (other.0 - self.0) * t)
    }
}

impl Default for Rgb {
    fn default() -> Self {
        Self::new(1.0, 1.0, 1.0)
    }
}

impl FromStr for Rgb {
    type Err = GalaxyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl TryFrom<String> for Rgb {
    type Error = GalaxyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value)
    }
}

impl From<Rgb> for String {
    fn from(color: Rgb) -> Self {
        color.to_hex()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const EPSILON: f32 = 1e-6;

    #[test]
    fn parses_long_and_short_hex() {
        let inside = Rgb::from_hex("#f0af55").unwrap();
        assert_abs_diff_eq!(inside.r(), 240.0 / 255.0, epsilon = EPSILON);
        assert_abs_diff_eq!(inside.g(), 175.0 / 255.0, epsilon = EPSILON);
        assert_abs_diff_eq!(inside.b(), 85.0 / 255.0, epsilon = EPSILON);

        let short = Rgb::from_hex("0af").unwrap();
        assert_eq!(short, Rgb::from_hex("#00aaff").unwrap());
    }

    #[test]
    fn rejects_malformed_hex() {
        assert!(Rgb::from_hex("#12345").is_err());
        assert!(Rgb::from_hex("#gg0000").is_err());
        assert!(Rgb::from_hex("").is_err());

        let Err(GalaxyError::InvalidColor { input, .. }) = Rgb::from_hex("#12345") else {
            panic!("expected an invalid color error");
        };
        assert_eq!(input, "#12345");
    }

    #[test]
    fn hex_formatting_survives_a_parse() {
        let color = Rgb::from_hex("#0245bb").unwrap();
        assert_eq!(color.to_hex(), "#0245bb");
        assert_eq!(color.to_string(), "#0245bb");
    }

    #[test]
    fn lerp_hits_endpoints_and_extrapolates() {
        let a = Rgb::new(0.2, 0.4, 0.6);
        let b = Rgb::new(0.6, 0.4, 0.2);

        assert_eq!(a.lerp(&b, 0.0), a);
        let end = a.lerp(&b, 1.0);
        assert_abs_diff_eq!(end.r(), b.r(), epsilon = EPSILON);
        assert_abs_diff_eq!(end.b(), b.b(), epsilon = EPSILON);

        let beyond = a.lerp(&b, 1.5);
        assert_abs_diff_eq!(beyond.r(), 0.8, epsilon = EPSILON);
        assert_abs_diff_eq!(beyond.b(), 0.0, epsilon = EPSILON);
    }

    #[test]
    fn deserializes_from_a_hex_string() {
        #[derive(Deserialize)]
        struct Wrapper {
            color: Rgb,
        }

        let parsed: Wrapper = toml::from_str(r##"color = "#ffffff""##).unwrap();
        assert_eq!(parsed.color, Rgb::new(1.0, 1.0, 1.0));

        let bad: Result<Wrapper, _> = toml::from_str(r#"color = "nope""#);
        assert!(bad.is_err());
    }
}
