//! Configuration enum types.

use crate::draw::{Color, RED, color};
use log::warn;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Status bar position on screen.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum StatusPosition {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

/// Color specification - either a named color or RGB values.
///
/// # Examples
/// ```toml
/// # Named color
/// stroke_color = "red"
///
/// # Custom RGB color (0-255 per component)
/// stroke_color = [255, 128, 0]
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, JsonSchema)]
#[serde(untagged)]
pub enum ColorSpec {
    /// Named color: red, green, blue, yellow, orange, pink, white, black
    Name(String),
    /// RGB color as [red, green, blue] where each component is 0-255
    Rgb([u8; 3]),
}

impl ColorSpec {
    /// Converts the color specification to a [`Color`].
    ///
    /// Unknown color names fall back to red with a warning.
    pub fn to_color(&self) -> Color {
        match self {
            ColorSpec::Name(name) => color::name_to_color(name).unwrap_or_else(|| {
                warn!("Unknown color '{}', using red", name);
                RED
            }),
            ColorSpec::Rgb([r, g, b]) => Color::from_rgb8(*r, *g, *b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{BLUE, WHITE};

    #[test]
    fn named_and_rgb_specs_resolve() {
        assert_eq!(ColorSpec::Name("Blue".into()).to_color(), BLUE);
        assert_eq!(ColorSpec::Rgb([255, 255, 255]).to_color(), WHITE);
    }

    #[test]
    fn unknown_name_falls_back_to_red() {
        assert_eq!(ColorSpec::Name("mauve-ish".into()).to_color(), RED);
    }

    #[test]
    fn untagged_spec_parses_both_forms() {
        #[derive(Deserialize)]
        struct Wrapper {
            color: ColorSpec,
        }

        let named: Wrapper = toml::from_str(r#"color = "green""#).unwrap();
        assert_eq!(named.color, ColorSpec::Name("green".into()));

        let rgb: Wrapper = toml::from_str("color = [1, 2, 3]").unwrap();
        assert_eq!(rgb.color, ColorSpec::Rgb([1, 2, 3]));
    }
}
