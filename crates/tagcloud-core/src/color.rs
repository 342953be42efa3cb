//! Color handling for tag styles
//!
//! This module provides the [`Color`] type which wraps the `DynamicColor` type
//! from the color crate. Tag colors are produced in the HSL color space and
//! displayed as CSS color strings.

use std::{fmt, str::FromStr};

use color::{AlphaColor, ColorSpaceTag, DynamicColor, Hsl};

/// Wrapper around the `DynamicColor` type from the color crate
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Color {
    color: DynamicColor,
}

impl Color {
    /// Create a new `Color` from a string
    /// This will parse CSS color strings such as "#ff0000", "hsl(120 50% 40%)", "red", etc.
    ///
    /// # Examples
    ///
    /// ```
    /// use tagcloud_core::color::Color;
    ///
    /// let red = Color::new("#ff0000").unwrap();
    /// let green = Color::new("hsl(120 50% 40%)").unwrap();
    /// ```
    pub fn new(color_str: &str) -> Result<Self, String> {
        match DynamicColor::from_str(color_str) {
            Ok(color) => Ok(Self { color }),
            Err(err) => Err(format!("invalid color `{color_str}`: {err}")),
        }
    }

    /// Creates an HSL color.
    ///
    /// # Arguments
    ///
    /// * `hue` - Hue in degrees, `[0, 360)`
    /// * `saturation` - Saturation in percent, `[0, 100]`
    /// * `lightness` - Lightness in percent, `[0, 100]`
    ///
    /// # Errors
    ///
    /// Returns an error if any component is not a finite number.
    ///
    /// # Examples
    ///
    /// ```
    /// use tagcloud_core::color::Color;
    ///
    /// let teal = Color::hsl(200.0, 70.0, 45.0).unwrap();
    /// assert_eq!(teal.to_string(), "hsl(200 70% 45%)");
    /// assert!(Color::hsl(f32::NAN, 70.0, 45.0).is_err());
    /// ```
    pub fn hsl(hue: f32, saturation: f32, lightness: f32) -> Result<Self, String> {
        if !(hue.is_finite() && saturation.is_finite() && lightness.is_finite()) {
            return Err(format!(
                "non-finite hsl components ({hue}, {saturation}, {lightness})"
            ));
        }
        let hsl = AlphaColor::<Hsl>::new([hue, saturation, lightness, 1.0]);
        Ok(Self {
            color: DynamicColor::from_alpha_color(hsl),
        })
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::new("black").expect("'black' is a valid CSS color")
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.color.cs {
            // Colors built from components keep the modern CSS syntax
            ColorSpaceTag::Hsl if !self.color.flags.named() => {
                let [hue, saturation, lightness, alpha] = self.color.components;
                write!(f, "hsl({hue} {saturation}% {lightness}%")?;
                if alpha < 1.0 {
                    write!(f, " / {alpha}")?;
                }
                write!(f, ")")
            }
            _ => write!(f, "{}", self.color),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_new() {
        assert!(Color::new("#ff0000").is_ok());
        assert!(Color::new("not-a-color").is_err());
    }

    #[test]
    fn test_color_default() {
        let color = Color::default();
        assert_eq!(color.to_string(), "black");
    }

    #[test]
    fn test_color_hsl_keeps_components() {
        let color = Color::hsl(33.0, 65.0, 50.0).unwrap();
        assert_eq!(color.color.cs, ColorSpaceTag::Hsl);
        assert_eq!(color.color.components, [33.0, 65.0, 50.0, 1.0]);
    }

    #[test]
    fn test_color_hsl_round_trips_through_css() {
        let color = Color::hsl(120.0, 50.0, 40.5).unwrap();
        let parsed = Color::new(&color.to_string()).unwrap();
        assert_eq!(parsed.color.cs, ColorSpaceTag::Hsl);
        assert_eq!(parsed.color.components, color.color.components);
    }

    #[test]
    fn test_color_hsl_distinguishes_hues() {
        let warm = Color::hsl(10.0, 65.0, 50.0).unwrap();
        let cool = Color::hsl(210.0, 65.0, 50.0).unwrap();
        assert_ne!(warm, cool);
        assert_ne!(warm.to_string(), cool.to_string());
    }

    #[test]
    fn test_color_hsl_rejects_non_finite() {
        assert!(Color::hsl(0.0, f32::INFINITY, 50.0).is_err());
        assert!(Color::hsl(0.0, 50.0, f32::NAN).is_err());
    }

    #[test]
    fn test_color_display() {
        let color = Color::hsl(120.0, 50.0, 40.0).unwrap();
        assert_eq!(color.to_string(), "hsl(120 50% 40%)");
        assert_eq!(Color::new("#ff0000").unwrap().to_string(), "rgb(255, 0, 0)");
    }
}
