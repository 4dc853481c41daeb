//! Color handling for wireframe rendering
//!
//! [`Color`] wraps `DynamicColor` from the color crate so configuration
//! strings and exporter palettes share one parsed representation.

use std::{fmt, str::FromStr};

use color::DynamicColor;

/// A parsed CSS color.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Color {
    color: DynamicColor,
}

impl Color {
    /// Create a new `Color` from a CSS color string such as `"#ff0000"`,
    /// `"rgb(255, 0, 0)"` or `"red"`.
    ///
    /// # Errors
    ///
    /// Returns a message naming the rejected input when it is not a valid
    /// CSS color.
    ///
    /// # Examples
    ///
    /// ```
    /// use wireframe_core::color::Color;
    ///
    /// let blue = Color::new("#3b82f6").unwrap();
    /// assert!(Color::new("not-a-color").is_err());
    /// ```
    pub fn new(color_str: &str) -> Result<Self, String> {
        DynamicColor::from_str(color_str)
            .map(|color| Self { color })
            .map_err(|err| format!("invalid color `{color_str}`: {err}"))
    }

    /// Returns a copy of this color with the given alpha, between 0.0
    /// (fully transparent) and 1.0 (fully opaque).
    pub fn with_alpha(self, alpha: f32) -> Self {
        Self {
            color: self.color.with_alpha(alpha),
        }
    }

    /// Returns the alpha component of this color.
    pub fn alpha(&self) -> f32 {
        self.color.components[3]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::new("black").expect("'black' is a valid CSS color")
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.color)
    }
}
