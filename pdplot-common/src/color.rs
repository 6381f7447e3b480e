use crate::error::StyleValueError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A color literal as it appears in a plotly layout.
///
/// Accepted spellings are `#RRGGBB` hex and the css `rgb(...)` / `rgba(...)` functions.
/// The literal is kept as written so serializing a color reproduces the source document,
/// while the parsed RGBA components are available for interpolation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    literal: String,
    rgba: [u8; 4],
}

impl Color {
    pub fn parse(literal: &str) -> Result<Self, StyleValueError> {
        if let Some(digits) = literal.strip_prefix('#') {
            if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
                return Err(StyleValueError::UnsupportedColorForm(literal.to_string()));
            }
        } else if !(literal.starts_with("rgb(") || literal.starts_with("rgba(")) {
            return Err(StyleValueError::UnsupportedColorForm(literal.to_string()));
        }

        let parsed = csscolorparser::parse(literal)?;
        Ok(Self {
            literal: literal.to_string(),
            rgba: parsed.to_rgba8(),
        })
    }

    /// Build a color from 8-bit components, spelled as hex when opaque.
    pub fn from_rgba8(rgba: [u8; 4]) -> Self {
        let [r, g, b, a] = rgba;
        let literal = if a == u8::MAX {
            format!("#{r:02x}{g:02x}{b:02x}")
        } else {
            format!("rgba({r},{g},{b},{})", a as f64 / 255.0)
        };
        Self { literal, rgba }
    }

    pub fn as_str(&self) -> &str {
        &self.literal
    }

    pub fn is_hex(&self) -> bool {
        self.literal.starts_with('#')
    }

    pub fn to_rgba8(&self) -> [u8; 4] {
        self.rgba
    }

    pub fn is_transparent(&self) -> bool {
        self.rgba[3] == 0
    }
}

impl TryFrom<String> for Color {
    type Error = StyleValueError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Color::parse(&value)
    }
}

impl From<Color> for String {
    fn from(value: Color) -> Self {
        value.literal
    }
}

impl FromStr for Color {
    type Err = StyleValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::parse(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.literal)
    }
}
