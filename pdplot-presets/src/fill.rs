use crate::validate::Validate;
use pdplot_common::color::Color;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Categorical palette used to tell series apart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FillColors(Vec<Color>);

impl FillColors {
    pub fn new(colors: Vec<Color>) -> Self {
        Self(colors)
    }

    pub fn colors(&self) -> &[Color] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Color for the series at `index`, wrapping around the palette
    pub fn cycle(&self, index: usize) -> Option<&Color> {
        if self.0.is_empty() {
            None
        } else {
            self.0.get(index % self.0.len())
        }
    }
}

impl Validate for FillColors {
    fn validate(&self, path: &str) -> Result<(), String> {
        let at = |i: usize| format!("{path}[{i}]");
        if self.0.is_empty() {
            return Err(format!("{path} must not be empty"));
        }

        let mut seen = HashSet::new();
        for (i, color) in self.0.iter().enumerate() {
            if !color.is_hex() {
                return Err(format!("{} must be a hex color, got {color}", at(i)));
            }
            if !seen.insert(color.as_str().to_ascii_lowercase()) {
                return Err(format!("{} duplicates an earlier color {color}", at(i)));
            }
        }
        Ok(())
    }
}
