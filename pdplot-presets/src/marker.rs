use crate::validate::{join, non_negative, unit_interval, Validate};
use pdplot_common::color::Color;
use pdplot_common::number::Number;
use pdplot_common::types::{Font, HoverInfo, MarkerMode};
use serde::{Deserialize, Serialize};

/// Default trace settings for the points of a phase diagram
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MarkerSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<MarkerMode>,
    pub marker: MarkerStyle,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hoverinfo: Option<HoverInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hoverlabel: Option<HoverLabel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub showlegend: Option<bool>,
}

impl MarkerSettings {
    pub fn hover_font_size(&self) -> Option<f64> {
        self.hoverlabel
            .as_ref()
            .and_then(|label| label.font.size.as_ref())
            .map(Number::as_f64)
    }
}

impl Validate for MarkerSettings {
    fn validate(&self, path: &str) -> Result<(), String> {
        self.marker.validate(&join(path, "marker"))?;
        if let Some(label) = &self.hoverlabel {
            label.font.validate(&join(&join(path, "hoverlabel"), "font"))?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MarkerStyle {
    pub size: Number,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<MarkerLine>,
}

impl Validate for MarkerStyle {
    fn validate(&self, path: &str) -> Result<(), String> {
        non_negative(path, "size", Some(&self.size))?;
        unit_interval(path, "opacity", self.opacity.as_ref())?;
        if let Some(line) = &self.line {
            non_negative(&join(path, "line"), "width", Some(&line.width))?;
        }
        Ok(())
    }
}

/// Marker outline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MarkerLine {
    pub width: Number,
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HoverLabel {
    pub font: Font,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bgcolor: Option<Color>,
}
