//! Chart-wide layout records: axes, legend, margins, ternary and 3D scene settings.
//!
//! Every optional plotly attribute is skipped when absent, so a record serializes back to
//! exactly the keys it was read from.

use crate::validate::{join, non_negative, Validate};
use pdplot_common::color::Color;
use pdplot_common::number::Number;
use pdplot_common::types::{
    AspectMode, AxisRef, AxisSide, AxisType, Font, HoverMode, ItemSizing, LegendOrientation,
    Mirror, ProjectionType, TickPlacement, TraceOrder, Vec3, XAnchor, YAnchor,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Layout {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub xaxis: Option<Axis>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<Axis>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ternary: Option<Ternary>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scene: Option<Scene>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legend: Option<Legend>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margin: Option<Margin>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hovermode: Option<HoverMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub showlegend: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub autosize: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font: Option<Font>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paper_bgcolor: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plot_bgcolor: Option<Color>,
}

impl Layout {
    /// Whether the layout describes a 3D scene rather than a flat chart
    pub fn is_3d(&self) -> bool {
        self.scene.is_some()
    }
}

impl Validate for Layout {
    fn validate(&self, path: &str) -> Result<(), String> {
        self.xaxis.validate(&join(path, "xaxis"))?;
        self.yaxis.validate(&join(path, "yaxis"))?;
        self.ternary.validate(&join(path, "ternary"))?;
        self.scene.validate(&join(path, "scene"))?;
        self.legend.validate(&join(path, "legend"))?;
        self.margin.validate(&join(path, "margin"))?;
        self.font.validate(&join(path, "font"))?;
        non_negative(path, "width", self.width.as_ref())?;
        non_negative(path, "height", self.height.as_ref())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AxisTitle {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font: Option<Font>,
}

impl Validate for AxisTitle {
    fn validate(&self, path: &str) -> Result<(), String> {
        self.font.validate(&join(path, "font"))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Axis {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<AxisTitle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anchor: Option<AxisRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub autorange: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<[Number; 2]>,
    /// Lower bound of a ternary axis
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub side: Option<AxisSide>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub axis_type: Option<AxisType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mirror: Option<Mirror>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nticks: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ticks: Option<TickPlacement>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tickfont: Option<Font>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tickformat: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub showticklabels: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub showgrid: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gridcolor: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gridwidth: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub showline: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linecolor: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linewidth: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zeroline: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub showspikes: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub showbackground: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backgroundcolor: Option<Color>,
}

impl Axis {
    /// Plotly shows an axis unless told otherwise
    pub fn is_visible(&self) -> bool {
        self.visible.unwrap_or(true)
    }

    pub fn range_f64(&self) -> Option<[f64; 2]> {
        self.range.as_ref().map(|[lo, hi]| [lo.as_f64(), hi.as_f64()])
    }
}

impl Validate for Axis {
    fn validate(&self, path: &str) -> Result<(), String> {
        self.title.validate(&join(path, "title"))?;
        self.tickfont.validate(&join(path, "tickfont"))?;
        non_negative(path, "gridwidth", self.gridwidth.as_ref())?;
        non_negative(path, "linewidth", self.linewidth.as_ref())?;
        non_negative(path, "nticks", self.nticks.as_ref())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Legend {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orientation: Option<LegendOrientation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub traceorder: Option<TraceOrder>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub xanchor: Option<XAnchor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub yanchor: Option<YAnchor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font: Option<Font>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bgcolor: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bordercolor: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub borderwidth: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub itemsizing: Option<ItemSizing>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracegroupgap: Option<Number>,
}

impl Validate for Legend {
    fn validate(&self, path: &str) -> Result<(), String> {
        self.font.validate(&join(path, "font"))?;
        non_negative(path, "borderwidth", self.borderwidth.as_ref())?;
        non_negative(path, "tracegroupgap", self.tracegroupgap.as_ref())
    }
}

/// Plot margins in pixels
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Margin {
    pub l: Number,
    pub r: Number,
    pub t: Number,
    pub b: Number,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pad: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub autoexpand: Option<bool>,
}

impl Validate for Margin {
    fn validate(&self, path: &str) -> Result<(), String> {
        for (side, v) in [("l", &self.l), ("r", &self.r), ("t", &self.t), ("b", &self.b)] {
            non_negative(path, side, Some(v))?;
        }
        non_negative(path, "pad", self.pad.as_ref())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Ternary {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sum: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aaxis: Option<Axis>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub baxis: Option<Axis>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caxis: Option<Axis>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bgcolor: Option<Color>,
}

impl Validate for Ternary {
    fn validate(&self, path: &str) -> Result<(), String> {
        non_negative(path, "sum", self.sum.as_ref())?;
        self.aaxis.validate(&join(path, "aaxis"))?;
        self.baxis.validate(&join(path, "baxis"))?;
        self.caxis.validate(&join(path, "caxis"))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Scene {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub xaxis: Option<Axis>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<Axis>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zaxis: Option<Axis>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub camera: Option<Camera>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aspectmode: Option<AspectMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aspectratio: Option<Vec3>,
}

impl Validate for Scene {
    fn validate(&self, path: &str) -> Result<(), String> {
        self.xaxis.validate(&join(path, "xaxis"))?;
        self.yaxis.validate(&join(path, "yaxis"))?;
        self.zaxis.validate(&join(path, "zaxis"))?;
        if let Some(ratio) = &self.aspectratio {
            for (axis, v) in [("x", &ratio.x), ("y", &ratio.y), ("z", &ratio.z)] {
                non_negative(&join(path, "aspectratio"), axis, Some(v))?;
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Camera {
    pub eye: Vec3,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub center: Option<Vec3>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub up: Option<Vec3>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub projection: Option<Projection>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Projection {
    #[serde(rename = "type")]
    pub projection_type: ProjectionType,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_round_trip_keeps_keys() {
        let src = serde_json::json!({
            "title": {"text": "Fraction", "font": {"size": 24, "color": "#000000"}},
            "anchor": "y",
            "range": [-0.05, 1.05],
            "mirror": "ticks",
            "ticks": "",
            "type": "linear",
            "linewidth": 2.0
        });
        let axis: Axis = serde_json::from_value(src.clone()).unwrap();
        assert_eq!(axis.axis_type, Some(AxisType::Linear));
        assert_eq!(axis.ticks, Some(TickPlacement::Hidden));
        assert!(axis.is_visible());
        assert_eq!(serde_json::to_value(&axis).unwrap(), src);
    }

    #[test]
    fn test_unknown_axis_key_is_rejected() {
        let src = serde_json::json!({"showgird": true});
        assert!(serde_json::from_value::<Axis>(src).is_err());
    }

    #[test]
    fn test_validate_reports_path() {
        let layout = Layout {
            legend: Some(Legend {
                borderwidth: Some(Number::from(-2i32)),
                ..Default::default()
            }),
            ..Default::default()
        };
        let err = layout.validate("").unwrap_err();
        assert!(err.starts_with("legend.borderwidth"), "{err}");

        let scene = Scene {
            aspectratio: Some(Vec3::new(Number::from(1u32), Number::from(-1i32), Number::from(1u32))),
            ..Default::default()
        };
        assert!(scene.validate("scene").unwrap_err().contains("scene.aspectratio.y"));

        let margin: Margin =
            serde_json::from_value(serde_json::json!({"l": -80, "r": 0, "t": 0, "b": 0})).unwrap();
        assert_eq!(margin.validate("margin").unwrap_err(), "margin.l must be non-negative, got -80");

        let axis: Axis =
            serde_json::from_value(serde_json::json!({"tickfont": {"size": -1.5}})).unwrap();
        assert!(axis.validate("xaxis").unwrap_err().starts_with("xaxis.tickfont.size"));
    }

    #[test]
    fn test_numbers_keep_their_spelling() {
        let src = serde_json::json!({
            "linewidth": 2,
            "gridwidth": 1.0,
            "nticks": 8.0,
            "range": [0, 1.05],
            "tickfont": {"size": 16.0}
        });
        let axis: Axis = serde_json::from_value(src.clone()).unwrap();
        assert_eq!(axis.range_f64(), Some([0.0, 1.05]));
        assert_eq!(serde_json::to_value(&axis).unwrap(), src);
    }
}
