use crate::validate::{join, unit_interval, Validate};
use pdplot_common::number::Number;
use pdplot_common::types::{AxisRef, Font, TextAlign, XAnchor, YAnchor};
use serde::{Deserialize, Serialize};

/// Defaults applied to text annotations such as compound labels
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnnotationLayout {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub align: Option<TextAlign>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font: Option<Font>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub showarrow: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub xanchor: Option<XAnchor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub yanchor: Option<YAnchor>,
    /// Pixel offsets from the anchor point
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub xshift: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub yshift: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub xref: Option<AxisRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub yref: Option<AxisRef>,
}

impl Validate for AnnotationLayout {
    fn validate(&self, path: &str) -> Result<(), String> {
        self.font.validate(&join(path, "font"))?;
        unit_interval(path, "opacity", self.opacity.as_ref())
    }
}
