use crate::annotation::AnnotationLayout;
use crate::error::PresetError;
use crate::fill::FillColors;
use crate::layout::Layout;
use crate::marker::MarkerSettings;
use crate::validate::Validate;
use pdplot_common::colorscale::Colorscale;
use serde::Serialize;
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr, VariantNames};

/// The fixed set of top-level keys of the preset document, in document order
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
    IntoStaticStr,
    VariantNames,
)]
pub enum PresetName {
    #[strum(serialize = "default_unary_layout")]
    DefaultUnaryLayout,
    #[strum(serialize = "default_binary_layout")]
    DefaultBinaryLayout,
    #[strum(serialize = "default_ternary_2d_layout")]
    DefaultTernary2dLayout,
    #[strum(serialize = "default_ternary_3d_layout")]
    DefaultTernary3dLayout,
    #[strum(serialize = "default_quaternary_layout")]
    DefaultQuaternaryLayout,
    #[strum(serialize = "empty_plot_style")]
    EmptyPlotStyle,
    #[strum(serialize = "stable_colorscale")]
    StableColorscale,
    #[strum(serialize = "unstable_colorscale")]
    UnstableColorscale,
    #[strum(serialize = "stable_markers_colorscale")]
    StableMarkersColorscale,
    #[strum(serialize = "default_binary_marker_settings")]
    DefaultBinaryMarkerSettings,
    #[strum(serialize = "default_ternary_2d_marker_settings")]
    DefaultTernary2dMarkerSettings,
    #[strum(serialize = "default_ternary_3d_marker_settings")]
    DefaultTernary3dMarkerSettings,
    #[strum(serialize = "default_quaternary_marker_settings")]
    DefaultQuaternaryMarkerSettings,
    #[strum(serialize = "default_fill_colors")]
    DefaultFillColors,
    #[strum(serialize = "default_annotation_layout")]
    DefaultAnnotationLayout,
}

impl PresetName {
    pub fn as_str(&self) -> &'static str {
        (*self).into()
    }

    pub fn kind(&self) -> PresetKind {
        use PresetName::*;
        match self {
            DefaultUnaryLayout
            | DefaultBinaryLayout
            | DefaultTernary2dLayout
            | DefaultTernary3dLayout
            | DefaultQuaternaryLayout
            | EmptyPlotStyle => PresetKind::Layout,
            StableColorscale | UnstableColorscale | StableMarkersColorscale => {
                PresetKind::Colorscale
            }
            DefaultBinaryMarkerSettings
            | DefaultTernary2dMarkerSettings
            | DefaultTernary3dMarkerSettings
            | DefaultQuaternaryMarkerSettings => PresetKind::MarkerSettings,
            DefaultFillColors => PresetKind::FillColors,
            DefaultAnnotationLayout => PresetKind::AnnotationLayout,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum PresetKind {
    Layout,
    Colorscale,
    MarkerSettings,
    FillColors,
    AnnotationLayout,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum LayoutPreset {
    Unary,
    Binary,
    Ternary2d,
    Ternary3d,
    Quaternary,
    Empty,
}

impl LayoutPreset {
    pub fn name(&self) -> PresetName {
        match self {
            LayoutPreset::Unary => PresetName::DefaultUnaryLayout,
            LayoutPreset::Binary => PresetName::DefaultBinaryLayout,
            LayoutPreset::Ternary2d => PresetName::DefaultTernary2dLayout,
            LayoutPreset::Ternary3d => PresetName::DefaultTernary3dLayout,
            LayoutPreset::Quaternary => PresetName::DefaultQuaternaryLayout,
            LayoutPreset::Empty => PresetName::EmptyPlotStyle,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum ColorscalePreset {
    Stable,
    Unstable,
    StableMarkers,
}

impl ColorscalePreset {
    pub fn name(&self) -> PresetName {
        match self {
            ColorscalePreset::Stable => PresetName::StableColorscale,
            ColorscalePreset::Unstable => PresetName::UnstableColorscale,
            ColorscalePreset::StableMarkers => PresetName::StableMarkersColorscale,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum MarkerPreset {
    Binary,
    Ternary2d,
    Ternary3d,
    Quaternary,
}

impl MarkerPreset {
    pub fn name(&self) -> PresetName {
        match self {
            MarkerPreset::Binary => PresetName::DefaultBinaryMarkerSettings,
            MarkerPreset::Ternary2d => PresetName::DefaultTernary2dMarkerSettings,
            MarkerPreset::Ternary3d => PresetName::DefaultTernary3dMarkerSettings,
            MarkerPreset::Quaternary => PresetName::DefaultQuaternaryMarkerSettings,
        }
    }
}

/// A borrowed preset record.
///
/// Serializes to exactly the JSON stored under its name in the document.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Preset<'a> {
    Layout(&'a Layout),
    Colorscale(&'a Colorscale),
    MarkerSettings(&'a MarkerSettings),
    FillColors(&'a FillColors),
    AnnotationLayout(&'a AnnotationLayout),
}

impl<'a> Preset<'a> {
    pub fn kind(&self) -> PresetKind {
        match self {
            Preset::Layout(_) => PresetKind::Layout,
            Preset::Colorscale(_) => PresetKind::Colorscale,
            Preset::MarkerSettings(_) => PresetKind::MarkerSettings,
            Preset::FillColors(_) => PresetKind::FillColors,
            Preset::AnnotationLayout(_) => PresetKind::AnnotationLayout,
        }
    }

    pub fn as_layout(&self) -> Option<&'a Layout> {
        match *self {
            Preset::Layout(layout) => Some(layout),
            _ => None,
        }
    }

    pub fn as_colorscale(&self) -> Option<&'a Colorscale> {
        match *self {
            Preset::Colorscale(scale) => Some(scale),
            _ => None,
        }
    }

    pub fn as_marker_settings(&self) -> Option<&'a MarkerSettings> {
        match *self {
            Preset::MarkerSettings(settings) => Some(settings),
            _ => None,
        }
    }

    pub fn as_fill_colors(&self) -> Option<&'a FillColors> {
        match *self {
            Preset::FillColors(colors) => Some(colors),
            _ => None,
        }
    }

    pub fn as_annotation_layout(&self) -> Option<&'a AnnotationLayout> {
        match *self {
            Preset::AnnotationLayout(annotation) => Some(annotation),
            _ => None,
        }
    }

    pub fn to_value(&self) -> Result<serde_json::Value, PresetError> {
        Ok(serde_json::to_value(self)?)
    }

    pub(crate) fn validate(&self, name: PresetName) -> Result<(), PresetError> {
        let result = match self {
            Preset::Layout(layout) => layout.validate(""),
            Preset::Colorscale(scale) => scale.validate().map_err(|err| err.to_string()),
            Preset::MarkerSettings(settings) => settings.validate(""),
            Preset::FillColors(colors) => colors.validate(name.as_str()),
            Preset::AnnotationLayout(annotation) => annotation.validate(""),
        };
        result.map_err(|message| PresetError::schema(name.as_str(), message))
    }
}
