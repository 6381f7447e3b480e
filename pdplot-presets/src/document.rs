use crate::annotation::AnnotationLayout;
use crate::error::PresetError;
use crate::fill::FillColors;
use crate::layout::Layout;
use crate::marker::MarkerSettings;
use crate::preset::{ColorscalePreset, LayoutPreset, MarkerPreset, Preset, PresetName};
use pdplot_common::colorscale::Colorscale;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

/// The preset document compiled into the crate
pub const EMBEDDED_DOCUMENT: &str = include_str!("../presets/plotly_layouts.json");

/// Typed form of the whole preset document.
///
/// Field names are the document's top-level keys. A document that is missing a preset or
/// carries an extra one fails to deserialize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PresetDocument {
    pub default_unary_layout: Layout,
    pub default_binary_layout: Layout,
    pub default_ternary_2d_layout: Layout,
    pub default_ternary_3d_layout: Layout,
    pub default_quaternary_layout: Layout,
    pub empty_plot_style: Layout,
    pub stable_colorscale: Colorscale,
    pub unstable_colorscale: Colorscale,
    pub stable_markers_colorscale: Colorscale,
    pub default_binary_marker_settings: MarkerSettings,
    pub default_ternary_2d_marker_settings: MarkerSettings,
    pub default_ternary_3d_marker_settings: MarkerSettings,
    pub default_quaternary_marker_settings: MarkerSettings,
    pub default_fill_colors: FillColors,
    pub default_annotation_layout: AnnotationLayout,
}

impl PresetDocument {
    pub fn preset(&self, name: PresetName) -> Preset<'_> {
        use PresetName::*;
        match name {
            DefaultUnaryLayout => Preset::Layout(&self.default_unary_layout),
            DefaultBinaryLayout => Preset::Layout(&self.default_binary_layout),
            DefaultTernary2dLayout => Preset::Layout(&self.default_ternary_2d_layout),
            DefaultTernary3dLayout => Preset::Layout(&self.default_ternary_3d_layout),
            DefaultQuaternaryLayout => Preset::Layout(&self.default_quaternary_layout),
            EmptyPlotStyle => Preset::Layout(&self.empty_plot_style),
            StableColorscale => Preset::Colorscale(&self.stable_colorscale),
            UnstableColorscale => Preset::Colorscale(&self.unstable_colorscale),
            StableMarkersColorscale => Preset::Colorscale(&self.stable_markers_colorscale),
            DefaultBinaryMarkerSettings => {
                Preset::MarkerSettings(&self.default_binary_marker_settings)
            }
            DefaultTernary2dMarkerSettings => {
                Preset::MarkerSettings(&self.default_ternary_2d_marker_settings)
            }
            DefaultTernary3dMarkerSettings => {
                Preset::MarkerSettings(&self.default_ternary_3d_marker_settings)
            }
            DefaultQuaternaryMarkerSettings => {
                Preset::MarkerSettings(&self.default_quaternary_marker_settings)
            }
            DefaultFillColors => Preset::FillColors(&self.default_fill_colors),
            DefaultAnnotationLayout => Preset::AnnotationLayout(&self.default_annotation_layout),
        }
    }

    pub fn layout(&self, preset: LayoutPreset) -> &Layout {
        match preset {
            LayoutPreset::Unary => &self.default_unary_layout,
            LayoutPreset::Binary => &self.default_binary_layout,
            LayoutPreset::Ternary2d => &self.default_ternary_2d_layout,
            LayoutPreset::Ternary3d => &self.default_ternary_3d_layout,
            LayoutPreset::Quaternary => &self.default_quaternary_layout,
            LayoutPreset::Empty => &self.empty_plot_style,
        }
    }

    pub fn colorscale(&self, preset: ColorscalePreset) -> &Colorscale {
        match preset {
            ColorscalePreset::Stable => &self.stable_colorscale,
            ColorscalePreset::Unstable => &self.unstable_colorscale,
            ColorscalePreset::StableMarkers => &self.stable_markers_colorscale,
        }
    }

    pub fn marker_settings(&self, preset: MarkerPreset) -> &MarkerSettings {
        match preset {
            MarkerPreset::Binary => &self.default_binary_marker_settings,
            MarkerPreset::Ternary2d => &self.default_ternary_2d_marker_settings,
            MarkerPreset::Ternary3d => &self.default_ternary_3d_marker_settings,
            MarkerPreset::Quaternary => &self.default_quaternary_marker_settings,
        }
    }

    /// Run the semantic checks of every preset, stopping at the first violation
    pub fn validate(&self) -> Result<(), PresetError> {
        PresetName::iter().try_for_each(|name| self.preset(name).validate(name))
    }
}
