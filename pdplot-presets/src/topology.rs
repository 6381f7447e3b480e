//! Selection of presets by the shape of the phase diagram being drawn.

use crate::error::PresetError;
use crate::preset::{ColorscalePreset, LayoutPreset, MarkerPreset};
use strum::{Display, EnumIter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum PlotTopology {
    Unary,
    Binary,
    #[strum(serialize = "ternary_2d")]
    Ternary2d,
    #[strum(serialize = "ternary_3d")]
    Ternary3d,
    Quaternary,
}

impl PlotTopology {
    /// Topology for a chemical system with `dimension` elements.
    ///
    /// Ternary systems can be drawn either as a flat triangle or as a 3D energy surface.
    pub fn from_dimension(dimension: usize, ternary_3d: bool) -> Result<Self, PresetError> {
        match dimension {
            1 => Ok(PlotTopology::Unary),
            2 => Ok(PlotTopology::Binary),
            3 if ternary_3d => Ok(PlotTopology::Ternary3d),
            3 => Ok(PlotTopology::Ternary2d),
            4 => Ok(PlotTopology::Quaternary),
            other => Err(PresetError::UnsupportedDimension(other)),
        }
    }

    pub fn dimension(&self) -> usize {
        match self {
            PlotTopology::Unary => 1,
            PlotTopology::Binary => 2,
            PlotTopology::Ternary2d | PlotTopology::Ternary3d => 3,
            PlotTopology::Quaternary => 4,
        }
    }

    pub fn is_3d(&self) -> bool {
        matches!(self, PlotTopology::Ternary3d | PlotTopology::Quaternary)
    }

    pub fn layout_preset(&self) -> LayoutPreset {
        match self {
            PlotTopology::Unary => LayoutPreset::Unary,
            PlotTopology::Binary => LayoutPreset::Binary,
            PlotTopology::Ternary2d => LayoutPreset::Ternary2d,
            PlotTopology::Ternary3d => LayoutPreset::Ternary3d,
            PlotTopology::Quaternary => LayoutPreset::Quaternary,
        }
    }

    /// Unary plots have no marker preset of their own and share the binary one
    pub fn marker_preset(&self) -> MarkerPreset {
        match self {
            PlotTopology::Unary | PlotTopology::Binary => MarkerPreset::Binary,
            PlotTopology::Ternary2d => MarkerPreset::Ternary2d,
            PlotTopology::Ternary3d => MarkerPreset::Ternary3d,
            PlotTopology::Quaternary => MarkerPreset::Quaternary,
        }
    }
}

/// Thermodynamic classification of an entry relative to the convex hull
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum Stability {
    Stable,
    Unstable,
}

impl Stability {
    pub fn colorscale_preset(&self) -> ColorscalePreset {
        match self {
            Stability::Stable => ColorscalePreset::Stable,
            Stability::Unstable => ColorscalePreset::Unstable,
        }
    }
}
