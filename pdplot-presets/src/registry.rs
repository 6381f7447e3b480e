//! Read-only registry serving the presets of one loaded document.
//!
//! Loading parses the JSON into typed records and runs the semantic checks once; every
//! lookup afterwards is a borrow into the immutable document.
//!
//! ```
//! use pdplot_presets::registry::StyleRegistry;
//!
//! let registry = StyleRegistry::embedded().unwrap();
//! let stable = registry.get("stable_colorscale").unwrap();
//! assert_eq!(stable.as_colorscale().unwrap().len(), 3);
//! ```

use crate::annotation::AnnotationLayout;
use crate::config::{PresetSource, RegistryConfig};
use crate::document::{PresetDocument, EMBEDDED_DOCUMENT};
use crate::error::PresetError;
use crate::fill::FillColors;
use crate::layout::Layout;
use crate::marker::MarkerSettings;
use crate::preset::{ColorscalePreset, LayoutPreset, MarkerPreset, Preset, PresetName};
use crate::topology::{PlotTopology, Stability};
use lazy_static::lazy_static;
use pdplot_common::colorscale::Colorscale;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::str::FromStr;
use strum::{IntoEnumIterator, VariantNames};
use tracing::{debug, warn};

lazy_static! {
    static ref GLOBAL_REGISTRY: Result<StyleRegistry, PresetError> =
        StyleRegistry::load(&RegistryConfig::from_env());
}

/// Process-wide registry, loaded on first use from the source named by
/// `PDPLOT_PRESETS_PATH` or from the embedded document.
///
/// A load failure is kept and handed to every caller.
pub fn global() -> Result<&'static StyleRegistry, &'static PresetError> {
    GLOBAL_REGISTRY.as_ref()
}

#[derive(Debug, Clone, PartialEq)]
pub struct StyleRegistry {
    document: PresetDocument,
}

impl StyleRegistry {
    pub fn embedded() -> Result<Self, PresetError> {
        Self::from_json_str(EMBEDDED_DOCUMENT)
    }

    #[tracing::instrument(skip_all)]
    pub fn load(config: &RegistryConfig) -> Result<Self, PresetError> {
        match &config.source {
            PresetSource::Embedded => Self::embedded(),
            PresetSource::File(path) => Self::from_path(path),
        }
    }

    #[tracing::instrument(skip_all)]
    pub fn from_json_str(source: &str) -> Result<Self, PresetError> {
        let document: PresetDocument = serde_json::from_str(source).map_err(|err| {
            warn!("Failed to parse preset document: {err}");
            err
        })?;
        Self::from_document(document)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, PresetError> {
        let document: PresetDocument = serde_json::from_reader(reader).map_err(|err| {
            warn!("Failed to parse preset document: {err}");
            err
        })?;
        Self::from_document(document)
    }

    #[tracing::instrument(skip_all, fields(path = %path.display()))]
    pub fn from_path(path: &Path) -> Result<Self, PresetError> {
        let file = File::open(path).map_err(|source| PresetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(BufReader::new(file))
    }

    /// Validate an already typed document and wrap it
    pub fn from_document(document: PresetDocument) -> Result<Self, PresetError> {
        if let Err(err) = document.validate() {
            warn!("Rejected preset document: {err}");
            return Err(err);
        }
        debug!(presets = PresetName::VARIANTS.len(), "Loaded preset document");
        Ok(Self { document })
    }

    /// Look up a preset by its document key
    pub fn get(&self, name: &str) -> Result<Preset<'_>, PresetError> {
        let name =
            PresetName::from_str(name).map_err(|_| PresetError::NotFound(name.to_string()))?;
        Ok(self.preset(name))
    }

    pub fn preset(&self, name: PresetName) -> Preset<'_> {
        self.document.preset(name)
    }

    pub fn layout(&self, preset: LayoutPreset) -> &Layout {
        self.document.layout(preset)
    }

    pub fn colorscale(&self, preset: ColorscalePreset) -> &Colorscale {
        self.document.colorscale(preset)
    }

    pub fn marker_settings(&self, preset: MarkerPreset) -> &MarkerSettings {
        self.document.marker_settings(preset)
    }

    pub fn fill_colors(&self) -> &FillColors {
        &self.document.default_fill_colors
    }

    pub fn annotation_layout(&self) -> &AnnotationLayout {
        &self.document.default_annotation_layout
    }

    pub fn layout_for(&self, topology: PlotTopology) -> &Layout {
        self.layout(topology.layout_preset())
    }

    pub fn marker_settings_for(&self, topology: PlotTopology) -> &MarkerSettings {
        self.marker_settings(topology.marker_preset())
    }

    pub fn colorscale_for(&self, stability: Stability) -> &Colorscale {
        self.colorscale(stability.colorscale_preset())
    }

    /// Preset names in document order
    pub fn names(&self) -> impl Iterator<Item = PresetName> {
        PresetName::iter()
    }

    pub fn document(&self) -> &PresetDocument {
        &self.document
    }

    pub fn to_value(&self, name: PresetName) -> Result<serde_json::Value, PresetError> {
        self.preset(name).to_value()
    }

    pub fn to_json_string(&self) -> Result<String, PresetError> {
        Ok(serde_json::to_string(&self.document)?)
    }

    pub fn to_json_pretty(&self) -> Result<String, PresetError> {
        Ok(serde_json::to_string_pretty(&self.document)?)
    }
}
