use std::ffi::OsString;
use std::path::PathBuf;

/// Environment variable naming an alternative preset document
pub const PRESETS_PATH_ENV: &str = "PDPLOT_PRESETS_PATH";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PresetSource {
    /// The document compiled into the crate
    #[default]
    Embedded,
    /// A JSON document on disk with the same schema
    File(PathBuf),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistryConfig {
    pub source: PresetSource,
}

impl RegistryConfig {
    pub fn embedded() -> Self {
        Self::default()
    }

    pub fn with_file(path: impl Into<PathBuf>) -> Self {
        Self {
            source: PresetSource::File(path.into()),
        }
    }

    /// Read the document source from `PDPLOT_PRESETS_PATH`; unset or empty selects the
    /// embedded document
    pub fn from_env() -> Self {
        Self::from_env_value(std::env::var_os(PRESETS_PATH_ENV))
    }

    pub(crate) fn from_env_value(value: Option<OsString>) -> Self {
        match value {
            Some(path) if !path.is_empty() => Self::with_file(path),
            _ => Self::embedded(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_value() {
        assert_eq!(RegistryConfig::from_env_value(None), RegistryConfig::embedded());
        assert_eq!(
            RegistryConfig::from_env_value(Some(OsString::new())).source,
            PresetSource::Embedded
        );
        assert_eq!(
            RegistryConfig::from_env_value(Some(OsString::from("/etc/pdplot/presets.json"))).source,
            PresetSource::File(PathBuf::from("/etc/pdplot/presets.json"))
        );
    }
}
