use braille_core::{ColorMethod, ThresholdMethod, DEFAULT_TOLERANCE};
use serde::{Deserialize, Deserializer};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::ConvertError;

/// Environment variable naming a config file when `--config` is absent.
pub const CONFIG_ENV: &str = "BRAILLIFY_CONFIG";

/// Default character budget (1 MiB of output characters).
pub const DEFAULT_LIMIT: u64 = 1_048_576;

/// Conversion settings loaded from a YAML file.
///
/// Every field is optional in the file; missing fields take their defaults.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Inclusion tolerance in [0, 1]
    pub tolerance: f64,

    /// Invert the inclusion decision
    pub invert: bool,

    /// Brightness metric used for inclusion
    #[serde(deserialize_with = "from_name")]
    pub threshold_method: ThresholdMethod,

    /// How output is colored
    #[serde(deserialize_with = "from_name")]
    pub color_method: ColorMethod,

    /// Maximum output size in characters, line separators included
    pub limit: u64,
}

/// Deserialize a method by name via its `FromStr` impl.
fn from_name<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: fmt::Display,
{
    let name = String::deserialize(deserializer)?;
    name.parse().map_err(serde::de::Error::custom)
}

/// Settings given on the command line, each overriding the config file.
#[derive(Debug, Default, Clone)]
pub struct ConfigOverrides {
    pub tolerance: Option<f64>,
    pub invert: bool,
    pub threshold_method: Option<ThresholdMethod>,
    pub color_method: Option<ColorMethod>,
    pub limit: Option<u64>,
}

impl AppConfig {
    /// Parse configuration from YAML text.
    pub fn from_yaml_str(content: &str) -> Result<Self, ConvertError> {
        serde_yaml::from_str(content).map_err(|e| ConvertError::Config(e.to_string()))
    }

    /// Load configuration from `path`, or from `$BRAILLIFY_CONFIG` if no
    /// path is given. Falls back to defaults if neither is set or the file
    /// cannot be read or parsed.
    pub fn load(path: Option<&Path>) -> Self {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => match std::env::var_os(CONFIG_ENV) {
                Some(p) => PathBuf::from(p),
                None => {
                    tracing::debug!("No config file given, using defaults");
                    return Self::default();
                }
            },
        };

        match std::fs::read_to_string(&path) {
            Ok(content) => match Self::from_yaml_str(&content) {
                Ok(config) => {
                    tracing::info!(
                        path = %path.display(),
                        tolerance = config.tolerance,
                        threshold_method = %config.threshold_method,
                        color_method = %config.color_method,
                        limit = config.limit,
                        "Loaded configuration"
                    );
                    config
                }
                Err(e) => {
                    tracing::warn!(path = %path.display(), %e, "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(path = %path.display(), %e, "Failed to read config, using defaults");
                Self::default()
            }
        }
    }

    /// Apply command-line overrides field by field.
    pub fn apply(&mut self, overrides: &ConfigOverrides) {
        if let Some(tolerance) = overrides.tolerance {
            self.tolerance = tolerance;
        }
        if overrides.invert {
            self.invert = true;
        }
        if let Some(method) = overrides.threshold_method {
            self.threshold_method = method;
        }
        if let Some(method) = overrides.color_method {
            self.color_method = method;
        }
        if let Some(limit) = overrides.limit {
            self.limit = limit;
        }
    }

    /// Check settings that the converter itself does not validate.
    pub fn validate(&self) -> Result<(), ConvertError> {
        if self.limit == 0 {
            return Err(ConvertError::InvalidLimit(self.limit));
        }
        Ok(())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            invert: false,
            threshold_method: ThresholdMethod::Luminance,
            color_method: ColorMethod::None,
            limit: DEFAULT_LIMIT,
        }
    }
}
