//! User settings stored as `{data_dir}/settings.yaml`.

use std::fs;
use std::path::{Path, PathBuf};

use faultcalc_core::{ClampPolicy, EvaluatorConfig};
use serde::{Deserialize, Serialize};

use crate::output::OutputFormat;
use crate::util::io::atomic_write;

pub const SETTINGS_FILE_NAME: &str = "settings.yaml";

#[derive(Debug)]
pub enum SettingsError {
    Io(String),
    Parse(String),
    Serialize(String),
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::Io(msg) => write!(f, "IO error: {}", msg),
            SettingsError::Parse(msg) => write!(f, "Parse error: {}", msg),
            SettingsError::Serialize(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl std::error::Error for SettingsError {}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub evaluator: EvaluatorConfig,
    #[serde(default)]
    pub output: OutputFormat,
}

impl Settings {
    pub fn path(data_dir: &Path) -> PathBuf {
        data_dir.join(SETTINGS_FILE_NAME)
    }

    pub fn from_yaml(yaml: &str) -> Result<Self, SettingsError> {
        serde_saphyr::from_str(yaml).map_err(|e| SettingsError::Parse(e.to_string()))
    }

    pub fn to_yaml(&self) -> Result<String, SettingsError> {
        serde_saphyr::to_string(self).map_err(|e| SettingsError::Serialize(e.to_string()))
    }

    /// Read the settings file, if there is one.
    pub fn load(data_dir: &Path) -> Result<Option<Self>, SettingsError> {
        let path = Self::path(data_dir);
        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&path)
            .map_err(|e| SettingsError::Io(format!("Failed to read {}: {}", path.display(), e)))?;
        Self::from_yaml(&content).map(Some)
    }

    /// Load settings, falling back to defaults when the file is missing or broken.
    pub fn load_or_default(data_dir: &Path) -> Self {
        match Self::load(data_dir) {
            Ok(Some(settings)) => {
                tracing::debug!(?settings, "Loaded settings");
                settings
            }
            Ok(None) => Self::default(),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load settings, using defaults");
                Self::default()
            }
        }
    }

    pub fn save(&self, data_dir: &Path) -> Result<(), SettingsError> {
        fs::create_dir_all(data_dir)
            .map_err(|e| SettingsError::Io(format!("Failed to create data directory: {}", e)))?;
        let yaml = self.to_yaml()?;
        atomic_write(&Self::path(data_dir), &yaml)
            .map_err(|e| SettingsError::Io(format!("Failed to write settings: {}", e)))
    }

    /// Apply command-line overrides on top of the file values
    #[must_use]
    pub fn with_overrides(mut self, clamp: Option<ClampPolicy>, output: Option<OutputFormat>) -> Self {
        if let Some(clamp) = clamp {
            self.evaluator.clamp = clamp;
        }
        if let Some(output) = output {
            self.output = output;
        }
        self
    }
}
