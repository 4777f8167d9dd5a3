//! Local file storage (native only)
//!
//! Directory structure:
//! ~/.trialplan/
//!   config.yaml          # Service URL, request timeout
//!   cost.yaml            # Last saved cost parameters
//!   trialplan.log
//!   templates/
//!     dose-finding.yaml
//!     pivotal.yaml

#[cfg(feature = "native")]
use std::fs;
#[cfg(feature = "native")]
use std::path::{Path, PathBuf};

#[cfg(feature = "native")]
use serde::Serialize;
#[cfg(feature = "native")]
use serde::de::DeserializeOwned;
#[cfg(feature = "native")]
use trialplan_core::model::CostParameters;
#[cfg(feature = "native")]
use trialplan_core::templates::TemplateSpec;

#[cfg(feature = "native")]
use super::config::AppConfig;

/// Error types for storage operations
#[derive(Debug)]
pub enum StorageError {
    Io(String),
    Parse(String),
    Serialize(String),
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::Io(msg) => write!(f, "IO error: {}", msg),
            StorageError::Parse(msg) => write!(f, "Parse error: {}", msg),
            StorageError::Serialize(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl std::error::Error for StorageError {}

/// Manages the data directory (native only)
#[cfg(feature = "native")]
pub struct DataDirectory {
    root: PathBuf,
}

#[cfg(feature = "native")]
impl DataDirectory {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Get the default data directory path (~/.trialplan/)
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".trialplan")
    }

    fn config_path(&self) -> PathBuf {
        self.root.join("config.yaml")
    }

    fn cost_path(&self) -> PathBuf {
        self.root.join("cost.yaml")
    }

    fn templates_dir(&self) -> PathBuf {
        self.root.join("templates")
    }

    pub fn exists(&self) -> bool {
        self.root.exists() && self.templates_dir().exists()
    }

    /// Initialize the data directory structure
    pub fn init(&self) -> Result<(), StorageError> {
        fs::create_dir_all(&self.root)
            .map_err(|e| StorageError::Io(format!("Failed to create data directory: {}", e)))?;
        fs::create_dir_all(self.templates_dir()).map_err(|e| {
            StorageError::Io(format!("Failed to create templates directory: {}", e))
        })?;
        Ok(())
    }

    /// Read a YAML file, or the default value if it does not exist
    fn read_or_default<T: DeserializeOwned + Default>(
        &self,
        path: &Path,
        what: &str,
    ) -> Result<T, StorageError> {
        if !path.exists() {
            return Ok(T::default());
        }
        let content = fs::read_to_string(path)
            .map_err(|e| StorageError::Io(format!("Failed to read {}: {}", what, e)))?;
        serde_saphyr::from_str(&content)
            .map_err(|e| StorageError::Parse(format!("Failed to parse {}: {}", what, e)))
    }

    fn write<T: Serialize>(&self, path: &Path, value: &T, what: &str) -> Result<(), StorageError> {
        if !self.exists() {
            self.init()?;
        }
        let yaml = serde_saphyr::to_string(value)
            .map_err(|e| StorageError::Serialize(format!("Failed to serialize {}: {}", what, e)))?;
        fs::write(path, yaml)
            .map_err(|e| StorageError::Io(format!("Failed to write {}: {}", what, e)))
    }

    pub fn load_config(&self) -> Result<AppConfig, StorageError> {
        self.read_or_default(&self.config_path(), "config")
    }

    pub fn save_config(&self, config: &AppConfig) -> Result<(), StorageError> {
        self.write(&self.config_path(), config, "config")
    }

    /// Load config.yaml, writing the defaults on first run so they can be
    /// edited by hand
    pub fn load_or_init_config(&self) -> Result<AppConfig, StorageError> {
        if self.config_path().exists() {
            return self.load_config();
        }
        let config = AppConfig::default();
        self.save_config(&config)?;
        tracing::info!(path = %self.config_path().display(), "wrote default config");
        Ok(config)
    }

    pub fn load_cost_parameters(&self) -> Result<CostParameters, StorageError> {
        self.read_or_default(&self.cost_path(), "cost parameters")
    }

    pub fn save_cost_parameters(&self, params: &CostParameters) -> Result<(), StorageError> {
        self.write(&self.cost_path(), params, "cost parameters")
    }

    /// Load every custom template, keyed by file stem and sorted by key.
    ///
    /// Files that fail to parse are skipped with a warning. Content is not
    /// validated here; that happens when a template is applied.
    pub fn load_templates(&self) -> Result<Vec<(String, TemplateSpec)>, StorageError> {
        let dir = self.templates_dir();
        if !dir.exists() {
            return Ok(Vec::new());
        }

        let entries = fs::read_dir(&dir)
            .map_err(|e| StorageError::Io(format!("Failed to read templates directory: {}", e)))?;

        let mut templates = Vec::new();
        for entry in entries.flatten() {
            let path = entry.path();
            if path
                .extension()
                .is_some_and(|ext| ext == "yaml" || ext == "yml")
                && let Some(key) = path.file_stem().and_then(|s| s.to_str())
            {
                match self.read_or_default::<TemplateSpec>(&path, "template") {
                    Ok(spec) => templates.push((key.to_string(), spec)),
                    Err(e) => {
                        tracing::warn!(template = key, error = %e, "Failed to load template");
                    }
                }
            }
        }
        templates.sort_by(|a, b| a.0.cmp(&b.0));
        Ok(templates)
    }

    pub fn load_template(&self, key: &str) -> Result<Option<TemplateSpec>, StorageError> {
        let path = self
            .templates_dir()
            .join(format!("{}.yaml", sanitize_filename(key)));
        if !path.exists() {
            return Ok(None);
        }
        self.read_or_default(&path, "template").map(Some)
    }

    pub fn save_template(&self, key: &str, spec: &TemplateSpec) -> Result<(), StorageError> {
        let path = self
            .templates_dir()
            .join(format!("{}.yaml", sanitize_filename(key)));
        self.write(&path, spec, "template")
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

/// Sanitize a filename to be safe for the filesystem
#[cfg(feature = "native")]
fn sanitize_filename(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}
