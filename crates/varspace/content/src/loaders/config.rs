//! Classifier configuration loader.

use std::path::Path;

use varspace_core::{Classifier, ClassifierConfig};

use crate::loaders::{LoadResult, read_file};

/// Loader for classifier configuration from TOML.
///
/// ```toml
/// coincident = "plain"
/// ```
///
/// Missing keys take their defaults.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Parse config data from a TOML document.
    pub fn from_toml_str(content: &str) -> LoadResult<ClassifierConfig> {
        let config: ClassifierConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse classifier config TOML: {}", e))?;

        Ok(config)
    }

    /// Load config data from a TOML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the TOML file containing ClassifierConfig
    pub fn load(path: &Path) -> LoadResult<ClassifierConfig> {
        let content = read_file(path)?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(
            path = %path.display(),
            coincident = %config.coincident,
            "loaded classifier config"
        );

        Ok(config)
    }

    /// Load a file and build the classifier it describes.
    pub fn load_classifier(path: &Path) -> LoadResult<Classifier> {
        Self::load(path).map(Classifier::new)
    }
}
