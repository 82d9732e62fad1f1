//! Host configuration loaded from TOML.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{DeskError, Result};

/// Terminal host configuration.
///
/// Every key is optional; a missing file yields [`DeskConfig::default`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DeskConfig {
    /// Profile JSON to load at startup.
    pub profile_path: PathBuf,
    /// Literal prompt that takes precedence over the profile-derived one.
    pub prompt: Option<String>,
    /// Link handed to the host when `download` runs.
    pub resume_pdf: String,
    /// File name suggested for the download.
    pub resume_file_name: String,
    /// Width of the `=` rule under section headings.
    pub rule_width: usize,
    /// Column width for command and alias names in `help`.
    pub label_width: usize,
    /// Print the profile's suggested commands when a profile is loaded.
    pub show_suggestions: bool,
}

impl Default for DeskConfig {
    fn default() -> Self {
        Self {
            profile_path: PathBuf::from("resume.json"),
            prompt: None,
            resume_pdf: "/resume.pdf".to_string(),
            resume_file_name: "resume.pdf".to_string(),
            rule_width: 50,
            label_width: 15,
            show_suggestions: true,
        }
    }
}

impl DeskConfig {
    /// Parse a config from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file. A file that does not exist yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::info!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    fn validate(&self) -> Result<()> {
        if self.label_width == 0 {
            return Err(DeskError::Config("label_width must be at least 1".into()));
        }
        if self.resume_file_name.trim().is_empty() {
            return Err(DeskError::Config("resume_file_name must not be empty".into()));
        }
        Ok(())
    }
}
