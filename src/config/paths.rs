//! Path resolution for taskline configuration files.
//!
//! All taskline data is stored in `~/.taskline/`:
//! - `config.yaml` - Main configuration file

use std::path::PathBuf;

use crate::error::TasklineError;

/// Paths to taskline configuration files.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Root directory: `~/.taskline/`
    pub root: PathBuf,
    /// Config file: `~/.taskline/config.yaml`
    pub config_file: PathBuf,
}

impl Paths {
    /// Create paths based on the user's home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, TasklineError> {
        let home = std::env::var("HOME").map_err(|_| {
            TasklineError::Config("Could not determine home directory".to_string())
        })?;

        let root = PathBuf::from(home).join(".taskline");

        Ok(Self {
            config_file: root.join("config.yaml"),
            root,
        })
    }

    /// Create paths with a custom root directory (useful for testing).
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            config_file: root.join("config.yaml"),
            root,
        }
    }

    /// Ensure the root directory exists, creating it if necessary.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation fails.
    pub fn ensure_dirs(&self) -> Result<(), TasklineError> {
        if !self.root.exists() {
            std::fs::create_dir_all(&self.root).map_err(|e| {
                TasklineError::Config(format!(
                    "Failed to create directory {:?}: {}",
                    self.root, e
                ))
            })?;
        }
        Ok(())
    }
}

impl Default for Paths {
    fn default() -> Self {
        Self::new().unwrap_or_else(|_| {
            // Fallback to current directory if home cannot be determined
            Self::with_root(PathBuf::from(".taskline"))
        })
    }
}
