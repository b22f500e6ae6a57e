//! Path management for Debt Machine
//!
//! Provides XDG-compliant path resolution for configuration and logs.
//!
//! ## Path Resolution Order
//!
//! 1. `DEBT_MACHINE_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/debt-machine` or `~/.config/debt-machine`
//! 3. Windows: `%APPDATA%\debt-machine`

use std::path::PathBuf;

use crate::error::DebtError;

/// Manages all paths used by Debt Machine
#[derive(Debug, Clone)]
pub struct DebtPaths {
    /// Base directory for all Debt Machine files
    base_dir: PathBuf,
}

impl DebtPaths {
    /// Create a new DebtPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, DebtError> {
        let base_dir = if let Ok(custom) = std::env::var("DEBT_MACHINE_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create DebtPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/debt-machine/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Get the path to the diagnostic log written by tracing
    pub fn log_file(&self) -> PathBuf {
        self.base_dir.join("debtm.log")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), DebtError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| DebtError::Io(format!("Failed to create base directory: {}", e)))
    }

    /// Check if Debt Machine has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, DebtError> {
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => {
            let home = std::env::var("HOME")
                .map_err(|_| DebtError::Config("HOME environment variable not set".into()))?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("debt-machine"))
}

#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, DebtError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| DebtError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("debt-machine"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = DebtPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
        assert_eq!(paths.audit_log(), temp_dir.path().join("audit.log"));
        assert_eq!(paths.log_file(), temp_dir.path().join("debtm.log"));
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("nested").join("debt-machine");
        let paths = DebtPaths::with_base_dir(nested.clone());

        assert!(!paths.is_initialized());
        paths.ensure_directories().unwrap();
        assert!(nested.exists());
    }
}
