//! data_root resolution
//!
//! Resolution priority:
//! 1. --data-root <path> flag (must exist)
//! 2. $SLOWLOG_ADVISOR_HOME
//! 3. Current directory "."

use crate::cli::{Error, Result};
use std::path::{Path, PathBuf};

/// Environment variable naming the data root
pub const DATA_ROOT_ENV: &str = "SLOWLOG_ADVISOR_HOME";

/// Resolve the data root
pub fn resolve_data_root(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        if !path.exists() {
            return Err(Error::DataRoot(format!(
                "data_root '{}' does not exist",
                path.display()
            )));
        }
        return Ok(path.to_path_buf());
    }

    match std::env::var(DATA_ROOT_ENV) {
        Ok(home) if !home.trim().is_empty() => Ok(PathBuf::from(home)),
        _ => Ok(PathBuf::from(".")),
    }
}

/// Check the resolved data root is a usable directory
pub fn verify_data_root(data_root: &Path) -> Result<()> {
    if !data_root.is_dir() {
        return Err(Error::DataRoot(format!(
            "data_root '{}' is not a directory",
            data_root.display()
        )));
    }
    Ok(())
}
