use std::path::{Path, PathBuf};

use crate::config::pose_config::PoseConfig;
use crate::core::errors::{PoseError, Result};

/// Environment variable that points at an alternative config file.
pub const CONFIG_ENV: &str = "POSE_CONFIG";

/// Project key for the current invocation: the base name of the working
/// directory.
pub fn project_key() -> Result<String> {
    let cwd = std::env::current_dir()?;
    Ok(key_for_dir(&cwd))
}

fn key_for_dir(dir: &Path) -> String {
    dir.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Location of the config file: `$POSE_CONFIG` if set, otherwise
/// `~/pose-config.yml`.
pub fn config_path() -> Result<PathBuf> {
    if let Some(custom) = std::env::var_os(CONFIG_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(custom));
    }
    let home = dirs::home_dir().ok_or(PoseError::HomeNotFound)?;
    Ok(PoseConfig::path_in(&home))
}
