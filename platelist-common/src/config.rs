//! Configuration loading and root folder resolution

use crate::{Error, Result};
use std::path::{Path, PathBuf};

/// Database file name inside the root folder
pub const DB_FILE_NAME: &str = "platelist.db";

/// Root folder resolution priority order:
/// 1. Command-line argument (highest priority)
/// 2. PLATELIST_ROOT_FOLDER environment variable
/// 3. TOML config file (`root_folder` key)
/// 4. OS-dependent compiled default (fallback)
pub fn resolve_root_folder(cli_arg: Option<&Path>) -> PathBuf {
    // Priority 1: Command-line argument
    if let Some(path) = cli_arg {
        return path.to_path_buf();
    }

    // Priority 2: Environment variable
    if let Ok(path) = std::env::var("PLATELIST_ROOT_FOLDER") {
        return PathBuf::from(path);
    }

    // Priority 3: TOML config file
    if let Ok(config_path) = find_config_file() {
        if let Ok(content) = std::fs::read_to_string(&config_path) {
            if let Ok(config) = toml::from_str::<toml::Value>(&content) {
                if let Some(root_folder) = config.get("root_folder").and_then(|v| v.as_str()) {
                    return PathBuf::from(root_folder);
                }
            }
        }
    }

    // Priority 4: OS-dependent compiled default
    default_root_folder()
}

/// Locate the platform config file, if one exists
fn find_config_file() -> Result<PathBuf> {
    let user_config = dirs::config_dir().map(|d| d.join("platelist").join("config.toml"));

    if let Some(path) = user_config {
        if path.exists() {
            return Ok(path);
        }
    }

    let system_config = PathBuf::from("/etc/platelist/config.toml");
    if system_config.exists() {
        return Ok(system_config);
    }

    Err(Error::Config("No config file found".to_string()))
}

/// Default root folder when nothing else is configured
fn default_root_folder() -> PathBuf {
    dirs::data_dir()
        .map(|d| d.join("platelist"))
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Create the root folder if it does not exist yet
pub fn ensure_root_folder(root: &Path) -> Result<()> {
    std::fs::create_dir_all(root)?;
    Ok(())
}

/// Path of the SQLite database inside the root folder
pub fn database_path(root: &Path) -> PathBuf {
    root.join(DB_FILE_NAME)
}
