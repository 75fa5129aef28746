use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Store path used when neither a flag nor the config file names one
pub const DEFAULT_DATABASE: &str = "students.db";

#[derive(Debug, Clone, Deserialize, Default)]
pub struct StudentsConfig {
    pub database: Option<String>,
}

pub fn default_config_path() -> PathBuf {
    PathBuf::from("students.toml")
}

/// Read the config file; a missing file is not an error
pub fn load_config(path: Option<&Path>) -> crate::Result<Option<StudentsConfig>> {
    let path = path.map(Path::to_path_buf).unwrap_or_else(default_config_path);
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path)?;
    let config: StudentsConfig = toml::from_str(&contents)?;
    tracing::debug!("Loaded config from {}", path.display());
    Ok(Some(config))
}

/// Flag, then config file, then [`DEFAULT_DATABASE`]
pub fn resolve_database_path(flag: Option<&Path>, config: Option<&StudentsConfig>) -> PathBuf {
    if let Some(path) = flag {
        return path.to_path_buf();
    }
    config
        .and_then(|c| c.database.as_deref())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATABASE))
}

pub fn ensure_db_dir(db_path: &Path) -> crate::Result<()> {
    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}
