use std::path::Path;

use crate::error::AppError;
use crate::models::AppConfig;

/// Default file name for `retint init`
pub const DEFAULT_CONFIG_FILE: &str = "retint.yaml";

/// Write the default configuration to `path`.
///
/// Refuses to replace an existing file unless `force` is set.
pub fn write_default_config(path: &Path, force: bool) -> Result<(), AppError> {
    if !force && path.exists() {
        return Err(AppError::AlreadyExists {
            path: path.to_path_buf(),
        });
    }

    let yaml = AppConfig::default().to_yaml()?;
    std::fs::write(path, yaml).map_err(|source| AppError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!(path = %path.display(), "Wrote default configuration");
    Ok(())
}
