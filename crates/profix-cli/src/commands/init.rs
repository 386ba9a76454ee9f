use std::path::{Path, PathBuf};

use anyhow::Result;

use profix_core::AppConfig;

/// Write `config` to `path`, or the default location, unless a file is
/// already there. Returns the path and whether it was written.
pub fn run(config: &AppConfig, path: Option<&Path>) -> Result<(PathBuf, bool)> {
    let path = path
        .map(Path::to_path_buf)
        .unwrap_or_else(AppConfig::config_path);
    if path.exists() {
        println!("Config already exists at {}", path.display());
        return Ok((path, false));
    }

    config.save_to(&path)?;
    println!("Wrote default config to {}", path.display());
    Ok((path, true))
}
