use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};
use std::path::Path;

/// Handle the `init` command
///
/// Writes a configuration file with default values at `path`. A `--data-dir`
/// given on the command line is stored as the data directory. An existing
/// file is only replaced with `--force`.
pub fn handle(path: &Path, data_dir: Option<&str>, force: bool) -> AppResult<()> {
    if path.exists() && !force {
        warning(format!(
            "Configuration file already exists: {} (use --force to overwrite)",
            path.display()
        ));
        return Ok(());
    }

    let mut cfg = Config::default();
    if let Some(dir) = data_dir {
        cfg.data_dir = dir.to_string();
    }
    cfg.save_to(path)?;

    success(format!("Config file: {}", path.display()));
    success(format!("Data directory: {}", cfg.data_dir));
    Ok(())
}
