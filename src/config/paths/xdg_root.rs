//! XDG Base Directory utilities for configuration and state files.

use std::path::PathBuf;

/// Get XDG config home directory
///
/// Returns `$XDG_CONFIG_HOME` if set, otherwise defaults to `$HOME/.config`
pub fn config_home() -> Option<PathBuf> {
    if let Ok(xdg_config_home) = std::env::var("XDG_CONFIG_HOME") {
        if !xdg_config_home.is_empty() {
            return Some(PathBuf::from(xdg_config_home));
        }
    }

    std::env::var("HOME")
        .ok()
        .map(|home| PathBuf::from(home).join(".config"))
}

/// Path of the global config file: `$XDG_CONFIG_HOME/codeview/config.toml`
pub fn global_config_path() -> Option<PathBuf> {
    config_home().map(|home| home.join("codeview").join("config.toml"))
}

/// Default log file under the platform state directory.
pub fn default_log_file() -> Option<PathBuf> {
    let project_dirs = directories::ProjectDirs::from("", "codeview", "codeview")?;
    let state_dir = project_dirs
        .state_dir()
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| project_dirs.data_local_dir().to_path_buf());
    Some(state_dir.join("codeview.log"))
}
