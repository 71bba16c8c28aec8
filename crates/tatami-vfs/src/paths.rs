//! Default platform directories for applications embedding the VFS.
//!
//! Mount sources are whatever the caller picks; these helpers only supply
//! the conventional defaults an application wires up at startup:
//!
//! | Purpose   | Variable           | Default              |
//! |-----------|--------------------|----------------------|
//! | User data | `$XDG_DATA_HOME`   | `~/.local/share/app` |
//! | Config    | `$XDG_CONFIG_HOME` | `~/.config/app`      |
//! | Base      | executable's dir   | current directory    |

use std::path::{Path, PathBuf};

use directories::BaseDirs;

/// Per-application user data directory — the usual write-directory choice.
///
/// Uses the platform data dir (`$XDG_DATA_HOME` on Linux) or falls back to
/// `~/.local/share`, then the temp dir.
pub fn user_dir(app: &str) -> PathBuf {
    BaseDirs::new()
        .map(|d| d.data_dir().to_path_buf())
        .unwrap_or_else(|| home_fallback().join(".local").join("share"))
        .join(app)
}

/// Per-application config directory.
pub fn config_dir(app: &str) -> PathBuf {
    BaseDirs::new()
        .map(|d| d.config_dir().to_path_buf())
        .unwrap_or_else(|| home_fallback().join(".config"))
        .join(app)
}

/// Directory the running executable lives in — the usual base-mount choice
/// for stock assets shipped next to the binary.
///
/// Falls back to the current working directory.
pub fn base_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(Path::to_path_buf))
        .or_else(|| std::env::current_dir().ok())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Fallback home directory when `BaseDirs` fails.
fn home_fallback() -> PathBuf {
    std::env::var("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| std::env::temp_dir())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_dirs_end_with_the_app_name() {
        assert!(user_dir("tatami-demo").ends_with("tatami-demo"));
        assert!(config_dir("tatami-demo").ends_with("tatami-demo"));
    }

    #[test]
    fn base_dir_is_absolute() {
        assert!(base_dir().is_absolute());
    }
}
