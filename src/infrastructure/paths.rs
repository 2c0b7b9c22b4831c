//! Path resolution for the configuration file.
//!
//! The default location follows the XDG base directory convention:
//! `$XDG_CONFIG_HOME/algoscope/config.toml`, falling back to
//! `~/.config/algoscope/config.toml`.

use std::env;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

const APP_DIR: &str = "algoscope";
const CONFIG_FILE: &str = "config.toml";

/// Returns the default configuration file path.
///
/// Returns `None` when neither `XDG_CONFIG_HOME` nor `HOME` is set. The file
/// itself may not exist.
#[must_use]
pub fn config_file() -> Option<PathBuf> {
    resolve_config_file(
        env::var_os("XDG_CONFIG_HOME").as_deref(),
        env::var_os("HOME").as_deref(),
    )
}

fn resolve_config_file(xdg_config_home: Option<&OsStr>, home: Option<&OsStr>) -> Option<PathBuf> {
    let base = match xdg_config_home.filter(|dir| !dir.is_empty()) {
        Some(dir) => PathBuf::from(dir),
        None => Path::new(home.filter(|dir| !dir.is_empty())?).join(".config"),
    };
    Some(base.join(APP_DIR).join(CONFIG_FILE))
}

/// Expands a leading `~` to the user's home directory.
///
/// Paths without a leading `~`, or any path when `HOME` is unset, are
/// returned unchanged.
///
/// # Examples
///
/// ```
/// use algoscope::infrastructure::expand_tilde;
/// use std::path::PathBuf;
///
/// assert_eq!(expand_tilde("/absolute/path"), PathBuf::from("/absolute/path"));
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> PathBuf {
    expand_with_home(path, env::var_os("HOME").as_deref())
}

fn expand_with_home(path: &str, home: Option<&OsStr>) -> PathBuf {
    let Some(home) = home else {
        return PathBuf::from(path);
    };
    if path == "~" {
        PathBuf::from(home)
    } else if let Some(rest) = path.strip_prefix("~/") {
        Path::new(home).join(rest)
    } else {
        PathBuf::from(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn xdg_config_home_wins_over_home() {
        let path = resolve_config_file(Some(OsStr::new("/xdg")), Some(OsStr::new("/home/u")));
        assert_eq!(path, Some(PathBuf::from("/xdg/algoscope/config.toml")));
    }

    #[test]
    fn falls_back_to_dot_config() {
        let path = resolve_config_file(Some(OsStr::new("")), Some(OsStr::new("/home/u")));
        assert_eq!(path, Some(PathBuf::from("/home/u/.config/algoscope/config.toml")));
        assert_eq!(resolve_config_file(None, None), None);
    }

    #[test]
    fn tilde_expansion() {
        let home = Some(OsStr::new("/home/u"));
        assert_eq!(expand_with_home("~/cfg.toml", home), PathBuf::from("/home/u/cfg.toml"));
        assert_eq!(expand_with_home("~", home), PathBuf::from("/home/u"));
        assert_eq!(expand_with_home("~other/x", home), PathBuf::from("~other/x"));
        assert_eq!(expand_with_home("~/x", None), PathBuf::from("~/x"));
    }
}
