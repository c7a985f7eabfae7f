//! Path helpers for the data directory and user-supplied paths.

use std::env;
use std::path::{Path, PathBuf};

const APP_DIR: &str = "dishboard";

/// Returns the dishboard data directory.
///
/// Uses `$XDG_DATA_HOME/dishboard`, then `$HOME/.local/share/dishboard`,
/// and falls back to `./.dishboard` when neither variable is set.
#[must_use]
pub fn get_data_dir() -> PathBuf {
    data_dir_from(env::var_os("XDG_DATA_HOME"), env::var_os("HOME"))
}

fn data_dir_from(xdg_data_home: Option<std::ffi::OsString>, home: Option<std::ffi::OsString>) -> PathBuf {
    if let Some(xdg) = xdg_data_home.filter(|dir| !dir.is_empty()) {
        return PathBuf::from(xdg).join(APP_DIR);
    }
    match home.filter(|dir| !dir.is_empty()) {
        Some(home) => PathBuf::from(home).join(".local").join("share").join(APP_DIR),
        None => PathBuf::from(".").join(format!(".{APP_DIR}")),
    }
}

/// Expands a leading `~` to the home directory.
///
/// Paths without a tilde, and every path when `$HOME` is unset, are
/// returned unchanged.
///
/// # Examples
///
/// ```
/// use dishboard::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("/absolute/path"), "/absolute/path");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    match env::var("HOME") {
        Ok(home) if !home.is_empty() => expand_tilde_with(path, &home),
        _ => path.to_string(),
    }
}

fn expand_tilde_with(path: &str, home: &str) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        format!("{}/{rest}", home.trim_end_matches('/'))
    } else if path == "~" {
        home.to_string()
    } else {
        path.to_string()
    }
}

/// Resolves a configured path: tilde-expanded, and relative paths are placed
/// under `data_dir`.
#[must_use]
pub fn resolve_in_data_dir(path: &str, data_dir: &Path) -> PathBuf {
    let expanded = PathBuf::from(expand_tilde(path));
    if expanded.is_absolute() {
        expanded
    } else {
        data_dir.join(expanded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn xdg_wins_over_home() {
        let dir = data_dir_from(Some("/xdg".into()), Some("/home/cook".into()));
        assert_eq!(dir, PathBuf::from("/xdg/dishboard"));

        let dir = data_dir_from(Some("".into()), Some("/home/cook".into()));
        assert_eq!(dir, PathBuf::from("/home/cook/.local/share/dishboard"));

        let dir = data_dir_from(None, None);
        assert_eq!(dir, PathBuf::from("./.dishboard"));
    }

    #[test]
    fn tilde_expansion() {
        assert_eq!(expand_tilde_with("~/menu.json", "/home/cook"), "/home/cook/menu.json");
        assert_eq!(expand_tilde_with("~", "/home/cook/"), "/home/cook/");
        assert_eq!(expand_tilde_with("~other/x", "/home/cook"), "~other/x");
        assert_eq!(expand_tilde_with("/srv/menu.json", "/home/cook"), "/srv/menu.json");
    }

    #[test]
    fn relative_paths_land_in_data_dir() {
        let data = Path::new("/data/dishboard");
        assert_eq!(resolve_in_data_dir("dishboard.log", data), data.join("dishboard.log"));
        assert_eq!(resolve_in_data_dir("/var/log/d.log", data), PathBuf::from("/var/log/d.log"));
    }
}
