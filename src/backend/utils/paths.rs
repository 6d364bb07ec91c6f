//! Path utilities.

use std::path::PathBuf;

use anyhow::Result;

/// Name of the application data directory.
const APP_DIR: &str = "AIStudio";

/// Overrides the application directory, mostly for tests and portable installs.
pub const HOME_ENV: &str = "AI_STUDIO_HOME";

const CONFIG_FILE: &str = "config.json";
const SESSION_FILE: &str = "session.json";

/// Get the base application directory (`AIStudio`).
#[inline]
pub fn get_app_dir() -> Result<PathBuf> {
    resolve_app_dir(|key| std::env::var(key).ok())
}

/// Resolves the application directory from environment lookups.
fn resolve_app_dir(lookup: impl Fn(&str) -> Option<String>) -> Result<PathBuf> {
    if let Some(custom) = lookup(HOME_ENV)
        && !custom.trim().is_empty()
    {
        return Ok(PathBuf::from(custom));
    }

    let base_dir = match std::env::consts::OS {
        "windows" => lookup("APPDATA")
            .map(PathBuf::from)
            .ok_or_else(|| anyhow::anyhow!("Could not determine AppData directory"))?,
        "macos" => lookup("HOME")
            .map(|home| PathBuf::from(home).join("Library/Application Support"))
            .ok_or_else(|| anyhow::anyhow!("Could not determine home directory"))?,
        _ => lookup("HOME")
            .map(|home| PathBuf::from(home).join(".config"))
            .ok_or_else(|| anyhow::anyhow!("Could not determine home directory"))?,
    };
    Ok(base_dir.join(APP_DIR))
}

/// `file` inside the app directory, or under a relative `AIStudio` when no
/// directory can be resolved.
fn app_file(dir: Result<PathBuf>, file: &str) -> PathBuf {
    dir.unwrap_or_else(|_| PathBuf::from(APP_DIR)).join(file)
}

/// Location of `config.json`.
pub fn get_config_path() -> PathBuf {
    app_file(get_app_dir(), CONFIG_FILE)
}

/// Location of the persisted session.
pub fn get_session_path() -> PathBuf {
    app_file(get_app_dir(), SESSION_FILE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn env<'a>(vars: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |key: &str| {
            vars.iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.to_string())
        }
    }

    #[test]
    fn home_override_wins() {
        let vars = [
            (HOME_ENV, "/opt/studio"),
            ("HOME", "/home/u"),
            ("APPDATA", "/appdata"),
        ];
        let dir = resolve_app_dir(env(&vars)).unwrap();
        assert_eq!(dir, PathBuf::from("/opt/studio"));
    }

    #[test]
    fn blank_override_falls_back_to_platform_dir() {
        let vars = [(HOME_ENV, "  "), ("HOME", "/home/u"), ("APPDATA", "/appdata")];
        let dir = resolve_app_dir(env(&vars)).unwrap();
        assert!(dir.ends_with(APP_DIR));
        assert!(dir.starts_with("/home/u") || dir.starts_with("/appdata"));
    }

    #[test]
    fn missing_platform_dir_is_an_error() {
        assert!(resolve_app_dir(env(&[])).is_err());
    }

    #[test]
    fn files_live_in_app_dir() {
        let dir = Ok(PathBuf::from("/opt/studio"));
        assert_eq!(
            app_file(dir, CONFIG_FILE),
            Path::new("/opt/studio").join("config.json")
        );
        assert_eq!(
            app_file(Err(anyhow::anyhow!("no home")), SESSION_FILE),
            Path::new(APP_DIR).join("session.json")
        );
    }

    #[test]
    fn public_helpers_name_their_files() {
        assert!(get_config_path().ends_with("config.json"));
        assert!(get_session_path().ends_with("session.json"));
    }
}
