// src/core/paths.rs

use crate::constants::{PREFERENCE_DOTFILE, PREFERENCE_FILENAME};
use lazy_static::lazy_static;
use std::path::{Path, PathBuf};
use thiserror::Error;

lazy_static! {
    static ref PREFERENCE_PATH: Option<PathBuf> =
        preference_path_from(dirs::config_dir(), dirs::home_dir());
}

/// Errors raised while resolving paths.
#[derive(Error, Debug)]
pub enum PathError {
    /// Neither a config directory nor a home directory is known.
    #[error("Could not find a config directory or a home directory for this user.")]
    NoConfigLocation,
    /// `~` or an environment variable in the path could not be expanded.
    #[error("Could not expand path '{path}': {reason}")]
    Expansion {
        /// The path as given.
        path: String,
        /// What the expansion reported.
        reason: String,
    },
    /// The current directory needed to absolutize the path is unavailable.
    #[error("Could not resolve '{path}' to an absolute path: {source}")]
    Absolute {
        /// The path as given.
        path: String,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// Returns the path of the preference file for the current user.
///
/// Prefers `<config dir>/artisan-runner.json` and falls back to
/// `~/.artisan-runner.json`. Computed once per process.
pub fn get_preference_path() -> Result<PathBuf, PathError> {
    PREFERENCE_PATH.clone().ok_or(PathError::NoConfigLocation)
}

fn preference_path_from(config_dir: Option<PathBuf>, home_dir: Option<PathBuf>) -> Option<PathBuf> {
    match (config_dir, home_dir) {
        (Some(dir), _) => Some(dir.join(PREFERENCE_FILENAME)),
        (None, Some(home)) => Some(home.join(PREFERENCE_DOTFILE)),
        (None, None) => None,
    }
}

/// Expands `~` and environment variables in `raw`, then makes it absolute
/// relative to the current directory. The directory does not need to exist.
pub fn resolve_project_path(raw: &str) -> Result<PathBuf, PathError> {
    let expanded = shellexpand::full(raw).map_err(|e| PathError::Expansion {
        path: raw.to_string(),
        reason: e.to_string(),
    })?;
    let absolute = std::path::absolute(Path::new(expanded.as_ref())).map_err(|e| {
        PathError::Absolute {
            path: raw.to_string(),
            source: e,
        }
    })?;
    Ok(dunce::simplified(&absolute).to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preference_path_prefers_config_dir() {
        let path = preference_path_from(
            Some(PathBuf::from("/cfg")),
            Some(PathBuf::from("/home/me")),
        );
        assert_eq!(path, Some(PathBuf::from("/cfg").join(PREFERENCE_FILENAME)));
    }

    #[test]
    fn test_preference_path_falls_back_to_home_dotfile() {
        let path = preference_path_from(None, Some(PathBuf::from("/home/me")));
        assert_eq!(path, Some(PathBuf::from("/home/me").join(PREFERENCE_DOTFILE)));
    }

    #[test]
    fn test_preference_path_fails_without_any_location() {
        assert_eq!(preference_path_from(None, None), None);
    }

    #[test]
    fn test_resolve_project_path_is_absolute() {
        let resolved = resolve_project_path(".").unwrap();
        assert!(resolved.is_absolute());
    }

    #[test]
    fn test_resolve_project_path_accepts_missing_directory() {
        let resolved = resolve_project_path("definitely/not/here").unwrap();
        assert!(resolved.is_absolute());
        assert!(resolved.ends_with("definitely/not/here"));
    }

    #[test]
    fn test_resolve_project_path_reports_unknown_variable() {
        let err = resolve_project_path("$ARTISAN_RUNNER_SURELY_UNSET_VAR/app").unwrap_err();
        assert!(matches!(err, PathError::Expansion { .. }));
    }
}
