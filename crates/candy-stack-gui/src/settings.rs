//! Locating and loading the dispenser config file

use std::path::{Path, PathBuf};

use anyhow::Context;
use candy_stack_core::DispenserConfig;
use tracing::{debug, info};

/// Default config file location, `<config dir>/candy-stack/dispenser.toml`
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("candy-stack").join("dispenser.toml"))
}

/// Pick the config to start with.
///
/// An explicit path must load. Without one, the default location is used
/// if a file exists there, and built-in defaults otherwise.
pub fn resolve(explicit: Option<&Path>) -> anyhow::Result<DispenserConfig> {
    let default_path = config_path();
    resolve_from(explicit, default_path.as_deref())
}

fn resolve_from(
    explicit: Option<&Path>,
    fallback: Option<&Path>,
) -> anyhow::Result<DispenserConfig> {
    if let Some(path) = explicit {
        info!(path = %path.display(), "loading config");
        return DispenserConfig::load(path)
            .with_context(|| format!("could not load config from '{}'", path.display()));
    }

    match fallback {
        Some(path) if path.is_file() => {
            info!(path = %path.display(), "loading config");
            DispenserConfig::load(path)
                .with_context(|| format!("could not load config from '{}'", path.display()))
        }
        _ => {
            debug!("no config file, using defaults");
            Ok(DispenserConfig::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_files_gives_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let missing = dir.path().join("dispenser.toml");
        let config = resolve_from(None, Some(&missing)).expect("defaults");
        assert_eq!(config, DispenserConfig::default());
    }

    #[test]
    fn test_fallback_file_is_used() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("dispenser.toml");
        std::fs::write(&path, "[window]\nwidth = 1024\n").expect("write config");

        let config = resolve_from(None, Some(&path)).expect("load fallback");
        assert_eq!(config.window.width, 1024);
    }

    #[test]
    fn test_explicit_path_wins() {
        let dir = tempfile::tempdir().expect("tempdir");
        let explicit = dir.path().join("mine.toml");
        let fallback = dir.path().join("dispenser.toml");
        std::fs::write(&explicit, "[candy]\ngap = 6.0\n").expect("write config");
        std::fs::write(&fallback, "[candy]\ngap = 1.0\n").expect("write config");

        let config = resolve_from(Some(&explicit), Some(&fallback)).expect("load explicit");
        assert_eq!(config.candy.gap, 6.0);
    }

    #[test]
    fn test_missing_explicit_path_is_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let err = resolve_from(Some(&dir.path().join("nope.toml")), None).unwrap_err();
        assert!(err.to_string().contains("could not load config"));
    }

    #[test]
    fn test_invalid_fallback_is_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("dispenser.toml");
        std::fs::write(&path, "[spring]\nmin_extension = 500.0\n").expect("write config");
        assert!(resolve_from(None, Some(&path)).is_err());
    }
}
