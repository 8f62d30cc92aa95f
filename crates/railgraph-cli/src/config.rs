//! Configuration file discovery for the CLI.
//!
//! A `config.toml` is looked up at an explicit path, in the local
//! `railgraph/` directory, and in the platform config directory, in that
//! order. The first file found wins. Without one, [`AppConfig::default`]
//! applies.

use std::{
    fmt, fs, io,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, info};
use thiserror::Error;

use railgraph::{RailgraphError, config::AppConfig};

const CONFIG_FILE_NAME: &str = "config.toml";
const LOCAL_CONFIG_DIR: &str = "railgraph";

/// Failures reading a located configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read configuration file `{}`: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("invalid configuration file `{}`: {message}", .path.display())]
    Parse { path: PathBuf, message: String },
}

impl From<ConfigError> for RailgraphError {
    fn from(err: ConfigError) -> Self {
        RailgraphError::Config(err.to_string())
    }
}

/// Where a configuration file was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigOrigin {
    Explicit,
    Local,
    System,
}

impl fmt::Display for ConfigOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let origin = match self {
            ConfigOrigin::Explicit => "explicit",
            ConfigOrigin::Local => "local",
            ConfigOrigin::System => "system",
        };
        f.write_str(origin)
    }
}

/// Loads the label and output settings for a run.
///
/// # Errors
///
/// Returns [`RailgraphError::Config`] when the selected file cannot be read
/// or is not a valid configuration. An explicit path that does not exist is
/// an error; missing local and system files are not.
pub fn load_config(explicit_path: Option<impl AsRef<Path>>) -> Result<AppConfig, RailgraphError> {
    let Some((origin, path)) = locate(explicit_path) else {
        debug!("No configuration file found, using default configuration");
        return Ok(AppConfig::default());
    };

    info!(origin:% = origin, path = path.display().to_string(); "Loading configuration");
    Ok(read_config(&path)?)
}

fn locate(explicit_path: Option<impl AsRef<Path>>) -> Option<(ConfigOrigin, PathBuf)> {
    if let Some(path) = explicit_path {
        return Some((ConfigOrigin::Explicit, path.as_ref().to_path_buf()));
    }

    let local = Path::new(LOCAL_CONFIG_DIR).join(CONFIG_FILE_NAME);
    if local.is_file() {
        return Some((ConfigOrigin::Local, local));
    }

    let Some(proj_dirs) = ProjectDirs::from("com", "railgraph", "railgraph") else {
        debug!("Could not determine platform-specific config directory");
        return None;
    };

    let system = proj_dirs.config_dir().join(CONFIG_FILE_NAME);
    if system.is_file() {
        return Some((ConfigOrigin::System, system));
    }

    debug!(path = system.display().to_string(); "System configuration file not found");
    None
}

fn read_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    toml::from_str(&content).map_err(|err| ConfigError::Parse {
        path: path.to_path_buf(),
        message: err.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use tempfile::tempdir;

    use railgraph::OutputFormat;

    #[test]
    fn test_explicit_path_wins() {
        let (origin, path) = locate(Some("elsewhere/custom.toml")).unwrap();
        assert_eq!(origin, ConfigOrigin::Explicit);
        assert_eq!(path, PathBuf::from("elsewhere/custom.toml"));
    }

    #[test]
    fn test_explicit_missing_file_is_a_read_error() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("absent.toml");

        let err = read_config(&missing).unwrap_err();
        assert!(matches!(&err, ConfigError::Read { path, .. } if *path == missing));

        let err = load_config(Some(&missing)).unwrap_err();
        assert!(matches!(err, RailgraphError::Config(_)));
        assert!(err.to_string().contains("cannot read configuration file"));
        assert!(err.to_string().contains("absent.toml"));
    }

    #[test]
    fn test_explicit_file_is_loaded() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            r#"
            [label]
            app_name = "railroady"

            [output]
            format = "xmi"
            "#,
        )
        .unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.label().app_name(), "railroady");
        assert_eq!(config.output().format(), OutputFormat::Xmi);
    }

    #[test]
    fn test_invalid_toml_names_the_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        fs::write(&path, "[label\napp_name = 3").unwrap();

        let err = load_config(Some(&path)).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("invalid configuration file"));
        assert!(message.contains("broken.toml"));
    }

    #[test]
    fn test_unknown_output_format_is_a_parse_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[output]\nformat = \"svg\"\n").unwrap();

        let err = read_config(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
