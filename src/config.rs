use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

// =============================================================================
// Vendoring command defaults
// =============================================================================

/// Default Go toolchain executable
pub const DEFAULT_GO_COMMAND: &str = "go";

/// Arguments making the toolchain vendor dependencies and report each module
pub const DEFAULT_VENDOR_ARGS: [&str; 3] = ["mod", "vendor", "-v"];

/// Default RPM dependency generator namespace: `bundled(golang(...))`
pub const DEFAULT_PROVIDES_LANG: &str = "golang";

/// Configuration file name inside the config directory
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Tool configuration structure
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    /// Executable used to run the vendoring command
    pub go_command: String,
    /// Arguments passed to `go_command`
    pub vendor_args: Vec<String>,
    /// Namespace inside `bundled(...)`
    pub provides_lang: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            go_command: DEFAULT_GO_COMMAND.to_string(),
            vendor_args: DEFAULT_VENDOR_ARGS.iter().map(|s| s.to_string()).collect(),
            provides_lang: DEFAULT_PROVIDES_LANG.to_string(),
        }
    }
}

/// Where vendoring output is read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Run the vendoring command
    GoVendor,
    /// Read a captured report from stdin (`--input -`)
    Stdin,
    /// Read a captured report from a file
    File(PathBuf),
}

impl InputSource {
    /// Interpret the `--input` argument; no argument means running the toolchain.
    pub fn from_arg(arg: Option<&Path>) -> Self {
        match arg {
            None => InputSource::GoVendor,
            Some(path) if path.as_os_str() == "-" => InputSource::Stdin,
            Some(path) => InputSource::File(path.to_path_buf()),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl Config {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Replace fields given on the command line.
    pub fn with_overrides(mut self, go_command: Option<String>, provides_lang: Option<String>) -> Self {
        if let Some(go_command) = go_command {
            self.go_command = go_command;
        }
        if let Some(provides_lang) = provides_lang {
            self.provides_lang = provides_lang;
        }
        self
    }

    /// Load configuration from `explicit` if given, otherwise from the
    /// default location if a file exists there, otherwise use defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => {
                let path = config_path();
                if path.is_file() {
                    Self::from_file(&path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }
}

/// Returns the path to the config directory for gomod2rpmdeps.
/// Uses $XDG_CONFIG_HOME/gomod2rpmdeps if XDG_CONFIG_HOME is set,
/// otherwise falls back to ~/.config/gomod2rpmdeps,
/// or ./gomod2rpmdeps if neither is available.
pub fn config_dir() -> PathBuf {
    config_dir_with_env(std::env::var("XDG_CONFIG_HOME").ok(), dirs::home_dir())
}

/// Returns the path to the default config file.
pub fn config_path() -> PathBuf {
    config_dir().join(CONFIG_FILE_NAME)
}

fn config_dir_with_env(xdg_config_home: Option<String>, home_dir: Option<PathBuf>) -> PathBuf {
    let config_dir = xdg_config_home
        .filter(|dir| !dir.is_empty())
        .map(PathBuf::from)
        .or_else(|| home_dir.map(|home| home.join(".config")))
        .unwrap_or_else(|| PathBuf::from("."));

    config_dir.join("gomod2rpmdeps")
}
