use serde::Deserialize;
use std::path::{Path, PathBuf};

// =============================================================================
// Probe-related constants
// =============================================================================

/// Timeout for each probe, connect and response alike (10 seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// User-Agent sent with every probe
pub const USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:54.0) Gecko/20100101 Firefox/54.0";

pub const ACCEPT: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8";

pub const ACCEPT_LANGUAGE: &str = "en-US,en;q=0.5";

/// Static resources whose timestamps track the installed release, in probe order
pub const STATIC_RESOURCES: [&str; 7] = [
    "global-protect/login.esp",
    "global-protect/portal/css/login.css",
    "global-protect/portal/images/favicon.ico",
    "global-protect/portal/images/logo-pan-48525a.svg",
    "php/login.php",
    "login/images/favicon.ico",
    "js/Pan.js",
];

/// File name of the version table
pub const VERSION_TABLE_FILE_NAME: &str = "version-table.txt";

/// Scan configuration structure
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct ScanConfig {
    /// Per-probe timeout in seconds
    pub timeout_secs: u64,
    pub user_agent: String,
    /// Resource paths relative to the target, probed in order
    pub resources: Vec<String>,
    /// Version table location; searched for when unset
    pub version_table: Option<PathBuf>,
    /// Skip certificate verification (appliances mostly serve self-signed certs)
    pub accept_invalid_certs: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: USER_AGENT.to_string(),
            resources: STATIC_RESOURCES.iter().map(|r| r.to_string()).collect(),
            version_table: None,
            accept_invalid_certs: true,
        }
    }
}

/// Error type for configuration loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config {path}: {source}")]
    Invalid {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Load a JSON scan configuration; missing fields take their defaults
pub fn load_config(path: &Path) -> Result<ScanConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| ConfigError::Invalid {
        path: path.display().to_string(),
        source,
    })
}

/// Returns the path to the data directory for panos-scanner.
/// Uses $XDG_DATA_HOME/panos-scanner if XDG_DATA_HOME is set,
/// otherwise falls back to ~/.local/share/panos-scanner,
/// or ./panos-scanner if neither is available.
pub fn data_dir() -> PathBuf {
    data_dir_with_env(std::env::var("XDG_DATA_HOME").ok(), dirs::home_dir())
}

/// Places a version table is looked for, most specific first:
/// the working directory, then the data directory.
pub fn version_table_candidates() -> Vec<PathBuf> {
    vec![
        PathBuf::from(VERSION_TABLE_FILE_NAME),
        data_dir().join(VERSION_TABLE_FILE_NAME),
    ]
}

/// Returns the first existing candidate, or the first candidate when none
/// exists so that the load error names the expected location.
pub fn find_version_table(candidates: &[PathBuf]) -> PathBuf {
    candidates
        .iter()
        .find(|path| path.is_file())
        .or_else(|| candidates.first())
        .cloned()
        .unwrap_or_else(|| PathBuf::from(VERSION_TABLE_FILE_NAME))
}

fn data_dir_with_env(xdg_data_home: Option<String>, home_dir: Option<PathBuf>) -> PathBuf {
    let data_dir = xdg_data_home
        .map(PathBuf::from)
        .or_else(|| home_dir.map(|home| home.join(".local/share")))
        .unwrap_or_else(|| PathBuf::from("."));

    data_dir.join("panos-scanner")
}
