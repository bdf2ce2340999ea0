// ═══════════════════════════════════════════════════════════════════════
// Worker configuration — loaded from TOML, every field optional
//
//   threads    = 0        # batch dispatch threads, 0 = one per core
//   log_filter = "info"   # tracing filter, RUST_LOG wins when set
//   auto_load  = true     # load the advisor at start-up
//   pretty     = false    # pretty-print JSON responses
// ═══════════════════════════════════════════════════════════════════════

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkerConfig {
    pub threads: usize,
    pub log_filter: String,
    pub auto_load: bool,
    pub pretty: bool,
}

impl Default for WorkerConfig {
    fn default() -> Self {
        WorkerConfig {
            threads: 0,
            log_filter: "info".to_string(),
            auto_load: true,
            pretty: false,
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

impl WorkerConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load from `path`. A missing file means defaults; any other read or
    /// parse failure is an error.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        match fs::read_to_string(path) {
            Ok(content) => WorkerConfig::from_toml_str(&content),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(WorkerConfig::default()),
            Err(source) => Err(ConfigError::Io { path: path.to_path_buf(), source }),
        }
    }
}
