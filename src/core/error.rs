// Error Types
// Failures surfaced while loading widget configuration

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or converting tabs configuration.
///
/// The widget itself never fails at runtime: a missing tab box or an empty
/// child set degrades to "no highlight". Only the configuration surface
/// reports errors.
#[derive(Error, Debug)]
pub enum TabsError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid option '{option}': {reason}")]
    InvalidOption { option: String, reason: String },
}

pub type Result<T> = std::result::Result<T, TabsError>;
