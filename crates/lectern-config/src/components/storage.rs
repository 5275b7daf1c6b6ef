//! Storage configuration
//!
//! Where the per-translation database files live and how they are opened.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Storage configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory holding one database file per translation
    pub data_dir: PathBuf,
    /// File extension of translation databases, without the dot
    pub extension: String,
    /// File stems that are not translations (compared case-insensitively)
    pub exclude: Vec<String>,
    /// SQLite busy timeout applied to every connection
    pub busy_timeout_ms: u32,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("bible_databases/formats/sqlite"),
            extension: "db".to_string(),
            exclude: vec!["TRANSLATIONS".to_string()],
            busy_timeout_ms: 5000,
        }
    }
}
