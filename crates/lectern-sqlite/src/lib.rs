//! SQLite storage backend for Lectern
//!
//! Each translation lives in its own SQLite file, `<ACRONYM>.db`, holding a
//! one-row `translations` table plus `<ACRONYM>_books` and `<ACRONYM>_verses`.
//!
//! ## Features
//!
//! - **TranslationRegistry**: one directory scan at startup, acronym → file
//! - **Read-only connections**: opened per request, closed on drop
//! - **Bound parameters**: only the registry acronym is ever spliced into SQL
//!
//! ## Usage
//!
//! ```rust,ignore
//! use lectern_config::StorageConfig;
//! use lectern_sqlite::SqliteTranslationStore;
//!
//! let store = SqliteTranslationStore::open(&StorageConfig::default())?;
//! let resolver = lectern_core::LookupResolver::new(std::sync::Arc::new(store));
//! ```

pub mod connection;
pub mod error;
pub mod registry;
pub mod schema;
pub mod store;

#[cfg(any(test, feature = "test-utils"))]
pub mod fixtures;

// Re-exports
pub use connection::UnitConnection;
pub use error::{SqliteError, SqliteResult};
pub use registry::TranslationRegistry;
pub use store::SqliteTranslationStore;
