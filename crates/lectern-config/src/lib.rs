//! # Lectern Configuration
//!
//! TOML configuration for the Lectern scripture API. Every section and every
//! field is optional; missing values fall back to defaults that serve the
//! conventional `bible_databases/formats/sqlite` layout on `127.0.0.1:8000`.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use lectern_config::LecternConfig;
//!
//! let config = LecternConfig::load(None)?;
//! println!("serving {}", config.storage.data_dir.display());
//! # Ok::<(), lectern_config::ConfigError>(())
//! ```

#![warn(missing_docs)]

pub mod components;
mod loader;

pub use components::*;
pub use loader::*;
