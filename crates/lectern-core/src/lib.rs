//! Core lookup layer for Lectern
//!
//! Lectern serves pre-provisioned Bible translations, one database per
//! translation. This crate owns everything that does not depend on a concrete
//! storage engine or HTTP framework:
//!
//! - **Records**: typed shapes for every query (`TranslationSummary`,
//!   `BookSummary`, `VerseRecord`, ...)
//! - **Acronyms**: normalization of translation identifiers taken from paths
//! - **TranslationStore**: the query capability a storage backend provides
//! - **LookupResolver**: translation validation and the not-found policy
//!
//! ## Usage
//!
//! ```rust,ignore
//! use lectern_core::LookupResolver;
//!
//! let resolver = LookupResolver::new(store);
//! let verse = resolver.get_verse("kjv", 1, 1, 1).await?;
//! assert_eq!(verse.verse, 1);
//! ```

pub mod acronym;
pub mod error;
pub mod resolver;
pub mod store;
pub mod types;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_support;

pub use acronym::Acronym;
pub use error::{LookupError, LookupResult};
pub use resolver::LookupResolver;
pub use store::TranslationStore;
pub use types::{
    BookSummary, ChapterCount, Comparison, ComparedText, PassageRange, PassageVerse,
    TranslationStats, TranslationSummary, VerseRecord,
};
