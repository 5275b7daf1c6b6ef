//! Storage abstraction consumed by the resolver
//!
//! A `TranslationStore` owns the registry of provisioned translations and
//! answers one query shape per method. Implementations must open a fresh
//! connection per call and release it on every exit path; they never cache
//! rows between calls.
//!
//! Every method taking an `Acronym` may assume the resolver has already
//! checked `contains`; a unit that vanished afterwards is reported as
//! `LookupError::StorageUnavailable`.

use crate::acronym::Acronym;
use crate::error::LookupResult;
use crate::types::{
    BookSummary, PassageRange, PassageVerse, TranslationStats, TranslationSummary, VerseRecord,
};
use async_trait::async_trait;

#[async_trait]
pub trait TranslationStore: Send + Sync {
    /// Provisioned acronyms in registry order
    fn acronyms(&self) -> Vec<Acronym>;

    /// Whether the acronym names a provisioned storage unit
    fn contains(&self, acronym: &Acronym) -> bool;

    /// Summary row of every readable storage unit, in registry order
    ///
    /// Units that cannot be read are skipped rather than failing the listing.
    async fn translations(&self) -> LookupResult<Vec<TranslationSummary>>;

    /// Books with at least one verse, ordered by id
    async fn books(&self, acronym: &Acronym) -> LookupResult<Vec<BookSummary>>;

    /// Number of distinct chapters recorded for the book
    async fn chapter_count(&self, acronym: &Acronym, book_id: i64) -> LookupResult<u32>;

    /// Verses of one chapter, ascending by verse number
    async fn verses(
        &self,
        acronym: &Acronym,
        book_id: i64,
        chapter: i64,
    ) -> LookupResult<Vec<VerseRecord>>;

    /// A single verse, or `None` when no row matches
    async fn verse(
        &self,
        acronym: &Acronym,
        book_id: i64,
        chapter: i64,
        verse: i64,
    ) -> LookupResult<Option<VerseRecord>>;

    /// Verses inside an already validated range, in (chapter, verse) order
    async fn passage(
        &self,
        acronym: &Acronym,
        range: &PassageRange,
    ) -> LookupResult<Vec<PassageVerse>>;

    /// Aggregate counts for the translation
    async fn stats(&self, acronym: &Acronym) -> LookupResult<TranslationStats>;
}
