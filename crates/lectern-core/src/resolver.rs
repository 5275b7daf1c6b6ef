//! Four-level lookup resolution
//!
//! The resolver turns raw path parameters into store queries:
//!
//! 1. Normalize the translation acronym and check it against the registry.
//!    An unknown acronym short-circuits with `TranslationNotFound` before any
//!    storage unit is opened.
//! 2. Issue the single query for the requested level.
//! 3. Apply the not-found policy: list-shaped results may be empty, a single
//!    verse may not.

use crate::acronym::Acronym;
use crate::error::{LookupError, LookupResult};
use crate::store::TranslationStore;
use crate::types::{
    BookSummary, ChapterCount, Comparison, ComparedText, PassageRange, PassageVerse,
    TranslationStats, TranslationSummary, VerseRecord,
};
use std::sync::Arc;
use tracing::debug;

/// Resolves lookups against a read-only translation store
#[derive(Clone)]
pub struct LookupResolver {
    store: Arc<dyn TranslationStore>,
}

impl LookupResolver {
    pub fn new(store: Arc<dyn TranslationStore>) -> Self {
        Self { store }
    }

    /// Number of provisioned translations
    pub fn translation_count(&self) -> usize {
        self.store.acronyms().len()
    }

    /// Validate a raw acronym against the registry
    pub fn resolve_translation(&self, raw: &str) -> LookupResult<Acronym> {
        match Acronym::normalize(raw) {
            Some(acronym) if self.store.contains(&acronym) => Ok(acronym),
            _ => Err(LookupError::TranslationNotFound(raw.trim().to_string())),
        }
    }

    pub async fn list_translations(&self) -> LookupResult<Vec<TranslationSummary>> {
        self.store.translations().await
    }

    pub async fn list_books(&self, translation: &str) -> LookupResult<Vec<BookSummary>> {
        let acronym = self.resolve_translation(translation)?;
        debug!(%acronym, "Listing books");
        self.store.books(&acronym).await
    }

    /// Zero chapters is reported for a book with no verse rows
    pub async fn count_chapters(
        &self,
        translation: &str,
        book_id: i64,
    ) -> LookupResult<ChapterCount> {
        let acronym = self.resolve_translation(translation)?;
        debug!(%acronym, book_id, "Counting chapters");
        let chapter_count = self.store.chapter_count(&acronym, book_id).await?;
        Ok(ChapterCount { chapter_count })
    }

    pub async fn list_verses(
        &self,
        translation: &str,
        book_id: i64,
        chapter: i64,
    ) -> LookupResult<Vec<VerseRecord>> {
        let acronym = self.resolve_translation(translation)?;
        debug!(%acronym, book_id, chapter, "Listing verses");
        self.store.verses(&acronym, book_id, chapter).await
    }

    pub async fn get_verse(
        &self,
        translation: &str,
        book_id: i64,
        chapter: i64,
        verse: i64,
    ) -> LookupResult<VerseRecord> {
        let acronym = self.resolve_translation(translation)?;
        debug!(%acronym, book_id, chapter, verse, "Fetching verse");
        self.store
            .verse(&acronym, book_id, chapter, verse)
            .await?
            .ok_or_else(|| LookupError::VerseNotFound {
                translation: acronym.to_string(),
                book_id,
                chapter,
                verse,
            })
    }

    pub async fn get_passage(
        &self,
        translation: &str,
        range: PassageRange,
    ) -> LookupResult<Vec<PassageVerse>> {
        let acronym = self.resolve_translation(translation)?;
        range.validate()?;
        debug!(%acronym, ?range, "Fetching passage");
        self.store.passage(&acronym, &range).await
    }

    pub async fn translation_stats(&self, translation: &str) -> LookupResult<TranslationStats> {
        let acronym = self.resolve_translation(translation)?;
        self.store.stats(&acronym).await
    }

    /// Side-by-side text from two translations
    ///
    /// Both acronyms are validated before either store is queried. With a verse
    /// number a translation lacking that verse maps to `null`; without one the
    /// whole chapter is returned per translation.
    pub async fn compare(
        &self,
        first: &str,
        second: &str,
        book_id: i64,
        chapter: i64,
        verse: Option<i64>,
    ) -> LookupResult<Comparison> {
        let acronyms = [
            self.resolve_translation(first)?,
            self.resolve_translation(second)?,
        ];

        let mut comparison = Comparison::new();
        for acronym in acronyms {
            if comparison.contains_key(&acronym) {
                continue;
            }
            let text = match verse {
                Some(verse) => ComparedText::Verse(
                    self.store.verse(&acronym, book_id, chapter, verse).await?,
                ),
                None => ComparedText::Chapter(self.store.verses(&acronym, book_id, chapter).await?),
            };
            comparison.insert(acronym, text);
        }
        Ok(comparison)
    }
}
