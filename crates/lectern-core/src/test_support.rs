//! In-memory `TranslationStore` for tests

use crate::acronym::Acronym;
use crate::error::{LookupError, LookupResult};
use crate::store::TranslationStore;
use crate::types::{
    BookSummary, PassageRange, PassageVerse, TranslationStats, TranslationSummary, VerseRecord,
};
use async_trait::async_trait;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Debug, Clone)]
struct MemoryTranslation {
    title: String,
    license: Option<String>,
    books: Vec<BookSummary>,
    /// (book_id, chapter, verse) -> text
    verses: BTreeMap<(i64, i64, i64), String>,
}

/// Store backed by plain maps, counting every query it answers
#[derive(Debug, Default)]
pub struct MemoryStore {
    translations: BTreeMap<Acronym, MemoryTranslation>,
    failing: bool,
    queries: AtomicUsize,
}

impl MemoryStore {
    /// A store holding only a two-book excerpt of the KJV
    pub fn kjv_only() -> Self {
        Self::default().with_translation(
            "KJV",
            "King James Version",
            Some("Public Domain"),
            &[(1, "Genesis"), (2, "Exodus"), (3, "Leviticus")],
            &[
                (1, 1, 1, "In the beginning God created the heaven and the earth."),
                (1, 1, 2, "And the earth was without form, and void; and darkness was upon the face of the deep."),
                (1, 1, 3, "And God said, Let there be light: and there was light."),
                (1, 2, 1, "Thus the heavens and the earth were finished, and all the host of them."),
                (2, 1, 1, "Now these are the names of the children of Israel, which came into Egypt."),
            ],
        )
    }

    /// KJV plus a one-verse ASV
    pub fn sample() -> Self {
        Self::kjv_only().with_translation(
            "ASV",
            "American Standard Version",
            Some("Public Domain"),
            &[(1, "Genesis")],
            &[(1, 1, 1, "In the beginning God created the heavens and the earth.")],
        )
    }

    pub fn with_translation(
        mut self,
        acronym: &str,
        title: &str,
        license: Option<&str>,
        books: &[(i64, &str)],
        verses: &[(i64, i64, i64, &str)],
    ) -> Self {
        let acronym = Acronym::normalize(acronym).expect("test acronym must be valid");
        let translation = MemoryTranslation {
            title: title.to_string(),
            license: license.map(str::to_string),
            books: books
                .iter()
                .map(|(id, name)| BookSummary {
                    id: *id,
                    name: name.to_string(),
                })
                .collect(),
            verses: verses
                .iter()
                .map(|(b, c, v, text)| ((*b, *c, *v), text.to_string()))
                .collect(),
        };
        self.translations.insert(acronym, translation);
        self
    }

    /// Make every query fail as if the storage unit could not be opened
    pub fn failing(mut self) -> Self {
        self.failing = true;
        self
    }

    /// Number of queries answered so far
    pub fn query_count(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }

    fn open(&self, acronym: &Acronym) -> LookupResult<&MemoryTranslation> {
        self.queries.fetch_add(1, Ordering::SeqCst);
        if self.failing {
            return Err(LookupError::StorageUnavailable(format!(
                "{acronym}: simulated failure"
            )));
        }
        self.translations
            .get(acronym)
            .ok_or_else(|| LookupError::StorageUnavailable(format!("{acronym}: not registered")))
    }
}

#[async_trait]
impl TranslationStore for MemoryStore {
    fn acronyms(&self) -> Vec<Acronym> {
        self.translations.keys().cloned().collect()
    }

    fn contains(&self, acronym: &Acronym) -> bool {
        self.translations.contains_key(acronym)
    }

    async fn translations(&self) -> LookupResult<Vec<TranslationSummary>> {
        let mut summaries = Vec::new();
        for acronym in self.acronyms() {
            if let Ok(t) = self.open(&acronym) {
                summaries.push(TranslationSummary {
                    acronym: acronym.to_string(),
                    title: t.title.clone(),
                    license: t.license.clone(),
                });
            }
        }
        Ok(summaries)
    }

    async fn books(&self, acronym: &Acronym) -> LookupResult<Vec<BookSummary>> {
        let t = self.open(acronym)?;
        let with_verses: BTreeSet<i64> = t.verses.keys().map(|(b, _, _)| *b).collect();
        let mut books: Vec<BookSummary> = t
            .books
            .iter()
            .filter(|b| with_verses.contains(&b.id))
            .cloned()
            .collect();
        books.sort_by_key(|b| b.id);
        Ok(books)
    }

    async fn chapter_count(&self, acronym: &Acronym, book_id: i64) -> LookupResult<u32> {
        let t = self.open(acronym)?;
        let chapters: BTreeSet<i64> = t
            .verses
            .keys()
            .filter(|(b, _, _)| *b == book_id)
            .map(|(_, c, _)| *c)
            .collect();
        Ok(chapters.len() as u32)
    }

    async fn verses(
        &self,
        acronym: &Acronym,
        book_id: i64,
        chapter: i64,
    ) -> LookupResult<Vec<VerseRecord>> {
        let t = self.open(acronym)?;
        Ok(t.verses
            .iter()
            .filter(|((b, c, _), _)| *b == book_id && *c == chapter)
            .map(|((_, _, v), text)| VerseRecord {
                verse: *v,
                text: text.clone(),
            })
            .collect())
    }

    async fn verse(
        &self,
        acronym: &Acronym,
        book_id: i64,
        chapter: i64,
        verse: i64,
    ) -> LookupResult<Option<VerseRecord>> {
        let t = self.open(acronym)?;
        Ok(t.verses
            .get(&(book_id, chapter, verse))
            .map(|text| VerseRecord {
                verse,
                text: text.clone(),
            }))
    }

    async fn passage(
        &self,
        acronym: &Acronym,
        range: &PassageRange,
    ) -> LookupResult<Vec<PassageVerse>> {
        let t = self.open(acronym)?;
        Ok(t.verses
            .iter()
            .filter(|((b, c, v), _)| *b == range.book_id && range.contains(*c, *v))
            .map(|((_, c, v), text)| PassageVerse {
                chapter: *c,
                verse: *v,
                text: text.clone(),
            })
            .collect())
    }

    async fn stats(&self, acronym: &Acronym) -> LookupResult<TranslationStats> {
        let t = self.open(acronym)?;
        let chapters: BTreeSet<(i64, i64)> = t.verses.keys().map(|(b, c, _)| (*b, *c)).collect();
        Ok(TranslationStats {
            books_count: t.books.len() as u64,
            chapters_count: chapters.len() as u64,
            verses_count: t.verses.len() as u64,
        })
    }
}
