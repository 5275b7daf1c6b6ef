//! Typed records for every query shape
//!
//! Rows are mapped into these at the storage boundary; nothing above the
//! storage layer touches untyped rows.

use crate::acronym::Acronym;
use crate::error::{LookupError, LookupResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One provisioned translation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationSummary {
    /// Registry acronym (the identifier clients use in paths)
    pub acronym: String,
    pub title: String,
    pub license: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookSummary {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChapterCount {
    pub chapter_count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerseRecord {
    pub verse: i64,
    pub text: String,
}

/// A verse inside a passage, which may span chapters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassageVerse {
    pub chapter: i64,
    pub verse: i64,
    pub text: String,
}

/// Aggregate counts for one translation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationStats {
    pub books_count: u64,
    /// Distinct (book, chapter) pairs
    pub chapters_count: u64,
    pub verses_count: u64,
}

/// Inclusive verse range within a single book
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassageRange {
    pub book_id: i64,
    pub start_chapter: i64,
    pub start_verse: i64,
    pub end_chapter: i64,
    pub end_verse: i64,
}

impl PassageRange {
    /// Reject ranges whose start lies after their end
    pub fn validate(&self) -> LookupResult<()> {
        if (self.start_chapter, self.start_verse) > (self.end_chapter, self.end_verse) {
            return Err(LookupError::InvalidRequest(format!(
                "Passage start {}:{} is after end {}:{}",
                self.start_chapter, self.start_verse, self.end_chapter, self.end_verse
            )));
        }
        Ok(())
    }

    /// Whether `(chapter, verse)` falls inside the range
    pub fn contains(&self, chapter: i64, verse: i64) -> bool {
        (self.start_chapter, self.start_verse) <= (chapter, verse)
            && (chapter, verse) <= (self.end_chapter, self.end_verse)
    }
}

/// Text of one translation in a side-by-side comparison
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ComparedText {
    /// Single verse; `None` when the translation lacks it
    Verse(Option<VerseRecord>),
    /// Whole chapter
    Chapter(Vec<VerseRecord>),
}

/// Side-by-side result keyed by acronym
pub type Comparison = BTreeMap<Acronym, ComparedText>;
