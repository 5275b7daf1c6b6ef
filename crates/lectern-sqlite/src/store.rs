//! TranslationStore implementation for SQLite

use crate::connection::UnitConnection;
use crate::error::{SqliteError, SqliteResult};
use crate::registry::TranslationRegistry;
use crate::schema::{TableNames, TRANSLATIONS_TABLE};
use async_trait::async_trait;
use lectern_config::StorageConfig;
use lectern_core::{
    Acronym, BookSummary, LookupError, LookupResult, PassageRange, PassageVerse,
    TranslationStats, TranslationStore, TranslationSummary, VerseRecord,
};
use rusqlite::{params, Connection, OptionalExtension};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::warn;

/// SQLite implementation of TranslationStore
#[derive(Clone)]
pub struct SqliteTranslationStore {
    registry: Arc<TranslationRegistry>,
    busy_timeout_ms: u32,
}

impl SqliteTranslationStore {
    /// Create a store over an already discovered registry
    pub fn new(registry: TranslationRegistry, config: &StorageConfig) -> Self {
        Self {
            registry: Arc::new(registry),
            busy_timeout_ms: config.busy_timeout_ms,
        }
    }

    /// Discover translations under `config.data_dir` and create the store
    pub fn open(config: &StorageConfig) -> SqliteResult<Self> {
        let registry = TranslationRegistry::discover(config)?;
        Ok(Self::new(registry, config))
    }

    pub fn registry(&self) -> &TranslationRegistry {
        &self.registry
    }

    /// Run one query against one storage unit on the blocking pool
    ///
    /// The connection is opened inside the task and dropped when the closure
    /// returns, whatever the outcome.
    async fn query<F, T>(&self, acronym: &Acronym, f: F) -> LookupResult<T>
    where
        F: FnOnce(&Connection, &TableNames) -> SqliteResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let path: PathBuf = self
            .registry
            .get(acronym)
            .ok_or_else(|| {
                LookupError::StorageUnavailable(format!("{acronym}: storage unit not registered"))
            })?
            .to_path_buf();
        let tables = TableNames::for_acronym(acronym);
        let busy_timeout_ms = self.busy_timeout_ms;

        let outcome = tokio::task::spawn_blocking(move || {
            let unit = UnitConnection::open(&path, busy_timeout_ms)?;
            unit.with_connection(|conn| f(conn, &tables))
        })
        .await
        .map_err(|e| SqliteError::Task(e.to_string()))
        .and_then(|result| result);

        outcome.map_err(|e| LookupError::from(e.in_unit(acronym.as_str())))
    }
}

#[async_trait]
impl TranslationStore for SqliteTranslationStore {
    fn acronyms(&self) -> Vec<Acronym> {
        self.registry.acronyms().cloned().collect()
    }

    fn contains(&self, acronym: &Acronym) -> bool {
        self.registry.contains(acronym)
    }

    async fn translations(&self) -> LookupResult<Vec<TranslationSummary>> {
        let mut summaries = Vec::with_capacity(self.registry.len());

        for acronym in self.acronyms() {
            let summary = self
                .query(&acronym, |conn, _| {
                    let sql = format!("SELECT title, license FROM {TRANSLATIONS_TABLE} LIMIT 1");
                    let row = conn
                        .query_row(&sql, [], |row| {
                            Ok((row.get::<_, String>(0)?, row.get::<_, Option<String>>(1)?))
                        })
                        .optional()?;
                    Ok(row)
                })
                .await;

            match summary {
                Ok(Some((title, license))) => summaries.push(TranslationSummary {
                    acronym: acronym.to_string(),
                    title,
                    license,
                }),
                Ok(None) => warn!(%acronym, "Translation table is empty; skipping"),
                Err(e) => warn!(%acronym, error = %e, "Failed to read translation; skipping"),
            }
        }

        Ok(summaries)
    }

    async fn books(&self, acronym: &Acronym) -> LookupResult<Vec<BookSummary>> {
        self.query(acronym, |conn, tables| {
            let sql = format!(
                r#"
                SELECT DISTINCT b.id, b.name
                FROM {books} AS b
                WHERE EXISTS (SELECT 1 FROM {verses} AS v WHERE v.book_id = b.id)
                ORDER BY b.id
                "#,
                books = tables.books,
                verses = tables.verses,
            );
            let mut stmt = conn.prepare(&sql)?;
            let books = stmt
                .query_map([], |row| {
                    Ok(BookSummary {
                        id: row.get(0)?,
                        name: row.get(1)?,
                    })
                })?
                .collect::<Result<Vec<_>, _>>()?;
            Ok(books)
        })
        .await
    }

    async fn chapter_count(&self, acronym: &Acronym, book_id: i64) -> LookupResult<u32> {
        self.query(acronym, move |conn, tables| {
            let sql = format!(
                "SELECT COUNT(DISTINCT chapter) FROM {} WHERE book_id = ?1",
                tables.verses
            );
            let count: u32 = conn.query_row(&sql, params![book_id], |row| row.get(0))?;
            Ok(count)
        })
        .await
    }

    async fn verses(
        &self,
        acronym: &Acronym,
        book_id: i64,
        chapter: i64,
    ) -> LookupResult<Vec<VerseRecord>> {
        self.query(acronym, move |conn, tables| {
            let sql = format!(
                r#"
                SELECT verse, text
                FROM {}
                WHERE book_id = ?1 AND chapter = ?2
                ORDER BY verse
                "#,
                tables.verses
            );
            let mut stmt = conn.prepare(&sql)?;
            let verses = stmt
                .query_map(params![book_id, chapter], row_to_verse)?
                .collect::<Result<Vec<_>, _>>()?;
            Ok(verses)
        })
        .await
    }

    async fn verse(
        &self,
        acronym: &Acronym,
        book_id: i64,
        chapter: i64,
        verse: i64,
    ) -> LookupResult<Option<VerseRecord>> {
        self.query(acronym, move |conn, tables| {
            let sql = format!(
                r#"
                SELECT verse, text
                FROM {}
                WHERE book_id = ?1 AND chapter = ?2 AND verse = ?3
                LIMIT 1
                "#,
                tables.verses
            );
            let record = conn
                .query_row(&sql, params![book_id, chapter, verse], row_to_verse)
                .optional()?;
            Ok(record)
        })
        .await
    }

    async fn passage(
        &self,
        acronym: &Acronym,
        range: &PassageRange,
    ) -> LookupResult<Vec<PassageVerse>> {
        let range = *range;
        self.query(acronym, move |conn, tables| {
            let sql = format!(
                r#"
                SELECT chapter, verse, text
                FROM {}
                WHERE book_id = ?1
                  AND (chapter > ?2 OR (chapter = ?2 AND verse >= ?3))
                  AND (chapter < ?4 OR (chapter = ?4 AND verse <= ?5))
                ORDER BY chapter, verse
                "#,
                tables.verses
            );
            let mut stmt = conn.prepare(&sql)?;
            let verses = stmt
                .query_map(
                    params![
                        range.book_id,
                        range.start_chapter,
                        range.start_verse,
                        range.end_chapter,
                        range.end_verse,
                    ],
                    |row| {
                        Ok(PassageVerse {
                            chapter: row.get(0)?,
                            verse: row.get(1)?,
                            text: row.get(2)?,
                        })
                    },
                )?
                .collect::<Result<Vec<_>, _>>()?;
            Ok(verses)
        })
        .await
    }

    async fn stats(&self, acronym: &Acronym) -> LookupResult<TranslationStats> {
        self.query(acronym, |conn, tables| {
            let sql = format!(
                r#"
                SELECT
                    (SELECT COUNT(*) FROM {books}),
                    (SELECT COUNT(*) FROM (SELECT DISTINCT book_id, chapter FROM {verses})),
                    (SELECT COUNT(*) FROM {verses})
                "#,
                books = tables.books,
                verses = tables.verses,
            );
            let (books, chapters, verses): (i64, i64, i64) =
                conn.query_row(&sql, [], |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)))?;
            Ok(TranslationStats {
                books_count: books as u64,
                chapters_count: chapters as u64,
                verses_count: verses as u64,
            })
        })
        .await
    }
}

fn row_to_verse(row: &rusqlite::Row<'_>) -> rusqlite::Result<VerseRecord> {
    Ok(VerseRecord {
        verse: row.get(0)?,
        text: row.get(1)?,
    })
}
