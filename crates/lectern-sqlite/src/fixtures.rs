//! Fixture translation databases for tests
//!
//! Writes files in the provisioned layout: a one-row `translations` table and
//! acronym-prefixed books and verses tables.

use crate::error::SqliteResult;
use crate::schema::{quote_identifier, TRANSLATIONS_TABLE};
use rusqlite::{params, Connection};
use std::path::{Path, PathBuf};

/// Contents of one fixture database
#[derive(Debug, Clone)]
pub struct FixtureTranslation {
    pub acronym: String,
    pub title: String,
    pub license: Option<String>,
    pub books: Vec<(i64, String)>,
    /// (book_id, chapter, verse, text)
    pub verses: Vec<(i64, i64, i64, String)>,
}

impl FixtureTranslation {
    pub fn new(acronym: &str, title: &str, license: Option<&str>) -> Self {
        Self {
            acronym: acronym.to_string(),
            title: title.to_string(),
            license: license.map(str::to_string),
            books: Vec::new(),
            verses: Vec::new(),
        }
    }

    pub fn book(mut self, id: i64, name: &str) -> Self {
        self.books.push((id, name.to_string()));
        self
    }

    pub fn verse(mut self, book_id: i64, chapter: i64, verse: i64, text: &str) -> Self {
        self.verses.push((book_id, chapter, verse, text.to_string()));
        self
    }

    /// Opening of Genesis and Exodus; Leviticus is listed without verses
    pub fn kjv_excerpt() -> Self {
        Self::new("KJV", "King James Version", Some("Public Domain"))
            .book(1, "Genesis")
            .book(2, "Exodus")
            .book(3, "Leviticus")
            // Inserted out of order on purpose
            .verse(1, 1, 3, "And God said, Let there be light: and there was light.")
            .verse(1, 1, 1, "In the beginning God created the heaven and the earth.")
            .verse(1, 1, 2, "And the earth was without form, and void; and darkness was upon the face of the deep. And the Spirit of God moved upon the face of the waters.")
            .verse(1, 2, 1, "Thus the heavens and the earth were finished, and all the host of them.")
            .verse(1, 2, 2, "And on the seventh day God ended his work which he had made; and he rested on the seventh day from all his work which he had made.")
            .verse(1, 3, 1, "Now the serpent was more subtil than any beast of the field which the LORD God had made.")
            .verse(2, 1, 1, "Now these are the names of the children of Israel, which came into Egypt; every man and his household came with Jacob.")
    }

    pub fn asv_excerpt() -> Self {
        Self::new("ASV", "American Standard Version", Some("Public Domain"))
            .book(1, "Genesis")
            .verse(1, 1, 1, "In the beginning God created the heavens and the earth.")
    }

    /// Write `<ACRONYM>.db` into `dir`
    pub fn write(&self, dir: &Path) -> SqliteResult<PathBuf> {
        self.write_as(dir, &format!("{}.db", self.acronym))
    }

    /// Write the fixture under an arbitrary file name
    pub fn write_as(&self, dir: &Path, file_name: &str) -> SqliteResult<PathBuf> {
        let path = dir.join(file_name);
        let conn = Connection::open(&path)?;

        let books = quote_identifier(&format!("{}_books", self.acronym));
        let verses = quote_identifier(&format!("{}_verses", self.acronym));
        conn.execute_batch(&format!(
            r#"
            CREATE TABLE {TRANSLATIONS_TABLE} (translation TEXT, title TEXT, license TEXT);
            CREATE TABLE {books} (id INTEGER PRIMARY KEY, name TEXT);
            CREATE TABLE {verses} (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                book_id INTEGER,
                chapter INTEGER,
                verse INTEGER,
                text TEXT
            );
            "#
        ))?;

        conn.execute(
            &format!("INSERT INTO {TRANSLATIONS_TABLE} (translation, title, license) VALUES (?1, ?2, ?3)"),
            params![self.acronym, self.title, self.license],
        )?;
        for (id, name) in &self.books {
            conn.execute(
                &format!("INSERT INTO {books} (id, name) VALUES (?1, ?2)"),
                params![id, name],
            )?;
        }
        for (book_id, chapter, verse, text) in &self.verses {
            conn.execute(
                &format!("INSERT INTO {verses} (book_id, chapter, verse, text) VALUES (?1, ?2, ?3, ?4)"),
                params![book_id, chapter, verse, text],
            )?;
        }

        Ok(path)
    }
}
