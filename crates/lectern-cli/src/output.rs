//! Terminal rendering for lookup results

use anyhow::Result;
use colored::Colorize;
use lectern_core::{BookSummary, TranslationStats, TranslationSummary, VerseRecord};
use serde::Serialize;

/// Pretty JSON, matching the HTTP response bodies
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

pub fn format_translations(translations: &[TranslationSummary]) -> String {
    if translations.is_empty() {
        return "No translations found".dimmed().to_string();
    }
    let width = translations
        .iter()
        .map(|t| t.acronym.len())
        .max()
        .unwrap_or(0);
    translations
        .iter()
        .map(|t| {
            let license = t
                .license
                .as_deref()
                .map(|l| format!(" ({l})").dimmed().to_string())
                .unwrap_or_default();
            format!(
                "{}  {}{}",
                format!("{:<width$}", t.acronym).bold(),
                t.title,
                license
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn format_books(books: &[BookSummary]) -> String {
    if books.is_empty() {
        return "No books found".dimmed().to_string();
    }
    books
        .iter()
        .map(|b| format!("{:>3}  {}", b.id.to_string().cyan(), b.name))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn format_verses(verses: &[VerseRecord]) -> String {
    if verses.is_empty() {
        return "No verses found".dimmed().to_string();
    }
    verses
        .iter()
        .map(|v| format!("{:>3}  {}", v.verse.to_string().cyan(), v.text))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn format_stats(acronym: &str, stats: &TranslationStats) -> String {
    format!(
        "{}\n  books:    {}\n  chapters: {}\n  verses:   {}",
        acronym.bold(),
        stats.books_count,
        stats.chapters_count,
        stats.verses_count
    )
}
