//! One-shot lookups printed to stdout

use anyhow::Result;
use lectern_config::LecternConfig;
use lectern_core::LookupResolver;

use crate::cli::OutputFormat;
use crate::config::open_resolver;
use crate::output;

/// A lookup to run once against the configured translations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    Translations,
    Books {
        translation: String,
    },
    Chapters {
        translation: String,
        book: i64,
    },
    Verse {
        translation: String,
        book: i64,
        chapter: i64,
        verse: Option<i64>,
    },
    Stats {
        translation: String,
    },
}

pub async fn execute(config: LecternConfig, lookup: Lookup, format: OutputFormat) -> Result<()> {
    let resolver = open_resolver(&config)?;
    let rendered = render(&resolver, lookup, format).await?;
    println!("{rendered}");
    Ok(())
}

/// Run the lookup and render it in the requested format
pub async fn render(
    resolver: &LookupResolver,
    lookup: Lookup,
    format: OutputFormat,
) -> Result<String> {
    let json = format == OutputFormat::Json;
    let rendered = match lookup {
        Lookup::Translations => {
            let translations = resolver.list_translations().await?;
            if json {
                output::to_json(&translations)?
            } else {
                output::format_translations(&translations)
            }
        }
        Lookup::Books { translation } => {
            let books = resolver.list_books(&translation).await?;
            if json {
                output::to_json(&books)?
            } else {
                output::format_books(&books)
            }
        }
        Lookup::Chapters { translation, book } => {
            let count = resolver.count_chapters(&translation, book).await?;
            if json {
                output::to_json(&count)?
            } else {
                count.chapter_count.to_string()
            }
        }
        Lookup::Verse {
            translation,
            book,
            chapter,
            verse: Some(verse),
        } => {
            let record = resolver.get_verse(&translation, book, chapter, verse).await?;
            if json {
                output::to_json(&record)?
            } else {
                output::format_verses(std::slice::from_ref(&record))
            }
        }
        Lookup::Verse {
            translation,
            book,
            chapter,
            verse: None,
        } => {
            let verses = resolver.list_verses(&translation, book, chapter).await?;
            if json {
                output::to_json(&verses)?
            } else {
                output::format_verses(&verses)
            }
        }
        Lookup::Stats { translation } => {
            let acronym = resolver.resolve_translation(&translation)?;
            let stats = resolver.translation_stats(&translation).await?;
            if json {
                output::to_json(&stats)?
            } else {
                output::format_stats(acronym.as_str(), &stats)
            }
        }
    };
    Ok(rendered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lectern_core::test_support::MemoryStore;
    use lectern_core::LookupError;
    use std::sync::Arc;

    fn resolver() -> LookupResolver {
        LookupResolver::new(Arc::new(MemoryStore::sample()))
    }

    #[tokio::test]
    async fn test_single_verse_as_json() {
        let lookup = Lookup::Verse {
            translation: "kjv".into(),
            book: 1,
            chapter: 1,
            verse: Some(1),
        };
        let rendered = render(&resolver(), lookup, OutputFormat::Json).await.unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "verse": 1,
                "text": "In the beginning God created the heaven and the earth."
            })
        );
    }

    #[tokio::test]
    async fn test_chapter_count_as_text() {
        let lookup = Lookup::Chapters {
            translation: "KJV".into(),
            book: 1,
        };
        let rendered = render(&resolver(), lookup, OutputFormat::Text).await.unwrap();
        assert_eq!(rendered, "2");
    }

    #[tokio::test]
    async fn test_unknown_translation_is_lookup_error() {
        let lookup = Lookup::Books {
            translation: "XYZ".into(),
        };
        let err = render(&resolver(), lookup, OutputFormat::Text)
            .await
            .unwrap_err();
        assert_eq!(
            err.downcast_ref::<LookupError>(),
            Some(&LookupError::TranslationNotFound("XYZ".into()))
        );
    }
}
