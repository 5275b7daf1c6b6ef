//! Table naming for translation databases
//!
//! The books and verses tables are prefixed with the translation acronym
//! (`KJV_books`, `KJV_verses`). Table names cannot be bound as parameters, so
//! they are built from the registry's normalized acronym and quoted.

use lectern_core::Acronym;

/// Single-row table describing the translation
pub const TRANSLATIONS_TABLE: &str = "translations";

/// Quoted table names for one translation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableNames {
    pub books: String,
    pub verses: String,
}

impl TableNames {
    pub fn for_acronym(acronym: &Acronym) -> Self {
        Self {
            books: quote_identifier(&format!("{}_books", acronym)),
            verses: quote_identifier(&format!("{}_verses", acronym)),
        }
    }
}

/// Quote an SQL identifier, doubling embedded quotes
pub fn quote_identifier(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_names_use_normalized_acronym() {
        let tables = TableNames::for_acronym(&Acronym::normalize("kjv").unwrap());
        assert_eq!(tables.books, "\"KJV_books\"");
        assert_eq!(tables.verses, "\"KJV_verses\"");
    }

    #[test]
    fn test_quote_identifier_escapes_quotes() {
        assert_eq!(quote_identifier("a\"b"), "\"a\"\"b\"");
    }
}
