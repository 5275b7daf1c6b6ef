//! Translation acronym normalization
//!
//! Acronyms arrive from URL paths and filenames in arbitrary case. Both sides
//! are normalized to upper case so `kjv`, `Kjv` and `KJV` resolve to the same
//! storage unit. The acronym is also embedded in table names, so only ASCII
//! letters, digits, `_` and `-` are accepted.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Normalized translation identifier
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Acronym(String);

impl Acronym {
    /// Normalize a raw identifier, returning `None` if it can never name a
    /// storage unit
    pub fn normalize(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() || !trimmed.chars().all(is_acronym_char) {
            return None;
        }
        Some(Self(trimmed.to_ascii_uppercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn is_acronym_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-'
}

impl fmt::Display for Acronym {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Acronym {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
