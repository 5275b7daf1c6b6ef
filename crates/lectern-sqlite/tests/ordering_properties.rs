//! Property tests for chapter counting and verse ordering
//!
//! Verses are inserted in arbitrary order; reads must come back sorted and
//! counts must match the distinct keys that were written.

use lectern_config::StorageConfig;
use lectern_core::LookupResolver;
use lectern_sqlite::fixtures::FixtureTranslation;
use lectern_sqlite::SqliteTranslationStore;
use proptest::prelude::*;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;
use tempfile::TempDir;

/// Distinct (chapter, verse) keys for a single book
fn verse_keys() -> impl Strategy<Value = Vec<(i64, i64)>> {
    prop::collection::btree_set((1i64..6, 1i64..40), 1..60)
        .prop_map(|keys| keys.into_iter().collect::<Vec<_>>())
        .prop_shuffle()
}

fn provision(keys: &[(i64, i64)]) -> (TempDir, LookupResolver) {
    let dir = TempDir::new().unwrap();
    let mut fixture = FixtureTranslation::new("PRP", "Property Translation", None).book(7, "Book");
    for (chapter, verse) in keys {
        fixture = fixture.verse(7, *chapter, *verse, &format!("text {chapter}:{verse}"));
    }
    fixture.write(dir.path()).unwrap();

    let config = StorageConfig {
        data_dir: dir.path().to_path_buf(),
        ..StorageConfig::default()
    };
    let store = SqliteTranslationStore::open(&config).unwrap();
    (dir, LookupResolver::new(Arc::new(store)))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn prop_chapter_count_matches_distinct_chapters(keys in verse_keys()) {
        let (_dir, resolver) = provision(&keys);
        let runtime = tokio::runtime::Runtime::new().unwrap();

        let expected: BTreeSet<i64> = keys.iter().map(|(c, _)| *c).collect();
        let count = runtime.block_on(resolver.count_chapters("PRP", 7)).unwrap();
        prop_assert_eq!(count.chapter_count as usize, expected.len());
    }

    #[test]
    fn prop_verses_strictly_ascending(keys in verse_keys()) {
        let (_dir, resolver) = provision(&keys);
        let runtime = tokio::runtime::Runtime::new().unwrap();

        let mut by_chapter: BTreeMap<i64, Vec<i64>> = BTreeMap::new();
        for (chapter, verse) in &keys {
            by_chapter.entry(*chapter).or_default().push(*verse);
        }

        for (chapter, mut expected) in by_chapter {
            expected.sort_unstable();
            let verses = runtime.block_on(resolver.list_verses("PRP", 7, chapter)).unwrap();
            let numbers: Vec<i64> = verses.iter().map(|v| v.verse).collect();
            prop_assert!(numbers.windows(2).all(|w| w[0] < w[1]));
            prop_assert_eq!(numbers, expected);
        }
    }

    #[test]
    fn prop_listed_verses_round_trip(keys in verse_keys()) {
        let (_dir, resolver) = provision(&keys);
        let runtime = tokio::runtime::Runtime::new().unwrap();

        let chapter = keys[0].0;
        for verse in runtime.block_on(resolver.list_verses("PRP", 7, chapter)).unwrap() {
            let single = runtime
                .block_on(resolver.get_verse("PRP", 7, chapter, verse.verse))
                .unwrap();
            prop_assert_eq!(single.text, verse.text);
        }
    }
}
