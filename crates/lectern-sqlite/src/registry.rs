//! Registry of provisioned translations
//!
//! Built once at startup by scanning the data directory and never mutated
//! afterwards. The acronym of a unit is its upper-cased file stem, so
//! `kjv.db` and `KJV.db` both register as `KJV`.

use crate::error::{SqliteError, SqliteResult};
use lectern_config::StorageConfig;
use lectern_core::Acronym;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Read-only mapping from acronym to database file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationRegistry {
    units: BTreeMap<Acronym, PathBuf>,
}

impl TranslationRegistry {
    /// Scan `config.data_dir` for translation databases
    ///
    /// A missing directory yields an empty registry; an unreadable one is an
    /// error.
    pub fn discover(config: &StorageConfig) -> SqliteResult<Self> {
        let dir = &config.data_dir;
        if !dir.exists() {
            warn!(dir = %dir.display(), "Data directory does not exist; no translations provisioned");
            return Ok(Self::default());
        }

        let entries = fs::read_dir(dir).map_err(|e| {
            SqliteError::Discovery(format!("Failed to read {}: {}", dir.display(), e))
        })?;

        let mut paths = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| {
                SqliteError::Discovery(format!("Failed to read entry in {}: {}", dir.display(), e))
            })?;
            let path = entry.path();
            if path.is_file() {
                paths.push(path);
            }
        }
        // Sorted so duplicate resolution does not depend on readdir order
        paths.sort();

        let registry = Self::from_paths(paths, config);
        for (acronym, path) in registry.iter() {
            debug!(%acronym, path = %path.display(), "Registered translation");
        }
        info!(
            dir = %dir.display(),
            count = registry.len(),
            "Discovered translations"
        );
        Ok(registry)
    }

    /// Build a registry from candidate files, applying extension and exclude
    /// rules; the first path wins when two normalize to the same acronym
    pub fn from_paths<I>(paths: I, config: &StorageConfig) -> Self
    where
        I: IntoIterator<Item = PathBuf>,
    {
        let extension = config.extension.trim_start_matches('.');
        let mut units: BTreeMap<Acronym, PathBuf> = BTreeMap::new();

        for path in paths {
            let Some(stem) = unit_stem(&path, extension) else {
                continue;
            };
            if config
                .exclude
                .iter()
                .any(|excluded| excluded.eq_ignore_ascii_case(stem))
            {
                debug!(path = %path.display(), "Skipping excluded database");
                continue;
            }
            let Some(acronym) = Acronym::normalize(stem) else {
                warn!(path = %path.display(), "Skipping database with unusable acronym");
                continue;
            };
            if let Some(existing) = units.get(&acronym) {
                warn!(
                    %acronym,
                    kept = %existing.display(),
                    skipped = %path.display(),
                    "Duplicate translation acronym"
                );
                continue;
            }
            units.insert(acronym, path);
        }

        Self { units }
    }

    pub fn get(&self, acronym: &Acronym) -> Option<&Path> {
        self.units.get(acronym).map(PathBuf::as_path)
    }

    pub fn contains(&self, acronym: &Acronym) -> bool {
        self.units.contains_key(acronym)
    }

    pub fn acronyms(&self) -> impl Iterator<Item = &Acronym> {
        self.units.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Acronym, &Path)> {
        self.units.iter().map(|(a, p)| (a, p.as_path()))
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}

/// File stem if the extension matches case-insensitively
fn unit_stem<'a>(path: &'a Path, extension: &str) -> Option<&'a str> {
    let ext = path.extension()?.to_str()?;
    if !ext.eq_ignore_ascii_case(extension) {
        return None;
    }
    path.file_stem()?.to_str()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn config_for(dir: &Path) -> StorageConfig {
        StorageConfig {
            data_dir: dir.to_path_buf(),
            ..StorageConfig::default()
        }
    }

    fn acronyms(registry: &TranslationRegistry) -> Vec<String> {
        registry.acronyms().map(|a| a.to_string()).collect()
    }

    #[test]
    fn test_from_paths_normalizes_and_filters() {
        let config = StorageConfig::default();
        let registry = TranslationRegistry::from_paths(
            vec![
                PathBuf::from("/data/kjv.db"),
                PathBuf::from("/data/ASV.DB"),
                PathBuf::from("/data/translations.db"),
                PathBuf::from("/data/README.md"),
                PathBuf::from("/data/bad name.db"),
                PathBuf::from("/data/noext"),
            ],
            &config,
        );

        assert_eq!(acronyms(&registry), vec!["ASV", "KJV"]);
        let kjv = Acronym::normalize("KJV").unwrap();
        assert_eq!(registry.get(&kjv), Some(Path::new("/data/kjv.db")));
    }

    #[test]
    fn test_from_paths_first_duplicate_wins() {
        let config = StorageConfig::default();
        let registry = TranslationRegistry::from_paths(
            vec![PathBuf::from("/data/KJV.db"), PathBuf::from("/data/kjv.db")],
            &config,
        );
        assert_eq!(registry.len(), 1);
        let kjv = Acronym::normalize("kjv").unwrap();
        assert_eq!(registry.get(&kjv), Some(Path::new("/data/KJV.db")));
    }

    #[test]
    fn test_iter_pairs_acronyms_with_files_in_order() {
        let registry = TranslationRegistry::from_paths(
            vec![PathBuf::from("/data/web.db"), PathBuf::from("/data/ASV.db")],
            &StorageConfig::default(),
        );
        let pairs: Vec<(String, &Path)> = registry
            .iter()
            .map(|(acronym, path)| (acronym.to_string(), path))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("ASV".to_string(), Path::new("/data/ASV.db")),
                ("WEB".to_string(), Path::new("/data/web.db")),
            ]
        );
    }

    #[test]
    fn test_custom_extension_with_leading_dot() {
        let config = StorageConfig {
            extension: ".sqlite".to_string(),
            ..StorageConfig::default()
        };
        let registry = TranslationRegistry::from_paths(
            vec![PathBuf::from("/data/KJV.sqlite"), PathBuf::from("/data/ASV.db")],
            &config,
        );
        assert_eq!(acronyms(&registry), vec!["KJV"]);
    }

    #[test]
    fn test_discover_missing_directory_is_empty() {
        let dir = TempDir::new().unwrap();
        let registry = TranslationRegistry::discover(&config_for(&dir.path().join("absent")))
            .expect("Missing directory should not be an error");
        assert!(registry.is_empty());
    }

    #[test]
    fn test_discover_skips_directories() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("NESTED.db")).unwrap();
        fs::write(dir.path().join("WEB.db"), b"").unwrap();

        let registry = TranslationRegistry::discover(&config_for(dir.path())).unwrap();
        assert_eq!(acronyms(&registry), vec!["WEB"]);
    }
}
