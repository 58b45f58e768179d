//! File-backed storage for migration artifacts.
//!
//! All artifacts are pretty-printed JSON files in the data directory with
//! atomic writes, so a crashed run never leaves a half-written staging
//! file behind.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::config;
use crate::domain::BlogRecord;
use crate::errors;

const MIGRATION_FILE: &str = "contentful-migration.json";
const CSV_SNAPSHOT_FILE: &str = "csv-parsed.json";
const EXPORT_FILE: &str = "blogs-export.json";
const CSV_INPUT_FILE: &str = "blogs.csv";

/// Store for the JSON artifacts a migration run produces and consumes.
#[derive(Clone)]
pub struct MigrationStore {
    root: PathBuf,
}

impl MigrationStore {
    /// Create a store rooted at the given data directory.
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Create a store rooted at the configured data directory.
    pub fn from_env() -> Self {
        Self::new(config::data_dir())
    }

    /// Path of the staged migration file.
    pub fn migration_path(&self) -> PathBuf {
        self.root.join(MIGRATION_FILE)
    }

    /// Default path of the CSV input file.
    pub fn csv_input_path(&self) -> PathBuf {
        self.root.join(CSV_INPUT_FILE)
    }

    /// Stage converted records for import. Returns the file written.
    pub fn save_records(&self, records: &[BlogRecord]) -> Result<PathBuf> {
        let path = self.migration_path();
        self.write_json(&path, &records)?;
        Ok(path)
    }

    /// Load previously staged records. Missing data is reported with the
    /// step that produces it.
    pub fn load_records(&self) -> Result<Vec<BlogRecord>> {
        let path = self.migration_path();
        if !path.exists() {
            return Err(anyhow::Error::new(errors::migration_data_missing(&path)));
        }
        self.read_json(&path)
    }

    /// Snapshot CSV-parsed records for review before importing.
    pub fn save_csv_snapshot(&self, records: &[BlogRecord]) -> Result<PathBuf> {
        let path = self.root.join(CSV_SNAPSHOT_FILE);
        self.write_json(&path, &records)?;
        Ok(path)
    }

    /// Write an export of target-store entries.
    pub fn save_export<T: Serialize>(&self, blogs: &T) -> Result<PathBuf> {
        let path = self.root.join(EXPORT_FILE);
        self.write_json(&path, blogs)?;
        Ok(path)
    }

    fn write_json<T: Serialize>(&self, path: &Path, data: &T) -> Result<()> {
        fs::create_dir_all(&self.root).with_context(|| {
            format!("Failed to create data directory: {}", self.root.display())
        })?;

        let json = serde_json::to_string_pretty(data).context("Failed to serialize data")?;

        // Atomic write: write to temp file, then rename
        let temp_path = path.with_extension("json.tmp");
        fs::write(&temp_path, json).context("Failed to write temporary file")?;
        fs::rename(&temp_path, path).context("Failed to rename temporary file")?;

        Ok(())
    }

    fn read_json<T: for<'de> Deserialize<'de>>(&self, path: &Path) -> Result<T> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;
        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to deserialize {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PublishStatus;
    use tempfile::TempDir;

    fn sample_records() -> Vec<BlogRecord> {
        vec![BlogRecord {
            name: "First".to_string(),
            slug: "first".to_string(),
            blog_text: "# First".to_string(),
            status: PublishStatus::Published,
            content_type: "Blog".to_string(),
            ..Default::default()
        }]
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let temp = TempDir::new().unwrap();
        let store = MigrationStore::new(temp.path());

        let path = store.save_records(&sample_records()).unwrap();
        assert!(path.exists());

        let loaded = store.load_records().unwrap();
        assert_eq!(loaded, sample_records());
    }

    #[test]
    fn test_load_without_staged_data_names_the_missing_step() {
        let temp = TempDir::new().unwrap();
        let store = MigrationStore::new(temp.path());

        let error = store.load_records().unwrap_err();
        let message = format!("{}", error);
        assert!(message.contains("Migration data not found"));
    }

    #[test]
    fn test_writes_create_the_data_directory() {
        let temp = TempDir::new().unwrap();
        let store = MigrationStore::new(temp.path().join("nested/data"));

        store.save_csv_snapshot(&sample_records()).unwrap();
        assert!(temp.path().join("nested/data/csv-parsed.json").exists());
    }

    #[test]
    fn test_no_temp_file_left_behind() {
        let temp = TempDir::new().unwrap();
        let store = MigrationStore::new(temp.path());
        store.save_records(&sample_records()).unwrap();

        let leftovers: Vec<_> = fs::read_dir(temp.path())
            .unwrap()
            .filter_map(|entry| entry.ok())
            .filter(|entry| {
                entry.path().extension().map(|e| e == "tmp").unwrap_or(false)
            })
            .collect();
        assert!(leftovers.is_empty());
    }
}
