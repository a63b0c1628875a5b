use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::{
    domain::{LedgerDocument, CURRENT_SCHEMA_VERSION},
    errors::LedgerError,
    utils::paths,
};

use super::{Result, StorageBackend};

const STORE_FILE: &str = "ledger.json";
const TMP_SUFFIX: &str = "tmp";

/// Filesystem-backed JSON persistence for the ledger document, written as a
/// single keyed record.
#[derive(Clone)]
pub struct JsonStorage {
    store_file: PathBuf,
}

impl JsonStorage {
    /// Creates a backend rooted at `root`, defaulting to the app data dir.
    pub fn new(root: Option<PathBuf>) -> Result<Self> {
        let root = root.unwrap_or_else(paths::app_data_dir);
        ensure_dir(&root)?;
        Ok(Self {
            store_file: root.join(STORE_FILE),
        })
    }

    pub fn new_default() -> Result<Self> {
        Self::new(None)
    }

    pub fn store_path(&self) -> &Path {
        &self.store_file
    }
}

impl StorageBackend for JsonStorage {
    fn load(&self) -> Result<Option<LedgerDocument>> {
        if !self.store_file.exists() {
            return Ok(None);
        }
        let data = fs::read_to_string(&self.store_file)?;
        let document: LedgerDocument = serde_json::from_str(&data)?;
        if document.schema_version > CURRENT_SCHEMA_VERSION {
            return Err(LedgerError::Storage(format!(
                "ledger schema v{} is newer than supported v{}",
                document.schema_version, CURRENT_SCHEMA_VERSION
            )));
        }
        Ok(Some(document))
    }

    fn save(&self, document: &LedgerDocument) -> Result<()> {
        let json = serde_json::to_string_pretty(document)?;
        let tmp = tmp_path(&self.store_file);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.store_file)?;
        Ok(())
    }
}

fn ensure_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path)?;
    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MonthKey;
    use tempfile::TempDir;

    fn storage_with_temp_dir() -> (JsonStorage, TempDir) {
        let temp = TempDir::new().expect("temp dir");
        let storage = JsonStorage::new(Some(temp.path().to_path_buf())).expect("json storage");
        (storage, temp)
    }

    fn sample_document() -> LedgerDocument {
        LedgerDocument::bootstrap(MonthKey::new(2026, 1).unwrap())
    }

    #[test]
    fn save_and_load_roundtrip() {
        let (storage, _guard) = storage_with_temp_dir();
        let document = sample_document();
        storage.save(&document).expect("save document");
        let loaded = storage.load().expect("load document");
        assert_eq!(loaded, Some(document));
    }

    #[test]
    fn load_of_empty_store_yields_none() {
        let (storage, _guard) = storage_with_temp_dir();
        assert!(storage.load().expect("load").is_none());
    }

    #[test]
    fn load_of_corrupt_store_is_an_error() {
        let (storage, _guard) = storage_with_temp_dir();
        fs::write(storage.store_path(), "{ not json").unwrap();
        assert!(storage.load().is_err());
    }

    #[test]
    fn load_rejects_newer_schema_versions() {
        let (storage, _guard) = storage_with_temp_dir();
        let mut document = sample_document();
        document.schema_version = CURRENT_SCHEMA_VERSION + 1;
        let json = serde_json::to_string(&document).unwrap();
        fs::write(storage.store_path(), json).unwrap();
        let err = storage.load().expect_err("future schema must fail");
        assert!(matches!(err, LedgerError::Storage(_)));
    }
}
