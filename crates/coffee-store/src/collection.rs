//! # JSON Collections
//!
//! One JSON array file plus one lock.
//!
//! ## Read-Modify-Write
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  modify(|items| ...)                                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  lock.lock().await        ← every reader and writer queues here        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  load()                   ← missing / empty file = []                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  closure mutates Vec<T>   ── Err? ──► return, file untouched           │
//! │       │ Ok                                                              │
//! │       ▼                                                                 │
//! │  persist()                                                              │
//! │   ├── write  .<file>.<uuid>.tmp                                        │
//! │   └── rename .<file>.<uuid>.tmp → <file>                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io::ErrorKind as IoErrorKind;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::sync::Mutex;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::error::{StoreError, StoreResult};

/// A collection of `T` persisted as a JSON array in a single file.
///
/// All access goes through one [`Mutex`], so operations on the same
/// collection never interleave.
#[derive(Debug)]
pub struct JsonCollection<T> {
    path: PathBuf,
    lock: Mutex<()>,
    _records: PhantomData<fn() -> T>,
}

impl<T> JsonCollection<T>
where
    T: Serialize + DeserializeOwned,
{
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonCollection {
            path: path.into(),
            lock: Mutex::new(()),
            _records: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns every record.
    pub async fn read_all(&self) -> StoreResult<Vec<T>> {
        let _guard = self.lock.lock().await;
        self.load().await
    }

    /// Runs `f` over the loaded records and persists them if it succeeds.
    ///
    /// If `f` returns an error the file is not rewritten.
    pub async fn modify<R, F>(&self, f: F) -> StoreResult<R>
    where
        F: FnOnce(&mut Vec<T>) -> StoreResult<R>,
    {
        let _guard = self.lock.lock().await;
        let mut records = self.load().await?;
        let result = f(&mut records)?;
        self.persist(&records).await?;
        Ok(result)
    }

    /// Overwrites the whole collection.
    pub async fn replace_all(&self, records: &[T]) -> StoreResult<()> {
        let _guard = self.lock.lock().await;
        self.persist(records).await
    }

    async fn load(&self) -> StoreResult<Vec<T>> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == IoErrorKind::NotFound => {
                debug!(path = %self.path.display(), "Collection file missing, treating as empty");
                return Ok(Vec::new());
            }
            Err(e) => return Err(StoreError::io(&self.path, e)),
        };

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Vec::new());
        }

        serde_json::from_slice(&bytes).map_err(|e| StoreError::serialization(&self.path, e))
    }

    async fn persist(&self, records: &[T]) -> StoreResult<()> {
        let bytes = serde_json::to_vec_pretty(records)
            .map_err(|e| StoreError::serialization(&self.path, e))?;

        let tmp = self.temp_path();
        tokio::fs::write(&tmp, &bytes)
            .await
            .map_err(|e| StoreError::io(&tmp, e))?;

        if let Err(e) = tokio::fs::rename(&tmp, &self.path).await {
            if let Err(cleanup) = tokio::fs::remove_file(&tmp).await {
                warn!(path = %tmp.display(), error = %cleanup, "Failed to remove temp file");
            }
            return Err(StoreError::io(&self.path, e));
        }

        debug!(path = %self.path.display(), count = records.len(), "Collection written");
        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let file_name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "collection".to_string());
        self.path
            .with_file_name(format!(".{}.{}.tmp", file_name, Uuid::new_v4()))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use tempfile::TempDir;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Bean {
        id: String,
        grams: f64,
    }

    fn bean(id: &str, grams: f64) -> Bean {
        Bean {
            id: id.into(),
            grams,
        }
    }

    #[tokio::test]
    async fn test_missing_and_empty_files_read_as_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("beans.json");
        let collection = JsonCollection::<Bean>::new(&path);

        assert!(collection.read_all().await.unwrap().is_empty());

        std::fs::write(&path, "  \n").unwrap();
        assert!(collection.read_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_modify_persists_on_success() {
        let dir = TempDir::new().unwrap();
        let collection = JsonCollection::<Bean>::new(dir.path().join("beans.json"));

        collection
            .modify(|beans| {
                beans.push(bean("arabica", 250.0));
                Ok(())
            })
            .await
            .unwrap();

        let reopened = JsonCollection::<Bean>::new(dir.path().join("beans.json"));
        assert_eq!(reopened.read_all().await.unwrap(), vec![bean("arabica", 250.0)]);
    }

    #[tokio::test]
    async fn test_modify_leaves_file_untouched_on_error() {
        let dir = TempDir::new().unwrap();
        let collection = JsonCollection::<Bean>::new(dir.path().join("beans.json"));
        collection.replace_all(&[bean("robusta", 100.0)]).await.unwrap();

        let result: StoreResult<()> = collection
            .modify(|beans| {
                beans.clear();
                Err(StoreError::not_found("Bean", "x"))
            })
            .await;

        assert!(result.is_err());
        assert_eq!(collection.read_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_no_temp_files_left_behind() {
        let dir = TempDir::new().unwrap();
        let collection = JsonCollection::<Bean>::new(dir.path().join("beans.json"));
        collection.replace_all(&[bean("a", 1.0)]).await.unwrap();
        collection.replace_all(&[bean("b", 2.0)]).await.unwrap();

        let names: Vec<String> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["beans.json".to_string()]);
    }

    #[tokio::test]
    async fn test_corrupt_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("beans.json");
        std::fs::write(&path, "{not json").unwrap();

        let err = JsonCollection::<Bean>::new(&path).read_all().await.unwrap_err();
        assert!(matches!(err, StoreError::Serialization { .. }));
    }
}
