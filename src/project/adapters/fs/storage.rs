//! JSON-file project storage over a capability directory.
//!
//! Each record is stored as one pretty-printed JSON document named after
//! its key. Blocking filesystem work is offloaded to a dedicated thread
//! pool so it never stalls the async executor.

use async_trait::async_trait;
use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use std::sync::Arc;

use crate::project::{
    domain::{ProjectKey, ProjectRecord},
    ports::{AdapterError, AdapterResult, ProjectStorage},
};

/// Project storage writing one JSON document per key.
#[derive(Debug, Clone)]
pub struct FsProjectStorage {
    root: Arc<Dir>,
}

impl FsProjectStorage {
    /// Opens storage rooted at the given directory.
    ///
    /// # Errors
    ///
    /// Returns [`AdapterError`] when the directory cannot be opened.
    pub fn open(path: &Utf8Path) -> AdapterResult<Self> {
        let root = Dir::open_ambient_dir(path, ambient_authority()).map_err(storage_error)?;
        Ok(Self::from_dir(root))
    }

    /// Creates storage over an already opened capability directory.
    #[must_use]
    pub fn from_dir(root: Dir) -> Self {
        Self {
            root: Arc::new(root),
        }
    }
}

fn record_file_name(key: &ProjectKey) -> String {
    format!("{key}.json")
}

fn storage_error(err: impl std::fmt::Display) -> AdapterError {
    AdapterError::new("storage", err.to_string())
}

/// Runs a blocking filesystem operation on a dedicated thread pool.
async fn run_blocking<F, T>(f: F) -> AdapterResult<T>
where
    F: FnOnce() -> AdapterResult<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|err| storage_error(format!("task join error: {err}")))?
}

#[async_trait]
impl ProjectStorage for FsProjectStorage {
    async fn get(&self, key: &ProjectKey) -> AdapterResult<Option<ProjectRecord>> {
        let root = Arc::clone(&self.root);
        let name = record_file_name(key);
        run_blocking(move || match root.read_to_string(&name) {
            Ok(contents) => {
                let record = serde_json::from_str(&contents).map_err(storage_error)?;
                Ok(Some(record))
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(storage_error(err)),
        })
        .await
    }

    async fn store(&self, record: &ProjectRecord) -> AdapterResult<String> {
        let root = Arc::clone(&self.root);
        let name = record_file_name(&record.key);
        let contents = serde_json::to_string_pretty(record).map_err(storage_error)?;
        run_blocking(move || {
            root.write(&name, contents.as_bytes())
                .map_err(storage_error)?;
            Ok(name)
        })
        .await
    }

    async fn update(&self, record: &ProjectRecord) -> AdapterResult<bool> {
        let root = Arc::clone(&self.root);
        let name = record_file_name(&record.key);
        let contents = serde_json::to_string_pretty(record).map_err(storage_error)?;
        run_blocking(move || {
            if !root.try_exists(&name).map_err(storage_error)? {
                return Ok(false);
            }
            root.write(&name, contents.as_bytes())
                .map_err(storage_error)?;
            Ok(true)
        })
        .await
    }
}
