use std::{
    collections::BTreeMap,
    io::ErrorKind,
    marker::PhantomData,
    path::{Path, PathBuf},
};
use tokio::fs;
use tracing::debug;

use crate::errors::ServiceError;

/// Generic JSON file-backed map.
///
/// The file holds the whole `BTreeMap<K, V>` and is read or written wholesale.
/// Nothing is cached: callers `load`, mutate, then `save`. Serializing callers
/// (so two load/save cycles never interleave) is the caller's job.
pub struct JsonMapStore<K, V> {
    file_path: PathBuf,
    _entry: PhantomData<fn() -> (K, V)>,
}

impl<K, V> JsonMapStore<K, V>
where
    K: Ord + serde::Serialize + serde::de::DeserializeOwned,
    V: serde::Serialize + serde::de::DeserializeOwned,
{
    /// Point the store at a path. No I/O happens until the first `load`/`save`.
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { file_path: path.into(), _entry: PhantomData }
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }

    /// Read and decode the whole file. A missing or empty file is an empty map.
    pub async fn load(&self) -> Result<BTreeMap<K, V>, ServiceError> {
        let bytes = match fs::read(&self.file_path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => return Err(storage_error(&self.file_path, e)),
        };
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(BTreeMap::new());
        }
        serde_json::from_slice(&bytes).map_err(|e| storage_error(&self.file_path, e))
    }

    /// Encode the map pretty-printed (two-space indent) and replace the file.
    pub async fn save(&self, map: &BTreeMap<K, V>) -> Result<(), ServiceError> {
        let data = serde_json::to_vec_pretty(map).map_err(|e| storage_error(&self.file_path, e))?;
        replace_file(&self.file_path, &data).await?;
        debug!(path = %self.file_path.display(), entries = map.len(), "json map saved");
        Ok(())
    }
}

/// Write `data` next to `path` and rename it over, so readers never see a half-written file.
pub(crate) async fn replace_file(path: &Path, data: &[u8]) -> Result<(), ServiceError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).await.map_err(|e| storage_error(parent, e))?;
    }
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("json");
    let tmp = path.with_extension(format!("{ext}.tmp"));
    fs::write(&tmp, data).await.map_err(|e| storage_error(&tmp, e))?;
    fs::rename(&tmp, path).await.map_err(|e| storage_error(path, e))?;
    Ok(())
}

pub(crate) fn storage_error(path: &Path, err: impl std::fmt::Display) -> ServiceError {
    ServiceError::Storage(format!("{}: {}", path.display(), err))
}
