use std::{io::ErrorKind, path::PathBuf};
use tokio::fs;

use crate::errors::ServiceError;
use crate::storage::json_map_store::{replace_file, storage_error};

/// Last-issued id counter persisted as a decimal integer in its own file.
pub struct SequenceFile {
    file_path: PathBuf,
}

impl SequenceFile {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { file_path: path.into() }
    }

    /// Last issued id, or 0 if nothing was ever issued.
    pub async fn load(&self) -> Result<i64, ServiceError> {
        match fs::read_to_string(&self.file_path).await {
            Ok(text) if text.trim().is_empty() => Ok(0),
            Ok(text) => text.trim().parse().map_err(|e| storage_error(&self.file_path, e)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(0),
            Err(e) => Err(storage_error(&self.file_path, e)),
        }
    }

    pub async fn save(&self, last_id: i64) -> Result<(), ServiceError> {
        replace_file(&self.file_path, last_id.to_string().as_bytes()).await
    }
}
