use std::{collections::BTreeMap, path::PathBuf, sync::Arc};

use async_trait::async_trait;
use models::{Employee, EmployeeInput};
use tokio::sync::Mutex;

use crate::employees::EmployeeStore;
use crate::errors::ServiceError;
use crate::storage::{json_map_store::JsonMapStore, sequence::SequenceFile};

/// File-backed employee store.
///
/// The JSON file is the only source of truth: every call reloads it, and every
/// mutation writes it back in full. The last issued id lives in `<file>.seq` so
/// ids are not reused after deletes. One mutex covers each load/mutate/save cycle.
pub struct FileEmployeeStore {
    records: JsonMapStore<i64, Employee>,
    sequence: SequenceFile,
    lock: Mutex<()>,
}

impl FileEmployeeStore {
    /// Build the store for `path`. A missing file is treated as an empty store.
    pub fn new<P: Into<PathBuf>>(path: P) -> Arc<Self> {
        let file_path: PathBuf = path.into();
        let mut seq_path = file_path.clone().into_os_string();
        seq_path.push(".seq");
        Arc::new(Self {
            records: JsonMapStore::new(file_path),
            sequence: SequenceFile::new(seq_path),
            lock: Mutex::new(()),
        })
    }

    pub fn path(&self) -> &std::path::Path {
        self.records.path()
    }
}

#[async_trait]
impl EmployeeStore for FileEmployeeStore {
    async fn list(&self) -> Result<BTreeMap<i64, Employee>, ServiceError> {
        let _guard = self.lock.lock().await;
        self.records.load().await
    }

    async fn get(&self, id: i64) -> Result<Option<Employee>, ServiceError> {
        let _guard = self.lock.lock().await;
        Ok(self.records.load().await?.remove(&id))
    }

    async fn create(&self, input: EmployeeInput) -> Result<Employee, ServiceError> {
        let _guard = self.lock.lock().await;
        let mut map = self.records.load().await?;
        let last_id = map.keys().next_back().copied().unwrap_or(0).max(self.sequence.load().await?);
        let id = last_id
            .checked_add(1)
            .ok_or_else(|| ServiceError::Storage("id space exhausted".into()))?;
        let employee = input.into_employee(id);
        map.insert(employee.id, employee.clone());
        // Records first: a stale counter is still covered by the largest stored id.
        self.records.save(&map).await?;
        self.sequence.save(employee.id).await?;
        Ok(employee)
    }

    async fn update(&self, id: i64, input: EmployeeInput) -> Result<Employee, ServiceError> {
        let _guard = self.lock.lock().await;
        let mut map = self.records.load().await?;
        let slot = map.get_mut(&id).ok_or_else(|| ServiceError::not_found("employee"))?;
        *slot = input.into_employee(id);
        let updated = slot.clone();
        self.records.save(&map).await?;
        Ok(updated)
    }

    async fn delete(&self, id: i64) -> Result<bool, ServiceError> {
        let _guard = self.lock.lock().await;
        let mut map = self.records.load().await?;
        if map.remove(&id).is_none() {
            return Ok(false);
        }
        self.records.save(&map).await?;
        Ok(true)
    }
}
