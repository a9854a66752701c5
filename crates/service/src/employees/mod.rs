//! Employee record stores.
//!
//! Two interchangeable implementations of [`EmployeeStore`]:
//! - [`memory::MemoryEmployeeStore`]: process-lifetime map, lost on restart.
//! - [`file::FileEmployeeStore`]: JSON file reloaded on every call.

use std::collections::BTreeMap;

use async_trait::async_trait;
use models::{Employee, EmployeeInput};

use crate::errors::ServiceError;

pub mod file;
pub mod memory;

/// Trait abstraction for employee storage.
/// Ids are unique among live records and never handed out twice.
#[async_trait]
pub trait EmployeeStore: Send + Sync {
    async fn list(&self) -> Result<BTreeMap<i64, Employee>, ServiceError>;
    async fn get(&self, id: i64) -> Result<Option<Employee>, ServiceError>;
    async fn create(&self, input: EmployeeInput) -> Result<Employee, ServiceError>;
    /// Replace every field except `id`; `NotFound` if the id is absent.
    async fn update(&self, id: i64, input: EmployeeInput) -> Result<Employee, ServiceError>;
    /// Remove a record; returns whether it existed.
    async fn delete(&self, id: i64) -> Result<bool, ServiceError>;
}
