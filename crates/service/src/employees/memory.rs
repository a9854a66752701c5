use std::{collections::BTreeMap, sync::Arc};

use async_trait::async_trait;
use models::{Employee, EmployeeInput};
use tokio::sync::RwLock;

use crate::employees::EmployeeStore;
use crate::errors::ServiceError;

struct Inner {
    employees: BTreeMap<i64, Employee>,
    next_id: i64,
}

/// In-memory employee store. Records live as long as the process.
pub struct MemoryEmployeeStore {
    inner: RwLock<Inner>,
}

impl MemoryEmployeeStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            inner: RwLock::new(Inner { employees: BTreeMap::new(), next_id: 1 }),
        })
    }
}

#[async_trait]
impl EmployeeStore for MemoryEmployeeStore {
    async fn list(&self) -> Result<BTreeMap<i64, Employee>, ServiceError> {
        Ok(self.inner.read().await.employees.clone())
    }

    async fn get(&self, id: i64) -> Result<Option<Employee>, ServiceError> {
        Ok(self.inner.read().await.employees.get(&id).cloned())
    }

    async fn create(&self, input: EmployeeInput) -> Result<Employee, ServiceError> {
        let mut inner = self.inner.write().await;
        let id = inner.next_id;
        inner.next_id = id
            .checked_add(1)
            .ok_or_else(|| ServiceError::Storage("id space exhausted".into()))?;
        let employee = input.into_employee(id);
        inner.employees.insert(employee.id, employee.clone());
        Ok(employee)
    }

    async fn update(&self, id: i64, input: EmployeeInput) -> Result<Employee, ServiceError> {
        let mut inner = self.inner.write().await;
        let slot = inner.employees.get_mut(&id).ok_or_else(|| ServiceError::not_found("employee"))?;
        *slot = input.into_employee(id);
        Ok(slot.clone())
    }

    async fn delete(&self, id: i64) -> Result<bool, ServiceError> {
        Ok(self.inner.write().await.employees.remove(&id).is_some())
    }
}
