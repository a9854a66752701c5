//! Service layer owning employee records.
//! - `employees`: the `EmployeeStore` contract and its memory/file implementations.
//! - `storage`: reusable JSON file helpers behind the file store.
//! - `errors`: error type shared by every store.

pub mod errors;
pub mod employees;
pub mod storage;
