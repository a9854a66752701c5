//! Data types shared by the service and server crates.

pub mod employee;

pub use employee::{Employee, EmployeeInput};
