//! Helpers shared by the binaries: logging setup and startup environment checks.

pub mod utils;
pub mod env;
