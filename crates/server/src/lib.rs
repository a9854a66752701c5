pub mod routes;
pub mod startup;
pub mod errors;
pub mod launch;

pub use startup::{run, StoreKind};
