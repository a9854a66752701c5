//! Storage abstractions for service layer
//!
//! File-backed building blocks shared by the persistent stores: a JSON map
//! read and written wholesale, and a persisted id counter.

pub mod json_map_store;
pub mod sequence;
