//! Storage adapters for todo records.

pub mod memory;
