//! Data structures for the record being collected and exported.

pub mod record;

pub use record::{ContactRecord, Field};
