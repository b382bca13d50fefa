//! Commands that run queries on the public data model.
pub mod export;
pub mod query;
