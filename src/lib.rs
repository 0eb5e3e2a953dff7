//! Quotable - a local quote collection with remote sync
//!
//! Quotable stores `{text, category}` quote records in a local
//! key-value database, filters them by category, backs them up as
//! JSON, and conservatively merges in records from a remote source.

pub mod config;
pub mod storage;
pub mod store;
pub mod sync;
pub mod transfer;
