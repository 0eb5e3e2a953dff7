//! CLI layer for Quotable.

pub mod commands;
pub mod format;

pub use format::OutputFormat;
