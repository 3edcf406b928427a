//! Batch ingestion of saved broker emails.

pub mod runner;

pub use runner::{IngestRunner, IngestSummary};
