//! Persistence backends for parsed trade records.

pub mod json_file;

pub use json_file::JsonFileSink;
