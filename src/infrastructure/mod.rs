//! Infrastructure layer: everything that touches the outside world.
//!
//! `email` turns broker mail into domain records, `sink` persists them,
//! `ingest` drives the batch sweep that connects the two.

pub mod email;
pub mod ingest;
pub mod sink;
