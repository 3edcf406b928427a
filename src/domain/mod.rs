//! Broker-agnostic domain layer: the record/leg value types, the enums and
//! errors that make up the parser's contract, and the sink seam.

pub mod constants;
pub mod enums;
pub mod errors;
pub mod model;
pub mod traits;
