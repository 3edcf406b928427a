//! Fill-confirmation parsing pipeline.
//!
//! Three stages, each independently testable: [`SourceFilter`] decides
//! whether a message is worth parsing, [`FieldExtractor`] captures raw
//! string fields with the compiled pattern rules, and [`RecordAssembler`]
//! validates and types them into a [`crate::domain::model::TradeRecord`].
//! [`FillConfirmParser`] chains the stages for callers that just want a
//! record out of a message.

mod coercion;
mod patterns;

pub mod assembler;
pub mod extractor;
pub mod filter;
pub mod parser;
pub mod preprocess;

pub use assembler::RecordAssembler;
pub use extractor::FieldExtractor;
pub use filter::SourceFilter;
pub use parser::FillConfirmParser;
