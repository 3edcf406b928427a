//! The full per-message pipeline.

use log::debug;

use super::assembler::RecordAssembler;
use super::extractor::FieldExtractor;
use super::filter::SourceFilter;
use crate::domain::errors::ParseError;
use crate::domain::model::{EmailMessage, TradeRecord};

/// Runs filter, extraction and assembly over one message. Stateless apart
/// from the configured filter, so a single instance (or a clone per task)
/// can serve any number of concurrent parses.
#[derive(Clone, Debug, Default)]
pub struct FillConfirmParser {
    filter: SourceFilter,
}

impl FillConfirmParser {
    pub fn new(filter: SourceFilter) -> Self {
        Self { filter }
    }

    /// Parses one message. `Ok(None)` means the message is not a fill
    /// confirmation, which is a routing outcome rather than a failure;
    /// `Err` means it looked like one but could not be read.
    pub fn parse(&self, message: &EmailMessage) -> Result<Option<TradeRecord>, ParseError> {
        if !self.filter.is_relevant(&message.sender, &message.subject) {
            debug!(
                "Ignoring message from {:?} with subject {:?}",
                message.sender, message.subject
            );
            return Ok(None);
        }

        let raw = FieldExtractor::extract(&message.body)?;
        let record = RecordAssembler::assemble(raw)?;
        Ok(Some(record))
    }
}
