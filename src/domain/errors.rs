//! Typed failure surface of the parsing pipeline.
//!
//! Each stage returns a structured error instead of raising: the caller
//! (mailbox poller, ingest runner) decides whether to log-and-skip or halt.
//! Message relevance is a routing decision, not an error, so it has no
//! variant here; `FillConfirmParser::parse` yields `Ok(None)` for mail
//! that is not a fill confirmation.

use thiserror::Error;

/// Why extraction of a single field failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    /// The field's pattern rule matched nothing in the text.
    #[error("pattern not found")]
    PatternNotFound,

    /// The pattern matched, but the captured text failed type coercion.
    #[error("cannot coerce {value:?} to {expected}")]
    Coercion { value: String, expected: &'static str },
}

/// Extraction-stage failure, naming the field (and leg block, for leg-level
/// fields) plus the offending text span.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractionError {
    #[error("order field '{field}': {source}")]
    OrderField {
        field: &'static str,
        source: FieldError,
    },

    #[error("leg {index} field '{field}': {source}")]
    LegField {
        index: usize,
        field: &'static str,
        source: FieldError,
    },
}

impl ExtractionError {
    pub fn not_found(field: &'static str) -> Self {
        ExtractionError::OrderField {
            field,
            source: FieldError::PatternNotFound,
        }
    }

    pub fn coercion(field: &'static str, value: impl Into<String>, expected: &'static str) -> Self {
        ExtractionError::OrderField {
            field,
            source: FieldError::Coercion {
                value: value.into(),
                expected,
            },
        }
    }

    pub fn leg_not_found(index: usize, field: &'static str) -> Self {
        ExtractionError::LegField {
            index,
            field,
            source: FieldError::PatternNotFound,
        }
    }

    pub fn leg_coercion(
        index: usize,
        field: &'static str,
        value: impl Into<String>,
        expected: &'static str,
    ) -> Self {
        ExtractionError::LegField {
            index,
            field,
            source: FieldError::Coercion {
                value: value.into(),
                expected,
            },
        }
    }

    /// Name of the field whose rule failed.
    pub fn field(&self) -> &'static str {
        match self {
            ExtractionError::OrderField { field, .. } => field,
            ExtractionError::LegField { field, .. } => field,
        }
    }

    /// Zero-based leg block index, if the failure was leg-level.
    pub fn leg_index(&self) -> Option<usize> {
        match self {
            ExtractionError::OrderField { .. } => None,
            ExtractionError::LegField { index, .. } => Some(*index),
        }
    }
}

/// Assembly-stage failure: every field extracted, but a domain constraint
/// was violated. Carries the constraint and the offending raw value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("confirmation contains no trade legs")]
    NoLegs,

    #[error("order id {value:?} must be all digits")]
    NonNumericOrderId { value: String },

    #[error("leg {index}: quantity {value:?} must be a positive whole number")]
    BadQuantity { index: usize, value: String },

    #[error("leg {index}: strike {value:?} must be a positive number")]
    BadStrike { index: usize, value: String },

    #[error("leg {index}: symbol is empty")]
    EmptySymbol { index: usize },

    #[error("leg {index}: option fields must appear together (expiration, option type, strike)")]
    IncompleteOptionLeg { index: usize },

    #[error("leg {index}: {field} {value:?} is malformed")]
    MalformedLegField {
        index: usize,
        field: &'static str,
        value: String,
    },

    #[error("{field} {value:?} is malformed")]
    MalformedOrderField { field: &'static str, value: String },
}

/// Combined failure surface of the extraction and assembly stages.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("extraction failed: {0}")]
    Extraction(#[from] ExtractionError),

    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),
}
