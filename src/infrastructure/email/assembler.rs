//! Raw-field validation and record construction.

use super::coercion;
use crate::domain::enums::{OptionType, TradeAction};
use crate::domain::errors::ValidationError;
use crate::domain::model::{Leg, RawFillConfirm, RawLeg, TradeRecord};

/// Turns captured raw fields into one immutable [`TradeRecord`], enforcing
/// the domain constraints the pattern rules cannot express. All or
/// nothing: a single violated constraint rejects the whole confirmation,
/// so a partially valid record is never produced.
pub struct RecordAssembler;

impl RecordAssembler {
    pub fn assemble(raw: RawFillConfirm) -> Result<TradeRecord, ValidationError> {
        if raw.legs.is_empty() {
            return Err(ValidationError::NoLegs);
        }

        if raw.order_id.is_empty() || !raw.order_id.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ValidationError::NonNumericOrderId { value: raw.order_id });
        }

        let date_received = coercion::parse_timestamp(&raw.date_received).ok_or_else(|| {
            ValidationError::MalformedOrderField {
                field: "date_received",
                value: raw.date_received.clone(),
            }
        })?;

        let mut legs = Vec::with_capacity(raw.legs.len());
        for (index, raw_leg) in raw.legs.into_iter().enumerate() {
            legs.push(Self::assemble_leg(index, raw_leg)?);
        }

        Ok(TradeRecord {
            order_id: raw.order_id,
            date_received,
            order_type: raw.order_type.trim().to_string(),
            legs,
        })
    }

    fn assemble_leg(index: usize, raw: RawLeg) -> Result<Leg, ValidationError> {
        let action = TradeAction::from_str(&raw.action).map_err(|_| {
            ValidationError::MalformedLegField {
                index,
                field: "action",
                value: raw.action.clone(),
            }
        })?;

        let quantity = coercion::parse_quantity(&raw.quantity)
            .filter(|quantity| *quantity > 0)
            .ok_or(ValidationError::BadQuantity {
                index,
                value: raw.quantity,
            })?;

        let symbol = raw.symbol.trim().to_string();
        if symbol.is_empty() {
            return Err(ValidationError::EmptySymbol { index });
        }

        // The option qualifiers travel together or not at all.
        let (expiration, option_type, strike) = match (raw.expiration, raw.option_type, raw.strike) {
            (None, None, None) => (None, None, None),
            (Some(expiration), Some(option_type), Some(strike)) => {
                let expiration = coercion::parse_expiration(&expiration).ok_or_else(|| {
                    ValidationError::MalformedLegField {
                        index,
                        field: "expiration",
                        value: expiration.clone(),
                    }
                })?;
                let option_type = OptionType::from_str(&option_type).map_err(|_| {
                    ValidationError::MalformedLegField {
                        index,
                        field: "option_type",
                        value: option_type.clone(),
                    }
                })?;
                let strike = coercion::parse_price(&strike)
                    .filter(|strike| *strike > 0.0)
                    .ok_or(ValidationError::BadStrike {
                        index,
                        value: strike,
                    })?;
                (Some(expiration), Some(option_type), Some(strike))
            }
            _ => return Err(ValidationError::IncompleteOptionLeg { index }),
        };

        let fill_price = coercion::parse_price(&raw.fill_price).ok_or(
            ValidationError::MalformedLegField {
                index,
                field: "fill_price",
                value: raw.fill_price,
            },
        )?;

        let fill_time = coercion::parse_timestamp(&raw.fill_time).ok_or(
            ValidationError::MalformedLegField {
                index,
                field: "fill_time",
                value: raw.fill_time,
            },
        )?;

        Ok(Leg {
            action,
            quantity,
            symbol,
            expiration,
            option_type,
            strike,
            fill_price,
            fill_time,
        })
    }
}
