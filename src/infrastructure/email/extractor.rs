//! Field extraction over a normalized confirmation body.

use regex::Regex;

use super::{coercion, patterns, preprocess};
use crate::domain::errors::ExtractionError;
use crate::domain::model::{RawFillConfirm, RawLeg};

/// Applies the pattern rules to a message body and captures the raw string
/// fields of a fill confirmation. Order-level rules run once over the
/// whole body; leg rules run over each leg segment independently, so one
/// message yields as many legs as it prints.
pub struct FieldExtractor;

impl FieldExtractor {
    pub fn extract(body: &str) -> Result<RawFillConfirm, ExtractionError> {
        let text = preprocess::normalize(body);

        let order_id = Self::capture(&patterns::ORDER_ID, &text)
            .ok_or_else(|| ExtractionError::not_found("order_id"))?;

        let date_received = Self::capture(&patterns::DATE_RECEIVED, &text)
            .ok_or_else(|| ExtractionError::not_found("date_received"))?;
        if coercion::parse_timestamp(&date_received).is_none() {
            return Err(ExtractionError::coercion("date_received", date_received, "timestamp"));
        }

        let order_type = Self::capture(&patterns::ORDER_TYPE, &text)
            .ok_or_else(|| ExtractionError::not_found("order_type"))?;

        let mut legs = Vec::new();
        for (index, segment) in Self::leg_segments(&text).into_iter().enumerate() {
            legs.push(Self::extract_leg(index, segment)?);
        }

        Ok(RawFillConfirm { order_id, date_received, order_type, legs })
    }

    /// First capture group of the first match, trimmed.
    fn capture(rule: &Regex, text: &str) -> Option<String> {
        rule.captures(text)
            .and_then(|caps| caps.get(1))
            .map(|group| group.as_str().trim().to_string())
    }

    /// Slices the body into per-leg segments. Each segment starts at a
    /// `Sold`/`Bought` leg line and runs up to the next one (or the end of
    /// the body), so every leg carries its own descriptor, price and fill
    /// time.
    fn leg_segments(text: &str) -> Vec<&str> {
        let starts: Vec<usize> = patterns::LEG_START.find_iter(text).map(|hit| hit.start()).collect();
        starts
            .iter()
            .enumerate()
            .map(|(i, &start)| {
                let end = starts.get(i + 1).copied().unwrap_or(text.len());
                text[start..end].trim_end()
            })
            .collect()
    }

    fn extract_leg(index: usize, segment: &str) -> Result<RawLeg, ExtractionError> {
        let action = Self::capture(&patterns::LEG_ACTION, segment)
            .ok_or_else(|| ExtractionError::leg_not_found(index, "action"))?;

        let quantity = Self::capture(&patterns::LEG_QUANTITY, segment)
            .ok_or_else(|| ExtractionError::leg_not_found(index, "quantity"))?;
        if coercion::parse_quantity(&quantity).is_none() {
            return Err(ExtractionError::leg_coercion(index, "quantity", quantity, "integer"));
        }

        let symbol = Self::capture(&patterns::LEG_SYMBOL, segment)
            .ok_or_else(|| ExtractionError::leg_not_found(index, "symbol"))?;

        let price_caps = patterns::FILL_PRICE
            .captures(segment)
            .ok_or_else(|| ExtractionError::leg_not_found(index, "fill_price"))?;
        let fill_price = price_caps[1].trim().to_string();
        if coercion::parse_price(&fill_price).is_none() {
            return Err(ExtractionError::leg_coercion(index, "fill_price", fill_price, "number"));
        }

        // Everything before the price separator describes the instrument;
        // the option qualifiers live there and nowhere else.
        let descriptor = segment[..price_caps.get(0).unwrap().start()].trim_end();

        let option_type = Self::capture(&patterns::OPTION_TYPE, descriptor);
        let (expiration, strike) = if option_type.is_some() {
            let strike = Self::capture_strike(descriptor)
                .ok_or_else(|| ExtractionError::leg_not_found(index, "strike"))?;
            if coercion::parse_price(&strike).is_none() {
                return Err(ExtractionError::leg_coercion(index, "strike", strike, "number"));
            }

            let expiration = Self::capture(&patterns::EXPIRATION, descriptor)
                .ok_or_else(|| ExtractionError::leg_not_found(index, "expiration"))?;
            if coercion::parse_expiration(&expiration).is_none() {
                return Err(ExtractionError::leg_coercion(index, "expiration", expiration, "date"));
            }

            (Some(expiration), Some(strike))
        } else {
            (None, None)
        };

        let fill_time = Self::capture(&patterns::FILL_TIME, segment)
            .ok_or_else(|| ExtractionError::leg_not_found(index, "fill_time"))?;
        if coercion::parse_timestamp(&fill_time).is_none() {
            return Err(ExtractionError::leg_coercion(index, "fill_time", fill_time, "timestamp"));
        }

        Ok(RawLeg {
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

    /// The strike sits on whichever side of the Put/Call word faces the
    /// price separator; the rule captures it in group 1 or 2.
    fn capture_strike(descriptor: &str) -> Option<String> {
        patterns::STRIKE_SLOT.captures(descriptor).and_then(|caps| {
            caps.get(1)
                .or_else(|| caps.get(2))
                .map(|group| group.as_str().trim().to_string())
        })
    }
}
