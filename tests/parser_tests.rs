use anyhow::Result;
use serde_json::json;
use tasty_fill_parser::domain::enums::{OptionType, TradeAction};
use tasty_fill_parser::domain::errors::ParseError;
use tasty_fill_parser::domain::model::EmailMessage;
use tasty_fill_parser::infrastructure::email::{FillConfirmParser, SourceFilter};

/// Body shaped like the broker's README example: one bought put, ISO
/// timestamps, order header up front.
const README_BODY: &str = "\
Your Order #123456789 has been filled.

Received At: 2024-11-06T09:42:21
Submitted Order Type: Limit @ 1.10 Credit

Fill Details
Bought 1 SPX Jan 06 2024 1234.5 Put @ 6.45
Filled at: 2024-11-06T09:43:54
";

fn fill_confirmation(body: &str) -> EmailMessage {
    EmailMessage::new("noreply@tastytrade.com", "Order Fill Confirmation", body)
}

#[test]
fn test_end_to_end_canonical_json() -> Result<()> {
    let parser = FillConfirmParser::default();

    // Parse the README example message
    let record = parser
        .parse(&fill_confirmation(README_BODY))?
        .expect("message should be relevant");

    // The export shape is field-exact: names, absence of null, timestamp
    // format and number formatting all have to line up
    let expected = json!({
        "order_id": "123456789",
        "date_received": "2024-11-06T09:42:21",
        "order_type": "Limit @ 1.10 Credit",
        "legs": [
            {
                "action": "Bought",
                "quantity": 1,
                "symbol": "SPX",
                "expiration": "2024-01-06T00:00:00",
                "option_type": "Put",
                "strike": 1234.5,
                "fill_price": 6.45,
                "fill_time": "2024-11-06T09:43:54"
            }
        ]
    });
    assert_eq!(serde_json::to_value(&record)?, expected);

    Ok(())
}

#[test]
fn test_eastern_time_body_with_pdf_artifacts() -> Result<()> {
    // Labels mangled the way PDF text extraction leaves them: colons
    // dropped, "Type" split in half, strike after the Put word
    let body = "\
Order #360559962
Received At Nov 06, 2024 09:42:21 AM EST
Submitted Order T ype Limit @ 6.45 Credit
Fill Details
Sold 1 SPX 11/06/24 Put 6025.0 @ 6.45 Filled at Nov 06, 2024 09:43:17 PM EST
";
    let parser = FillConfirmParser::default();
    let record = parser
        .parse(&fill_confirmation(body))?
        .expect("message should be relevant");

    assert_eq!(record.order_id, "360559962");
    assert_eq!(record.order_type, "Limit @ 6.45 Credit");
    assert_eq!(record.date_received.to_string(), "2024-11-06 09:42:21");

    let leg = &record.legs[0];
    assert_eq!(leg.action, TradeAction::Sold);
    assert_eq!(leg.option_type, Some(OptionType::Put));
    assert_eq!(leg.strike, Some(6025.0));
    assert_eq!(leg.expiration.map(|e| e.to_string()), Some("2024-11-06 00:00:00".to_string()));
    // PM fill time lands in the evening
    assert_eq!(leg.fill_time.to_string(), "2024-11-06 21:43:17");

    Ok(())
}

#[test]
fn test_multi_leg_order_preserves_body_order() -> Result<()> {
    let body = "\
Your Order #360559962 has been filled.
Received At: Nov 06, 2024 09:42:21 AM EST
Submitted Order Type: Limit @ 1.05 Credit
Fill Details
Sold 1 SPX 11/06/24 Put 6025.0 @ 6.45 Filled at: Nov 06, 2024 09:42:21 AM EST
Bought 1 SPX 11/06/24 Put 6020.0 @ 5.40 Filled at: Nov 06, 2024 09:42:21 AM EST
";
    let parser = FillConfirmParser::default();
    let record = parser
        .parse(&fill_confirmation(body))?
        .expect("message should be relevant");

    // One leg per leg line, in the order the body prints them
    assert_eq!(record.legs.len(), 2);
    assert_eq!(record.legs[0].action, TradeAction::Sold);
    assert_eq!(record.legs[0].strike, Some(6025.0));
    assert_eq!(record.legs[0].fill_price, 6.45);
    assert_eq!(record.legs[1].action, TradeAction::Bought);
    assert_eq!(record.legs[1].strike, Some(6020.0));
    assert_eq!(record.legs[1].fill_price, 5.40);

    Ok(())
}

#[test]
fn test_equity_leg_omits_option_fields_entirely() -> Result<()> {
    let body = "\
Order #555666777
Received At: 2024-01-06T10:15:00
Submitted Order Type: Market
Fill Details
Bought 100 AAPL @ 185.50 Filled at: 2024-01-06T10:15:01
";
    let parser = FillConfirmParser::default();
    let record = parser
        .parse(&fill_confirmation(body))?
        .expect("message should be relevant");

    let leg = &record.legs[0];
    assert_eq!(leg.quantity, 100);
    assert!(leg.expiration.is_none());
    assert!(leg.option_type.is_none());
    assert!(leg.strike.is_none());

    // Absent in the JSON too, not null
    let json = serde_json::to_value(&record)?;
    let leg_json = json["legs"][0].as_object().expect("leg object");
    assert!(!leg_json.contains_key("expiration"));
    assert!(!leg_json.contains_key("option_type"));
    assert!(!leg_json.contains_key("strike"));
    assert_eq!(leg_json.len(), 5);

    Ok(())
}

#[test]
fn test_subject_without_marker_is_skipped() -> Result<()> {
    let parser = FillConfirmParser::default();

    // Perfectly parseable body, wrong subject: routing says no
    let message = EmailMessage::new("noreply@tastytrade.com", "Statement Ready", README_BODY);
    assert_eq!(parser.parse(&message)?, None);

    // Same decision visible through the filter directly
    let filter = SourceFilter::default();
    assert!(!filter.is_relevant("noreply@tastytrade.com", "Statement Ready"));

    Ok(())
}

#[test]
fn test_sender_outside_broker_domain_is_skipped() -> Result<()> {
    let parser = FillConfirmParser::default();
    let message = EmailMessage::new("spoof@example.com", "Order Fill Confirmation", README_BODY);
    assert_eq!(parser.parse(&message)?, None);
    Ok(())
}

#[test]
fn test_non_numeric_strike_fails_extraction() {
    let body = "\
Order #123456789
Received At: 2024-11-06T09:42:21
Submitted Order Type: Limit @ 1.10 Credit
Fill Details
Bought 1 SPX Jan 06 2024 N/A Put @ 6.45 Filled at: 2024-11-06T09:43:54
";
    let parser = FillConfirmParser::default();
    let err = parser.parse(&fill_confirmation(body)).unwrap_err();

    match err {
        ParseError::Extraction(e) => {
            assert_eq!(e.field(), "strike");
            assert_eq!(e.leg_index(), Some(0));
        }
        other => panic!("Expected extraction error, got {:?}", other),
    }
}

#[test]
fn test_missing_received_at_names_the_field() {
    let body = "\
Order #123456789
Submitted Order Type: Limit @ 1.10 Credit
Bought 1 SPX Jan 06 2024 1234.5 Put @ 6.45 Filled at: 2024-11-06T09:43:54
";
    let parser = FillConfirmParser::default();
    let err = parser.parse(&fill_confirmation(body)).unwrap_err();

    match err {
        ParseError::Extraction(e) => assert_eq!(e.field(), "date_received"),
        other => panic!("Expected extraction error, got {:?}", other),
    }
}

#[test]
fn test_parsing_is_idempotent() -> Result<()> {
    let parser = FillConfirmParser::default();
    let message = fill_confirmation(README_BODY);

    let first = parser.parse(&message)?.expect("message should be relevant");
    let second = parser.parse(&message)?.expect("message should be relevant");

    // Structurally identical, and the diff helper agrees
    assert_eq!(first, second);
    assert!(first.diff(&second).is_empty());

    Ok(())
}
