use tasty_fill_parser::infrastructure::email::SourceFilter;

#[test]
fn test_accepts_broker_fill_mail() {
    let filter = SourceFilter::default();
    assert!(filter.is_relevant("noreply@tastytrade.com", "Order Fill Notification"));
}

#[test]
fn test_accepts_subdomains_and_display_names() {
    let filter = SourceFilter::default();

    // Subdomain of the configured domain
    assert!(filter.is_relevant("alerts@mail.tastytrade.com", "Order Fill"));

    // Display-name form, mixed case
    assert!(filter.is_relevant("tastytrade <noreply@Tastytrade.com>", "Order Fill"));
}

#[test]
fn test_rejects_other_senders() {
    let filter = SourceFilter::default();

    assert!(!filter.is_relevant("friend@example.com", "Order Fill"));
    // A domain merely ending in the broker name is not the broker
    assert!(!filter.is_relevant("noreply@nottastytrade.com", "Order Fill"));
    // Fails closed on ambiguous input
    assert!(!filter.is_relevant("", "Order Fill"));
    assert!(!filter.is_relevant("no-address-here", "Order Fill"));
}

#[test]
fn test_rejects_subjects_without_the_marker() {
    let filter = SourceFilter::default();

    assert!(!filter.is_relevant("noreply@tastytrade.com", "Statement Ready"));
    assert!(!filter.is_relevant("noreply@tastytrade.com", ""));
    // Marker matching is case-sensitive, like the broker's templates
    assert!(!filter.is_relevant("noreply@tastytrade.com", "order fill notification"));
}

#[test]
fn test_custom_broker_settings() {
    let filter = SourceFilter::new("broker.example", "Execution Report");

    assert!(filter.is_relevant("fills@broker.example", "Execution Report #42"));
    assert!(!filter.is_relevant("fills@broker.example", "Order Fill"));
    assert!(!filter.is_relevant("noreply@tastytrade.com", "Execution Report #42"));
}
