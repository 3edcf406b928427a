//! Relevance gate in front of the extraction pipeline.

use crate::domain::constants::{BROKER_SENDER_DOMAIN, FILL_SUBJECT_MARKER};

/// Decides whether an inbound message is a fill confirmation worth
/// parsing: the sender address must belong to the broker's domain and the
/// subject must carry the order-activity marker. The check never errors;
/// anything ambiguous (empty sender, mangled address) is not relevant.
#[derive(Clone, Debug)]
pub struct SourceFilter {
    sender_domain: String,
    subject_marker: String,
}

impl Default for SourceFilter {
    fn default() -> Self {
        Self::new(BROKER_SENDER_DOMAIN, FILL_SUBJECT_MARKER)
    }
}

impl SourceFilter {
    pub fn new(sender_domain: &str, subject_marker: &str) -> Self {
        Self {
            sender_domain: sender_domain.trim().to_ascii_lowercase(),
            subject_marker: subject_marker.trim().to_string(),
        }
    }

    pub fn is_relevant(&self, sender: &str, subject: &str) -> bool {
        self.sender_matches(sender) && self.subject_matches(subject)
    }

    /// Domain comparison is case-insensitive and accepts subdomains, so
    /// `noreply@mail.tastytrade.com` passes for `tastytrade.com`.
    fn sender_matches(&self, sender: &str) -> bool {
        if self.sender_domain.is_empty() {
            return false;
        }
        // Tolerate display-name forms like `tastytrade <noreply@tastytrade.com>`
        let address = sender.trim().trim_end_matches('>');
        let domain = match address.rsplit_once('@') {
            Some((_, domain)) => domain.trim().to_ascii_lowercase(),
            None => return false,
        };
        domain == self.sender_domain || domain.ends_with(&format!(".{}", self.sender_domain))
    }

    /// Marker matching is an exact substring check, case-sensitive.
    fn subject_matches(&self, subject: &str) -> bool {
        !self.subject_marker.is_empty() && subject.contains(&self.subject_marker)
    }
}
