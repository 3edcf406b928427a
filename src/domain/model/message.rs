/// An inbound email as the mailbox collaborator hands it over: opaque
/// sender, subject and body strings. Retrieval/IMAP concerns stay outside.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmailMessage {
    pub sender: String,
    pub subject: String,
    pub body: String,
}

impl EmailMessage {
    pub fn new(sender: impl Into<String>, subject: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            sender: sender.into(),
            subject: subject.into(),
            body: body.into(),
        }
    }

    /// Builds a message from a saved mail dump: `From:`/`Subject:` header
    /// lines, a blank line, then the body. Header names are matched
    /// case-insensitively; unknown header lines are skipped. Missing
    /// headers come back empty so the source filter fails closed.
    pub fn from_file_text(raw: &str) -> Self {
        let mut sender = String::new();
        let mut subject = String::new();
        let mut body_lines: Vec<&str> = Vec::new();
        let mut in_headers = true;

        for line in raw.lines() {
            if in_headers {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    in_headers = false;
                    continue;
                }
                let lower = trimmed.to_ascii_lowercase();
                if lower.starts_with("from:") {
                    sender = trimmed["from:".len()..].trim().to_string();
                } else if lower.starts_with("subject:") {
                    subject = trimmed["subject:".len()..].trim().to_string();
                }
            } else {
                body_lines.push(line);
            }
        }

        Self {
            sender,
            subject,
            body: body_lines.join("\n"),
        }
    }
}
