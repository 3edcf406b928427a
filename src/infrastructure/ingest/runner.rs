//! Directory sweep over saved message files.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use log::{debug, error, info, warn};

use crate::config_loader::AppConfig;
use crate::domain::model::{EmailMessage, TradeRecord};
use crate::domain::traits::TradeSink;
use crate::infrastructure::email::{FillConfirmParser, SourceFilter};
use crate::infrastructure::sink::JsonFileSink;

/// Counts reported after one sweep of the inbox directory.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IngestSummary {
    /// Message files considered.
    pub files: usize,
    /// Records parsed and handed to the sink.
    pub stored: usize,
    /// Files that were not fill confirmations.
    pub skipped: usize,
    /// Files that failed to read, parse or store.
    pub failures: usize,
}

/// Sweeps a directory of saved broker emails (`.txt` or `.eml`), parses
/// each one and persists the resulting records.
///
/// Parsing fans out one tokio task per file since the parser is pure;
/// sink writes then happen sequentially on the runner task, which keeps
/// the one-writer-per-order-id discipline without any locking.
pub struct IngestRunner {
    config: Arc<AppConfig>,
    parser: FillConfirmParser,
    sink: JsonFileSink,
}

impl IngestRunner {
    pub fn new(config: Arc<AppConfig>) -> Self {
        let filter = SourceFilter::new(
            &config.broker.sender_domain,
            &config.broker.subject_marker,
        );
        let sink = JsonFileSink::new(config.output_dir());
        Self {
            config,
            parser: FillConfirmParser::new(filter),
            sink,
        }
    }

    pub async fn run(&self) -> Result<IngestSummary> {
        let files = self.message_files().await?;
        if files.is_empty() {
            warn!(
                "No message files found in {}",
                self.config.inbox_dir().display()
            );
            return Ok(IngestSummary::default());
        }
        info!("Found {} message files to process", files.len());

        let mut handles = Vec::with_capacity(files.len());
        for path in files {
            let parser = self.parser.clone();
            handles.push(tokio::spawn(async move {
                let outcome = Self::parse_file(&parser, &path).await;
                (path, outcome)
            }));
        }

        let mut summary = IngestSummary::default();
        for handle in handles {
            let (path, outcome) = handle.await.context("Ingest task panicked")?;
            summary.files += 1;
            match outcome {
                Ok(Some(record)) => match self.sink.store(&record) {
                    Ok(()) => summary.stored += 1,
                    Err(e) => self.register_failure(&mut summary, &path, e)?,
                },
                Ok(None) => {
                    debug!("Skipping {}: not a fill confirmation", path.display());
                    summary.skipped += 1;
                }
                Err(e) => self.register_failure(&mut summary, &path, e)?,
            }
        }

        Ok(summary)
    }

    /// One failed file never stops the sweep unless `halt_on_error` asks
    /// for exactly that.
    fn register_failure(
        &self,
        summary: &mut IngestSummary,
        path: &Path,
        e: anyhow::Error,
    ) -> Result<()> {
        summary.failures += 1;
        if self.config.app.halt_on_error {
            return Err(e.context(format!("Failed to process {}", path.display())));
        }
        error!("Failed to process {}: {:#}", path.display(), e);
        Ok(())
    }

    async fn parse_file(parser: &FillConfirmParser, path: &Path) -> Result<Option<TradeRecord>> {
        let raw = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read '{}'", path.display()))?;
        let message = EmailMessage::from_file_text(&raw);
        let record = parser
            .parse(&message)
            .with_context(|| format!("Failed to parse '{}'", path.display()))?;
        Ok(record)
    }

    /// Message files in the inbox, sorted by name so every sweep visits
    /// them in the same order.
    async fn message_files(&self) -> Result<Vec<PathBuf>> {
        let dir = self.config.inbox_dir();
        let mut entries = tokio::fs::read_dir(dir)
            .await
            .with_context(|| format!("Failed to read inbox directory '{}'", dir.display()))?;

        let mut files = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            let is_message = path
                .extension()
                .and_then(|ext| ext.to_str())
                .map(|ext| ext.eq_ignore_ascii_case("txt") || ext.eq_ignore_ascii_case("eml"))
                .unwrap_or(false);
            if is_message {
                files.push(path);
            }
        }
        files.sort();
        Ok(files)
    }
}
