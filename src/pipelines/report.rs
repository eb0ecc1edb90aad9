//! CSV report export.
//!
//! Serializes `(feedback, sentiment)` rows to UTF-8 CSV with a header
//! row, the one on-wire format in the system. Quoting follows standard
//! CSV rules via the `csv` crate, so downstream spreadsheet tooling reads
//! the download unchanged.

use std::io::Write;

use crate::error::Result;
use crate::feedback::FeedbackRecord;
use crate::pipelines::sentiment::SentimentLabel;

const HEADER: [&str; 2] = ["Feedback", "Sentiment"];

/// One exported report line.
#[derive(Debug, Clone)]
pub struct ReportRow {
    /// The raw feedback text.
    pub feedback: String,
    /// The sentiment it classified to.
    pub sentiment: SentimentLabel,
}

/// An ordered table of classified feedback, ready for download.
#[derive(Debug, Clone, Default)]
pub struct SentimentReport {
    rows: Vec<ReportRow>,
}

impl SentimentReport {
    /// Creates an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one row.
    pub fn push(&mut self, feedback: impl Into<String>, sentiment: SentimentLabel) {
        self.rows.push(ReportRow {
            feedback: feedback.into(),
            sentiment,
        });
    }

    /// Builds a report from stored feedback records, in submission order.
    pub fn from_records(records: &[FeedbackRecord]) -> Self {
        let rows = records
            .iter()
            .map(|record| ReportRow {
                feedback: record.text.clone(),
                sentiment: record.sentiment,
            })
            .collect();
        Self { rows }
    }

    /// Number of data rows (the header is not counted).
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the report has no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Exported rows, in order.
    pub fn rows(&self) -> &[ReportRow] {
        &self.rows
    }

    /// Writes the report as CSV: header row first, one record per line.
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        csv_writer.write_record(HEADER)?;
        for row in &self.rows {
            csv_writer.write_record([row.feedback.as_str(), &row.sentiment.to_string()])?;
        }
        csv_writer.flush()?;
        Ok(())
    }

    /// Serializes the report to CSV bytes for download.
    pub fn to_csv_bytes(&self) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();
        self.write_csv(&mut buffer)?;
        Ok(buffer)
    }
}
