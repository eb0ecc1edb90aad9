//! Feedback records and the session feedback log.
//!
//! Submitted feedback lives only in process memory for the lifetime of
//! the session; there is no persistence layer. Records are immutable once
//! created.

pub(crate) mod access;
pub(crate) mod store;

pub use access::{DashboardPolicy, Role, RoleDashboardPolicy};
pub use store::{FeedbackStore, InMemoryFeedbackStore};

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::{PipelineError, Result};
use crate::pipelines::sentiment::SentimentLabel;

/// Hospital departments feedback can be filed against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Department {
    /// Cardiology ward.
    Cardiology,
    /// Emergency department.
    Emergency,
    /// Radiology and imaging.
    Radiology,
    /// Pediatrics ward.
    Pediatrics,
    /// General medicine.
    GeneralMedicine,
}

impl std::fmt::Display for Department {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Department::Cardiology => "Cardiology",
            Department::Emergency => "Emergency",
            Department::Radiology => "Radiology",
            Department::Pediatrics => "Pediatrics",
            Department::GeneralMedicine => "General Medicine",
        };
        write!(f, "{name}")
    }
}

/// A 1-5 star rating, validated at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct Rating(u8);

impl Rating {
    /// Creates a rating, rejecting anything outside 1..=5.
    pub fn new(stars: u8) -> Result<Self> {
        if (1..=5).contains(&stars) {
            Ok(Self(stars))
        } else {
            Err(PipelineError::InvalidInput(format!(
                "Rating must be between 1 and 5 stars, got {stars}"
            )))
        }
    }

    /// The star count.
    pub fn stars(&self) -> u8 {
        self.0
    }
}

/// One submitted piece of feedback with its derived sentiment.
#[derive(Debug, Clone, Serialize)]
pub struct FeedbackRecord {
    /// Submitter's name as entered in the form.
    pub name: String,
    /// Department the feedback concerns.
    pub department: Department,
    /// Star rating given alongside the text.
    pub rating: Rating,
    /// The free-text feedback.
    pub text: String,
    /// Sentiment derived at submission time.
    pub sentiment: SentimentLabel,
    /// Submission timestamp.
    pub submitted_at: DateTime<Utc>,
}

impl FeedbackRecord {
    /// Creates a record stamped with the current time.
    pub fn new(
        name: impl Into<String>,
        department: Department,
        rating: Rating,
        text: impl Into<String>,
        sentiment: SentimentLabel,
    ) -> Self {
        Self {
            name: name.into(),
            department,
            rating,
            text: text.into(),
            sentiment,
            submitted_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_bounds_are_enforced() {
        assert!(Rating::new(1).is_ok());
        assert!(Rating::new(5).is_ok());
        assert!(matches!(
            Rating::new(0),
            Err(PipelineError::InvalidInput(_))
        ));
        assert!(matches!(
            Rating::new(6),
            Err(PipelineError::InvalidInput(_))
        ));
    }

    #[test]
    fn record_carries_its_inputs() {
        let record = FeedbackRecord::new(
            "Priya",
            Department::Emergency,
            Rating::new(4).unwrap(),
            "Quick triage, friendly staff",
            SentimentLabel::Positive,
        );
        assert_eq!(record.department, Department::Emergency);
        assert_eq!(record.rating.stars(), 4);
        assert_eq!(record.sentiment, SentimentLabel::Positive);
    }
}
