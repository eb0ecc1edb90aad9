use std::sync::Mutex;

use super::FeedbackRecord;
use crate::error::{PipelineError, Result};

/// An injectable feedback log.
///
/// The serving core only ever appends and reads back in submission
/// order; implementations choose the lifecycle (the in-memory store here
/// is process-scoped).
pub trait FeedbackStore {
    /// Appends a record to the log.
    fn append(&self, record: FeedbackRecord) -> Result<()>;

    /// Returns every record in submission order.
    fn all(&self) -> Result<Vec<FeedbackRecord>>;

    /// Number of stored records.
    fn len(&self) -> Result<usize>;

    /// Whether the log is empty.
    fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }
}

/// Process-scoped feedback log held in memory.
///
/// The mutex makes concurrent submitters safe; there is still no
/// durability, records vanish when the process exits.
#[derive(Debug, Default)]
pub struct InMemoryFeedbackStore {
    records: Mutex<Vec<FeedbackRecord>>,
}

impl InMemoryFeedbackStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Vec<FeedbackRecord>>> {
        self.records
            .lock()
            .map_err(|_| PipelineError::Unexpected("Feedback store lock poisoned".into()))
    }
}

impl FeedbackStore for InMemoryFeedbackStore {
    fn append(&self, record: FeedbackRecord) -> Result<()> {
        self.lock()?.push(record);
        Ok(())
    }

    fn all(&self) -> Result<Vec<FeedbackRecord>> {
        Ok(self.lock()?.clone())
    }

    fn len(&self) -> Result<usize> {
        Ok(self.lock()?.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feedback::{Department, Rating};
    use crate::pipelines::sentiment::SentimentLabel;

    fn record(name: &str, sentiment: SentimentLabel) -> FeedbackRecord {
        FeedbackRecord::new(
            name,
            Department::Radiology,
            Rating::new(3).unwrap(),
            "scan went fine",
            sentiment,
        )
    }

    #[test]
    fn preserves_submission_order() {
        let store = InMemoryFeedbackStore::new();
        store.append(record("first", SentimentLabel::Neutral)).unwrap();
        store.append(record("second", SentimentLabel::Positive)).unwrap();

        let all = store.all().unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].name, "first");
        assert_eq!(all[1].name, "second");
    }

    #[test]
    fn len_tracks_appends() {
        let store = InMemoryFeedbackStore::new();
        assert!(store.is_empty().unwrap());
        store.append(record("only", SentimentLabel::Negative)).unwrap();
        assert_eq!(store.len().unwrap(), 1);
    }

    #[test]
    fn safe_under_concurrent_submissions() {
        use std::sync::Arc;

        let store = Arc::new(InMemoryFeedbackStore::new());
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || {
                    for _ in 0..50 {
                        store
                            .append(record(&format!("user-{i}"), SentimentLabel::Neutral))
                            .unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(store.len().unwrap(), 400);
    }
}
