// ============ Pipeline implementations ============

pub mod fake_review;
pub mod forecast;
pub mod report;
pub mod sentiment;

pub(crate) mod stats;
