//! Fake review detection pipeline.
//!
//! Flag reviews as `Genuine` or `Fake`, with the maximum class posterior
//! probability as the confidence score.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use feedback_pipelines::fake_review::FakeReviewPipelineBuilder;
//!
//! # fn main() -> feedback_pipelines::error::Result<()> {
//! let pipeline = FakeReviewPipelineBuilder::new("artifacts").build()?;
//!
//! let output = pipeline.run("Amazing experience, five stars, definitely real")?;
//! println!("{} (confidence: {:.2})", output.verdict, output.confidence);
//! # Ok(())
//! # }
//! ```

// ============ Internal API ============

pub(crate) mod builder;
pub(crate) mod pipeline;

// ============ Public API ============

pub use crate::pipelines::stats::PipelineStats;
pub use builder::FakeReviewPipelineBuilder;
pub use pipeline::{FakeReviewPipeline, Output, Verdict};
