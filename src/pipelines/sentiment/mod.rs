//! Sentiment analysis pipeline.
//!
//! Classify feedback text as `Positive`, `Negative`, or `Neutral` with a
//! pre-fitted TF-IDF + Naive Bayes artifact pair.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use feedback_pipelines::sentiment::SentimentPipelineBuilder;
//!
//! # fn main() -> feedback_pipelines::error::Result<()> {
//! let pipeline = SentimentPipelineBuilder::vector_mode("artifacts").build()?;
//!
//! let output = pipeline.run("The staff were wonderful and the wait was short")?;
//! println!("sentiment: {}", output.label);
//! # Ok(())
//! # }
//! ```
//!
//! # Calling conventions
//!
//! Exported classifier artifacts come in two shapes: some bundle their own
//! vectorizer and take raw text, others expect features from a standalone
//! vectorizer artifact. The builder entry point picks one convention and
//! `build` rejects an artifact that declares the other, so the mismatch
//! can never surface at request time. Classifiers that emit integer codes
//! instead of label strings get a label-decoder stage attached at build.

// ============ Internal API ============

pub(crate) mod builder;
pub(crate) mod pipeline;

// ============ Public API ============

pub use crate::pipelines::stats::PipelineStats;
pub use builder::SentimentPipelineBuilder;
pub use pipeline::{
    BatchOutput, BatchResult, LabelDecoder, Output, SentimentLabel, SentimentPipeline,
};

#[doc(hidden)]
pub use pipeline::SentimentInput;
