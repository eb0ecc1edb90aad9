//! Satisfaction trend forecasting pipeline.
//!
//! Serve a pre-fitted ARIMA model: ask for a horizon in days, get back an
//! ordered series of predicted ratings. Deterministic by construction.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use feedback_pipelines::forecast::ForecastPipelineBuilder;
//!
//! # fn main() -> feedback_pipelines::error::Result<()> {
//! let pipeline = ForecastPipelineBuilder::new("artifacts").build()?;
//! let output = pipeline.run(15)?;
//! println!("{:?}", output.points);
//! # Ok(())
//! # }
//! ```

// ============ Internal API ============

pub(crate) mod builder;
pub(crate) mod pipeline;

// ============ Public API ============

pub use crate::pipelines::stats::PipelineStats;
pub use builder::ForecastPipelineBuilder;
pub use pipeline::{ForecastPipeline, Output};
