use std::path::{Path, PathBuf};

use super::pipeline::ForecastPipeline;
use crate::error::Result;
use crate::loaders::ForecasterLoader;

const DEFAULT_MODEL_FILE: &str = "forecast_model.json";

/// Builder for creating [`ForecastPipeline`] instances.
///
/// # Examples
///
/// ```rust,no_run
/// use feedback_pipelines::forecast::ForecastPipelineBuilder;
///
/// # fn main() -> feedback_pipelines::error::Result<()> {
/// let pipeline = ForecastPipelineBuilder::new("artifacts")
///     .model_file("manual_arima_feedback.json")
///     .build()?;
/// # Ok(())
/// # }
/// ```
pub struct ForecastPipelineBuilder {
    artifact_dir: PathBuf,
    model_file: String,
}

impl ForecastPipelineBuilder {
    /// Creates a builder reading artifacts from `artifact_dir`.
    pub fn new(artifact_dir: impl AsRef<Path>) -> Self {
        Self {
            artifact_dir: artifact_dir.as_ref().to_path_buf(),
            model_file: DEFAULT_MODEL_FILE.into(),
        }
    }

    /// Forecaster artifact filename (default: `forecast_model.json`).
    pub fn model_file(mut self, filename: impl Into<String>) -> Self {
        self.model_file = filename.into();
        self
    }

    /// Loads the forecaster artifact and builds the pipeline.
    ///
    /// # Errors
    ///
    /// Fails if the artifact is missing or its order and coefficient
    /// shapes disagree.
    pub fn build(self) -> Result<ForecastPipeline> {
        let model = ForecasterLoader::new(&self.artifact_dir, &self.model_file).load()?;
        Ok(ForecastPipeline { model })
    }
}
