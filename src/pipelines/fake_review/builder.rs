use std::path::{Path, PathBuf};

use super::pipeline::{verdict_table, FakeReviewPipeline};
use crate::error::{PipelineError, Result};
use crate::loaders::{ClassifierLoader, InputMode};

const DEFAULT_MODEL_FILE: &str = "fake_review_model.json";

/// Builder for creating [`FakeReviewPipeline`] instances.
///
/// Fake-review artifacts are text-mode bundles (classifier plus its own
/// vectorizer) exported with probability support; `build` rejects
/// anything else.
///
/// # Examples
///
/// ```rust,no_run
/// use feedback_pipelines::fake_review::FakeReviewPipelineBuilder;
///
/// # fn main() -> feedback_pipelines::error::Result<()> {
/// let pipeline = FakeReviewPipelineBuilder::new("artifacts").build()?;
/// # Ok(())
/// # }
/// ```
pub struct FakeReviewPipelineBuilder {
    artifact_dir: PathBuf,
    model_file: String,
}

impl FakeReviewPipelineBuilder {
    /// Creates a builder reading artifacts from `artifact_dir`.
    pub fn new(artifact_dir: impl AsRef<Path>) -> Self {
        Self {
            artifact_dir: artifact_dir.as_ref().to_path_buf(),
            model_file: DEFAULT_MODEL_FILE.into(),
        }
    }

    /// Classifier artifact filename (default: `fake_review_model.json`).
    pub fn model_file(mut self, filename: impl Into<String>) -> Self {
        self.model_file = filename.into();
        self
    }

    /// Loads and validates the artifact and builds the pipeline.
    ///
    /// # Errors
    ///
    /// Fails on missing or malformed artifacts, on vector-mode artifacts,
    /// and on classifiers exported without calibrated probabilities (a
    /// confidence is never fabricated from a hard label).
    pub fn build(self) -> Result<FakeReviewPipeline> {
        let loaded = ClassifierLoader::new(&self.artifact_dir, &self.model_file).load()?;

        if loaded.input_mode != InputMode::Text {
            return Err(PipelineError::ArtifactLoad(format!(
                "Fake-review detection needs a text-mode artifact, '{}' declares {} mode",
                self.model_file, loaded.input_mode
            )));
        }
        if !loaded.model.supports_probabilities() {
            return Err(PipelineError::ArtifactLoad(format!(
                "'{}' was exported without probability support; cannot produce a confidence",
                self.model_file
            )));
        }

        let vectorizer = loaded.vectorizer.ok_or_else(|| {
            PipelineError::Unexpected("Text-mode artifact without vectorizer".into())
        })?;
        let verdicts = verdict_table(loaded.model.class_outputs())?;

        Ok(FakeReviewPipeline {
            vectorizer,
            model: loaded.model,
            verdicts,
        })
    }
}
