use std::path::{Path, PathBuf};

use super::pipeline::{ClassifierBackend, LabelDecoder, SentimentPipeline};
use crate::error::{PipelineError, Result};
use crate::loaders::{ClassifierLoader, InputMode, LabelEncoderLoader, VectorizerLoader};
use crate::models::naive_bayes::ClassOutputs;

const DEFAULT_MODEL_FILE: &str = "sentiment_model.json";
const DEFAULT_VECTORIZER_FILE: &str = "tfidf_vectorizer.json";
const DEFAULT_LABEL_ENCODER_FILE: &str = "label_encoder.json";

/// Builder for creating [`SentimentPipeline`] instances.
///
/// The entry points pick the calling convention up front:
/// [`Self::text_mode`] for artifacts that bundle their own vectorizer,
/// [`Self::vector_mode`] for artifacts fed by a standalone vectorizer.
/// `build` fails if the artifact on disk declares the other convention.
///
/// # Examples
///
/// ```rust,no_run
/// use feedback_pipelines::sentiment::SentimentPipelineBuilder;
///
/// # fn main() -> feedback_pipelines::error::Result<()> {
/// let pipeline = SentimentPipelineBuilder::vector_mode("artifacts")
///     .model_file("naive_bayes_tuned.json")
///     .build()?;
/// # Ok(())
/// # }
/// ```
pub struct SentimentPipelineBuilder {
    mode: InputMode,
    artifact_dir: PathBuf,
    model_file: String,
    vectorizer_file: String,
    label_encoder_file: String,
}

impl SentimentPipelineBuilder {
    fn new(mode: InputMode, artifact_dir: impl AsRef<Path>) -> Self {
        Self {
            mode,
            artifact_dir: artifact_dir.as_ref().to_path_buf(),
            model_file: DEFAULT_MODEL_FILE.into(),
            vectorizer_file: DEFAULT_VECTORIZER_FILE.into(),
            label_encoder_file: DEFAULT_LABEL_ENCODER_FILE.into(),
        }
    }

    /// Creates a builder for a classifier that vectorizes internally.
    pub fn text_mode(artifact_dir: impl AsRef<Path>) -> Self {
        Self::new(InputMode::Text, artifact_dir)
    }

    /// Creates a builder for a classifier fed by a standalone vectorizer
    /// artifact.
    pub fn vector_mode(artifact_dir: impl AsRef<Path>) -> Self {
        Self::new(InputMode::Vector, artifact_dir)
    }

    /// Classifier artifact filename (default: `sentiment_model.json`).
    pub fn model_file(mut self, filename: impl Into<String>) -> Self {
        self.model_file = filename.into();
        self
    }

    /// Vectorizer artifact filename (default: `tfidf_vectorizer.json`).
    /// Only consulted in vector mode.
    pub fn vectorizer_file(mut self, filename: impl Into<String>) -> Self {
        self.vectorizer_file = filename.into();
        self
    }

    /// Label-encoder artifact filename (default: `label_encoder.json`).
    /// Only loaded when the classifier emits integer codes.
    pub fn label_encoder_file(mut self, filename: impl Into<String>) -> Self {
        self.label_encoder_file = filename.into();
        self
    }

    /// Loads every artifact, validates the calling convention, and builds
    /// the pipeline.
    ///
    /// # Errors
    ///
    /// Any missing, malformed, or convention-mismatched artifact fails
    /// here; nothing is re-validated per request.
    pub fn build(self) -> Result<SentimentPipeline> {
        let loaded = ClassifierLoader::new(&self.artifact_dir, &self.model_file).load()?;

        if loaded.input_mode != self.mode {
            return Err(PipelineError::ArtifactLoad(format!(
                "Requested {}-mode pipeline but '{}' declares {} mode",
                self.mode, self.model_file, loaded.input_mode
            )));
        }

        let backend = match self.mode {
            InputMode::Text => {
                // ClassifierLoader guarantees the embedded vectorizer for
                // text-mode artifacts.
                let vectorizer = loaded.vectorizer.ok_or_else(|| {
                    PipelineError::Unexpected("Text-mode artifact without vectorizer".into())
                })?;
                ClassifierBackend::Text {
                    vectorizer,
                    model: loaded.model,
                }
            }
            InputMode::Vector => {
                let vectorizer =
                    VectorizerLoader::new(&self.artifact_dir, &self.vectorizer_file).load()?;
                if vectorizer.dimension() != loaded.model.n_features() {
                    return Err(PipelineError::ArtifactFormat(format!(
                        "Vectorizer dimension {} does not match classifier width {}",
                        vectorizer.dimension(),
                        loaded.model.n_features()
                    )));
                }
                ClassifierBackend::Vector {
                    vectorizer,
                    model: loaded.model,
                }
            }
        };

        let decoder = match backend {
            ClassifierBackend::Text { ref model, .. }
            | ClassifierBackend::Vector { ref model, .. } => match model.class_outputs() {
                ClassOutputs::Labels(_) => None,
                ClassOutputs::Codes(_) => {
                    let encoder =
                        LabelEncoderLoader::new(&self.artifact_dir, &self.label_encoder_file)
                            .load()
                            .map_err(|e| {
                                PipelineError::ArtifactLoad(format!(
                                    "Classifier emits integer codes and needs a label encoder: {e}"
                                ))
                            })?;
                    Some(LabelDecoder::from_classes(&encoder.classes)?)
                }
            },
        };

        Ok(SentimentPipeline { backend, decoder })
    }
}
