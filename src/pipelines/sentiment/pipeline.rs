use serde::{Deserialize, Serialize};

use crate::error::{PipelineError, Result};
use crate::models::naive_bayes::ClassOutputs;
use crate::models::{MultinomialNaiveBayes, TfidfVectorizer};
use crate::pipelines::stats::PipelineStats;

// ============ Labels ============

/// Sentiment of a piece of feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SentimentLabel {
    /// Favourable feedback.
    Positive,
    /// Unfavourable feedback.
    Negative,
    /// Neither clearly favourable nor unfavourable.
    Neutral,
}

impl std::fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SentimentLabel::Positive => "Positive",
            SentimentLabel::Negative => "Negative",
            SentimentLabel::Neutral => "Neutral",
        };
        write!(f, "{name}")
    }
}

impl SentimentLabel {
    pub(crate) fn parse(raw: &str) -> Result<Self> {
        match raw.to_ascii_lowercase().as_str() {
            "positive" => Ok(SentimentLabel::Positive),
            "negative" => Ok(SentimentLabel::Negative),
            "neutral" => Ok(SentimentLabel::Neutral),
            _ => Err(PipelineError::UnknownLabel(format!(
                "'{raw}' is not a fitted sentiment label"
            ))),
        }
    }
}

/// Fixed bijective mapping from integer class codes back to sentiment
/// labels, loaded from a label-encoder artifact. Codes index the fitted
/// class table; anything outside it is an error, never a default.
#[derive(Debug, Clone)]
pub struct LabelDecoder {
    classes: Vec<SentimentLabel>,
}

impl LabelDecoder {
    pub(crate) fn from_classes(classes: &[String]) -> Result<Self> {
        let classes = classes
            .iter()
            .map(|raw| {
                SentimentLabel::parse(raw).map_err(|_| {
                    PipelineError::ArtifactFormat(format!(
                        "Label encoder contains unsupported class '{raw}'"
                    ))
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { classes })
    }

    /// Decode an integer class code.
    pub fn decode(&self, code: i64) -> Result<SentimentLabel> {
        usize::try_from(code)
            .ok()
            .and_then(|index| self.classes.get(index).copied())
            .ok_or_else(|| {
                PipelineError::UnknownLabel(format!(
                    "Code {} is outside the fitted mapping of {} classes",
                    code,
                    self.classes.len()
                ))
            })
    }
}

// ============ Backend ============

/// The calling convention resolved at build time. Some artifact exports
/// bundle their own vectorizer and take raw text; others expect features
/// from a standalone vectorizer artifact.
pub(crate) enum ClassifierBackend {
    Text {
        vectorizer: TfidfVectorizer,
        model: MultinomialNaiveBayes,
    },
    Vector {
        vectorizer: TfidfVectorizer,
        model: MultinomialNaiveBayes,
    },
}

impl ClassifierBackend {
    fn model(&self) -> &MultinomialNaiveBayes {
        match self {
            ClassifierBackend::Text { model, .. } => model,
            ClassifierBackend::Vector { model, .. } => model,
        }
    }

    fn vectorizer(&self) -> &TfidfVectorizer {
        match self {
            ClassifierBackend::Text { vectorizer, .. } => vectorizer,
            ClassifierBackend::Vector { vectorizer, .. } => vectorizer,
        }
    }
}

// ============ Output types ============

/// Single-text output from `run()`.
#[derive(Debug)]
pub struct Output {
    /// Predicted sentiment.
    pub label: SentimentLabel,
    /// Execution statistics.
    pub stats: PipelineStats,
}

/// Single result in batch output.
#[derive(Debug)]
pub struct BatchResult {
    /// Input text.
    pub text: String,
    /// Prediction or error for this input.
    pub label: Result<SentimentLabel>,
}

/// Batch output from `run()`.
#[derive(Debug)]
pub struct BatchOutput {
    /// Results for each input.
    pub results: Vec<BatchResult>,
    /// Execution statistics.
    pub stats: PipelineStats,
}

// ============ Input trait for type-based dispatch ============

#[doc(hidden)]
pub trait SentimentInput<'a> {
    /// Output type for `.run()`.
    type Output;

    #[doc(hidden)]
    fn into_texts(self) -> Vec<&'a str>;
    #[doc(hidden)]
    fn convert_output(
        texts: Vec<&'a str>,
        labels: Vec<Result<SentimentLabel>>,
        stats: PipelineStats,
    ) -> Result<Self::Output>;
}

impl<'a> SentimentInput<'a> for &'a str {
    type Output = Output;

    fn into_texts(self) -> Vec<&'a str> {
        vec![self]
    }

    fn convert_output(
        _texts: Vec<&'a str>,
        mut labels: Vec<Result<SentimentLabel>>,
        stats: PipelineStats,
    ) -> Result<Self::Output> {
        let label = labels
            .pop()
            .ok_or_else(|| PipelineError::Unexpected("No predictions returned".into()))??;
        Ok(Output { label, stats })
    }
}

impl<'a> SentimentInput<'a> for &'a [&'a str] {
    type Output = BatchOutput;

    fn into_texts(self) -> Vec<&'a str> {
        self.to_vec()
    }

    fn convert_output(
        texts: Vec<&'a str>,
        labels: Vec<Result<SentimentLabel>>,
        stats: PipelineStats,
    ) -> Result<Self::Output> {
        let results = texts
            .into_iter()
            .zip(labels)
            .map(|(text, label)| BatchResult {
                text: text.to_string(),
                label,
            })
            .collect();
        Ok(BatchOutput { results, stats })
    }
}

impl<'a, const N: usize> SentimentInput<'a> for &'a [&'a str; N] {
    type Output = BatchOutput;

    fn into_texts(self) -> Vec<&'a str> {
        self.as_slice().to_vec()
    }

    fn convert_output(
        texts: Vec<&'a str>,
        labels: Vec<Result<SentimentLabel>>,
        stats: PipelineStats,
    ) -> Result<Self::Output> {
        let results = texts
            .into_iter()
            .zip(labels)
            .map(|(text, label)| BatchResult {
                text: text.to_string(),
                label,
            })
            .collect();
        Ok(BatchOutput { results, stats })
    }
}

// ============ Pipeline ============

/// Classifies feedback text as positive, negative, or neutral.
///
/// Construct with [`SentimentPipelineBuilder`](super::SentimentPipelineBuilder).
///
/// # Examples
///
/// ```rust,no_run
/// use feedback_pipelines::sentiment::SentimentPipelineBuilder;
///
/// # fn main() -> feedback_pipelines::error::Result<()> {
/// let pipeline = SentimentPipelineBuilder::vector_mode("artifacts").build()?;
///
/// // Single text - direct access
/// let output = pipeline.run("The staff were wonderful")?;
/// println!("sentiment: {}", output.label);
///
/// // Batch - results include input text
/// let output = pipeline.run(&["Great service!", "Terrible wait."])?;
/// for r in output.results {
///     println!("{} -> {}", r.text, r.label?);
/// }
/// # Ok(())
/// # }
/// ```
pub struct SentimentPipeline {
    pub(crate) backend: ClassifierBackend,
    pub(crate) decoder: Option<LabelDecoder>,
}

impl SentimentPipeline {
    /// Classify feedback text.
    ///
    /// Single input returns [`Output`]; a slice of texts returns
    /// [`BatchOutput`] with a per-item `Result`. Empty text is valid and
    /// classifies from the fitted priors alone.
    pub fn run<'a, I: SentimentInput<'a>>(&self, input: I) -> Result<I::Output> {
        let stats_builder = PipelineStats::start();
        let texts = input.into_texts();
        let item_count = texts.len();

        let labels = texts
            .iter()
            .map(|text| self.classify_text(text))
            .collect();

        I::convert_output(texts, labels, stats_builder.finish(item_count))
    }

    /// Classify a pre-computed feature vector.
    ///
    /// Only vector-mode pipelines accept this; calling it on a text-mode
    /// pipeline is a contract violation and returns
    /// [`PipelineError::InvalidInput`], as does a wrong-width vector.
    pub fn classify_vector(&self, features: &[f32]) -> Result<SentimentLabel> {
        match &self.backend {
            ClassifierBackend::Text { .. } => Err(PipelineError::InvalidInput(
                "This pipeline's classifier vectorizes internally; pass raw text to run()".into(),
            )),
            ClassifierBackend::Vector { vectorizer, model } => {
                let features = vectorizer.tensor_from_dense(features)?;
                let index = model.predict_index(&features)?;
                self.decode(model, index)
            }
        }
    }

    /// Input dimensionality of the underlying vectorizer.
    pub fn feature_dimension(&self) -> usize {
        self.backend.vectorizer().dimension()
    }

    fn classify_text(&self, text: &str) -> Result<SentimentLabel> {
        let model = self.backend.model();
        let features = self.backend.vectorizer().transform(text)?;
        let index = model.predict_index(&features)?;
        let label = self.decode(model, index)?;
        tracing::debug!(class_index = index, %label, "sentiment prediction");
        Ok(label)
    }

    fn decode(&self, model: &MultinomialNaiveBayes, index: usize) -> Result<SentimentLabel> {
        match model.class_outputs() {
            ClassOutputs::Labels(labels) => {
                let raw = labels.get(index).ok_or_else(|| {
                    PipelineError::Unexpected(format!(
                        "Predicted class index {index} outside class table"
                    ))
                })?;
                SentimentLabel::parse(raw)
            }
            ClassOutputs::Codes(codes) => {
                let code = *codes.get(index).ok_or_else(|| {
                    PipelineError::Unexpected(format!(
                        "Predicted class index {index} outside class table"
                    ))
                })?;
                let decoder = self.decoder.as_ref().ok_or_else(|| {
                    PipelineError::Unexpected(
                        "Coded classifier built without a label decoder".into(),
                    )
                })?;
                decoder.decode(code)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_display_matches_report_format() {
        assert_eq!(SentimentLabel::Positive.to_string(), "Positive");
        assert_eq!(SentimentLabel::Negative.to_string(), "Negative");
        assert_eq!(SentimentLabel::Neutral.to_string(), "Neutral");
    }

    #[test]
    fn label_parse_is_case_insensitive() {
        assert_eq!(
            SentimentLabel::parse("POSITIVE").unwrap(),
            SentimentLabel::Positive
        );
        assert!(matches!(
            SentimentLabel::parse("meh"),
            Err(PipelineError::UnknownLabel(_))
        ));
    }

    #[test]
    fn decoder_round_trips_fitted_codes_and_rejects_others() {
        let decoder = LabelDecoder::from_classes(&[
            "Negative".to_string(),
            "Neutral".to_string(),
            "Positive".to_string(),
        ])
        .unwrap();
        assert_eq!(decoder.decode(0).unwrap(), SentimentLabel::Negative);
        assert_eq!(decoder.decode(2).unwrap(), SentimentLabel::Positive);
        assert!(matches!(
            decoder.decode(3),
            Err(PipelineError::UnknownLabel(_))
        ));
        assert!(matches!(
            decoder.decode(-1),
            Err(PipelineError::UnknownLabel(_))
        ));
    }

    #[test]
    fn decoder_rejects_unsupported_class_at_load() {
        let err = LabelDecoder::from_classes(&["Positive".to_string(), "Sarcastic".to_string()]);
        assert!(matches!(err, Err(PipelineError::ArtifactFormat(_))));
    }
}
