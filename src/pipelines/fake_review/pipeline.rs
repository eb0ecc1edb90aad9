use serde::{Deserialize, Serialize};

use crate::error::{PipelineError, Result};
use crate::models::naive_bayes::ClassOutputs;
use crate::models::{MultinomialNaiveBayes, TfidfVectorizer};
use crate::pipelines::stats::PipelineStats;

/// Whether a review looks authentic or fabricated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    /// The review reads as authentic.
    Genuine,
    /// The review reads as fabricated.
    Fake,
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Verdict::Genuine => "Genuine",
            Verdict::Fake => "Fake",
        };
        write!(f, "{name}")
    }
}

impl Verdict {
    pub(crate) fn parse(raw: &str) -> Result<Self> {
        match raw.to_ascii_lowercase().as_str() {
            "genuine" => Ok(Verdict::Genuine),
            "fake" => Ok(Verdict::Fake),
            _ => Err(PipelineError::UnknownLabel(format!(
                "'{raw}' is not a fitted review verdict"
            ))),
        }
    }
}

/// Output from [`FakeReviewPipeline::run`].
#[derive(Debug)]
pub struct Output {
    /// Predicted verdict.
    pub verdict: Verdict,
    /// Maximum class posterior probability, in `[0, 1]`.
    pub confidence: f32,
    /// Execution statistics.
    pub stats: PipelineStats,
}

/// Flags reviews that look fabricated, with a calibrated confidence.
///
/// Construct with [`FakeReviewPipelineBuilder`](super::FakeReviewPipelineBuilder).
/// The confidence is always the maximum posterior from the classifier's
/// probability output, never a made-up score; builders refuse artifacts
/// without probability support.
pub struct FakeReviewPipeline {
    pub(crate) vectorizer: TfidfVectorizer,
    pub(crate) model: MultinomialNaiveBayes,
    // verdicts[i] decodes class index i.
    pub(crate) verdicts: Vec<Verdict>,
}

impl FakeReviewPipeline {
    /// Classify a review.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use feedback_pipelines::fake_review::FakeReviewPipelineBuilder;
    ///
    /// # fn main() -> feedback_pipelines::error::Result<()> {
    /// let pipeline = FakeReviewPipelineBuilder::new("artifacts").build()?;
    /// let output = pipeline.run("Best hospital ever, totally real review")?;
    /// println!("{} ({:.2})", output.verdict, output.confidence);
    /// # Ok(())
    /// # }
    /// ```
    pub fn run(&self, text: &str) -> Result<Output> {
        let stats_builder = PipelineStats::start();

        let features = self.vectorizer.transform(text)?;
        let probabilities = self.model.predict_proba(&features)?;
        let (index, confidence) = probabilities
            .iter()
            .copied()
            .enumerate()
            .max_by(|a, b| a.1.total_cmp(&b.1))
            .ok_or_else(|| PipelineError::Unexpected("Empty probability vector".into()))?;
        let verdict = *self.verdicts.get(index).ok_or_else(|| {
            PipelineError::Unexpected(format!("Predicted class index {index} outside class table"))
        })?;

        tracing::debug!(?probabilities, %verdict, "fake-review prediction");

        Ok(Output {
            verdict,
            confidence,
            stats: stats_builder.finish(1),
        })
    }
}

pub(crate) fn verdict_table(outputs: &ClassOutputs) -> Result<Vec<Verdict>> {
    let verdicts = match outputs {
        ClassOutputs::Labels(labels) => labels
            .iter()
            .map(|raw| {
                Verdict::parse(raw).map_err(|_| {
                    PipelineError::ArtifactFormat(format!(
                        "Fake-review artifact contains unsupported class '{raw}'"
                    ))
                })
            })
            .collect::<Result<Vec<_>>>()?,
        ClassOutputs::Codes(_) => {
            return Err(PipelineError::ArtifactFormat(
                "Fake-review artifacts must use label-string classes".into(),
            ))
        }
    };
    if verdicts.len() != 2 {
        return Err(PipelineError::ArtifactFormat(format!(
            "Fake-review classifier must be binary, found {} classes",
            verdicts.len()
        )));
    }
    Ok(verdicts)
}
