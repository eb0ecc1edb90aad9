use candle_core::{Device, Tensor, D};
use candle_nn::ops::softmax;

use crate::error::{PipelineError, Result};

/// What the fitted classifier emits for each class: human-readable label
/// strings, or integer codes that need a label decoder downstream.
#[derive(Debug, Clone)]
pub(crate) enum ClassOutputs {
    Labels(Vec<String>),
    Codes(Vec<i64>),
}

impl ClassOutputs {
    pub(crate) fn len(&self) -> usize {
        match self {
            ClassOutputs::Labels(labels) => labels.len(),
            ClassOutputs::Codes(codes) => codes.len(),
        }
    }
}

/// A fitted multinomial Naive Bayes classifier.
///
/// Holds the class log priors and the per-class feature log-probability
/// matrix as tensors; only inference queries are exposed. The joint
/// log-likelihood is `x · W^T + prior`, and posteriors are its softmax.
#[derive(Debug, Clone)]
pub struct MultinomialNaiveBayes {
    class_log_prior: Tensor,
    // Stored pre-transposed as (n_features, n_classes) so every predict
    // is a single matmul on the (1, n_features) input.
    weight_t: Tensor,
    n_classes: usize,
    n_features: usize,
    outputs: ClassOutputs,
    probability: bool,
}

impl MultinomialNaiveBayes {
    pub(crate) fn from_parts(
        class_log_prior: Vec<f32>,
        feature_log_prob: Vec<Vec<f32>>,
        outputs: ClassOutputs,
        probability: bool,
    ) -> Result<Self> {
        let n_classes = outputs.len();
        if n_classes == 0 {
            return Err(PipelineError::ArtifactFormat(
                "Classifier artifact declares no classes".into(),
            ));
        }
        if class_log_prior.len() != n_classes {
            return Err(PipelineError::ArtifactFormat(format!(
                "Classifier has {} classes but {} log priors",
                n_classes,
                class_log_prior.len()
            )));
        }
        if feature_log_prob.len() != n_classes {
            return Err(PipelineError::ArtifactFormat(format!(
                "Classifier has {} classes but {} feature log-probability rows",
                n_classes,
                feature_log_prob.len()
            )));
        }
        let n_features = feature_log_prob[0].len();
        if n_features == 0 {
            return Err(PipelineError::ArtifactFormat(
                "Classifier feature log-probability rows are empty".into(),
            ));
        }
        if let Some(row) = feature_log_prob.iter().find(|row| row.len() != n_features) {
            return Err(PipelineError::ArtifactFormat(format!(
                "Ragged feature log-probability matrix: expected width {}, found {}",
                n_features,
                row.len()
            )));
        }

        let device = Device::Cpu;
        let flat: Vec<f32> = feature_log_prob.into_iter().flatten().collect();
        let weight = Tensor::from_vec(flat, (n_classes, n_features), &device)?;
        let weight_t = weight.t()?.contiguous()?;
        let class_log_prior = Tensor::from_vec(class_log_prior, n_classes, &device)?;

        Ok(Self {
            class_log_prior,
            weight_t,
            n_classes,
            n_features,
            outputs,
            probability,
        })
    }

    /// Expected input width, fixed at fit time.
    pub fn n_features(&self) -> usize {
        self.n_features
    }

    /// Number of fitted classes.
    pub fn n_classes(&self) -> usize {
        self.n_classes
    }

    pub(crate) fn class_outputs(&self) -> &ClassOutputs {
        &self.outputs
    }

    /// Whether the artifact was exported with calibrated probability
    /// support. Pipelines that need posteriors must check this at build.
    pub fn supports_probabilities(&self) -> bool {
        self.probability
    }

    /// Joint log-likelihood of each class for a `(1, n_features)` input.
    pub(crate) fn joint_log_likelihood(&self, features: &Tensor) -> Result<Tensor> {
        let dims = features.dims();
        if dims.len() != 2 || dims[1] != self.n_features {
            return Err(PipelineError::InvalidInput(format!(
                "Expected features of shape (1, {}), got {:?}",
                self.n_features, dims
            )));
        }
        Ok(features
            .matmul(&self.weight_t)?
            .broadcast_add(&self.class_log_prior)?)
    }

    /// Index of the most likely class.
    pub(crate) fn predict_index(&self, features: &Tensor) -> Result<usize> {
        let joint = self.joint_log_likelihood(features)?;
        let predicted = joint.argmax(D::Minus1)?.squeeze(0)?.to_scalar::<u32>()?;
        Ok(predicted as usize)
    }

    /// Posterior probability of every class, in fitted class order.
    pub(crate) fn predict_proba(&self, features: &Tensor) -> Result<Vec<f32>> {
        let joint = self.joint_log_likelihood(features)?;
        let probs = softmax(&joint, D::Minus1)?;
        Ok(probs.squeeze(0)?.to_vec1::<f32>()?)
    }
}
