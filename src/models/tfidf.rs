use candle_core::{Device, Tensor};
use regex::Regex;
use std::collections::HashMap;

use crate::error::{PipelineError, Result};

/// Token pattern used when the artifact does not carry one. Matches the
/// common fit-time default: runs of two or more word characters.
pub(crate) const DEFAULT_TOKEN_PATTERN: &str = r"(?u)\b\w\w+\b";

/// A fitted TF-IDF vectorizer.
///
/// The vocabulary, IDF weights, and tokenization settings are fixed at fit
/// time and loaded from an artifact file; this type only ever transforms.
/// Out-of-vocabulary tokens contribute nothing and are never an error.
#[derive(Debug, Clone)]
pub struct TfidfVectorizer {
    vocabulary: HashMap<String, usize>,
    idf: Vec<f32>,
    lowercase: bool,
    sublinear_tf: bool,
    token_re: Regex,
    device: Device,
}

impl TfidfVectorizer {
    pub(crate) fn from_parts(
        vocabulary: HashMap<String, usize>,
        idf: Vec<f32>,
        lowercase: bool,
        sublinear_tf: bool,
        token_pattern: Option<&str>,
    ) -> Result<Self> {
        if vocabulary.is_empty() {
            return Err(PipelineError::ArtifactFormat(
                "Vectorizer vocabulary is empty".into(),
            ));
        }
        if idf.len() != vocabulary.len() {
            return Err(PipelineError::ArtifactFormat(format!(
                "Vectorizer has {} vocabulary entries but {} IDF weights",
                vocabulary.len(),
                idf.len()
            )));
        }
        for (token, &column) in &vocabulary {
            if column >= idf.len() {
                return Err(PipelineError::ArtifactFormat(format!(
                    "Vocabulary entry '{}' maps to column {} outside dimension {}",
                    token,
                    column,
                    idf.len()
                )));
            }
        }

        let token_re = Regex::new(token_pattern.unwrap_or(DEFAULT_TOKEN_PATTERN))?;

        Ok(Self {
            vocabulary,
            idf,
            lowercase,
            sublinear_tf,
            token_re,
            device: Device::Cpu,
        })
    }

    /// Output dimensionality, equal to the fitted vocabulary size.
    pub fn dimension(&self) -> usize {
        self.idf.len()
    }

    /// Transform raw text into a `(1, dimension)` feature tensor.
    ///
    /// Empty input (or input with no in-vocabulary tokens) yields the
    /// all-zero vector.
    pub fn transform(&self, text: &str) -> Result<Tensor> {
        let mut values = vec![0f32; self.dimension()];

        let lowered;
        let haystack = if self.lowercase {
            lowered = text.to_lowercase();
            lowered.as_str()
        } else {
            text
        };

        for token in self.token_re.find_iter(haystack) {
            if let Some(&column) = self.vocabulary.get(token.as_str()) {
                values[column] += 1.0;
            }
        }

        for (column, value) in values.iter_mut().enumerate() {
            if *value > 0.0 {
                if self.sublinear_tf {
                    *value = 1.0 + value.ln();
                }
                *value *= self.idf[column];
            }
        }

        let norm = values.iter().map(|v| v * v).sum::<f32>().sqrt();
        if norm > 0.0 {
            for value in values.iter_mut() {
                *value /= norm;
            }
        }

        self.dense_tensor(values)
    }

    /// Build a `(1, dimension)` tensor from an already-vectorized input,
    /// rejecting width mismatches.
    pub(crate) fn tensor_from_dense(&self, features: &[f32]) -> Result<Tensor> {
        if features.len() != self.dimension() {
            return Err(PipelineError::InvalidInput(format!(
                "Expected a feature vector of width {}, got {}",
                self.dimension(),
                features.len()
            )));
        }
        self.dense_tensor(features.to_vec())
    }

    fn dense_tensor(&self, values: Vec<f32>) -> Result<Tensor> {
        let dim = values.len();
        Ok(Tensor::from_vec(values, (1, dim), &self.device)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> TfidfVectorizer {
        let vocabulary: HashMap<String, usize> = [("staff", 0), ("wait", 1), ("great", 2)]
            .into_iter()
            .map(|(t, c)| (t.to_string(), c))
            .collect();
        TfidfVectorizer::from_parts(vocabulary, vec![1.0, 1.0, 2.0], true, false, None).unwrap()
    }

    #[test]
    fn constant_dimension_across_inputs() {
        let v = fixture();
        for text in ["", "staff", "the staff were great", "unrelated words only"] {
            let t = v.transform(text).unwrap();
            assert_eq!(t.dims(), &[1, 3]);
        }
    }

    #[test]
    fn empty_text_is_zero_vector() {
        let v = fixture();
        let row = v.transform("").unwrap().squeeze(0).unwrap();
        assert_eq!(row.to_vec1::<f32>().unwrap(), vec![0.0, 0.0, 0.0]);
    }

    #[test]
    fn unknown_tokens_are_ignored() {
        let v = fixture();
        let row = v
            .transform("zebra quantum staff")
            .unwrap()
            .squeeze(0)
            .unwrap()
            .to_vec1::<f32>()
            .unwrap();
        assert_eq!(row, vec![1.0, 0.0, 0.0]);
    }

    #[test]
    fn idf_weights_and_l2_norm_apply() {
        let v = fixture();
        let row = v
            .transform("staff great")
            .unwrap()
            .squeeze(0)
            .unwrap()
            .to_vec1::<f32>()
            .unwrap();
        let norm = (1.0f32 + 4.0).sqrt();
        assert!((row[0] - 1.0 / norm).abs() < 1e-6);
        assert!((row[2] - 2.0 / norm).abs() < 1e-6);
    }

    #[test]
    fn lowercases_before_lookup() {
        let v = fixture();
        let row = v
            .transform("STAFF Wait")
            .unwrap()
            .squeeze(0)
            .unwrap()
            .to_vec1::<f32>()
            .unwrap();
        assert!(row[0] > 0.0 && row[1] > 0.0);
    }

    #[test]
    fn rejects_mismatched_idf_length() {
        let vocabulary: HashMap<String, usize> =
            [("staff".to_string(), 0), ("wait".to_string(), 1)].into();
        let err = TfidfVectorizer::from_parts(vocabulary, vec![1.0], true, false, None);
        assert!(matches!(err, Err(PipelineError::ArtifactFormat(_))));
    }
}
