use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{PipelineError, Result};
use crate::models::naive_bayes::ClassOutputs;
use crate::models::{ManualArima, MultinomialNaiveBayes, TfidfVectorizer};

/// Calling convention a classifier artifact was exported with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputMode {
    /// The artifact bundles its own vectorizer and accepts raw text.
    Text,
    /// The artifact expects features from an external vectorizer.
    Vector,
}

impl std::fmt::Display for InputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputMode::Text => write!(f, "text"),
            InputMode::Vector => write!(f, "vector"),
        }
    }
}

// ============ Raw artifact schemas ============

fn default_true() -> bool {
    true
}

#[derive(Deserialize)]
pub(crate) struct RawVectorizer {
    vocabulary: HashMap<String, usize>,
    idf: Vec<f32>,
    #[serde(default = "default_true")]
    lowercase: bool,
    #[serde(default)]
    sublinear_tf: bool,
    #[serde(default)]
    token_pattern: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
pub(crate) enum RawClassValue {
    Code(i64),
    Label(String),
}

#[derive(Deserialize)]
pub(crate) struct RawClassifier {
    pub(crate) input_mode: InputMode,
    classes: Vec<RawClassValue>,
    class_log_prior: Vec<f32>,
    feature_log_prob: Vec<Vec<f32>>,
    #[serde(default = "default_true")]
    probability: bool,
    pub(crate) vectorizer: Option<RawVectorizer>,
}

#[derive(Deserialize)]
pub(crate) struct RawLabelEncoder {
    pub(crate) classes: Vec<String>,
}

#[derive(Deserialize)]
struct RawForecaster {
    order: (usize, usize, usize),
    intercept: f64,
    #[serde(default)]
    ar_coeffs: Vec<f64>,
    #[serde(default)]
    ma_coeffs: Vec<f64>,
    recent_observations: Vec<f64>,
    #[serde(default)]
    recent_residuals: Vec<f64>,
}

// ============ File access ============

/// A path-addressed artifact file. Reading happens exactly once, at
/// pipeline build time; a missing or unreadable file is fatal then.
#[derive(Debug, Clone)]
pub(crate) struct ArtifactFile {
    path: PathBuf,
}

impl ArtifactFile {
    pub(crate) fn new(dir: &Path, filename: &str) -> Self {
        Self {
            path: dir.join(filename),
        }
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    fn read_json<T: serde::de::DeserializeOwned>(&self) -> Result<T> {
        tracing::debug!(path = %self.path.display(), "loading artifact");
        let contents = fs::read_to_string(&self.path).map_err(|e| {
            PipelineError::ArtifactLoad(format!(
                "Failed to read '{}': {}",
                self.path.display(),
                e
            ))
        })?;
        serde_json::from_str(&contents).map_err(|e| {
            PipelineError::ArtifactLoad(format!(
                "Failed to deserialize '{}': {}",
                self.path.display(),
                e
            ))
        })
    }
}

// ============ Typed loaders ============

pub(crate) struct VectorizerLoader {
    file: ArtifactFile,
}

impl VectorizerLoader {
    pub(crate) fn new(dir: &Path, filename: &str) -> Self {
        Self {
            file: ArtifactFile::new(dir, filename),
        }
    }

    pub(crate) fn load(&self) -> Result<TfidfVectorizer> {
        let raw: RawVectorizer = self.file.read_json()?;
        build_vectorizer(raw)
    }
}

pub(crate) fn build_vectorizer(raw: RawVectorizer) -> Result<TfidfVectorizer> {
    TfidfVectorizer::from_parts(
        raw.vocabulary,
        raw.idf,
        raw.lowercase,
        raw.sublinear_tf,
        raw.token_pattern.as_deref(),
    )
}

/// A classifier artifact after deserialization, before the owning
/// pipeline has validated its calling convention.
pub(crate) struct LoadedClassifier {
    pub(crate) input_mode: InputMode,
    pub(crate) model: MultinomialNaiveBayes,
    pub(crate) vectorizer: Option<TfidfVectorizer>,
}

pub(crate) struct ClassifierLoader {
    file: ArtifactFile,
}

impl ClassifierLoader {
    pub(crate) fn new(dir: &Path, filename: &str) -> Self {
        Self {
            file: ArtifactFile::new(dir, filename),
        }
    }

    pub(crate) fn load(&self) -> Result<LoadedClassifier> {
        let raw: RawClassifier = self.file.read_json()?;

        let outputs = class_outputs(&self.file, raw.classes)?;
        let model = MultinomialNaiveBayes::from_parts(
            raw.class_log_prior,
            raw.feature_log_prob,
            outputs,
            raw.probability,
        )?;

        let vectorizer = match raw.vectorizer {
            Some(raw) => {
                let vectorizer = build_vectorizer(raw)?;
                if vectorizer.dimension() != model.n_features() {
                    return Err(PipelineError::ArtifactFormat(format!(
                        "'{}': embedded vectorizer dimension {} does not match classifier width {}",
                        self.file.path().display(),
                        vectorizer.dimension(),
                        model.n_features()
                    )));
                }
                Some(vectorizer)
            }
            None => None,
        };

        if raw.input_mode == InputMode::Text && vectorizer.is_none() {
            return Err(PipelineError::ArtifactFormat(format!(
                "'{}': text-mode classifier artifact has no embedded vectorizer",
                self.file.path().display()
            )));
        }

        tracing::info!(
            path = %self.file.path().display(),
            mode = %raw.input_mode,
            classes = model.n_classes(),
            features = model.n_features(),
            "classifier artifact loaded"
        );

        Ok(LoadedClassifier {
            input_mode: raw.input_mode,
            model,
            vectorizer,
        })
    }
}

/// Fitted classes must be all strings or all integer codes; a mix means
/// the artifact was exported inconsistently.
fn class_outputs(file: &ArtifactFile, classes: Vec<RawClassValue>) -> Result<ClassOutputs> {
    if classes.is_empty() {
        return Err(PipelineError::ArtifactFormat(format!(
            "'{}': class list is empty",
            file.path().display()
        )));
    }
    let mut labels = Vec::new();
    let mut codes = Vec::new();
    for class in &classes {
        match class {
            RawClassValue::Label(label) => labels.push(label.clone()),
            RawClassValue::Code(code) => codes.push(*code),
        }
    }
    match (labels.is_empty(), codes.is_empty()) {
        (false, true) => Ok(ClassOutputs::Labels(labels)),
        (true, false) => Ok(ClassOutputs::Codes(codes)),
        _ => Err(PipelineError::ArtifactFormat(format!(
            "'{}': class list mixes label strings and integer codes",
            file.path().display()
        ))),
    }
}

pub(crate) struct LabelEncoderLoader {
    file: ArtifactFile,
}

impl LabelEncoderLoader {
    pub(crate) fn new(dir: &Path, filename: &str) -> Self {
        Self {
            file: ArtifactFile::new(dir, filename),
        }
    }

    pub(crate) fn load(&self) -> Result<RawLabelEncoder> {
        let raw: RawLabelEncoder = self.file.read_json()?;
        if raw.classes.is_empty() {
            return Err(PipelineError::ArtifactFormat(format!(
                "'{}': label encoder has no classes",
                self.file.path().display()
            )));
        }
        Ok(raw)
    }
}

pub(crate) struct ForecasterLoader {
    file: ArtifactFile,
}

impl ForecasterLoader {
    pub(crate) fn new(dir: &Path, filename: &str) -> Self {
        Self {
            file: ArtifactFile::new(dir, filename),
        }
    }

    pub(crate) fn load(&self) -> Result<ManualArima> {
        let raw: RawForecaster = self.file.read_json()?;
        let model = ManualArima::from_parts(
            raw.order,
            raw.intercept,
            raw.ar_coeffs,
            raw.ma_coeffs,
            raw.recent_observations,
            raw.recent_residuals,
        )?;
        tracing::info!(
            path = %self.file.path().display(),
            order = ?model.order(),
            "forecaster artifact loaded"
        );
        Ok(model)
    }
}
