//! Shared artifact fixtures: a tiny fitted vocabulary and hand-set model
//! weights, written as JSON files into a temp directory.

#![allow(dead_code)]

use serde_json::{json, Value};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Column order: staff wonderful wait short terrible rude long service
/// great worst hospital experience.
pub const VOCAB: [&str; 12] = [
    "staff",
    "wonderful",
    "wait",
    "short",
    "terrible",
    "rude",
    "long",
    "service",
    "great",
    "worst",
    "hospital",
    "experience",
];

pub fn vectorizer_json() -> Value {
    let vocabulary: serde_json::Map<String, Value> = VOCAB
        .iter()
        .enumerate()
        .map(|(column, token)| (token.to_string(), json!(column)))
        .collect();
    json!({
        "vocabulary": vocabulary,
        "idf": [1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0],
        "lowercase": true,
        "sublinear_tf": false,
    })
}

fn positive_row() -> Value {
    json!([-2.0, -1.2, -2.5, -1.5, -6.0, -6.0, -4.0, -2.5, -1.2, -6.0, -2.5, -2.5])
}

fn negative_row() -> Value {
    json!([-2.5, -6.0, -2.0, -4.0, -1.2, -1.5, -1.5, -2.0, -6.0, -1.2, -2.5, -2.0])
}

fn neutral_row() -> Value {
    json!([-2.49, -2.49, -2.49, -2.49, -2.49, -2.49, -2.49, -2.49, -2.49, -2.49, -2.49, -2.49])
}

/// Vector-mode sentiment model with label-string classes. Neutral has the
/// largest prior so empty text resolves to Neutral.
pub fn sentiment_model_json() -> Value {
    json!({
        "input_mode": "vector",
        "classes": ["Positive", "Negative", "Neutral"],
        "class_log_prior": [-1.20397, -1.20397, -0.91629],
        "feature_log_prob": [positive_row(), negative_row(), neutral_row()],
        "probability": true,
    })
}

/// Same fit, exported with integer codes in label-encoder order
/// (alphabetical: Negative, Neutral, Positive).
pub fn sentiment_model_coded_json() -> Value {
    json!({
        "input_mode": "vector",
        "classes": [0, 1, 2],
        "class_log_prior": [-1.20397, -0.91629, -1.20397],
        "feature_log_prob": [negative_row(), neutral_row(), positive_row()],
        "probability": true,
    })
}

pub fn label_encoder_json() -> Value {
    json!({ "classes": ["Negative", "Neutral", "Positive"] })
}

/// Text-mode export of the sentiment model: same classifier with the
/// vectorizer bundled into the artifact.
pub fn sentiment_text_model_json() -> Value {
    let mut model = sentiment_model_json();
    model["input_mode"] = json!("text");
    model["vectorizer"] = vectorizer_json();
    model
}

pub fn fake_review_model_json() -> Value {
    json!({
        "input_mode": "text",
        "classes": ["Genuine", "Fake"],
        "class_log_prior": [-0.69315, -0.69315],
        "feature_log_prob": [
            [-2.0, -1.5, -2.5, -2.5, -3.5, -3.5, -3.0, -2.5, -1.5, -4.0, -2.0, -2.5],
            [-3.5, -3.0, -2.0, -3.0, -2.0, -2.5, -2.0, -2.2, -3.5, -1.5, -3.0, -2.0]
        ],
        "probability": true,
        "vectorizer": vectorizer_json(),
    })
}

/// Constant-mean forecaster fitted on [4, 4, 4, 4, 4].
pub fn forecast_constant_json() -> Value {
    json!({
        "order": [0, 0, 0],
        "intercept": 4.0,
        "recent_observations": [4.0, 4.0, 4.0, 4.0, 4.0],
    })
}

/// AR(1) with a MA term, for determinism checks.
pub fn forecast_arma_json() -> Value {
    json!({
        "order": [1, 0, 1],
        "intercept": 0.4,
        "ar_coeffs": [0.6],
        "ma_coeffs": [0.3],
        "recent_observations": [4.2, 3.9, 4.1],
        "recent_residuals": [0.05, -0.1],
    })
}

/// Random walk with drift 0.5 on levels ending at 3.5.
pub fn forecast_drift_json() -> Value {
    json!({
        "order": [0, 1, 0],
        "intercept": 0.5,
        "recent_observations": [3.0, 3.5],
    })
}

pub fn write_artifact(dir: &Path, filename: &str, value: &Value) {
    fs::write(dir.join(filename), serde_json::to_vec_pretty(value).unwrap()).unwrap();
}

/// Write the full default artifact set and hand back the directory.
pub fn artifact_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    let path = dir.path();
    write_artifact(path, "tfidf_vectorizer.json", &vectorizer_json());
    write_artifact(path, "sentiment_model.json", &sentiment_model_json());
    write_artifact(path, "sentiment_model_coded.json", &sentiment_model_coded_json());
    write_artifact(path, "sentiment_text_model.json", &sentiment_text_model_json());
    write_artifact(path, "label_encoder.json", &label_encoder_json());
    write_artifact(path, "fake_review_model.json", &fake_review_model_json());
    write_artifact(path, "forecast_model.json", &forecast_constant_json());
    write_artifact(path, "forecast_arma.json", &forecast_arma_json());
    write_artifact(path, "forecast_drift.json", &forecast_drift_json());
    dir
}
