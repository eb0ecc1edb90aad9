//! Simple, intuitive pipelines for serving pre-fitted feedback analysis models in Rust.
//!
//! Each pipeline wraps an opaque model artifact fitted elsewhere and only ever
//! answers queries: sentiment classification (TF-IDF + Naive Bayes), fake-review
//! detection with a calibrated confidence, and satisfaction trend forecasting
//! (manual ARIMA). Artifacts load once at build time; inference is deterministic
//! and side-effect free.

#![deny(missing_docs)]

// ============ Internal API ============

pub(crate) mod loaders;
pub(crate) mod models;
pub(crate) mod pipelines;

// ============ Public API ============

pub mod error;
pub mod feedback;

pub use pipelines::{fake_review, forecast, report, sentiment};
