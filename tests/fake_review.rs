mod common;

use feedback_pipelines::error::PipelineError;
use feedback_pipelines::fake_review::{FakeReviewPipelineBuilder, Verdict};

#[test]
fn verdict_comes_with_a_probability_confidence() {
    let dir = common::artifact_dir();
    let pipeline = FakeReviewPipelineBuilder::new(dir.path()).build().unwrap();

    let output = pipeline
        .run("The staff were great and the hospital was clean")
        .unwrap();
    assert_eq!(output.verdict, Verdict::Genuine);
    assert!((0.0..=1.0).contains(&output.confidence));
    // A binary classifier's top posterior is at least one half.
    assert!(output.confidence >= 0.5);
}

#[test]
fn detection_is_deterministic() {
    let dir = common::artifact_dir();
    let pipeline = FakeReviewPipelineBuilder::new(dir.path()).build().unwrap();

    let text = "worst experience, long wait";
    let first = pipeline.run(text).unwrap();
    for _ in 0..5 {
        let next = pipeline.run(text).unwrap();
        assert_eq!(next.verdict, first.verdict);
        assert_eq!(next.confidence, first.confidence);
    }
}

#[test]
fn empty_review_still_gets_a_verdict() {
    let dir = common::artifact_dir();
    let pipeline = FakeReviewPipelineBuilder::new(dir.path()).build().unwrap();

    let output = pipeline.run("").unwrap();
    assert!((0.0..=1.0).contains(&output.confidence));
}

#[test]
fn uncalibrated_artifact_is_rejected_at_build() {
    let dir = common::artifact_dir();
    let mut model = common::fake_review_model_json();
    model["probability"] = serde_json::json!(false);
    common::write_artifact(dir.path(), "fake_review_nocalib.json", &model);

    let err = FakeReviewPipelineBuilder::new(dir.path())
        .model_file("fake_review_nocalib.json")
        .build();
    assert!(matches!(err, Err(PipelineError::ArtifactLoad(_))));
}

#[test]
fn vector_mode_artifact_is_rejected_at_build() {
    let dir = common::artifact_dir();

    let err = FakeReviewPipelineBuilder::new(dir.path())
        .model_file("sentiment_model.json")
        .build();
    assert!(matches!(err, Err(PipelineError::ArtifactLoad(_))));
}

#[test]
fn non_binary_class_table_is_rejected_at_build() {
    let dir = common::artifact_dir();

    // Three sentiment classes cannot back a genuine/fake verdict.
    let err = FakeReviewPipelineBuilder::new(dir.path())
        .model_file("sentiment_text_model.json")
        .build();
    assert!(matches!(err, Err(PipelineError::ArtifactFormat(_))));
}
