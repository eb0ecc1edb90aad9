mod common;

use feedback_pipelines::error::PipelineError;
use feedback_pipelines::feedback::{
    DashboardPolicy, Department, FeedbackRecord, FeedbackStore, InMemoryFeedbackStore, Rating,
    Role, RoleDashboardPolicy,
};
use feedback_pipelines::sentiment::SentimentPipelineBuilder;

#[test]
fn submission_flow_stores_classified_records() {
    let dir = common::artifact_dir();
    let pipeline = SentimentPipelineBuilder::vector_mode(dir.path())
        .build()
        .unwrap();
    let store = InMemoryFeedbackStore::new();

    let submissions = [
        ("Asha", Department::Cardiology, 5, "Great hospital"),
        ("Ben", Department::Emergency, 1, "Worst experience"),
        ("Chen", Department::Radiology, 3, "paperwork took a while"),
    ];

    for (name, department, stars, text) in submissions {
        let sentiment = pipeline.run(text).unwrap().label;
        let record = FeedbackRecord::new(
            name,
            department,
            Rating::new(stars).unwrap(),
            text,
            sentiment,
        );
        store.append(record).unwrap();
    }

    let all = store.all().unwrap();
    assert_eq!(all.len(), 3);
    assert_eq!(all[0].name, "Asha");
    assert_eq!(all[2].department, Department::Radiology);
    // Records come back exactly as submitted, in order.
    assert!(all[0].submitted_at <= all[2].submitted_at);
}

#[test]
fn invalid_rating_is_rejected_before_any_record_exists() {
    let err = Rating::new(9);
    assert!(matches!(err, Err(PipelineError::InvalidInput(_))));
}

#[test]
fn dashboard_access_is_a_role_capability() {
    let policy = RoleDashboardPolicy;
    assert!(policy.can_view_dashboard(Role::Admin));
    assert!(policy.can_view_dashboard(Role::Staff));
    assert!(!policy.can_view_dashboard(Role::Patient));
}
