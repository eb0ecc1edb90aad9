//! End-to-end presentation demo: classify feedback, log it, gate the
//! dashboard by role, and export the downloadable CSV report.
//!
//! Run with `cargo run --example analyze_feedback [artifact_dir]`.

use feedback_pipelines::error::Result;
use feedback_pipelines::fake_review::FakeReviewPipelineBuilder;
use feedback_pipelines::feedback::{
    DashboardPolicy, Department, FeedbackRecord, FeedbackStore, InMemoryFeedbackStore, Rating,
    Role, RoleDashboardPolicy,
};
use feedback_pipelines::report::SentimentReport;
use feedback_pipelines::sentiment::SentimentPipelineBuilder;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let artifact_dir = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "demos/artifacts".to_string());

    println!("Building pipelines from '{artifact_dir}'...");
    let sentiment = SentimentPipelineBuilder::vector_mode(&artifact_dir).build()?;
    let fake_review = FakeReviewPipelineBuilder::new(&artifact_dir).build()?;
    println!("Pipelines built successfully.\n");

    let store = InMemoryFeedbackStore::new();
    let submissions = [
        ("Asha", Department::Cardiology, 5, "The staff were wonderful and the wait was short"),
        ("Ben", Department::Emergency, 1, "Terrible service, rude staff, long wait"),
        ("Chen", Department::Radiology, 4, "Great hospital"),
        ("Dee", Department::GeneralMedicine, 2, "Worst experience"),
    ];

    println!("=== Sentiment Analysis ===");
    for (name, department, stars, text) in submissions {
        let output = sentiment.run(text)?;
        println!("{text:55} -> {}", output.label);
        store.append(FeedbackRecord::new(
            name,
            department,
            Rating::new(stars)?,
            text,
            output.label,
        ))?;
    }

    println!("\n=== Fake Review Detection ===");
    let review = "The staff were great and the hospital was clean";
    let output = fake_review.run(review)?;
    println!(
        "{review:55} -> {} (confidence: {:.2})",
        output.verdict, output.confidence
    );

    println!("\n=== Dashboard Access ===");
    let policy = RoleDashboardPolicy;
    for role in [Role::Admin, Role::Staff, Role::Patient] {
        let allowed = policy.can_view_dashboard(role);
        println!("{role:?}: {}", if allowed { "allowed" } else { "denied" });
    }

    println!("\n=== Report CSV ===");
    let report = SentimentReport::from_records(&store.all()?);
    print!("{}", String::from_utf8_lossy(&report.to_csv_bytes()?));

    Ok(())
}
