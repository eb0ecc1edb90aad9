//! Trend forecast demo: query the pre-fitted ARIMA artifact for a
//! horizon of future ratings and sketch them as a text chart.
//!
//! Run with `cargo run --example forecast_trend [horizon]`.

use feedback_pipelines::error::Result;
use feedback_pipelines::forecast::ForecastPipelineBuilder;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let horizon: usize = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(15);

    let pipeline = ForecastPipelineBuilder::new("demos/artifacts").build()?;
    println!(
        "Forecasting {horizon} day(s) with an ARIMA{:?} model\n",
        pipeline.order()
    );

    let output = pipeline.run(horizon)?;
    for (day, rating) in output.points.iter().enumerate() {
        let bar = "#".repeat((rating * 10.0).round().max(0.0) as usize);
        println!("day {:>3}  {rating:>5.2}  {bar}", day + 1);
    }
    println!(
        "\nCompleted in {:.2}ms",
        output.stats.total_time.as_secs_f64() * 1000.0
    );

    Ok(())
}
