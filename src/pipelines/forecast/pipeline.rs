use crate::error::Result;
use crate::models::ManualArima;
use crate::pipelines::stats::PipelineStats;

/// Output from [`ForecastPipeline::run`].
#[derive(Debug)]
pub struct Output {
    /// Predicted ratings, one per future day, oldest first.
    pub points: Vec<f64>,
    /// Execution statistics.
    pub stats: PipelineStats,
}

/// Forecasts future satisfaction ratings from a pre-fitted ARIMA model.
///
/// Construct with [`ForecastPipelineBuilder`](super::ForecastPipelineBuilder).
/// Forecasting is a pure query: the fitted model never changes, so equal
/// horizons always return identical series. Any horizon is accepted here;
/// range limits such as the UI's 7-30 day slider are presentation policy.
pub struct ForecastPipeline {
    pub(crate) model: ManualArima,
}

impl ForecastPipeline {
    /// Forecast `horizon` days ahead. A horizon of zero yields an empty
    /// series.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use feedback_pipelines::forecast::ForecastPipelineBuilder;
    ///
    /// # fn main() -> feedback_pipelines::error::Result<()> {
    /// let pipeline = ForecastPipelineBuilder::new("artifacts").build()?;
    /// let output = pipeline.run(7)?;
    /// for (day, rating) in output.points.iter().enumerate() {
    ///     println!("day {}: {:.2}", day + 1, rating);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub fn run(&self, horizon: usize) -> Result<Output> {
        let stats_builder = PipelineStats::start();
        let points = self.model.forecast(horizon);
        tracing::debug!(horizon, ?points, "forecast");
        Ok(Output {
            points,
            stats: stats_builder.finish(horizon),
        })
    }

    /// Fitted (p, d, q) order of the underlying model.
    pub fn order(&self) -> (usize, usize, usize) {
        self.model.order()
    }
}
