use crate::error::{PipelineError, Result};

/// A pre-fitted ARIMA(p, d, q) forecaster with fixed coefficients.
///
/// "Manual" in the sense that forecasting replays the deterministic AR/MA
/// recursion with future shocks at their zero expectation; there is no
/// sampling and no hidden state, so the same horizon always yields the
/// same series.
#[derive(Debug, Clone)]
pub struct ManualArima {
    p: usize,
    d: usize,
    q: usize,
    intercept: f64,
    ar_coeffs: Vec<f64>,
    ma_coeffs: Vec<f64>,
    // Tail of the differenced training series, oldest first.
    tail_observations: Vec<f64>,
    // Tail of the fit residuals, oldest first.
    tail_residuals: Vec<f64>,
    // Last value of the level series and of each intermediate difference,
    // used to integrate forecasts back to level scale.
    integration_lasts: Vec<f64>,
}

impl ManualArima {
    pub(crate) fn from_parts(
        order: (usize, usize, usize),
        intercept: f64,
        ar_coeffs: Vec<f64>,
        ma_coeffs: Vec<f64>,
        recent_observations: Vec<f64>,
        recent_residuals: Vec<f64>,
    ) -> Result<Self> {
        let (p, d, q) = order;
        if ar_coeffs.len() != p {
            return Err(PipelineError::ArtifactFormat(format!(
                "AR order {} but {} AR coefficients",
                p,
                ar_coeffs.len()
            )));
        }
        if ma_coeffs.len() != q {
            return Err(PipelineError::ArtifactFormat(format!(
                "MA order {} but {} MA coefficients",
                q,
                ma_coeffs.len()
            )));
        }
        if recent_observations.len() < p + d {
            return Err(PipelineError::ArtifactFormat(format!(
                "ARIMA({p}, {d}, {q}) needs at least {} recent observations, got {}",
                p + d,
                recent_observations.len()
            )));
        }
        if recent_residuals.len() < q {
            return Err(PipelineError::ArtifactFormat(format!(
                "MA order {} needs at least {} recent residuals, got {}",
                q, q,
                recent_residuals.len()
            )));
        }
        let finite = |values: &[f64]| values.iter().all(|v| v.is_finite());
        if !intercept.is_finite()
            || !finite(&ar_coeffs)
            || !finite(&ma_coeffs)
            || !finite(&recent_observations)
            || !finite(&recent_residuals)
        {
            return Err(PipelineError::ArtifactFormat(
                "ARIMA artifact contains non-finite values".into(),
            ));
        }

        // Difference the observation tail d times, recording the last
        // value at each stage for later integration.
        let mut series = recent_observations;
        let mut integration_lasts = Vec::with_capacity(d);
        for _ in 0..d {
            let last = *series
                .last()
                .ok_or_else(|| PipelineError::ArtifactFormat("Observation tail too short".into()))?;
            integration_lasts.push(last);
            series = series.windows(2).map(|w| w[1] - w[0]).collect();
        }

        Ok(Self {
            p,
            d,
            q,
            intercept,
            ar_coeffs,
            ma_coeffs,
            tail_observations: series,
            tail_residuals: recent_residuals,
            integration_lasts,
        })
    }

    /// Fitted (p, d, q) order.
    pub fn order(&self) -> (usize, usize, usize) {
        (self.p, self.d, self.q)
    }

    /// Forecast `steps` future values on the level scale.
    ///
    /// A horizon of zero yields an empty series. The model state is never
    /// mutated; repeated calls with the same horizon return identical
    /// output.
    pub fn forecast(&self, steps: usize) -> Vec<f64> {
        let mut extended = self.tail_observations.clone();
        let mut residuals = self.tail_residuals.clone();
        let mut forecasts = Vec::with_capacity(steps);

        for _ in 0..steps {
            let mut value = self.intercept;
            for (i, phi) in self.ar_coeffs.iter().enumerate() {
                if let Some(lag) = extended.len().checked_sub(1 + i) {
                    value += phi * extended[lag];
                }
            }
            for (i, theta) in self.ma_coeffs.iter().enumerate() {
                if let Some(lag) = residuals.len().checked_sub(1 + i) {
                    value += theta * residuals[lag];
                }
            }
            extended.push(value);
            // Future shocks enter at their expectation.
            residuals.push(0.0);
            forecasts.push(value);
        }

        // Undo each differencing stage, innermost first.
        for &last in self.integration_lasts.iter().rev() {
            let mut level = last;
            for value in forecasts.iter_mut() {
                level += *value;
                *value = level;
            }
        }

        forecasts
    }
}
