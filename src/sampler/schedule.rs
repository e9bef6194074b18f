use crate::error::{PlainsightError, PsResult};

/// A per-iteration sequence of positive acceptance-sharpness coefficients
/// for the annealed sampler. Its length fixes the run's iteration count.
#[derive(Debug, Clone, PartialEq)]
pub struct HeatingPlan(Vec<f64>);

impl HeatingPlan {
    pub fn new(betas: Vec<f64>) -> PsResult<Self> {
        if let Some(&bad) = betas.iter().find(|b| !(b.is_finite() && **b > 0.0)) {
            return Err(PlainsightError::Config(format!(
                "heating plan coefficients must be positive and finite, got {}",
                bad
            )));
        }
        Ok(Self(betas))
    }

    /// Every iteration at the same sharpness.
    pub fn constant(beta: f64, iterations: usize) -> PsResult<Self> {
        Self::new(vec![beta; iterations])
    }

    /// Linear ramp from `start` to `end` inclusive.
    pub fn linear(start: f64, end: f64, iterations: usize) -> PsResult<Self> {
        if iterations == 0 {
            return Self::new(Vec::new());
        }
        let steps = (iterations - 1).max(1) as f64;
        Self::new(
            (0..iterations)
                .map(|i| start + (end - start) * (i as f64 / steps))
                .collect(),
        )
    }

    /// Geometric ramp: `start * (end/start)^progress`. The usual shape for
    /// moving a chain from exploratory to greedy.
    pub fn geometric(start: f64, end: f64, iterations: usize) -> PsResult<Self> {
        if start <= 0.0 || end <= 0.0 {
            return Err(PlainsightError::Config(format!(
                "geometric plan needs positive endpoints, got {} and {}",
                start, end
            )));
        }
        if iterations == 0 {
            return Self::new(Vec::new());
        }
        let steps = (iterations - 1).max(1) as f64;
        Self::new(
            (0..iterations)
                .map(|i| start * (end / start).powf(i as f64 / steps))
                .collect(),
        )
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn betas(&self) -> &[f64] {
        &self.0
    }
}
