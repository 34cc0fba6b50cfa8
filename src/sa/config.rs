//! SA configuration: iteration budget, geometric cooling and reheating.

use crate::error::SaConfigError;

/// Configuration for the Simulated Annealing driver.
///
/// Temperature follows geometric cooling, `T_{k+1} = cooling_factor * T_k`,
/// and is reset to `initial_temperature` every `reheat_interval` iterations.
///
/// # Examples
///
/// ```
/// use u_tsp::sa::SaConfig;
///
/// let config = SaConfig::default()
///     .with_iterations(50_000)
///     .with_initial_temperature(80.0)
///     .with_cooling_factor(0.99)
///     .with_reheat_interval(10_000)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.effective_reheat_interval(), 10_000);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SaConfig {
    /// Number of annealing iterations (`N`). Zero skips annealing.
    pub iterations: usize,

    /// Temperature at the start of the run and after every reheat.
    pub initial_temperature: f64,

    /// Geometric cooling factor in (0, 1). Higher = slower cooling.
    pub cooling_factor: f64,

    /// Iterations between temperature resets.
    ///
    /// `None` resets at the midpoint of the run (`iterations / 2`, at least 1).
    pub reheat_interval: Option<usize>,

    /// Iterations between samples of the best cost in
    /// [`SaResult::cost_history`](super::SaResult::cost_history).
    pub history_interval: usize,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for SaConfig {
    fn default() -> Self {
        Self {
            iterations: 1_000_000,
            initial_temperature: 100.0,
            cooling_factor: 0.985,
            reheat_interval: Some(100_000),
            history_interval: 100,
            seed: None,
        }
    }
}

impl SaConfig {
    pub fn with_iterations(mut self, n: usize) -> Self {
        self.iterations = n;
        self
    }

    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_cooling_factor(mut self, lambda: f64) -> Self {
        self.cooling_factor = lambda;
        self
    }

    pub fn with_reheat_interval(mut self, n: usize) -> Self {
        self.reheat_interval = Some(n);
        self
    }

    /// Reheats once, halfway through the run.
    pub fn with_midpoint_reheat(mut self) -> Self {
        self.reheat_interval = None;
        self
    }

    pub fn with_history_interval(mut self, n: usize) -> Self {
        self.history_interval = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// The reheat interval the driver actually uses.
    pub fn effective_reheat_interval(&self) -> usize {
        match self.reheat_interval {
            Some(n) => n,
            None => (self.iterations / 2).max(1),
        }
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), SaConfigError> {
        let t = self.initial_temperature;
        if !(t > 0.0 && t.is_finite()) {
            return Err(SaConfigError::NonPositiveTemperature(t));
        }
        let lambda = self.cooling_factor;
        if !(lambda > 0.0 && lambda < 1.0) {
            return Err(SaConfigError::CoolingFactorOutOfRange(lambda));
        }
        if self.reheat_interval == Some(0) {
            return Err(SaConfigError::ZeroReheatInterval);
        }
        if self.history_interval == 0 {
            return Err(SaConfigError::ZeroHistoryInterval);
        }
        Ok(())
    }
}
