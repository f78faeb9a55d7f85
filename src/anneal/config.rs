//! Annealing configuration and temperature reduction.

use crate::moves::MoveConfig;

/// Rule applied once per temperature level to lower the temperature.
///
/// # References
///
/// - Linear and geometric: standard textbook schedules
/// - SlowDecrease: Lundy & Mees (1986)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub enum ReductionStrategy {
    /// `T ← T − alpha`.
    #[default]
    Linear,

    /// `T ← T × (1 / alpha)`, with `alpha > 1`.
    Geometric,

    /// `T ← T / (1 + beta × T)`.
    ///
    /// Cools fast at high T and slowly near the end.
    SlowDecrease,
}

impl ReductionStrategy {
    /// Next temperature after one level at `temperature`.
    pub fn reduce(self, temperature: f64, alpha: f64, beta: f64) -> f64 {
        match self {
            ReductionStrategy::Linear => temperature - alpha,
            ReductionStrategy::Geometric => temperature * (1.0 / alpha),
            ReductionStrategy::SlowDecrease => temperature / (1.0 + beta * temperature),
        }
    }
}

/// Configuration for an annealing run.
///
/// The defaults (T from 10 down to 1, linear steps of 10, 10 iterations per
/// level) make a single short level; real instances want a longer schedule.
///
/// # Examples
///
/// ```
/// use u_circuit::anneal::{AnnealConfig, ReductionStrategy};
///
/// let config = AnnealConfig::default()
///     .with_initial_temperature(100.0)
///     .with_final_temperature(0.01)
///     .with_reduction(ReductionStrategy::Geometric)
///     .with_alpha(1.05)
///     .with_iterations_per_temperature(200)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AnnealConfig {
    /// Starting temperature. Higher values accept more worsening moves.
    pub initial_temperature: f64,

    /// The run stops once the temperature is at or below this value.
    /// Must be positive so the Metropolis criterion stays defined.
    pub final_temperature: f64,

    /// Candidate moves evaluated at each temperature level.
    pub iterations_per_temperature: usize,

    /// Linear decrement, or geometric ratio denominator.
    pub alpha: f64,

    /// Slow-decrease coefficient.
    pub beta: f64,

    pub reduction: ReductionStrategy,

    /// Hard budget on candidate evaluations. 0 = no limit.
    pub max_iterations: usize,

    /// Random seed for reproducibility. `None` draws one from the OS.
    pub seed: Option<u64>,

    pub moves: MoveConfig,
}

impl Default for AnnealConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 10.0,
            final_temperature: 1.0,
            iterations_per_temperature: 10,
            alpha: 10.0,
            beta: 5.0,
            reduction: ReductionStrategy::default(),
            max_iterations: 0,
            seed: None,
            moves: MoveConfig::default(),
        }
    }
}

impl AnnealConfig {
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_final_temperature(mut self, t: f64) -> Self {
        self.final_temperature = t;
        self
    }

    pub fn with_iterations_per_temperature(mut self, n: usize) -> Self {
        self.iterations_per_temperature = n;
        self
    }

    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn with_beta(mut self, beta: f64) -> Self {
        self.beta = beta;
        self
    }

    pub fn with_reduction(mut self, reduction: ReductionStrategy) -> Self {
        self.reduction = reduction;
        self
    }

    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_moves(mut self, moves: MoveConfig) -> Self {
        self.moves = moves;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if !self.initial_temperature.is_finite() || self.initial_temperature <= 0.0 {
            return Err("initial_temperature must be positive and finite".into());
        }
        if self.final_temperature.is_nan() || self.final_temperature <= 0.0 {
            return Err("final_temperature must be positive".into());
        }
        if self.final_temperature >= self.initial_temperature {
            return Err("final_temperature must be less than initial_temperature".into());
        }
        if self.iterations_per_temperature == 0 {
            return Err("iterations_per_temperature must be at least 1".into());
        }
        match self.reduction {
            ReductionStrategy::Linear => {
                if self.alpha.is_nan() || self.alpha <= 0.0 {
                    return Err(format!("linear alpha must be positive, got {}", self.alpha));
                }
            }
            ReductionStrategy::Geometric => {
                if self.alpha.is_nan() || self.alpha <= 1.0 {
                    return Err(format!(
                        "geometric alpha must be greater than 1, got {}",
                        self.alpha
                    ));
                }
            }
            ReductionStrategy::SlowDecrease => {
                if self.beta.is_nan() || self.beta <= 0.0 {
                    return Err(format!(
                        "slow-decrease beta must be positive, got {}",
                        self.beta
                    ));
                }
            }
        }
        for temperature in [self.initial_temperature, self.final_temperature] {
            let next = self.reduction.reduce(temperature, self.alpha, self.beta);
            if next.is_nan() || next >= temperature {
                return Err(format!(
                    "{:?} reduction (alpha {}, beta {}) does not lower the temperature below {}",
                    self.reduction, self.alpha, self.beta, temperature
                ));
            }
        }
        self.moves.validate()
    }
}
