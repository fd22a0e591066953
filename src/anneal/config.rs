//! Annealing configuration.

/// Configuration for the annealing loop.
///
/// The defaults reproduce a long, slow cool: starting at five million and
/// shrinking by a factor of `1 - 2e-5` per iteration, the loop runs on the
/// order of 10^6 iterations regardless of problem size.
///
/// # Examples
///
/// ```
/// use rotaplan::anneal::AnnealConfig;
///
/// let config = AnnealConfig::default()
///     .with_initial_temperature(10_000.0)
///     .with_cooling_rate(0.001)
///     .with_seed(42);
/// ```
#[derive(Debug, Clone)]
pub struct AnnealConfig {
    /// Starting temperature. Higher values keep the walk exploratory longer.
    pub initial_temperature: f64,

    /// Per-iteration shrink fraction: `T <- T * (1 - cooling_rate)`.
    pub cooling_rate: f64,

    /// The loop stops once the temperature drops to this value or below.
    pub min_temperature: f64,

    /// Random seed for reproducibility. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for AnnealConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 5_000_000.0,
            cooling_rate: 2e-5,
            min_temperature: 1.0,
            seed: None,
        }
    }
}

impl AnnealConfig {
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_cooling_rate(mut self, rate: f64) -> Self {
        self.cooling_rate = rate;
        self
    }

    pub fn with_min_temperature(mut self, t: f64) -> Self {
        self.min_temperature = t;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.initial_temperature <= 0.0 {
            return Err("initial_temperature must be positive".into());
        }
        if self.min_temperature <= 0.0 {
            return Err("min_temperature must be positive".into());
        }
        if self.min_temperature >= self.initial_temperature {
            return Err("min_temperature must be less than initial_temperature".into());
        }
        if self.cooling_rate <= 0.0 || self.cooling_rate >= 1.0 {
            return Err(format!(
                "cooling_rate must be in (0, 1), got {}",
                self.cooling_rate
            ));
        }
        Ok(())
    }
}
