//! Iterated Local Search configuration.

/// Configuration parameters for Iterated Local Search.
///
/// # Examples
///
/// ```
/// use lon_sampler::ils::IlsConfig;
///
/// let config = IlsConfig::default()
///     .with_non_improving_iters(250)
///     .with_first_improvement(false);
/// assert_eq!(config.non_improving_iters, 250);
/// assert!(!config.first_improvement);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IlsConfig {
    /// Number of consecutive non-improving perturbation attempts after
    /// which the search stops.
    pub non_improving_iters: usize,

    /// True for first improvement (randomized scan order, stop at the
    /// first improving flip); false for best improvement (full scan,
    /// most improving flip wins).
    pub first_improvement: bool,

    /// Random seed (None for default seed).
    pub seed: Option<u64>,
}

impl Default for IlsConfig {
    fn default() -> Self {
        Self {
            non_improving_iters: 100,
            first_improvement: true,
            seed: None,
        }
    }
}

impl IlsConfig {
    /// Sets the non-improving attempt budget.
    pub fn with_non_improving_iters(mut self, n: usize) -> Self {
        self.non_improving_iters = n;
        self
    }

    /// Selects first or best improvement exploration.
    pub fn with_first_improvement(mut self, first: bool) -> Self {
        self.first_improvement = first;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
