//! Retry budgets and distribution parameters for the generators.

use crate::error::{Result, ensure_exponent, ensure_min_degree};

/// Retry budget for stub matching.
///
/// A trial is one attempt to consume every stub. `max_fails` bounds how many
/// consecutive rejected stub pairs a trial tolerates before it is abandoned,
/// and `max_trials` bounds how many trials run before the generator gives up.
///
/// # Examples
/// ```
/// use confmodel_core::MatchingParams;
///
/// let params = MatchingParams::default().with_max_trials(3);
/// assert_eq!(params.max_trials(), 3);
/// assert_eq!(params.max_fails(), 1000);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MatchingParams {
    max_trials: usize,
    max_fails: usize,
}

impl MatchingParams {
    /// Default number of full stub-matching trials.
    pub const DEFAULT_MAX_TRIALS: usize = 10;
    /// Default number of rejected pairs tolerated within one trial.
    pub const DEFAULT_MAX_FAILS: usize = 1000;

    /// Creates a budget with explicit trial and failure limits.
    #[must_use]
    pub const fn new(max_trials: usize, max_fails: usize) -> Self {
        Self {
            max_trials,
            max_fails,
        }
    }

    /// Overrides the number of trials.
    #[must_use]
    pub const fn with_max_trials(mut self, max_trials: usize) -> Self {
        self.max_trials = max_trials;
        self
    }

    /// Overrides the per-trial failure tolerance.
    #[must_use]
    pub const fn with_max_fails(mut self, max_fails: usize) -> Self {
        self.max_fails = max_fails;
        self
    }

    /// Returns the number of trials.
    #[must_use]
    pub const fn max_trials(&self) -> usize {
        self.max_trials
    }

    /// Returns the per-trial failure tolerance.
    #[must_use]
    pub const fn max_fails(&self) -> usize {
        self.max_fails
    }
}

impl Default for MatchingParams {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_TRIALS, Self::DEFAULT_MAX_FAILS)
    }
}

/// Parameters for scale-free generation.
///
/// Holds the power-law exponent, the minimum degree, how many degree
/// sequences may be drawn (`max_random`), and the matching budget used for
/// each drawn sequence.
///
/// # Examples
/// ```
/// use confmodel_core::{GraphError, ScaleFreeParams};
///
/// let params = ScaleFreeParams::new(2.5, 2).expect("parameters must be valid");
/// assert_eq!(params.max_random(), 10);
///
/// let err = ScaleFreeParams::new(1.5, 2).expect_err("gamma must exceed 2");
/// assert!(matches!(err, GraphError::InvalidExponent { .. }));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleFreeParams {
    gamma: f64,
    k_min: usize,
    max_random: usize,
    matching: MatchingParams,
}

impl ScaleFreeParams {
    /// Default number of degree sequences drawn before giving up.
    pub const DEFAULT_MAX_RANDOM: usize = 10;

    /// Creates parameters for exponent `gamma` and minimum degree `k_min`.
    ///
    /// # Errors
    /// Returns [`crate::GraphError::InvalidExponent`] unless `gamma > 2` and
    /// [`crate::GraphError::InvalidMinDegree`] when `k_min` is zero.
    pub fn new(gamma: f64, k_min: usize) -> Result<Self> {
        ensure_exponent(gamma)?;
        ensure_min_degree(k_min)?;
        Ok(Self {
            gamma,
            k_min,
            max_random: Self::DEFAULT_MAX_RANDOM,
            matching: MatchingParams::default(),
        })
    }

    /// Overrides how many degree sequences may be drawn.
    #[must_use]
    pub const fn with_max_random(mut self, max_random: usize) -> Self {
        self.max_random = max_random;
        self
    }

    /// Overrides the matching budget applied to each drawn sequence.
    #[must_use]
    pub const fn with_matching(mut self, matching: MatchingParams) -> Self {
        self.matching = matching;
        self
    }

    /// Returns the power-law exponent.
    #[must_use]
    pub const fn gamma(&self) -> f64 {
        self.gamma
    }

    /// Returns the minimum degree.
    #[must_use]
    pub const fn k_min(&self) -> usize {
        self.k_min
    }

    /// Returns how many degree sequences may be drawn.
    #[must_use]
    pub const fn max_random(&self) -> usize {
        self.max_random
    }

    /// Returns the per-sequence matching budget.
    #[must_use]
    pub const fn matching(&self) -> MatchingParams {
        self.matching
    }
}
