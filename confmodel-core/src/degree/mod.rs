//! Power-law degree sampling with a natural cutoff.
//!
//! Degrees follow the discrete law `p(k) = k^-gamma / Z` on
//! `[k_min, k_cut]`, where `k_cut = floor(k_min * n^(1 / (gamma - 1)))` is the
//! natural cutoff for `n` nodes and `Z` is a difference of Hurwitz zeta
//! values.
//!
//! Draws come from rejection sampling against the continuous Pareto envelope
//! `q(x) = (gamma - 1) k_min^(gamma - 1) x^-gamma`: a proposal `x` is drawn by
//! inverse CDF and `k = floor(x)` is accepted with probability proportional to
//! `p(k)` over the envelope mass on `[k, k + 1)`. That ratio peaks at `k_min`,
//! so the acceptance probability is the ratio divided by its value there. Only
//! ratios are evaluated, which keeps steep exponents free of overflow and
//! keeps the expected number of rounds bounded for every `gamma > 2`.

mod special;

use rand::{
    Rng,
    distributions::{Distribution, Open01},
};
use tracing::{debug, instrument};

use crate::{
    error::{Result, ensure_exponent, ensure_min_degree},
    graph::DegreeSequence,
};

use self::special::hurwitz_zeta;

/// Largest degree considered plausible for `nodes` draws from a power law.
///
/// Returns zero when `nodes` is zero.
///
/// # Errors
/// Returns [`crate::GraphError::InvalidExponent`] unless `gamma > 2` and
/// [`crate::GraphError::InvalidMinDegree`] when `k_min` is zero.
///
/// # Examples
/// ```
/// use confmodel_core::natural_cutoff;
///
/// // 2 * 100^(1/1.5) = 43.08...
/// assert_eq!(natural_cutoff(2.5, 100, 2)?, 43);
/// # Ok::<(), confmodel_core::GraphError>(())
/// ```
pub fn natural_cutoff(gamma: f64, nodes: usize, k_min: usize) -> Result<usize> {
    ensure_exponent(gamma)?;
    ensure_min_degree(k_min)?;
    Ok(cutoff(gamma, nodes, k_min))
}

fn cutoff(gamma: f64, nodes: usize, k_min: usize) -> usize {
    if nodes == 0 {
        return 0;
    }
    let scale = (nodes as f64).powf((gamma - 1.0).recip());
    (k_min as f64 * scale).floor() as usize
}

/// Discrete power law truncated at the natural cutoff.
///
/// Implements [`Distribution<usize>`], so it works with [`Rng::sample`].
///
/// # Examples
/// ```
/// use confmodel_core::TruncatedPowerLaw;
/// use rand::{Rng, SeedableRng, rngs::SmallRng};
///
/// let law = TruncatedPowerLaw::new(2.5, 2, 100).expect("parameters must be valid");
/// let mut rng = SmallRng::seed_from_u64(7);
/// let degree: usize = rng.sample(&law);
/// assert!((2..=law.cutoff()).contains(&degree));
/// ```
#[derive(Clone, Debug)]
pub struct TruncatedPowerLaw {
    gamma: f64,
    k_min: usize,
    k_cut: usize,
    norm_discrete: f64,
    peak: f64,
}

impl TruncatedPowerLaw {
    /// Prepares the law for `nodes` draws with exponent `gamma` and minimum
    /// degree `k_min`.
    ///
    /// `nodes` only determines the cutoff and must be positive for the law to
    /// have support; zero is treated as one.
    ///
    /// # Errors
    /// Returns [`crate::GraphError::InvalidExponent`] unless `gamma > 2` and
    /// [`crate::GraphError::InvalidMinDegree`] when `k_min` is zero.
    pub fn new(gamma: f64, k_min: usize, nodes: usize) -> Result<Self> {
        ensure_exponent(gamma)?;
        ensure_min_degree(k_min)?;
        let k_cut = cutoff(gamma, nodes.max(1), k_min);
        let norm_discrete =
            hurwitz_zeta(gamma, k_min as f64) - hurwitz_zeta(gamma, k_cut as f64 + 1.0);
        let mut law = Self {
            gamma,
            k_min,
            k_cut,
            norm_discrete,
            peak: 1.0,
        };
        law.peak = law.scaled_cell_mass(k_min);
        Ok(law)
    }

    /// Upper bound of the support.
    #[must_use]
    pub fn cutoff(&self) -> usize {
        self.k_cut
    }

    /// Lower bound of the support.
    #[must_use]
    pub fn k_min(&self) -> usize {
        self.k_min
    }

    /// Probability of drawing `k`; zero outside `[k_min, cutoff]`.
    #[must_use]
    pub fn pmf(&self, k: usize) -> f64 {
        if k < self.k_min || k > self.k_cut {
            return 0.0;
        }
        (k as f64).powf(-self.gamma) / self.norm_discrete
    }

    /// Envelope mass on `[k, k + 1)` times `k^gamma`, up to a constant.
    ///
    /// Equals `k * (1 - (k / (k + 1))^(gamma - 1))`, evaluated through
    /// `exp_m1` so that neither tiny nor steep cells lose precision.
    fn scaled_cell_mass(&self, k: usize) -> f64 {
        let k = k as f64;
        let log_ratio = -(self.gamma - 1.0) * k.recip().ln_1p();
        -k * log_ratio.exp_m1()
    }

    /// Probability of accepting a proposal that floors to `k >= k_min`.
    fn acceptance(&self, k: usize) -> f64 {
        self.peak / self.scaled_cell_mass(k)
    }

    fn draw_envelope<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        let u: f64 = rng.sample(Open01);
        self.k_min as f64 * u.powf((1.0 - self.gamma).recip())
    }

    /// Runs one rejection round, returning the accepted degree if any.
    fn propose<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<usize> {
        let x = self.draw_envelope(rng);
        let floor = x.floor();
        if floor > self.k_cut as f64 {
            return None;
        }
        let k = floor as usize;
        let u: f64 = rng.sample(Open01);
        (u <= self.acceptance(k)).then_some(k)
    }
}

impl Distribution<usize> for TruncatedPowerLaw {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        loop {
            if let Some(k) = self.propose(rng) {
                return k;
            }
        }
    }
}

/// Draws `nodes` degrees from a power law truncated at its natural cutoff.
///
/// Every value lies in `[k_min, natural_cutoff(gamma, nodes, k_min)]`. The
/// parity of the sum is not controlled.
///
/// # Errors
/// Returns [`crate::GraphError::InvalidExponent`] unless `gamma > 2` and
/// [`crate::GraphError::InvalidMinDegree`] when `k_min` is zero.
///
/// # Examples
/// ```
/// use confmodel_core::sample_powerlaw_with_natural_cutoff;
/// use rand::{SeedableRng, rngs::SmallRng};
///
/// let mut rng = SmallRng::seed_from_u64(42);
/// let degrees = sample_powerlaw_with_natural_cutoff(&mut rng, 2.5, 100, 2)?;
/// assert_eq!(degrees.len(), 100);
/// assert!(degrees.iter().all(|&k| k >= 2));
/// # Ok::<(), confmodel_core::GraphError>(())
/// ```
#[instrument(name = "graph.sample_powerlaw", err, skip(rng))]
pub fn sample_powerlaw_with_natural_cutoff<R: Rng + ?Sized>(
    rng: &mut R,
    gamma: f64,
    nodes: usize,
    k_min: usize,
) -> Result<DegreeSequence> {
    let law = TruncatedPowerLaw::new(gamma, k_min, nodes)?;
    if nodes == 0 {
        return Ok(DegreeSequence::default());
    }
    let degrees: Vec<usize> = (0..nodes).map(|_| law.sample(rng)).collect();
    debug!(
        k_cut = law.cutoff(),
        max_degree = degrees.iter().max().copied().unwrap_or_default(),
        "degree sequence sampled"
    );
    Ok(DegreeSequence::new(degrees))
}
