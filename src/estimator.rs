use std::time::{Duration, Instant};

use rand::Rng;

/// Radius of the inscribed quarter-circle. Sample points are drawn from
/// the integer range `[0, RADIUS]` on each axis.
pub const RADIUS: u32 = 100_000;

/// Per-sample π estimates in arrival order.
///
/// Holds exactly one entry per processed sample; the reported and final
/// values are the arithmetic mean of the entries so far.
#[derive(Debug, Clone, Default)]
pub struct RunningEstimate {
    estimates: Vec<f64>,
}

impl RunningEstimate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one per-sample estimate.
    pub fn push(&mut self, value: f64) {
        self.estimates.push(value);
    }

    /// Arithmetic mean of all estimates so far, `NaN` when empty.
    pub fn mean(&self) -> f64 {
        if self.estimates.is_empty() {
            return f64::NAN;
        }
        self.estimates.iter().sum::<f64>() / self.estimates.len() as f64
    }

    pub fn len(&self) -> usize {
        self.estimates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.estimates.is_empty()
    }

    /// The recorded estimates, in sample order.
    pub fn estimates(&self) -> &[f64] {
        &self.estimates
    }
}

/// Snapshot handed to the progress callback at each report interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Progress {
    /// Mean of all per-sample estimates up to `sample`.
    pub mean: f64,
    /// One-based index of the sample that triggered this report.
    pub sample: u64,
    /// Total number of samples in the run.
    pub total: u64,
    /// Wall time since the estimation loop started.
    pub elapsed: Duration,
}

/// Outcome of one estimation run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PiEstimate {
    /// Final π approximation: the mean of the whole estimate sequence.
    pub pi: f64,
    /// Number of samples processed.
    pub samples: u64,
    /// Total wall time of the estimation loop.
    pub elapsed: Duration,
}

/// Estimates π by Monte Carlo sampling of a quarter-circle.
///
/// Each sample draws a point uniformly from the `[0, RADIUS]` square and
/// classifies it against the inscribed quarter-circle; points exactly on
/// the boundary count as inside. After every sample the running
/// outside-percentage is folded into a per-sample π estimate, and the
/// final result is the mean of all of them.
///
/// The all-inside case takes a separate branch that uses the bare square
/// area, not the general formula's limit of four times it. That
/// discontinuity is inherited behavior and is kept as-is.
///
/// # Arguments
///
/// * `rng` - The random source; pass a seeded generator for reproducible runs
/// * `sample_count` - Number of points to draw, at least 1
/// * `report_interval` - Invoke `on_report` every this many samples; `0` never
/// * `on_report` - Progress callback; the loop itself never prints
///
/// # Returns
///
/// Returns a [`PiEstimate`] with the final mean and the loop's wall time.
///
/// # Examples
///
/// ```rust
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha20Rng;
/// use mcpi::estimate_pi;
///
/// let mut rng = ChaCha20Rng::seed_from_u64(42);
/// let result = estimate_pi(&mut rng, 50_000, 0, |_| {});
/// assert!((result.pi - std::f64::consts::PI).abs() < 0.15);
/// ```
pub fn estimate_pi<R, F>(
    rng: &mut R,
    sample_count: u64,
    report_interval: u64,
    mut on_report: F,
) -> PiEstimate
where
    R: Rng,
    F: FnMut(&Progress),
{
    let started = Instant::now();
    let square_area = (RADIUS as f64).powi(2);

    let mut running = RunningEstimate::new();
    let mut outside = 0u64;

    log::debug!("estimating pi over {} samples", sample_count);
    for i in 1..=sample_count {
        let x = rng.gen_range(0..=RADIUS) as f64;
        let y = rng.gen_range(0..=RADIUS) as f64;

        let distance = (x * x + y * y).sqrt();
        if distance > RADIUS as f64 {
            outside += 1;
        }

        let outside_pct = outside as f64 / i as f64 * 100.0;
        let circle_area = if outside_pct == 0.0 {
            square_area
        } else {
            (square_area - square_area / 100.0 * outside_pct) * 4.0
        };

        running.push(circle_area / square_area);

        if report_interval > 0 && i % report_interval == 0 {
            on_report(&Progress {
                mean: running.mean(),
                sample: i,
                total: sample_count,
                elapsed: started.elapsed(),
            });
        }
    }

    let pi = running.mean();
    log::debug!("estimation finished: pi = {}", pi);
    PiEstimate {
        pi,
        samples: sample_count,
        elapsed: started.elapsed(),
    }
}
