use crate::error::{Error, Result};

/// Default number of Monte Carlo samples per run.
pub const DEFAULT_SAMPLE_COUNT: u64 = 1_000_000;

/// Default progress-report cadence, in samples. `0` disables reporting.
pub const DEFAULT_REPORT_INTERVAL: u64 = 50_000;

/// Resolved settings for one estimation run.
///
/// Example:
/// ```rust
/// use mcpi::Config;
///
/// let config = Config::from_args(&[]);
/// assert_eq!(config, Config::default());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Number of samples drawn by both the randomness check and the
    /// estimation loop. Always at least 1.
    pub sample_count: u64,
    /// Emit a progress report every this many samples; `0` means never.
    pub report_interval: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sample_count: DEFAULT_SAMPLE_COUNT,
            report_interval: DEFAULT_REPORT_INTERVAL,
        }
    }
}

impl Config {
    /// Builds a configuration from already-validated values.
    ///
    /// Returns an error when `sample_count` is zero; any report interval
    /// is accepted.
    pub fn new(sample_count: u64, report_interval: u64) -> Result<Self> {
        if sample_count == 0 {
            return Err(Error::InvalidSampleCount(sample_count));
        }
        Ok(Self {
            sample_count,
            report_interval,
        })
    }

    /// Resolves a configuration from positional CLI arguments.
    ///
    /// The first argument is the sample count, the second the report
    /// interval. Arguments are parsed as numbers and truncated to
    /// integers; a missing, malformed, or out-of-range value falls back
    /// to its default without a warning. The report interval is only
    /// read when exactly two arguments are present.
    pub fn from_args(args: &[String]) -> Self {
        let sample_count = args
            .first()
            .and_then(|arg| arg.parse::<f64>().ok())
            .filter(|&n| n.is_finite() && n >= 1.0)
            .map(|n| n as u64)
            .unwrap_or(DEFAULT_SAMPLE_COUNT);

        let report_interval = if args.len() == 2 {
            args[1]
                .parse::<f64>()
                .ok()
                .filter(|&n| n.is_finite() && n >= 0.0)
                .map(|n| n as u64)
                .unwrap_or(DEFAULT_REPORT_INTERVAL)
        } else {
            DEFAULT_REPORT_INTERVAL
        };

        Self {
            sample_count,
            report_interval,
        }
    }
}
