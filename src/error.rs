use thiserror::Error;

/// Errors reported by validating constructors in this crate.
///
/// The sampling loop itself cannot fail; the only checked input is the
/// run configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// The estimation loop needs at least one sample.
    #[error("sample count must be at least 1, got {0}")]
    InvalidSampleCount(u64),
}

pub type Result<T> = std::result::Result<T, Error>;
