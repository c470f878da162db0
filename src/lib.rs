pub mod config;
pub mod error;
pub mod estimator;
pub mod randomness;

pub use config::Config;
pub use error::{Error, Result};
pub use estimator::{estimate_pi, PiEstimate, Progress, RunningEstimate, RADIUS};
pub use randomness::even_percentage;
