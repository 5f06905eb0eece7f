use thiserror::Error;

use crate::validator::EmailError;

/// Failures of the simulated checks.
#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("{name} must be within [0, 1], got {value}")]
    InvalidProbability { name: &'static str, value: f64 },
    #[error("random source poisoned by a panicked task")]
    RandomSourcePoisoned,
    #[error("malformed address: {source}")]
    MalformedAddress {
        #[from]
        source: EmailError,
    },
}
