use thiserror::Error;

use crate::probe::ProbeError;
use crate::validator::EmailError;

/// Errors that abort a verification run.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("address could not be split: {source}")]
    Address {
        #[from]
        source: EmailError,
    },
    #[error(transparent)]
    Probe(#[from] ProbeError),
    #[error("random source poisoned by a panicked task")]
    RandomSourcePoisoned,
}
