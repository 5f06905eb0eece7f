//! Simulated deliverability checks.
//!
//! Nothing here touches the network: each check sleeps for a configured
//! latency, then draws from a seeded random source. [`MailProbe`] is the
//! seam the pipeline talks to, [`SimulatedProbe`] the stock implementation.

mod error;
mod lists;
mod options;

pub use error::ProbeError;
pub use options::ProbeOptions;

use std::sync::Mutex;

use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::validator::local_part;

#[async_trait]
pub trait MailProbe: Send + Sync {
    /// Does `domain` (lower-cased) accept mail at all?
    async fn has_mx_records(&self, domain: &str) -> Result<bool, ProbeError>;

    /// Does `domain` accept mail for any local part?
    async fn detect_catch_all(&self, domain: &str) -> Result<bool, ProbeError>;

    /// Does the mailbox behind `email` exist?
    async fn mailbox_exists(&self, email: &str) -> Result<bool, ProbeError>;
}

pub struct SimulatedProbe {
    options: ProbeOptions,
    rng: Mutex<StdRng>,
}

impl SimulatedProbe {
    pub fn new(options: ProbeOptions) -> Result<Self, ProbeError> {
        options.validate()?;
        let rng = seeded_rng(options.seed);
        Ok(Self {
            options,
            rng: Mutex::new(rng),
        })
    }

    /// `true` with probability `p`.
    fn draw(&self, p: f64) -> Result<bool, ProbeError> {
        let mut rng = self
            .rng
            .lock()
            .map_err(|_| ProbeError::RandomSourcePoisoned)?;
        Ok(rng.r#gen::<f64>() < p)
    }
}

#[async_trait]
impl MailProbe for SimulatedProbe {
    async fn has_mx_records(&self, domain: &str) -> Result<bool, ProbeError> {
        tokio::time::sleep(self.options.mx_latency).await;
        if lists::is_common_mx_domain(domain) {
            debug!(domain, "MX presence assumed for common provider");
            return Ok(true);
        }
        let found = self.draw(self.options.mx_probability)?;
        debug!(domain, found, "simulated MX lookup");
        Ok(found)
    }

    async fn detect_catch_all(&self, domain: &str) -> Result<bool, ProbeError> {
        tokio::time::sleep(self.options.catch_all_latency).await;
        let p = if lists::is_likely_catch_all(domain) {
            self.options.likely_catch_all_probability
        } else {
            self.options.catch_all_probability
        };
        let catch_all = self.draw(p)?;
        debug!(domain, catch_all, "simulated catch-all probe");
        Ok(catch_all)
    }

    async fn mailbox_exists(&self, email: &str) -> Result<bool, ProbeError> {
        tokio::time::sleep(self.options.mailbox_latency).await;
        let local = local_part(email)?;
        let generic = lists::looks_generic(&local);
        let p = if generic {
            self.options.generic_mailbox_probability
        } else {
            self.options.mailbox_probability
        };
        let exists = self.draw(p)?;
        debug!(local = %local, generic, exists, "simulated mailbox check");
        Ok(exists)
    }
}

pub(crate) fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}
