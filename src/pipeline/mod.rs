//! Ordered verification: syntax, MX, role account, catch-all, mailbox.
//!
//! The first decisive step wins. Checks run one after the other even though
//! only the domain string links them.

mod error;

pub use error::PipelineError;

use std::sync::Mutex;

use rand::Rng;
use rand::rngs::StdRng;
use tracing::{debug, info};

use crate::probe::{MailProbe, ProbeOptions, SimulatedProbe, seeded_rng};
use crate::status::VerificationStatus;
use crate::validator::{extract_domain, is_valid_syntax, local_part};

/// Local parts addressed to a function rather than a person.
pub const ROLE_PREFIXES: [&str; 16] = [
    "info",
    "admin",
    "support",
    "contact",
    "help",
    "sales",
    "billing",
    "office",
    "mail",
    "webmaster",
    "hostmaster",
    "postmaster",
    "team",
    "marketing",
    "hello",
    "service",
];

/// `info`, `info.eu`, but not `infos` or `info-desk`.
pub fn is_role_account(local: &str) -> bool {
    ROLE_PREFIXES.iter().any(|prefix| {
        local == *prefix
            || local
                .strip_prefix(prefix)
                .is_some_and(|rest| rest.starts_with('.'))
    })
}

/// Runs the checks against a [`MailProbe`]. Owns the random source used to
/// pick a failure status when the mailbox is reported missing.
pub struct Verifier<P> {
    probe: P,
    rng: Mutex<StdRng>,
}

impl<P: MailProbe> Verifier<P> {
    pub fn new(probe: P, seed: Option<u64>) -> Self {
        Self {
            probe,
            rng: Mutex::new(seeded_rng(seed)),
        }
    }

    pub fn probe(&self) -> &P {
        &self.probe
    }

    pub async fn verify(&self, email: &str) -> Result<VerificationStatus, PipelineError> {
        if email.trim().is_empty() {
            debug!("empty input, nothing to verify");
            return Ok(VerificationStatus::NoInput);
        }

        if !is_valid_syntax(email) {
            info!(email, status = "invalid", "syntax check failed");
            return Ok(VerificationStatus::Invalid);
        }

        let domain = extract_domain(email)?;
        let status = self.verify_well_formed(email, &domain).await?;
        info!(email, domain = %domain, status = %status, "verification finished");
        Ok(status)
    }

    async fn verify_well_formed(
        &self,
        email: &str,
        domain: &str,
    ) -> Result<VerificationStatus, PipelineError> {
        if !self.probe.has_mx_records(domain).await? {
            return Ok(VerificationStatus::Invalid);
        }

        if is_role_account(&local_part(email)?) {
            return Ok(VerificationStatus::Role);
        }

        if self.probe.detect_catch_all(domain).await? {
            return Ok(VerificationStatus::CatchAll);
        }

        if !self.probe.mailbox_exists(email).await? {
            return self.pick_mailbox_failure();
        }

        Ok(VerificationStatus::Safe)
    }

    fn pick_mailbox_failure(&self) -> Result<VerificationStatus, PipelineError> {
        let mut rng = self
            .rng
            .lock()
            .map_err(|_| PipelineError::RandomSourcePoisoned)?;
        let failures = VerificationStatus::MAILBOX_FAILURES;
        Ok(failures[rng.gen_range(0..failures.len())])
    }
}

impl Verifier<SimulatedProbe> {
    /// Stock verifier. With a seed, the probe and the failure pick use
    /// distinct streams derived from it.
    pub fn simulated(options: ProbeOptions) -> Result<Self, PipelineError> {
        let pick_seed = options.seed.map(|seed| seed.wrapping_add(0x9E37_79B9_7F4A_7C15));
        let probe = SimulatedProbe::new(options)?;
        Ok(Self::new(probe, pick_seed))
    }
}

/// One-shot verification with default odds and latencies.
pub async fn verify_email(email: &str) -> Result<VerificationStatus, PipelineError> {
    Verifier::simulated(ProbeOptions::default())?
        .verify(email)
        .await
}
