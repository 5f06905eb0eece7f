use std::time::Duration;

use super::ProbeError;

/// Controls latency and odds of the simulated checks.
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct ProbeOptions {
    pub mx_latency: Duration,
    pub catch_all_latency: Duration,
    pub mailbox_latency: Duration,
    /// Chance of MX presence for domains outside the common-provider list.
    pub mx_probability: f64,
    /// Chance of catch-all for domains in the likely-catch-all list.
    pub likely_catch_all_probability: f64,
    pub catch_all_probability: f64,
    /// Chance a mailbox exists when its local part looks generic (`test`, `admin`, ...).
    pub generic_mailbox_probability: f64,
    pub mailbox_probability: f64,
    /// Fixed seed for reproducible runs; entropy when `None`.
    pub seed: Option<u64>,
}

impl Default for ProbeOptions {
    fn default() -> Self {
        Self {
            mx_latency: Duration::from_millis(500),
            catch_all_latency: Duration::from_millis(800),
            mailbox_latency: Duration::from_millis(1000),
            mx_probability: 0.7,
            likely_catch_all_probability: 0.7,
            catch_all_probability: 0.2,
            generic_mailbox_probability: 0.2,
            mailbox_probability: 0.85,
            seed: None,
        }
    }
}

impl ProbeOptions {
    /// Default odds, no simulated latency.
    pub fn instant() -> Self {
        Self {
            mx_latency: Duration::ZERO,
            catch_all_latency: Duration::ZERO,
            mailbox_latency: Duration::ZERO,
            ..Self::default()
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sum of the three latencies, i.e. the duration of a run that reaches the mailbox check.
    pub fn total_latency(&self) -> Duration {
        self.mx_latency + self.catch_all_latency + self.mailbox_latency
    }

    pub fn validate(&self) -> Result<(), ProbeError> {
        let probabilities = [
            ("mx_probability", self.mx_probability),
            (
                "likely_catch_all_probability",
                self.likely_catch_all_probability,
            ),
            ("catch_all_probability", self.catch_all_probability),
            (
                "generic_mailbox_probability",
                self.generic_mailbox_probability,
            ),
            ("mailbox_probability", self.mailbox_probability),
        ];
        for (name, value) in probabilities {
            if !(0.0..=1.0).contains(&value) {
                return Err(ProbeError::InvalidProbability { name, value });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_simulated_odds() {
        let options = ProbeOptions::default();
        assert_eq!(options.total_latency(), Duration::from_millis(2300));
        assert!(options.validate().is_ok());
    }

    #[test]
    fn instant_has_no_latency() {
        assert_eq!(ProbeOptions::instant().total_latency(), Duration::ZERO);
    }

    #[test]
    fn rejects_out_of_range_probability() {
        let options = ProbeOptions {
            mailbox_probability: 1.5,
            ..ProbeOptions::default()
        };
        match options.validate() {
            Err(ProbeError::InvalidProbability { name, .. }) => {
                assert_eq!(name, "mailbox_probability")
            }
            other => panic!("expected invalid probability, got {other:?}"),
        }
    }

    #[test]
    fn rejects_nan() {
        let options = ProbeOptions {
            mx_probability: f64::NAN,
            ..ProbeOptions::default()
        };
        assert!(options.validate().is_err());
    }
}
