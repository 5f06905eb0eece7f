//! Form controller: input text, pending flag, message and the last verdict.

mod card;

pub use card::{AccountPanel, DomainPanel, ProviderPanel, StatusCard, provider_for};

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::warn;

use crate::pipeline::Verifier;
use crate::probe::MailProbe;
use crate::status::VerificationStatus;
use crate::validator::{extract_domain, is_valid_syntax};

pub const EMPTY_INPUT_MESSAGE: &str = "Email cannot be empty";
pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred during verification";

/// Snapshot of what the form displays.
#[cfg_attr(feature = "with-serde", derive(serde::Serialize))]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub email: String,
    pub status: VerificationStatus,
    pub is_checking: bool,
    pub error_message: String,
    pub domain: String,
}

impl FormState {
    pub fn card(&self) -> Option<StatusCard> {
        StatusCard::build(self.status, &self.domain)
    }
}

/// Cheap to clone; clones share the same form state and verifier.
///
/// Overlapping submissions are not fenced: each one writes its verdict when
/// it resolves, so the slowest run is what the form ends up showing.
pub struct FormController<P> {
    verifier: Arc<Verifier<P>>,
    state: Arc<Mutex<FormState>>,
}

impl<P> Clone for FormController<P> {
    fn clone(&self) -> Self {
        Self {
            verifier: Arc::clone(&self.verifier),
            state: Arc::clone(&self.state),
        }
    }
}

impl<P: MailProbe> FormController<P> {
    pub fn new(verifier: Verifier<P>) -> Self {
        Self {
            verifier: Arc::new(verifier),
            state: Arc::new(Mutex::new(FormState::default())),
        }
    }

    pub fn state(&self) -> FormState {
        self.lock().clone()
    }

    /// Runs one verification for `email` and returns the status it settled on.
    pub async fn submit(&self, email: &str) -> VerificationStatus {
        {
            let mut state = self.lock();
            state.email = email.to_string();
            state.is_checking = true;
            state.error_message.clear();
        }

        if email.trim().is_empty() {
            return self.finish(VerificationStatus::NoInput, String::new(), EMPTY_INPUT_MESSAGE);
        }

        if !is_valid_syntax(email) {
            return self.finish(VerificationStatus::Invalid, String::new(), "");
        }

        let domain = match extract_domain(email) {
            Ok(domain) => domain,
            Err(err) => {
                warn!(error = %err, "verification failed");
                return self.finish(VerificationStatus::Unknown, String::new(), GENERIC_ERROR_MESSAGE);
            }
        };
        self.lock().domain = domain.clone();

        match self.verifier.verify(email).await {
            Ok(VerificationStatus::NoInput) => {
                self.finish(VerificationStatus::NoInput, domain, EMPTY_INPUT_MESSAGE)
            }
            Ok(status) => self.finish(status, domain, ""),
            Err(err) => {
                warn!(error = %err, "verification failed");
                self.finish(VerificationStatus::Unknown, domain, GENERIC_ERROR_MESSAGE)
            }
        }
    }

    fn finish(&self, status: VerificationStatus, domain: String, message: &str) -> VerificationStatus {
        let mut state = self.lock();
        state.status = status;
        state.domain = domain;
        state.error_message = message.to_string();
        state.is_checking = false;
        status
    }

    fn lock(&self) -> MutexGuard<'_, FormState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
