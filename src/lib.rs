#![forbid(unsafe_code)]
//! mailverdict — simulated deliverability verdicts for e-mail addresses.
//!
//! Syntax is checked for real; MX presence, catch-all and mailbox existence
//! are stand-ins that wait and then draw from a seeded random source.

pub mod form;
pub mod pipeline;
pub mod probe;
pub mod status;
pub mod validator;

pub use form::{FormController, FormState, StatusCard, provider_for};
pub use pipeline::{PipelineError, Verifier, is_role_account, verify_email};
pub use probe::{MailProbe, ProbeError, ProbeOptions, SimulatedProbe};
pub use status::{Icon, Presentation, Tone, VerificationStatus};
pub use validator::{EmailError, extract_domain, is_valid_syntax, local_part};
