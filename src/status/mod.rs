//! Verification verdicts and how each one is displayed.

mod presentation;

pub use presentation::{Icon, Presentation, Tone};

use std::fmt;

/// Outcome of one pipeline run. `NoInput` stands for "nothing to verify" and
/// has no presentation.
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "with-serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VerificationStatus {
    Safe,
    Role,
    CatchAll,
    Disposable,
    Invalid,
    InboxFull,
    Disabled,
    Spamtrap,
    Unknown,
    #[default]
    #[cfg_attr(feature = "with-serde", serde(rename = "none"))]
    NoInput,
}

impl VerificationStatus {
    pub const ALL: [Self; 10] = [
        Self::Safe,
        Self::Role,
        Self::CatchAll,
        Self::Disposable,
        Self::Invalid,
        Self::InboxFull,
        Self::Disabled,
        Self::Spamtrap,
        Self::Unknown,
        Self::NoInput,
    ];

    /// Statuses the mailbox check draws from when the mailbox is reported missing.
    pub const MAILBOX_FAILURES: [Self; 3] = [Self::Invalid, Self::InboxFull, Self::Disabled];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Safe => "safe",
            Self::Role => "role",
            Self::CatchAll => "catchAll",
            Self::Disposable => "disposable",
            Self::Invalid => "invalid",
            Self::InboxFull => "inboxFull",
            Self::Disabled => "disabled",
            Self::Spamtrap => "spamtrap",
            Self::Unknown => "unknown",
            Self::NoInput => "none",
        }
    }

    /// Display entry for this status; `None` for [`VerificationStatus::NoInput`].
    pub fn presentation(self) -> Option<&'static Presentation> {
        presentation::lookup(self)
    }

    /// Mail can be sent (possibly with caution).
    pub fn is_deliverable(self) -> bool {
        matches!(self, Self::Safe | Self::Role | Self::CatchAll)
    }
}

impl fmt::Display for VerificationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_match_wire_format() {
        assert_eq!(VerificationStatus::CatchAll.to_string(), "catchAll");
        assert_eq!(VerificationStatus::InboxFull.to_string(), "inboxFull");
        assert_eq!(VerificationStatus::NoInput.to_string(), "none");
    }

    #[test]
    fn default_is_no_input() {
        assert_eq!(VerificationStatus::default(), VerificationStatus::NoInput);
    }

    #[test]
    fn deliverable_set() {
        let deliverable: Vec<_> = VerificationStatus::ALL
            .into_iter()
            .filter(|s| s.is_deliverable())
            .collect();
        assert_eq!(
            deliverable,
            vec![
                VerificationStatus::Safe,
                VerificationStatus::Role,
                VerificationStatus::CatchAll
            ]
        );
    }

    #[cfg(feature = "with-serde")]
    #[test]
    fn serde_uses_camel_case_names() {
        for status in VerificationStatus::ALL {
            let json = serde_json::to_string(&status).expect("serialize");
            assert_eq!(json, format!("\"{}\"", status.as_str()));
            let back: VerificationStatus = serde_json::from_str(&json).expect("deserialize");
            assert_eq!(back, status);
        }
    }
}
