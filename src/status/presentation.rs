use std::fmt;

use super::VerificationStatus;

/// Color family used by the card.
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "with-serde", serde(rename_all = "lowercase"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Green,
    Blue,
    Amber,
    Red,
    Gray,
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Amber => "amber",
            Self::Red => "red",
            Self::Gray => "gray",
        })
    }
}

#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "with-serde", serde(rename_all = "snake_case"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    CheckCircle,
    AlertCircle,
    XCircle,
}

impl Icon {
    pub fn glyph(self) -> char {
        match self {
            Self::CheckCircle => '✔',
            Self::AlertCircle => '!',
            Self::XCircle => '✖',
        }
    }
}

/// Everything the card shows for one status.
#[cfg_attr(feature = "with-serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Presentation {
    pub status: VerificationStatus,
    pub label: &'static str,
    pub label_tone: Tone,
    pub reason: &'static str,
    pub reason_tone: Tone,
    pub description: &'static str,
    pub icon: Icon,
    pub icon_tone: Tone,
}

const PRESENTATIONS: [Presentation; 9] = [
    Presentation {
        status: VerificationStatus::Safe,
        label: "Deliverable",
        label_tone: Tone::Green,
        reason: "ACCEPT EMAIL",
        reason_tone: Tone::Green,
        description: "You can safely send emails to this address, we have confirmation that the address does exist.",
        icon: Icon::CheckCircle,
        icon_tone: Tone::Green,
    },
    Presentation {
        status: VerificationStatus::Role,
        label: "Deliverable (Role)",
        label_tone: Tone::Blue,
        reason: "ACCEPT EMAIL",
        reason_tone: Tone::Green,
        description: "This is a valid company role-related email address (not a personal one).",
        icon: Icon::CheckCircle,
        icon_tone: Tone::Green,
    },
    Presentation {
        status: VerificationStatus::CatchAll,
        label: "Deliverable (Catch-All)",
        label_tone: Tone::Blue,
        reason: "PROCEED WITH CAUTION",
        reason_tone: Tone::Blue,
        description: "This domain accepts all emails, even if the specific address doesn't exist.",
        icon: Icon::CheckCircle,
        icon_tone: Tone::Blue,
    },
    Presentation {
        status: VerificationStatus::Disposable,
        label: "Risky (Disposable)",
        label_tone: Tone::Amber,
        reason: "TEMPORARY EMAIL",
        reason_tone: Tone::Amber,
        description: "This is a temporary email address that may not be monitored long-term.",
        icon: Icon::AlertCircle,
        icon_tone: Tone::Amber,
    },
    Presentation {
        status: VerificationStatus::InboxFull,
        label: "Undeliverable (Full)",
        label_tone: Tone::Amber,
        reason: "INBOX FULL",
        reason_tone: Tone::Amber,
        description: "The inbox of this user is full and can no longer receive new emails.",
        icon: Icon::AlertCircle,
        icon_tone: Tone::Amber,
    },
    Presentation {
        status: VerificationStatus::Invalid,
        label: "Undeliverable",
        label_tone: Tone::Red,
        reason: "INVALID ADDRESS",
        reason_tone: Tone::Red,
        description: "This email address is not available or registered. Emails will bounce back.",
        icon: Icon::XCircle,
        icon_tone: Tone::Red,
    },
    Presentation {
        status: VerificationStatus::Disabled,
        label: "Undeliverable (Disabled)",
        label_tone: Tone::Red,
        reason: "ACCOUNT DISABLED",
        reason_tone: Tone::Red,
        description: "This account was valid before but has been disabled by the provider.",
        icon: Icon::XCircle,
        icon_tone: Tone::Red,
    },
    Presentation {
        status: VerificationStatus::Spamtrap,
        label: "Dangerous (Spamtrap)",
        label_tone: Tone::Red,
        reason: "SPAM TRAP",
        reason_tone: Tone::Red,
        description: "This is an email address specifically created to catch spammers.",
        icon: Icon::XCircle,
        icon_tone: Tone::Red,
    },
    Presentation {
        status: VerificationStatus::Unknown,
        label: "Unknown",
        label_tone: Tone::Gray,
        reason: "UNKNOWN STATUS",
        reason_tone: Tone::Gray,
        description: "We couldn't verify the status of this address.",
        icon: Icon::AlertCircle,
        icon_tone: Tone::Gray,
    },
];

pub(super) fn lookup(status: VerificationStatus) -> Option<&'static Presentation> {
    PRESENTATIONS.iter().find(|entry| entry.status == status)
}
