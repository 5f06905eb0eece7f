use std::fmt;

use phf::phf_set;

use crate::status::{Presentation, VerificationStatus};

const FREE_PROVIDERS: phf::Set<&'static str> = phf_set! {
    "gmail.com", "yahoo.com", "hotmail.com", "outlook.com",
};

/// Cosmetic provider name: a substring match, not a lookup.
pub fn provider_for(domain: &str) -> &str {
    if domain.contains("gmail") {
        "google.com"
    } else if domain.contains("yahoo") {
        "yahoo.com"
    } else if domain.contains("hotmail") || domain.contains("outlook") {
        "microsoft.com"
    } else {
        domain
    }
}

#[cfg_attr(feature = "with-serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainPanel {
    pub name: String,
    pub accept_all: bool,
    pub disposable: bool,
    pub free: bool,
}

#[cfg_attr(feature = "with-serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountPanel {
    pub role: bool,
    pub disabled: bool,
    pub full_mailbox: bool,
}

#[cfg_attr(feature = "with-serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderPanel {
    pub domain: String,
}

/// Result panel shown under the form. Derived from `(status, domain)` only.
#[cfg_attr(feature = "with-serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusCard {
    pub status: VerificationStatus,
    pub presentation: &'static Presentation,
    pub domain: DomainPanel,
    pub account: AccountPanel,
    #[cfg_attr(feature = "with-serde", serde(skip_serializing_if = "Option::is_none"))]
    pub provider: Option<ProviderPanel>,
}

impl StatusCard {
    /// `None` when there is nothing to show (`NoInput`).
    pub fn build(status: VerificationStatus, domain: &str) -> Option<Self> {
        let presentation = status.presentation()?;
        Some(Self {
            status,
            presentation,
            domain: DomainPanel {
                name: domain.to_string(),
                accept_all: status == VerificationStatus::CatchAll,
                disposable: status == VerificationStatus::Disposable,
                free: FREE_PROVIDERS.contains(domain),
            },
            account: AccountPanel {
                role: status == VerificationStatus::Role,
                disabled: status == VerificationStatus::Disabled,
                full_mailbox: status == VerificationStatus::InboxFull,
            },
            provider: (!domain.is_empty()).then(|| ProviderPanel {
                domain: provider_for(domain).to_string(),
            }),
        })
    }

    /// Plain-text rendering used by the CLI.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for StatusCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = self.presentation;
        writeln!(f, "{} {}", p.icon.glyph(), p.description)?;
        writeln!(f)?;
        writeln!(f, "Status  {} ({})", p.label, p.label_tone)?;
        writeln!(f, "Reason  [{}] ({})", p.reason, p.reason_tone)?;
        writeln!(f)?;
        writeln!(f, "Domain")?;
        row(f, "Name", &self.domain.name)?;
        row(f, "Accept all", yes_no(self.domain.accept_all))?;
        row(f, "Disposable", yes_no(self.domain.disposable))?;
        row(f, "Free", yes_no(self.domain.free))?;
        writeln!(f, "Account")?;
        row(f, "Role", yes_no(self.account.role))?;
        row(f, "Disabled", yes_no(self.account.disabled))?;
        row(f, "Full mailbox", yes_no(self.account.full_mailbox))?;
        if let Some(provider) = &self.provider {
            writeln!(f, "Provider")?;
            row(f, "Domain", &provider.domain)?;
        }
        Ok(())
    }
}

fn row(f: &mut fmt::Formatter<'_>, key: &str, value: &str) -> fmt::Result {
    if value.is_empty() {
        writeln!(f, "  {key}")
    } else {
        writeln!(f, "  {key:<14}{value}")
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_mapping() {
        assert_eq!(provider_for("gmail.com"), "google.com");
        assert_eq!(provider_for("ymail.yahoo.co.uk"), "yahoo.com");
        assert_eq!(provider_for("mail.hotmail.com"), "microsoft.com");
        assert_eq!(provider_for("outlook.fr"), "microsoft.com");
        assert_eq!(provider_for("proton.me"), "proton.me");
    }

    #[test]
    fn no_card_without_status() {
        assert!(StatusCard::build(VerificationStatus::NoInput, "gmail.com").is_none());
    }

    #[test]
    fn panels_follow_status() {
        let card = StatusCard::build(VerificationStatus::CatchAll, "corp.com").expect("card");
        assert!(card.domain.accept_all);
        assert!(!card.domain.free);
        assert!(!card.account.role);

        let card = StatusCard::build(VerificationStatus::InboxFull, "gmail.com").expect("card");
        assert!(card.account.full_mailbox);
        assert!(card.domain.free);
        assert_eq!(card.provider.expect("provider").domain, "google.com");
    }

    #[test]
    fn provider_panel_needs_domain() {
        let card = StatusCard::build(VerificationStatus::Invalid, "").expect("card");
        assert!(card.provider.is_none());
    }

    #[test]
    fn renders_safe_card() {
        let card = StatusCard::build(VerificationStatus::Safe, "gmail.com").expect("card");
        insta::assert_snapshot!(card.render(), @r"
        ✔ You can safely send emails to this address, we have confirmation that the address does exist.

        Status  Deliverable (green)
        Reason  [ACCEPT EMAIL] (green)

        Domain
          Name          gmail.com
          Accept all    no
          Disposable    no
          Free          yes
        Account
          Role          no
          Disabled      no
          Full mailbox  no
        Provider
          Domain        google.com
        ");
    }

    #[test]
    fn display_and_render_agree() {
        let card = StatusCard::build(VerificationStatus::Disabled, "outlook.com").expect("card");
        assert_eq!(card.to_string(), card.render());
        assert!(card.render().ends_with("  Domain        microsoft.com\n"));
        assert!(card.render().contains("  Disabled      yes\n"));
    }

    #[test]
    fn renders_invalid_card_without_domain() {
        let card = StatusCard::build(VerificationStatus::Invalid, "").expect("card");
        let text = card.render();
        assert!(text.starts_with("✖ This email address is not available"));
        assert!(text.contains("Reason  [INVALID ADDRESS] (red)"));
        assert!(text.contains("  Name\n"));
        assert!(!text.contains("Provider"));
    }
}
