use phf::phf_set;

/// Providers whose MX presence is taken for granted.
pub(crate) const COMMON_MX_DOMAINS: phf::Set<&'static str> = phf_set! {
    "gmail.com", "yahoo.com", "hotmail.com", "outlook.com",
    "aol.com", "icloud.com", "protonmail.com", "mail.com",
    "zoho.com", "yandex.com", "gmx.com", "example.com",
};

pub(crate) const LIKELY_CATCH_ALL_DOMAINS: phf::Set<&'static str> = phf_set! {
    "company.com", "business.com", "enterprise.com", "startup.com",
    "agency.com", "firm.com", "corp.com", "inc.com", "catchall.com",
};

/// Substrings that make a local part look like a throwaway mailbox.
pub(crate) const GENERIC_LOCAL_PATTERNS: [&str; 10] = [
    "test",
    "example",
    "user",
    "info",
    "admin",
    "webmaster",
    "support",
    "noreply",
    "no-reply",
    "invalid",
];

pub(crate) fn is_common_mx_domain(domain: &str) -> bool {
    COMMON_MX_DOMAINS.contains(domain)
}

pub(crate) fn is_likely_catch_all(domain: &str) -> bool {
    LIKELY_CATCH_ALL_DOMAINS.contains(domain)
}

pub(crate) fn looks_generic(local: &str) -> bool {
    GENERIC_LOCAL_PATTERNS
        .iter()
        .any(|pattern| local.contains(pattern))
}
