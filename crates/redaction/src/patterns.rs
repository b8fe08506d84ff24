//! Pattern catalog for sensitive value detection.
//!
//! The catalog is immutable, built once behind `LazyLock`, and safe for
//! unbounded concurrent reads.

use crate::template::MaskTemplate;
use regex::Regex;
use std::sync::LazyLock;

/// Pattern for payment-card numbers: 16-digit Visa/MasterCard or 15-digit
/// Amex, each group optionally separated by a single space or dash.
pub static CREDIT_CARD_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:4\d{3}|5[1-5]\d{2})[- ]?\d{4}[- ]?\d{4}[- ]?\d{4}|3[47]\d{2}[- ]?\d{6}[- ]?\d{5}")
        .unwrap()
});

/// Pattern for social-security numbers, 3-2-4 groups optionally separated by
/// a space or dash.
///
/// The rule anchors the whole input and wraps the number in greedy
/// wildcards, so capture group 1 lands on the right-most 9-digit shape and
/// a single scan never yields more than one occurrence. Kept that way for
/// compatibility with the systems consuming this output.
pub static SSN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^.*(\d{3}[- ]?\d{2}[- ]?\d{4}).*$").unwrap());

/// Pattern for database-credential fragments.
pub static CONNECTION_STRING_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"User Id=[^;]*;Password=[^;]*;").unwrap());

/// Canonical 16-digit card format: Visa (prefix 4) or MasterCard (51-55).
pub static CARD_FORMAT_16: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:4\d{15}|5[1-5]\d{14})$").unwrap());

/// Canonical 15-digit card format: Amex (prefix 34 or 37).
pub static CARD_FORMAT_15: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^3[47]\d{13}$").unwrap());

/// Display template for 16-digit cards.
pub static CARD16_TEMPLATE: LazyLock<MaskTemplate> =
    LazyLock::new(|| MaskTemplate::parse("XXXX-XXXX-XXXX-####"));

/// Display template for 15-digit cards.
pub static CARD15_TEMPLATE: LazyLock<MaskTemplate> =
    LazyLock::new(|| MaskTemplate::parse("XXXX-XXXXXX-X####"));

/// Display template for social-security numbers.
pub static SSN_TEMPLATE: LazyLock<MaskTemplate> =
    LazyLock::new(|| MaskTemplate::parse("XXX-XX-####"));

/// The kinds of sensitive value the engine recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensitiveDataKind {
    CreditCard,
    SocialSecurityNumber,
    ConnectionStringCredential,
}

/// One entry of the pattern catalog.
#[derive(Debug)]
pub struct PatternSpec {
    pub kind: SensitiveDataKind,
    pub detection: &'static Regex,
}

impl PatternSpec {
    /// Strip grouping punctuation from a raw match, leaving digits only.
    ///
    /// Connection-string matches are removed whole and never canonicalized.
    pub fn canonicalize(&self, raw: &str) -> String {
        raw.chars().filter(char::is_ascii_digit).collect()
    }
}

static CATALOG: LazyLock<Vec<PatternSpec>> = LazyLock::new(|| {
    vec![
        PatternSpec {
            kind: SensitiveDataKind::CreditCard,
            detection: &CREDIT_CARD_PATTERN,
        },
        PatternSpec {
            kind: SensitiveDataKind::SocialSecurityNumber,
            detection: &SSN_PATTERN,
        },
        PatternSpec {
            kind: SensitiveDataKind::ConnectionStringCredential,
            detection: &CONNECTION_STRING_PATTERN,
        },
    ]
});

/// All patterns, in the order the redaction phases run.
pub fn catalog() -> &'static [PatternSpec] {
    &CATALOG
}

/// Pick the display template matching a canonical card value.
///
/// Returns `None` when the value fits neither vendor format; such a match is
/// card-shaped but not maskable.
pub fn card_template(canonical: &str) -> Option<&'static MaskTemplate> {
    if CARD_FORMAT_16.is_match(canonical) {
        Some(&CARD16_TEMPLATE)
    } else if CARD_FORMAT_15.is_match(canonical) {
        Some(&CARD15_TEMPLATE)
    } else {
        None
    }
}
