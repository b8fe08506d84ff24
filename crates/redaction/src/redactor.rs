//! The redaction pipeline.

use crate::error::Result;
use crate::luhn;
use crate::patterns::{self, PatternSpec, SensitiveDataKind};
use credlog_crypto::{CryptoError, DeterministicCipher};
use tracing::{debug, trace};

/// Contract for the cipher used to tag redacted values.
///
/// Implementations must be deterministic: identical plaintext always yields
/// an identical tag. Downstream audit correlation depends on it.
pub trait Cipher {
    /// Encrypt a canonical sensitive value into its tag.
    fn encrypt(&self, plaintext: &str) -> std::result::Result<String, CryptoError>;
}

impl Cipher for DeterministicCipher {
    fn encrypt(&self, plaintext: &str) -> std::result::Result<String, CryptoError> {
        DeterministicCipher::encrypt(self, plaintext)
    }
}

/// What to do with a card-shaped match that fails Luhn or vendor-format
/// validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidCardAction {
    /// Replace the match with an empty display (legacy behavior; in
    /// [`Redactor::redact_and_tag`] a bare tag is still emitted). Note this
    /// drops the original digits from the output.
    MaskEmpty,
    /// Leave the raw match untouched in the output.
    LeaveUntouched,
}

/// Configuration for the redactor.
#[derive(Debug, Clone)]
pub struct RedactorConfig {
    /// Handling of card-shaped matches that fail validation.
    pub invalid_card: InvalidCardAction,
}

impl Default for RedactorConfig {
    fn default() -> Self {
        Self {
            invalid_card: InvalidCardAction::MaskEmpty,
        }
    }
}

/// A detected sensitive value: the raw substring as found, with its original
/// punctuation, and the canonical digits-only form.
struct SensitiveMatch<'a> {
    raw: &'a str,
    canonical: String,
}

/// The text that replaces a match: a masked display plus an optional cipher
/// tag.
struct RedactedSegment {
    display: String,
    tag: Option<String>,
}

impl RedactedSegment {
    fn replacement(&self) -> String {
        match &self.tag {
            Some(tag) => format!("{} ({})", self.display, tag),
            None => self.display.clone(),
        }
    }
}

/// Scans text for sensitive values and substitutes masked displays.
///
/// Both operations run the same three strictly ordered phases — credit
/// cards, then social-security numbers, then connection-string credentials —
/// where each phase's output becomes the next phase's input. The redactor
/// holds no per-call state; one instance may serve any number of threads.
pub struct Redactor {
    config: RedactorConfig,
}

impl Redactor {
    /// Create a redactor with default configuration.
    pub fn new() -> Self {
        Self::with_config(RedactorConfig::default())
    }

    /// Create a redactor with custom configuration.
    pub fn with_config(config: RedactorConfig) -> Self {
        Self { config }
    }

    /// Mask all recognized sensitive values in a text.
    pub fn redact(&self, text: &str) -> Result<String> {
        self.run(text, None)
    }

    /// Mask all recognized sensitive values and append each one's cipher
    /// tag.
    ///
    /// A cipher failure aborts the call; the engine never degrades to
    /// emitting untagged or unmasked output on error.
    pub fn redact_and_tag<C: Cipher>(&self, text: &str, cipher: &C) -> Result<String> {
        self.run(text, Some(cipher))
    }

    fn run(&self, text: &str, cipher: Option<&dyn Cipher>) -> Result<String> {
        let mut out = text.to_string();
        for spec in patterns::catalog() {
            out = match spec.kind {
                SensitiveDataKind::CreditCard => self.mask_cards(spec, &out, cipher)?,
                SensitiveDataKind::SocialSecurityNumber => self.mask_ssn(spec, &out, cipher)?,
                SensitiveDataKind::ConnectionStringCredential => strip_credentials(spec, &out),
            };
        }
        Ok(out)
    }

    fn mask_cards(
        &self,
        spec: &PatternSpec,
        text: &str,
        cipher: Option<&dyn Cipher>,
    ) -> Result<String> {
        let matches: Vec<SensitiveMatch> = spec
            .detection
            .find_iter(text)
            .map(|m| SensitiveMatch {
                raw: m.as_str(),
                canonical: spec.canonicalize(m.as_str()),
            })
            .collect();

        let mut out = text.to_string();
        for m in matches {
            let display = match (
                patterns::card_template(&m.canonical),
                luhn::is_valid(&m.canonical),
            ) {
                (Some(template), true) => template.render(&m.canonical)?,
                _ => {
                    if self.config.invalid_card == InvalidCardAction::LeaveUntouched {
                        debug!(
                            "card-shaped match ({} digits) failed validation, left in place",
                            m.canonical.len()
                        );
                        continue;
                    }
                    debug!(
                        "card-shaped match ({} digits) failed validation, masking empty",
                        m.canonical.len()
                    );
                    String::new()
                }
            };

            let segment = seal(display, &m.canonical, cipher)?;
            out = out.replace(m.raw, &segment.replacement());
            trace!("substituted card match ({} chars)", m.raw.len());
        }
        Ok(out)
    }

    fn mask_ssn(
        &self,
        spec: &PatternSpec,
        text: &str,
        cipher: Option<&dyn Cipher>,
    ) -> Result<String> {
        // The anchored detection rule yields at most one match per call.
        let raw = match spec.detection.captures(text) {
            Some(caps) => match caps.get(1) {
                Some(group) => group.as_str(),
                None => return Ok(text.to_string()),
            },
            None => return Ok(text.to_string()),
        };

        let canonical = spec.canonicalize(raw);
        let display = patterns::SSN_TEMPLATE.render(&canonical)?;
        let segment = seal(display, &canonical, cipher)?;
        trace!("substituted SSN match ({} chars)", raw.len());
        Ok(text.replace(raw, &segment.replacement()))
    }
}

impl Default for Redactor {
    fn default() -> Self {
        Self::new()
    }
}

/// Encrypt the canonical value when a cipher is present and pair the tag
/// with the display text.
fn seal(
    display: String,
    canonical: &str,
    cipher: Option<&dyn Cipher>,
) -> Result<RedactedSegment> {
    let tag = match cipher {
        Some(cipher) => Some(cipher.encrypt(canonical)?),
        None => None,
    };
    Ok(RedactedSegment { display, tag })
}

/// Remove credential fragments outright, in both operations, with no
/// masking or tagging.
fn strip_credentials(spec: &PatternSpec, text: &str) -> String {
    let raws: Vec<&str> = spec.detection.find_iter(text).map(|m| m.as_str()).collect();
    let mut out = text.to_string();
    for raw in raws {
        debug!("removing credential fragment ({} chars)", raw.len());
        out = out.replace(raw, "");
    }
    out
}
