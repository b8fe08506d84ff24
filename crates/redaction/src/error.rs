//! Error types for the redaction engine.

use thiserror::Error;

/// Errors raised while redacting a text value.
///
/// The template variants indicate an inconsistency between a pattern's
/// canonical value and its mask template. That is a defect in the catalog,
/// not a caller input problem; the call aborts instead of emitting a
/// corrupted masked value.
#[derive(Error, Debug)]
pub enum RedactionError {
    #[error("mask template {template:?} consumes more than the {available} available characters")]
    TemplateOverrun { template: String, available: usize },

    #[error("mask template {template:?} left {remaining} source characters unconsumed")]
    TemplateUnderrun { template: String, remaining: usize },

    #[error("cipher failure: {0}")]
    Cipher(#[from] credlog_crypto::CryptoError),
}

/// Result type alias using [`RedactionError`].
pub type Result<T> = std::result::Result<T, RedactionError>;
