//! Sensitive-data redaction for credit-account logs.
//!
//! This crate scans arbitrary text (log lines, error messages) for embedded
//! payment-card numbers and social-security numbers, validates candidates,
//! renders a masked display form from a declarative template, and optionally
//! attaches a deterministic encrypted tag so authorized systems can
//! correlate redacted entries without ever persisting cleartext.
//! Database-credential fragments are stripped outright.
//!
//! The engine is a pure text transform: no shared mutable state, no caching,
//! no persistence. One [`Redactor`] may serve any number of threads.

pub mod error;
pub mod luhn;
pub mod patterns;
pub mod redactor;
pub mod template;

pub use error::{RedactionError, Result};
pub use patterns::SensitiveDataKind;
pub use redactor::{Cipher, InvalidCardAction, Redactor, RedactorConfig};
pub use template::{MaskTemplate, MaskToken};
