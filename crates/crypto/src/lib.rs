//! Deterministic cipher for redaction tags.
//!
//! This crate provides the symmetric cipher the redaction engine attaches to
//! masked log values. Identical plaintext always produces an identical tag,
//! so authorized systems can correlate redacted entries across logs and
//! equality-based tests stay repeatable. That determinism comes from a fixed
//! initialization vector: the scheme is obfuscation plus correlate-ability,
//! not strong confidentiality. Do not randomize the IV — it would break the
//! correlation property downstream consumers rely on.
//!
//! Decryption is owned by the platform's audit service and is deliberately
//! absent here.

pub mod cipher;

pub use cipher::{CipherConfig, CryptoError, DeterministicCipher};
