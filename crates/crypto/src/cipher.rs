//! AES-256-CBC cipher with process-wide fixed parameters.

use aes::Aes256;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use cbc::cipher::{block_padding::Pkcs7, BlockEncryptMut, KeyIvInit};
use pbkdf2::pbkdf2_hmac;
use sha2::Sha256;
use thiserror::Error;
use zeroize::ZeroizeOnDrop;

type Aes256CbcEnc = cbc::Encryptor<Aes256>;

/// Initialization vector length in bytes.
pub const IV_LENGTH: usize = 16;

/// PBKDF2 salt length in bytes.
pub const SALT_LENGTH: usize = 16;

/// Derived AES-256 key length in bytes.
const KEY_LENGTH: usize = 32;

/// Errors from cipher construction or encryption.
#[derive(Error, Debug)]
pub enum CryptoError {
    #[error("cipher passphrase must not be empty")]
    EmptyPassphrase,

    #[error("key derivation requires at least one iteration")]
    ZeroIterations,

    #[error("cipher failure: {0}")]
    Other(String),
}

/// Process-wide cipher parameters.
///
/// All four values are fixed for the process lifetime. The defaults are
/// development values; deployments supply their own passphrase.
#[derive(Debug, Clone)]
pub struct CipherConfig {
    /// Passphrase the AES key is derived from.
    pub passphrase: String,
    /// Fixed initialization vector. Reused on purpose: identical plaintext
    /// must yield identical ciphertext.
    pub iv: [u8; IV_LENGTH],
    /// PBKDF2 salt.
    pub salt: [u8; SALT_LENGTH],
    /// PBKDF2 iteration count.
    pub iterations: u32,
}

impl Default for CipherConfig {
    fn default() -> Self {
        Self {
            passphrase: "credlog-correlation-key".to_string(),
            iv: *b"credlog-fixed-iv",
            salt: *b"credlog-tag-salt",
            iterations: 1000,
        }
    }
}

/// Deterministic AES-256-CBC cipher.
///
/// The key is derived once at construction via PBKDF2-HMAC-SHA-256 and held
/// for the process lifetime; the derived key is zeroized on drop. Encryption
/// output is the base64 of the PKCS7-padded ciphertext.
#[derive(ZeroizeOnDrop)]
pub struct DeterministicCipher {
    key: [u8; KEY_LENGTH],
    iv: [u8; IV_LENGTH],
}

impl DeterministicCipher {
    /// Derive the key and build a cipher from the given parameters.
    pub fn new(config: &CipherConfig) -> Result<Self, CryptoError> {
        if config.passphrase.is_empty() {
            return Err(CryptoError::EmptyPassphrase);
        }
        if config.iterations == 0 {
            return Err(CryptoError::ZeroIterations);
        }

        let mut key = [0u8; KEY_LENGTH];
        pbkdf2_hmac::<Sha256>(
            config.passphrase.as_bytes(),
            &config.salt,
            config.iterations,
            &mut key,
        );

        Ok(Self {
            key,
            iv: config.iv,
        })
    }

    /// Build a cipher from the default development parameters.
    pub fn with_defaults() -> Result<Self, CryptoError> {
        Self::new(&CipherConfig::default())
    }

    /// Encrypt a plaintext value and return its base64 tag.
    ///
    /// Identical plaintext always yields an identical tag.
    pub fn encrypt(&self, plaintext: &str) -> Result<String, CryptoError> {
        let encryptor = Aes256CbcEnc::new_from_slices(&self.key, &self.iv)
            .map_err(|e| CryptoError::Other(e.to_string()))?;
        let ciphertext = encryptor.encrypt_padded_vec_mut::<Pkcs7>(plaintext.as_bytes());
        Ok(BASE64.encode(ciphertext))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_encrypt_is_deterministic() {
        let cipher = DeterministicCipher::with_defaults().unwrap();
        let first = cipher.encrypt("4111111111111111").unwrap();
        let second = cipher.encrypt("4111111111111111").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_distinct_plaintexts_get_distinct_tags() {
        let cipher = DeterministicCipher::with_defaults().unwrap();
        let card = cipher.encrypt("4111111111111111").unwrap();
        let ssn = cipher.encrypt("111111111").unwrap();
        assert_ne!(card, ssn);
    }

    #[test]
    fn test_tag_is_base64_of_padded_blocks() {
        let cipher = DeterministicCipher::with_defaults().unwrap();
        // 9 bytes pad to one 16-byte block, 16 bytes pad to two.
        let one_block = cipher.encrypt("111111111").unwrap();
        assert_eq!(one_block.len(), 24);
        let two_blocks = cipher.encrypt("4111111111111111").unwrap();
        assert_eq!(two_blocks.len(), 44);
    }

    #[test]
    fn test_passphrase_changes_the_tag() {
        let cipher = DeterministicCipher::with_defaults().unwrap();
        let other = DeterministicCipher::new(&CipherConfig {
            passphrase: "another-passphrase".to_string(),
            ..CipherConfig::default()
        })
        .unwrap();
        assert_ne!(
            cipher.encrypt("111111111").unwrap(),
            other.encrypt("111111111").unwrap()
        );
    }

    #[test]
    fn test_empty_passphrase_is_rejected() {
        let config = CipherConfig {
            passphrase: String::new(),
            ..CipherConfig::default()
        };
        assert!(matches!(
            DeterministicCipher::new(&config),
            Err(CryptoError::EmptyPassphrase)
        ));
    }

    #[test]
    fn test_zero_iterations_is_rejected() {
        let config = CipherConfig {
            iterations: 0,
            ..CipherConfig::default()
        };
        assert!(matches!(
            DeterministicCipher::new(&config),
            Err(CryptoError::ZeroIterations)
        ));
    }
}
