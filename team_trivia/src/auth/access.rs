//! SHA-256 access code validation.

use log::debug;
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

use super::errors::{AccessError, AccessResult};

/// Hex SHA-256 digest of the access code shipped with the game.
pub const DEFAULT_ACCESS_HASH: &str =
    "0182fc69169ad3febc5b995313df1c2e3b7ff44fd3e64ed811ceeec610cccd46";

/// Checks access codes against a stored digest and remembers whether this
/// session has passed the check.
#[derive(Clone, Debug)]
pub struct AccessGate {
    expected: [u8; 32],
    authenticated: bool,
}

impl AccessGate {
    /// Create a gate from a hex-encoded SHA-256 digest.
    ///
    /// # Errors
    ///
    /// Returns an error if `expected_hex` isn't a 64 digit hex string.
    pub fn new(expected_hex: &str) -> AccessResult<Self> {
        let bytes = hex::decode(expected_hex.trim())
            .map_err(|e| AccessError::InvalidHex(e.to_string()))?;
        let expected: [u8; 32] = bytes
            .as_slice()
            .try_into()
            .map_err(|_| AccessError::InvalidLength(bytes.len()))?;
        Ok(Self {
            expected,
            authenticated: false,
        })
    }

    /// Whether `code` matches. Codes are compared case-insensitively and
    /// ignoring surrounding whitespace. An empty code never matches.
    #[must_use]
    pub fn validate(&self, code: &str) -> bool {
        let normalized = code.trim().to_lowercase();
        if normalized.is_empty() {
            return false;
        }
        let digest = Sha256::digest(normalized.as_bytes());
        digest.as_slice().ct_eq(&self.expected).into()
    }

    /// Validate `code` and, if it matches, mark the session authenticated.
    /// A wrong code doesn't clear an earlier success.
    pub fn authenticate(&mut self, code: &str) -> bool {
        let valid = self.validate(code);
        if valid {
            self.authenticated = true;
        } else {
            debug!("access code rejected");
        }
        valid
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    pub fn clear(&mut self) {
        self.authenticated = false;
    }
}

impl Default for AccessGate {
    fn default() -> Self {
        Self::new(DEFAULT_ACCESS_HASH).expect("default access hash is a valid SHA-256 digest")
    }
}
