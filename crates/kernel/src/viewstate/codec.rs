//! Transport encoding for view-state snapshots.
//!
//! Token layout: `base64url(json)` or, with a signing key,
//! `base64url(json) "." base64url(hmac_sha256(key, payload))`. An absent
//! snapshot encodes to the empty string.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;
use tracing::{debug, warn};

use super::error::{StateError, StateResult};
use super::snapshot::Snapshot;

type HmacSha256 = Hmac<Sha256>;

const SIGNATURE_SEPARATOR: char = '.';

/// Encodes snapshots into opaque tokens and back.
#[derive(Clone, Default)]
pub struct Codec {
    key: Option<Vec<u8>>,
}

impl Codec {
    /// A codec that neither signs nor verifies.
    pub fn unsigned() -> Self {
        Self { key: None }
    }

    /// A codec that signs tokens and rejects tokens whose signature does
    /// not match.
    pub fn signed(key: impl AsRef<[u8]>) -> Self {
        Self {
            key: Some(key.as_ref().to_vec()),
        }
    }

    pub fn is_signed(&self) -> bool {
        self.key.is_some()
    }

    /// Encode a captured snapshot.
    pub fn encode(&self, snapshot: Option<&Snapshot>) -> StateResult<String> {
        let Some(snapshot) = snapshot else {
            return Ok(String::new());
        };

        let json = serde_json::to_vec(snapshot)?;
        let payload = URL_SAFE_NO_PAD.encode(json);

        let token = match &self.key {
            Some(key) => {
                let tag = sign(key, &payload)?;
                format!(
                    "{payload}{SIGNATURE_SEPARATOR}{}",
                    URL_SAFE_NO_PAD.encode(tag)
                )
            }
            None => payload,
        };

        debug!(bytes = token.len(), signed = self.is_signed(), "encoded view state");
        Ok(token)
    }

    /// Decode a token produced by [`Codec::encode`].
    pub fn decode(&self, token: &str) -> StateResult<Option<Snapshot>> {
        let token = token.trim();
        if token.is_empty() {
            return Ok(None);
        }

        let (payload, signature) = match token.split_once(SIGNATURE_SEPARATOR) {
            Some((payload, signature)) => (payload, Some(signature)),
            None => (token, None),
        };

        if let Some(key) = &self.key {
            let Some(signature) = signature else {
                warn!("rejecting unsigned view state token");
                return Err(StateError::Unsigned);
            };
            let expected = sign(key, payload)?;
            let submitted = URL_SAFE_NO_PAD.decode(signature)?;
            if !bool::from(expected.as_slice().ct_eq(submitted.as_slice())) {
                warn!("rejecting view state token with bad signature");
                return Err(StateError::Tampered);
            }
        }

        let json = URL_SAFE_NO_PAD.decode(payload)?;
        let snapshot = serde_json::from_slice(&json)?;
        Ok(Some(snapshot))
    }
}

impl std::fmt::Debug for Codec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Codec")
            .field("signed", &self.is_signed())
            .finish()
    }
}

fn sign(key: &[u8], payload: &str) -> StateResult<Vec<u8>> {
    let mut mac = HmacSha256::new_from_slice(key).map_err(|_| StateError::InvalidKey)?;
    mac.update(payload.as_bytes());
    Ok(mac.finalize().into_bytes().to_vec())
}
