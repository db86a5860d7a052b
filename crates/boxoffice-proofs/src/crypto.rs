//! Ed25519 byte extraction helpers.

use crate::ProofError;

/// Extract 32 raw ed25519 public key bytes.
/// Accepts 32-byte (raw) or 33-byte (curve-type prefix + key) input.
pub fn ed25519_public_key_bytes(pk_raw: &[u8]) -> Result<[u8; 32], ProofError> {
    match pk_raw.len() {
        32 => pk_raw
            .try_into()
            .map_err(|_| ProofError::InvalidInput("Invalid ed25519 public key bytes".into())),
        33 => pk_raw
            .get(1..)
            .ok_or_else(|| ProofError::InvalidInput("Invalid ed25519 public key bytes".into()))?
            .try_into()
            .map_err(|_| ProofError::InvalidInput("Invalid ed25519 public key bytes".into())),
        _ => Err(ProofError::InvalidInput(
            "Invalid ed25519 public key bytes".into(),
        )),
    }
}

/// Extract 64 raw ed25519 signature bytes.
pub fn ed25519_signature_bytes(signature: &[u8]) -> Result<[u8; 64], ProofError> {
    signature
        .try_into()
        .map_err(|_| ProofError::InvalidInput("Invalid ed25519 signature bytes".into()))
}
